pub mod client;
pub mod http;
pub mod models;
pub mod traits;

pub use client::HarvestApi;
pub use models::{Client, DayEntry, Project, Task, User};
pub use traits::TimeTrackingService;
