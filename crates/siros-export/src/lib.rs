pub mod lookup;
pub mod pipeline;
pub mod row;
pub mod writer;

pub use lookup::{LookupTables, ProjectInfo};
pub use pipeline::{run_backup, BackupOptions, BackupSummary};
pub use row::{format_entry, round_hours, sort_rows, ColumnSchema, ExportRow};
pub use writer::write_csv;
