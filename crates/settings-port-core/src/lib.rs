pub mod export;
pub mod import;
pub mod merge;
pub mod validate;

pub use export::{build_snapshot, export_file_name, serialize_snapshot};
pub use import::{apply_snapshot, import_snapshot, ImportError, ImportSummary};
pub use merge::reconcile_item;
pub use validate::{validate_snapshot, ValidationError};
