pub mod config;
pub mod paths;

pub use config::Config;
pub use paths::{base_path_override, PathManager};

/// Product name used for the export artifact filename.
pub const PRODUCT_NAME: &str = "rewind";
