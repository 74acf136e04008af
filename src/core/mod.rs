pub mod defaults;
pub mod error;

// Re-export common types for convenience
pub use defaults::{load_from_str, load_or_default, Defaults, DotkitConfig};
pub use error::{Error, ErrorCode, Result};
