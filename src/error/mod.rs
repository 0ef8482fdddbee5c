mod config;
mod navigation;
mod storage;

pub use config::ConfigError;
pub use navigation::NavigationError;
pub use storage::StorageError;
