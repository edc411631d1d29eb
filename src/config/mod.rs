mod settings;

pub use settings::{AppSettings, DEFAULT_POOL_SIZE};
