pub mod model;

pub use model::{FeedConfig, LoggingConfig, Settings, load_settings_from};
