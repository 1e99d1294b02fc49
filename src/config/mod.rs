pub mod settings;

pub use settings::{ApiSettings, DatabaseSettings, LoggingSettings, Settings};
