pub mod config;
pub mod core;
pub mod detection;
pub mod error;

pub use config::DetectorConfig;
pub use detection::{Detection, LanguageDetector, Script};
pub use error::{DetectError, Result};
