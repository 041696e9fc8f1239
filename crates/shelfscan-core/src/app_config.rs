use std::path::PathBuf;

/// Deployment stage named by `SHELFSCAN_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl Environment {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime settings for the purification batch.
///
/// `raw_file` is the scraper's dump (a JSON array of listing items) and
/// `data_file` is where the structured [`crate::ProductRecord`] array lands.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub data_dir: PathBuf,
    pub raw_file: PathBuf,
    pub data_file: PathBuf,
}
