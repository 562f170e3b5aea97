use thiserror::Error;

#[derive(Error, Debug)]
pub enum StdioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid color mode: {0} (expected auto, always or never)")]
    InvalidColorMode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, StdioError>;
