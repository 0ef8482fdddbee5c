use std::fmt::{ Display, Formatter };

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    DuplicateTable(String),
    InvalidEntry(String),
    UnknownPreset(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "I/O Error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "Parse Error: {}", msg),
            ConfigError::DuplicateTable(table) => write!(f, "Duplicate table id: {}", table),
            ConfigError::InvalidEntry(msg) => write!(f, "Invalid route entry: {}", msg),
            ConfigError::UnknownPreset(name) => write!(f, "Unknown route preset: {}", name),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(error: std::io::Error) -> Self {
        ConfigError::Io(error.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::Parse(error.to_string())
    }
}
