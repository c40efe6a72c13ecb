/// Where a configuration value came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File(String),
    EnvVar(String),
    CommandLine,
}

impl ConfigSource {
    pub fn is_default(&self) -> bool {
        matches!(self, ConfigSource::Default)
    }

    pub fn description(&self) -> String {
        match self {
            ConfigSource::Default => "Default value".to_string(),
            ConfigSource::File(path) => format!("Configuration file: {}", path),
            ConfigSource::EnvVar(var) => format!("Environment variable: {}", var),
            ConfigSource::CommandLine => "Command line".to_string(),
        }
    }
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
