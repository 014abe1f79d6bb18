use ::log::LevelFilter;
use serde::Deserialize;

/// The level of the log.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// `"trace"` : Everything, including per-field validation detail.
    #[serde(rename = "trace")]
    Trace,
    /// `"debug"` : Information that only developers can understand.
    /// It contains all the `"info"` content.
    #[serde(rename = "debug")]
    Debug,
    /// `"info"` : The state of the program at runtime, does not affect
    /// normal use. It contains all the `"warning"` content.
    #[serde(rename = "info")]
    Info,
    /// `"warning"` : Problems that do not stop the program, such as an
    /// adapter id being defined twice.
    #[serde(rename = "warning", alias = "warn")]
    Warning,
    /// `"error"` : The program cannot run normally.
    #[serde(rename = "error")]
    Error,
    /// `"none"` : Do not record anything.
    #[serde(rename = "none")]
    None,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::None => LevelFilter::Off,
        }
    }
}

/// The `log` section of the configuration file.
///
/// ```yaml
/// log:
///   level: debug
/// ```
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
pub struct Log {
    /// The level of the log. The default value is `"info"`.
    pub level: LogLevel,
}
