pub mod cpuinfo;
pub mod plugin;
pub mod release;
pub mod utils;

pub mod prelude {
    pub use super::cpuinfo::prelude::*;
    pub use super::plugin::prelude::*;
    pub use super::release::prelude::*;
    pub use super::utils::prelude::*;

    pub use super::LitmusError;
}

#[derive(Debug)]
pub enum LitmusError {
    /// An expected pattern or field is absent from probed text.
    Parse(String),
    /// The requested plugin was not active after the settle delay.
    Switch(String),
    /// An external command exited non-zero.
    Process {
        cmd: String,
        status: std::process::ExitStatus,
    },
    Regex(regex::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for LitmusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LitmusError::Parse(what)
                => write!(f, "Parse error: {what}"),
            LitmusError::Switch(plugin)
                => write!(f, "Could not switch to plugin: {plugin}"),
            LitmusError::Process { cmd, status }
                => write!(f, "Command \"{cmd}\" failed: {status}"),
            LitmusError::Regex(err)
                => write!(f, "Regex error: {err}"),
            LitmusError::Io(err)
                => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for LitmusError {}

impl From<std::io::Error> for LitmusError {
    fn from(err: std::io::Error) -> Self {
        LitmusError::Io(err)
    }
}

impl From<regex::Error> for LitmusError {
    fn from(err: regex::Error) -> Self {
        LitmusError::Regex(err)
    }
}
