use std::time::Duration;

use crate::LitmusError;
use crate::utils::__println_debug;

pub mod prelude {
    pub use super::{
        ACTIVE_PLUGIN_FILE,
        SWITCH_SETTLE,
        active_plugin,
        switch_plugin,
    };
}

pub const ACTIVE_PLUGIN_FILE: &'static str = "/proc/litmus/active_plugin";

/// The kernel completes a plugin switch asynchronously and exposes no
/// completion signal to poll, so a fixed delay is all there is.
pub const SWITCH_SETTLE: Duration = Duration::from_secs(2);

pub fn __read_plugin_at(path: &str) -> Result<String, LitmusError> {
    Ok(std::fs::read_to_string(path)?.trim().to_string())
}

/// Name of the currently active scheduling plugin.
pub fn active_plugin() -> Result<String, LitmusError> {
    __read_plugin_at(ACTIVE_PLUGIN_FILE)
}

pub fn __switch_plugin_at(path: &str, plugin: &str, settle: Duration) -> Result<(), LitmusError> {
    let plugin = plugin.trim();

    // Intentional change from the historical echo-into-file subprocess:
    // a direct write is what the kernel sees either way.
    std::fs::write(path, plugin)?;

    std::thread::sleep(settle);

    let active = __read_plugin_at(path)?;
    if active != plugin {
        return Err(LitmusError::Switch(plugin.to_string()));
    }

    __println_debug(|| format!("Switched active plugin to {plugin}"));

    Ok(())
}

/// Switch the active scheduling plugin and verify the switch took effect.
/// Fails without retry when the read-back plugin differs from the
/// requested one.
pub fn switch_plugin(plugin: &str) -> Result<(), LitmusError> {
    __switch_plugin_at(ACTIVE_PLUGIN_FILE, plugin, SWITCH_SETTLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_plugin_trims_trailing_newline() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "GSN-EDF\n").unwrap();

        let read = __read_plugin_at(file.path().to_str().unwrap()).unwrap();
        assert_eq!(read, "GSN-EDF");
    }

    #[test]
    fn switch_succeeds_when_file_echoes_back() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();

        __switch_plugin_at(path, " GSN-EDF \n", Duration::from_millis(10)).unwrap();
        assert_eq!(__read_plugin_at(path).unwrap(), "GSN-EDF");
    }

    #[test]
    fn switch_fails_when_file_never_updates() {
        // /dev/null discards the write, exactly a control file that never
        // picks up the requested plugin
        match __switch_plugin_at("/dev/null", "P-FP", Duration::from_millis(10)) {
            Err(LitmusError::Switch(plugin)) => assert_eq!(plugin, "P-FP"),
            other => panic!("expected switch error, got {other:?}"),
        }
    }

    #[test]
    fn switch_missing_file_propagates_io_error() {
        let res = __switch_plugin_at(
            "/nonexistent/active_plugin",
            "GSN-EDF",
            Duration::from_millis(0),
        );

        match res {
            Err(LitmusError::Io(err)) => {
                assert_eq!(err.kind(), std::io::ErrorKind::NotFound)
            },
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
