use crate::LitmusError;
use crate::utils::__println_debug;

pub mod prelude {
    pub use super::{
        STATS_FILE,
        waiting_tasks,
        release_tasks,
    };
}

pub const STATS_FILE: &'static str = "/proc/litmus/stats";

pub fn __parse_ready_count(stats: &str) -> Result<u64, LitmusError> {
    let line = stats.lines()
        .find(|line| line.starts_with("ready"))
        .ok_or_else(|| LitmusError::Parse(format!("No \"ready\" line in {STATS_FILE}")))?;

    // Trailing digit run of the line; an empty value field counts as zero.
    let line = line.trim_end();
    let head = line.trim_end_matches(|c: char| c.is_ascii_digit());
    let digits = &line[head.len()..];

    if digits.is_empty() {
        Ok(0)
    } else {
        digits.parse::<u64>()
            .map_err(|err| LitmusError::Parse(format!("Bad ready count \"{digits}\": {err}")))
    }
}

/// Number of real-time tasks currently waiting for a synchronous release.
pub fn waiting_tasks() -> Result<u64, LitmusError> {
    __parse_ready_count(&std::fs::read_to_string(STATS_FILE)?)
}

pub fn __parse_released_count(output: &str) -> Result<u64, LitmusError> {
    use nom::Parser;
    use nom::bytes::complete::*;
    use nom::character::complete::*;
    use nom::combinator::*;
    use nom::multi::*;

    let count_parser = map_res(
        (digit1::<&str, ()>, space1, tag("real-time")),
        |(num, _, _)| num.parse::<u64>()
    );
    let mut parser = many_till(anychar, count_parser);

    parser.parse(output)
        .map(|(_, (_, released))| released)
        .map_err(|_| LitmusError::Parse(format!("No \"<N> real-time\" count in release output")))
}

/// Run the external release binary and report how many real-time tasks it
/// released. A non-zero exit keeps the command and its status in the error.
pub fn release_tasks(release_bin: &str) -> Result<u64, LitmusError> {
    let output = std::process::Command::new(release_bin).output()?;

    if !output.status.success() {
        return Err(LitmusError::Process {
            cmd: release_bin.to_string(),
            status: output.status,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let released = __parse_released_count(&stdout)?;

    __println_debug(|| format!("Released {released} real-time tasks"));

    Ok(released)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_release_bin(dir: &tempfile::TempDir, script: &str) -> String {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.path().join("release_ts");
        std::fs::write(&path, script).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();

        path.into_os_string().into_string().unwrap()
    }

    #[test]
    fn ready_count_trailing_field() {
        let stats = "real-time tasks   = 12\nready for release = 5\n";
        assert_eq!(__parse_ready_count(stats).unwrap(), 5);
    }

    #[test]
    fn ready_count_empty_field_is_zero() {
        assert_eq!(__parse_ready_count("ready for release =\n").unwrap(), 0);
        assert_eq!(__parse_ready_count("ready\n").unwrap(), 0);
    }

    #[test]
    fn ready_count_multi_digit() {
        assert_eq!(__parse_ready_count("ready for release = 128\n").unwrap(), 128);
    }

    #[test]
    fn ready_line_absent_is_parse_error() {
        match __parse_ready_count("real-time tasks = 12\n") {
            Err(LitmusError::Parse(_)) => (),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn released_count_extraction() {
        assert_eq!(__parse_released_count("3 real-time tasks released\n").unwrap(), 3);
        assert_eq!(__parse_released_count("released 13 real-time tasks\n").unwrap(), 13);
    }

    #[test]
    fn released_count_first_match_wins() {
        let out = "7 real-time now, 9 real-time before\n";
        assert_eq!(__parse_released_count(out).unwrap(), 7);
    }

    #[test]
    fn released_count_absent_is_parse_error() {
        match __parse_released_count("nothing to release\n") {
            Err(LitmusError::Parse(_)) => (),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn release_tasks_parses_binary_output() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_release_bin(&dir, "#!/bin/sh\necho '4 real-time tasks released'\n");

        assert_eq!(release_tasks(&bin).unwrap(), 4);
    }

    #[test]
    fn release_tasks_keeps_failure_detail() {
        let dir = tempfile::tempdir().unwrap();
        let bin = fake_release_bin(&dir, "#!/bin/sh\nexit 1\n");

        match release_tasks(&bin) {
            Err(LitmusError::Process { cmd, status }) => {
                assert_eq!(cmd, bin);
                assert_eq!(status.code(), Some(1));
            },
            other => panic!("expected process error, got {other:?}"),
        }
    }
}
