use std::time::Duration;

use crate::LitmusError;

pub mod prelude {
    pub use super::{
        __println_debug,
        is_env_var_set,
        is_executable,
        is_device,
        uname_matches,
        wait_loop_periodic_fn,
        create_ctrlc_handler,
        ExitFlag,
    };
}

pub fn is_env_var_set(var: &str) -> bool {
    match std::env::var(var) {
        Ok(v) if v != "" => true,
        _ => false,
    }
}

pub fn __println_debug<F: FnOnce() -> String>(fun: F) {
    if is_env_var_set("DEBUG") {
        let str = fun();
        println!("{str}");
    }
}

/// Whether the file's user-read and user-execute bits are both set.
/// A missing file is an error here, not a false.
pub fn is_executable<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let mode = std::fs::metadata(path)?.mode();
    Ok(mode & libc::S_IRUSR != 0 && mode & libc::S_IXUSR != 0)
}

/// Whether the path is a character device. A missing path is an ordinary
/// false, asymmetric with is_executable on purpose.
pub fn is_device<P: AsRef<std::path::Path>>(path: P) -> bool {
    use std::os::unix::fs::MetadataExt;

    match std::fs::metadata(path) {
        Ok(meta) => meta.mode() & libc::S_IFMT == libc::S_IFCHR,
        Err(_) => false,
    }
}

/// Whether the running kernel's release string (`uname -r`) matches the
/// given pattern from its start.
pub fn uname_matches(pattern: &str) -> Result<bool, LitmusError> {
    let regex = regex::Regex::new(&format!("^(?:{pattern})"))?;

    let output = std::process::Command::new("uname").arg("-r").output()?;
    if !output.status.success() {
        return Err(LitmusError::Process {
            cmd: "uname -r".to_string(),
            status: output.status,
        });
    }

    let release = String::from_utf8_lossy(&output.stdout);
    Ok(regex.is_match(release.trim_end()))
}

#[derive(Clone)]
pub struct ExitFlag {
    ch: crossbeam::channel::Receiver<()>,
}

impl ExitFlag {
    pub fn is_exit(&self) -> bool {
        use crossbeam::channel::TryRecvError::*;

        match self.ch.try_recv() {
            Ok(()) => true,
            Err(Empty) => false,
            _ => panic!("unexpected"),
        }
    }
}

pub fn create_ctrlc_handler() -> Result<ExitFlag, Box<dyn std::error::Error>> {
    let (send, recv) = crossbeam::channel::bounded(1);

    ctrlc::set_handler(move || { send.send(()).unwrap(); })?;
    Ok(ExitFlag { ch: recv })
}

pub fn wait_loop_periodic_fn<F>(period_secs: f32, max_time: Option<u64>, ctrlc_flag: Option<ExitFlag>, mut fun: F) -> Result<(), Box<dyn std::error::Error>>
    where F: FnMut() -> Result<(), Box<dyn std::error::Error>>
{
    let exit = match ctrlc_flag {
        Some(exit) => exit,
        None => create_ctrlc_handler()?,
    };

    let max_time_ch =
        match max_time {
            Some(max_time) => crossbeam::channel::after(Duration::from_secs(max_time)),
            None => crossbeam::channel::never(),
        };

    let periodic_ch = crossbeam::channel::tick(Duration::from_secs_f32(period_secs));

    loop {
        crossbeam::channel::select! {
            recv(exit.ch) -> _ => { break; },
            recv(periodic_ch) -> _ => { fun()?; },
            recv(max_time_ch) -> _ => { break; },
        }
    }

    Ok(())
}
