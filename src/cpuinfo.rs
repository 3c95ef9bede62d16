use std::str::FromStr;

use crate::LitmusError;

pub mod prelude {
    pub use super::{
        CpuArch,
        num_cpus,
        clock_mhz,
    };
}

const CPUINFO_FILE: &'static str = "/proc/cpuinfo";

/// Target CPU architecture of the kernel under test.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum CpuArch {
    ARMv7,
    X86,
    Other,
}

impl CpuArch {
    /// Map the harness's CPU_V7/X86 kernel-config options; the ARM flag
    /// takes precedence when both are set.
    pub fn from_config_flags(cpu_v7: bool, x86: bool) -> CpuArch {
        if cpu_v7 {
            CpuArch::ARMv7
        } else if x86 {
            CpuArch::X86
        } else {
            CpuArch::Other
        }
    }
}

impl FromStr for CpuArch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "armv7" => Ok(CpuArch::ARMv7),
            "x86" => Ok(CpuArch::X86),
            "other" => Ok(CpuArch::Other),
            other => Err(format!("Unknown CPU architecture: {other}")),
        }
    }
}

pub fn __count_cpus(cpuinfo: &str) -> usize {
    cpuinfo.lines()
        .filter(|line| line.starts_with("processor") || line.starts_with("online"))
        .count()
}

/// Number of CPUs listed in /proc/cpuinfo, counting both `processor`
/// entries (x86) and `online` entries (ARM).
pub fn num_cpus() -> std::io::Result<usize> {
    Ok(__count_cpus(&std::fs::read_to_string(CPUINFO_FILE)?))
}

pub fn __parse_x86_mhz(cpuinfo: &str) -> Result<f64, LitmusError> {
    use nom::Parser;
    use nom::bytes::complete::*;
    use nom::character::complete::*;
    use nom::combinator::*;

    // Only the integer part of the value field; fractional MHz is noise.
    let mut line_parser = map_res(
        (tag("cpu MHz"), space0, tag(":"), space0, digit1::<&str, ()>),
        |(_, _, _, _, mhz)| mhz.parse::<u64>()
    );

    cpuinfo.lines()
        .find_map(|line| line_parser.parse(line).ok())
        .map(|(_, mhz)| mhz as f64)
        .ok_or_else(|| LitmusError::Parse(format!("No \"cpu MHz\" field in {CPUINFO_FILE}")))
}

/// The frequency (in MHz) of the clock backing the kernel's overhead
/// timestamps. ARMv7 kernels use a millisecond timer; on x86 the timestamp
/// counter ticks at the processor clock; anything else reports 0 and the
/// caller is on its own.
pub fn clock_mhz(arch: CpuArch) -> Result<f64, LitmusError> {
    match arch {
        CpuArch::ARMv7 => Ok(1000.0),
        CpuArch::X86 => __parse_x86_mhz(&std::fs::read_to_string(CPUINFO_FILE)?),
        CpuArch::Other => Ok(0.0),
    }
}
