mod clock_freq;
mod switch_plugin;
mod waiting;
mod release;
mod check_bin;
mod check_dev;
mod kernel_match;

#[derive(clap::Parser, Debug)]
#[command(about, long_about = None)]
pub enum Command {
    /// Number of CPUs reported by /proc/cpuinfo
    #[command(name = "cpus", verbatim_doc_comment)]
    Cpus,

    /// Frequency (MHz) of the clock backing kernel overhead timestamps
    #[command(name = "clock-freq", verbatim_doc_comment)]
    ClockFreq(clock_freq::MyArgs),

    /// Print the active scheduling plugin
    #[command(name = "plugin", verbatim_doc_comment)]
    Plugin,

    /// Switch the active scheduling plugin and verify the switch
    #[command(name = "switch-plugin", verbatim_doc_comment)]
    SwitchPlugin(switch_plugin::MyArgs),

    /// Number of tasks waiting for a synchronous release
    #[command(name = "waiting", verbatim_doc_comment)]
    Waiting(waiting::MyArgs),

    /// Release all waiting real-time tasks and print how many were released
    #[command(name = "release", verbatim_doc_comment)]
    Release(release::MyArgs),

    /// Check that a file is user-readable and user-executable
    #[command(name = "check-bin", verbatim_doc_comment)]
    CheckBin(check_bin::MyArgs),

    /// Check that a path is a character device
    #[command(name = "check-dev", verbatim_doc_comment)]
    CheckDev(check_dev::MyArgs),

    /// Match the running kernel's release string against a regex
    #[command(name = "kernel-match", verbatim_doc_comment)]
    KernelMatch(kernel_match::MyArgs),
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = <Command as clap::Parser>::parse();

    use Command::*;

    match args {
        Cpus => println!("{}", litmus_test_suite::cpuinfo::num_cpus()?),
        ClockFreq(args) => clock_freq::main(args)?,
        Plugin => println!("{}", litmus_test_suite::plugin::active_plugin()?),
        SwitchPlugin(args) => switch_plugin::main(args)?,
        Waiting(args) => waiting::main(args)?,
        Release(args) => release::main(args)?,
        CheckBin(args) => check_bin::main(args)?,
        CheckDev(args) => check_dev::main(args)?,
        KernelMatch(args) => kernel_match::main(args)?,
    };

    Ok(())
}
