use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// target CPU architecture
    #[arg(short = 'a', long = "arch", value_name = "armv7|x86|other")]
    pub arch: CpuArch,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", clock_mhz(args.arch)?);

    Ok(())
}
