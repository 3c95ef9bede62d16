use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// release binary
    #[arg(short = 'b', long = "bin", default_value = "release_ts", value_name = "path")]
    pub release_bin: String,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !is_executable(&args.release_bin)? {
        Err(format!("Release binary {} is not executable", args.release_bin))?;
    }

    println!("{}", release_tasks(&args.release_bin)?);

    Ok(())
}
