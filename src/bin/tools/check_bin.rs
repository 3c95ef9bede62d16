use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// file to check
    #[arg(value_name = "path")]
    pub path: String,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    if is_executable(&args.path)? {
        println!("{}: user-readable and executable", args.path);
    } else {
        println!("{}: not user-readable and executable", args.path);
        std::process::exit(1);
    }

    Ok(())
}
