use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// path to check
    #[arg(value_name = "path")]
    pub path: String,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    if is_device(&args.path) {
        println!("{}: character device", args.path);
    } else {
        println!("{}: not a character device", args.path);
        std::process::exit(1);
    }

    Ok(())
}
