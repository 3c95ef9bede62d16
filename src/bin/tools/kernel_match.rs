use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// pattern matched against the start of `uname -r`
    #[arg(value_name = "regex")]
    pub pattern: String,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    if uname_matches(&args.pattern)? {
        println!("match");
    } else {
        println!("no match");
        std::process::exit(1);
    }

    Ok(())
}
