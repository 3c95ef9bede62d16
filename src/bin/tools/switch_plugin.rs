use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// plugin's name
    #[arg(value_name = "name")]
    pub plugin: String,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    switch_plugin(&args.plugin)?;

    Ok(())
}
