use litmus_test_suite::prelude::*;

#[derive(clap::Parser, Debug)]
pub struct MyArgs {
    /// reprint period; one-shot when absent
    #[arg(short = 'w', long = "watch", value_name = "secs: f32")]
    pub watch: Option<f32>,

    /// max running time in watch mode
    #[arg(short = 't', long = "max-time", value_name = "sec: u64")]
    pub max_time: Option<u64>,
}

pub fn main(args: MyArgs) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", waiting_tasks()?);

    if let Some(period) = args.watch {
        wait_loop_periodic_fn(period, args.max_time, None, || {
            println!("{}", waiting_tasks()?);
            Ok(())
        })?;
    }

    Ok(())
}
