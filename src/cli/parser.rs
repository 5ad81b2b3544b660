use crate::ui::report::OutputFormat;
use clap::Parser;

/// Command-line interface definition for sleepcalc
/// Computes when to go to sleep and when you will wake up refreshed
#[derive(Parser, Debug)]
#[command(
    name = "sleepcalc",
    version = env!("CARGO_PKG_VERSION"),
    about = "Tells you when to go to sleep and when you will wake up fully refreshed",
    long_about = None
)]
pub struct Cli {
    /// Time you woke up today (HH:mm, 24-hour clock)
    #[arg(value_name = "WOKE_UP")]
    pub woke_up: Option<String>,

    /// Earliest time you want to wake up next (HH:mm, 24-hour clock)
    #[arg(value_name = "MIN_WAKE_UP")]
    pub min_wake_up: Option<String>,

    /// Output format of the result line
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Pretend the current moment is this one instead of reading the clock
    #[arg(long = "now", value_name = "YYYY-MM-DD HH:MM")]
    pub now: Option<String>,

    /// Print the model breakdown to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
