use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Gap in milliseconds after which the next tap starts a new run
    #[arg(long)]
    pub reset_gap_ms: Option<u64>,

    /// Number of taps retained for the rolling average
    #[arg(long)]
    pub max_taps: Option<usize>,

    /// Start with default settings instead of the saved preferences
    #[arg(long)]
    pub no_restore: bool,

    /// Check for a newer release, print the result and exit
    #[arg(long)]
    pub check_update: bool,
}
