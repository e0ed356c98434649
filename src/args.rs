use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "standee",
    about = "Convert saved standings pages into the race chart's JSON dataset",
    version,
    long_about = None
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
