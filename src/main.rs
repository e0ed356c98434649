use clap::Parser;
use standee::{convert, utils, Args, DATA_JSON, SCRAP_DIR};
use std::path::Path;
use tracing::error;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::setup_logging(args.verbose);

    match convert::convert_scrap(Path::new(SCRAP_DIR), Path::new(DATA_JSON)) {
        Ok(result) => {
            convert::print_summary(&result);
            Ok(())
        }
        Err(e) => {
            error!(action = "fail", component = "conversion", error = %e, "Conversion failed");
            std::process::exit(1);
        }
    }
}
