use std::process::exit;

use log::error;
use simple_logger::SimpleLogger;
use zenwavelet::cli::{self, Args};

fn main() {
    let args = Args::parse_legacy(std::env::args_os());

    if let Err(e) = SimpleLogger::new().with_level(args.log_level()).init() {
        eprintln!("could not install logger: {e}");
    }

    if let Err(e) = cli::run(&args) {
        error!(
            "could not transform {} into {}: {e}",
            args.in_path.display(),
            args.out_path.display()
        );
        exit(1);
    }
}
