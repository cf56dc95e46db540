use std::process::ExitCode;

use triangle_demo::options;
use triangle_engine::logging::{LoggingConfig, init_logging};

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    let config = options::resolve_or_exit(std::env::args_os());

    match triangle_demo::run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
