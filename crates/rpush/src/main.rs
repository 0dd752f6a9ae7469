use std::process::ExitCode;

use tracing::error;

mod config;
mod pipeline;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 1) Config
    let cfg = match config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    // 2) Logger
    if let Err(e) = rpush_observe::logger_init(&cfg.logger()) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    // 3) Fetch -> render -> publish
    match pipeline::run(&cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
