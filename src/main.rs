use std::{env, process::ExitCode, time::Instant};

use lexscan::{
    config::RunConfig,
    errors::errors::{Error, ErrorTip},
    init_tracing,
    lexer::lexer::scan_with_registry,
    report::report::render_report,
};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let config = RunConfig::from_args(env::args().skip(1))?;
    info!(input = %config.input.name(), "scanning");

    let source = config.input.read()?;

    if config.echo_source {
        println!("\nSOURCE: {}", config.input.name());
        println!("{}", "=".repeat(80));
        println!("{}", source);
        println!("{}", "=".repeat(80));
    }

    let start = Instant::now();
    let result = scan_with_registry(&source);
    info!(elapsed = ?start.elapsed(), tokens = result.tokens.len(), "scanned");

    println!("{}", render_report(&result));

    Ok(())
}

fn display_error(error: &Error) {
    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
}
