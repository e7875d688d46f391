use std::process::ExitCode;

use innkeep_cli::DemoConfig;

fn main() -> ExitCode {
    innkeep_observability::init();

    let result = DemoConfig::from_env()
        .map_err(anyhow::Error::from)
        .and_then(|config| {
            tracing::debug!(?config, "loaded demo config");
            innkeep_cli::run(&config, &mut std::io::stdout().lock()).map(|_| ())
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
