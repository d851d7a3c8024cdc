use anyhow::Context;
use clap::Parser;
use sandwich_shop::core::messages::EXIT_MESSAGE;
use sandwich_shop::utils::logger;
use sandwich_shop::{CliConfig, ExitReason, Shell};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json_logs);
    tracing::debug!("CLI config: {:?}", config);

    let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;

    let show_welcome = !config.no_welcome;
    let reason = runtime.block_on(async move {
        let shop = tokio::task::spawn_blocking(move || {
            let shell = Shell::new(std::io::stdin().lock(), std::io::stdout());
            let mut shell = if show_welcome {
                shell
            } else {
                shell.without_welcome()
            };
            shell.run()
        });

        tokio::select! {
            joined = shop => joined.unwrap_or_else(|e| {
                tracing::error!("Shop task failed: {}", e);
                ExitReason::Failed
            }),
            _ = tokio::signal::ctrl_c() => {
                println!("{}", EXIT_MESSAGE);
                ExitReason::Interrupted
            }
        }
    });

    // The shop thread may still be blocked reading stdin.
    runtime.shutdown_background();

    tracing::debug!("Exiting after {:?}", reason);
    Ok(())
}
