//! nc-utils - command-line front end for the nc-utilities helpers.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod command;
mod config;

use command::{Command, USAGE};
use config::CliConfig;

fn main() -> anyhow::Result<()> {
    let env_failures = config::load_dotenv_from_repo_root();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nc_utilities=info,nc_utils=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for failure in &env_failures {
        tracing::warn!(
            path = %failure.path.display(),
            error = %failure.error,
            "Failed to load env file"
        );
    }

    let config = CliConfig::from_env();
    let invocation = command::parse_args(std::env::args().skip(1))?;
    if invocation.command == Command::Help {
        println!("{USAGE}");
        return Ok(());
    }
    let output = command::execute(invocation, &config)?;

    let rendered = serde_json::to_string_pretty(&output).context("rendering output")?;
    println!("{rendered}");
    Ok(())
}
