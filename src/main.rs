use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use code_reviewer::client::{ReviewClient, ReviewForm, Tone};
use code_reviewer::config::AppConfig;
use code_reviewer::{build_app, run_server, telemetry, AppState};

#[derive(Parser)]
#[command(name = "code-reviewer", version, about = "AI code review gateway and client")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP gateway (default).
    Serve {
        /// Overrides PORT.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit code for review to a running gateway.
    Review {
        /// Text or code to review. Read from stdin when neither this nor --file is given.
        prompt: Option<String>,
        #[arg(long, short, conflicts_with = "prompt")]
        file: Option<PathBuf>,
        #[arg(long, env = "REVIEW_URL", default_value = "http://localhost:3000")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing();

    match Cli::parse().command.unwrap_or(Command::Serve { port: None }) {
        Command::Serve { port } => {
            let config = AppConfig::from_env();
            let port = port.unwrap_or(config.port);
            let state = AppState::from_config(&config).context("failed to build HTTP client")?;

            run_server(build_app(state), port)
                .await
                .context("gateway server failed")?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Review { prompt, file, url } => {
            let input = read_input(prompt, file)?;
            let mut form = ReviewForm::new();
            form.set_input(input);

            let outcome = form
                .submit(&ReviewClient::new(url))
                .await
                .context("cannot submit review")?;

            if outcome.tone == Tone::Success {
                println!("{outcome}");
                Ok(ExitCode::SUCCESS)
            } else {
                eprintln!("{outcome}");
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn read_input(prompt: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(prompt) = prompt {
        return Ok(prompt);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("failed to read prompt from stdin")?;
    if buf.trim().is_empty() {
        bail!("no prompt given: pass it as an argument, with --file, or on stdin");
    }
    Ok(buf)
}
