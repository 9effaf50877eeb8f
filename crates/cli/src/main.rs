//! `scriptboard` -- terminal storyboard editor for short-form video scripts.
//!
//! Starts from the demo script (or a blank scene), then reads editing
//! commands from stdin, or from `--commands` as a `;`-separated batch.
//!
//! # Environment variables
//!
//! | Variable                    | Default    | Description                     |
//! |-----------------------------|------------|---------------------------------|
//! | `SCRIPTBOARD_PROJECT_TITLE` | seed title | Project title in the header     |
//! | `SCRIPTBOARD_SEED`          | `demo`     | `demo` or `blank`               |
//! | `SCRIPTBOARD_BADGE_TAGS`    | `2`        | Tag badges per timeline card    |
//! | `RUST_LOG`                  | see below  | Log filter, written to stderr   |
//!
//! Without `RUST_LOG` the filter is
//! `scriptboard=info,scriptboard_cli=info,scriptboard_core=info`.

use std::io;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scriptboard_cli::config::{CliConfig, SeedKind};
use scriptboard_cli::error::CliResult;
use scriptboard_cli::session::Session;

#[derive(Parser, Debug)]
#[command(version, about = "Storyboard editor for short-form video scripts", long_about = None)]
struct Args {
    /// Project title (overrides SCRIPTBOARD_PROJECT_TITLE)
    #[arg(long)]
    title: Option<String>,

    /// Starting content: `demo` or `blank` (overrides SCRIPTBOARD_SEED)
    #[arg(long)]
    seed: Option<String>,

    /// Tag badges shown per timeline card (overrides SCRIPTBOARD_BADGE_TAGS)
    #[arg(long)]
    badge_tags: Option<usize>,

    /// Run a `;`-separated list of commands instead of reading stdin,
    /// e.g. "new; set title Cold Open; up; show"
    #[arg(long)]
    commands: Option<String>,
}

fn run(args: Args) -> CliResult<()> {
    let mut config = CliConfig::from_env()?;
    if let Some(title) = args.title {
        config.project_title = Some(title);
    }
    if let Some(seed) = args.seed {
        config.seed = SeedKind::from_str(&seed)?;
    }
    if let Some(badge_tags) = args.badge_tags {
        config.badge_tags = badge_tags;
    }

    tracing::info!(
        seed = config.seed.as_str(),
        badge_tags = config.badge_tags,
        "Starting scriptboard",
    );

    let mut session = Session::new(&config);
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match args.commands {
        Some(batch) => {
            session.run_batch(&batch, &mut out, &mut err)?;
        }
        None => {
            let stdin = io::stdin().lock();
            session.run_interactive(stdin, &mut out, &mut err)?;
        }
    }
    Ok(())
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scriptboard=info,scriptboard_cli=info,scriptboard_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        tracing::error!(error = %e, "scriptboard failed");
        std::process::exit(1);
    }
}
