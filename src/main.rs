use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use git_branch_select::App;
use git_branch_select::Config;
use git_branch_select::branch::BranchFilter;
use git_branch_select::ops::git::RealGit;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer as _;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[derive(Parser)]
#[command(name = "git-branch-select")]
#[command(about = "Branch selector to checkout a specified branch", long_about = None)]
pub struct Cli {
    /// Select from all branches, including remote-tracking ones
    #[arg(short, long)]
    pub all: bool,
    /// Print git commands and resolved paths before running them
    #[arg(short = 'V', long)]
    pub verbose: bool,
    /// Treat FILTER as a regular expression instead of plain text
    #[arg(short, long, requires = "filter")]
    pub regex: bool,
    /// Only list branches containing this text (case-insensitive)
    pub filter: Option<String>,
}

fn setup_logging() -> Result<()> {
    let timer = tracing_subscriber::fmt::time::ChronoLocal::new("%H:%M:%S%.3f".into());
    let format = tracing_subscriber::fmt::format().with_timer(timer);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()?;
    let subscriber = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .event_format(format)
        .with_filter(filter);
    tracing_subscriber::registry().with(subscriber).init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    let filter = cli
        .filter
        .as_deref()
        .map(|text| {
            if cli.regex {
                BranchFilter::pattern(text)
            } else {
                BranchFilter::literal(text)
            }
        })
        .transpose()?;
    let config = Config::new(Config::default_program(), cli.all, cli.verbose, filter);

    let git = RealGit::new(config.program.clone(), std::env::current_dir()?);
    let app = App::new(config, git);

    app.cmd_select(
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = setup_logging() {
        eprintln!("{} {:#}", "warning:".yellow().bold(), err);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
