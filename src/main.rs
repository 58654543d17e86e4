mod config;

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context as _, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize as _;

use component_for_applet::prompt::Terminal;
use component_for_applet::Error;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "component-for-applet")]
#[command(version)]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(arg_required_else_help = true)]
#[command(about = "CLI to add global component for applet.")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[arg(
        short = 'h',
        long = "help",
        help = "Print this help message.",
        action = ArgAction::Help,
        global = true,
    )]
    help: Option<bool>,

    #[arg(
        short = 'V',
        long = "version",
        help = "Print version information.",
        action = ArgAction::Version,
    )]
    version: Option<bool>,
}

#[derive(Subcommand)]
enum Command {
    /// Create global component for applet.
    Create(Create),
}

#[derive(Args)]
struct Create {
    #[arg(help = "Destination to create template. Defaults to the current directory.")]
    destination: Option<PathBuf>,
}

struct App {
    cli: Cli,
    config: Config,
}

impl App {
    fn init() -> Result<Self> {
        let cli = Cli::parse();
        let config = Config::init().context("failed to initialize config")?;
        Ok(Self { cli, config })
    }

    fn run(&self) -> Result<()> {
        match &self.cli.command {
            Command::Create(args) => self.create(args),
        }
    }

    fn create(&self, args: &Create) -> Result<()> {
        let dest = match &args.destination {
            Some(dest) => dest.clone(),
            None => env::current_dir().context("failed to locate current directory")?,
        };
        let catalog = self.config.catalog();
        component_for_applet::create(dest, &catalog, &Terminal)?;
        Ok(())
    }
}

/// Joins the error chain with `: `, dropping causes whose text the message
/// already carries.
fn render(err: &anyhow::Error) -> String {
    let mut message = String::new();
    for cause in err.chain() {
        let text = cause.to_string();
        if message.contains(&text) {
            continue;
        }
        if !message.is_empty() {
            message.push_str(": ");
        }
        message.push_str(&text);
    }
    message
}

fn report(err: &anyhow::Error) {
    eprintln!("{}", render(err).red());
    if let Some(hint) = err.downcast_ref::<Error>().and_then(Error::hint) {
        eprintln!("{}", hint.red());
    }
}

fn main() {
    if let Err(err) = App::init().and_then(|app| app.run()) {
        report(&err);
        process::exit(1);
    }
}
