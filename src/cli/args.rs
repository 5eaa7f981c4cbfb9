//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Serve a short-video SPA together with its mock data API
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: reel.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Static files directory; the bundled frontend is used when it does not exist
    #[arg(short = 's', long = "static", global = true, value_hint = clap::ValueHint::DirPath)]
    pub static_dir: Option<PathBuf>,

    /// Index document served for client-side routes (relative to the static root)
    #[arg(long, global = true)]
    pub index: Option<String>,

    /// Media directory scanned for local videos
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub media: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// subcommands (default: serve)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        args: ServeArgs,
    },

    /// Scan the media directory once and print the synthesized records
    Scan {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Serve command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
    #[arg(short, long)]
    pub interface: Option<std::net::IpAddr>,

    /// Port number to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Number of request worker threads
    #[arg(short, long)]
    pub workers: Option<usize>,
}

impl Cli {
    /// Serve arguments, empty when the subcommand was omitted.
    pub fn serve_args(&self) -> ServeArgs {
        match &self.command {
            Some(Commands::Serve { args }) => args.clone(),
            _ => ServeArgs::default(),
        }
    }
}
