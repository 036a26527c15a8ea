mod commands;
mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::list;
use ponyls::config::PonylsConfig;
use ponyls::resources;
use ponyls::styling::eprintln;

#[derive(Parser)]
#[command(name = "ponyls")]
#[command(about = "List pony and balloon art collections", long_about = None)]
#[command(version)]
struct Cli {
    /// Pony directories to list instead of the configured ones
    #[arg(long, value_name = "DIR", global = true)]
    ponydir: Vec<PathBuf>,

    /// Extra-pony directories to use instead of the configured ones
    #[arg(long, value_name = "DIR", global = true)]
    extraponydir: Vec<PathBuf>,

    /// Balloon directories to use instead of the configured ones
    #[arg(long, value_name = "DIR", global = true)]
    balloondir: Vec<PathBuf>,

    /// Quote directories to use instead of the configured ones
    #[arg(long, value_name = "DIR", global = true)]
    quotedir: Vec<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ponies in a grid, one block per directory
    Ponies {
        /// Fold symlinked ponies into their target: "name (aliases...)"
        #[arg(long)]
        symlinks: bool,

        /// Also list the extra-pony directories
        #[arg(long)]
        extra: bool,
    },

    /// List every pony name on its own line, unformatted
    Names {
        /// Also include the extra-pony directories
        #[arg(long)]
        extra: bool,
    },

    /// List balloon styles
    Balloons {
        /// List thought balloons (.think) instead of speech balloons (.say)
        #[arg(long)]
        think: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = PonylsConfig::load()?;

    // Directory flags replace the configured sets wholesale, never mix.
    let pick = |flag: Vec<PathBuf>, configured: Vec<PathBuf>| {
        if flag.is_empty() { configured } else { flag }
    };
    let pony_dirs = pick(cli.ponydir, config.pony_dirs);
    let extra_dirs = pick(cli.extraponydir, config.extra_pony_dirs);
    let balloon_dirs = pick(cli.balloondir, config.balloon_dirs);
    let quote_dirs = pick(cli.quotedir, config.quote_dirs);

    match cli.command {
        Commands::Ponies { symlinks, extra } => {
            let mut dirs = pony_dirs;
            if extra {
                dirs.extend(extra_dirs);
            }
            let quoters = resources::quoters(&quote_dirs);
            if symlinks {
                list::alias_list(&dirs, &quoters, None)
            } else {
                list::simple_list(&dirs, &quoters, None)
            }
        }
        Commands::Names { extra } => {
            list::flat_list(&pony_dirs, extra.then_some(extra_dirs.as_slice()), None)
        }
        Commands::Balloons { think } => list::balloon_list(&balloon_dirs, think),
    }
}
