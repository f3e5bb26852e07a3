pub mod dashboard;
pub mod output;

use std::{env, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use dashboard::{
    process_advise_command, process_show_command, process_summary_command, DashboardCommand,
};
use tokio::io;
use tracing::level_filters::LevelFilter;

use crate::utils::logging::enable_logging;

#[derive(Parser, Debug)]
#[command(name = "Screenwise", version, long_about = None)]
#[command(about = "Dashboard and advisor for daily screen time exports", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Enable logging")]
    log: bool,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Render the dashboard for a selected date")]
    Show {
        #[command(flatten)]
        command: DashboardCommand,
    },
    #[command(about = "Print the advice for a selected date")]
    Advise {
        #[command(flatten)]
        command: DashboardCommand,
        #[arg(long, help = "Print the advice as json")]
        json: bool,
    },
    #[command(about = "Print day totals for a selected date")]
    Summary {
        #[command(flatten)]
        command: DashboardCommand,
        #[arg(long, help = "Print the aggregate as json")]
        json: bool,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    enable_logging(&create_application_default_path()?, logging_level, args.log)?;

    match args.commands {
        Commands::Show { command } => process_show_command(command).await,
        Commands::Advise { command, json } => process_advise_command(command, json).await,
        Commands::Summary { command, json } => process_summary_command(command, json).await,
    }
}

pub fn create_application_default_path() -> Result<PathBuf> {
    let path = {
        #[cfg(windows)]
        {
            let mut path =
                PathBuf::from(env::var("APPDATA").expect("APPDATA should be present on Windows"));
            path.push("screenwise");
            path
        }
        #[cfg(target_os = "linux")]
        {
            let mut path = env::var("XDG_STATE_HOME")
                .map(PathBuf::from)
                .or_else(|_| {
                    env::var("HOME").map(|home| {
                        let mut path = PathBuf::from(home);
                        path.push(".local/state");
                        path
                    })
                })
                .expect("Couldn't find neither XDG_STATE_HOME nor HOME");
            path.push("screenwise");
            path
        }
    };

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
