mod cli;
mod daemon;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use macros_rs::{str, string};
use taskmgr::config;

#[derive(Parser)]
#[command(version = str!(cli::get_version(false)), about = "Process and system metrics over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API in the foreground
    #[command(alias = "daemon")]
    Serve {
        #[arg(long, help = "bind address, overrides config")]
        address: Option<String>,
        #[arg(long, help = "bind port, overrides config")]
        port: Option<u16>,
    },
    /// List running processes
    #[command(alias = "ls")]
    List {
        #[arg(long, help = "only third-party processes")]
        surface: bool,
        #[arg(long, default_value_t = string!("default"), help = "format output")]
        format: String,
    },
    /// Show cpu and memory usage
    Stats {
        #[arg(long, default_value_t = string!("default"), help = "format output")]
        format: String,
    },
    /// Launch a process without waiting for it
    Start {
        command: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Kill a process
    #[command(alias = "kill")]
    Stop {
        #[arg(allow_hyphen_values = true)]
        pid: i64,
    },
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::new().filter_level(cli.verbose.log_level_filter()).init();

    match &cli.command {
        Commands::Serve { address, port } => daemon::serve(config::read().with_overrides(address.clone(), *port)),
        Commands::List { surface, format } => cli::list(format, *surface),
        Commands::Stats { format } => cli::stats(format),
        Commands::Start { command, args } => cli::start(command, args),
        Commands::Stop { pid } => cli::stop(*pid),
    }
}
