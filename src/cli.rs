use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the production plan API.
    #[clap(name = "serve")]
    Serve(ServeArgs),

    /// Compute the production plan for a request document stored in a file.
    #[clap(name = "plan")]
    Plan(PlanArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    #[clap(long, default_value = "0.0.0.0:8888", env = "BIND_ADDRESS")]
    pub bind_address: String,

    /// Maximum time to handle a single request, for example: `10s`.
    #[clap(
        long,
        default_value = "10s",
        value_parser = humantime::parse_duration,
        env = "REQUEST_TIMEOUT"
    )]
    pub request_timeout: Duration,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Path to the JSON request document.
    pub path: PathBuf,

    /// Print the plan as JSON instead of a table.
    #[clap(long)]
    pub json: bool,
}
