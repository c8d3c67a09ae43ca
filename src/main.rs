mod cli;
mod core;
mod document;
mod prelude;
mod quantity;
mod server;
mod tables;

use std::fs;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, PlanArgs},
    core::dispatcher::dispatch,
    document::Document,
    prelude::*,
    tables::build_plan_table,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Serve(args) => {
            server::serve(args).await?;
        }
        Command::Plan(args) => {
            plan(&args)?;
        }
    }

    info!("done!");
    Ok(())
}

#[instrument(skip_all, fields(path = %args.path.display()))]
fn plan(args: &PlanArgs) -> Result {
    let body = fs::read(&args.path)
        .with_context(|| format!("failed to read `{}`", args.path.display()))?;
    let request = Document::from_slice(&body)?.into_request()?;
    let plan = dispatch(&request)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        println!("{}", build_plan_table(&request.merit_order()?, &request.fuels, &plan));
    }
    Ok(())
}
