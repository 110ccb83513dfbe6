use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod scene;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Closest-point queries between points, sides and triangles")]
struct Cmd {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Resolve one pair of shapes from a JSON scene and print the contact
    Query {
        #[arg(long)]
        input: PathBuf,
    },
    /// Closest points for every triangle pair in a CSV (csv or parquet out)
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write random triangle pairs for `batch`
    Sample {
        #[arg(long, default_value_t = 100)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small version JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Query { input } => query(input),
        Action::Batch { input, out } => {
            batch::run(&input, &out)?;
            Ok(())
        }
        Action::Sample { count, seed, out } => {
            batch::sample(count, seed, &out)?;
            Ok(())
        }
        Action::Report => report(),
    }
}

fn query(input: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), "query");
    let scene = scene::load(&input)?;
    let report = scene::evaluate(&scene)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn report() -> Result<()> {
    let rev = option_env!("GIT_COMMIT").unwrap_or("unknown");
    let obj = serde_json::json!({
        "name": "planar",
        "version": planar::VERSION,
        "code_rev": rev,
        "on_line_eps": planar::cfg::ON_LINE_EPS,
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
