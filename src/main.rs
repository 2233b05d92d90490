use anyhow::Result;
use lcclusters::{
    group_classes_by_community, read_rows,
    schema::{summary, write_communities, Config, Summary},
};
use std::{env, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_OUTPUT: &str = "data/clustered_classes.json";

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();

    // ─── 2) arguments + config ───────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <sheet.csv> [output.json]", args[0]);
        eprintln!("  LCCLUSTERS_CONFIG=<aliases.yaml|json> overrides column names");
        std::process::exit(1);
    }
    let input = PathBuf::from(&args[1]);
    let output = PathBuf::from(args.get(2).map(String::as_str).unwrap_or(DEFAULT_OUTPUT));

    let cfg = match env::var_os("LCCLUSTERS_CONFIG") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    // ─── 3) read + group ─────────────────────────────────────────────
    info!(input = %input.display(), "loading sheet");
    let rows = read_rows(&input, &cfg.reader)?;
    let communities = group_classes_by_community(&rows, &cfg);

    // ─── 4) console summary ──────────────────────────────────────────
    println!("{}", "=".repeat(80));
    println!("Found {}", Summary::of(&communities));
    println!("{}", "=".repeat(80));
    for (i, community) in communities.iter().take(3).enumerate() {
        println!("\nCommunity {}:", i + 1);
        print!("{}", summary::describe(community));
    }

    // ─── 5) export ───────────────────────────────────────────────────
    write_communities(&output, &communities)?;
    println!("\nExported to {}", output.display());
    Ok(())
}
