//! seqset demo
//!
//! Walks through the set algebra on small integer sets, an ordered set and
//! a set of sets, printing each result with the chosen render options.
//!
//! Usage:
//!   seqset-demo [--format <SPEC>] [--json] [--verbose]

use clap::Parser;
use seqset::render::RenderOptions;
use seqset::{OrderedSet, UnorderedSet, ordered_set, unordered_set};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seqset-demo")]
#[command(about = "Set algebra and rendering walkthrough")]
struct Cli {
    /// Render specifier: flags `c`/`C` (compact on/off) and `t`/`T`
    /// (trailing separator on/off), optionally followed by `:<separator>`
    #[arg(long, default_value = "c")]
    format: RenderOptions,

    /// Also print every set as JSON
    #[arg(long)]
    json: bool,

    /// Log at debug level when RUST_LOG is not set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(options = ?cli.format, "starting demo");

    let s1: UnorderedSet<i32> = unordered_set![1, 2, 3];
    let s2: UnorderedSet<i32> = unordered_set![1, 2, 4];
    let s3 = (&s1 - &s2) + (&s2 - &s1);
    let union = &s1 + &s2;
    let ones = union.count(&1);

    println!("{}", s1.render(&cli.format));
    println!("{}", s2.render(&cli.format));
    println!("{}", s3.render(&cli.format));
    println!("{}", union.render(&cli.format));
    println!("size: {ones}");

    let ordered: OrderedSet<i32> = ordered_set![6464, 1, 2, 3];
    println!("{}", ordered.render(&cli.format));
    println!("test formatting: {}", ordered.display_with(cli.format.clone()));

    let nested: UnorderedSet<UnorderedSet<i32>> =
        unordered_set![unordered_set![7, 1, 2, 3], unordered_set![1, 2, 4]];
    println!("test formatting: {}", nested.display_with(cli.format.clone()));
    println!("{}", nested.render(&cli.format));

    let present = nested.count(&unordered_set![1, 2, 4]);
    println!("size: {present}");
    let absent = nested.count(&unordered_set![1, 2, 3]);
    println!("size: {absent}");

    let pairs = s1.combinations(2)?;
    tracing::info!(pairs = pairs.len(), "enumerated pairs of s1");
    println!("{}", pairs.render(&cli.format));

    if cli.json {
        println!("{}", serde_json::to_string(&union)?);
        println!("{}", serde_json::to_string(&ordered)?);
        println!("{}", serde_json::to_string(&nested)?);
    }

    tracing::info!("demo finished");
    Ok(())
}
