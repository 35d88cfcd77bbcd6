use anyhow::{Context, Result};
use bookchunks::{Path, ResultTree, Root, SearchResult, partition};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bookchunks", version, about = "Reading ranges and grouped search hits for book trees")]
struct Cli {
    /// Increase log output (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Split a stats file into reading ranges
    Partition {
        /// Stats JSON describing books, chapters and lengths
        tree: PathBuf,

        /// Number of ranges to produce
        #[arg(short, long)]
        count: usize,

        /// Recompute node lengths from the leaves before partitioning
        #[arg(long)]
        recompute_lengths: bool,

        /// Print ranges as JSON
        #[arg(long)]
        json: bool,
    },

    /// Group search results by book/chapter/verse and query them
    Group {
        /// Search results JSON (an array of hits)
        results: PathBuf,

        /// Deepest index level to group by (0 = book, 2 = verse)
        #[arg(long, default_value_t = 2)]
        max_depth: usize,

        /// Subtree to print, as comma-separated indices (e.g. 1,3)
        #[arg(long, value_delimiter = ',', conflicts_with = "from")]
        path: Vec<usize>,

        /// First chapter of a range query, as BOOK:CHAPTER
        #[arg(long, requires = "to")]
        from: Option<Path>,

        /// Last chapter of a range query, as BOOK:CHAPTER
        #[arg(long, requires = "from")]
        to: Option<Path>,

        /// Print hits as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Partition {
            tree,
            count,
            recompute_lengths,
            json,
        } => run_partition(tree, count, recompute_lengths, json),
        Command::Group {
            results,
            max_depth,
            path,
            from,
            to,
            json,
        } => run_group(results, max_depth, &path, from.zip(to), json),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_partition(tree_path: PathBuf, count: usize, recompute: bool, json: bool) -> Result<()> {
    let start_time = Instant::now();

    let mut root = Root::from_json_file(&tree_path)
        .with_context(|| format!("Failed to load document tree from {:?}", tree_path))?;
    if recompute {
        let len = root.recompute_lengths();
        tracing::info!(len, "Recomputed node lengths");
    }

    let ranges = partition(count, &root)
        .with_context(|| format!("Failed to partition {:?} into {} ranges", tree_path, count))?;

    tracing::info!(
        books = root.child_count(),
        ranges = ranges.len(),
        elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0,
        "Partition complete"
    );

    if json {
        let out = serde_json::to_string_pretty(&ranges).context("Failed to serialize ranges")?;
        println!("{}", out);
    } else {
        for (i, range) in ranges.iter().enumerate() {
            println!(
                "{:>4}  {:>7} - {:<7}  {}",
                i + 1,
                range.start.to_string(),
                range.end.to_string(),
                range.title
            );
        }
    }

    Ok(())
}

fn run_group(
    results_path: PathBuf,
    max_depth: usize,
    path: &[usize],
    bounds: Option<(Path, Path)>,
    json: bool,
) -> Result<()> {
    let contents = std::fs::read_to_string(&results_path)
        .with_context(|| format!("Failed to read {:?}", results_path))?;
    let results: Vec<SearchResult> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse search results in {:?}", results_path))?;

    let tree = ResultTree::new(results, max_depth);
    let hits = match bounds {
        Some((from, to)) => tree.range(from, to),
        None => tree.subtree(path),
    };

    tracing::info!(total = tree.results().len(), matched = hits.len(), "Grouped results");

    if json {
        let out = serde_json::to_string_pretty(&hits).context("Failed to serialize results")?;
        println!("{}", out);
    } else {
        for hit in hits {
            println!(
                "{}:{}:{}  {:>6.2}  {}",
                hit.l0, hit.l1, hit.l2, hit.score, hit.text
            );
        }
    }

    Ok(())
}
