use std::io::{self, BufWriter, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use combinate::{combinations, power_set, RenderConfig, Selection, SubsetView};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "combinate", about = "Enumerate subsets and k-combinations lazily")]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Text placed between elements of a subset.
    #[arg(long, global = true, default_value = ", ")]
    separator: String,
    /// Text placed before each subset.
    #[arg(long, global = true, default_value = "{")]
    open: String,
    /// Text placed after each subset.
    #[arg(long, global = true, default_value = "}")]
    close: String,
}

#[derive(Args, Debug)]
struct WalkArgs {
    /// Emit subsets from last to first.
    #[arg(long)]
    reverse: bool,
    /// Stop after this many subsets.
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every subset of the items in binary-counting order.
    PowerSet {
        /// Source elements, in order.
        items: Vec<String>,
        #[command(flatten)]
        walk: WalkArgs,
    },
    /// Print every k-element combination of the items in lexicographic order.
    Choose {
        /// Combination size.
        #[arg(allow_negative_numbers = true)]
        k: i64,
        /// Source elements, in order.
        items: Vec<String>,
        #[command(flatten)]
        walk: WalkArgs,
        /// Print only the combination at this lexicographic rank.
        #[arg(long, conflicts_with_all = ["reverse", "limit"])]
        rank: Option<u64>,
    },
    /// Print the number of subsets (or of k-combinations with -k).
    Count {
        /// Combination size; omit to count the whole power set.
        #[arg(short, allow_negative_numbers = true)]
        k: Option<i64>,
        /// Source elements, in order.
        items: Vec<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = RenderConfig::new()
        .with_separator(cli.render.separator)
        .with_delimiters(cli.render.open, cli.render.close);
    config.validate().context("invalid render options")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Commands::PowerSet { items, walk } => run_power_set(&mut out, &items, &walk, &config)?,
        Commands::Choose {
            k,
            items,
            walk,
            rank,
        } => run_choose(&mut out, k, &items, &walk, rank, &config)?,
        Commands::Count { k, items } => run_count(&mut out, k, &items)?,
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

fn run_power_set<W: Write>(
    out: &mut W,
    items: &[String],
    walk: &WalkArgs,
    config: &RenderConfig,
) -> Result<()> {
    let powers = power_set(items).context("failed to build power set")?;
    emit(out, powers.iter(), walk, config)
}

fn run_choose<W: Write>(
    out: &mut W,
    k: i64,
    items: &[String],
    walk: &WalkArgs,
    rank: Option<u64>,
    config: &RenderConfig,
) -> Result<()> {
    let combos = combinations(items, k)
        .with_context(|| format!("failed to build combinations of size {}", k))?;

    let Some(rank) = rank else {
        return emit(out, combos.iter(), walk, config);
    };

    let cursor = combos
        .cursor_at(rank)
        .with_context(|| format!("no combination at rank {}", rank))?;
    let Some(view) = cursor.view() else {
        bail!("rank {} is the end of a range of {} combinations", rank, combos.len());
    };
    writeln!(out, "{}", view.render(config))?;
    Ok(())
}

fn run_count<W: Write>(out: &mut W, k: Option<i64>, items: &[String]) -> Result<()> {
    let len = match k {
        Some(k) => combinations(items, k)
            .with_context(|| format!("failed to count combinations of size {}", k))?
            .len(),
        None => power_set(items).context("failed to count power set")?.len(),
    };
    writeln!(out, "{}", len)?;
    Ok(())
}

fn emit<'a, W, S, I>(out: &mut W, views: I, walk: &WalkArgs, config: &RenderConfig) -> Result<()>
where
    W: Write,
    S: Selection,
    I: DoubleEndedIterator<Item = SubsetView<'a, String, S>>,
{
    let limit = walk.limit.unwrap_or(usize::MAX);
    if walk.reverse {
        write_views(out, views.rev().take(limit), config)
    } else {
        write_views(out, views.take(limit), config)
    }
}

fn write_views<'a, W, S, I>(out: &mut W, views: I, config: &RenderConfig) -> Result<()>
where
    W: Write,
    S: Selection,
    I: Iterator<Item = SubsetView<'a, String, S>>,
{
    for view in views {
        writeln!(out, "{}", view.render(config)).context("failed to write subset")?;
    }
    Ok(())
}
