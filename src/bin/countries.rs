use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use countries_rs::api::{Client, DEFAULT_ENDPOINT};
use countries_rs::query::{self, RangeField};
use countries_rs::sort::{self, Direction, SortKey};
use countries_rs::source::{DataSource, Session};
use countries_rs::{Country, stats};
use num_format::{Locale, ToFormattedString};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "countries",
    version,
    about = "Fetch, cache, query & summarize REST Countries data"
)]
struct Cli {
    /// Cache file path; when it exists it is loaded instead of the API.
    #[arg(long, default_value = "paises.csv")]
    cache: PathBuf,
    /// REST Countries endpoint.
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    url: String,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every country in the snapshot.
    List,
    /// Case-insensitive substring search by country name.
    Search {
        /// Name (or part of it) to look for.
        term: String,
    },
    /// Keep only countries of one continent (case-insensitive exact match).
    Continent {
        /// Continent name, e.g. "South America".
        name: String,
    },
    /// Keep only countries whose population or area lies in [min, max].
    Range(RangeArgs),
    /// Print the snapshot sorted by a key.
    Sort(SortArgs),
    /// Global and per-continent statistics.
    Stats,
    /// Re-fetch from the API and overwrite the cache file.
    Refresh,
}

#[derive(Args, Debug)]
struct RangeArgs {
    /// Field the range applies to.
    #[arg(long, value_enum)]
    field: FieldArg,
    /// Inclusive lower bound.
    #[arg(long)]
    min: u64,
    /// Inclusive upper bound.
    #[arg(long)]
    max: u64,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum FieldArg {
    Population,
    Area,
}

impl From<FieldArg> for RangeField {
    fn from(f: FieldArg) -> Self {
        match f {
            FieldArg::Population => RangeField::Population,
            FieldArg::Area => RangeField::Area,
        }
    }
}

#[derive(Args, Debug)]
struct SortArgs {
    /// Sort key.
    #[arg(long, value_enum)]
    by: KeyArg,
    /// Sort descending instead of ascending.
    #[arg(long, default_value_t = false)]
    desc: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KeyArg {
    Name,
    Population,
    Area,
}

impl From<KeyArg> for SortKey {
    fn from(k: KeyArg) -> Self {
        match k {
            KeyArg::Name => SortKey::Name,
            KeyArg::Population => SortKey::Population,
            KeyArg::Area => SortKey::Area,
        }
    }
}

fn fmt_n(v: u64) -> String {
    v.to_formatted_string(&Locale::en)
}

fn print_countries(list: &[Country]) {
    if list.is_empty() {
        println!("No countries matched.");
        return;
    }
    println!("{} countries:", list.len());
    for c in list {
        println!(
            "- {}  pop={}  area={} km2  ({})",
            c.name,
            fmt_n(c.population),
            fmt_n(c.area),
            c.continent
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let source = DataSource::new(&cli.cache, Client::new(&cli.url));

    // Refresh never reads the cache, so skip the initial load entirely.
    if matches!(cli.cmd, Command::Refresh) {
        let snap = source.refresh()?;
        eprintln!(
            "Refreshed {} countries ({} records skipped) into {}",
            snap.len(),
            snap.skipped,
            cli.cache.display()
        );
        return Ok(());
    }

    let session = Session::start(source)?;
    let snap = session.snapshot();
    if snap.skipped > 0 {
        eprintln!("Note: {} records were skipped during load", snap.skipped);
    }
    let countries = snap.countries();

    match cli.cmd {
        Command::List => print_countries(countries),
        Command::Search { term } => print_countries(&query::search_by_name(countries, &term)?),
        Command::Continent { name } => {
            print_countries(&query::filter_by_continent(countries, &name)?)
        }
        Command::Range(args) => print_countries(&query::filter_by_range(
            countries,
            args.field.into(),
            args.min,
            args.max,
        )?),
        Command::Sort(args) => {
            let dir = if args.desc {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            print_countries(&sort::sort_countries(countries, args.by.into(), dir));
        }
        Command::Stats => cmd_stats(countries)?,
        Command::Refresh => unreachable!("handled above"),
    }
    Ok(())
}

fn cmd_stats(countries: &[Country]) -> Result<()> {
    let g = stats::global_summary(countries)?;
    println!("--- Global ---");
    println!("Countries:        {}", g.count);
    println!(
        "Most populous:    {} ({} hab.)",
        g.most_populous.name,
        fmt_n(g.most_populous.population)
    );
    println!(
        "Least populous:   {} ({} hab.)",
        g.least_populous.name,
        fmt_n(g.least_populous.population)
    );
    println!(
        "Largest:          {} ({} km2)",
        g.largest.name,
        fmt_n(g.largest.area)
    );
    println!(
        "Smallest:         {} ({} km2)",
        g.smallest.name,
        fmt_n(g.smallest.area)
    );
    println!("Mean population:  {:.0} hab.", g.mean_population);
    match g.mean_area {
        Some(m) => println!("Mean area:        {m:.0} km2 (known areas only)"),
        None => println!("Mean area:        n/a (no known areas)"),
    }

    println!("\n--- By continent ---");
    for s in stats::by_continent(countries)? {
        println!("{}:", s.continent);
        println!("  countries:       {}", s.count);
        println!("  mean population: {:.0} hab.", s.mean_population);
        println!("  mean area:       {:.0} km2", s.mean_area);
    }
    Ok(())
}
