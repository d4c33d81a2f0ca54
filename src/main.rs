use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};

use bwf_views::aggregate::{country_year_pivot, matches_by_type, matches_per_year};
use bwf_views::export;
use bwf_views::player;
use bwf_views::{DashboardViews, RecordStore, SelectionCriteria};

#[derive(Parser)]
#[command(name = "bwf-views")]
#[command(about = "Filter and aggregate BWF badminton match records", long_about = None)]
struct Cli {
    /// Match export CSV
    #[arg(short, long, env = "BWF_MATCHES", global = true, default_value = "data/bwf_ms_matches.csv")]
    input: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Selection {
    /// First year to include (default: earliest year in the data)
    #[arg(long, env = "BWF_YEAR_MIN")]
    year_min: Option<i32>,

    /// Last year to include (default: latest year in the data)
    #[arg(long, env = "BWF_YEAR_MAX")]
    year_max: Option<i32>,

    /// Tournament type to include; repeat for several (default: all types)
    #[arg(long = "type", value_name = "TYPE")]
    types: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about the match file
    Info,

    /// Show headline metrics and groupings for a selection
    Summary {
        #[command(flatten)]
        selection: Selection,
    },

    /// List every known player
    Players,

    /// Show a player's matches within a selection
    Player {
        /// Player identifier, matched exactly
        name: String,

        #[command(flatten)]
        selection: Selection,

        /// Write the match rows to this CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write aggregation tables as CSV files into a directory
    Export {
        #[command(flatten)]
        selection: Selection,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let store = RecordStore::from_csv_path(&cli.input)
        .with_context(|| format!("Failed to load {}", cli.input.display()))?;

    match cli.command {
        Commands::Info => info(&store, &cli.input),
        Commands::Summary { selection } => summary(&store, &selection),
        Commands::Players => {
            for name in player::known_players(&store) {
                println!("{}", name);
            }
            Ok(())
        }
        Commands::Player {
            name,
            selection,
            output,
        } => player_matches(&store, &name, &selection, output.as_deref()),
        Commands::Export { selection, output } => export_tables(&store, &selection, &output),
    }
}

fn criteria(store: &RecordStore, selection: &Selection) -> Result<SelectionCriteria> {
    SelectionCriteria::with_defaults(
        store.all(),
        selection.year_min,
        selection.year_max,
        &selection.types,
    )
    .context("No match in the file has a usable date; pass --year-min and --year-max")
}

fn info(store: &RecordStore, input: &Path) -> Result<()> {
    println!("Match file: {}", input.display());
    println!("Matches: {}", store.len());
    println!("Players: {}", store.known_players().len());

    let undated = store.iter().filter(|r| r.date.is_none()).count();
    if undated > 0 {
        println!("Undated matches: {}", undated);
    }

    if let Some(spanning) = SelectionCriteria::spanning(store) {
        println!("Years: {}-{}", spanning.year_min, spanning.year_max);
        println!("Tournament types:");
        for t in &spanning.allowed_tournament_types {
            println!("  {}", t);
        }
    }

    Ok(())
}

fn summary(store: &RecordStore, selection: &Selection) -> Result<()> {
    let criteria = criteria(store, selection)?;
    let views = DashboardViews::for_selection(store, &criteria)
        .context("Failed to compute dashboard views")?;

    println!(
        "Selection: {}-{}, {} tournament types",
        criteria.year_min,
        criteria.year_max,
        criteria.allowed_tournament_types.len()
    );
    println!("Matches: {}", views.summary.match_count);
    println!("Tournaments: {}", views.summary.tournament_count);
    println!("Countries: {}", views.summary.country_count);
    println!();

    println!("Matches per year:");
    for (year, count) in &views.per_year.entries {
        println!("  {}: {}", year, count);
    }
    println!();

    println!("Matches per tournament type:");
    for (t, count) in &views.by_type.entries {
        println!("  {}: {}", t, count);
    }
    println!();

    println!("Average points by sets played:");
    for (sets, totals) in &views.score_groups {
        let mean = totals.iter().map(|&p| p as f64).sum::<f64>() / totals.len() as f64;
        println!("  {} sets: {:.1} over {} matches", sets, mean, totals.len());
    }

    Ok(())
}

fn player_matches(
    store: &RecordStore,
    name: &str,
    selection: &Selection,
    output: Option<&Path>,
) -> Result<()> {
    if !store.known_players().contains(name) {
        anyhow::bail!("Unknown player: {}", name);
    }

    let criteria = criteria(store, selection)?;
    let view = bwf_views::apply(store, &criteria);
    let rows = player::match_details(&view, name);
    let stats = player::player_summary(&view, name);

    println!("{}", name);
    println!(
        "  {} matches, {} won, {} lost ({:.1}% of decided)",
        stats.matches,
        stats.wins,
        stats.losses,
        stats.win_rate() * 100.0
    );
    println!("  Points: {} for, {} against", stats.points_for, stats.points_against);
    println!();

    for row in &rows {
        let result = match row.outcome {
            player::Outcome::Won => "W",
            player::Outcome::Lost => "L",
            player::Outcome::Unknown => "?",
        };
        println!(
            "  {} {} {} ({}) vs {} {}-{}",
            row.date.map(|d| d.to_string()).unwrap_or_default(),
            row.tournament.as_deref().unwrap_or("-"),
            result,
            row.side,
            row.opponent.as_deref().unwrap_or("-"),
            row.points_for,
            row.points_against
        );
    }

    if let Some(path) = output {
        let file = File::create(path).context("Failed to create output CSV")?;
        export::write_player_matches(&rows, file).context("Failed to write output CSV")?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn export_tables(store: &RecordStore, selection: &Selection, dir: &Path) -> Result<()> {
    let criteria = criteria(store, selection)?;
    let view = bwf_views::apply(store, &criteria);

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let pivot_path = dir.join("country_year.csv");
    export::write_pivot(&country_year_pivot(&view), File::create(&pivot_path)?)
        .context("Failed to write country/year pivot")?;

    let years_path = dir.join("matches_per_year.csv");
    export::write_year_series(&matches_per_year(&view), File::create(&years_path)?)
        .context("Failed to write year series")?;

    let types_path = dir.join("matches_by_type.csv");
    export::write_category_tally(&matches_by_type(&view), File::create(&types_path)?)
        .context("Failed to write tournament type tally")?;

    println!("Exported {} matches to {}", view.len(), dir.display());
    Ok(())
}
