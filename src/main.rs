use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use fight_metrics::analysis::aggregate::{
    aggregate, chart_points, BubbleSize, ChartKind, FilterOptions, SortKey, SortOrder,
    DEFAULT_LIMIT, DEFAULT_MIN_MINUTES,
};
use fight_metrics::analysis::profile::FighterProfile;
use fight_metrics::api::client::FirestoreClient;
use fight_metrics::config::Config;
use fight_metrics::display::output::{
    display_chart, display_empty_on_failure, display_error, display_info, display_json,
    display_leaderboard, display_no_cohort_warning, display_profile, display_success, EmptyView,
};
use fight_metrics::error::AppError;
use fight_metrics::snapshot::Snapshot;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fight_metrics")]
#[command(about = "Derived metrics and ratings for tracked MMA fighters", long_about = None)]
#[command(version)]
struct Cli {
    /// Read collections from a snapshot file instead of Firestore
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Fighters collection (overrides FIGHTERS_COLLECTION)
    #[arg(long, global = true)]
    fighters_collection: Option<String>,

    /// Weight class collection (overrides WEIGHT_CLASS_COLLECTION)
    #[arg(long, global = true)]
    weight_class_collection: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the profile and ratings for one fighter
    Fighter {
        /// Document id, fighter code or fighter name
        query: String,
    },

    /// Filtered and sorted fighter table
    Leaderboard {
        #[command(flatten)]
        view: ViewArgs,
    },

    /// Chart-ready points for the filtered fighters
    Chart {
        #[arg(long, value_enum, default_value_t = ChartKind::StrikeEfficiency)]
        kind: ChartKind,

        #[arg(long, value_enum, default_value_t = BubbleSize::MinutesTracked)]
        bubble: BubbleSize,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Fetch both collections and save them as a snapshot file
    Snapshot {
        /// Output path (default: ~/.fight_metrics/snapshot.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct ViewArgs {
    #[arg(long, value_enum, default_value_t = SortKey::Accuracy)]
    sort_by: SortKey,

    #[arg(long, value_enum, default_value_t = SortOrder::Desc)]
    order: SortOrder,

    /// Maximum rows (default: 50)
    #[arg(long)]
    limit: Option<usize>,

    /// Drop the 20-minute experience floor
    #[arg(long)]
    all: bool,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long)]
    min_minutes: Option<f64>,
    #[arg(long)]
    min_fights: Option<f64>,
    #[arg(long)]
    min_rounds: Option<f64>,

    #[arg(long)]
    min_strikes_thrown: Option<f64>,
    #[arg(long)]
    min_strikes_landed: Option<f64>,
    #[arg(long)]
    min_punches_thrown: Option<f64>,
    #[arg(long)]
    min_punches_landed: Option<f64>,
    #[arg(long)]
    min_kicks_thrown: Option<f64>,
    #[arg(long)]
    min_kicks_landed: Option<f64>,

    #[arg(long)]
    min_jabs_thrown: Option<f64>,
    #[arg(long)]
    min_hooks_thrown: Option<f64>,
    #[arg(long)]
    min_straights_thrown: Option<f64>,
    #[arg(long)]
    min_uppercuts_thrown: Option<f64>,
    #[arg(long)]
    min_body_kicks_thrown: Option<f64>,
    #[arg(long)]
    min_leg_kicks_thrown: Option<f64>,
    #[arg(long)]
    min_high_kicks_thrown: Option<f64>,
    #[arg(long)]
    min_elbows_thrown: Option<f64>,

    #[arg(long)]
    min_wins: Option<f64>,
    #[arg(long)]
    max_losses: Option<f64>,
    #[arg(long)]
    min_win_percentage: Option<f64>,
    /// Only fighters with at least one title fight win
    #[arg(long)]
    title_fight_wins: bool,
    /// Only fighters with at least one title fight loss
    #[arg(long)]
    title_fight_losses: bool,

    #[arg(long)]
    min_strike_accuracy: Option<f64>,
    #[arg(long)]
    max_strike_accuracy: Option<f64>,
    #[arg(long)]
    min_punch_accuracy: Option<f64>,
    #[arg(long)]
    max_punch_accuracy: Option<f64>,
    #[arg(long)]
    min_kick_accuracy: Option<f64>,
    #[arg(long)]
    max_kick_accuracy: Option<f64>,
}

impl ViewArgs {
    fn into_options(self) -> FilterOptions {
        let f = self.filters;
        let floor = if self.all { None } else { Some(DEFAULT_MIN_MINUTES) };

        FilterOptions {
            min_minutes_tracked: f.min_minutes.or(floor),
            min_fights_tracked: f.min_fights,
            min_rounds_tracked: f.min_rounds,
            min_strikes_thrown: f.min_strikes_thrown,
            min_strikes_landed: f.min_strikes_landed,
            min_punches_thrown: f.min_punches_thrown,
            min_punches_landed: f.min_punches_landed,
            min_kicks_thrown: f.min_kicks_thrown,
            min_kicks_landed: f.min_kicks_landed,
            min_jabs_thrown: f.min_jabs_thrown,
            min_hooks_thrown: f.min_hooks_thrown,
            min_straights_thrown: f.min_straights_thrown,
            min_uppercuts_thrown: f.min_uppercuts_thrown,
            min_body_kicks_thrown: f.min_body_kicks_thrown,
            min_leg_kicks_thrown: f.min_leg_kicks_thrown,
            min_high_kicks_thrown: f.min_high_kicks_thrown,
            min_elbows_thrown: f.min_elbows_thrown,
            min_wins: f.min_wins,
            max_losses: f.max_losses,
            min_win_percentage: f.min_win_percentage,
            has_title_fight_wins: f.title_fight_wins.then_some(true),
            has_title_fight_losses: f.title_fight_losses.then_some(true),
            min_strike_accuracy: f.min_strike_accuracy,
            max_strike_accuracy: f.max_strike_accuracy,
            min_punch_accuracy: f.min_punch_accuracy,
            max_punch_accuracy: f.max_punch_accuracy,
            min_kick_accuracy: f.min_kick_accuracy,
            max_kick_accuracy: f.max_kick_accuracy,
            sort_by: self.sort_by,
            sort_order: self.order,
            limit: Some(self.limit.unwrap_or(DEFAULT_LIMIT)),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::from_env()?;
    if let Some(collection) = cli.fighters_collection.clone() {
        config.fighters_collection = collection;
    }
    if let Some(collection) = cli.weight_class_collection.clone() {
        config.weight_class_collection = collection;
    }

    let loaded = load_snapshot(&cli, &config);
    if let Ok(snapshot) = &loaded {
        if snapshot.weight_classes.is_empty() && !cli.json {
            display_no_cohort_warning();
        }
    }

    match cli.command {
        Commands::Fighter { query } => {
            let snapshot = loaded.context("Failed to load fighter data")?;
            let record = snapshot
                .find_fighter(&query)
                .ok_or_else(|| AppError::FighterNotFound(query.clone()))?;
            let profile = FighterProfile::build(record, snapshot.weight_class_for(record));

            if cli.json {
                display_json(&profile)?;
            } else {
                display_profile(&profile);
            }
        }

        Commands::Leaderboard { view } => {
            let options = view.into_options();
            let snapshot = match loaded {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    display_empty_on_failure(&e, EmptyView::Leaderboard, cli.json)?;
                    return Err(e).context("Failed to load fighter data");
                }
            };

            let totals = aggregate(&snapshot.fighters, &options);
            if cli.json {
                display_json(&totals)?;
            } else {
                display_leaderboard(
                    &totals,
                    &format!("{} of {} fighters shown", totals.len(), snapshot.fighters.len()),
                );
            }
        }

        Commands::Chart { kind, bubble, view } => {
            let options = view.into_options();
            let snapshot = match loaded {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    display_empty_on_failure(&e, EmptyView::Chart(kind, bubble), cli.json)?;
                    return Err(e).context("Failed to load fighter data");
                }
            };

            let totals = aggregate(&snapshot.fighters, &options);
            let points = chart_points(&totals, kind, bubble);
            if cli.json {
                display_json(&points)?;
            } else {
                display_chart(&points, kind, bubble);
            }
        }

        Commands::Snapshot { out } => {
            let snapshot = loaded.context("Failed to load fighter data")?;
            let path = out.unwrap_or_else(Snapshot::default_path);
            snapshot
                .save(&path, &config.fighters_collection, &config.weight_class_collection)
                .with_context(|| format!("Failed to save snapshot to {}", path.display()))?;

            display_success(&format!(
                "Saved {} fighters and {} weight classes to {}",
                snapshot.fighters.len(),
                snapshot.weight_classes.len(),
                path.display()
            ));
        }
    }

    Ok(())
}

fn load_snapshot(cli: &Cli, config: &Config) -> Result<Snapshot, AppError> {
    let fighters = &config.fighters_collection;
    let weight_classes = &config.weight_class_collection;

    match &cli.file {
        Some(path) => {
            if !cli.json {
                display_info(&format!("Reading snapshot {}", path.display()));
            }
            Snapshot::read(path, fighters, weight_classes)
        }
        None => {
            let client = FirestoreClient::new(config.clone())?;
            if !cli.json {
                display_info(&format!(
                    "Fetching {} from project {}",
                    fighters,
                    config.project_id.as_deref().unwrap_or_default()
                ));
            }
            Snapshot::load(&client, fighters, weight_classes)
        }
    }
}
