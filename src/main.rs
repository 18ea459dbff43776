//! ironplan - 5/3/1 strength training planner

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use ironplan::db::{Repository, SqliteStore};
use ironplan::exercises::MainLift;
use ironplan::plates::{calculate_plates, current_location_plate_set, GeoPoint, Plate, PlateSet};
use ironplan::program::{calculate_training_max, generate_workouts, generate_workouts_for_week};
use ironplan::progress::Progress;

#[derive(Parser)]
#[command(name = "ironplan")]
#[command(author, version, about = "5/3/1 strength training planner")]
struct Cli {
    /// SQLite database path
    #[arg(long, global = true, env = "IRONPLAN_DB", default_value = "ironplan.db")]
    db: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Training max (90% of 1RM) for a one-rep max
    Tm {
        one_rep_max: f64,
    },

    /// Log a one-rep max
    Log {
        /// Lift (squat, bench, deadlift, ohp) or any exercise name
        exercise: String,

        /// One-rep max weight
        weight: f64,

        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List logged one-rep maxes
    History {
        /// Filter by exercise
        exercise: Option<String>,

        /// Number of records to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Current training maxes for the main lifts
    Maxes,

    /// Print the 5/3/1 cycle from the latest maxes
    Cycle {
        /// Only this week (1-4)
        #[arg(short, long)]
        week: Option<u8>,

        /// Only this lift
        #[arg(short, long)]
        lift: Option<MainLift>,
    },

    /// Plate breakdown for a target weight
    Plates {
        target: f64,

        /// Stored plate set name (default: the set at the current location)
        #[arg(short, long)]
        set: Option<String>,

        /// Fall back to the standard kg set instead of lb
        #[arg(long)]
        kg: bool,
    },

    /// Manage plate sets
    #[command(subcommand)]
    PlateSet(PlateSetCommand),

    /// Store the current location
    Location {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

#[derive(Subcommand)]
enum PlateSetCommand {
    /// Add or replace a plate set
    Add {
        name: String,

        /// Bar weight
        #[arg(short, long, default_value = "45")]
        bar: f64,

        /// Plate as weight x quantity, e.g. 45x4 (repeatable)
        #[arg(short, long = "plate", required = true)]
        plates: Vec<Plate>,

        /// Gym latitude
        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        /// Gym longitude
        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,
    },

    /// List stored plate sets
    List,

    /// Turn a plate denomination on or off in a set
    Toggle { name: String, weight: f64 },

    /// Remove a plate set
    Remove { name: String },
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let store = SqliteStore::open(&cli.db)
        .with_context(|| format!("cannot open database {}", cli.db))?;
    let repo = Repository::new(store);

    match cli.command {
        Commands::Tm { one_rep_max } => {
            println!("Training max: {}", calculate_training_max(one_rep_max));
        }

        Commands::Log { exercise, weight, notes } => {
            // Main lifts are stored under their canonical id
            let exercise_id = match exercise.parse::<MainLift>() {
                Ok(lift) => lift.id().to_string(),
                Err(_) => exercise,
            };
            let entry = repo.log_one_rep_max(&exercise_id, weight, notes)?;
            info!(exercise = %entry.exercise_id, weight, "one-rep max logged");
            println!(
                "Logged: {} - {} (training max {})",
                entry.exercise_id,
                entry.weight,
                calculate_training_max(entry.weight)
            );
        }

        Commands::History { exercise, limit } => {
            let progress = Progress::new(repo.one_rep_max_history()?);
            println!("One-rep max history:");
            println!("{:-<60}", "");
            for e in progress.recent(exercise.as_deref(), limit) {
                println!(
                    "{} | {:20} | {:>7} | {}",
                    e.date.format("%Y-%m-%d %H:%M"),
                    e.exercise_id,
                    e.weight,
                    e.notes.as_deref().unwrap_or("-")
                );
            }
        }

        Commands::Maxes => {
            let progress = Progress::new(repo.one_rep_max_history()?);
            let maxes = progress.training_maxes();
            if maxes.is_empty() {
                println!("No maxes logged yet. Try: ironplan log squat 315");
                return Ok(());
            }

            println!("{:16} {:>8} {:>8} {:>8}", "Lift", "1RM", "TM", "Change");
            println!("{:-<44}", "");
            for max in &maxes {
                let name = max
                    .exercise_id
                    .parse::<MainLift>()
                    .map(|l| l.display_name())
                    .unwrap_or(max.exercise_id.as_str());
                let change = progress
                    .progress(&max.exercise_id)
                    .map(|d| format!("{:+}", d))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:16} {:>8} {:>8} {:>8}",
                    name,
                    max.one_rep_max,
                    max.training_max(),
                    change
                );
            }
        }

        Commands::Cycle { week, lift } => {
            let progress = Progress::new(repo.one_rep_max_history()?);
            let maxes = progress.training_maxes();

            let workouts = match week {
                Some(week) => match generate_workouts_for_week(&maxes, week) {
                    Some(workouts) => workouts,
                    None => bail!("week must be 1-4, got {}", week),
                },
                None => generate_workouts(&maxes),
            };

            let workouts: Vec<_> = workouts
                .into_iter()
                .filter(|w| lift.is_none_or(|l| w.lift == l))
                .collect();

            if workouts.is_empty() {
                println!("Nothing to plan. Log a max first: ironplan log bench 225");
            }
            for w in &workouts {
                println!("{}\n", w.format());
            }
        }

        Commands::Plates { target, set, kg } => {
            let name = set.as_deref();
            let plate_set = repo
                .resolve_plate_set(name, kg)?
                .with_context(|| format!("no plate set named '{}'", name.unwrap_or_default()))?;

            info!(set = %plate_set.name, target, "calculating plates");
            let calc = calculate_plates(target, &plate_set);
            println!("[{}] {}", plate_set.name, calc.format());
        }

        Commands::PlateSet(cmd) => match cmd {
            PlateSetCommand::Add { name, bar, plates, lat, lon } => {
                let mut set = PlateSet::new(name, bar, plates);
                if let (Some(lat), Some(lon)) = (lat, lon) {
                    set = set.with_location(GeoPoint::try_new(lat, lon)?);
                }
                repo.save_plate_set(&set)?;
                println!("Saved plate set '{}' (max load {})", set.name, set.max_load());
            }
            PlateSetCommand::List => {
                let sets = repo.plate_sets()?;
                if sets.is_empty() {
                    println!("No plate sets stored; the standard set is used.");
                }
                for set in sets {
                    let plates: Vec<String> = set
                        .plates
                        .iter()
                        .map(|p| {
                            let mark = if p.is_active { "" } else { " (off)" };
                            format!("{}x{}{}", p.weight, p.quantity, mark)
                        })
                        .collect();
                    let at = set
                        .location
                        .map(|p| format!(" @ {},{}", p.latitude, p.longitude))
                        .unwrap_or_default();
                    println!(
                        "{}: bar {} | {}{}",
                        set.name,
                        set.bar_weight,
                        plates.join(" "),
                        at
                    );
                }
            }
            PlateSetCommand::Toggle { name, weight } => {
                let mut set = repo
                    .plate_set(&name)?
                    .with_context(|| format!("no plate set named '{}'", name))?;
                if !set.toggle_plate(weight) {
                    bail!("plate set '{}' has no {} plates", name, weight);
                }
                repo.save_plate_set(&set)?;
                println!("Updated '{}' (max load {})", set.name, set.max_load());
            }
            PlateSetCommand::Remove { name } => {
                if repo.delete_plate_set(&name)? {
                    println!("Removed '{}'", name);
                } else {
                    bail!("no plate set named '{}'", name);
                }
            }
        },

        Commands::Location { latitude, longitude } => {
            let point = GeoPoint::try_new(latitude, longitude)?;
            repo.set_location(point)?;
            let sets = repo.plate_sets()?;
            match current_location_plate_set(Some(point), &sets) {
                Some(set) => println!("Location saved. Nearby plate set: {}", set.name),
                None => println!("Location saved. No plate set within 1 km."),
            }
        }
    }

    Ok(())
}
