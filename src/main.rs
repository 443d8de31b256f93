use clap::Parser;
use mealtrack::application::{forms, init::init, ConfigService, MealTracker};
use mealtrack::cli::{format_day_summary, format_meal_list, Cli, Commands, MealCommand};
use mealtrack::domain::{Nutrition, TimeReference};
use mealtrack::error::{MealTrackError, Result};
use mealtrack::infrastructure::{FileSystemRepository, FileSystemStore, TrackerRepository};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr so stdout stays clean for CSV output
fn init_logging() {
    let filter =
        EnvFilter::try_from_env("MEALTRACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_tracker() -> Result<(FileSystemRepository, MealTracker<FileSystemStore>)> {
    let repo = FileSystemRepository::discover()?;
    let tracker = MealTracker::open(repo.store())?;
    Ok((repo, tracker))
}

/// Convert a 1-based position from the command line
fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| MealTrackError::InvalidInput("positions start at 1".to_string()))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            println!("Initialized mealtrack data at {}", path.display());
            Ok(())
        }
        Commands::Meal { action } => run_meal(action),
        Commands::Log {
            meal,
            portions,
            date,
        } => {
            let date = TimeReference::parse(&date)?.resolve_today();
            let (_, mut tracker) = open_tracker()?;

            let entry = forms::daily_entry(date, tracker.find_reference_meal(&meal)?, portions)?;
            let name = entry.reference_meal.name.clone();
            let calories = entry.total_calories();
            tracker.add_daily_entry(entry)?;

            println!(
                "Logged {} x {} on {} ({} kcal)",
                portions,
                name,
                date.format("%Y-%m-%d"),
                calories as i64
            );
            Ok(())
        }
        Commands::Day { time_ref } => {
            let date = TimeReference::parse(&time_ref)?.resolve_today();
            let (_, tracker) = open_tracker()?;
            print!("{}", format_day_summary(&tracker.day_summary(date)));
            Ok(())
        }
        Commands::Unlog { position, date } => {
            let date = TimeReference::parse(&date)?.resolve_today();
            let index = to_index(position)?;
            let (_, mut tracker) = open_tracker()?;

            let day_entries = tracker.entries_for_day(date);
            let id = day_entries
                .get(index)
                .map(|entry| entry.id)
                .ok_or(MealTrackError::IndexOutOfRange {
                    index,
                    len: day_entries.len(),
                })?;

            let removed = tracker.remove_daily_entry(id)?;
            println!(
                "Removed {} from {}",
                removed.reference_meal.name,
                date.format("%Y-%m-%d")
            );
            Ok(())
        }
        Commands::Export { output } => {
            let (repo, tracker) = open_tracker()?;
            let options = repo.load_config()?.export_options()?;
            let csv = tracker.export_to_csv(&options)?;

            match output {
                Some(path) => {
                    fs::write(&path, csv)?;
                    println!(
                        "Exported {} entries to {}",
                        tracker.daily_entries().len(),
                        path.display()
                    );
                }
                None => print!("{}", csv),
            }
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("created = {}", config.created.to_rfc3339());
                println!("export_date_format = {}", config.export_date_format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: mealtrack config [--list | <key> [<value>]]");
                println!("Valid keys: created, export_date_format");
                Ok(())
            }
        }
    }
}

fn run_meal(action: MealCommand) -> Result<()> {
    match action {
        MealCommand::Add {
            name,
            calories,
            protein,
            fat,
            carbs,
        } => {
            let meal = forms::reference_meal(&name, Nutrition::new(calories, protein, fat, carbs))?;
            let (_, mut tracker) = open_tracker()?;
            let name = meal.name.clone();
            tracker.add_reference_meal(meal)?;
            println!("Added {} to the catalog", name);
            Ok(())
        }
        MealCommand::List => {
            let (_, tracker) = open_tracker()?;
            println!("{}", format_meal_list(tracker.reference_meals()).trim_end());
            Ok(())
        }
        MealCommand::Remove { positions } => {
            let indices = positions
                .into_iter()
                .map(to_index)
                .collect::<Result<Vec<usize>>>()?;
            let (_, mut tracker) = open_tracker()?;

            for meal in tracker.remove_reference_meals(&indices)? {
                println!("Removed {}", meal.name);
            }
            Ok(())
        }
        MealCommand::Import { file } => {
            let text = fs::read_to_string(&file)?;
            let (_, mut tracker) = open_tracker()?;

            let imported = tracker.import_reference_meals_from_csv(&text)?;
            println!("Imported {} meals from {}", imported.len(), file.display());
            Ok(())
        }
    }
}
