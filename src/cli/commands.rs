//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mealtrack")]
#[command(about = "Personal meal and nutrition tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new data directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Manage the reference meal catalog
    Meal {
        #[command(subcommand)]
        action: MealCommand,
    },

    /// Log a portion of a reference meal
    Log {
        /// Catalog position (as shown by `meal list`) or exact meal name
        meal: String,

        /// Portion multiplier
        #[arg(short, long, default_value_t = 1.0)]
        portions: f64,

        /// Day to log on (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// Show the nutrition summary and meals of a day
    Day {
        /// Time reference (e.g., today, yesterday, last monday, 2025-01-17)
        #[arg(value_name = "TIME_REF", default_value = "today")]
        time_ref: String,
    },

    /// Remove a logged meal from a day
    Unlog {
        /// Position of the entry as shown by `day`
        position: usize,

        /// Day the entry was logged on
        #[arg(short, long, default_value = "today")]
        date: String,
    },

    /// Export the log as CSV
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MealCommand {
    /// Add a reference meal (values per one portion)
    Add {
        name: String,

        #[arg(long)]
        calories: f64,

        /// Protein in grams
        #[arg(long)]
        protein: f64,

        /// Fat in grams
        #[arg(long)]
        fat: f64,

        /// Carbs in grams
        #[arg(long)]
        carbs: f64,
    },

    /// List the catalog
    List,

    /// Remove reference meals by position
    Remove {
        /// Positions as shown by `meal list`
        #[arg(required = true)]
        positions: Vec<usize>,
    },

    /// Import reference meals from a CSV file (Name,Calories,Protein,Fat,Carbs)
    Import { file: PathBuf },
}
