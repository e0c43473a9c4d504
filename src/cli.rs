use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(
    name = "calorie-tracker",
    version,
    about = "Gram-accurate food logging with daily nutrition targets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config, food list and data directory
    Init {
        /// Skip interactive profile setup, use defaults
        #[arg(long)]
        skip: bool,
    },

    /// List foods, optionally filtered by name
    Foods {
        /// Case-insensitive part of the food name
        query: Option<String>,
    },

    /// Manage individual foods
    Food {
        #[command(subcommand)]
        action: FoodAction,
    },

    /// Log an amount of a food
    Log {
        /// Food id or alias
        food: String,

        /// Amount in grams (a comma decimal separator is accepted)
        #[arg(allow_hyphen_values = true)]
        grams: String,
    },

    /// Show logged entries, most recent first
    Entries {
        /// Number of entries to show
        #[arg(long)]
        last: Option<usize>,
    },

    /// Remove a logged entry
    Remove {
        /// Entry id
        id: String,
    },

    /// Remove every logged entry
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show or change daily targets
    Target {
        #[command(subcommand)]
        action: TargetAction,
    },

    /// Estimate BMR, TDEE and a calorie goal from body metrics
    Estimate {
        /// male or female
        #[arg(long)]
        sex: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Height in cm
        #[arg(long)]
        height: Option<String>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<String>,

        /// Activity level name or multiplier (1.2, 1.375, 1.55, 1.725, 1.9)
        #[arg(long)]
        activity: Option<String>,

        /// Deficit fraction, e.g. 0.15 for 15%
        #[arg(long)]
        deficit: Option<String>,

        /// Use the goal as the daily calorie target
        #[arg(long)]
        apply: bool,
    },

    /// Today's totals against targets
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Print a shell completion script
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum FoodAction {
    /// Add a food from its macros per 100 g (energy uses the 4/4/9 rule)
    Add {
        /// Display name
        name: String,

        /// Protein grams per 100 g
        #[arg(long, default_value = "0")]
        protein: String,

        /// Carbohydrate grams per 100 g
        #[arg(long, default_value = "0")]
        carbs: String,

        /// Fat grams per 100 g
        #[arg(long, default_value = "0")]
        fat: String,
    },
    /// Show one food
    Show {
        /// Food id or alias
        id: String,
    },
}

#[derive(Subcommand)]
pub enum TargetAction {
    /// Show current targets
    Show,
    /// Set one target
    Set {
        /// kcal, protein, carbs or fat
        nutrient: String,
        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (e.g. age, sex, activity, alias.chicken)
        key: String,
        /// Config value
        value: String,
    },
}
