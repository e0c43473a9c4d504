mod cli;
mod cmd;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction, FoodAction, TargetAction};
use std::process;

fn init_tracing() {
    let env_filter =
        std::env::var("CALORIE_TRACKER_LOG").unwrap_or_else(|_| "warn".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if json_logs {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let human = cli.human;

    let (command, result) = match cli.command {
        Commands::Init { skip } => ("init", cmd::init::run(skip)),
        Commands::Foods { query } => ("foods", cmd::food::run_list(query.as_deref(), human)),
        Commands::Food { action } => match action {
            FoodAction::Add {
                name,
                protein,
                carbs,
                fat,
            } => ("food", cmd::food::run_add(&name, &protein, &carbs, &fat, human)),
            FoodAction::Show { id } => ("food", cmd::food::run_show(&id, human)),
        },
        Commands::Log { food, grams } => ("log", cmd::log::run(&food, &grams, human)),
        Commands::Entries { last } => ("entries", cmd::entries::run_list(last, human)),
        Commands::Remove { id } => ("remove", cmd::entries::run_remove(&id, human)),
        Commands::Clear { yes } => ("clear", cmd::entries::run_clear(yes, human)),
        Commands::Target { action } => match action {
            TargetAction::Show => ("target", cmd::target::run_show(human)),
            TargetAction::Set { nutrient, value } => {
                ("target", cmd::target::run_set(&nutrient, &value, human))
            }
        },
        Commands::Estimate {
            sex,
            age,
            height,
            weight,
            activity,
            deficit,
            apply,
        } => (
            "estimate",
            cmd::estimate::run(
                cmd::estimate::EstimateArgs {
                    sex: sex.as_deref(),
                    age: age.as_deref(),
                    height: height.as_deref(),
                    weight: weight.as_deref(),
                    activity: activity.as_deref(),
                    deficit: deficit.as_deref(),
                },
                apply,
                human,
            ),
        ),
        Commands::Status => ("status", cmd::status::run(human)),
        Commands::Config { action } => match action {
            ConfigAction::Show => ("config", cmd::config::run_show(human)),
            ConfigAction::Set { key, value } => ("config", cmd::config::run_set(&key, &value)),
        },
        Commands::Completions { shell } => ("completions", cmd::completions::run(shell)),
    };

    if let Err(e) = result {
        let err = calorie_tracker::output::error(command, "general_error", &e.to_string());
        match serde_json::to_string(&err) {
            Ok(line) => eprintln!("{}", line),
            Err(_) => eprintln!("{}", e),
        }
        process::exit(1);
    }
}
