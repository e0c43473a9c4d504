use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::energy;
use calorie_tracker::core::input::body_metrics_from_input;
use calorie_tracker::core::session::Session;
use calorie_tracker::models::body::Sex;
use calorie_tracker::models::config::Config;
use calorie_tracker::output;
use calorie_tracker::output::human;

/// Raw form values; unset fields fall back to the stored profile.
pub struct EstimateArgs<'a> {
    pub sex: Option<&'a str>,
    pub age: Option<&'a str>,
    pub height: Option<&'a str>,
    pub weight: Option<&'a str>,
    pub activity: Option<&'a str>,
    pub deficit: Option<&'a str>,
}

pub fn run(args: EstimateArgs<'_>, apply: bool, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let profile = config.profile.body_metrics();

    let sex: Sex = match args.sex {
        Some(s) => s.parse()?,
        None => profile.sex,
    };
    let metrics = body_metrics_from_input(
        sex,
        &args.age.map_or_else(|| profile.age_years.to_string(), String::from),
        &args.height.map_or_else(|| profile.height_cm.to_string(), String::from),
        &args.weight.map_or_else(|| profile.weight_kg.to_string(), String::from),
        &args.activity.map_or_else(|| profile.activity.to_string(), String::from),
        &args.deficit.map_or_else(|| profile.deficit.to_string(), String::from),
    );
    let estimate = energy::estimate(&metrics);

    let applied = match (&estimate, apply) {
        (Some(e), true) => {
            let db = super::open_db()?;
            let mut session = Session::open(&db);
            Some(session.apply_energy_goal(e))
        }
        _ => None,
    };

    if human_flag {
        match &estimate {
            Some(e) => {
                println!("{}", human::format_estimate(e));
                if let Some(kcal) = applied {
                    println!("Calorie target set to {} kcal", kcal);
                }
            }
            None => {
                println!("No estimate: age, height, weight and activity must be numbers.");
                if apply {
                    println!("Calorie target left unchanged (--apply skipped)");
                }
            }
        }
    } else {
        output::print_success(
            "estimate",
            json!({
                "metrics": metrics,
                "estimate": estimate,
                "applied_kcal_target": applied,
            }),
        )?;
    }
    Ok(())
}
