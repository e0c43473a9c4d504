use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::input::parse_number;
use calorie_tracker::models::body::{ActivityLevel, Sex};
use calorie_tracker::models::config::Config;
use calorie_tracker::output;

pub fn run_show(human: bool) -> Result<()> {
    let config = Config::load()?;
    if human {
        let toml_str = toml::to_string_pretty(&config)?;
        println!("{}", toml_str);
    } else {
        output::print_success("config", json!({ "config": config }))?;
    }
    Ok(())
}

fn number(key: &str, value: &str) -> Result<f64> {
    parse_number(value).ok_or_else(|| anyhow::anyhow!("{} must be a number, got: {}", key, value))
}

pub fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "sex" => config.profile.sex = Some(value.parse::<Sex>()?),
        "age" => config.profile.age_years = Some(number(key, value)?),
        "height" => config.profile.height_cm = Some(number(key, value)?),
        "weight" => config.profile.weight_kg = Some(number(key, value)?),
        "activity" => {
            config.profile.activity = Some(value.parse::<ActivityLevel>()?.multiplier())
        }
        "deficit" => {
            let d = number(key, value)?;
            if !(0.0..1.0).contains(&d) {
                anyhow::bail!("deficit must be in [0, 1), got: {}", d);
            }
            config.profile.deficit = Some(d);
        }
        "display.bar_width" => config.display.bar_width = value.parse()?,
        k if k.starts_with("alias.") => {
            let alias = k.strip_prefix("alias.").unwrap_or_default();
            if alias.is_empty() {
                anyhow::bail!("alias name must not be empty");
            }
            config.aliases.insert(alias.to_string(), value.to_string());
        }
        _ => anyhow::bail!("unknown config key: {}", key),
    }

    config.save()?;
    output::print_success("config", json!({ "key": key, "value": value }))?;
    Ok(())
}
