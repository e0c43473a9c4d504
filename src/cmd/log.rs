use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::input::parse_number;
use calorie_tracker::core::session::Session;
use calorie_tracker::models::config::Config;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(food: &str, grams_str: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db()?;
    let mut session = Session::open(&db);

    let grams = parse_number(grams_str)
        .ok_or_else(|| anyhow::anyhow!("invalid grams: {}", grams_str))?;
    let food_id = config.resolve_alias(food);
    let entry = session.log_food(&food_id, grams)?;

    if human_flag {
        println!("Logged: {}", human::format_entry(&entry));
    } else {
        output::print_success(
            "log",
            json!({
                "entry": entry,
                "totals": session.totals(),
            }),
        )?;
    }
    Ok(())
}
