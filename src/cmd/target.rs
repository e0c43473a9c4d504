use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::input::parse_or_zero;
use calorie_tracker::core::session::Session;
use calorie_tracker::models::target::Nutrient;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let session = Session::open(&db);

    if human_flag {
        println!("{}", human::format_target(session.target()));
    } else {
        output::print_success("target", json!({ "target": session.target() }))?;
    }
    Ok(())
}

pub fn run_set(nutrient: &str, value: &str, human_flag: bool) -> Result<()> {
    let nutrient: Nutrient = nutrient.parse()?;
    let value = parse_or_zero(value);

    let db = super::open_db()?;
    let mut session = Session::open(&db);
    session.set_target(nutrient, value);

    if human_flag {
        println!("Target set: {} = {} {}", nutrient.label(), value, nutrient.unit());
    } else {
        output::print_success("target", json!({ "target": session.target() }))?;
    }
    Ok(())
}
