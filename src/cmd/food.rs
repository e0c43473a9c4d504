use anyhow::Result;
use serde_json::json;

use calorie_tracker::core::input::parse_or_zero;
use calorie_tracker::core::session::Session;
use calorie_tracker::models::config::Config;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run_list(query: Option<&str>, human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let session = Session::open(&db);
    let foods = session.search_foods(query.unwrap_or(""));

    if human_flag {
        if foods.is_empty() {
            println!("No matching food. You can add your own with `food add`.");
        } else {
            println!("{}", human::foods_table(&foods));
        }
    } else {
        let data: Vec<_> = foods
            .iter()
            .map(|f| {
                json!({
                    "food": f,
                    "kcal_per_100g": f.kcal_per_100g(),
                })
            })
            .collect();
        output::print_success("foods", json!({ "foods": data }))?;
    }
    Ok(())
}

pub fn run_add(name: &str, protein: &str, carbs: &str, fat: &str, human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let mut session = Session::open(&db);

    let food = session
        .add_custom_food(
            name,
            parse_or_zero(protein),
            parse_or_zero(carbs),
            parse_or_zero(fat),
        )
        .ok_or_else(|| anyhow::anyhow!("food name must not be empty"))?;

    if human_flag {
        println!("Added: {}", human::format_food(&food));
    } else {
        output::print_success("food", json!({ "food": food }))?;
    }
    Ok(())
}

pub fn run_show(id: &str, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db()?;
    let session = Session::open(&db);
    let resolved = config.resolve_alias(id);
    let food = session
        .find_food(&resolved)
        .ok_or_else(|| anyhow::anyhow!("unknown food: {}", id))?;

    if human_flag {
        println!("{}", human::format_food(food));
    } else {
        output::print_success(
            "food",
            json!({ "food": food, "kcal_per_100g": food.kcal_per_100g() }),
        )?;
    }
    Ok(())
}
