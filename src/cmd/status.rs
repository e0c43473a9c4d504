use anyhow::Result;

use calorie_tracker::core::session::Session;
use calorie_tracker::models::config::Config;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run(human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let db = super::open_db()?;
    let session = Session::open(&db);
    let summary = session.summary();

    if human_flag {
        println!("{}", human::format_summary(&summary, config.display.bar_width));
    } else {
        output::print_success("status", serde_json::to_value(&summary)?)?;
    }
    Ok(())
}
