use anyhow::Result;
use std::io::{self, Write};

use calorie_tracker::core::session::Session;
use calorie_tracker::models::body::{ActivityLevel, Sex};
use calorie_tracker::models::config::Config;

pub fn run(skip: bool) -> Result<()> {
    let mut config = Config::load().unwrap_or_default();

    if config.aliases.is_empty() {
        config.aliases = Config::default_aliases();
    }

    if !skip {
        println!("Calorie Tracker — Initial Setup\n");

        config.profile.sex = Some(prompt_parse::<Sex>("Sex (male/female)")?);
        config.profile.age_years = Some(prompt_parse::<f64>("Age (years)")?);
        config.profile.height_cm = Some(prompt_parse::<f64>("Height (cm)")?);
        config.profile.weight_kg = Some(prompt_parse::<f64>("Weight (kg)")?);
        let activity = prompt_parse::<ActivityLevel>(
            "Activity (sedentary/light/moderate/active/very_active)",
        )?;
        config.profile.activity = Some(activity.multiplier());
    }

    config.save()?;

    // Opening the session seeds the food list, empty log and default target.
    let db = super::open_db()?;
    let session = Session::open(&db);

    if skip {
        println!("Config initialized with defaults at {:?}", Config::path());
    } else {
        println!("\nSetup complete. Data stored in {:?}", Config::data_dir());
    }
    println!("{} foods available.", session.foods().len());
    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("input closed during setup; rerun with --skip");
    }
    Ok(buf.trim().to_string())
}

fn prompt_parse<T: std::str::FromStr>(label: &str) -> Result<T> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a valid value."),
        }
    }
}
