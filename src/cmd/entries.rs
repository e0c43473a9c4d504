use anyhow::Result;
use serde_json::json;
use std::io::{self, Write};

use calorie_tracker::core::session::Session;
use calorie_tracker::output;
use calorie_tracker::output::human;

pub fn run_list(last: Option<usize>, human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let session = Session::open(&db);
    let all = session.entries().entries();
    let shown = &all[..last.unwrap_or(all.len()).min(all.len())];

    if human_flag {
        if shown.is_empty() {
            println!("No entries yet. Log a food to get started.");
        } else {
            for e in shown {
                println!("{}", human::format_entry(e));
            }
        }
    } else {
        output::print_success(
            "entries",
            json!({ "entries": shown, "totals": session.totals() }),
        )?;
    }
    Ok(())
}

pub fn run_remove(id: &str, human_flag: bool) -> Result<()> {
    let db = super::open_db()?;
    let mut session = Session::open(&db);
    let removed = session.remove_entry(id);

    if human_flag {
        if removed {
            println!("Entry removed: {}", id);
        } else {
            println!("No entry with id {}", id);
        }
    } else {
        output::print_success(
            "remove",
            json!({ "id": id, "removed": removed, "totals": session.totals() }),
        )?;
    }
    Ok(())
}

pub fn run_clear(yes: bool, human_flag: bool) -> Result<()> {
    if !yes && !confirm("Clear the whole log for today?")? {
        if human_flag {
            println!("Nothing cleared.");
        } else {
            output::print_success("clear", json!({ "cleared": 0 }))?;
        }
        return Ok(());
    }

    let db = super::open_db()?;
    let mut session = Session::open(&db);
    let count = session.entries().len();
    session.clear_entries();

    if human_flag {
        println!("Cleared {} entries.", count);
    } else {
        output::print_success("clear", json!({ "cleared": count }))?;
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N]: ", question);
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(matches!(buf.trim().to_lowercase().as_str(), "y" | "yes"))
}
