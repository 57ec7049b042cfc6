//! `campus prefs ...`: local preferences, no server involved.

use anyhow::Result;
use campus_academic::Preferences;

use super::{Output, print_json};

pub fn dark_mode(prefs: &Preferences, value: Option<&str>) -> Result<()> {
    let on = match value {
        None => prefs.dark_mode()?,
        Some("on") => {
            prefs.set_dark_mode(true)?;
            true
        }
        Some("off") => {
            prefs.set_dark_mode(false)?;
            false
        }
        Some("toggle") => prefs.toggle_dark_mode()?,
        Some(other) => anyhow::bail!("Expected on, off or toggle, got '{}'.", other),
    };
    println!("Dark mode: {}", if on { "on" } else { "off" });
    Ok(())
}

/// Toggle the flag on question `number` (1-based) of `quiz`.
pub fn flag(prefs: &Preferences, quiz: &str, number: usize) -> Result<()> {
    let Some(index) = number.checked_sub(1) else {
        anyhow::bail!("Question numbers start at 1.");
    };
    let on = prefs.toggle_flag(quiz, index)?;
    println!("Question {} {}.", number, if on { "flagged" } else { "unflagged" });
    Ok(())
}

pub fn flags(prefs: &Preferences, quiz: Option<&str>, output: Output) -> Result<()> {
    let quizzes = match quiz {
        Some(q) => vec![q.to_string()],
        None => prefs.flagged_quizzes()?,
    };
    let mut rows = Vec::new();
    for q in quizzes {
        let numbers: Vec<usize> = prefs.flagged(&q)?.iter().map(|i| i + 1).collect();
        rows.push((q, numbers));
    }
    match output {
        Output::Json => print_json(&rows)?,
        Output::Table if rows.iter().all(|(_, n)| n.is_empty()) => {
            println!("No flagged questions.")
        }
        Output::Table => {
            println!("{:16} {}", "QUIZ", "QUESTIONS");
            for (q, numbers) in rows {
                let list: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
                println!("{:16} {}", q, list.join(", "));
            }
        }
    }
    Ok(())
}

pub fn clear_flags(prefs: &Preferences, quiz: &str) -> Result<()> {
    prefs.clear_flags(quiz)?;
    println!("Flags cleared for {}.", quiz);
    Ok(())
}
