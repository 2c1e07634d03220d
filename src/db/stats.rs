use crate::db::pool::DbPool;
use ansi_term::Colour::{Cyan, Green, Yellow};
use ansi_term::Style;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.1} KB", Cyan.paint("• Size:"), file_kb);

    //
    // 2) TOTAL ITEMS
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM inventory", [], |row| row.get(0))?;
    println!("{} {}", Cyan.paint("• Items:"), Green.paint(count.to_string()));

    //
    // 3) EXPIRY RANGE
    //
    let (first, last): (Option<String>, Option<String>) = pool
        .conn
        .query_row(
            "SELECT MIN(expiry_date), MAX(expiry_date) FROM inventory",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .unwrap_or((None, None));

    let placeholder = Style::new().dimmed().paint("--").to_string();
    println!("{}", Cyan.paint("• Expiry range:"));
    println!("    from: {}", first.unwrap_or_else(|| placeholder.clone()));
    println!("    to:   {}", last.unwrap_or(placeholder));

    println!();
    Ok(())
}
