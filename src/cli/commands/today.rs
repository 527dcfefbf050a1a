use crate::errors::AppResult;
use crate::utils::time::{format_date_long, format_time};
use chrono::Local;

/// Print today's long date and the current time.
pub fn handle() -> AppResult<()> {
    let now = Local::now();
    println!("📅 {}", format_date_long(&now));
    println!("🕘 {}", format_time(&now));
    Ok(())
}
