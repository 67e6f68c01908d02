use super::common;
use crate::Result;
use crate::checks::{Rating, Tier};
use core::fmt::Write;
use owo_colors::OwoColorize;

pub fn generate<W: Write>(ratings: &[Rating], use_colors: bool, writer: &mut W) -> Result<()> {
    for (index, rating) in ratings.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
            writeln!(writer, "═══════════════════════════════════════")?;
            writeln!(writer)?;
        }

        let status_str = common::format_tier_status(rating.tier);
        let colored_status = if use_colors {
            match rating.tier {
                Tier::Good => status_str.green().bold().to_string(),
                Tier::Fair => status_str.yellow().bold().to_string(),
                Tier::Poor => status_str.red().bold().to_string(),
            }
        } else {
            status_str.to_string()
        };

        writeln!(
            writer,
            "{} is rated {colored_status} (score {:.2}, {}/{} points)",
            rating.name, rating.score, rating.awarded_points, rating.available_points
        )?;

        for result in &rating.results {
            writeln!(writer, "  {}", common::format_check_line(result))?;
        }
    }

    Ok(())
}
