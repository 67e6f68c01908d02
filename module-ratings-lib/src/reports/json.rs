use crate::Result;
use crate::checks::Rating;
use chrono::{DateTime, SecondsFormat, Utc};
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(ratings: &[Rating], generated_at: DateTime<Utc>, writer: &mut W) -> Result<()> {
    let repositories: Vec<_> = ratings
        .iter()
        .map(|rating| {
            let checks: Vec<_> = rating
                .results
                .iter()
                .map(|result| {
                    json!({
                        "name": result.name,
                        "description": result.description,
                        "passed": result.passed,
                        "points": result.points,
                        "awarded_points": result.awarded_points(),
                        "detail": result.detail,
                    })
                })
                .collect();

            json!({
                "name": rating.name,
                "score": rating.score,
                "tier": rating.tier,
                "available_points": rating.available_points,
                "awarded_points": rating.awarded_points,
                "checks": checks,
            })
        })
        .collect();

    let output = json!({
        "generated_at": generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        "repositories": repositories,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
