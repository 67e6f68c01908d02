//! Common utilities shared across report generators.

use crate::checks::{CheckResult, Tier};

/// Format a tier as a consistent string.
pub const fn format_tier_status(tier: Tier) -> &'static str {
    match tier {
        Tier::Good => "GOOD",
        Tier::Fair => "FAIR",
        Tier::Poor => "POOR",
    }
}

/// Format a check outcome as a single line, without indentation.
pub fn format_check_line(result: &CheckResult) -> String {
    let mark = if result.passed { "✔️" } else { "🗙" };
    let points = if result.points == 1 { "point" } else { "points" };

    match &result.detail {
        Some(detail) => format!("{mark} {} ({}/{} {points}): {detail}", result.name, result.awarded_points(), result.points),
        None => format!("{mark} {} ({}/{} {points})", result.name, result.awarded_points(), result.points),
    }
}
