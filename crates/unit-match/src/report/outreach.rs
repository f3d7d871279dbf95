use crate::inventory::format_amount;
use crate::recommendation::Recommendation;

use super::summary::NO_MATCHES_MESSAGE;

/// How many units an outreach message shows unless the caller asks otherwise.
pub const DEFAULT_OUTREACH_LIMIT: usize = 3;

/// Shareable message for a named client: greeting, up to `limit` unit blocks,
/// a note on how many further matches exist, and a closing call to action.
pub fn outreach_message(
    client_name: &str,
    recommendations: &[Recommendation],
    limit: usize,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Hi {client_name}!"));
    lines.push(String::new());

    if recommendations.is_empty() {
        lines.push(NO_MATCHES_MESSAGE.to_string());
        lines.push(String::new());
    } else {
        lines.push("These are the units we think fit what you are looking for:".to_string());
        lines.push(String::new());

        for (index, recommendation) in recommendations.iter().take(limit).enumerate() {
            let unit = &recommendation.unit;
            lines.push(format!(
                "{}. {} - unit {} (floor {})",
                index + 1,
                unit.project_name,
                unit.unit_number,
                unit.floor
            ));
            lines.push(format!("   {}", unit.description));
            lines.push(format!(
                "   {} m2 at ${} (match score {}/100)",
                format_amount(unit.total_area),
                format_amount(unit.sale_value),
                recommendation.result.score
            ));
            lines.push(String::new());
        }

        let remaining = recommendations.len().saturating_sub(limit);
        if remaining > 0 {
            lines.push(format!("...and {remaining} more option(s) on file."));
            lines.push(String::new());
        }
    }

    lines.push("Reply to this message and we will arrange a visit.".to_string());
    lines.join("\n")
}
