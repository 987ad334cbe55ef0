use serde::Serialize;

use super::footprint::{FootprintBreakdown, FootprintInputs};
use crate::config::OutputFormat;

#[derive(Serialize)]
struct JsonReport<'a> {
    inputs: &'a FootprintInputs,
    breakdown: &'a FootprintBreakdown,
    verdict: &'static str,
    tip: &'static str,
}

pub fn render_report(
    inputs: &FootprintInputs,
    breakdown: &FootprintBreakdown,
    format: OutputFormat,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(breakdown)),
        OutputFormat::Json => serde_json::to_string_pretty(&JsonReport {
            inputs,
            breakdown,
            verdict: breakdown.band.verdict(),
            tip: breakdown.tip(),
        }),
    }
}

pub fn render_text(breakdown: &FootprintBreakdown) -> String {
    format!(
        "Estimated Annual Carbon Footprint: {:.2} tons CO₂\n\n\
         Breakdown (kg/year):\n \
         • Transport (car + flights): {:.2} kg\n \
         • Electricity: {:.2} kg\n \
         • Food: {:.2} kg\n\n\
         {}\n\n\
         Personalized Tip: {}",
        breakdown.total_tons,
        breakdown.transport_kg,
        breakdown.electricity_kg,
        breakdown.food_kg,
        breakdown.band.verdict(),
        breakdown.tip(),
    )
}
