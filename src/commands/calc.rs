use tracing::{info, warn};

use crate::error::InputError;
use crate::services::footprint::{Diet, FootprintInputs, compute};
use crate::services::report_generator::render_report;
use crate::state::AppState;

pub const CALC_USAGE: &str =
    "/calc <car_km_per_day> <kwh_per_month> <flights_per_year> <veg|nonveg>";

/// Turn the `/calc` arguments into validated inputs. Nothing is produced
/// unless every argument is valid.
pub fn parse_calc_args(args: &[&str]) -> Result<FootprintInputs, InputError> {
    let [car_km, electricity, flights, diet] = args else {
        return Err(InputError::Usage(CALC_USAGE));
    };
    let diet: Diet = diet.parse()?;
    FootprintInputs::parse(car_km, electricity, flights, diet)
}

pub fn calc_handler(state: &mut AppState, args: &[&str]) -> String {
    let inputs = match parse_calc_args(args) {
        Ok(inputs) => inputs,
        Err(e) => {
            warn!(error = %e, "calculation rejected");
            state.metrics.increment_rejected();
            return e.to_string();
        }
    };

    let breakdown = compute(&inputs);
    info!(
        total_tons = breakdown.total_tons,
        band = breakdown.band.as_str(),
        "footprint computed"
    );
    state.metrics.increment_band(breakdown.band);

    match render_report(&inputs, &breakdown, state.config.output) {
        Ok(report) => report,
        Err(e) => {
            warn!(error = %e, "failed to render report");
            format!("Could not render report: {e}")
        }
    }
}
