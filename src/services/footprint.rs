// src/services/footprint.rs
use std::str::FromStr;

use serde::Serialize;

use crate::error::InputError;

// Emission factors (approximate)
pub const CAR_KM_EMISSION: f64 = 0.12; // kg CO₂ per km
pub const ELECTRICITY_KWH_EMISSION: f64 = 0.82; // kg CO₂ per kWh
pub const FLIGHT_EMISSION: f64 = 250.0; // kg CO₂ per flight
pub const DIET_VEG: f64 = 1500.0; // kg CO₂ per year
pub const DIET_NON_VEG: f64 = 2500.0; // kg CO₂ per year

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const LOW_BAND_TONS: f64 = 4.0;
const HIGH_BAND_TONS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    Vegetarian,
    NonVegetarian,
}

impl Diet {
    pub fn annual_kg(self) -> f64 {
        match self {
            Diet::Vegetarian => DIET_VEG,
            Diet::NonVegetarian => DIET_NON_VEG,
        }
    }
}

impl FromStr for Diet {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "veg" | "vegetarian" => Ok(Diet::Vegetarian),
            "nonveg" | "non-veg" | "non-vegetarian" | "non_vegetarian" => {
                Ok(Diet::NonVegetarian)
            }
            _ => Err(InputError::UnknownDiet(s.trim().to_string())),
        }
    }
}

/// Lifestyle figures a footprint is computed from.
///
/// Fields are private so every value in circulation has passed
/// [`FootprintInputs::new`] or [`FootprintInputs::parse`], which reject
/// negative, non-finite and overflowing numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintInputs {
    car_km_per_day: f64,
    electricity_kwh_per_month: f64,
    flights_per_year: f64,
    diet: Diet,
}

/// A numeric input together with its yearly emission per unit.
struct Field {
    name: &'static str,
    annual_kg_per_unit: f64,
}

const CAR_FIELD: Field = Field {
    name: "car km per day",
    annual_kg_per_unit: CAR_KM_EMISSION * DAYS_PER_YEAR,
};
const ELECTRICITY_FIELD: Field = Field {
    name: "electricity kWh per month",
    annual_kg_per_unit: ELECTRICITY_KWH_EMISSION * MONTHS_PER_YEAR,
};
const FLIGHTS_FIELD: Field = Field {
    name: "flights per year",
    annual_kg_per_unit: FLIGHT_EMISSION,
};

// Three fields at this ceiling plus a diet still sum to a finite total.
const MAX_FIELD_KG: f64 = f64::MAX / 4.0;

impl Field {
    fn parse(&self, raw: &str) -> Result<f64, InputError> {
        let raw = raw.trim();
        let value = raw.parse::<f64>().map_err(|_| self.invalid(raw))?;
        self.check(value, raw)
    }

    /// Rejects negative and non-finite values, and values whose yearly
    /// emission would overflow.
    fn check(&self, value: f64, shown: &str) -> Result<f64, InputError> {
        if value.is_finite() && value >= 0.0 && value * self.annual_kg_per_unit <= MAX_FIELD_KG {
            Ok(value)
        } else {
            Err(self.invalid(shown))
        }
    }

    fn invalid(&self, shown: &str) -> InputError {
        InputError::InvalidNumericInput {
            field: self.name,
            value: shown.to_string(),
        }
    }
}

impl FootprintInputs {
    pub fn new(
        car_km_per_day: f64,
        electricity_kwh_per_month: f64,
        flights_per_year: f64,
        diet: Diet,
    ) -> Result<Self, InputError> {
        Ok(Self {
            car_km_per_day: CAR_FIELD.check(car_km_per_day, &car_km_per_day.to_string())?,
            electricity_kwh_per_month: ELECTRICITY_FIELD.check(
                electricity_kwh_per_month,
                &electricity_kwh_per_month.to_string(),
            )?,
            flights_per_year: FLIGHTS_FIELD.check(flights_per_year, &flights_per_year.to_string())?,
            diet,
        })
    }

    /// Parse the three numeric text fields. Either all fields are valid or
    /// nothing is produced. Errors echo the text as typed.
    pub fn parse(
        car_km_per_day: &str,
        electricity_kwh_per_month: &str,
        flights_per_year: &str,
        diet: Diet,
    ) -> Result<Self, InputError> {
        Ok(Self {
            car_km_per_day: CAR_FIELD.parse(car_km_per_day)?,
            electricity_kwh_per_month: ELECTRICITY_FIELD.parse(electricity_kwh_per_month)?,
            flights_per_year: FLIGHTS_FIELD.parse(flights_per_year)?,
            diet,
        })
    }

    pub fn car_km_per_day(&self) -> f64 {
        self.car_km_per_day
    }

    pub fn electricity_kwh_per_month(&self) -> f64 {
        self.electricity_kwh_per_month
    }

    pub fn flights_per_year(&self) -> f64 {
        self.flights_per_year
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintBand {
    Low,
    Moderate,
    High,
}

impl FootprintBand {
    pub fn from_tons(total_tons: f64) -> Self {
        if total_tons < LOW_BAND_TONS {
            FootprintBand::Low
        } else if total_tons < HIGH_BAND_TONS {
            FootprintBand::Moderate
        } else {
            FootprintBand::High
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            FootprintBand::Low => "Below global average. Excellent work!",
            FootprintBand::Moderate => "Slightly above average. You can still reduce emissions.",
            FootprintBand::High => "High footprint. Consider lifestyle changes.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FootprintBand::Low => "low",
            FootprintBand::Moderate => "moderate",
            FootprintBand::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Electricity,
    Food,
}

impl Category {
    pub fn tip(self) -> &'static str {
        match self {
            Category::Transport => {
                "Transport is your main contributor. Try carpooling, public transport, or cycling."
            }
            Category::Electricity => {
                "Electricity use is high. Use LED bulbs, unplug chargers, and go solar."
            }
            Category::Food => {
                "Food contributes most. Try more plant-based meals and reduce food waste."
            }
        }
    }
}

/// Picks the category a tip is written for.
///
/// Transport wins only when strictly above both others, then electricity
/// under the same rule; everything else, ties included, falls to food.
pub fn dominant_category(transport_kg: f64, electricity_kg: f64, food_kg: f64) -> Category {
    if transport_kg > electricity_kg && transport_kg > food_kg {
        Category::Transport
    } else if electricity_kg > transport_kg && electricity_kg > food_kg {
        Category::Electricity
    } else {
        Category::Food
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FootprintBreakdown {
    pub transport_kg: f64,
    pub electricity_kg: f64,
    pub food_kg: f64,
    pub total_kg: f64,
    pub total_tons: f64,
    pub band: FootprintBand,
    pub dominant: Category,
}

impl FootprintBreakdown {
    pub fn tip(&self) -> &'static str {
        self.dominant.tip()
    }
}

pub fn compute(inputs: &FootprintInputs) -> FootprintBreakdown {
    let transport_kg = inputs.car_km_per_day * CAR_KM_EMISSION * DAYS_PER_YEAR
        + inputs.flights_per_year * FLIGHT_EMISSION;
    let electricity_kg = inputs.electricity_kwh_per_month * ELECTRICITY_KWH_EMISSION * MONTHS_PER_YEAR;
    let food_kg = inputs.diet.annual_kg();

    let total_kg = transport_kg + electricity_kg + food_kg;
    let total_tons = total_kg / 1000.0;

    FootprintBreakdown {
        transport_kg,
        electricity_kg,
        food_kg,
        total_kg,
        total_tons,
        band: FootprintBand::from_tons(total_tons),
        dominant: dominant_category(transport_kg, electricity_kg, food_kg),
    }
}
