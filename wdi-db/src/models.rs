//! Query result model structs.
//!
//! Full rows come back as [`wdi_gapminder::Record`]; the structs here cover
//! the narrower projections. All derive `Serialize` so they can be handed to
//! Plotly.js as JSON from the Dioxus WASM frontend.

use serde::Serialize;
use wdi_gapminder::Continent;

/// Country metadata for selection lists and hierarchy labels.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CountryInfo {
    pub country: String,
    /// ISO 3166-1 alpha-3 code.
    pub iso_code: String,
    pub continent: Continent,
}

/// Total population per continent, summed over the countries' most recent
/// observations.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ContinentPopulation {
    pub continent: Continent,
    pub population: i64,
}
