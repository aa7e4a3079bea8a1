use crate::continent::Continent;
use crate::metric::Metric;
use serde::{Deserialize, Serialize};

/// Expected number of columns in a gapminder CSV row:
/// `country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num`
pub const CSV_ROW_LENGTH: usize = 8;

/// One per-country, per-year observation from the gapminder table.
///
/// Records are immutable once loaded; the dashboard only iterates and
/// projects columns out of them.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    /// ISO 3166-1 alpha-3 code ("USA", "JPN") keying choropleth regions.
    pub iso_code: String,
    /// ISO 3166-1 numeric code.
    pub iso_num: i32,
    pub continent: Continent,
    pub year: i32,
    /// Life expectancy at birth, in years.
    pub life_expectancy: f64,
    pub population: i64,
    /// GDP per capita in inflation-adjusted US dollars.
    pub gdp_per_capita: f64,
}

impl Record {
    /// All record fields in column order. This is the ordered hover-field
    /// list every chart attaches to its markers.
    pub const FIELDS: [&'static str; 8] = [
        "country",
        "iso_code",
        "iso_num",
        "continent",
        "year",
        "life_expectancy",
        "population",
        "gdp_per_capita",
    ];

    /// Project the numeric column a metric refers to.
    pub fn metric_value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::LifeExpectancy => self.life_expectancy,
            Metric::Population => self.population as f64,
            Metric::GdpPerCapita => self.gdp_per_capita,
        }
    }
}
