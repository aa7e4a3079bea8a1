use serde::{Deserialize, Serialize};

/// A per-country indicator that the choropleth map can be colored by.
///
/// Each metric maps to one numeric column of the gapminder table. The
/// dropdown in the dashboard offers exactly these three.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    LifeExpectancy,
    Population,
    GdpPerCapita,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::LifeExpectancy, Self::Population, Self::GdpPerCapita];

    /// Stable column name used in chart encodings and the store schema.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::LifeExpectancy => "life_expectancy",
            Self::Population => "population",
            Self::GdpPerCapita => "gdp_per_capita",
        }
    }

    /// Human-readable dropdown label.
    pub fn label(self) -> &'static str {
        match self {
            Self::LifeExpectancy => "Life Expectancy",
            Self::Population => "Population",
            Self::GdpPerCapita => "GDP per Capita",
        }
    }

    /// Inverse of [`column_name`](Self::column_name), for decoding the
    /// dropdown's `<option value>` back into a metric.
    pub fn from_column(column: &str) -> Option<Self> {
        match column {
            "life_expectancy" => Some(Self::LifeExpectancy),
            "population" => Some(Self::Population),
            "gdp_per_capita" => Some(Self::GdpPerCapita),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_names_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(Metric::from_column(metric.column_name()), Some(metric));
        }
    }

    #[test]
    fn default_is_life_expectancy() {
        assert_eq!(Metric::default(), Metric::LifeExpectancy);
    }

    #[test]
    fn unknown_column_is_none() {
        assert_eq!(Metric::from_column("lifeExp"), None);
    }
}
