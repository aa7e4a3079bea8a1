use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// The five continents present in the gapminder table.
///
/// Continent names arrive as text in the CSV and must match exactly;
/// an unrecognized name is a load-time error, not a silent skip.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Americas,
    Asia,
    Europe,
    Oceania,
}

impl Continent {
    pub const ALL: [Self; 5] = [
        Self::Africa,
        Self::Americas,
        Self::Asia,
        Self::Europe,
        Self::Oceania,
    ];

    /// The name as it appears in the dataset's `continent` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Africa => "Africa",
            Self::Americas => "Americas",
            Self::Asia => "Asia",
            Self::Europe => "Europe",
            Self::Oceania => "Oceania",
        }
    }

    /// Parse a continent name from the dataset.
    pub fn from_name(name: &str) -> anyhow::Result<Self> {
        match name.trim() {
            "Africa" => Ok(Self::Africa),
            "Americas" => Ok(Self::Americas),
            "Asia" => Ok(Self::Asia),
            "Europe" => Ok(Self::Europe),
            "Oceania" => Ok(Self::Oceania),
            other => Err(anyhow!("unknown continent: {:?}", other)),
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for continent in Continent::ALL {
            assert_eq!(Continent::from_name(continent.as_str()).unwrap(), continent);
        }
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(Continent::from_name(" Europe ").unwrap(), Continent::Europe);
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert!(Continent::from_name("Antarctica").is_err());
        assert!(Continent::from_name("").is_err());
    }
}
