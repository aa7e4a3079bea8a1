//! The `ChartSpec` data model: marks, encoding channels, and the spec itself.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stable identifier of the one dataset every chart draws from.
pub const DATA_REFERENCE: &str = "gapminder";

/// The mark a chart draws with.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MarkType {
    Choropleth,
    Scatter,
    Sunburst,
    Treemap,
}

impl MarkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Choropleth => "choropleth",
            Self::Scatter => "scatter",
            Self::Sunburst => "sunburst",
            Self::Treemap => "treemap",
        }
    }
}

/// An encoding channel: the visual property a dataset field is mapped onto.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Map region key (ISO alpha-3 code).
    Location,
    X,
    Y,
    /// Marker area.
    Size,
    Color,
    /// Nested path levels for sunburst/treemap marks.
    Hierarchy,
    /// Slice/tile sizing value for hierarchical marks.
    Value,
    AnimationFrame,
    AnimationGroup,
}

/// Declarative description of one chart.
///
/// Recomputed whole on every change, never mutated in place: a dropdown
/// selection produces a new `ChartSpec` that replaces the panel's previous
/// one. `figure` is the Plotly figure JSON derived from the dataset at
/// build time; everything else describes what the figure encodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub mark_type: MarkType,
    /// Identifier of the dataset the encodings refer to.
    pub data_reference: &'static str,
    /// Channel → field mapping, in encoding order.
    pub encodings: IndexMap<Channel, String>,
    /// The field driving the color scale.
    pub color_field: String,
    /// Record fields shown on hover, in column order.
    pub hover_fields: Vec<String>,
    /// Render-ready Plotly figure (`{"data": [...], "layout": {...}}`).
    pub figure: Value,
}

impl ChartSpec {
    /// Field bound to a channel, if any.
    pub fn encoding(&self, channel: Channel) -> Option<&str> {
        self.encodings.get(&channel).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_names_are_plotly_trace_types() {
        assert_eq!(MarkType::Choropleth.as_str(), "choropleth");
        assert_eq!(MarkType::Treemap.as_str(), "treemap");
    }

    #[test]
    fn encodings_preserve_insertion_order() {
        let mut encodings = IndexMap::new();
        encodings.insert(Channel::X, "gdp_per_capita".to_string());
        encodings.insert(Channel::Y, "life_expectancy".to_string());
        encodings.insert(Channel::Size, "population".to_string());
        let channels: Vec<Channel> = encodings.keys().copied().collect();
        assert_eq!(channels, vec![Channel::X, Channel::Y, Channel::Size]);
    }
}
