//! The four pure chart builders.
//!
//! Each maps the gapminder records (and, for the choropleth, the selected
//! metric) to a [`ChartSpec`]. No state, no side effects, no error paths:
//! the records are already validated by the dataset store.

use crate::figure;
use crate::spec::{Channel, ChartSpec, MarkType, DATA_REFERENCE};
use indexmap::IndexMap;
use wdi_gapminder::{Metric, Record};

fn hover_fields() -> Vec<String> {
    Record::FIELDS.iter().map(|f| f.to_string()).collect()
}

/// World map with regions keyed by ISO code and colored by `metric`.
///
/// This is the one builder with a runtime parameter: the dropdown re-invokes
/// it on every selection change and the resulting spec replaces the map
/// panel's previous one.
pub fn build_choropleth(records: &[Record], metric: Metric) -> ChartSpec {
    let mut encodings = IndexMap::new();
    encodings.insert(Channel::Location, "iso_code".to_string());
    encodings.insert(Channel::Color, metric.column_name().to_string());

    ChartSpec {
        mark_type: MarkType::Choropleth,
        data_reference: DATA_REFERENCE,
        encodings,
        color_field: metric.column_name().to_string(),
        hover_fields: hover_fields(),
        figure: figure::choropleth_figure(records, metric),
    }
}

/// GDP per capita vs life expectancy, marker area by population, colored by
/// continent, animated over the years with per-country object constancy.
pub fn build_scatter(records: &[Record]) -> ChartSpec {
    let mut encodings = IndexMap::new();
    encodings.insert(Channel::X, "gdp_per_capita".to_string());
    encodings.insert(Channel::Y, "life_expectancy".to_string());
    encodings.insert(Channel::Size, "population".to_string());
    encodings.insert(Channel::Color, "continent".to_string());
    encodings.insert(Channel::AnimationFrame, "year".to_string());
    encodings.insert(Channel::AnimationGroup, "country".to_string());

    ChartSpec {
        mark_type: MarkType::Scatter,
        data_reference: DATA_REFERENCE,
        encodings,
        color_field: "continent".to_string(),
        hover_fields: hover_fields(),
        figure: figure::scatter_figure(records),
    }
}

/// Continent→country hierarchy, slices sized by population and colored by
/// life expectancy.
pub fn build_sunburst(records: &[Record]) -> ChartSpec {
    hierarchy_spec(records, MarkType::Sunburst)
}

/// Same hierarchy and encodings as the sunburst, drawn as a treemap.
pub fn build_treemap(records: &[Record]) -> ChartSpec {
    hierarchy_spec(records, MarkType::Treemap)
}

fn hierarchy_spec(records: &[Record], mark_type: MarkType) -> ChartSpec {
    let mut encodings = IndexMap::new();
    encodings.insert(Channel::Hierarchy, "continent/country".to_string());
    encodings.insert(Channel::Value, "population".to_string());
    encodings.insert(Channel::Color, "life_expectancy".to_string());

    ChartSpec {
        mark_type,
        data_reference: DATA_REFERENCE,
        encodings,
        color_field: "life_expectancy".to_string(),
        hover_fields: hover_fields(),
        figure: figure::hierarchy_figure(records, mark_type.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_gapminder::Continent;

    fn sample() -> Vec<Record> {
        vec![
            Record {
                country: "Japan".to_string(),
                iso_code: "JPN".to_string(),
                iso_num: 392,
                continent: Continent::Asia,
                year: 2007,
                life_expectancy: 82.603,
                population: 127_467_972,
                gdp_per_capita: 31656.068,
            },
            Record {
                country: "Chile".to_string(),
                iso_code: "CHL".to_string(),
                iso_num: 152,
                continent: Continent::Americas,
                year: 2007,
                life_expectancy: 78.553,
                population: 16_284_741,
                gdp_per_capita: 13171.639,
            },
        ]
    }

    #[test]
    fn choropleth_color_field_tracks_the_metric() {
        let records = sample();
        for metric in Metric::ALL {
            let spec = build_choropleth(&records, metric);
            assert_eq!(spec.color_field, metric.column_name());
            assert_eq!(spec.encoding(Channel::Color), Some(metric.column_name()));
        }
    }

    #[test]
    fn choropleth_is_keyed_by_iso_code() {
        let spec = build_choropleth(&sample(), Metric::LifeExpectancy);
        assert_eq!(spec.mark_type, MarkType::Choropleth);
        assert_eq!(spec.encoding(Channel::Location), Some("iso_code"));
        assert_eq!(spec.data_reference, "gapminder");
    }

    #[test]
    fn every_spec_hovers_all_record_fields() {
        let records = sample();
        let specs = [
            build_choropleth(&records, Metric::Population),
            build_scatter(&records),
            build_sunburst(&records),
            build_treemap(&records),
        ];
        for spec in &specs {
            assert_eq!(spec.hover_fields, Record::FIELDS.to_vec());
        }
    }

    #[test]
    fn scatter_encodes_the_animated_gdp_life_expectancy_plane() {
        let spec = build_scatter(&sample());
        assert_eq!(spec.encoding(Channel::X), Some("gdp_per_capita"));
        assert_eq!(spec.encoding(Channel::Y), Some("life_expectancy"));
        assert_eq!(spec.encoding(Channel::Size), Some("population"));
        assert_eq!(spec.encoding(Channel::AnimationFrame), Some("year"));
        assert_eq!(spec.encoding(Channel::AnimationGroup), Some("country"));
        assert_eq!(spec.color_field, "continent");
    }

    #[test]
    fn sunburst_and_treemap_share_encodings() {
        let records = sample();
        let sunburst = build_sunburst(&records);
        let treemap = build_treemap(&records);
        assert_eq!(sunburst.mark_type, MarkType::Sunburst);
        assert_eq!(treemap.mark_type, MarkType::Treemap);
        assert_eq!(sunburst.encodings, treemap.encodings);
        assert_eq!(sunburst.color_field, "life_expectancy");
        assert_eq!(sunburst.figure["data"][0]["type"], "sunburst");
        assert_eq!(treemap.figure["data"][0]["type"], "treemap");
    }
}
