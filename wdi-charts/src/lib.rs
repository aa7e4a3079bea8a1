//! Declarative chart specifications over the gapminder table.
//!
//! Four pure builders map (records, selected field) to a [`ChartSpec`]:
//! a choropleth world map with a selectable color metric, a GDP-vs-life-
//! expectancy scatter animated by year, and a continent→country sunburst
//! and treemap sized by population.
//!
//! A `ChartSpec` carries both the declarative description (mark, encodings,
//! color field, hover fields) and the Plotly figure JSON computed from the
//! dataset, ready for the JS bridge to hand to `Plotly.react`.

pub mod builders;
mod figure;
pub mod spec;

pub use builders::{build_choropleth, build_scatter, build_sunburst, build_treemap};
pub use spec::{Channel, ChartSpec, MarkType};
