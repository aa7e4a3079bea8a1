//! Plotly figure JSON emission.
//!
//! Builds `{"data": [...], "layout": {...}}` (plus `"frames"` for the
//! animated scatter) from the gapminder records. The JS bridge passes these
//! payloads to `Plotly.react` unchanged.

use serde_json::{json, Value};
use wdi_gapminder::{Continent, Metric, Record};

/// Continuous colorscale shared by all metric-colored marks.
const COLORSCALE: &str = "Viridis";

/// Marker size cap for the population-sized scatter, in pixels.
const SCATTER_SIZE_MAX: f64 = 50.0;

/// Hover text listing every record field, in column order.
fn hover_text(r: &Record) -> String {
    format!(
        "<b>{}</b><br>iso_code: {}<br>iso_num: {}<br>continent: {}<br>year: {}<br>\
         life_expectancy: {}<br>population: {}<br>gdp_per_capita: {}",
        r.country,
        r.iso_code,
        r.iso_num,
        r.continent,
        r.year,
        r.life_expectancy,
        r.population,
        r.gdp_per_capita
    )
}

/// Each country's most recent observation, in input (country) order.
fn latest_per_country(records: &[Record]) -> Vec<&Record> {
    let mut latest: Vec<&Record> = Vec::new();
    for r in records {
        match latest.iter_mut().find(|l| l.iso_code == r.iso_code) {
            Some(slot) => {
                if r.year > slot.year {
                    *slot = r;
                }
            }
            None => latest.push(r),
        }
    }
    latest
}

pub(crate) fn choropleth_figure(records: &[Record], metric: Metric) -> Value {
    let latest = latest_per_country(records);
    let locations: Vec<&str> = latest.iter().map(|r| r.iso_code.as_str()).collect();
    let z: Vec<f64> = latest.iter().map(|r| r.metric_value(metric)).collect();
    let text: Vec<String> = latest.iter().map(|r| hover_text(r)).collect();

    json!({
        "data": [{
            "type": "choropleth",
            "locations": locations,
            "z": z,
            "text": text,
            "hovertemplate": "%{text}<extra></extra>",
            "colorscale": COLORSCALE,
            "colorbar": { "title": { "text": metric.column_name() } },
        }],
        "layout": {
            "title": { "text": metric.label() },
            "height": 550,
            "margin": { "t": 40, "b": 0, "l": 0, "r": 0 },
            "geo": {
                "projection": { "type": "natural earth" },
                "showframe": false,
            },
        },
    })
}

/// One scatter trace per continent for the rows of a single year.
fn scatter_traces(rows: &[&Record], sizeref: f64) -> Vec<Value> {
    Continent::ALL
        .iter()
        .filter_map(|&continent| {
            let members: Vec<&&Record> =
                rows.iter().filter(|r| r.continent == continent).collect();
            if members.is_empty() {
                return None;
            }
            Some(json!({
                "type": "scatter",
                "mode": "markers",
                "name": continent.as_str(),
                "x": members.iter().map(|r| r.gdp_per_capita).collect::<Vec<_>>(),
                "y": members.iter().map(|r| r.life_expectancy).collect::<Vec<_>>(),
                // Stable per-country ids give Plotly object constancy across
                // frames (the animation-group encoding).
                "ids": members.iter().map(|r| r.country.as_str()).collect::<Vec<_>>(),
                "text": members.iter().map(|r| hover_text(r)).collect::<Vec<_>>(),
                "hovertemplate": "%{text}<extra></extra>",
                "marker": {
                    "size": members.iter().map(|r| r.population).collect::<Vec<_>>(),
                    "sizemode": "area",
                    "sizeref": sizeref,
                    "sizemin": 2,
                },
            }))
        })
        .collect()
}

pub(crate) fn scatter_figure(records: &[Record]) -> Value {
    let mut years: Vec<i32> = records.iter().map(|r| r.year).collect();
    years.sort_unstable();
    years.dedup();

    let max_pop = records.iter().map(|r| r.population).max().unwrap_or(1) as f64;
    let sizeref = 2.0 * max_pop / (SCATTER_SIZE_MAX * SCATTER_SIZE_MAX);

    let rows_for = |year: i32| -> Vec<&Record> {
        records.iter().filter(|r| r.year == year).collect()
    };

    let first_year_rows = years.first().map(|&y| rows_for(y)).unwrap_or_default();
    let data = scatter_traces(&first_year_rows, sizeref);

    let frames: Vec<Value> = years
        .iter()
        .map(|&year| {
            json!({
                "name": year.to_string(),
                "data": scatter_traces(&rows_for(year), sizeref),
            })
        })
        .collect();

    let slider_steps: Vec<Value> = years
        .iter()
        .map(|&year| {
            json!({
                "label": year.to_string(),
                "method": "animate",
                "args": [[year.to_string()], {
                    "mode": "immediate",
                    "frame": { "duration": 300, "redraw": false },
                    "transition": { "duration": 300 },
                }],
            })
        })
        .collect();

    json!({
        "data": data,
        "frames": frames,
        "layout": {
            "xaxis": { "type": "log", "title": { "text": "gdp_per_capita" } },
            "yaxis": { "range": [20, 100], "title": { "text": "life_expectancy" } },
            "hovermode": "closest",
            "sliders": [{
                "active": 0,
                "pad": { "t": 30 },
                "currentvalue": { "prefix": "year: " },
                "steps": slider_steps,
            }],
            "updatemenus": [{
                "type": "buttons",
                "showactive": false,
                "x": 0.05, "y": 0,
                "xanchor": "right", "yanchor": "top",
                "buttons": [
                    {
                        "label": "Play",
                        "method": "animate",
                        "args": [null, {
                            "fromcurrent": true,
                            "frame": { "duration": 500, "redraw": false },
                            "transition": { "duration": 300 },
                        }],
                    },
                    {
                        "label": "Pause",
                        "method": "animate",
                        "args": [[null], {
                            "mode": "immediate",
                            "frame": { "duration": 0, "redraw": false },
                            "transition": { "duration": 0 },
                        }],
                    },
                ],
            }],
        },
    })
}

/// A node in the continent→country hierarchy with its rollup.
struct HierarchyNode {
    id: String,
    label: String,
    parent: String,
    /// Population summed over the node's rows.
    value: i64,
    /// Population-weighted mean life expectancy over the node's rows.
    color: f64,
}

/// Roll the records up into continent and country nodes.
///
/// Slice size is total population; node color is the population-weighted
/// mean life expectancy, matching how the original dashboard aggregated the
/// full multi-year table.
fn hierarchy_nodes(records: &[Record]) -> Vec<HierarchyNode> {
    let mut nodes: Vec<HierarchyNode> = Vec::new();

    for continent in Continent::ALL {
        let rows: Vec<&Record> = records.iter().filter(|r| r.continent == continent).collect();
        if rows.is_empty() {
            continue;
        }
        let value: i64 = rows.iter().map(|r| r.population).sum();
        let weighted: f64 = rows
            .iter()
            .map(|r| r.life_expectancy * r.population as f64)
            .sum();
        nodes.push(HierarchyNode {
            id: continent.as_str().to_string(),
            label: continent.as_str().to_string(),
            parent: String::new(),
            value,
            color: weighted / value as f64,
        });

        let mut seen: Vec<&str> = Vec::new();
        for row in &rows {
            if seen.contains(&row.country.as_str()) {
                continue;
            }
            seen.push(&row.country);
            let country_rows: Vec<&&Record> =
                rows.iter().filter(|r| r.country == row.country).collect();
            let value: i64 = country_rows.iter().map(|r| r.population).sum();
            let weighted: f64 = country_rows
                .iter()
                .map(|r| r.life_expectancy * r.population as f64)
                .sum();
            nodes.push(HierarchyNode {
                id: format!("{}/{}", continent.as_str(), row.country),
                label: row.country.clone(),
                parent: continent.as_str().to_string(),
                value,
                color: weighted / value as f64,
            });
        }
    }

    nodes
}

/// Shared emission for the sunburst and treemap marks; `trace_type` is the
/// Plotly trace name ("sunburst" or "treemap").
pub(crate) fn hierarchy_figure(records: &[Record], trace_type: &str) -> Value {
    let nodes = hierarchy_nodes(records);

    json!({
        "data": [{
            "type": trace_type,
            "ids": nodes.iter().map(|n| n.id.as_str()).collect::<Vec<_>>(),
            "labels": nodes.iter().map(|n| n.label.as_str()).collect::<Vec<_>>(),
            "parents": nodes.iter().map(|n| n.parent.as_str()).collect::<Vec<_>>(),
            "values": nodes.iter().map(|n| n.value).collect::<Vec<_>>(),
            "branchvalues": "total",
            "hovertemplate": "<b>%{label}</b><br>population: %{value}<br>life_expectancy: %{color:.2f}<extra></extra>",
            "marker": {
                "colors": nodes.iter().map(|n| n.color).collect::<Vec<_>>(),
                "colorscale": COLORSCALE,
                "showscale": true,
                "colorbar": { "title": { "text": "life_expectancy" } },
            },
        }],
        "layout": {
            "margin": { "t": 20, "b": 20, "l": 20, "r": 20 },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wdi_gapminder::Continent;

    fn record(country: &str, iso: &str, continent: Continent, year: i32, life: f64, pop: i64) -> Record {
        Record {
            country: country.to_string(),
            iso_code: iso.to_string(),
            iso_num: 0,
            continent,
            year,
            life_expectancy: life,
            population: pop,
            gdp_per_capita: 10_000.0,
        }
    }

    fn sample() -> Vec<Record> {
        vec![
            record("Japan", "JPN", Continent::Asia, 2002, 82.0, 100),
            record("Japan", "JPN", Continent::Asia, 2007, 82.6, 300),
            record("Chile", "CHL", Continent::Americas, 2007, 78.5, 200),
        ]
    }

    #[test]
    fn latest_per_country_keeps_one_row_each() {
        let records = sample();
        let latest = latest_per_country(&records);
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].year, 2007, "Japan's 2007 row wins over 2002");
    }

    #[test]
    fn choropleth_keys_regions_by_iso_code() {
        let fig = choropleth_figure(&sample(), Metric::Population);
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "choropleth");
        assert_eq!(trace["locations"], json!(["JPN", "CHL"]));
        assert_eq!(trace["z"], json!([300.0, 200.0]));
        assert_eq!(fig["layout"]["geo"]["projection"]["type"], "natural earth");
    }

    #[test]
    fn scatter_has_one_frame_per_year() {
        let fig = scatter_figure(&sample());
        assert_eq!(fig["frames"].as_array().unwrap().len(), 2);
        assert_eq!(fig["layout"]["xaxis"]["type"], "log");
        assert_eq!(fig["layout"]["yaxis"]["range"], json!([20, 100]));
        // First frame (2002) has Asia only; second adds Americas.
        assert_eq!(fig["frames"][0]["data"].as_array().unwrap().len(), 1);
        assert_eq!(fig["frames"][1]["data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn scatter_marker_sizes_are_populations() {
        let fig = scatter_figure(&sample());
        let marker = &fig["data"][0]["marker"];
        assert_eq!(marker["size"], json!([100]));
        assert_eq!(marker["sizemode"], "area");
    }

    #[test]
    fn hierarchy_rolls_up_population_and_weights_color() {
        let nodes = hierarchy_nodes(&sample());
        // Americas, Chile, Asia, Japan (continent order: Africa..Oceania)
        assert_eq!(nodes.len(), 4);

        let asia = nodes.iter().find(|n| n.id == "Asia").unwrap();
        assert_eq!(asia.parent, "");
        assert_eq!(asia.value, 400);
        let expected = (82.0 * 100.0 + 82.6 * 300.0) / 400.0;
        assert!((asia.color - expected).abs() < 1e-9);

        let japan = nodes.iter().find(|n| n.id == "Asia/Japan").unwrap();
        assert_eq!(japan.parent, "Asia");
        assert_eq!(japan.value, 400);
    }

    #[test]
    fn hierarchy_figure_totals_branch_values() {
        let fig = hierarchy_figure(&sample(), "sunburst");
        let trace = &fig["data"][0];
        assert_eq!(trace["type"], "sunburst");
        assert_eq!(trace["branchvalues"], "total");
        assert_eq!(
            trace["labels"].as_array().unwrap().len(),
            trace["parents"].as_array().unwrap().len()
        );
    }
}
