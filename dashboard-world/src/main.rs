//! World Development Indicators Dashboard
//!
//! A choropleth world map with a selectable metric (life expectancy,
//! population, GDP per capita) plus three modal-triggered charts over the
//! same gapminder table: an animated GDP-vs-life-expectancy scatter, and a
//! continent→country sunburst and treemap sized by population.
//!
//! Data flow:
//! 1. `include_str!` embeds the gapminder CSV snapshot into the WASM binary.
//! 2. On mount: the CSV is loaded into an in-memory SQLite database and the
//!    records plus the three fixed modal chart specs are computed. A
//!    missing or malformed dataset fails fast into an error panel; no
//!    charts render.
//! 3. When the user changes the metric dropdown, the choropleth spec is
//!    rebuilt and re-rendered; the other panels are untouched.
//! 4. When a modal opens, its pre-built spec is rendered into the modal's
//!    chart container; closing tears the plot down.

use dioxus::prelude::*;
use wdi_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MetricSelector, ModalDialog,
};
use wdi_chart_ui::controller::{DashboardEvent, ModalKind};
use wdi_chart_ui::js_bridge;
use wdi_chart_ui::state::AppState;
use wdi_charts::{build_choropleth, build_scatter, build_sunburst, build_treemap, ChartSpec};
use wdi_db::Database;

/// Embedded gapminder snapshot (country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num).
const GAPMINDER_CSV: &str = include_str!("../../fixtures/gapminder.csv");

/// DOM id of the choropleth map container.
const CHORO_GRAPH_ID: &str = "choro-graph";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("world-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        let db = match Database::new() {
            Ok(db) => db,
            Err(e) => {
                log::error!("Database initialization failed: {}", e);
                state
                    .error_msg
                    .set(Some(format!("Database initialization failed: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        if let Err(e) = db.load_gapminder(GAPMINDER_CSV) {
            log::error!("Failed to load gapminder data: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load gapminder data: {}", e)));
            state.loading.set(false);
            return;
        }

        let records = match db.query_records() {
            Ok(records) if !records.is_empty() => records,
            Ok(_) => {
                state
                    .error_msg
                    .set(Some("No gapminder records available.".to_string()));
                state.loading.set(false);
                return;
            }
            Err(e) => {
                log::error!("Failed to query records: {}", e);
                state.error_msg.set(Some(format!("Failed to query records: {}", e)));
                state.loading.set(false);
                return;
            }
        };

        if let Ok(range) = db.query_year_range() {
            state.year_range.set(Some(range));
        }

        // The three modal charts take no runtime parameter; build their
        // specs once and keep them for the modals to render.
        state.scatter_spec.set(Some(build_scatter(&records)));
        state.sunburst_spec.set(Some(build_sunburst(&records)));
        state.treemap_spec.set(Some(build_treemap(&records)));

        state.records.set(records);
        state.db.set(Some(db));
        state.loading.set(false);
    });

    // ─── Effect 2: Rebuild + re-render the choropleth when the metric changes ───
    use_effect(move || {
        let metric = (state.dashboard)().metric;

        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        // The dashboard signal also carries the modal flags; skip the
        // rebuild when the metric itself is unchanged.
        let current = (state.choropleth_spec)();
        if let Some(spec) = &current {
            if spec.color_field == metric.column_name() {
                return;
            }
        }

        let records = state.records.read().clone();
        if records.is_empty() {
            return;
        }

        let spec = build_choropleth(&records, metric);
        js_bridge::render_plot(CHORO_GRAPH_ID, &spec.figure.to_string());
        state.choropleth_spec.set(Some(spec));
    });

    // ─── Effect 3: Render or tear down modal charts as modals open/close ───
    use_effect(move || {
        let dash = (state.dashboard)();

        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }

        for kind in ModalKind::ALL {
            let spec_signal = match kind {
                ModalKind::Scatter => state.scatter_spec,
                ModalKind::Sunburst => state.sunburst_spec,
                ModalKind::Treemap => state.treemap_spec,
            };
            if dash.is_open(kind) {
                if let Some(spec) = &*spec_signal.read() {
                    render_modal_chart(kind, spec);
                }
            } else {
                js_bridge::destroy_plot(kind.graph_id());
            }
        }
    });

    // ─── Render ───
    let coverage = match (state.year_range)() {
        Some((min, max)) => format!("Gapminder table, {}-{}", min, max),
        None => String::new(),
    };

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if state.error_msg.read().is_none() {
                ChartHeader {
                    title: "World Development Indicators".to_string(),
                    coverage,
                }

                p {
                    style: "font-size: 13px; color: #444; margin: 4px 0;",
                    "Select a variable to display on the choropleth map:"
                }
                MetricSelector {}

                ChartContainer {
                    id: CHORO_GRAPH_ID.to_string(),
                    loading: *state.loading.read(),
                    min_height: 550,
                }

                div {
                    style: "display: flex; gap: 10px; margin-top: 12px;",
                    for kind in ModalKind::ALL {
                        button {
                            style: "padding: 6px 14px; border: 1px solid #1976D2; border-radius: 4px; background: transparent; color: #1976D2; cursor: pointer;",
                            onclick: move |_| state.apply(DashboardEvent::ModalToggled(kind)),
                            {kind.open_label()}
                        }
                    }
                }

                for kind in ModalKind::ALL {
                    ModalDialog {
                        kind,
                        ChartContainer {
                            id: kind.graph_id().to_string(),
                            min_height: 500,
                        }
                    }
                }
            }
        }
    }
}

/// Hand a modal's pre-built spec to the bridge. The bridge polls until the
/// modal's container exists in the DOM, so it is safe to call in the same
/// batch that opens the modal.
fn render_modal_chart(kind: ModalKind, spec: &ChartSpec) {
    log::info!("[WDI] rendering {} chart", kind.title());
    js_bridge::render_plot(kind.graph_id(), &spec.figure.to_string());
}
