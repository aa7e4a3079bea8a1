//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Interactive state lives in one
//! [`DashboardState`] cell and is only ever replaced through
//! [`AppState::apply`], which runs the pure reducer.

use crate::controller::{reduce, DashboardEvent, DashboardState};
use dioxus::prelude::*;
use wdi_charts::ChartSpec;
use wdi_db::Database;
use wdi_gapminder::Record;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Dataset store (None until loaded)
    pub db: Signal<Option<Database>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if startup failed
    pub error_msg: Signal<Option<String>>,
    /// The loaded gapminder records, in (country, year) order
    pub records: Signal<Vec<Record>>,
    /// (earliest, latest) observation years, for the header
    pub year_range: Signal<Option<(i32, i32)>>,
    /// Selected metric and modal flags
    pub dashboard: Signal<DashboardState>,
    /// Active spec for the choropleth panel; replaced on metric change
    pub choropleth_spec: Signal<Option<ChartSpec>>,
    /// Fixed-at-startup specs for the three modal panels
    pub scatter_spec: Signal<Option<ChartSpec>>,
    pub sunburst_spec: Signal<Option<ChartSpec>>,
    pub treemap_spec: Signal<Option<ChartSpec>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            db: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            records: Signal::new(Vec::new()),
            year_range: Signal::new(None),
            dashboard: Signal::new(DashboardState::default()),
            choropleth_spec: Signal::new(None),
            scatter_spec: Signal::new(None),
            sunburst_spec: Signal::new(None),
            treemap_spec: Signal::new(None),
        }
    }

    /// Run one event through the reducer and swap in the new state.
    pub fn apply(&mut self, event: DashboardEvent) {
        let next = reduce(&(self.dashboard)(), &event);
        self.dashboard.set(next);
    }
}
