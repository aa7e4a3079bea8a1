//! Dropdown selector for the choropleth metric.

use crate::controller::DashboardEvent;
use crate::state::AppState;
use dioxus::prelude::*;
use wdi_gapminder::Metric;

/// Metric dropdown. Reads the selection from AppState and routes changes
/// through the reducer as `MetricSelected` events. Not clearable: one of the
/// three metrics is always selected.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.dashboard)().metric;

    let on_change = move |evt: Event<FormData>| {
        if let Some(metric) = Metric::from_column(&evt.value()) {
            state.apply(DashboardEvent::MetricSelected(metric));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "metric-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Metric: "
            }
            select {
                id: "metric-select",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: metric.column_name(),
                        selected: metric == selected,
                        {metric.label()}
                    }
                }
            }
        }
    }
}
