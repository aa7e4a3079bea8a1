//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod metric_selector;
mod modal_dialog;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use metric_selector::MetricSelector;
pub use modal_dialog::ModalDialog;
