//! Error display component.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a startup error in a styled box. Shown instead of the charts:
/// a dashboard with no dataset has nothing meaningful to draw.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #B71C1C; border-radius: 4px; border: 1px solid #FFB74D;",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
