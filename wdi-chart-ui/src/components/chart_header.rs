//! Dashboard header component with title and dataset coverage line.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Dashboard title
    pub title: String,
    /// Dataset coverage note (e.g. "142 countries, 1952-2007")
    #[props(default = String::new())]
    pub coverage: String,
}

/// Header showing the dashboard title and what the dataset covers.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "{props.title}"
            }
            if !props.coverage.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.coverage}"
                }
            }
        }
    }
}
