//! Modal overlay component.

use crate::controller::{DashboardEvent, ModalKind};
use crate::state::AppState;
use dioxus::prelude::*;

/// Props for ModalDialog
#[derive(Props, Clone, PartialEq)]
pub struct ModalDialogProps {
    /// Which modal this is; drives title, open flag, and the toggle event.
    pub kind: ModalKind,
    /// Modal body, typically a ChartContainer.
    pub children: Element,
}

/// An overlay panel that blocks interaction with the rest of the page until
/// dismissed. Renders nothing while closed.
///
/// Each modal carries its own close button wired to its own `ModalToggled`
/// event, so closing one can never cross-talk into the other two.
#[component]
pub fn ModalDialog(props: ModalDialogProps) -> Element {
    let mut state = use_context::<AppState>();
    let kind = props.kind;
    let open = (state.dashboard)().is_open(kind);

    let on_close = move |_| {
        state.apply(DashboardEvent::ModalToggled(kind));
    };

    rsx! {
        if open {
            div {
                // Backdrop
                style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.5); display: flex; justify-content: center; align-items: center; z-index: 1000;",
                div {
                    style: "background: #fff; border-radius: 6px; width: 800px; max-width: 90vw; max-height: 90vh; overflow-y: auto; box-shadow: 0 4px 24px rgba(0, 0, 0, 0.3);",
                    div {
                        style: "padding: 12px 16px; border-bottom: 1px solid #e0e0e0; font-weight: bold; font-size: 16px;",
                        {kind.title()}
                    }
                    div {
                        style: "padding: 16px;",
                        {props.children}
                    }
                    div {
                        style: "padding: 12px 16px; border-top: 1px solid #e0e0e0; display: flex; justify-content: flex-end;",
                        button {
                            style: "padding: 6px 16px; border: 1px solid #ccc; border-radius: 4px; background: #f5f5f5; cursor: pointer;",
                            onclick: on_close,
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
