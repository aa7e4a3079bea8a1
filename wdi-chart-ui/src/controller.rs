//! The dashboard's event→state reducer.
//!
//! UI events land here as [`DashboardEvent`] values and are folded into a
//! [`DashboardState`] by [`reduce`], a total function with no I/O. The
//! signal layer in [`crate::state`] owns the current state and swaps it for
//! the reduced one; nothing else mutates it.

use wdi_gapminder::Metric;

/// Which modal a toggle event refers to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ModalKind {
    Scatter,
    Sunburst,
    Treemap,
}

impl ModalKind {
    pub const ALL: [Self; 3] = [Self::Scatter, Self::Sunburst, Self::Treemap];

    /// Modal window title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Scatter => "Scatter Plot",
            Self::Sunburst => "Sunburst Plot",
            Self::Treemap => "Treemap Plot",
        }
    }

    /// Label for the button that opens the modal.
    pub fn open_label(self) -> &'static str {
        match self {
            Self::Scatter => "Open Scatter Plot",
            Self::Sunburst => "Open Sunburst Plot",
            Self::Treemap => "Open Treemap Plot",
        }
    }

    /// DOM id of the chart container inside the modal. Plotly renders into
    /// this element while the modal is open.
    pub fn graph_id(self) -> &'static str {
        match self {
            Self::Scatter => "scatter-graph",
            Self::Sunburst => "sunburst-graph",
            Self::Treemap => "treemap-graph",
        }
    }
}

/// The dashboard's whole interactive state: the selected choropleth metric
/// and one open/closed flag per modal. Everything else on screen is a pure
/// function of this plus the loaded dataset.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct DashboardState {
    pub metric: Metric,
    pub scatter_open: bool,
    pub sunburst_open: bool,
    pub treemap_open: bool,
}

impl DashboardState {
    pub fn is_open(&self, modal: ModalKind) -> bool {
        match modal {
            ModalKind::Scatter => self.scatter_open,
            ModalKind::Sunburst => self.sunburst_open,
            ModalKind::Treemap => self.treemap_open,
        }
    }
}

/// A UI event the controller reacts to.
///
/// Each modal's open button and its close button both map to the same
/// `ModalToggled` event: the transition negates the flag regardless of which
/// control fired, so a batch that fires both still collapses to one toggle.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DashboardEvent {
    MetricSelected(Metric),
    ModalToggled(ModalKind),
}

/// Fold one event into the state. Total over its input domain: there are no
/// guards, failures, or hidden states.
pub fn reduce(state: &DashboardState, event: &DashboardEvent) -> DashboardState {
    let mut next = *state;
    match event {
        DashboardEvent::MetricSelected(metric) => next.metric = *metric,
        DashboardEvent::ModalToggled(ModalKind::Scatter) => next.scatter_open = !next.scatter_open,
        DashboardEvent::ModalToggled(ModalKind::Sunburst) => {
            next.sunburst_open = !next.sunburst_open
        }
        DashboardEvent::ModalToggled(ModalKind::Treemap) => next.treemap_open = !next.treemap_open,
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_life_expectancy_with_modals_closed() {
        let state = DashboardState::default();
        assert_eq!(state.metric, Metric::LifeExpectancy);
        for modal in ModalKind::ALL {
            assert!(!state.is_open(modal));
        }
    }

    #[test]
    fn selecting_a_metric_replaces_only_the_metric() {
        let state = DashboardState::default();
        let next = reduce(&state, &DashboardEvent::MetricSelected(Metric::Population));
        assert_eq!(next.metric, Metric::Population);
        assert_eq!(
            (next.scatter_open, next.sunburst_open, next.treemap_open),
            (false, false, false)
        );
    }

    #[test]
    fn toggling_a_modal_leaves_the_others_alone() {
        let state = DashboardState::default();
        let next = reduce(&state, &DashboardEvent::ModalToggled(ModalKind::Scatter));
        assert!(next.scatter_open);
        assert!(!next.sunburst_open);
        assert!(!next.treemap_open);
        assert_eq!(next.metric, state.metric);
    }

    #[test]
    fn open_then_close_returns_to_closed() {
        let mut state = DashboardState::default();
        state = reduce(&state, &DashboardEvent::ModalToggled(ModalKind::Scatter));
        assert!(state.scatter_open);
        state = reduce(&state, &DashboardEvent::ModalToggled(ModalKind::Scatter));
        assert!(!state.scatter_open);
    }

    #[test]
    fn toggle_parity_holds_for_every_modal() {
        for modal in ModalKind::ALL {
            let mut state = DashboardState::default();
            for i in 1..=6 {
                state = reduce(&state, &DashboardEvent::ModalToggled(modal));
                assert_eq!(state.is_open(modal), i % 2 == 1);
            }
        }
    }

    #[test]
    fn reduce_does_not_mutate_its_input() {
        let state = DashboardState::default();
        let _ = reduce(&state, &DashboardEvent::ModalToggled(ModalKind::Treemap));
        assert_eq!(state, DashboardState::default());
    }
}
