//! Shared Dioxus components and Plotly.js bridge for the dashboard.
//!
//! This crate provides:
//! - `controller`: the pure event→state reducer for the dashboard
//! - `state`: reactive AppState with Dioxus Signals
//! - `components`: reusable RSX components (selector, containers, modals)
//! - `js_bridge`: Rust wrappers for Plotly.js calls via `js_sys::eval()`

pub mod components;
pub mod controller;
pub mod js_bridge;
pub mod state;
