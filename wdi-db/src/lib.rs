//! In-memory SQLite dataset store for the gapminder table.
//!
//! This crate provides the dashboard's dataset provider: gapminder CSV data
//! is loaded once into an in-memory SQLite database and exposed through
//! typed query methods for consumption by the Dioxus/Plotly.js dashboard
//! compiled to WASM.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Connection>>` wrapper for interior mutability in
//!   single-threaded WASM
//! - In-memory SQLite via `rusqlite` (compiles to WASM via
//!   `wasm32-unknown-unknown`)
//! - CSV data loaded via `include_str!` at compile time in the consuming app
//! - Typed query methods returning serializable structs
//!
//! # Usage
//!
//! ```rust
//! use wdi_db::Database;
//!
//! let db = Database::new().unwrap();
//! db.load_gapminder(
//!     "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n\
//!      Japan,Asia,2007,82.603,127467972,31656.068,JPN,392\n",
//! )
//! .unwrap();
//!
//! let records = db.query_records().unwrap();
//! assert_eq!(records.len(), 1);
//! ```

pub mod schema;
mod loader;
pub mod models;
mod queries;

use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database wrapping the gapminder table.
///
/// Cheaply cloneable (via `Rc`) and suitable for sharing across Dioxus
/// components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create a new in-memory database with the schema applied.
    ///
    /// The database is empty after creation; use
    /// [`load_gapminder`](Self::load_gapminder) to populate it.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }
}
