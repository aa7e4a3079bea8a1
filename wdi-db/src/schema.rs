//! SQL schema for the in-memory gapminder database.

/// Returns the full SQL schema as a single batch string.
///
/// One table, `records`, holds the gapminder observations. Continent
/// rollups and year ranges are derived on-the-fly via `GROUP BY` /
/// aggregate queries rather than materialized.
pub fn create_schema() -> &'static str {
    r#"
    CREATE TABLE IF NOT EXISTS records (
        country TEXT NOT NULL,
        iso_code TEXT NOT NULL,
        iso_num INTEGER NOT NULL,
        continent TEXT NOT NULL,
        year INTEGER NOT NULL,
        life_expectancy REAL NOT NULL,
        population INTEGER NOT NULL,
        gdp_per_capita REAL NOT NULL,
        PRIMARY KEY (iso_code, year)
    );
    CREATE INDEX IF NOT EXISTS idx_records_continent ON records(continent);
    CREATE INDEX IF NOT EXISTS idx_records_year ON records(year);
    "#
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn schema_is_valid_sql() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema())
            .expect("Schema SQL should be valid");
    }

    #[test]
    fn schema_creates_records_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'records'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(create_schema()).unwrap();
        conn.execute_batch(create_schema())
            .expect("Applying the schema twice should be a no-op");
    }
}
