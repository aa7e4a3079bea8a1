//! CSV loading for the gapminder table.
//!
//! The loader parses CSV data from a string slice (embedded into the WASM
//! binary via `include_str!` by the consuming app) and inserts rows into the
//! `records` table.
//!
//! # CSV Format
//!
//! With headers, in the column order the gapminder export uses:
//! `country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num`

use crate::Database;
use anyhow::{bail, Context};
use rusqlite::params;
use wdi_gapminder::record::CSV_ROW_LENGTH;
use wdi_gapminder::Continent;

impl Database {
    /// Load the gapminder table from a CSV string.
    ///
    /// Rows with non-numeric metric values are skipped and counted; a row
    /// with too few columns or an unrecognized continent name aborts the
    /// load, since that indicates a malformed dataset rather than a gap in
    /// it. Loading an input that yields zero rows is an error: the dashboard
    /// has nothing to render and must fail fast at startup.
    ///
    /// # Example CSV
    /// ```text
    /// country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
    /// Japan,Asia,2007,82.603,127467972,31656.068,JPN,392
    /// ```
    pub fn load_gapminder(&self, csv_data: &str) -> anyhow::Result<()> {
        let conn = self.conn.borrow();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result?;
            if r.len() < CSV_ROW_LENGTH {
                bail!("gapminder row has {} columns, expected {}", r.len(), CSV_ROW_LENGTH);
            }

            let country = r.get(0).unwrap_or("").trim();
            let continent = Continent::from_name(r.get(1).unwrap_or(""))
                .with_context(|| format!("row for {:?}", country))?;
            let year: i64 = match r.get(2).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let life_expectancy: f64 = match r.get(3).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let population: i64 = match r.get(4).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let gdp_per_capita: f64 = match r.get(5).unwrap_or("").trim().parse() {
                Ok(v) => v,
                Err(_) => {
                    skipped += 1;
                    continue;
                }
            };
            let iso_code = r.get(6).unwrap_or("").trim();
            let iso_num: i64 = r.get(7).unwrap_or("0").trim().parse().unwrap_or(0);

            if country.is_empty() || iso_code.is_empty() {
                skipped += 1;
                continue;
            }

            conn.execute(
                "INSERT OR REPLACE INTO records
                 (country, iso_code, iso_num, continent, year,
                  life_expectancy, population, gdp_per_capita)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
                params![
                    country,
                    iso_code,
                    iso_num,
                    continent.as_str(),
                    year,
                    life_expectancy,
                    population,
                    gdp_per_capita
                ],
            )?;
            count += 1;
        }

        if count == 0 {
            bail!("gapminder CSV contained no loadable rows");
        }
        log::info!("[WDI] loader: loaded {} records, skipped {} invalid", count, skipped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    const SAMPLE: &str = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Japan,Asia,2002,82.0,127065841,28604.592,JPN,392
Japan,Asia,2007,82.603,127467972,31656.068,JPN,392
Chile,Americas,2007,78.553,16284741,13171.639,CHL,152
";

    #[test]
    fn load_gapminder_from_csv() {
        let db = Database::new().unwrap();
        db.load_gapminder(SAMPLE).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3);

        let pop: i64 = conn
            .query_row(
                "SELECT population FROM records WHERE iso_code = 'CHL' AND year = 2007",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(pop, 16_284_741);
    }

    #[test]
    fn reload_replaces_rather_than_duplicates() {
        let db = Database::new().unwrap();
        db.load_gapminder(SAMPLE).unwrap();
        db.load_gapminder(SAMPLE).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 3, "Primary key (iso_code, year) should dedupe");
    }

    #[test]
    fn non_numeric_metric_rows_are_skipped() {
        let db = Database::new().unwrap();
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Japan,Asia,2007,82.603,127467972,31656.068,JPN,392
Nowhere,Asia,2007,---,0,---,NWH,0
";
        db.load_gapminder(csv).unwrap();

        let conn = db.conn.borrow();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn unknown_continent_aborts_the_load() {
        let db = Database::new().unwrap();
        let csv = "\
country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num
Atlantis,Atlantis,2007,80.0,1000,1000.0,ATL,0
";
        assert!(db.load_gapminder(csv).is_err());
    }

    #[test]
    fn empty_dataset_is_an_error() {
        let db = Database::new().unwrap();
        let header_only = "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n";
        assert!(db.load_gapminder(header_only).is_err());
        assert!(db.load_gapminder("").is_err());
    }
}
