//! Typed query methods over the gapminder table.
//!
//! The dashboard only ever iterates the table and projects columns out of
//! it; these queries cover exactly that. All results come back in a stable
//! (country, year) order so chart traces are deterministic.

use crate::models::{ContinentPopulation, CountryInfo};
use crate::Database;
use anyhow::bail;
use wdi_gapminder::{Continent, Record};

impl Database {
    /// Get the full gapminder table, ordered by country then year.
    pub fn query_records(&self) -> anyhow::Result<Vec<Record>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT country, iso_code, iso_num, continent, year,
                    life_expectancy, population, gdp_per_capita
             FROM records
             ORDER BY country, year",
        )?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            let continent = Continent::from_name(&row.get::<_, String>(3)?)?;
            records.push(Record {
                country: row.get(0)?,
                iso_code: row.get(1)?,
                iso_num: row.get(2)?,
                continent,
                year: row.get(4)?,
                life_expectancy: row.get(5)?,
                population: row.get(6)?,
                gdp_per_capita: row.get(7)?,
            });
        }
        log::info!("[WDI] query: query_records returned {} records", records.len());
        Ok(records)
    }

    /// Get one row per country (metadata only), ordered by country name.
    pub fn query_countries(&self) -> anyhow::Result<Vec<CountryInfo>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT DISTINCT country, iso_code, continent
             FROM records
             ORDER BY country",
        )?;
        let mut rows = stmt.query([])?;
        let mut countries = Vec::new();
        while let Some(row) = rows.next()? {
            let continent = Continent::from_name(&row.get::<_, String>(2)?)?;
            countries.push(CountryInfo {
                country: row.get(0)?,
                iso_code: row.get(1)?,
                continent,
            });
        }
        Ok(countries)
    }

    /// Get the (earliest, latest) observation years in the dataset.
    pub fn query_year_range(&self) -> anyhow::Result<(i32, i32)> {
        let conn = self.conn.borrow();
        let (min, max): (Option<i32>, Option<i32>) = conn.query_row(
            "SELECT MIN(year), MAX(year) FROM records",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        match (min, max) {
            (Some(min), Some(max)) => Ok((min, max)),
            _ => bail!("no records loaded"),
        }
    }

    /// Total population per continent, using each country's most recent
    /// observation. Ordered by continent name.
    pub fn query_continent_populations(&self) -> anyhow::Result<Vec<ContinentPopulation>> {
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT continent, SUM(population) AS total_pop
             FROM records r
             WHERE year = (SELECT MAX(year) FROM records WHERE iso_code = r.iso_code)
             GROUP BY continent
             ORDER BY continent",
        )?;
        let mut rows = stmt.query([])?;
        let mut totals = Vec::new();
        while let Some(row) = rows.next()? {
            let continent = Continent::from_name(&row.get::<_, String>(0)?)?;
            totals.push(ContinentPopulation {
                continent,
                population: row.get(1)?,
            });
        }
        Ok(totals)
    }
}
