// src/data/mod.rs
// Dataset store: the seven category CSVs loaded once at startup, read-only
// thereafter. Filtering is exact equality on the zone column; the chart
// aggregate is group-by-zone, sum, sorted descending.

use polars::prelude::*;
use std::collections::HashMap;
use std::path::Path;

use crate::chat::Category;
use crate::error::{CityRiskError, Result};

/// The six per-factor columns of the composite risk dataset, chart order.
pub const RISK_FACTORS: [&str; 6] = [
    "Accident",
    "Air Pollution",
    "Flood",
    "Heat",
    "Crime",
    "Population",
];

impl Category {
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Flood => "flood.csv",
            Category::Accident => "accident.csv",
            Category::Crime => "crime_details.csv",
            Category::Pollution => "air_pollution.csv",
            Category::Heat => "heat.csv",
            Category::Population => "population.csv",
            Category::Risk => "riskanalysis.csv",
        }
    }

    /// Join-key column. Every dataset uses "Zone" except heat.
    pub fn zone_column(&self) -> &'static str {
        match self {
            Category::Heat => "Area",
            _ => "Zone",
        }
    }

    /// Measure column the bar chart sums. The composite risk dataset has no
    /// single measure; its chart reads the `RISK_FACTORS` columns instead.
    pub fn value_column(&self) -> Option<&'static str> {
        match self {
            Category::Flood => Some("People Affected"),
            Category::Accident => Some("No. of Cases"),
            Category::Crime => Some("Total Crimes"),
            Category::Pollution => Some("Avg. Value (µg/m³) or AQI"),
            Category::Heat => Some("Heatstroke Cases"),
            Category::Population => Some("Population"),
            Category::Risk => None,
        }
    }
}

#[derive(Debug)]
pub struct DatasetStore {
    frames: HashMap<Category, DataFrame>,
}

impl DatasetStore {
    /// Load all seven datasets from `dir`. Any missing or unparseable file is
    /// a fatal startup error.
    pub fn load(dir: &Path) -> Result<Self> {
        let mut frames = HashMap::new();
        for category in Category::ALL {
            let path = dir.join(category.file_name());
            if !path.exists() {
                return Err(CityRiskError::Dataset(format!(
                    "missing dataset file: {}",
                    path.display()
                )));
            }
            let mut df = CsvReadOptions::default()
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.clone()))?
                .finish()?;
            trim_headers(&mut df)?;
            tracing::info!(
                category = category.label(),
                rows = df.height(),
                path = %path.display(),
                "loaded dataset"
            );
            frames.insert(category, df);
        }
        Ok(Self { frames })
    }

    fn frame(&self, category: Category) -> Result<&DataFrame> {
        self.frames.get(&category).ok_or_else(|| {
            CityRiskError::Dataset(format!("dataset not loaded: {}", category.label()))
        })
    }

    /// The category's zone universe: non-null zone names in first-seen order,
    /// deduplicated.
    pub fn zones(&self, category: Category) -> Result<Vec<String>> {
        let df = self.frame(category)?;
        let names = df
            .column(category.zone_column())?
            .as_materialized_series()
            .str()?;

        let mut seen = std::collections::HashSet::new();
        let mut zones = Vec::new();
        for name in names.into_iter().flatten() {
            if seen.insert(name) {
                zones.push(name.to_string());
            }
        }
        Ok(zones)
    }

    /// Rows whose zone column equals `zone` exactly (case-sensitive).
    pub fn rows_for_zone(&self, category: Category, zone: &str) -> Result<DataFrame> {
        let df = self.frame(category)?;
        let filtered = df
            .clone()
            .lazy()
            .filter(col(category.zone_column()).eq(lit(zone)))
            .collect()?;
        Ok(filtered)
    }

    /// Chart aggregate: measure summed per zone, sorted descending. `None`
    /// for the composite risk category, which charts per-factor levels.
    pub fn zone_totals(&self, category: Category) -> Result<Option<Vec<(String, u64)>>> {
        let Some(value_column) = category.value_column() else {
            return Ok(None);
        };
        let zone_column = category.zone_column();

        let df = self
            .frame(category)?
            .clone()
            .lazy()
            .select([
                col(zone_column),
                col(value_column).cast(DataType::Float64),
            ])
            .drop_nulls(None)
            .group_by([col(zone_column)])
            .agg([col(value_column).sum()])
            .sort(
                [value_column],
                SortMultipleOptions::default().with_order_descending(true),
            )
            .collect()?;

        let zones = df.column(zone_column)?.as_materialized_series().str()?;
        let totals = df.column(value_column)?.as_materialized_series().f64()?;

        let mut out = Vec::with_capacity(df.height());
        for (zone, total) in zones.into_iter().zip(totals.into_iter()) {
            if let (Some(zone), Some(total)) = (zone, total) {
                out.push((zone.to_string(), total.max(0.0) as u64));
            }
        }
        Ok(Some(out))
    }

    /// The six per-factor risk levels for a zone, or `None` when the zone's
    /// row is absent or incomplete.
    pub fn risk_profile(&self, zone: &str) -> Result<Option<Vec<(String, u64)>>> {
        let row = self.rows_for_zone(Category::Risk, zone)?;
        if row.height() == 0 {
            return Ok(None);
        }

        let mut levels = Vec::with_capacity(RISK_FACTORS.len());
        for factor in RISK_FACTORS {
            let Ok(column) = row.column(factor) else {
                return Ok(None);
            };
            let casted = column.as_materialized_series().cast(&DataType::Int64)?;
            match casted.i64()?.get(0) {
                Some(level) if level >= 0 => levels.push((factor.to_string(), level as u64)),
                _ => return Ok(None),
            }
        }
        Ok(Some(levels))
    }
}

/// Column headers arrive with stray whitespace in the source spreadsheets.
fn trim_headers(df: &mut DataFrame) -> Result<()> {
    let renames: Vec<(String, String)> = df
        .get_column_names()
        .iter()
        .filter(|name| name.as_str() != name.as_str().trim())
        .map(|name| (name.to_string(), name.as_str().trim().to_string()))
        .collect();
    for (old, new) in renames {
        df.rename(&old, new.as_str().into())?;
    }
    // polars 0.48's `rename` leaves the cached schema stale, so lazy queries
    // would still resolve the old names without this.
    df.clear_schema();
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::path::PathBuf;

    pub(crate) fn write_fixture_datasets(dir: &Path) {
        let fixtures: &[(&str, &str)] = &[
            (
                "flood.csv",
                "Zone , People Affected\nAdyar,1200\nAdyar,300\nVelachery,2500\nAnna Nagar,400\n",
            ),
            (
                "accident.csv",
                "Zone,No. of Cases\nAdyar,35\nAnna Nagar,50\nVelachery,12\n",
            ),
            (
                "crime_details.csv",
                "Zone,Total Crimes\nAdyar,80\nAnna Nagar,120\nVelachery,60\n",
            ),
            (
                "air_pollution.csv",
                "Zone,Avg. Value (µg/m³) or AQI\nAdyar,92\nAnna Nagar,140\nVelachery,110\n",
            ),
            (
                "heat.csv",
                "Area,Heatstroke Cases\nAdyar,5\nAnna Nagar,9\nVelachery,3\n",
            ),
            (
                "population.csv",
                "Zone,Population\nAdyar,250000\nAnna Nagar,310000\nVelachery,420000\n",
            ),
            (
                "riskanalysis.csv",
                "Zone,Accident,Air Pollution,Flood,Heat,Crime,Population\nAdyar,2,1,3,1,2,2\nAnna Nagar,3,2,1,2,3,3\n",
            ),
        ];
        for (name, body) in fixtures {
            std::fs::write(dir.join(name), body).unwrap();
        }
    }

    fn fixture_store() -> (tempfile::TempDir, DatasetStore) {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_datasets(dir.path());
        let store = DatasetStore::load(dir.path()).unwrap();
        (dir, store)
    }

    #[test]
    fn missing_dataset_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = DatasetStore::load(dir.path()).unwrap_err();
        assert!(matches!(err, CityRiskError::Dataset(_)));
    }

    #[test]
    fn headers_are_trimmed_on_load() {
        let (_dir, store) = fixture_store();
        // flood.csv's headers carry stray spaces; lookups use trimmed names.
        assert!(!store.zones(Category::Flood).unwrap().is_empty());
        assert!(store
            .zone_totals(Category::Flood)
            .unwrap()
            .is_some());
    }

    #[test]
    fn zones_are_deduplicated_in_first_seen_order() {
        let (_dir, store) = fixture_store();
        let zones = store.zones(Category::Flood).unwrap();
        assert_eq!(zones, vec!["Adyar", "Velachery", "Anna Nagar"]);
    }

    #[test]
    fn heat_uses_the_area_column() {
        let (_dir, store) = fixture_store();
        let zones = store.zones(Category::Heat).unwrap();
        assert!(zones.contains(&"Anna Nagar".to_string()));
        let rows = store.rows_for_zone(Category::Heat, "Anna Nagar").unwrap();
        assert_eq!(rows.height(), 1);
    }

    #[test]
    fn rows_for_zone_filters_exactly() {
        let (_dir, store) = fixture_store();
        let rows = store.rows_for_zone(Category::Flood, "Adyar").unwrap();
        assert_eq!(rows.height(), 2);
        // Case-sensitive equality: no rows for a lower-cased zone.
        let rows = store.rows_for_zone(Category::Flood, "adyar").unwrap();
        assert_eq!(rows.height(), 0);
    }

    #[test]
    fn zone_totals_are_summed_and_sorted_descending() {
        let (_dir, store) = fixture_store();
        let totals = store.zone_totals(Category::Flood).unwrap().unwrap();
        assert_eq!(
            totals,
            vec![
                ("Velachery".to_string(), 2500),
                ("Adyar".to_string(), 1500),
                ("Anna Nagar".to_string(), 400),
            ]
        );
    }

    #[test]
    fn risk_category_has_no_single_measure() {
        let (_dir, store) = fixture_store();
        assert!(store.zone_totals(Category::Risk).unwrap().is_none());
    }

    #[test]
    fn risk_profile_reads_all_six_factors() {
        let (_dir, store) = fixture_store();
        let profile = store.risk_profile("Adyar").unwrap().unwrap();
        assert_eq!(profile.len(), RISK_FACTORS.len());
        assert_eq!(profile[0], ("Accident".to_string(), 2));
        assert_eq!(profile[2], ("Flood".to_string(), 3));
    }

    #[test]
    fn risk_profile_is_none_for_unknown_zone() {
        let (_dir, store) = fixture_store();
        assert!(store.risk_profile("Velachery").unwrap().is_none());
    }

    #[test]
    fn dataset_files_map_one_to_one() {
        let names: std::collections::HashSet<PathBuf> = Category::ALL
            .iter()
            .map(|c| PathBuf::from(c.file_name()))
            .collect();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
