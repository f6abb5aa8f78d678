use std::collections::BTreeMap;
use std::fmt;

use crate::horizon::Horizon;
use crate::record::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum DatasetError {
    DuplicateId(String),
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::DuplicateId(id) => write!(f, "duplicate record id '{id}'"),
        }
    }
}

impl std::error::Error for DatasetError {}

/// Immutable record store for one view scope.
///
/// Records are held sorted by population descending so that iteration order
/// matches layering order: large places draw first, small places on top.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<Record>,
    by_id: BTreeMap<String, usize>,
}

impl Dataset {
    pub fn new(mut records: Vec<Record>) -> Result<Self, DatasetError> {
        records.sort_by(|a, b| {
            b.population
                .cmp(&a.population)
                .then_with(|| a.id.cmp(&b.id))
        });
        let mut by_id = BTreeMap::new();
        for (index, record) in records.iter().enumerate() {
            if by_id.insert(record.id.clone(), index).is_some() {
                return Err(DatasetError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self { records, by_id })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in layering order (population descending).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn by_id(&self, id: &str) -> Option<&Record> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// Merges lazily fetched long-horizon changes into matching records.
    ///
    /// Entries for unknown ids are ignored. Existing embedded horizons are
    /// never overwritten.
    pub fn merge_long_horizons(&mut self, blob: &BTreeMap<String, BTreeMap<Horizon, f64>>) -> usize {
        let mut merged = 0;
        for (id, horizons) in blob {
            let Some(&index) = self.by_id.get(id) else {
                continue;
            };
            let record = &mut self.records[index];
            for (&horizon, &value) in horizons {
                if !horizon.is_embedded() {
                    record.changes.insert(horizon, value);
                    merged += 1;
                }
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use foundation::geo::LatLon;

    use super::{Dataset, DatasetError};
    use crate::horizon::{Horizon, Metric};
    use crate::record::Record;

    fn record(id: &str, population: u32) -> Record {
        Record {
            id: id.to_string(),
            pos: LatLon::new(40.0, -105.0),
            population,
            display_name: id.to_string(),
            base_radius: 5.0,
            price: Some(300_000.0),
            changes: BTreeMap::new(),
        }
    }

    #[test]
    fn records_sorted_population_descending() {
        let ds = Dataset::new(vec![
            record("11111", 100),
            record("22222", 900_000),
            record("33333", 5_000),
        ])
        .unwrap();
        let pops: Vec<u32> = ds.records().iter().map(|r| r.population).collect();
        assert_eq!(pops, vec![900_000, 5_000, 100]);
        assert_eq!(ds.by_id("33333").unwrap().population, 5_000);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Dataset::new(vec![record("11111", 1), record("11111", 2)]).unwrap_err();
        assert_eq!(err, DatasetError::DuplicateId("11111".to_string()));
    }

    #[test]
    fn merge_fills_long_horizons_only() {
        let mut ds = Dataset::new(vec![record("11111", 1)]).unwrap();
        let mut horizons = BTreeMap::new();
        horizons.insert(Horizon::Y5, 42.0);
        horizons.insert(Horizon::Y1, 99.0);
        let mut blob = BTreeMap::new();
        blob.insert("11111".to_string(), horizons);
        blob.insert("99999".to_string(), BTreeMap::new());
        let merged = ds.merge_long_horizons(&blob);
        assert_eq!(merged, 1);
        let r = ds.by_id("11111").unwrap();
        assert_eq!(r.value(Metric::Change(Horizon::Y5)), Some(42.0));
        assert_eq!(r.value(Metric::Change(Horizon::Y1)), None);
    }
}
