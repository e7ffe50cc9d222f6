use crate::types::parameter::Parameter;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Raw historical observations as delivered by the data provider:
/// one map of 8-digit date keys (`YYYYMMDD`) to values per parameter.
///
/// Values are passed through untouched here; sentinel missing-data codes
/// (values ≤ −900) are only filtered when a per-day series is extracted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    values: HashMap<Parameter, BTreeMap<String, f64>>,
}

impl RawSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, parameter: Parameter, date_key: impl Into<String>, value: f64) {
        self.values
            .entry(parameter)
            .or_default()
            .insert(date_key.into(), value);
    }

    pub fn insert_parameter(&mut self, parameter: Parameter, by_date: BTreeMap<String, f64>) {
        self.values.insert(parameter, by_date);
    }

    pub fn get(&self, parameter: Parameter) -> Option<&BTreeMap<String, f64>> {
        self.values.get(&parameter)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
