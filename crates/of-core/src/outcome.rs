//! Stress delta tables for correct and incorrect responses.
//!
//! A [`DeltaTable`] holds exactly one delta per category, so lookups are
//! total. When tables are read from JSON each table is a map keyed by
//! category name and a missing key is reported at load time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::ResponseCategory;
use crate::error::{ConfigError, ConfigResult};

/// Which of the two outcome tables a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// Deltas applied on a correct response.
    Success,
    /// Base penalties applied on an incorrect response.
    Failure,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failure => write!(f, "failure"),
        }
    }
}

/// One stress delta per response category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaTable {
    deltas: [i32; 4],
}

impl DeltaTable {
    /// Build a table from deltas in button order.
    pub fn new(deflect: i32, counter: i32, empathize: i32, question: i32) -> Self {
        Self {
            deltas: [deflect, counter, empathize, question],
        }
    }

    /// Delta for a category.
    pub fn get(&self, category: ResponseCategory) -> i32 {
        self.deltas[category.index()]
    }

    /// Replace the delta for one category.
    pub fn with(mut self, category: ResponseCategory, delta: i32) -> Self {
        self.deltas[category.index()] = delta;
        self
    }

    /// Iterate `(category, delta)` pairs in button order.
    pub fn iter(&self) -> impl Iterator<Item = (ResponseCategory, i32)> + '_ {
        ResponseCategory::ALL.iter().map(|c| (*c, self.get(*c)))
    }

    fn from_map(table: TableKind, map: &BTreeMap<ResponseCategory, i32>) -> ConfigResult<Self> {
        let mut deltas = [0; 4];
        for category in ResponseCategory::ALL {
            deltas[category.index()] = *map
                .get(&category)
                .ok_or(ConfigError::MissingDelta { table, category })?;
        }
        Ok(Self { deltas })
    }

    fn to_map(self) -> BTreeMap<ResponseCategory, i32> {
        self.iter().collect()
    }
}

/// Success and failure delta tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTables", into = "RawTables")]
pub struct OutcomeTables {
    success: DeltaTable,
    failure: DeltaTable,
}

impl OutcomeTables {
    /// Build tables from a success table and a failure table.
    pub fn new(success: DeltaTable, failure: DeltaTable) -> Self {
        Self { success, failure }
    }

    /// Stress change when `category` was the correct answer.
    pub fn success_delta(&self, category: ResponseCategory) -> i32 {
        self.success.get(category)
    }

    /// Base stress penalty when `category` was the wrong answer.
    pub fn failure_delta(&self, category: ResponseCategory) -> i32 {
        self.failure.get(category)
    }

    /// Delta for a response, picking the table by correctness.
    pub fn delta(&self, category: ResponseCategory, correct: bool) -> i32 {
        if correct {
            self.success_delta(category)
        } else {
            self.failure_delta(category)
        }
    }

    /// The success table.
    pub fn success(&self) -> &DeltaTable {
        &self.success
    }

    /// The failure table.
    pub fn failure(&self) -> &DeltaTable {
        &self.failure
    }

    /// Check that success never raises stress and failure never lowers it.
    pub fn validate(&self) -> ConfigResult<()> {
        for (category, value) in self.success.iter() {
            if value > 0 {
                return Err(ConfigError::InvalidDelta {
                    table: TableKind::Success,
                    category,
                    value,
                    expected: "zero or negative",
                });
            }
        }
        for (category, value) in self.failure.iter() {
            if value < 0 {
                return Err(ConfigError::InvalidDelta {
                    table: TableKind::Failure,
                    category,
                    value,
                    expected: "zero or positive",
                });
            }
        }
        Ok(())
    }
}

impl Default for OutcomeTables {
    fn default() -> Self {
        Self {
            success: DeltaTable::new(0, -5, -8, -10),
            failure: DeltaTable::new(20, 15, 12, 18),
        }
    }
}

/// Serialized form: one category-keyed map per table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct RawTables {
    #[serde(default)]
    success: BTreeMap<ResponseCategory, i32>,
    #[serde(default)]
    failure: BTreeMap<ResponseCategory, i32>,
}

impl Default for RawTables {
    fn default() -> Self {
        OutcomeTables::default().into()
    }
}

impl TryFrom<RawTables> for OutcomeTables {
    type Error = ConfigError;

    fn try_from(raw: RawTables) -> ConfigResult<Self> {
        Ok(Self {
            success: DeltaTable::from_map(TableKind::Success, &raw.success)?,
            failure: DeltaTable::from_map(TableKind::Failure, &raw.failure)?,
        })
    }
}

impl From<OutcomeTables> for RawTables {
    fn from(tables: OutcomeTables) -> Self {
        Self {
            success: tables.success.to_map(),
            failure: tables.failure.to_map(),
        }
    }
}
