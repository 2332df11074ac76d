//! Aggregation model: group record durations by (version, job).

use crate::Result;
use crate::log::{Record, RecordKey};
use std::collections::HashMap;

/// Durations grouped by key.
///
/// Keys keep the order in which they were first seen; durations keep the
/// order in which they occurred. Keys are never removed.
#[derive(Debug, Clone, Default)]
pub struct ResultTable {
    entries: Vec<(RecordKey, Vec<u64>)>,
    index: HashMap<RecordKey, usize>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record's duration under its key, adding the key at the end
    /// if it is new.
    pub fn push(&mut self, record: Record) {
        let (key, secs) = record.into_parts();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1.push(secs),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![secs]));
            }
        }
    }

    pub fn get(&self, key: &RecordKey) -> Option<&[u64]> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &RecordKey> {
        self.entries.iter().map(|(key, _)| key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&RecordKey, &[u64])> {
        self.entries
            .iter()
            .map(|(key, secs)| (key, secs.as_slice()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Record> for ResultTable {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.push(record);
        }
    }
}

impl FromIterator<Record> for ResultTable {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

/// Build the table in a single pass, stopping at the first failed record.
pub fn aggregate<I>(records: I) -> Result<ResultTable>
where
    I: IntoIterator<Item = Result<Record>>,
{
    let mut table = ResultTable::new();
    for record in records {
        table.push(record?);
    }
    Ok(table)
}
