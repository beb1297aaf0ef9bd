//! Group-by counting and distinct values.

use std::collections::{BTreeSet, HashMap, HashSet};

use serde::{Serialize, Serializer};

use nces_data::{Dataset, Result};

/// Occurrence count per group key, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupCount {
    keys: Vec<String>,
    counts: HashMap<String, usize>,
}

impl GroupCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `key`.
    pub fn increment(&mut self, key: &str) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.keys.push(key.to_string());
                self.counts.insert(key.to_string(), 1);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Groups in the order their keys were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.keys
            .iter()
            .map(|key| (key.as_str(), self.counts.get(key).copied().unwrap_or_default()))
    }

    /// Groups sorted by key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut groups: Vec<(&str, usize)> = self.iter().collect();
        groups.sort_by(|a, b| a.0.cmp(b.0));
        groups
    }

    /// Largest group; on a tie the key seen first wins.
    pub fn max_group(&self) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for (key, count) in self.iter() {
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((key, count));
            }
        }
        best
    }
}

impl Serialize for GroupCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.sorted())
    }
}

/// Counts rows per value of `column`.
pub fn count_group_by(dataset: &Dataset, column: &str) -> Result<GroupCount> {
    let position = dataset.column_index(column)?;
    let mut groups = GroupCount::new();
    for row in dataset.rows() {
        groups.increment(row?.value(position).unwrap_or_default());
    }
    tracing::debug!(column, groups = groups.len(), "Grouped rows");
    Ok(groups)
}

/// Distinct values of `column`, sorted.
pub fn unique(column: &str, dataset: &Dataset) -> Result<Vec<String>> {
    let values: BTreeSet<&str> = dataset
        .column(column)?
        .values
        .iter()
        .map(String::as_str)
        .collect();
    Ok(values.into_iter().map(str::to_string).collect())
}

/// Number of distinct values of `column`.
pub fn unique_count(column: &str, dataset: &Dataset) -> Result<usize> {
    let values: HashSet<&str> = dataset
        .column(column)?
        .values
        .iter()
        .map(String::as_str)
        .collect();
    Ok(values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nces_data::{Column, DataError};

    fn states(values: &[&str]) -> Dataset {
        Dataset::from_columns(vec![Column::new(
            "LSTATE05",
            values.iter().map(|v| (*v).to_string()).collect(),
        )])
        .unwrap()
    }

    #[test]
    fn test_count_group_by() {
        let dataset = states(&["AL", "AK", "AL", "WY", "AL"]);
        let groups = count_group_by(&dataset, "LSTATE05").unwrap();

        assert_eq!(groups.get("AL"), Some(3));
        assert_eq!(groups.get("AK"), Some(1));
        assert_eq!(groups.get("TX"), None);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.total(), 5);
    }

    #[test]
    fn test_iter_first_seen_and_sorted() {
        let dataset = states(&["WY", "AL", "AK", "AL"]);
        let groups = count_group_by(&dataset, "LSTATE05").unwrap();

        assert_eq!(
            groups.iter().collect::<Vec<_>>(),
            vec![("WY", 1), ("AL", 2), ("AK", 1)]
        );
        assert_eq!(groups.sorted(), vec![("AK", 1), ("AL", 2), ("WY", 1)]);
    }

    #[test]
    fn test_max_group_tie_goes_to_first_seen() {
        let dataset = states(&["WY", "AL", "AL", "WY"]);
        let groups = count_group_by(&dataset, "LSTATE05").unwrap();

        assert_eq!(groups.max_group(), Some(("WY", 2)));
        assert_eq!(GroupCount::new().max_group(), None);
    }

    #[test]
    fn test_count_group_by_missing_column() {
        let dataset = states(&["AL"]);
        let result = count_group_by(&dataset, "MLOCALE");
        assert!(matches!(result, Err(DataError::ColumnNotFound { .. })));
    }

    #[test]
    fn test_count_group_by_short_leading_column_fails() {
        let dataset = Dataset::from_columns(vec![
            Column::new("NCESSCH", vec!["010000200277".to_string()]),
            Column::new("LSTATE05", vec!["AL".to_string(), "AK".to_string()]),
        ])
        .unwrap();
        let result = count_group_by(&dataset, "LSTATE05");
        assert!(matches!(
            result,
            Err(DataError::RowOutOfRange { index: 1, .. })
        ));
    }

    #[test]
    fn test_unique() {
        let dataset = states(&["WY", "AL", "AK", "AL"]);

        assert_eq!(unique("LSTATE05", &dataset).unwrap(), vec!["AK", "AL", "WY"]);
        assert_eq!(unique_count("LSTATE05", &dataset).unwrap(), 3);
    }

    #[test]
    fn test_serialize_sorted_map() {
        let dataset = states(&["WY", "AL", "AL"]);
        let groups = count_group_by(&dataset, "LSTATE05").unwrap();

        assert_eq!(serde_json::to_string(&groups).unwrap(), r#"{"AL":2,"WY":1}"#);
    }
}
