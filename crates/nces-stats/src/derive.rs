//! Derived columns.

use nces_data::{Dataset, Result, columns};

/// Adds `CITY_STATE` as `"<city>, <state>"` from the raw city and state cells.
///
/// An existing `CITY_STATE` column is replaced.
pub fn add_city_state_column(dataset: &mut Dataset) -> Result<()> {
    let city = dataset.column_index(columns::CITY)?;
    let state = dataset.column_index(columns::STATE)?;
    let values = dataset
        .rows()
        .map(|row| {
            let row = row?;
            Ok(format!(
                "{}, {}",
                row.value(city).unwrap_or_default(),
                row.value(state).unwrap_or_default()
            ))
        })
        .collect::<Result<Vec<_>>>()?;
    dataset.insert_column(columns::CITY_STATE, values)
}

/// City part of a `CITY_STATE` key.
pub fn city_of(city_state: &str) -> &str {
    city_state
        .split_once(", ")
        .map_or(city_state, |(city, _)| city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nces_data::Column;

    #[test]
    fn test_add_city_state_column() {
        let mut dataset = Dataset::from_columns(vec![
            Column::new(columns::CITY, vec!["Foley".to_string(), "Bethel".to_string()]),
            Column::new(columns::STATE, vec!["AL".to_string(), "AK".to_string()]),
        ])
        .unwrap();

        add_city_state_column(&mut dataset).unwrap();
        add_city_state_column(&mut dataset).unwrap();

        assert_eq!(dataset.width(), 3);
        let derived = dataset.column(columns::CITY_STATE).unwrap();
        assert_eq!(derived.values, vec!["Foley, AL", "Bethel, AK"]);
    }

    #[test]
    fn test_city_of() {
        assert_eq!(city_of("Foley, AL"), "Foley");
        assert_eq!(city_of("Winston-Salem, NC"), "Winston-Salem");
        assert_eq!(city_of("NoState"), "NoState");
    }
}
