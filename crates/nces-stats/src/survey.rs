//! Answers to the school survey questions.

use std::collections::HashMap;

use serde::Serialize;

use nces_data::{Dataset, Result, columns};

use crate::derive::{add_city_state_column, city_of};
use crate::group::{GroupCount, count_group_by};

/// City with the most schools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city_state: String,
    pub schools: usize,
}

/// Aggregate statistics over the whole dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyStats {
    pub total_schools: usize,
    pub schools_by_state: GroupCount,
    pub schools_by_locale: GroupCount,
    pub top_city: Option<CityCount>,
    pub unique_cities: usize,
}

/// Number of school records, one per `NCESSCH` entry.
pub fn total_schools(dataset: &Dataset) -> Result<usize> {
    Ok(dataset.column(columns::SCHOOL_ID)?.len())
}

pub fn schools_by_state(dataset: &Dataset) -> Result<GroupCount> {
    count_group_by(dataset, columns::STATE)
}

/// Schools per metro-centric locale code.
pub fn schools_by_locale(dataset: &Dataset) -> Result<GroupCount> {
    count_group_by(dataset, columns::METRO_LOCALE)
}

/// City (as `"<city>, <state>"`) with the most schools.
///
/// Requires the `CITY_STATE` column.
pub fn city_with_most_schools(dataset: &Dataset) -> Result<Option<CityCount>> {
    let cities = count_group_by(dataset, columns::CITY_STATE)?;
    Ok(cities.max_group().map(|(city_state, schools)| CityCount {
        city_state: city_state.to_string(),
        schools,
    }))
}

/// Number of city names found in exactly one state.
///
/// Requires the `CITY_STATE` column.
pub fn unique_city_count(dataset: &Dataset) -> Result<usize> {
    let cities = count_group_by(dataset, columns::CITY_STATE)?;
    let mut states_per_city: HashMap<&str, usize> = HashMap::new();
    for (city_state, _) in cities.iter() {
        *states_per_city.entry(city_of(city_state)).or_default() += 1;
    }
    Ok(states_per_city.values().filter(|&&states| states == 1).count())
}

/// Computes all survey answers, deriving `CITY_STATE` first if needed.
pub fn compute_stats(dataset: &mut Dataset) -> Result<SurveyStats> {
    if !dataset.contains_column(columns::CITY_STATE) {
        add_city_state_column(dataset)?;
    }
    let stats = SurveyStats {
        total_schools: total_schools(dataset)?,
        schools_by_state: schools_by_state(dataset)?,
        schools_by_locale: schools_by_locale(dataset)?,
        top_city: city_with_most_schools(dataset)?,
        unique_cities: unique_city_count(dataset)?,
    };
    tracing::info!(
        total_schools = stats.total_schools,
        states = stats.schools_by_state.len(),
        locales = stats.schools_by_locale.len(),
        unique_cities = stats.unique_cities,
        "Computed survey statistics"
    );
    Ok(stats)
}
