//! Aggregate statistics for the school survey dataset.
//!
//! Single-pass grouping and counting over [`nces_data::Dataset`] rows, plus
//! the `CITY_STATE` derived column and the survey report built on them.

mod derive;
mod group;
mod survey;

// === Grouping ===
pub use group::{GroupCount, count_group_by, unique, unique_count};

// === Derived Columns ===
pub use derive::{add_city_state_column, city_of};

// === Survey ===
pub use survey::{
    CityCount, SurveyStats, city_with_most_schools, compute_stats, schools_by_locale,
    schools_by_state, total_schools, unique_city_count,
};
