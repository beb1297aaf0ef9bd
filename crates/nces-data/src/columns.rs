//! Column names of the NCES public school universe file (2005-06).

/// NCES school ID, a unique 12-character identifier per record.
pub const SCHOOL_ID: &str = "NCESSCH";
/// School name.
pub const SCHOOL_NAME: &str = "SCHNAM05";
/// Location city name.
pub const CITY: &str = "LCITY05";
/// Location USPS state abbreviation.
pub const STATE: &str = "LSTATE05";
/// Metro-centric locale code (1 to 8, `N` when not assigned).
pub const METRO_LOCALE: &str = "MLOCALE";
/// Derived `"<city>, <state>"` column.
pub const CITY_STATE: &str = "CITY_STATE";

/// Columns read by free-text search.
pub const SEARCH_COLUMNS: [&str; 3] = [SCHOOL_NAME, CITY, STATE];

/// Columns read by the survey statistics.
pub const STATS_COLUMNS: [&str; 4] = [SCHOOL_ID, CITY, STATE, METRO_LOCALE];
