//! USPS state and territory codes.

/// Name returned for codes missing from the table.
pub const UNKNOWN_STATE: &str = "unknown";

/// USPS codes and display names, sorted by code for binary search.
///
/// The survey file carries one record with the truncated code `C` for the
/// District of Columbia, so that code is listed as well.
pub const STATE_NAMES: [(&str, &str); 60] = [
    ("AK", "Alaska"),
    ("AL", "Alabama"),
    ("AR", "Arkansas"),
    ("AS", "American Samoa"),
    ("AZ", "Arizona"),
    ("C", "District Of Columbia"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DC", "District Of Columbia"),
    ("DE", "Delaware"),
    ("FL", "Florida"),
    ("FM", "Federated States Of Micronesia"),
    ("GA", "Georgia"),
    ("GU", "Guam"),
    ("HI", "Hawaii"),
    ("IA", "Iowa"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("MA", "Massachusetts"),
    ("MD", "Maryland"),
    ("ME", "Maine"),
    ("MH", "Marshall Islands"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MO", "Missouri"),
    ("MP", "Northern Mariana Islands"),
    ("MS", "Mississippi"),
    ("MT", "Montana"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("NE", "Nebraska"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NV", "Nevada"),
    ("NY", "New York"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("PR", "Puerto Rico"),
    ("PW", "Palau"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VA", "Virginia"),
    ("VI", "Virgin Islands"),
    ("VT", "Vermont"),
    ("WA", "Washington"),
    ("WI", "Wisconsin"),
    ("WV", "West Virginia"),
    ("WY", "Wyoming"),
];

/// Display name for a state code. Lookup is case-sensitive.
pub fn state_name(code: &str) -> Option<&'static str> {
    STATE_NAMES
        .binary_search_by(|(candidate, _)| (*candidate).cmp(code))
        .ok()
        .map(|idx| STATE_NAMES[idx].1)
}

/// Lowercase state name for a code, or `"unknown"`.
pub fn resolve_state(code: &str) -> String {
    state_name(code).map_or_else(|| UNKNOWN_STATE.to_string(), str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_unique() {
        assert!(STATE_NAMES.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(resolve_state("AL"), "alabama");
        assert_eq!(resolve_state("DC"), "district of columbia");
        assert_eq!(resolve_state("MP"), "northern mariana islands");
        assert_eq!(resolve_state("WY"), "wyoming");
    }

    #[test]
    fn test_malformed_dc_code() {
        assert_eq!(resolve_state("C"), resolve_state("DC"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(resolve_state("ZZ"), UNKNOWN_STATE);
        assert_eq!(resolve_state(""), UNKNOWN_STATE);
        // Case-sensitive
        assert_eq!(resolve_state("al"), UNKNOWN_STATE);
    }

    #[test]
    fn test_state_name_display_case() {
        assert_eq!(state_name("FM"), Some("Federated States Of Micronesia"));
        assert_eq!(state_name("XX"), None);
    }
}
