//! Property tests for `.gitmodules` parsing.

use proptest::prelude::*;

use contentkit::domain::services::parse_submodule_paths;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary text never panics and yields non-empty,
    /// whitespace-free paths.
    #[test]
    fn property_paths_have_no_whitespace(content in "[ -~\t\r\n]{0,256}") {
        for path in parse_submodule_paths(&content) {
            prop_assert!(!path.is_empty());
            prop_assert!(!path.contains([' ', '\t', '\r']));
        }
    }

    /// PROPERTY: every well-formed `path =` line is found, in order.
    #[test]
    fn property_declared_paths_round_trip(
        paths in proptest::collection::vec("[A-Za-z0-9_/-]{1,24}", 0..6),
    ) {
        let content: String = paths
            .iter()
            .map(|p| format!("[submodule \"{p}\"]\n\tpath = {p}\n\turl = https://example.com/{p}.git\n"))
            .collect();

        prop_assert_eq!(parse_submodule_paths(&content), paths);
    }
}
