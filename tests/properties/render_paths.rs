//! Property tests for base-name derivation and artifact paths.

use std::path::Path;

use proptest::prelude::*;

use contentkit::domain::entities::derive_base_name;
use contentkit::domain::value_objects::ExportLayout;

fn layout() -> impl Strategy<Value = ExportLayout> {
    prop_oneof![
        Just(ExportLayout::DensitySuffixed),
        Just(ExportLayout::Flat),
        Just(ExportLayout::PerIcon),
    ]
}

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,16}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: base-name derivation never panics and always yields a
    /// prefix of the file name; without a marker it never keeps a dot.
    #[test]
    fn property_base_name_is_prefix(
        name in "(?s).{0,64}",
        marker in proptest::option::of("[A-Za-z0-9_.]{0,8}"),
    ) {
        let base = derive_base_name(&name, marker.as_deref());
        prop_assert!(name.starts_with(&base));

        let plain = derive_base_name(&name, None);
        prop_assert!(!plain.contains('.'));
    }

    /// PROPERTY: with a marker, the marker and everything after it are gone.
    #[test]
    fn property_marker_is_stripped(stem in "[A-Za-z0-9.]{1,16}") {
        let name = format!("{stem}_24px.svg");
        prop_assert_eq!(derive_base_name(&name, Some("_24px")), stem);
    }

    /// PROPERTY: artifact paths are deterministic, live under the output
    /// directory and always end in `.png`.
    #[test]
    fn property_artifact_path_is_pure(
        layout in layout(),
        bucket in segment(),
        base in segment(),
        size in 1u32..1024,
        suffix in "[A-Za-z0-9@_-]{0,6}",
    ) {
        let out = Path::new("out/icons");
        let first = layout.artifact_path(out, &bucket, &base, size, &suffix);
        let second = layout.artifact_path(out, &bucket, &base, size, &suffix);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.starts_with(out));
        prop_assert!(first.starts_with(layout.bucket_dir(out, &bucket)));
        prop_assert_eq!(first.extension().and_then(|e| e.to_str()), Some("png"));
    }
}
