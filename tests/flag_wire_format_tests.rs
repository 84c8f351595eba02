use cse_client::{CountryCode, CseError, FlagSet, FlagTable, Language};

/// Collect the registered flag names of a type, in declaration order.
fn names_of<T: FlagTable>() -> Vec<&'static str> {
    FlagSet::<T>::none().iter().map(|(name, _)| name).collect()
}

#[test]
fn test_subset_construction_matches_membership() {
    let names = names_of::<cse_client::flags::language::LanguageTable>();
    let chosen = ["english", "japanese", "swedish"];

    let languages =
        Language::from_flags(chosen.iter().map(|name| (*name, true))).unwrap();

    for name in names {
        assert_eq!(
            languages.get(name).unwrap(),
            chosen.contains(&name),
            "membership mismatch for {name}"
        );
    }
}

#[test]
fn test_extremes_omit_the_parameter() {
    assert_eq!(Language::none().to_query_param(), None);
    assert_eq!(Language::all().to_query_param(), None);
    assert_eq!(CountryCode::none().to_query_param(), None);
    assert_eq!(CountryCode::all().to_query_param(), None);
}

#[test]
fn test_positive_and_negative_lists_are_complementary() {
    // k flags enabled (k at most half) encodes k tokens positively; the
    // complement encodes the same k tokens inside a -(...) wrapper.
    let names = names_of::<cse_client::flags::language::LanguageTable>();
    let total = names.len();

    for k in [1usize, 3, 10, 17] {
        let head = &names[..k];

        let few = Language::from_flags(head.iter().map(|name| (*name, true))).unwrap();
        let wire = few.to_query_param().unwrap();
        assert!(!wire.starts_with("-("), "k={k} should be a positive list");
        assert_eq!(wire.split('|').count(), k);

        let mut most = Language::all();
        for name in head {
            most.set(name, false).unwrap();
        }
        assert_eq!(
            most.iter().filter(|(_, enabled)| *enabled).count(),
            total - k
        );
        let wire = most.to_query_param().unwrap();
        assert!(
            wire.starts_with("-(") && wire.ends_with(')'),
            "complement of k={k} should be negated, got {wire}"
        );
        assert_eq!(wire.split('|').count(), k);
    }
}

#[test]
fn test_documented_language_examples() {
    let languages =
        Language::from_flags([("english", true), ("french", true)]).unwrap();
    assert_eq!(languages.to_query_param().as_deref(), Some("lang_en|lang_fr"));

    let mut languages = Language::all();
    languages.set("english", false).unwrap();
    assert_eq!(languages.to_query_param().as_deref(), Some("-(lang_en)"));
}

#[test]
fn test_round_trip_for_both_enumerations() {
    let languages = Language::from_flags([
        ("arabic", true),
        ("dutch", true),
        ("turkish", true),
    ])
    .unwrap();
    let wire = languages.to_query_param().unwrap();
    println!("language wire value: {wire}");
    assert_eq!(Language::from_query_param(&wire).unwrap(), languages);

    let mut countries = CountryCode::all();
    for name in ["france", "germany", "japan"] {
        countries.set(name, false).unwrap();
    }
    let wire = countries.to_query_param().unwrap();
    println!("country wire value: {wire}");
    assert!(wire.starts_with("-("));
    assert_eq!(CountryCode::from_query_param(&wire).unwrap(), countries);
}

#[test]
fn test_unknown_names_fail_loudly() {
    let err = Language::from_flags([("klingon", true)]).unwrap_err();
    assert!(matches!(err, CseError::UnknownFlag(name) if name == "klingon"));

    let err = CountryCode::from_flags([("atlantis", true)]).unwrap_err();
    assert!(matches!(err, CseError::UnknownFlag(name) if name == "atlantis"));
}

#[test]
fn test_instances_are_independent_values() {
    let original = Language::from_flags([("english", true)]).unwrap();
    let mut copy = original.clone();
    copy.set("french", true).unwrap();

    assert_eq!(original.to_query_param().as_deref(), Some("lang_en"));
    assert_eq!(copy.to_query_param().as_deref(), Some("lang_en|lang_fr"));
}
