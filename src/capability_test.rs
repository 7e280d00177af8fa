//! Cap のユニットテスト

use super::*;

#[test]
fn union_combines_flags() {
    let cap = Cap::IMPORT | Cap::FORMAT;

    assert!(cap.contains(Cap::IMPORT));
    assert!(cap.contains(Cap::FORMAT));
    assert!(!cap.contains(Cap::DECRYPT));
}

#[test]
fn flags_are_independent() {
    // どのフラグも他のフラグを含意しない
    assert!(!Cap::IMPORT.contains(Cap::FORMAT));
    assert!(!Cap::IMPORT.contains(Cap::DECRYPT));
    assert!(!Cap::FORMAT.contains(Cap::IMPORT));
    assert!(!Cap::FORMAT.contains(Cap::DECRYPT));
    assert!(!Cap::DECRYPT.contains(Cap::IMPORT));
    assert!(!Cap::DECRYPT.contains(Cap::FORMAT));
}

#[test]
fn default_is_import() {
    assert_eq!(Cap::default(), Cap::IMPORT);
}

#[test]
fn membership_test_on_subset() {
    let cap = Cap::IMPORT | Cap::FORMAT | Cap::DECRYPT;

    assert!(cap.contains(Cap::IMPORT | Cap::FORMAT));
    assert!(!(Cap::IMPORT | Cap::FORMAT).contains(cap));
}

#[test]
fn intersection_keeps_common_flags() {
    let a = Cap::IMPORT | Cap::FORMAT;
    let b = Cap::FORMAT | Cap::DECRYPT;

    assert_eq!(a & b, Cap::FORMAT);
}

#[test]
fn flag_names_lists_contained_flags() {
    assert_eq!(Cap::IMPORT.flag_names(), vec!["import"]);
    assert_eq!(
        (Cap::IMPORT | Cap::DECRYPT).flag_names(),
        vec!["import", "decrypt"]
    );
    assert!(Cap::empty().flag_names().is_empty());
}

#[test]
fn display_joins_flag_names() {
    assert_eq!(format!("{}", Cap::IMPORT | Cap::FORMAT), "import|format");
    assert_eq!(format!("{}", Cap::empty()), "none");
}
