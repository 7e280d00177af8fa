//! ManagerDescriptor / Catalog のユニットテスト

use super::*;

#[test]
fn new_defaults_to_empty_version() {
    let pm = ManagerDescriptor::new("acme-csv", "acme", "csv", Cap::IMPORT);

    assert_eq!(pm.identifier, "acme-csv");
    assert_eq!(pm.name, "acme");
    assert_eq!(pm.format, "csv");
    assert_eq!(pm.version, "");
}

#[test]
fn versioned_keeps_version() {
    let pm = ManagerDescriptor::versioned("acme-json", "acme", "json", "2", Cap::IMPORT);

    assert_eq!(pm.version, "2");
}

#[test]
fn catalog_preserves_registration_order() {
    let catalog = Catalog::new(vec![
        ManagerDescriptor::new("c", "c", "csv", Cap::IMPORT),
        ManagerDescriptor::new("a", "a", "json", Cap::IMPORT),
        ManagerDescriptor::new("b", "b", "xml", Cap::IMPORT),
    ]);

    let identifiers: Vec<&str> = catalog.iter().map(|pm| pm.identifier.as_str()).collect();
    assert_eq!(identifiers, vec!["c", "a", "b"]);
}

#[test]
fn empty_catalog() {
    let catalog = Catalog::default();

    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert!(catalog.iter().next().is_none());
}

#[test]
fn builtin_catalog_is_populated() {
    let catalog = Catalog::builtin();

    assert!(!catalog.is_empty());
}
