use super::*;
use crate::detect::DetectionTable;
use proptest::prelude::*;

/// 識別子・名前に使える文字列（小文字英数字とハイフン）
fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

/// フォーマットタグ（優先リスト内外の両方を含む）
fn format_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "csv", "xml", "json", "kdbx", "yaml", "1pif", "html", "keychain", "otp", "wallet",
    ])
    .prop_map(str::to_owned)
}

fn descriptor_strategy() -> impl Strategy<Value = ManagerDescriptor> {
    (
        ident_strategy(),
        ident_strategy(),
        format_strategy(),
        "[0-9]{0,1}",
    )
        .prop_map(|(identifier, name, format, version)| {
            ManagerDescriptor::versioned(
                &identifier,
                &name,
                &format,
                &version,
                Cap::IMPORT | Cap::FORMAT,
            )
        })
}

fn catalog_strategy() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(descriptor_strategy(), 1..12).prop_map(Catalog::new)
}

proptest! {
    /// 識別子での解決は、名前が何件重複していても常にその識別子の
    /// ディスクリプタを返す
    #[test]
    fn prop_resolve_by_identifier_is_exact(catalog in catalog_strategy()) {
        let registry = ManagerRegistry::new(&catalog);
        for pm in catalog.iter() {
            let resolved = registry
                .resolve(&pm.identifier, "", "", Cap::IMPORT)
                .unwrap();
            prop_assert_eq!(resolved.identifier.as_str(), pm.identifier.as_str());
        }
    }

    /// names() は常にソート済みで重複がない
    #[test]
    fn prop_names_sorted_and_unique(catalog in catalog_strategy()) {
        let registry = ManagerRegistry::new(&catalog);
        let names = registry.names(Cap::IMPORT);

        for pair in names.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    /// 識別子にも名前にも一致しない問い合わせは必ず UnknownManager
    #[test]
    fn prop_unmatched_query_is_unknown(catalog in catalog_strategy(), query in "[A-Z]{8}") {
        // 生成規則上、カタログ側は小文字のみなので衝突しない
        let registry = ManagerRegistry::new(&catalog);
        let err = registry.resolve(&query, "", "", Cap::IMPORT).unwrap_err();
        prop_assert_eq!(err, PimportError::UnknownManager(query));
    }

    /// 検出テーブルにフォーマットの重複はなく、各エントリは要求
    /// ケイパビリティと自分のフォーマットタグを満たす
    #[test]
    fn prop_detection_table_formats_unique(catalog in catalog_strategy()) {
        let table = DetectionTable::build(&catalog, Cap::FORMAT).unwrap();

        let formats: Vec<&str> = table.formats().collect();
        let mut deduped = formats.clone();
        deduped.sort_unstable();
        deduped.dedup();
        prop_assert_eq!(formats.len(), deduped.len());

        for (frmt, pm) in table.iter() {
            prop_assert_eq!(frmt, pm.format.as_str());
            prop_assert!(pm.cap.contains(Cap::FORMAT));
        }
    }
}
