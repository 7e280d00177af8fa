//! マネージャレジストリ
//!
//! カタログに対する解決・列挙ビューを提供する。カタログは初期化後に
//! 変化しないため、呼び出し間のキャッシュは持たず、問い合わせごとに
//! 導出し直す。

use std::collections::{BTreeMap, BTreeSet};

use crate::capability::Cap;
use crate::error::{PimportError, Result};
use crate::manager::{Catalog, ManagerDescriptor};

/// フォーマット絞り込みから常に除外する汎用マネージャ名
///
/// 汎用CSVインポータはユーザが名前で明示指定したときだけ使う手動
/// フォールバック。ほぼすべてのマネージャがCSVを書き出せるため、
/// 「フォーマットXを扱えるマネージャ」の検索に混ざると絞り込みが
/// 意味をなさなくなる。
const GENERIC_FALLBACK_NAME: &str = "csv";

/// カタログへの問い合わせインターフェース
///
/// カタログへの参照のみを保持し、状態を持たない。
pub struct ManagerRegistry<'a> {
    catalog: &'a Catalog,
}

impl<'a> ManagerRegistry<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// ケイパビリティ（および任意でフォーマット）で絞り込んだ
    /// ディスクリプタを登録順に列挙する
    ///
    /// `format` 指定時、名前が汎用フォールバックと一致する
    /// ディスクリプタは常に除外される。
    pub fn descriptors(
        &self,
        cap: Cap,
        format: Option<&str>,
    ) -> impl Iterator<Item = &'a ManagerDescriptor> + 'a {
        let format = format.map(str::to_owned);
        let catalog = self.catalog;
        catalog.iter().filter(move |pm| {
            if !pm.cap.contains(cap) {
                return false;
            }
            match &format {
                Some(frmt) => pm.name != GENERIC_FALLBACK_NAME && &pm.format == frmt,
                None => true,
            }
        })
    }

    /// 問い合わせ文字列をディスクリプタひとつに解決する
    ///
    /// 登録順の単一走査で、優先順位は3段階:
    /// 1. `identifier` 完全一致（即確定）
    /// 2. `name` 一致かつ `format`/`version` 完全一致（即確定）
    /// 3. `name` が一致した最初のディスクリプタ（フォールバック）
    ///
    /// どの段にも該当しなければ `UnknownManager`。部分的な結果は返さない。
    pub fn resolve(
        &self,
        query: &str,
        format: &str,
        version: &str,
        cap: Cap,
    ) -> Result<&'a ManagerDescriptor> {
        let mut fallback = None;
        for pm in self.descriptors(cap, None) {
            if pm.identifier == query {
                return Ok(pm);
            }

            if pm.name == query {
                if fallback.is_none() {
                    fallback = Some(pm);
                }
                if pm.format == format && pm.version == version {
                    return Ok(pm);
                }
            }
        }

        fallback.ok_or_else(|| PimportError::UnknownManager(query.to_string()))
    }

    /// 対応マネージャ名のソート済み一覧（重複なし）
    pub fn names(&self, cap: Cap) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .descriptors(cap, None)
            .map(|pm| pm.name.as_str())
            .collect();
        names.into_iter().map(str::to_owned).collect()
    }

    /// マネージャ名ごとのディスクリプタ一覧
    ///
    /// グループ内は登録順のまま。キーは名前順に並ぶ。
    pub fn matrix(&self, cap: Cap) -> BTreeMap<String, Vec<&'a ManagerDescriptor>> {
        let mut matrix: BTreeMap<String, Vec<&'a ManagerDescriptor>> = BTreeMap::new();
        for pm in self.descriptors(cap, None) {
            matrix.entry(pm.name.clone()).or_default().push(pm);
        }
        matrix
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

#[cfg(test)]
#[path = "registry_proptests.rs"]
mod proptests;
