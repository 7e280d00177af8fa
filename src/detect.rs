//! フォーマット検出順序
//!
//! 未知のファイルをフォーマットごとに試行するための、決定的な優先順位
//! 付きテーブルを構築する。フォーマット間には構文上の上位互換関係が
//! あり（YAMLパーサは多くのJSONを受理し、HTMLパーサは多くのXMLを
//! 受理する）、一般的なもの・親フォーマットを先に試さないと誤検出が
//! 起きる。

use crate::capability::Cap;
use crate::error::{PimportError, Result};
use crate::manager::{Catalog, ManagerDescriptor};

/// フォーマット検出の固定優先順位
///
/// 先頭ほど先に試される。親フォーマットは子より前に置く
/// （XMLはHTMLより前、JSONはYAMLより前）。
const FORMAT_ORDER: &[&str] = &[
    "csv", "xml", "json", "kdbx", "yaml", "1pif", "html", "keychain",
];

/// 復号器には事前の優先順位を主張しない（登録順のまま）
const DECRYPT_ORDER: &[&str] = &[];

fn priority_order(cap: Cap) -> Result<&'static [&'static str]> {
    if cap == Cap::FORMAT {
        Ok(FORMAT_ORDER)
    } else if cap == Cap::DECRYPT {
        Ok(DECRYPT_ORDER)
    } else {
        Err(PimportError::UnsupportedCapability(cap))
    }
}

/// フォーマットタグ → 代表ディスクリプタの順序付きテーブル
///
/// 各フォーマットを代表するディスクリプタはひとつだけ。同じフォーマット
/// を持つディスクリプタが複数ある場合、走査中に最後に出現したものが
/// スロットを上書きする（スロットの位置は最初の挿入時のまま）。これは
/// 意図した精度の割り切りであり、「フォーマットXを解釈できる全ディスク
/// リプタ」には `ManagerRegistry::descriptors` が答える。
#[derive(Debug)]
pub struct DetectionTable<'a> {
    entries: Vec<&'a ManagerDescriptor>,
}

impl<'a> DetectionTable<'a> {
    /// カタログから検出テーブルを構築する
    ///
    /// 対応ケイパビリティは FORMAT と DECRYPT のみ。それ以外は呼び出し
    /// 側の契約違反として `UnsupportedCapability` を返す。
    pub fn build(catalog: &'a Catalog, cap: Cap) -> Result<Self> {
        let order = priority_order(cap)?;
        let mut table = Self {
            entries: Vec::new(),
        };

        // 1周目: 優先リストのフォーマットをリスト順で登録
        for frmt in order {
            for pm in catalog.iter() {
                if pm.format == *frmt && pm.cap.contains(cap) {
                    table.insert_or_replace(pm);
                }
            }
        }

        // 2周目: 優先リスト外のフォーマットを登録順で末尾に追加
        for pm in catalog.iter() {
            if pm.cap.contains(cap) && !order.contains(&pm.format.as_str()) {
                table.insert_or_replace(pm);
            }
        }

        Ok(table)
    }

    /// フォーマットタグのスロットを置き換え、なければ末尾に追加する
    fn insert_or_replace(&mut self, pm: &'a ManagerDescriptor) {
        match self.entries.iter_mut().find(|e| e.format == pm.format) {
            Some(slot) => *slot = pm,
            None => self.entries.push(pm),
        }
    }

    /// フォーマットタグで代表ディスクリプタを引く
    pub fn get(&self, format: &str) -> Option<&'a ManagerDescriptor> {
        self.entries.iter().find(|pm| pm.format == format).copied()
    }

    /// (フォーマットタグ, ディスクリプタ) を試行順に列挙する
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a ManagerDescriptor)> + '_ {
        self.entries.iter().map(|pm| (pm.format.as_str(), *pm))
    }

    /// テーブル内のフォーマットタグを試行順に列挙する
    pub fn formats(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.entries.iter().map(|pm| pm.format.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;
