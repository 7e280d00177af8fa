//! マネージャディスクリプタとカタログ
//!
//! 各インポータ実装のメタデータ（ディスクリプタ）と、プロセス起動時に
//! 一度だけ構築される読み取り専用のカタログを定義する。
//! パーサや復号処理そのものは外部コンポーネントであり、本クレートは
//! ディスクリプタを通じてのみ参照する。

use crate::capability::Cap;
use crate::managers;

/// インポータ実装ひとつ分のメタデータ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerDescriptor {
    /// 実装を一意に識別する名前（カタログ全体で重複しない）
    pub identifier: String,
    /// パスワードマネージャ製品名（CSV版とJSON版などで重複しうる）
    pub name: String,
    /// フォーマットタグ（"csv" など。API連携のみの場合は空）
    pub format: String,
    /// バージョン識別子（区別が不要な場合は空）
    pub version: String,
    /// ケイパビリティ
    pub cap: Cap,
}

impl ManagerDescriptor {
    /// バージョン区別のないディスクリプタを作成
    pub fn new(identifier: &str, name: &str, format: &str, cap: Cap) -> Self {
        Self::versioned(identifier, name, format, "", cap)
    }

    /// バージョン付きディスクリプタを作成
    pub fn versioned(
        identifier: &str,
        name: &str,
        format: &str,
        version: &str,
        cap: Cap,
    ) -> Self {
        Self {
            identifier: identifier.to_string(),
            name: name.to_string(),
            format: format.to_string(),
            version: version.to_string(),
            cap,
        }
    }
}

/// 登録済みディスクリプタ全体のカタログ
///
/// 登録順を保持する読み取り専用コレクション。起動時に一度だけ構築され、
/// 以降は変更されない。レジストリと検出テーブルはこのカタログへの参照を
/// 受け取って動作する（グローバル状態は持たない）。
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    descriptors: Vec<ManagerDescriptor>,
}

impl Catalog {
    /// ディスクリプタ列からカタログを構築（登録順を保持）
    pub fn new(descriptors: Vec<ManagerDescriptor>) -> Self {
        Self { descriptors }
    }

    /// 組み込みのディスクリプタ一式からカタログを構築
    pub fn builtin() -> Self {
        Self::new(managers::builtin())
    }

    /// 登録順でのイテレーション
    pub fn iter(&self) -> std::slice::Iter<'_, ManagerDescriptor> {
        self.descriptors.iter()
    }

    /// 登録件数
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

#[cfg(test)]
#[path = "manager_test.rs"]
mod tests;
