//! ケイパビリティモデル
//!
//! ディスクリプタが担える役割（インポート、フォーマット検出、復号）を
//! ビットセットで表現する。フラグは加算的で互いに独立しており、
//! あるフラグが別のフラグを含意することはない。

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// マネージャディスクリプタのケイパビリティ
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Cap: u8 {
        /// エントリのインポートに対応
        const IMPORT = 1;
        /// ファイルフォーマットの検出に対応
        const FORMAT = 1 << 1;
        /// 暗号化コンテナの復号に対応
        const DECRYPT = 1 << 2;
    }
}

impl Cap {
    /// 含まれるフラグの識別子文字列を取得
    pub fn flag_names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Cap::IMPORT) {
            names.push("import");
        }
        if self.contains(Cap::FORMAT) {
            names.push("format");
        }
        if self.contains(Cap::DECRYPT) {
            names.push("decrypt");
        }
        names
    }
}

/// 呼び出し側が要求を省略した場合の既定サブセット
impl Default for Cap {
    fn default() -> Self {
        Cap::IMPORT
    }
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", self.flag_names().join("|"))
    }
}

#[cfg(test)]
#[path = "capability_test.rs"]
mod tests;
