use crate::capability::Cap;
use thiserror::Error;

/// pimport統一エラー型
///
/// どちらも純粋な検索処理の同期的な失敗であり、リトライしても
/// 結果は変わらない。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PimportError {
    #[error("Unknown password manager: {0}")]
    UnknownManager(String),

    #[error("Capability not supported: {0}")]
    UnsupportedCapability(Cap),
}

pub type Result<T> = std::result::Result<T, PimportError>;
