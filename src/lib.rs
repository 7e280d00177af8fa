//! pimport - パスワードマネージャインポートツールのレジストリ層
//!
//! 数十のパスワードマネージャとエクスポート形式を対象に、
//! (a) ユーザ指定の名前/フォーマット/バージョンをどの実装が扱うか、
//! (b) 未知のファイルに対してどの順でフォーマット検出を試すか、
//! を決定する。パーサや復号処理は外部コンポーネントであり、本クレートは
//! ディスクリプタ（メタデータ）としてのみ参照する。

pub mod capability;
pub mod cli;
pub mod commands;
pub mod detect;
pub mod error;
pub mod manager;
pub mod managers;
pub mod registry;

pub use capability::Cap;
pub use detect::DetectionTable;
pub use error::{PimportError, Result};
pub use manager::{Catalog, ManagerDescriptor};
pub use registry::ManagerRegistry;
