//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせて task リソースの編成ロジックを
//! 実装します。
//!
//! # 主要コンポーネント
//! - **TaskService**: 検証・状態遷移・ストア呼び出しの編成
//! - **ServiceBuilder**: サービスの構築とワイヤリング（fail-fast）

pub mod builder;
pub mod service;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ServiceBuilder};
pub use self::service::{DEFAULT_STORE_TIMEOUT, TaskService};
