//! # Customers 共有ユーティリティ
//!
//! このクレートは、ワークスペース全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum には依存しない（`IntoResponse` 変換はサービス側の責務）
//! - tracing-subscriber / tower-http 系は `observability` feature でのみ有効化

pub mod error_response;
pub mod event_log;
pub mod health;
pub mod observability;

pub use error_response::{ErrorResponse, FieldErrors};
pub use health::HealthResponse;
