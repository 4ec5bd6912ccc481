//! # ユースケース層
//!
//! Customer Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、ロジックはユースケースに集約
//!
//! ## モジュール構成
//!
//! - `customer`: 顧客の一覧・作成・更新・削除

pub mod customer;

pub use customer::CustomerUseCaseImpl;
