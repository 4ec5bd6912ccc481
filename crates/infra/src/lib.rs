//! # Customers インフラ層
//!
//! 外部システム（ストレージ）との接続を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: 顧客リポジトリの PostgreSQL 実装とインメモリ実装
//!
//! ## 依存関係
//!
//! ```text
//! customer-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use customers_infra::{db, repository::PostgresCustomerRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/customers").await?;
//!     db::run_migrations(&pool).await?;
//!     let repository = PostgresCustomerRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::InfraError;
