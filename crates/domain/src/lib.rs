//! # Customers ドメイン層
//!
//! 顧客管理のビジネスルールを担うドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: ストアが採番する ID を持つ [`customer::Customer`]
//! - **入力値の検証**: 純粋関数 [`customer::validate_customer_input`] で必須項目を検証
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! customer-service → infra → domain
//!          ↘                   ↑
//!            shared      (依存しない)
//! ```
//!
//! ドメイン層はインフラ層（DB）や HTTP に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`customer`] - 顧客エンティティと入力値の検証
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use customers_domain::{
//!     DomainError,
//!     customer::{CustomerId, CustomerInput, CustomerProfile},
//! };
//!
//! let input = CustomerInput {
//!     first_name:    Some("John".to_string()),
//!     last_name:     Some("Doe".to_string()),
//!     date_of_birth: chrono::NaiveDate::from_ymd_opt(1990, 10, 1),
//! };
//! let profile = CustomerProfile::try_from(input).unwrap();
//! assert_eq!(profile.first_name(), "John");
//!
//! let error = DomainError::customer_not_found(CustomerId::from_i64(2));
//! assert_eq!(error.to_string(), "Customer with ID 2 could not be found.");
//! ```

pub mod customer;
pub mod error;

pub use error::DomainError;
