//! # 顧客
//!
//! 顧客エンティティと、作成・更新時の入力値検証を定義する。
//!
//! ## 概念モデル
//!
//! - **Customer**: ストアが採番した ID を持つ永続化エンティティ
//! - **CustomerProfile**: ID 以外の可変項目（検証済み）。作成と更新の両方で使う
//! - **CustomerInput**: 作成・更新リクエストの未検証の入力
//! - **ValidationErrors**: フィールド単位の違反の順序付きリスト
//!
//! ## ライフサイクル
//!
//! ```text
//! CustomerInput ──validate──▶ CustomerProfile ──insert──▶ Customer(id 採番)
//!                                   │
//!                                   └──with_profile──▶ Customer(id 不変)
//! ```

mod input;
mod model;
mod validator;

pub use input::*;
pub use model::*;
pub use validator::*;
