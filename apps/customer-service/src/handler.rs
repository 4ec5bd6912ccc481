//! # HTTP ハンドラ
//!
//! Customer Service の HTTP エンドポイントを定義する。
//!
//! ## エンドポイント一覧
//!
//! - `GET /health` - ヘルスチェック
//! - `GET /customers?search=` - 顧客一覧（氏名の部分一致検索）
//! - `POST /customers` - 顧客作成
//! - `PUT /customers/{id}` - 顧客更新
//! - `DELETE /customers/{id}` - 顧客削除

pub mod customer;
pub mod health;

pub use customer::{
    CustomerState,
    create_customer,
    delete_customer,
    list_customers,
    update_customer,
};
pub use health::health_check;
