//! # リポジトリ実装
//!
//! 顧客の永続化を担うリポジトリトレイトと、その実装を提供する。
//!
//! - [`PostgresCustomerRepository`]: PostgreSQL 実装
//! - [`InMemoryCustomerRepository`]: プロセス内メモリ実装（開発・テスト用）

pub mod customer_repository;
pub mod in_memory_customer_repository;

pub use customer_repository::{CustomerRepository, PostgresCustomerRepository};
pub use in_memory_customer_repository::InMemoryCustomerRepository;

/// 検索語を正規化する
///
/// 未指定・空文字・空白のみは「絞り込みなし」として `None` を返す。
/// それ以外は前後の空白も含めてそのまま検索に使う。
pub(crate) fn effective_search_term(search: Option<&str>) -> Option<&str> {
    search.filter(|term| !term.trim().is_empty())
}
