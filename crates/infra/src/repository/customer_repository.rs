//! # CustomerRepository
//!
//! 顧客の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID はストアが採番**: `insert` は ID のないプロフィールを受け取り、採番済みの顧客を返す
//! - **不在は正常系**: `find_by_id` は `Option` で返し、エラーにしない
//! - **存在確認は呼び出し側**: `update` / `delete` は対象が存在する前提で呼ばれる

use async_trait::async_trait;
use chrono::NaiveDate;
use customers_domain::customer::{Customer, CustomerId, CustomerProfile};
use sqlx::PgPool;

use super::effective_search_term;
use crate::error::InfraError;

/// 顧客リポジトリトレイト
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 顧客一覧を ID 昇順で取得する
    ///
    /// `search` が未指定・空白のみの場合は全件を返す。
    /// それ以外は `"{first} {last}"` が検索語を大文字小文字を区別せず含む顧客のみ返す。
    async fn find_all(&self, search: Option<&str>) -> Result<Vec<Customer>, InfraError>;

    /// ID で顧客を検索する
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, InfraError>;

    /// 顧客を挿入し、採番済みの顧客を返す
    ///
    /// ID は一意で、削除済みの ID が再利用されることはない。
    async fn insert(&self, profile: &CustomerProfile) -> Result<Customer, InfraError>;

    /// ID が一致する顧客の可変項目をすべて上書きする
    async fn update(&self, customer: &Customer) -> Result<Customer, InfraError>;

    /// 顧客を削除する
    async fn delete(&self, customer: &Customer) -> Result<(), InfraError>;
}

/// `customers` テーブルの 1 行
#[derive(Debug, sqlx::FromRow)]
struct CustomerRow {
    id:            i64,
    first_name:    String,
    last_name:     String,
    date_of_birth: NaiveDate,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer::from_db(
            CustomerId::from_i64(row.id),
            row.first_name,
            row.last_name,
            row.date_of_birth,
        )
    }
}

/// PostgreSQL 実装の CustomerRepository
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self, search: Option<&str>) -> Result<Vec<Customer>, InfraError> {
        // strpos で比較するため、検索語中の % や _ もそのままの文字として扱われる
        let rows: Vec<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, date_of_birth
            FROM customers
            WHERE $1::text IS NULL
               OR strpos(lower(first_name || ' ' || last_name), lower($1::text)) > 0
            ORDER BY id
            "#,
        )
        .bind(effective_search_term(search))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, InfraError> {
        let row: Option<CustomerRow> = sqlx::query_as(
            r#"
            SELECT id, first_name, last_name, date_of_birth
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Customer::from))
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, profile: &CustomerProfile) -> Result<Customer, InfraError> {
        let row: CustomerRow = sqlx::query_as(
            r#"
            INSERT INTO customers (first_name, last_name, date_of_birth)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, date_of_birth
            "#,
        )
        .bind(profile.first_name())
        .bind(profile.last_name())
        .bind(profile.date_of_birth())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<Customer, InfraError> {
        let row: CustomerRow = sqlx::query_as(
            r#"
            UPDATE customers
            SET first_name = $2, last_name = $3, date_of_birth = $4
            WHERE id = $1
            RETURNING id, first_name, last_name, date_of_birth
            "#,
        )
        .bind(customer.id().as_i64())
        .bind(customer.first_name())
        .bind(customer.last_name())
        .bind(customer.date_of_birth())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %customer.id()))]
    async fn delete(&self, customer: &Customer) -> Result<(), InfraError> {
        sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(customer.id().as_i64())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
