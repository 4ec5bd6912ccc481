//! # 顧客ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /customers?search=` - 顧客一覧
//! - `POST /customers` - 顧客作成
//! - `PUT /customers/{id}` - 顧客更新
//! - `DELETE /customers/{id}` - 顧客削除
//!
//! JSON のフィールド名は camelCase。生年月日は `dob` で、
//! 入力は `YYYY-MM-DD` または日時形式を受け付け、出力は常に `YYYY-MM-DD`。
//! ボディは JSON オブジェクトのみ受け付ける（配列などは 400）。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        Query,
        State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use customers_domain::customer::{Customer, CustomerId, CustomerInput, is_unset_date};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value as JsonValue;

use crate::{error::ServiceError, usecase::CustomerUseCaseImpl};

/// 顧客 API の共有状態
pub struct CustomerState {
    pub usecase: CustomerUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 一覧の検索クエリ
#[derive(Debug, Default, Deserialize)]
pub struct CustomerSearchQuery {
    pub search: Option<String>,
}

/// 顧客の作成・更新リクエスト
///
/// 未指定・`null` の項目も受け付け、検証ルールで報告する。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name:  Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub dob:        Option<NaiveDate>,
}

impl From<CustomerRequest> for CustomerInput {
    fn from(req: CustomerRequest) -> Self {
        Self {
            first_name:    req.first_name,
            last_name:     req.last_name,
            date_of_birth: req.dob,
        }
    }
}

/// 顧客 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id:         i64,
    pub first_name: String,
    pub last_name:  String,
    pub dob:        NaiveDate,
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id:         customer.id().as_i64(),
            first_name: customer.first_name().to_string(),
            last_name:  customer.last_name().to_string(),
            dob:        customer.date_of_birth(),
        }
    }
}

/// 日付・日時文字列を解釈する
///
/// `YYYY-MM-DD`（時刻は 0 時）、RFC 3339（ローカル時刻）、
/// タイムゾーンなしの `YYYY-MM-DDTHH:MM:SS[.fff][Z]` を受け付ける。
fn parse_lenient_datetime(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::default()));
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Some(datetime.naive_local());
    }
    NaiveDateTime::parse_from_str(raw.trim_end_matches('Z'), "%Y-%m-%dT%H:%M:%S%.f").ok()
}

/// 生年月日の入力から日付部分を取り出す
///
/// 日付部分が 0001-01-01 で時刻が 0 時以外の日時は、日付にすると
/// 未入力と区別できなくなるため拒否する。
fn date_of_birth_from(raw: &str) -> Result<NaiveDate, String> {
    let datetime = parse_lenient_datetime(raw).ok_or_else(|| {
        format!("{raw:?} は日付として解釈できません（YYYY-MM-DD 形式で指定してください）")
    })?;

    if is_unset_date(datetime.date()) && datetime.time() != NaiveTime::default() {
        return Err(format!(
            "{raw:?} は日付部分が 0001-01-01 のため生年月日として受け付けられません"
        ));
    }
    Ok(datetime.date())
}

fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    date_of_birth_from(&raw)
        .map(Some)
        .map_err(serde::de::Error::custom)
}

/// 不正なパスパラメータを 400 に変換する
fn customer_id_from(path: Result<Path<i64>, PathRejection>) -> Result<CustomerId, ServiceError> {
    let Path(id) = path.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
    Ok(CustomerId::from_i64(id))
}

/// 不正な検索クエリを 400 に変換する
fn search_query_from(
    query: Result<Query<CustomerSearchQuery>, QueryRejection>,
) -> Result<CustomerSearchQuery, ServiceError> {
    let Query(query) = query.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;
    Ok(query)
}

/// JSON ボディを入力に変換する
///
/// 構文エラー・オブジェクト以外・型の不一致はすべて 400。
fn customer_input_from(
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<CustomerInput, ServiceError> {
    let Json(body) = payload.map_err(|rejection| ServiceError::BadRequest(rejection.body_text()))?;

    if !body.is_object() {
        return Err(ServiceError::BadRequest(
            "リクエストボディは JSON オブジェクトである必要があります".to_string(),
        ));
    }

    let req: CustomerRequest = serde_json::from_value(body).map_err(|err| {
        ServiceError::BadRequest(format!("リクエストボディを解釈できません: {err}"))
    })?;
    Ok(req.into())
}

// --- ハンドラ ---

/// GET /customers
///
/// 顧客一覧を ID 昇順で返す。一致なしは空配列。
/// クエリが解釈できない場合（`search` の重複など）は 400。
pub async fn list_customers(
    State(state): State<Arc<CustomerState>>,
    query: Result<Query<CustomerSearchQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let query = search_query_from(query)?;

    let customers = state
        .usecase
        .get_customers(query.search.as_deref())
        .await?;

    let items: Vec<CustomerDto> = customers.into_iter().map(CustomerDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /customers
///
/// ## レスポンス
///
/// - `200 OK`: 作成された顧客
/// - `400 Bad Request`: JSON が不正、またはオブジェクトでない
/// - `422 Unprocessable Entity`: 検証エラー
pub async fn create_customer(
    State(state): State<Arc<CustomerState>>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let input = customer_input_from(payload)?;

    let customer = state.usecase.create_customer(input).await?;

    Ok((StatusCode::OK, Json(CustomerDto::from(customer))))
}

/// PUT /customers/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の顧客
/// - `400 Bad Request`: ID または JSON が不正
/// - `404 Not Found`: 顧客が存在しない（入力の検証より優先）
/// - `422 Unprocessable Entity`: 検証エラー
pub async fn update_customer(
    State(state): State<Arc<CustomerState>>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = customer_id_from(path)?;
    let input = customer_input_from(payload)?;

    let customer = state.usecase.update_customer(id, input).await?;

    Ok((StatusCode::OK, Json(CustomerDto::from(customer))))
}

/// DELETE /customers/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 削除成功（ボディなし）
/// - `404 Not Found`: 顧客が存在しない
pub async fn delete_customer(
    State(state): State<Arc<CustomerState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ServiceError> {
    let id = customer_id_from(path)?;

    state.usecase.delete_customer(id).await?;

    Ok(StatusCode::OK)
}
