//! 顧客管理ユースケース
//!
//! 検証 → 存在確認 → リポジトリ操作の順序を担う。
//! 更新では存在確認を検証より先に行う（不在なら入力が不正でも 404）。

use std::sync::Arc;

use customers_domain::{
    DomainError,
    customer::{Customer, CustomerId, CustomerInput, CustomerProfile},
};
use customers_infra::repository::CustomerRepository;
use customers_shared::{event_log::event, log_business_event};

use crate::error::ServiceError;

/// 顧客管理ユースケース
pub struct CustomerUseCaseImpl {
    customer_repository: Arc<dyn CustomerRepository>,
}

impl CustomerUseCaseImpl {
    pub fn new(customer_repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            customer_repository,
        }
    }

    /// 顧客一覧を取得する
    ///
    /// 検索語が未指定・空白のみなら全件。結果は ID 昇順。
    pub async fn get_customers(&self, search: Option<&str>) -> Result<Vec<Customer>, ServiceError> {
        Ok(self.customer_repository.find_all(search).await?)
    }

    /// 顧客を作成する
    ///
    /// 違反があれば何も永続化せず `Validation` を返す。
    pub async fn create_customer(&self, input: CustomerInput) -> Result<Customer, ServiceError> {
        let profile = CustomerProfile::try_from(input)?;

        let customer = self.customer_repository.insert(&profile).await?;

        log_business_event!(
            event.category = event::category::CUSTOMER,
            event.action = event::action::CUSTOMER_CREATED,
            event.entity_type = event::entity_type::CUSTOMER,
            event.entity_id = customer.id().as_i64(),
            event.result = event::result::SUCCESS,
            "顧客を作成しました"
        );

        Ok(customer)
    }

    /// 顧客を更新する
    ///
    /// 1. ID で取得（不在なら `NotFound`、検証は行わない）
    /// 2. 入力を検証（違反があれば `Validation`）
    /// 3. 可変項目を上書きして保存
    pub async fn update_customer(
        &self,
        id: CustomerId,
        input: CustomerInput,
    ) -> Result<Customer, ServiceError> {
        let existing = self.find_existing(id).await?;

        let profile = CustomerProfile::try_from(input)?;

        let updated = self
            .customer_repository
            .update(&existing.with_profile(profile))
            .await?;

        log_business_event!(
            event.category = event::category::CUSTOMER,
            event.action = event::action::CUSTOMER_UPDATED,
            event.entity_type = event::entity_type::CUSTOMER,
            event.entity_id = id.as_i64(),
            event.result = event::result::SUCCESS,
            "顧客を更新しました"
        );

        Ok(updated)
    }

    /// 顧客を削除する
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), ServiceError> {
        let existing = self.find_existing(id).await?;

        self.customer_repository.delete(&existing).await?;

        log_business_event!(
            event.category = event::category::CUSTOMER,
            event.action = event::action::CUSTOMER_DELETED,
            event.entity_type = event::entity_type::CUSTOMER,
            event.entity_id = id.as_i64(),
            event.result = event::result::SUCCESS,
            "顧客を削除しました"
        );

        Ok(())
    }

    async fn find_existing(&self, id: CustomerId) -> Result<Customer, ServiceError> {
        self.customer_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::customer_not_found(id).into())
    }
}
