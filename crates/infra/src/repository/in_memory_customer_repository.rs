//! # InMemoryCustomerRepository
//!
//! プロセス内メモリに顧客を保持するリポジトリ。
//! `STORAGE_BACKEND=memory`（デフォルト）で使用し、ユースケースのテストでも利用する。
//!
//! ID はプロセス内で単調増加し、削除後も再利用しない。
//! 各操作は 1 つのロック区間で完結する。

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;
use customers_domain::customer::{Customer, CustomerId, CustomerProfile};

use super::{CustomerRepository, effective_search_term};
use crate::error::InfraError;

#[derive(Debug)]
struct Store {
    next_id:   i64,
    customers: BTreeMap<CustomerId, Customer>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id:   1,
            customers: BTreeMap::new(),
        }
    }
}

/// インメモリ実装の CustomerRepository
///
/// `Clone` はストアを共有する。
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    store: Arc<Mutex<Store>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, InfraError> {
        self.store
            .lock()
            .map_err(|_| InfraError::unexpected("インメモリストアのロックが破損しています"))
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self, search: Option<&str>) -> Result<Vec<Customer>, InfraError> {
        let store = self.lock()?;
        let term = effective_search_term(search);

        // BTreeMap のため ID 昇順で列挙される
        Ok(store
            .customers
            .values()
            .filter(|customer| term.is_none_or(|term| customer.matches_name(term)))
            .cloned()
            .collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %id))]
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, InfraError> {
        let store = self.lock()?;
        Ok(store.customers.get(&id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn insert(&self, profile: &CustomerProfile) -> Result<Customer, InfraError> {
        let mut store = self.lock()?;

        let id = CustomerId::from_i64(store.next_id);
        store.next_id += 1;

        let customer = Customer::new(id, profile.clone());
        store.customers.insert(id, customer.clone());
        Ok(customer)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<Customer, InfraError> {
        let mut store = self.lock()?;

        let Some(stored) = store.customers.get_mut(&customer.id()) else {
            return Err(InfraError::unexpected(format!(
                "更新対象の顧客が存在しません: id={}",
                customer.id()
            )));
        };
        *stored = customer.clone();
        Ok(customer.clone())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(id = %customer.id()))]
    async fn delete(&self, customer: &Customer) -> Result<(), InfraError> {
        let mut store = self.lock()?;
        store.customers.remove(&customer.id());
        Ok(())
    }
}
