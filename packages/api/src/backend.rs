//! # Table backend — the seam between table modules and the remote store
//!
//! [`TableBackend`] is an async interface with four primitives over JSON rows:
//! `select`, `insert`, `update` and `delete`, each scoped by a [`Query`].
//! The table modules ([`crate::appointments`], [`crate::services`],
//! [`crate::users`]) are generic over it.
//!
//! | Implementation | Used for |
//! |----------------|----------|
//! | [`RestBackend`] | The hosted PostgREST endpoint. |
//! | [`MemoryBackend`] | Tests and the offline demo. |
//! | [`Backend`] | Runtime choice between the two, built from [`BookingConfig`]. |

use serde::de::DeserializeOwned;
use serde_json::Value;
use store::BookingConfig;

use crate::error::Result;
use crate::memory::MemoryBackend;
use crate::query::Query;
use crate::rest::RestBackend;

/// Async CRUD over named tables of JSON rows.
pub trait TableBackend {
    fn select(
        &self,
        table: &str,
        query: &Query,
    ) -> impl std::future::Future<Output = Result<Vec<Value>>>;
    /// Insert one row and return it as stored.
    fn insert(
        &self,
        table: &str,
        row: Value,
    ) -> impl std::future::Future<Output = Result<Value>>;
    /// Apply `patch` to the single row matching `query` and return it.
    fn update(
        &self,
        table: &str,
        query: &Query,
        patch: Value,
    ) -> impl std::future::Future<Output = Result<Value>>;
    fn delete(
        &self,
        table: &str,
        query: &Query,
    ) -> impl std::future::Future<Output = Result<()>>;
}

/// Backend picked at startup.
#[derive(Clone, Debug)]
pub enum Backend {
    Rest(RestBackend),
    Memory(MemoryBackend),
}

impl Backend {
    /// REST when a backend URL is configured, demo data otherwise.
    pub fn from_config(config: &BookingConfig, now: chrono::DateTime<chrono::Utc>) -> Result<Self> {
        if config.is_offline() {
            tracing::info!("no backend url configured, using in-memory demo data");
            Ok(Backend::Memory(MemoryBackend::with_demo_data(now)))
        } else {
            tracing::info!(url = %config.backend.url, "using hosted table store");
            Ok(Backend::Rest(RestBackend::new(&config.backend)?))
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Backend::Memory(_))
    }
}

impl TableBackend for Backend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>> {
        match self {
            Backend::Rest(b) => b.select(table, query).await,
            Backend::Memory(b) => b.select(table, query).await,
        }
    }

    async fn insert(&self, table: &str, row: Value) -> Result<Value> {
        match self {
            Backend::Rest(b) => b.insert(table, row).await,
            Backend::Memory(b) => b.insert(table, row).await,
        }
    }

    async fn update(&self, table: &str, query: &Query, patch: Value) -> Result<Value> {
        match self {
            Backend::Rest(b) => b.update(table, query, patch).await,
            Backend::Memory(b) => b.update(table, query, patch).await,
        }
    }

    async fn delete(&self, table: &str, query: &Query) -> Result<()> {
        match self {
            Backend::Rest(b) => b.delete(table, query).await,
            Backend::Memory(b) => b.delete(table, query).await,
        }
    }
}

/// Decode one stored row through its wire type into a domain type.
pub(crate) fn decode<R, T>(row: Value) -> Result<T>
where
    R: DeserializeOwned,
    T: From<R>,
{
    Ok(T::from(serde_json::from_value::<R>(row)?))
}

pub(crate) fn decode_all<R, T>(rows: Vec<Value>) -> Result<Vec<T>>
where
    R: DeserializeOwned,
    T: From<R>,
{
    rows.into_iter().map(decode::<R, T>).collect()
}
