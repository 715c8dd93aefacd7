//! Data access for the `services` table.

use store::rows::{ServiceInsert, ServiceRow, ServiceUpdate, SERVICES};
use store::{NewService, Service, ServicePatch};

use crate::backend::{decode, decode_all, TableBackend};
use crate::error::Result;
use crate::query::Query;

#[derive(Clone, Debug)]
pub struct Services<B> {
    backend: B,
}

impl<B: TableBackend> Services<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub async fn get_all(&self) -> Result<Vec<Service>> {
        let rows = self
            .backend
            .select(SERVICES, &Query::new().order("name", true))
            .await
            .inspect_err(|e| tracing::error!("Failed to load services: {}", e))?;
        decode_all::<ServiceRow, _>(rows)
    }

    pub async fn get_by_provider(&self, provider_id: &str) -> Result<Vec<Service>> {
        let query = Query::new()
            .eq("provider_id", provider_id)
            .order("name", true);
        let rows = self
            .backend
            .select(SERVICES, &query)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to load services for provider {}: {}", provider_id, e)
            })?;
        decode_all::<ServiceRow, _>(rows)
    }

    pub async fn create(&self, service: &NewService) -> Result<Service> {
        let body = serde_json::to_value(ServiceInsert::from(service))?;
        let row = self
            .backend
            .insert(SERVICES, body)
            .await
            .inspect_err(|e| tracing::error!("Failed to create service: {}", e))?;
        decode::<ServiceRow, _>(row)
    }

    pub async fn update(&self, id: &str, patch: &ServicePatch) -> Result<Service> {
        let body = serde_json::to_value(ServiceUpdate::from(patch))?;
        let row = self
            .backend
            .update(SERVICES, &Query::new().eq("id", id), body)
            .await
            .inspect_err(|e| tracing::error!("Failed to update service {}: {}", id, e))?;
        decode::<ServiceRow, _>(row)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend
            .delete(SERVICES, &Query::new().eq("id", id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete service {}: {}", id, e))
    }
}
