use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use serde_json::{json, Value};
use store::rows::{to_iso, APPOINTMENTS, SERVICES, USERS};

use crate::backend::TableBackend;
use crate::error::{ApiError, Result};
use crate::query::Query;

/// In-memory tables for tests and the offline demo.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<HashMap<String, Vec<Value>>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A provider, a client, an agency user and a few appointments around `now`.
    pub fn with_demo_data(now: DateTime<Utc>) -> Self {
        let backend = Self::new();
        {
            let mut tables = backend.lock();
            let stamp = to_iso(&now);
            tables.insert(
                USERS.to_string(),
                vec![
                    json!({ "id": "u-agency", "name": "Central Imóveis", "email": "contato@central.example", "role": "imobiliaria", "phone": null, "avatar": null, "created_at": stamp, "updated_at": stamp }),
                    json!({ "id": "u-provider", "name": "Carlos Reparos", "email": "carlos@reparos.example", "role": "provider", "phone": "+55 11 90000-0001", "avatar": null, "created_at": stamp, "updated_at": stamp }),
                    json!({ "id": "u-client", "name": "Ana Lima", "email": "ana@lima.example", "role": "client", "phone": null, "avatar": null, "created_at": stamp, "updated_at": stamp }),
                ],
            );
            tables.insert(
                SERVICES.to_string(),
                vec![json!({ "id": "00000000-0000-0000-0000-000000000001", "name": "General maintenance", "description": "Small repairs and inspections", "duration": 60, "price": 120.0, "provider_id": "u-provider", "category": "maintenance", "created_at": stamp, "updated_at": stamp })],
            );
            let visit = |id: &str, offset: Duration, status: &str, kind: &str, location: &str, tenant: &str, description: &str, value: Option<f64>| {
                json!({
                    "id": id,
                    "provider_id": "u-provider",
                    "client_id": "u-client",
                    "service_id": "00000000-0000-0000-0000-000000000001",
                    "date": to_iso(&(now + offset)),
                    "status": status,
                    "type": kind,
                    "location": location,
                    "tenant": tenant,
                    "description": description,
                    "approved_value": value,
                    "rating": null,
                    "feedback": null,
                    "created_at": stamp,
                    "updated_at": stamp,
                })
            };
            tables.insert(
                APPOINTMENTS.to_string(),
                vec![
                    visit("demo-1", Duration::hours(1), "pending", "orçamento", "Rua das Flores, 42 - Apto 31", "Marina Costa", "Bathroom tap leaking", None),
                    visit("demo-2", Duration::hours(3), "confirmed", "orçamento", "Av. Paulista, 1000 - Sala 5", "Roberto Alves", "Repaint living room walls", Some(850.0)),
                    visit("demo-3", Duration::days(1), "pending", "reparo", "Rua Augusta, 250", "Fernanda Reis", "Replace broken window pane", None),
                ],
            );
        }
        backend
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Vec<Value>>> {
        // A poisoned lock only means a test panicked mid-write; the rows are still usable.
        self.tables.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of rows currently stored in `table`.
    pub fn len(&self, table: &str) -> usize {
        self.lock().get(table).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }
}

impl TableBackend for MemoryBackend {
    async fn select(&self, table: &str, query: &Query) -> Result<Vec<Value>> {
        let tables = self.lock();
        let mut rows: Vec<Value> = tables
            .get(table)
            .map(|rows| rows.iter().filter(|r| query.matches(r)).cloned().collect())
            .unwrap_or_default();
        query.sort(&mut rows);
        Ok(rows)
    }

    async fn insert(&self, table: &str, mut row: Value) -> Result<Value> {
        let Some(fields) = row.as_object_mut() else {
            return Err(ApiError::Status {
                status: 400,
                message: "row must be a JSON object".to_string(),
            });
        };
        let stamp = Value::String(to_iso(&Utc::now()));
        let missing_id = fields.get("id").map_or(true, Value::is_null);
        if missing_id {
            fields.insert("id".to_string(), Value::String(uuid::Uuid::new_v4().to_string()));
        }
        fields.insert("created_at".to_string(), stamp.clone());
        fields.insert("updated_at".to_string(), stamp);

        self.lock()
            .entry(table.to_string())
            .or_default()
            .push(row.clone());
        Ok(row)
    }

    async fn update(&self, table: &str, query: &Query, patch: Value) -> Result<Value> {
        let Some(changes) = patch.as_object() else {
            return Err(ApiError::Status {
                status: 400,
                message: "patch must be a JSON object".to_string(),
            });
        };
        let mut tables = self.lock();
        let rows = tables.entry(table.to_string()).or_default();
        let mut updated = None;
        for row in rows.iter_mut().filter(|r| query.matches(r)) {
            if let Some(fields) = row.as_object_mut() {
                for (key, value) in changes {
                    fields.insert(key.clone(), value.clone());
                }
                fields.insert("updated_at".to_string(), Value::String(to_iso(&Utc::now())));
            }
            updated.get_or_insert_with(|| row.clone());
        }
        updated.ok_or_else(|| ApiError::NotFound {
            table: table.to_string(),
            key: query.describe(),
        })
    }

    async fn delete(&self, table: &str, query: &Query) -> Result<()> {
        if let Some(rows) = self.lock().get_mut(table) {
            rows.retain(|r| !query.matches(r));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let backend = MemoryBackend::new();
        let row = backend
            .insert("things", json!({ "name": "first" }))
            .await
            .unwrap();
        assert!(row["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(backend.len("things"), 1);
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let backend = MemoryBackend::new();
        let err = backend
            .update("things", &Query::new().eq("id", "nope"), json!({ "name": "x" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_demo_data_is_queryable() {
        let now = Utc.with_ymd_and_hms(2025, 5, 12, 9, 0, 0).unwrap();
        let backend = MemoryBackend::with_demo_data(now);
        let providers = backend
            .select(USERS, &Query::new().eq("role", "provider"))
            .await
            .unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(backend.len(APPOINTMENTS), 3);
        assert!(!backend.is_empty(SERVICES));
    }

    #[tokio::test]
    async fn test_delete_removes_matching_rows() {
        let backend = MemoryBackend::new();
        backend.insert("things", json!({ "id": "a" })).await.unwrap();
        backend.insert("things", json!({ "id": "b" })).await.unwrap();
        backend
            .delete("things", &Query::new().eq("id", "a"))
            .await
            .unwrap();
        let left = backend.select("things", &Query::new()).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0]["id"], "b");
    }
}
