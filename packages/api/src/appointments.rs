//! Data access for the `appointments` table.

use chrono::{NaiveDate, TimeZone};
use store::rows::{to_iso, AppointmentInsert, AppointmentRow, AppointmentUpdate, APPOINTMENTS};
use store::schedule::day_bounds;
use store::{Appointment, AppointmentPatch, NewAppointment};

use crate::backend::{decode, decode_all, TableBackend};
use crate::error::{ApiError, Result};
use crate::query::Query;

#[derive(Clone, Debug)]
pub struct Appointments<B> {
    backend: B,
}

impl<B: TableBackend> Appointments<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Every appointment, earliest first.
    pub async fn get_all(&self) -> Result<Vec<Appointment>> {
        let query = Query::new().order("date", true);
        let rows = self
            .backend
            .select(APPOINTMENTS, &query)
            .await
            .inspect_err(|e| tracing::error!("Failed to load appointments: {}", e))?;
        decode_all::<AppointmentRow, _>(rows)
    }

    /// Appointments on a local calendar day, earliest first.
    pub async fn get_by_date<Tz: TimeZone>(&self, day: NaiveDate, tz: &Tz) -> Result<Vec<Appointment>> {
        let (start, end) = day_bounds(day, tz)
            .ok_or_else(|| ApiError::Config(format!("{day} has no local midnight")))?;
        let query = Query::new()
            .gte("date", to_iso(&start))
            .lte("date", to_iso(&end))
            .order("date", true);
        let rows = self
            .backend
            .select(APPOINTMENTS, &query)
            .await
            .inspect_err(|e| tracing::error!("Failed to load appointments for {}: {}", day, e))?;
        decode_all::<AppointmentRow, _>(rows)
    }

    pub async fn create(&self, appointment: &NewAppointment) -> Result<Appointment> {
        let body = serde_json::to_value(AppointmentInsert::from(appointment))?;
        let row = self
            .backend
            .insert(APPOINTMENTS, body)
            .await
            .inspect_err(|e| tracing::error!("Failed to create appointment: {}", e))?;
        let created: Appointment = decode::<AppointmentRow, _>(row)?;
        tracing::info!(id = %created.id, "appointment created");
        Ok(created)
    }

    pub async fn update(&self, id: &str, patch: &AppointmentPatch) -> Result<Appointment> {
        let body = serde_json::to_value(AppointmentUpdate::from(patch))?;
        let row = self
            .backend
            .update(APPOINTMENTS, &Query::new().eq("id", id), body)
            .await
            .inspect_err(|e| tracing::error!("Failed to update appointment {}: {}", id, e))?;
        let updated: Appointment = decode::<AppointmentRow, _>(row)?;
        tracing::info!(id = %updated.id, "appointment updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        self.backend
            .delete(APPOINTMENTS, &Query::new().eq("id", id))
            .await
            .inspect_err(|e| tracing::error!("Failed to delete appointment {}: {}", id, e))?;
        tracing::info!(id, "appointment deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryBackend;
    use chrono::{FixedOffset, Utc};
    use store::{AppointmentKind, AppointmentStatus};

    fn new_at(date: chrono::DateTime<Utc>, tenant: &str) -> NewAppointment {
        NewAppointment {
            provider_id: "p1".into(),
            client_id: "c1".into(),
            service_id: "s1".into(),
            date,
            status: AppointmentStatus::Pending,
            kind: AppointmentKind::Estimate,
            location: "Rua A, 1".into(),
            tenant: tenant.into(),
            description: "Check wiring".into(),
            approved_value: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_list_in_date_order() {
        let table = Appointments::new(MemoryBackend::new());
        table
            .create(&new_at(Utc.with_ymd_and_hms(2025, 5, 14, 10, 0, 0).unwrap(), "Later"))
            .await
            .unwrap();
        let first = table
            .create(&new_at(Utc.with_ymd_and_hms(2025, 5, 12, 10, 0, 0).unwrap(), "Sooner"))
            .await
            .unwrap();
        assert!(!first.id.is_empty());

        let all = table.get_all().await.unwrap();
        let tenants: Vec<_> = all.iter().map(|a| a.tenant.as_str()).collect();
        assert_eq!(tenants, ["Sooner", "Later"]);
    }

    #[tokio::test]
    async fn test_get_by_date_uses_local_day() {
        let table = Appointments::new(MemoryBackend::new());
        // 02:00 UTC on the 13th is 23:00 on the 12th in UTC-3.
        table
            .create(&new_at(Utc.with_ymd_and_hms(2025, 5, 13, 2, 0, 0).unwrap(), "Night"))
            .await
            .unwrap();
        table
            .create(&new_at(Utc.with_ymd_and_hms(2025, 5, 13, 12, 0, 0).unwrap(), "Noon"))
            .await
            .unwrap();

        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        let day = NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
        let found = table.get_by_date(day, &brt).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].tenant, "Night");
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let table = Appointments::new(MemoryBackend::new());
        let created = table
            .create(&new_at(Utc.with_ymd_and_hms(2025, 5, 12, 10, 0, 0).unwrap(), "Rita"))
            .await
            .unwrap();

        let patch = AppointmentPatch {
            status: Some(AppointmentStatus::Confirmed),
            approved_value: Some(Some(300.0)),
            ..Default::default()
        };
        let updated = table.update(&created.id, &patch).await.unwrap();
        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.approved_value, Some(300.0));
        assert_eq!(updated.tenant, "Rita");

        table.delete(&created.id).await.unwrap();
        assert!(table.get_all().await.unwrap().is_empty());
        assert!(table.update(&created.id, &patch).await.is_err());
    }
}
