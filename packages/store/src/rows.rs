//! Wire rows for the `appointments`, `services` and `users` tables.
//!
//! The remote schema is snake_case and carries store-managed audit columns.
//! Rows convert into the domain types in [`crate::models`]; insert and update
//! payloads are built from [`NewAppointment`] / [`AppointmentPatch`] (and the
//! service equivalents). Patch fields that are `None` are not serialized, so
//! the store leaves those columns alone.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::models::{
    Appointment, AppointmentKind, AppointmentPatch, AppointmentStatus, NewAppointment, NewService,
    Role, Service, ServicePatch, User,
};

pub const APPOINTMENTS: &str = "appointments";
pub const SERVICES: &str = "services";
pub const USERS: &str = "users";

/// Timestamps are sent in the same millisecond `Z` form browsers produce.
fn as_iso<S: Serializer>(date: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&to_iso(date))
}

fn as_iso_opt<S: Serializer>(date: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => as_iso(date, s),
        None => s.serialize_none(),
    }
}

pub fn to_iso(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppointmentRow {
    pub id: String,
    pub provider_id: String,
    pub client_id: String,
    pub service_id: String,
    #[serde(serialize_with = "as_iso")]
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub location: String,
    pub tenant: String,
    pub description: String,
    #[serde(default)]
    pub approved_value: Option<f64>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            provider_id: row.provider_id,
            client_id: row.client_id,
            service_id: row.service_id,
            date: row.date,
            status: row.status,
            kind: row.kind,
            location: row.location,
            tenant: row.tenant,
            description: row.description,
            approved_value: row.approved_value,
            rating: row.rating,
            feedback: row.feedback,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AppointmentInsert {
    pub provider_id: String,
    pub client_id: String,
    pub service_id: String,
    #[serde(serialize_with = "as_iso")]
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    #[serde(rename = "type")]
    pub kind: AppointmentKind,
    pub location: String,
    pub tenant: String,
    pub description: String,
    pub approved_value: Option<f64>,
}

impl From<&NewAppointment> for AppointmentInsert {
    fn from(new: &NewAppointment) -> Self {
        AppointmentInsert {
            provider_id: new.provider_id.clone(),
            client_id: new.client_id.clone(),
            service_id: new.service_id.clone(),
            date: new.date,
            status: new.status,
            kind: new.kind,
            location: new.location.clone(),
            tenant: new.tenant.clone(),
            description: new.description.clone(),
            approved_value: new.approved_value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AppointmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_iso_opt")]
    pub date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AppointmentKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `Some(None)` is sent as `null`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_value: Option<Option<f64>>,
}

impl From<&AppointmentPatch> for AppointmentUpdate {
    fn from(patch: &AppointmentPatch) -> Self {
        // Empty strings count as "not provided", the same as a missing field.
        let text = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        AppointmentUpdate {
            provider_id: text(&patch.provider_id),
            client_id: text(&patch.client_id),
            service_id: text(&patch.service_id),
            date: patch.date,
            status: patch.status,
            kind: patch.kind,
            location: text(&patch.location),
            tenant: text(&patch.tenant),
            description: text(&patch.description),
            approved_value: patch.approved_value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration: u32,
    pub price: f64,
    pub provider_id: String,
    pub category: String,
}

impl From<ServiceRow> for Service {
    fn from(row: ServiceRow) -> Self {
        Service {
            id: row.id,
            name: row.name,
            description: row.description,
            duration_minutes: row.duration,
            price: row.price,
            provider_id: row.provider_id,
            category: row.category,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceInsert {
    pub name: String,
    pub description: String,
    pub duration: u32,
    pub price: f64,
    pub provider_id: String,
    pub category: String,
}

impl From<&NewService> for ServiceInsert {
    fn from(new: &NewService) -> Self {
        ServiceInsert {
            name: new.name.clone(),
            description: new.description.clone(),
            duration: new.duration_minutes,
            price: new.price,
            provider_id: new.provider_id.clone(),
            category: new.category.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ServiceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&ServicePatch> for ServiceUpdate {
    fn from(patch: &ServicePatch) -> Self {
        ServiceUpdate {
            name: patch.name.clone(),
            description: patch.description.clone(),
            duration: patch.duration_minutes,
            price: patch.price,
            provider_id: patch.provider_id.clone(),
            category: patch.category.clone(),
        }
    }
}

/// The users table already matches the domain names apart from audit columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            role: row.role,
            phone: row.phone,
            avatar: row.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_appointment_row_from_store_json() {
        let raw = json!({
            "id": "a1",
            "provider_id": "p1",
            "client_id": "c1",
            "service_id": "s1",
            "date": "2025-05-12T14:30:00+00:00",
            "status": "confirmed",
            "type": "orçamento",
            "location": "Rua das Flores, 42",
            "tenant": "Joana",
            "description": "Broken window",
            "approved_value": 420.5,
            "rating": null,
            "feedback": null,
            "created_at": "2025-05-01T10:00:00+00:00",
            "updated_at": "2025-05-01T10:00:00+00:00"
        });
        let row: AppointmentRow = serde_json::from_value(raw).unwrap();
        let appointment = Appointment::from(row);
        assert_eq!(appointment.provider_id, "p1");
        assert_eq!(appointment.kind, AppointmentKind::Estimate);
        assert_eq!(appointment.approved_value, Some(420.5));
        assert_eq!(
            appointment.date,
            Utc.with_ymd_and_hms(2025, 5, 12, 14, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_fractional_rating_decodes() {
        let raw = json!({
            "id": "a2",
            "provider_id": "p1",
            "client_id": "c1",
            "service_id": "s1",
            "date": "2025-05-12T14:30:00.000Z",
            "status": "completed",
            "type": "reparo",
            "location": "Rua B",
            "tenant": "Joana",
            "description": "Door",
            "approved_value": null,
            "rating": 4.5,
            "feedback": "Quick and tidy"
        });
        let appointment = Appointment::from(serde_json::from_value::<AppointmentRow>(raw).unwrap());
        assert_eq!(appointment.rating, Some(4.5));
        assert_eq!(appointment.feedback.as_deref(), Some("Quick and tidy"));
    }

    #[test]
    fn test_update_omits_missing_fields() {
        let patch = AppointmentPatch {
            tenant: Some("Carlos".into()),
            location: Some(String::new()),
            status: Some(AppointmentStatus::Completed),
            ..Default::default()
        };
        let body = serde_json::to_value(AppointmentUpdate::from(&patch)).unwrap();
        assert_eq!(body, json!({ "tenant": "Carlos", "status": "completed" }));
    }

    #[test]
    fn test_cleared_value_is_sent_as_null() {
        let patch = AppointmentPatch {
            approved_value: Some(None),
            ..Default::default()
        };
        let body = serde_json::to_value(AppointmentUpdate::from(&patch)).unwrap();
        assert_eq!(body, json!({ "approved_value": null }));
    }

    #[test]
    fn test_insert_uses_snake_case_and_iso_dates() {
        let new = NewAppointment {
            provider_id: "p1".into(),
            client_id: "c1".into(),
            service_id: "s1".into(),
            date: Utc.with_ymd_and_hms(2025, 1, 2, 9, 5, 0).unwrap(),
            status: AppointmentStatus::Pending,
            kind: AppointmentKind::Repair,
            location: "Av. Central".into(),
            tenant: "Rui".into(),
            description: "Door".into(),
            approved_value: None,
        };
        let body = serde_json::to_value(AppointmentInsert::from(&new)).unwrap();
        assert_eq!(body["date"], "2025-01-02T09:05:00.000Z");
        assert_eq!(body["type"], "reparo");
        assert_eq!(body["provider_id"], "p1");
        assert!(body["approved_value"].is_null());
        assert!(body.get("rating").is_none());
        assert!(body.get("feedback").is_none());
    }

    #[test]
    fn test_service_row_maps_duration() {
        let row: ServiceRow = serde_json::from_value(json!({
            "id": "s1",
            "name": "Plumbing",
            "description": "General plumbing",
            "duration": 90,
            "price": 150.0,
            "provider_id": "p1",
            "category": "home"
        }))
        .unwrap();
        let service = Service::from(row);
        assert_eq!(service.duration_minutes, 90);
        assert_eq!(service.provider_id, "p1");
    }
}
