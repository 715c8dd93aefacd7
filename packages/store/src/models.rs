//! # Domain models for users, appointments and services
//!
//! These are the shapes the UI works with. They mirror the three remote tables
//! but use Rust naming and typed enums; the snake_case wire rows live in
//! [`crate::rows`] and convert to and from these types.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | A person in the marketplace, tagged with a [`Role`]. |
//! | [`Appointment`] | A scheduled visit between a provider and a client. |
//! | [`NewAppointment`] / [`AppointmentPatch`] | Insert and partial-update payloads. |
//! | [`Service`] | Something a provider offers, with duration and price. |
//!
//! The enum tags serialize with the values stored in the remote schema
//! (`imobiliaria`, `orçamento`, `reparo`), which is why the variant names and the
//! serde names differ.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role tag carried by every user row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "imobiliaria")]
    Agency,
    #[serde(rename = "provider")]
    Provider,
    #[serde(rename = "client")]
    Client,
    #[serde(rename = "admin")]
    Admin,
}

impl Role {
    /// Value used in query filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Agency => "imobiliaria",
            Role::Provider => "provider",
            Role::Client => "client",
            Role::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Agency => "Agency",
            Role::Provider => "Provider",
            Role::Client => "Client",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 4] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Completed => "Completed",
        }
    }

    /// Accent colour for cards and chips.
    pub fn color(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "#F39C12",
            AppointmentStatus::Confirmed => "#27AE60",
            AppointmentStatus::Cancelled => "#E74C3C",
            AppointmentStatus::Completed => "#3498DB",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a `<select>` value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} value: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for AppointmentStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "status",
                value: s.to_string(),
            })
    }
}

/// Whether a visit is a quote (estimate) or the repair itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentKind {
    #[serde(rename = "orçamento")]
    Estimate,
    #[serde(rename = "reparo")]
    Repair,
}

impl AppointmentKind {
    pub const ALL: [AppointmentKind; 2] = [AppointmentKind::Estimate, AppointmentKind::Repair];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentKind::Estimate => "estimate",
            AppointmentKind::Repair => "repair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppointmentKind::Estimate => "Estimate",
            AppointmentKind::Repair => "Repair",
        }
    }
}

impl FromStr for AppointmentKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "appointment type",
                value: s.to_string(),
            })
    }
}

/// A scheduled service visit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub provider_id: String,
    pub client_id: String,
    pub service_id: String,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub kind: AppointmentKind,
    pub location: String,
    /// Name of the tenant the visit is for.
    pub tenant: String,
    pub description: String,
    pub approved_value: Option<f64>,
    pub rating: Option<f64>,
    pub feedback: Option<String>,
}

impl Appointment {
    /// An approved estimate with a value shows the value block on its card.
    pub fn shows_approved_value(&self) -> bool {
        self.kind == AppointmentKind::Estimate
            && self.status == AppointmentStatus::Confirmed
            && self.approved_value.is_some_and(|v| v != 0.0)
    }
}

/// Everything but the store-assigned id and the post-visit rating and feedback.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAppointment {
    pub provider_id: String,
    pub client_id: String,
    pub service_id: String,
    pub date: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub kind: AppointmentKind,
    pub location: String,
    pub tenant: String,
    pub description: String,
    pub approved_value: Option<f64>,
}

/// Partial update. `None` fields are left untouched in the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppointmentPatch {
    pub provider_id: Option<String>,
    pub client_id: Option<String>,
    pub service_id: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub status: Option<AppointmentStatus>,
    pub kind: Option<AppointmentKind>,
    pub location: Option<String>,
    pub tenant: Option<String>,
    pub description: Option<String>,
    /// `Some(None)` clears the stored value.
    pub approved_value: Option<Option<f64>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub provider_id: String,
    pub category: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub duration_minutes: u32,
    pub price: f64,
    pub provider_id: String,
    pub category: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<u32>,
    pub price: Option<f64>,
    pub provider_id: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn estimate(status: AppointmentStatus, value: Option<f64>) -> Appointment {
        Appointment {
            id: "a1".into(),
            provider_id: "p1".into(),
            client_id: "c1".into(),
            service_id: "s1".into(),
            date: Utc.with_ymd_and_hms(2025, 5, 12, 14, 0, 0).unwrap(),
            status,
            kind: AppointmentKind::Estimate,
            location: "Rua A, 10".into(),
            tenant: "Maria".into(),
            description: "Leaking tap".into(),
            approved_value: value,
            rating: None,
            feedback: None,
        }
    }

    #[test]
    fn test_wire_tags() {
        assert_eq!(serde_json::to_string(&Role::Agency).unwrap(), "\"imobiliaria\"");
        assert_eq!(
            serde_json::to_string(&AppointmentKind::Estimate).unwrap(),
            "\"orçamento\""
        );
        let kind: AppointmentKind = serde_json::from_str("\"reparo\"").unwrap();
        assert_eq!(kind, AppointmentKind::Repair);
        let status: AppointmentStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, AppointmentStatus::Cancelled);
    }

    #[test]
    fn test_select_values_parse() {
        assert_eq!("confirmed".parse::<AppointmentStatus>(), Ok(AppointmentStatus::Confirmed));
        assert_eq!("repair".parse::<AppointmentKind>(), Ok(AppointmentKind::Repair));
        assert!("archived".parse::<AppointmentStatus>().is_err());
    }

    #[test]
    fn test_approved_value_visibility() {
        assert!(estimate(AppointmentStatus::Confirmed, Some(350.0)).shows_approved_value());
        assert!(!estimate(AppointmentStatus::Pending, Some(350.0)).shows_approved_value());
        assert!(!estimate(AppointmentStatus::Confirmed, None).shows_approved_value());

        let mut repair = estimate(AppointmentStatus::Confirmed, Some(350.0));
        repair.kind = AppointmentKind::Repair;
        assert!(!repair.shows_approved_value());
    }
}
