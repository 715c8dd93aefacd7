//! State behind the create/edit appointment dialog.
//!
//! [`AppointmentDraft`] holds what the user typed as plain strings and enums,
//! remembers the appointment being edited (if any), and turns itself into a
//! [`NewAppointment`] or [`AppointmentPatch`] once [`validate`](AppointmentDraft::validate)
//! passes.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

use crate::models::{
    Appointment, AppointmentKind, AppointmentPatch, AppointmentStatus, NewAppointment,
};

/// Format used by `<input type="datetime-local">`.
pub const DATETIME_LOCAL: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("approved value must be a non-negative number")]
    InvalidValue,
    #[error("invalid date and time: {0}")]
    InvalidDate(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentDraft {
    /// The appointment being edited; `None` when creating.
    pub initial: Option<Appointment>,
    pub kind: AppointmentKind,
    pub date: DateTime<Utc>,
    pub location: String,
    pub tenant: String,
    pub description: String,
    pub status: AppointmentStatus,
    /// Raw text of the approved value input.
    pub approved_value: String,
}

impl AppointmentDraft {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            initial: None,
            kind: AppointmentKind::Estimate,
            date: now,
            location: String::new(),
            tenant: String::new(),
            description: String::new(),
            status: AppointmentStatus::Pending,
            approved_value: String::new(),
        }
    }

    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            initial: Some(appointment.clone()),
            kind: appointment.kind,
            date: appointment.date,
            location: appointment.location.clone(),
            tenant: appointment.tenant.clone(),
            description: appointment.description.clone(),
            status: appointment.status,
            approved_value: appointment
                .approved_value
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.initial.is_some()
    }

    pub fn shows_status(&self) -> bool {
        self.is_editing()
    }

    /// Only an estimate that was already confirmed when the dialog opened
    /// exposes the approved value input.
    pub fn shows_approved_value(&self) -> bool {
        self.initial.as_ref().is_some_and(|a| {
            a.kind == AppointmentKind::Estimate && a.status == AppointmentStatus::Confirmed
        })
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit appointment"
        } else {
            "New appointment"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Save"
        } else {
            "Schedule"
        }
    }

    /// Value for a `datetime-local` input, in the local zone.
    pub fn date_input(&self) -> String {
        self.date_input_in(&Local)
    }

    pub fn date_input_in<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date.with_timezone(tz).format(DATETIME_LOCAL).to_string()
    }

    pub fn set_date_input(&mut self, value: &str) -> Result<(), FormError> {
        self.set_date_input_in(value, &Local)
    }

    pub fn set_date_input_in<Tz: TimeZone>(&mut self, value: &str, tz: &Tz) -> Result<(), FormError> {
        let naive = NaiveDateTime::parse_from_str(value, DATETIME_LOCAL)
            .map_err(|_| FormError::InvalidDate(value.to_string()))?;
        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| FormError::InvalidDate(value.to_string()))?;
        self.date = local.with_timezone(&Utc);
        Ok(())
    }

    fn parsed_value(&self) -> Result<Option<f64>, FormError> {
        let raw = self.approved_value.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        match raw.replace(',', ".").parse::<f64>() {
            Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
            _ => Err(FormError::InvalidValue),
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.tenant.trim().is_empty() {
            return Err(FormError::Required("Client name"));
        }
        if self.location.trim().is_empty() {
            return Err(FormError::Required("Service address"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Required("Service description"));
        }
        self.parsed_value()?;
        Ok(())
    }

    /// Payload for creating an appointment. New appointments always start pending.
    pub fn to_new(
        &self,
        provider_id: &str,
        client_id: &str,
        service_id: &str,
    ) -> Result<NewAppointment, FormError> {
        self.validate()?;
        Ok(NewAppointment {
            provider_id: provider_id.to_string(),
            client_id: client_id.to_string(),
            service_id: service_id.to_string(),
            date: self.date,
            status: AppointmentStatus::Pending,
            kind: self.kind,
            location: self.location.trim().to_string(),
            tenant: self.tenant.trim().to_string(),
            description: self.description.trim().to_string(),
            approved_value: self.parsed_value()?,
        })
    }

    /// Payload for updating the appointment being edited. An emptied approved
    /// value input clears the stored value; a hidden input leaves it alone
    /// unless it holds a number.
    pub fn to_patch(&self) -> Result<AppointmentPatch, FormError> {
        self.validate()?;
        let value = self.parsed_value()?;
        let approved_value = if self.shows_approved_value() {
            Some(value)
        } else {
            value.map(Some)
        };
        Ok(AppointmentPatch {
            date: Some(self.date),
            status: Some(self.status),
            kind: Some(self.kind),
            location: Some(self.location.trim().to_string()),
            tenant: Some(self.tenant.trim().to_string()),
            description: Some(self.description.trim().to_string()),
            approved_value,
            ..Default::default()
        })
    }
}
