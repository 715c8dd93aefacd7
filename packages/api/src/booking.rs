//! # Booking workflow for the schedule screen
//!
//! [`Booking`] composes the appointment and user tables into the three
//! operations the schedule screen performs:
//!
//! - [`load`](Booking::load) fetches appointments, providers and clients
//!   concurrently and fails if any of the three fails.
//! - [`save`](Booking::save) updates the appointment a draft was opened from,
//!   or creates a new one attached to the first provider, the first client and
//!   the configured default service.
//! - [`remove`](Booking::remove) deletes by id.
//!
//! [`Snapshot`] is the screen's copy of the data; [`Snapshot::apply`] and
//! [`Snapshot::forget`] keep it in step with successful writes without a reload.

use store::{Appointment, AppointmentDraft, FormError, Role, User};
use thiserror::Error;

use crate::appointments::Appointments;
use crate::backend::TableBackend;
use crate::error::ApiError;
use crate::users::Users;

pub const LOAD_FAILED: &str = "Error loading data";
pub const SAVE_FAILED: &str = "Error saving appointment";
pub const DELETE_FAILED: &str = "Error deleting appointment";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("No provider available")]
    NoProvider,
    #[error("No client available")]
    NoClient,
}

impl BookingError {
    /// Text for the toast. Remote failures all read as `fallback`.
    pub fn toast_message(&self, fallback: &str) -> String {
        match self {
            BookingError::Api(_) => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub appointments: Vec<Appointment>,
    pub providers: Vec<User>,
    pub clients: Vec<User>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SaveOutcome {
    Created(Appointment),
    Updated(Appointment),
}

impl SaveOutcome {
    pub fn appointment(&self) -> &Appointment {
        match self {
            SaveOutcome::Created(a) | SaveOutcome::Updated(a) => a,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Created(_) => "Appointment created successfully!",
            SaveOutcome::Updated(_) => "Appointment updated successfully!",
        }
    }
}

impl Snapshot {
    pub fn apply(&mut self, outcome: &SaveOutcome) {
        match outcome {
            SaveOutcome::Created(created) => self.appointments.push(created.clone()),
            SaveOutcome::Updated(updated) => {
                if let Some(slot) = self.appointments.iter_mut().find(|a| a.id == updated.id) {
                    *slot = updated.clone();
                }
            }
        }
    }

    pub fn forget(&mut self, id: &str) {
        self.appointments.retain(|a| a.id != id);
    }
}

#[derive(Clone, Debug)]
pub struct Booking<B> {
    appointments: Appointments<B>,
    users: Users<B>,
    default_service_id: String,
}

impl<B: TableBackend + Clone> Booking<B> {
    pub fn new(backend: B, default_service_id: impl Into<String>) -> Self {
        Self {
            appointments: Appointments::new(backend.clone()),
            users: Users::new(backend),
            default_service_id: default_service_id.into(),
        }
    }

    pub fn appointments(&self) -> &Appointments<B> {
        &self.appointments
    }

    pub fn users(&self) -> &Users<B> {
        &self.users
    }

    pub async fn load(&self) -> Result<Snapshot, BookingError> {
        let (appointments, providers, clients) = futures::try_join!(
            self.appointments.get_all(),
            self.users.get_by_role(Role::Provider),
            self.users.get_by_role(Role::Client),
        )?;
        Ok(Snapshot {
            appointments,
            providers,
            clients,
        })
    }

    pub async fn save(
        &self,
        snapshot: &Snapshot,
        draft: &AppointmentDraft,
    ) -> Result<SaveOutcome, BookingError> {
        if let Some(editing) = &draft.initial {
            let mut patch = draft.to_patch()?;
            patch.service_id = Some(editing.service_id.clone());
            let updated = self.appointments.update(&editing.id, &patch).await?;
            return Ok(SaveOutcome::Updated(updated));
        }

        let provider = snapshot.providers.first().ok_or(BookingError::NoProvider)?;
        let client = snapshot.clients.first().ok_or(BookingError::NoClient)?;
        let new = draft.to_new(&provider.id, &client.id, &self.default_service_id)?;
        let created = self.appointments.create(&new).await?;
        Ok(SaveOutcome::Created(created))
    }

    pub async fn remove(&self, id: &str) -> Result<(), BookingError> {
        self.appointments.delete(id).await?;
        Ok(())
    }
}
