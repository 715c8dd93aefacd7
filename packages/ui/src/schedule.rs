//! Shared schedule data and the write actions every view uses.
//!
//! [`BookingProvider`] builds the backend from [`BookingConfig`], loads the
//! appointment, provider and client lists once on mount, and exposes them as a
//! `Signal<ScheduleState>`. Views change the data only through
//! [`save_appointment`] and [`delete_appointment`], which keep the held
//! snapshot in step with the store and raise a toast either way.

use api::booking::{DELETE_FAILED, LOAD_FAILED, SAVE_FAILED};
use api::{Backend, Booking, MemoryBackend, Snapshot};
use chrono::Utc;
use dioxus::prelude::*;
use store::{AppointmentDraft, BookingConfig};

use crate::snackbar::{notify, use_snackbar, Severity, SnackbarState};

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleState {
    pub snapshot: Snapshot,
    pub loading: bool,
    pub load_failed: bool,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            snapshot: Snapshot::default(),
            loading: true,
            load_failed: false,
        }
    }
}

impl ScheduleState {
    /// Message shown in place of the appointment list, if any.
    pub fn notice(&self) -> Option<&'static str> {
        if self.loading {
            Some("Loading appointments...")
        } else if self.load_failed {
            Some(LOAD_FAILED)
        } else {
            None
        }
    }
}

pub type AppBooking = Booking<Backend>;

pub fn use_schedule() -> Signal<ScheduleState> {
    use_context::<Signal<ScheduleState>>()
}

pub fn use_booking() -> AppBooking {
    use_context::<AppBooking>()
}

pub fn use_config() -> BookingConfig {
    use_context::<BookingConfig>()
}

fn build_backend(config: &BookingConfig) -> Backend {
    match Backend::from_config(config, Utc::now()) {
        Ok(backend) => backend,
        Err(e) => {
            tracing::error!("Invalid backend configuration, falling back to demo data: {}", e);
            Backend::Memory(MemoryBackend::with_demo_data(Utc::now()))
        }
    }
}

/// Provides config, the booking workflow and the loaded schedule to its children.
/// Must sit inside a `SnackbarProvider`.
#[component]
pub fn BookingProvider(config: BookingConfig, children: Element) -> Element {
    let booking = use_hook(|| {
        let backend = build_backend(&config);
        Booking::new(backend, config.booking.default_service_id.clone())
    });
    use_context_provider(|| config.clone());
    use_context_provider(|| booking.clone());

    let mut schedule = use_context_provider(|| Signal::new(ScheduleState::default()));
    let mut snackbar = use_snackbar();

    let _loader = use_resource(move || {
        let booking = booking.clone();
        async move {
            match booking.load().await {
                Ok(snapshot) => {
                    tracing::info!(
                        appointments = snapshot.appointments.len(),
                        providers = snapshot.providers.len(),
                        clients = snapshot.clients.len(),
                        "schedule loaded"
                    );
                    schedule.set(ScheduleState {
                        snapshot,
                        loading: false,
                        load_failed: false,
                    });
                }
                Err(e) => {
                    tracing::error!("Failed to load schedule: {}", e);
                    schedule.set(ScheduleState {
                        snapshot: Snapshot::default(),
                        loading: false,
                        load_failed: true,
                    });
                    notify(&mut snackbar, Severity::Error, e.toast_message(LOAD_FAILED));
                }
            }
        }
    });

    rsx! {
        {children}
    }
}

/// Create or update from a submitted draft.
pub fn save_appointment(
    booking: AppBooking,
    mut schedule: Signal<ScheduleState>,
    mut snackbar: Signal<SnackbarState>,
    draft: AppointmentDraft,
) {
    spawn(async move {
        let snapshot = schedule.peek().snapshot.clone();
        match booking.save(&snapshot, &draft).await {
            Ok(outcome) => {
                schedule.write().snapshot.apply(&outcome);
                notify(&mut snackbar, Severity::Success, outcome.message());
            }
            Err(e) => {
                tracing::error!("Failed to save appointment: {}", e);
                notify(&mut snackbar, Severity::Error, e.toast_message(SAVE_FAILED));
            }
        }
    });
}

pub fn delete_appointment(
    booking: AppBooking,
    mut schedule: Signal<ScheduleState>,
    mut snackbar: Signal<SnackbarState>,
    id: String,
) {
    spawn(async move {
        match booking.remove(&id).await {
            Ok(()) => {
                schedule.write().snapshot.forget(&id);
                notify(&mut snackbar, Severity::Success, "Appointment deleted successfully!");
            }
            Err(e) => {
                tracing::error!("Failed to delete appointment {}: {}", id, e);
                notify(&mut snackbar, Severity::Error, e.toast_message(DELETE_FAILED));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_follows_load_state() {
        let mut state = ScheduleState::default();
        assert_eq!(state.notice(), Some("Loading appointments..."));

        state.loading = false;
        state.load_failed = true;
        assert_eq!(state.notice(), Some("Error loading data"));

        state.load_failed = false;
        assert_eq!(state.notice(), None);
    }
}
