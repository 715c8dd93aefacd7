//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const UI_CSS: Asset = asset!("/assets/booking.css");

mod platform;
pub use platform::today;

mod navbar;
pub use navbar::{visible_tabs, BottomNav, NavTab, Navbar};

mod auth;
pub use auth::{use_access, AccessProvider, AccessState, AgencySwitch};

mod snackbar;
pub use snackbar::{notify, use_snackbar, Severity, Snackbar, SnackbarProvider, SnackbarState};

pub mod schedule;
pub use schedule::{use_booking, use_config, use_schedule, BookingProvider, ScheduleState};

mod calendar;
pub use calendar::MonthCalendar;

mod appointment_card;
pub use appointment_card::AppointmentCard;

mod day_agenda;
pub use day_agenda::DayAgenda;

mod appointment_form;
pub use appointment_form::AppointmentFormDialog;
