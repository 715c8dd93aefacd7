use chrono::Local;
use dioxus::prelude::*;
use store::schedule::{format_day, group_by_day};
use store::{Appointment, AppointmentDraft};

use crate::appointment_card::AppointmentCard;
use crate::auth::use_access;
use crate::schedule::{delete_appointment, save_appointment, use_booking, use_config, use_schedule};
use crate::snackbar::use_snackbar;
use crate::AppointmentFormDialog;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Every appointment, grouped by day.
#[component]
pub fn AgendaListView() -> Element {
    let access = use_access();
    let schedule = use_schedule();
    let booking = use_booking();
    let config = use_config();
    let snackbar = use_snackbar();
    let mut form = use_signal(|| None::<AppointmentDraft>);

    let can_manage = access().can_manage();
    let state = schedule();
    let groups = group_by_day(&state.snapshot.appointments, &Local);
    // Only the agency sees the dialog, even if it was opened before a role switch.
    let open_form = form().filter(|_| can_manage);
    let form_key = open_form
        .as_ref()
        .and_then(|d| d.initial.as_ref())
        .map(|a| a.id.clone())
        .unwrap_or_else(|| "new".to_string());
    let save_booking = booking.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "agenda-list-view",
            h2 { "All appointments" }
            if let Some(notice) = state.notice() {
                div { class: if state.load_failed { "view-loading failed" } else { "view-loading" }, "{notice}" }
            } else if groups.is_empty() {
                div { class: "day-agenda-empty", "No appointments scheduled" }
            } else {
                for (day, appointments) in groups {
                    section {
                        key: "{day}",
                        class: "agenda-list-day",
                        h3 { "{format_day(day)}" }
                        for appointment in appointments {
                            AppointmentCard {
                                key: "{appointment.id}",
                                appointment: appointment.clone(),
                                can_manage: can_manage,
                                currency_symbol: config.ui.currency_symbol.clone(),
                                on_edit: move |a: Appointment| form.set(Some(AppointmentDraft::from_appointment(&a))),
                            }
                        }
                    }
                }
            }
        }

        if let Some(draft) = open_form {
            AppointmentFormDialog {
                key: "{form_key}",
                draft: draft,
                on_submit: move |draft: AppointmentDraft| {
                    form.set(None);
                    save_appointment(save_booking.clone(), schedule, snackbar, draft);
                },
                on_delete: move |id: String| {
                    form.set(None);
                    delete_appointment(booking.clone(), schedule, snackbar, id);
                },
                on_close: move |_| form.set(None),
            }
        }
    }
}
