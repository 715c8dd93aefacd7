use chrono::{Local, Utc};
use dioxus::prelude::*;
use store::schedule::{appointments_on, group_by_day};
use store::{Appointment, AppointmentDraft};

use crate::auth::use_access;
use crate::calendar::MonthCalendar;
use crate::day_agenda::DayAgenda;
use crate::platform::today;
use crate::schedule::{delete_appointment, save_appointment, use_booking, use_config, use_schedule};
use crate::snackbar::use_snackbar;
use crate::AppointmentFormDialog;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Calendar on one side, the selected day's appointments on the other.
///
/// With `open_new` set the create dialog opens on mount (agency only).
#[component]
pub fn ScheduleView(#[props(default)] open_new: bool) -> Element {
    let access = use_access();
    let schedule = use_schedule();
    let booking = use_booking();
    let config = use_config();
    let snackbar = use_snackbar();

    let mut selected = use_signal(today);
    let mut form = use_signal(|| None::<AppointmentDraft>);

    use_effect(use_reactive!(|open_new| {
        if open_new && access.peek().can_manage() {
            form.set(Some(AppointmentDraft::new(Utc::now())));
        }
    }));

    let can_manage = access().can_manage();

    let state = schedule();
    let all = &state.snapshot.appointments;
    let day = selected();
    let on_day = appointments_on(all, day, &Local);
    let marked: Vec<_> = group_by_day(all, &Local).into_iter().map(|(d, _)| d).collect();

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
            class: "schedule-view",
            div {
                class: "schedule-calendar",
                MonthCalendar {
                    selected: day,
                    today: today(),
                    marked: marked,
                    on_select: move |d| selected.set(d),
                }
            }
            div {
                class: "schedule-agenda",
                if let Some(notice) = state.notice() {
                    div { class: if state.load_failed { "view-loading failed" } else { "view-loading" }, "{notice}" }
                } else {
                    DayAgenda {
                        day: day,
                        appointments: on_day,
                        can_manage: can_manage,
                        currency_symbol: config.ui.currency_symbol.clone(),
                        on_new: move |_| form.set(Some(AppointmentDraft::new(Utc::now()))),
                        on_edit: move |a: Appointment| form.set(Some(AppointmentDraft::from_appointment(&a))),
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
