use chrono::Local;
use dioxus::prelude::*;
use store::schedule::{format_money, format_when};
use store::Appointment;

use crate::icons::{FaCopy, FaMapLocationDot};
use crate::platform::{copy_to_clipboard, open_in_new_tab};
use crate::snackbar::{notify, Severity, SnackbarState};
use crate::Icon;

/// One appointment. Agency users can click it to edit and see the status chip.
#[component]
pub fn AppointmentCard(
    appointment: Appointment,
    can_manage: bool,
    currency_symbol: String,
    on_edit: EventHandler<Appointment>,
) -> Element {
    // Optional so the card also renders outside a SnackbarProvider.
    let snackbar = try_use_context::<Signal<SnackbarState>>();
    let status = appointment.status;
    let when = format_when(&appointment.date, &Local);
    let approved = appointment
        .approved_value
        .filter(|_| appointment.shows_approved_value())
        .map(|v| format_money(v, &currency_symbol));
    let location = appointment.location.clone();
    let maps_location = appointment.location.clone();
    let clicked = appointment.clone();

    rsx! {
        div {
            class: if can_manage { "appointment-card manageable" } else { "appointment-card" },
            style: "border-left-color: {status.color()}",
            onclick: move |_| {
                if can_manage {
                    on_edit.call(clicked.clone());
                }
            },
            div {
                class: "appointment-card-header",
                h3 { class: "appointment-card-kind", "{appointment.kind.label()}" }
                if can_manage {
                    span {
                        class: "status-chip",
                        style: "background-color: {status.color()}",
                        "{status.label()}"
                    }
                }
            }
            div {
                class: "appointment-card-field",
                span { class: "appointment-card-caption", "Date and time" }
                span { "\u{1F4C5} {when}" }
            }
            div {
                class: "appointment-card-field",
                span { class: "appointment-card-caption", "Client name" }
                span { class: "appointment-card-tenant", "{appointment.tenant}" }
            }
            div {
                class: "appointment-card-field",
                span { class: "appointment-card-caption", "Address" }
                div {
                    class: "appointment-card-address",
                    span { "\u{1F4CD} {appointment.location}" }
                    button {
                        class: "icon-button",
                        title: "Copy address",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            let location = location.clone();
                            spawn(async move {
                                let result = copy_to_clipboard(&location).await;
                                if let Err(e) = &result {
                                    tracing::error!("Failed to copy address: {}", e);
                                }
                                if let Some(mut snackbar) = snackbar {
                                    match result {
                                        Ok(()) => notify(&mut snackbar, Severity::Success, "Address copied"),
                                        Err(_) => notify(&mut snackbar, Severity::Error, "Could not copy address"),
                                    }
                                }
                            });
                        },
                        Icon { icon: FaCopy, width: 14, height: 14 }
                    }
                    button {
                        class: "icon-button",
                        title: "Open in Google Maps",
                        onclick: move |evt: Event<MouseData>| {
                            evt.stop_propagation();
                            open_in_new_tab(&api::links::maps_search_url(&maps_location));
                        },
                        Icon { icon: FaMapLocationDot, width: 14, height: 14 }
                    }
                }
            }
            div {
                class: "appointment-card-field",
                span { class: "appointment-card-caption", "Situation" }
                p { class: "appointment-card-description", "\u{1F4DD} {appointment.description}" }
            }
            if let Some(value) = approved {
                div {
                    class: "appointment-card-field",
                    span { class: "appointment-card-caption", "Approved value" }
                    div { class: "appointment-card-value", "\u{1F4B0} {value}" }
                }
            }
        }
    }
}
