use chrono::NaiveDate;
use dioxus::prelude::*;
use store::schedule::format_day;
use store::Appointment;

use crate::appointment_card::AppointmentCard;
use crate::icons::FaPlus;
use crate::Icon;

/// Appointments for the selected day, with the create button for the agency.
#[component]
pub fn DayAgenda(
    day: NaiveDate,
    appointments: Vec<Appointment>,
    can_manage: bool,
    currency_symbol: String,
    on_new: EventHandler<()>,
    on_edit: EventHandler<Appointment>,
) -> Element {
    rsx! {
        div {
            class: "day-agenda",
            div {
                class: if can_manage { "day-agenda-header" } else { "day-agenda-header stacked" },
                h2 { "Appointments for {format_day(day)}" }
                if can_manage {
                    button {
                        class: "primary-button",
                        onclick: move |_| on_new.call(()),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        span { "New appointment" }
                    }
                }
            }

            if appointments.is_empty() {
                div {
                    class: "day-agenda-empty",
                    "No appointments for this date"
                }
            } else {
                div {
                    class: "day-agenda-list",
                    for appointment in appointments {
                        AppointmentCard {
                            key: "{appointment.id}",
                            appointment: appointment.clone(),
                            can_manage: can_manage,
                            currency_symbol: currency_symbol.clone(),
                            on_edit: on_edit,
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use store::{AppointmentKind, AppointmentStatus};

    fn sample() -> Appointment {
        Appointment {
            id: "a1".into(),
            provider_id: "p1".into(),
            client_id: "c1".into(),
            service_id: "s1".into(),
            date: Utc.with_ymd_and_hms(2025, 5, 12, 12, 0, 0).unwrap(),
            status: AppointmentStatus::Confirmed,
            kind: AppointmentKind::Estimate,
            location: "Rua das Flores, 42".into(),
            tenant: "Marina Costa".into(),
            description: "Bathroom tap leaking".into(),
            approved_value: Some(850.0),
            rating: None,
            feedback: None,
        }
    }

    #[component]
    fn Harness(agency: bool, appointments: Vec<Appointment>) -> Element {
        rsx! {
            DayAgenda {
                day: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
                appointments: appointments,
                can_manage: agency,
                currency_symbol: "R$".to_string(),
                on_new: move |_| {},
                on_edit: move |_| {},
            }
        }
    }

    fn render(agency: bool, appointments: Vec<Appointment>) -> String {
        let mut dom = VirtualDom::new_with_props(
            Harness,
            HarnessProps {
                agency,
                appointments,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_create_button_only_for_agency() {
        assert!(render(true, vec![]).contains("New appointment"));
        assert!(!render(false, vec![]).contains("New appointment"));
    }

    #[test]
    fn test_status_chip_and_value() {
        let agency = render(true, vec![sample()]);
        assert!(agency.contains("Marina Costa"));
        assert!(agency.contains("Confirmed"));
        assert!(agency.contains("R$ 850.00"));

        let viewer = render(false, vec![sample()]);
        assert!(viewer.contains("Marina Costa"));
        assert!(!viewer.contains("status-chip"));
    }

    #[test]
    fn test_empty_state() {
        assert!(render(false, vec![]).contains("No appointments for this date"));
    }
}
