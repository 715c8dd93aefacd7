use dioxus::prelude::*;
use ui::views::{AgendaListView, ProfileView, ScheduleView};

#[component]
pub fn Schedule() -> Element {
    rsx! { ScheduleView {} }
}

/// Same screen as `/`, with the create dialog already open.
#[component]
pub fn NewAppointment() -> Element {
    rsx! { ScheduleView { open_new: true } }
}

#[component]
pub fn List() -> Element {
    rsx! { AgendaListView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}
