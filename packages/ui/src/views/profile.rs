use dioxus::prelude::*;
use store::User;

use crate::auth::{use_access, AgencySwitch};
use crate::schedule::{use_config, use_schedule};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
fn PeopleList(title: &'static str, people: Vec<User>) -> Element {
    rsx! {
        section {
            class: "profile-section",
            h3 { "{title}" }
            if people.is_empty() {
                p { class: "profile-muted", "None registered" }
            }
            ul {
                for person in people {
                    li {
                        key: "{person.id}",
                        span { class: "profile-person-name", "{person.name}" }
                        span { class: "profile-muted", " {person.email}" }
                    }
                }
            }
        }
    }
}

/// Role switch, data source and the people appointments are attached to.
#[component]
pub fn ProfileView() -> Element {
    let mut access = use_access();
    let schedule = use_schedule();
    let config = use_config();

    let state = access();
    let snapshot = schedule().snapshot;
    let source = if config.is_offline() {
        "Demo data (no backend configured)".to_string()
    } else {
        config.backend.url.clone()
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "profile-view",
            section {
                class: "profile-section",
                h2 { "{state.display_name()}" }
                p {
                    class: "profile-muted",
                    if state.can_manage() { "Agency: can create, edit and delete appointments" } else { "Read-only access" }
                }
                AgencySwitch {}
            }
            section {
                class: "profile-section",
                h3 { "Data source" }
                p { "{source}" }
            }
            PeopleList { title: "Providers", people: snapshot.providers }
            PeopleList { title: "Clients", people: snapshot.clients }
            button {
                class: "outline-button",
                onclick: move |_| {
                    tracing::info!("signed out");
                    access.write().sign_out();
                },
                "Sign out"
            }
        }
    }
}
