use dioxus::prelude::*;

use store::BookingConfig;
use ui::{AccessProvider, BookingProvider, SnackbarProvider};
use views::{List, NewAppointment, Profile, Schedule, Shell};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Schedule {},
        #[route("/new")]
        NewAppointment {},
        #[route("/list")]
        List {},
        #[route("/profile")]
        Profile {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const BOOKING_TOML: &str = include_str!("../booking.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> BookingConfig {
    match BookingConfig::from_toml(BOOKING_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {}", BookingConfig::filename(), e);
            BookingConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    if config.is_offline() {
        tracing::info!("No backend configured, using demo data");
    } else {
        tracing::info!("Using backend at {}", config.backend.url);
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::UI_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SnackbarProvider {
            AccessProvider {
                BookingProvider {
                    config: config,
                    Router::<Route> {}
                }
            }
        }
    }
}
