use dioxus::prelude::*;
use ui::{use_access, use_config, BottomNav, NavTab, Navbar, Snackbar};

use crate::Route;

fn tab_for(route: &Route) -> NavTab {
    match route {
        Route::Schedule {} => NavTab::Calendar,
        Route::NewAppointment {} => NavTab::New,
        Route::List {} => NavTab::List,
        Route::Profile {} => NavTab::Profile,
    }
}

fn route_for(tab: NavTab) -> Route {
    match tab {
        NavTab::Calendar => Route::Schedule {},
        NavTab::New => Route::NewAppointment {},
        NavTab::List => Route::List {},
        NavTab::Profile => Route::Profile {},
    }
}

/// Top bar, routed content, bottom tabs and the toast.
#[component]
pub fn Shell() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();
    let access = use_access();
    let config = use_config();

    let can_manage = access().can_manage();
    let active = tab_for(&route);

    // `/new` is agency-only; send everyone else back to the calendar.
    if active == NavTab::New && !can_manage {
        nav.replace(Route::Schedule {});
    }

    rsx! {
        div {
            class: "app-shell",
            Navbar {}
            main {
                class: "app-content",
                Outlet::<Route> {}
            }
            BottomNav {
                active: active,
                can_manage: can_manage,
                on_select: move |tab| {
                    nav.push(route_for(tab));
                },
            }
            Snackbar { hide_after_ms: config.ui.snackbar_hide_ms }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_and_routes_agree() {
        for tab in [NavTab::Calendar, NavTab::New, NavTab::List, NavTab::Profile] {
            assert_eq!(tab_for(&route_for(tab)), tab);
        }
    }
}
