use dioxus::prelude::*;

use crate::auth::AgencySwitch;
use crate::icons::{FaCalendarDays, FaList, FaPlus, FaUser};
use crate::Icon;

#[component]
pub fn Navbar(#[props(default = "Booking System".to_string())] title: String) -> Element {
    rsx! {
        header {
            class: "navbar",
            h1 { class: "navbar-title", "{title}" }
            AgencySwitch {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTab {
    Calendar,
    New,
    List,
    Profile,
}

impl NavTab {
    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Calendar => "Calendar",
            NavTab::New => "New",
            NavTab::List => "List",
            NavTab::Profile => "Profile",
        }
    }
}

/// Tabs shown in the bottom bar. "New" is only offered to the agency.
pub fn visible_tabs(can_manage: bool) -> Vec<NavTab> {
    [NavTab::Calendar, NavTab::New, NavTab::List, NavTab::Profile]
        .into_iter()
        .filter(|tab| can_manage || *tab != NavTab::New)
        .collect()
}

fn tab_icon(tab: NavTab) -> Element {
    match tab {
        NavTab::Calendar => rsx! { Icon { icon: FaCalendarDays, width: 18, height: 18 } },
        NavTab::New => rsx! { Icon { icon: FaPlus, width: 18, height: 18 } },
        NavTab::List => rsx! { Icon { icon: FaList, width: 18, height: 18 } },
        NavTab::Profile => rsx! { Icon { icon: FaUser, width: 18, height: 18 } },
    }
}

#[component]
pub fn BottomNav(active: NavTab, can_manage: bool, on_select: EventHandler<NavTab>) -> Element {
    rsx! {
        nav {
            class: "bottom-nav",
            for tab in visible_tabs(can_manage) {
                button {
                    key: "{tab.label()}",
                    class: if tab == active { "bottom-nav-tab active" } else { "bottom-nav-tab" },
                    onclick: move |_| on_select.call(tab),
                    {tab_icon(tab)}
                    span { "{tab.label()}" }
                }
            }
        }
    }
}
