//! Role flag shared through context.
//!
//! There is no real sign-in: the agency role is a switch the user flips, held
//! in memory for the session. Everything that creates, edits or deletes
//! appointments checks [`AccessState::can_manage`].

use dioxus::prelude::*;
use store::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccessState {
    pub user: Option<User>,
    pub is_agency: bool,
}

impl AccessState {
    /// Only the agency may create, edit or delete appointments.
    pub fn can_manage(&self) -> bool {
        self.is_agency
    }

    pub fn set_agency(&mut self, value: bool) {
        self.is_agency = value;
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.is_agency = false;
    }

    pub fn display_name(&self) -> &str {
        match &self.user {
            Some(user) => &user.name,
            None if self.is_agency => "Agency",
            None => "Guest",
        }
    }
}

pub fn use_access() -> Signal<AccessState> {
    use_context::<Signal<AccessState>>()
}

/// Wrap the app with this to make [`use_access`] available.
#[component]
pub fn AccessProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(AccessState::default()));

    rsx! {
        {children}
    }
}

/// "I am the agency" switch.
#[component]
pub fn AgencySwitch(#[props(default = "".to_string())] class: String) -> Element {
    let mut access = use_access();
    let checked = access().is_agency;

    rsx! {
        label {
            class: "agency-switch {class}",
            input {
                r#type: "checkbox",
                role: "switch",
                checked: checked,
                onchange: move |evt: FormEvent| {
                    let on = evt.checked();
                    tracing::info!(agency = on, "role switched");
                    access.write().set_agency(on);
                },
            }
            span { class: "agency-switch-track" }
            span { class: "agency-switch-label", "I am the agency" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::Role;

    #[test]
    fn test_toggle_gates_management() {
        let mut access = AccessState::default();
        assert!(!access.can_manage());
        access.set_agency(true);
        assert!(access.can_manage());
        access.set_agency(false);
        assert!(!access.can_manage());
    }

    #[test]
    fn test_sign_out_clears_user_and_flag() {
        let mut access = AccessState {
            user: Some(User {
                id: "u1".into(),
                name: "Central Imóveis".into(),
                email: "x@example.com".into(),
                role: Role::Agency,
                phone: None,
                avatar: None,
            }),
            is_agency: true,
        };
        assert_eq!(access.display_name(), "Central Imóveis");
        access.sign_out();
        assert_eq!(access, AccessState::default());
        assert_eq!(access.display_name(), "Guest");
    }
}
