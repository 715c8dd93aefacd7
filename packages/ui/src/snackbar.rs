use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::sleep;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SnackbarState {
    pub current: Option<Toast>,
    /// Bumped on every `show` so a stale auto-hide timer leaves newer toasts alone.
    pub generation: u64,
}

impl SnackbarState {
    pub fn show(&mut self, severity: Severity, message: impl Into<String>) {
        self.current = Some(Toast {
            severity,
            message: message.into(),
        });
        self.generation += 1;
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Dismiss only if nothing newer was shown since `generation`.
    pub fn expire(&mut self, generation: u64) {
        if self.generation == generation {
            self.dismiss();
        }
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

pub fn use_snackbar() -> Signal<SnackbarState> {
    use_context::<Signal<SnackbarState>>()
}

pub fn notify(snackbar: &mut Signal<SnackbarState>, severity: Severity, message: impl Into<String>) {
    snackbar.write().show(severity, message);
}

#[component]
pub fn SnackbarProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SnackbarState::default()));

    rsx! {
        {children}
    }
}

/// Bottom-centred toast that hides itself after `hide_after_ms`.
#[component]
pub fn Snackbar(#[props(default = 6000)] hide_after_ms: u64) -> Element {
    let mut snackbar = use_snackbar();

    use_effect(move || {
        let state = snackbar();
        if !state.is_open() {
            return;
        }
        let generation = state.generation;
        spawn(async move {
            sleep(Duration::from_millis(hide_after_ms)).await;
            snackbar.write().expire(generation);
        });
    });

    let Some(toast) = snackbar().current else {
        return rsx! {};
    };

    rsx! {
        div {
            class: match toast.severity {
                Severity::Success => "snackbar success",
                Severity::Error => "snackbar error",
            },
            role: "alert",
            span { class: "snackbar-message", "{toast.message}" }
            button {
                class: "snackbar-close",
                title: "Close",
                onclick: move |_| snackbar.write().dismiss(),
                "\u{00D7}"
            }
        }
    }
}
