use dioxus::prelude::*;
use store::{AppointmentDraft, AppointmentKind, AppointmentStatus};

use crate::icons::FaTrash;
use crate::views::ModalOverlay;
use crate::Icon;

/// Create/edit dialog. The parent should key it by appointment id so a fresh
/// draft resets the fields.
#[component]
pub fn AppointmentFormDialog(
    draft: AppointmentDraft,
    on_submit: EventHandler<AppointmentDraft>,
    on_delete: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let mut form = use_signal(move || draft);
    let mut error = use_signal(|| None::<String>);

    let current = form();
    let editing_id = current.initial.as_ref().map(|a| a.id.clone());

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = form();
        match draft.validate() {
            Ok(()) => {
                error.set(None);
                on_submit.call(draft);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "appointment-form",
                onsubmit: handle_submit,
                div {
                    class: "appointment-form-header",
                    h2 { "{current.title()}" }
                    if let Some(id) = editing_id {
                        button {
                            r#type: "button",
                            class: "icon-button danger",
                            title: "Delete appointment",
                            onclick: move |_| on_delete.call(id.clone()),
                            Icon { icon: FaTrash, width: 14, height: 14 }
                        }
                    }
                }

                label { r#for: "appointment-kind", "Type" }
                select {
                    id: "appointment-kind",
                    value: current.kind.as_str(),
                    onchange: move |evt| {
                        if let Ok(kind) = evt.value().parse::<AppointmentKind>() {
                            form.write().kind = kind;
                        }
                    },
                    for kind in AppointmentKind::ALL {
                        option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                    }
                }

                label { r#for: "appointment-date", "Date and time" }
                input {
                    id: "appointment-date",
                    r#type: "datetime-local",
                    value: current.date_input(),
                    onchange: move |evt| {
                        if let Err(e) = form.write().set_date_input(&evt.value()) {
                            error.set(Some(e.to_string()));
                        }
                    },
                }

                label { r#for: "appointment-tenant", "Client name" }
                input {
                    id: "appointment-tenant",
                    r#type: "text",
                    value: current.tenant.clone(),
                    oninput: move |evt| form.write().tenant = evt.value(),
                }

                label { r#for: "appointment-location", "Service address" }
                input {
                    id: "appointment-location",
                    r#type: "text",
                    value: current.location.clone(),
                    oninput: move |evt| form.write().location = evt.value(),
                }

                label { r#for: "appointment-description", "Service description" }
                textarea {
                    id: "appointment-description",
                    rows: 3,
                    value: current.description.clone(),
                    oninput: move |evt| form.write().description = evt.value(),
                }

                if current.shows_status() {
                    label { r#for: "appointment-status", "Status" }
                    select {
                        id: "appointment-status",
                        value: current.status.as_str(),
                        onchange: move |evt| {
                            if let Ok(status) = evt.value().parse::<AppointmentStatus>() {
                                form.write().status = status;
                            }
                        },
                        for status in AppointmentStatus::ALL {
                            option { key: "{status.as_str()}", value: status.as_str(), "{status.label()}" }
                        }
                    }
                }

                if current.shows_approved_value() {
                    label { r#for: "appointment-value", "Approved value" }
                    input {
                        id: "appointment-value",
                        r#type: "text",
                        placeholder: "0.00",
                        value: current.approved_value.clone(),
                        oninput: move |evt| form.write().approved_value = evt.value(),
                    }
                }

                if let Some(message) = error() {
                    p { class: "appointment-form-error", "{message}" }
                }

                div {
                    class: "appointment-form-actions",
                    button {
                        r#type: "button",
                        class: "outline-button",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "primary-button",
                        "{current.submit_label()}"
                    }
                }
            }
        }
    }
}
