use dioxus::prelude::*;

use crate::app::pages::Route;
use crate::domain::models::UserRole;
use crate::shared::hooks::{use_session, use_toasts};
use crate::shared::logging::log_session_event;
use crate::shared::utils::validation::{Field, FieldError, RegistrationForm};

const CITIES: &[&str] = &["Casablanca", "Rabat", "Marrakech", "Tanger", "Fès", "Agadir"];

/// Sign-up form; errors show inline once the form has been submitted
#[component]
pub fn RegisterPage() -> Element {
    let navigator = use_navigator();
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut form = use_signal(RegistrationForm::default);
    let mut role = use_signal(|| UserRole::Client);
    let mut city = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    // Re-validated on every edit after the first submit
    let errors: Vec<FieldError> = if submitted() { form.read().validate() } else { Vec::new() };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitted.set(true);
        let chosen_city = Some(city()).filter(|c| !c.is_empty());
        match form.read().register(role(), chosen_city) {
            Ok(auth) => {
                log_session_event("register", Some(&auth.user.id));
                let greeting = format!("Bienvenue, {} !", auth.user.first_name);
                session.login(auth);
                toasts.success(greeting);
                navigator.push(Route::Home {});
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "Registration form rejected");
            }
        }
    };

    rsx! {
        div { class: "p-register",
            h1 { class: "p-register__title", "Créer un compte" }
            form { class: "c-form", novalidate: true, onsubmit: on_submit,
                div { class: "c-form__roles", role: "radiogroup",
                    for (value, label) in [(UserRole::Client, "Je cherche un service"), (UserRole::Professional, "Je propose mes services")] {
                        button {
                            key: "{label}",
                            r#type: "button",
                            class: if role() == value { "c-chip c-chip--active" } else { "c-chip" },
                            aria_checked: "{role() == value}",
                            onclick: move |_| role.set(value),
                            "{label}"
                        }
                    }
                }
                TextField {
                    label: "Prénom",
                    name: Field::FirstName.as_str(),
                    value: form.read().first_name.clone(),
                    error: RegistrationForm::error_for(&errors, Field::FirstName),
                    oninput: move |v| form.write().first_name = v,
                }
                TextField {
                    label: "Nom",
                    name: Field::LastName.as_str(),
                    value: form.read().last_name.clone(),
                    error: RegistrationForm::error_for(&errors, Field::LastName),
                    oninput: move |v| form.write().last_name = v,
                }
                TextField {
                    label: "E-mail",
                    name: Field::Email.as_str(),
                    input_type: "email",
                    value: form.read().email.clone(),
                    error: RegistrationForm::error_for(&errors, Field::Email),
                    oninput: move |v| form.write().email = v,
                }
                TextField {
                    label: "Téléphone",
                    name: Field::Phone.as_str(),
                    input_type: "tel",
                    placeholder: "06 12 34 56 78",
                    value: form.read().phone.clone(),
                    error: RegistrationForm::error_for(&errors, Field::Phone),
                    oninput: move |v| form.write().phone = v,
                }
                label { class: "c-form__field",
                    span { class: "c-form__label", "Ville" }
                    select {
                        class: "c-form__input",
                        value: "{city}",
                        onchange: move |evt| city.set(evt.value()),
                        option { value: "", "Choisir une ville" }
                        for name in CITIES {
                            option { key: "{name}", value: "{name}", "{name}" }
                        }
                    }
                }
                TextField {
                    label: "Mot de passe",
                    name: Field::Password.as_str(),
                    input_type: "password",
                    value: form.read().password.clone(),
                    error: RegistrationForm::error_for(&errors, Field::Password),
                    oninput: move |v| form.write().password = v,
                }
                TextField {
                    label: "Confirmer le mot de passe",
                    name: Field::ConfirmPassword.as_str(),
                    input_type: "password",
                    value: form.read().confirm_password.clone(),
                    error: RegistrationForm::error_for(&errors, Field::ConfirmPassword),
                    oninput: move |v| form.write().confirm_password = v,
                }
                button { class: "c-button c-button--primary c-form__submit", r#type: "submit",
                    "Créer mon compte"
                }
            }
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    name: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] placeholder: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    let error_id = format!("{}-error", name);
    let invalid_class = if error.is_some() { "c-form__input--invalid" } else { "" };

    rsx! {
        label { class: "c-form__field",
            span { class: "c-form__label", "{label}" }
            input {
                class: "c-form__input {invalid_class}",
                name,
                r#type: input_type,
                placeholder,
                value: "{value}",
                aria_invalid: "{error.is_some()}",
                aria_describedby: "{error_id}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                span { id: "{error_id}", class: "c-form__error", role: "alert", "{message}" }
            }
        }
    }
}
