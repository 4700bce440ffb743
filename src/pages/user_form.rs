//! Shared user form: fields, select options, and validation.
//!
//! DESIGN
//! ======
//! The create and edit routes present the same profile fields; one
//! parameterized implementation keeps them from drifting apart. Validation
//! resolves to a single aggregated notice (the first failing rule) and
//! always runs before any request is built.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;

use crate::net::types::UserDraft;

pub(crate) const ROLE_OPTIONS: &[&str] = &["Admin", "User"];
pub(crate) const DIVISION_OPTIONS: &[&str] = &["Division 1", "Division 2"];
pub(crate) const ORGANIZATION_OPTIONS: &[&str] = &["Org A", "Org B"];
pub(crate) const LOB_OPTIONS: &[&str] = &["Lob 1", "Lob 2"];

fn is_valid_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'))
}

fn phone_digits(phone: &str) -> usize {
    phone.chars().filter(char::is_ascii_digit).count()
}

/// First failing rule for the shared profile fields, or `Ok` if all pass.
pub(crate) fn validate_draft(draft: &UserDraft) -> Result<(), &'static str> {
    if draft.username.trim().is_empty() {
        return Err("Username is required.");
    }
    if !is_valid_email(draft.email.trim()) {
        return Err("Invalid email address.");
    }
    if !(10..=15).contains(&phone_digits(&draft.phone_number)) {
        return Err("Phone number must be 10 to 15 digits.");
    }
    if draft.company.trim().is_empty() {
        return Err("Company name is required.");
    }
    if draft.zone.trim().is_empty() {
        return Err("Zone name is required.");
    }
    if draft.branch.trim().is_empty() {
        return Err("Branch name is required.");
    }
    if draft.division.is_empty() {
        return Err("Division name is required.");
    }
    if draft.role.is_empty() {
        return Err("User type is required.");
    }
    if draft.organization.is_empty() {
        return Err("Organization is required.");
    }
    if draft.lob.is_empty() {
        return Err("Lob is required.");
    }
    Ok(())
}

/// Registration additionally requires an initial password.
pub(crate) fn validate_new_user(draft: &UserDraft, password: &str) -> Result<(), &'static str> {
    if draft.username.trim().is_empty() {
        return Err("Username is required.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    validate_draft(draft)
}

/// Profile fields bound to a shared draft signal. The password input only
/// renders when the caller passes a signal for it (create flow).
#[component]
pub(crate) fn UserFormFields(
    draft: RwSignal<UserDraft>,
    #[prop(into, optional)] password: Option<RwSignal<String>>,
) -> impl IntoView {
    view! {
        <div class="user-form__grid">
            <label class="user-form__label">
                "Username"
                <input
                    class="user-form__input"
                    type="text"
                    prop:value=move || draft.get().username
                    on:input=move |ev| draft.update(|d| d.username = event_target_value(&ev))
                />
            </label>
            {password.map(|password| {
                view! {
                    <label class="user-form__label">
                        "Password"
                        <input
                            class="user-form__input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                }
            })}
            <label class="user-form__label">
                "Email ID"
                <input
                    class="user-form__input"
                    type="email"
                    prop:value=move || draft.get().email
                    on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                />
            </label>
            <label class="user-form__label">
                "Phone Number"
                <input
                    class="user-form__input"
                    type="tel"
                    prop:value=move || draft.get().phone_number
                    on:input=move |ev| draft.update(|d| d.phone_number = event_target_value(&ev))
                />
            </label>
            <label class="user-form__label">
                "Company Name"
                <input
                    class="user-form__input"
                    type="text"
                    prop:value=move || draft.get().company
                    on:input=move |ev| draft.update(|d| d.company = event_target_value(&ev))
                />
            </label>
            <label class="user-form__label">
                "Zone Name"
                <input
                    class="user-form__input"
                    type="text"
                    prop:value=move || draft.get().zone
                    on:input=move |ev| draft.update(|d| d.zone = event_target_value(&ev))
                />
            </label>
            <label class="user-form__label">
                "Branch Name"
                <input
                    class="user-form__input"
                    type="text"
                    prop:value=move || draft.get().branch
                    on:input=move |ev| draft.update(|d| d.branch = event_target_value(&ev))
                />
            </label>
            <label class="user-form__label">
                "Division Name"
                <select
                    class="user-form__select"
                    prop:value=move || draft.get().division
                    on:change=move |ev| draft.update(|d| d.division = event_target_value(&ev))
                >
                    <option value="" disabled>"Select Division Name"</option>
                    {DIVISION_OPTIONS
                        .iter()
                        .map(|o| view! { <option value=*o>{*o}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="user-form__label">
                "User Type"
                <select
                    class="user-form__select"
                    prop:value=move || draft.get().role
                    on:change=move |ev| draft.update(|d| d.role = event_target_value(&ev))
                >
                    <option value="" disabled>"Select User Type"</option>
                    {ROLE_OPTIONS
                        .iter()
                        .map(|o| view! { <option value=*o>{*o}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="user-form__label">
                "Organization"
                <select
                    class="user-form__select"
                    prop:value=move || draft.get().organization
                    on:change=move |ev| draft.update(|d| d.organization = event_target_value(&ev))
                >
                    <option value="" disabled>"Select Organization"</option>
                    {ORGANIZATION_OPTIONS
                        .iter()
                        .map(|o| view! { <option value=*o>{*o}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="user-form__label">
                "Lob"
                <select
                    class="user-form__select"
                    prop:value=move || draft.get().lob
                    on:change=move |ev| draft.update(|d| d.lob = event_target_value(&ev))
                >
                    <option value="" disabled>"Select Lob"</option>
                    {LOB_OPTIONS
                        .iter()
                        .map(|o| view! { <option value=*o>{*o}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="user-form__label user-form__label--inline">
                "Is Score Report User"
                <input
                    class="user-form__checkbox"
                    type="checkbox"
                    prop:checked=move || draft.get().is_score_report_user
                    on:change=move |ev| {
                        draft.update(|d| d.is_score_report_user = event_target_checked(&ev));
                    }
                />
            </label>
        </div>
    }
}
