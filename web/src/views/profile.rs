//! Profile page: edit the account's profile fields, change the password, and
//! the account-deletion control behind a confirmation dialog.

use api::{ChangePasswordRequest, UpdateProfileRequest, User};
use dioxus::prelude::*;
use ui::{refresh_user, sign_out, use_auth, ErrorBanner, ModalOverlay};

use crate::guards::RequireAuth;
use crate::Route;

#[component]
pub fn Profile() -> Element {
    rsx! {
        RequireAuth {
            ProfilePage {}
        }
    }
}

#[component]
fn ProfilePage() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut form = use_signal(|| seed_form(auth.peek().user.as_ref()));
    let mut skill_input = use_signal(String::new);
    let mut grad_year = use_signal(|| {
        auth.peek()
            .user
            .as_ref()
            .and_then(|user| user.graduation_year)
            .map(|year| year.to_string())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);
    let mut saved = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut show_delete = use_signal(|| false);

    let mut add_skill = move || {
        let entry = skill_input().trim().to_string();
        if !entry.is_empty() && !form().skills.contains(&entry) {
            form.write().skills.push(entry);
            skill_input.set(String::new());
        }
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(user_id) = auth.peek().user_id() else {
            return;
        };
        let mut request = form();
        request.graduation_year = grad_year().trim().parse().ok();
        spawn(async move {
            saving.set(true);
            saved.set(false);
            error.set(None);
            match api::users::update(user_id, &request).await {
                Ok(updated) => {
                    refresh_user(auth, updated);
                    saved.set(true);
                }
                Err(err) => {
                    tracing::error!("failed to update profile: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let handle_delete = move |_| {
        let Some(user_id) = auth.peek().user_id() else {
            return;
        };
        spawn(async move {
            match api::users::delete(user_id).await {
                Ok(()) => {
                    sign_out(auth).await;
                    nav.push(Route::Home {});
                }
                Err(err) => {
                    tracing::error!("failed to delete account: {err}");
                    show_delete.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    let username = auth()
        .user
        .map(|user| user.username)
        .unwrap_or_default();

    rsx! {
        div {
            class: "page profile-page",
            div {
                class: "page-header",
                div {
                    h1 { "Your profile" }
                    p { "Signed in as @{username}" }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if saved() {
                p { class: "success-banner", "Profile saved" }
            }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "First name" }
                        input {
                            r#type: "text",
                            value: form().first_name,
                            oninput: move |evt| form.write().first_name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Last name" }
                        input {
                            r#type: "text",
                            value: form().last_name,
                            oninput: move |evt| form.write().last_name = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Bio" }
                    textarea {
                        rows: 3,
                        placeholder: "A few lines about yourself",
                        value: form().bio,
                        oninput: move |evt| form.write().bio = evt.value(),
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "College" }
                        input {
                            r#type: "text",
                            value: form().college,
                            oninput: move |evt| form.write().college = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Major" }
                        input {
                            r#type: "text",
                            value: form().major,
                            oninput: move |evt| form.write().major = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Graduation year" }
                        input {
                            r#type: "number",
                            min: 2000,
                            max: 2100,
                            value: grad_year(),
                            oninput: move |evt| grad_year.set(evt.value()),
                        }
                    }
                }
                div {
                    class: "form-field",
                    label { "Skills" }
                    div {
                        class: "chip-input",
                        input {
                            r#type: "text",
                            placeholder: "Add a skill",
                            value: skill_input(),
                            oninput: move |evt| skill_input.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter {
                                    evt.prevent_default();
                                    add_skill();
                                }
                            },
                        }
                        button {
                            class: "secondary",
                            r#type: "button",
                            onclick: move |_| add_skill(),
                            "Add"
                        }
                    }
                    div {
                        class: "chip-row",
                        for skill in form().skills {
                            span {
                                key: "{skill}",
                                class: "chip removable",
                                onclick: {
                                    let skill = skill.clone();
                                    move |_| form.write().skills.retain(|s| s != &skill)
                                },
                                "{skill} ×"
                            }
                        }
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "GitHub URL" }
                        input {
                            r#type: "url",
                            value: form().github_url,
                            oninput: move |evt| form.write().github_url = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "LinkedIn URL" }
                        input {
                            r#type: "url",
                            value: form().linkedin_url,
                            oninput: move |evt| form.write().linkedin_url = evt.value(),
                        }
                    }
                }
                button {
                    class: "primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save profile" }
                }
            }

            ChangePasswordForm {}

            section {
                class: "danger-zone",
                h2 { "Danger zone" }
                p { class: "muted", "Deleting your account removes your profile, posts and messages." }
                button {
                    class: "secondary danger",
                    onclick: move |_| show_delete.set(true),
                    "Delete account"
                }
            }

            if show_delete() {
                ModalOverlay {
                    on_close: move |_| show_delete.set(false),
                    div {
                        class: "dialog-body",
                        h2 { "Delete your account?" }
                        p { "This cannot be undone." }
                        div {
                            class: "form-actions",
                            button {
                                class: "primary danger",
                                onclick: handle_delete,
                                "Yes, delete everything"
                            }
                            button {
                                class: "secondary",
                                onclick: move |_| show_delete.set(false),
                                "Keep my account"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ChangePasswordForm() -> Element {
    let mut current = use_signal(String::new);
    let mut next = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut done = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_change = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            done.set(false);
            if next().len() < 8 {
                error.set(Some("New password must be at least 8 characters".to_string()));
                return;
            }
            if next() != confirm() {
                error.set(Some("Passwords do not match".to_string()));
                return;
            }
            busy.set(true);
            let request = ChangePasswordRequest {
                current_password: current(),
                new_password: next(),
            };
            match api::auth::change_password(&request).await {
                Ok(()) => {
                    current.set(String::new());
                    next.set(String::new());
                    confirm.set(String::new());
                    done.set(true);
                }
                Err(err) => {
                    tracing::error!("failed to change password: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            busy.set(false);
        });
    };

    rsx! {
        section {
            class: "password-section",
            h2 { "Change password" }

            if let Some(message) = error() {
                ErrorBanner { message }
            }
            if done() {
                p { class: "success-banner", "Password changed" }
            }

            form {
                class: "profile-form",
                onsubmit: handle_change,
                div {
                    class: "form-field",
                    label { "Current password" }
                    input {
                        r#type: "password",
                        value: current(),
                        oninput: move |evt| current.set(evt.value()),
                    }
                }
                div {
                    class: "form-row",
                    div {
                        class: "form-field",
                        label { "New password" }
                        input {
                            r#type: "password",
                            value: next(),
                            oninput: move |evt| next.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Confirm new password" }
                        input {
                            r#type: "password",
                            value: confirm(),
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                }
                button {
                    class: "secondary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Updating..." } else { "Update password" }
                }
            }
        }
    }
}

/// Build the edit form from the session's user snapshot. Optional wire fields
/// become empty strings; the backend reads empty as cleared.
fn seed_form(user: Option<&User>) -> UpdateProfileRequest {
    let Some(user) = user else {
        return UpdateProfileRequest::default();
    };
    UpdateProfileRequest {
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        bio: user.bio.clone().unwrap_or_default(),
        college: user.college.clone().unwrap_or_default(),
        major: user.major.clone().unwrap_or_default(),
        graduation_year: user.graduation_year,
        skills: user.skills.clone(),
        github_url: user.github_url.clone().unwrap_or_default(),
        linkedin_url: user.linkedin_url.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_form_copies_profile_fields() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            email: None,
            first_name: "Alice".to_string(),
            last_name: "Nguyen".to_string(),
            bio: Some("systems nerd".to_string()),
            college: None,
            major: Some("CS".to_string()),
            graduation_year: Some(2027),
            skills: vec!["Rust".to_string()],
            github_url: None,
            linkedin_url: None,
            avatar_url: None,
            created_at: None,
        };
        let form = seed_form(Some(&user));
        assert_eq!(form.first_name, "Alice");
        assert_eq!(form.bio, "systems nerd");
        assert_eq!(form.college, "");
        assert_eq!(form.graduation_year, Some(2027));
        assert_eq!(form.skills, vec!["Rust"]);
    }

    #[test]
    fn seed_form_without_user_is_empty() {
        assert_eq!(seed_form(None), UpdateProfileRequest::default());
    }
}
