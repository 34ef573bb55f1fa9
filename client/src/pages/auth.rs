//! Auth page with login, registration and password-reset tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only public route that writes the session token. Registration checks
//! run before any request; login deliberately has no client-side password
//! length check so accounts created under older rules can still sign in.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::AuthResponse;
use crate::state::auth::AuthState;

pub const PASSWORD_MIN_CHARS: usize = 6;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
pub const RESET_FAILED: &str = "Failed to send reset email. Please try again.";
pub const REGISTERED: &str = "Registration successful!";
pub const RESET_SENT: &str = "Password reset instructions sent to your email";

/// Tabs of the auth card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
    ForgotPassword,
}

impl AuthTab {
    pub const ALL: [AuthTab; 3] = [Self::Login, Self::Register, Self::ForgotPassword];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
            Self::ForgotPassword => "Forgot Password",
        }
    }

    /// Submit button text, idle and while a request is outstanding.
    #[must_use]
    pub fn submit_label(self, busy: bool) -> &'static str {
        match (self, busy) {
            (Self::Login, false) => "Login",
            (Self::Login, true) => "Logging in...",
            (Self::Register, false) => "Register",
            (Self::Register, true) => "Registering...",
            (Self::ForgotPassword, false) => "Reset Password",
            (Self::ForgotPassword, true) => "Sending...",
        }
    }

    /// Message shown when the request fails without a server message.
    #[must_use]
    pub fn failure_fallback(self) -> &'static str {
        match self {
            Self::Login => LOGIN_FAILED,
            Self::Register => REGISTER_FAILED,
            Self::ForgotPassword => RESET_FAILED,
        }
    }
}

/// Client-side checks for `tab`, run before any request.
///
/// # Errors
///
/// Returns the message to show. Only registration is checked.
pub fn validate(tab: AuthTab, password: &str, confirm_password: &str) -> Result<(), &'static str> {
    match tab {
        AuthTab::Register => validate_register(password, confirm_password),
        AuthTab::Login | AuthTab::ForgotPassword => Ok(()),
    }
}

/// Password length first, then confirmation.
///
/// # Errors
///
/// [`PASSWORD_TOO_SHORT`] or [`PASSWORDS_DIFFER`].
pub fn validate_register(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    if password.chars().count() < PASSWORD_MIN_CHARS {
        return Err(PASSWORD_TOO_SHORT);
    }
    if password != confirm_password {
        return Err(PASSWORDS_DIFFER);
    }
    Ok(())
}

/// Token from a successful login or registration.
///
/// # Errors
///
/// The tab's failure message when the response carries no usable token.
pub fn session_token(tab: AuthTab, resp: &AuthResponse) -> Result<&str, &'static str> {
    match resp.token.as_deref() {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(tab.failure_fallback()),
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let tab = RwSignal::new(AuthTab::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let switch_tab = move |next: AuthTab| {
        tab.set(next);
        error.set(None);
        success.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = tab.get_untracked();
        error.set(None);
        success.set(None);
        if let Err(message) = validate(current, &password.get_untracked(), &confirm_password.get_untracked()) {
            error.set(Some(message.to_owned()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let name_value = name.get_untracked().trim().to_owned();
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            leptos::task::spawn_local(async move {
                match current {
                    AuthTab::Login => match crate::net::api::login(&email_value, &password_value).await {
                        Ok(resp) => {
                            busy.set(false);
                            match session_token(current, &resp) {
                                Ok(token) => {
                                    auth.update(|a| a.sign_in(token));
                                    navigate("/projects", NavigateOptions::default());
                                }
                                Err(message) => error.set(Some(message.to_owned())),
                            }
                        }
                        Err(e) => {
                            error.set(Some(e.server_message_or(current.failure_fallback())));
                            busy.set(false);
                        }
                    },
                    AuthTab::Register => {
                        match crate::net::api::register(&name_value, &email_value, &password_value).await {
                            Ok(resp) => {
                                busy.set(false);
                                let token = match session_token(current, &resp) {
                                    Ok(token) => token,
                                    Err(message) => {
                                        error.set(Some(message.to_owned()));
                                        return;
                                    }
                                };
                                auth.update(|a| a.sign_in(token));
                                success.set(Some(REGISTERED.to_owned()));
                                gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
                                navigate("/projects", NavigateOptions::default());
                            }
                            Err(e) => {
                                error.set(Some(e.server_message_or(current.failure_fallback())));
                                busy.set(false);
                            }
                        }
                    }
                    AuthTab::ForgotPassword => match crate::net::api::forgot_password(&email_value).await {
                        Ok(resp) => {
                            success.set(Some(resp.message.unwrap_or_else(|| RESET_SENT.to_owned())));
                            busy.set(false);
                            gloo_timers::future::sleep(std::time::Duration::from_secs(3)).await;
                            if tab.get_untracked() == AuthTab::ForgotPassword {
                                switch_tab(AuthTab::Login);
                            }
                        }
                        Err(e) => {
                            error.set(Some(e.server_message_or(current.failure_fallback())));
                            busy.set(false);
                        }
                    },
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, auth, name, email);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__tabs">
                    {AuthTab::ALL
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="auth-card__tab"
                                    class:auth-card__tab--active=move || tab.get() == t
                                    type="button"
                                    on:click=move |_| switch_tab(t)
                                >
                                    {t.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="auth-card__success">{move || success.get().unwrap_or_default()}</p>
                </Show>

                <form class="auth-form" on:submit=on_submit>
                    <Show when=move || tab.get() == AuthTab::Register>
                        <label class="auth-form__label">
                            "Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| name.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-form__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || tab.get() != AuthTab::ForgotPassword>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                required
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=move || tab.get() == AuthTab::Register>
                        <label class="auth-form__label">
                            "Confirm Password"
                            <input
                                class="auth-form__input"
                                type="password"
                                required
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| confirm_password.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                        {move || tab.get().submit_label(busy.get())}
                    </button>
                </form>
            </div>
        </div>
    }
}
