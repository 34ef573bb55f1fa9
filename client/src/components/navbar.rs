//! Top navigation bar.
//!
//! Links depend on the session: signed-in users get their playgrounds and a
//! logout button, everyone else gets the demo and the auth entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let logged_out = RwSignal::new(false);
    Effect::new(move || {
        if logged_out.get() {
            logged_out.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        auth.update(AuthState::sign_out);
        logged_out.set(true);
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Sooru"
                <span class="navbar__brand-accent">" Prototype"</span>
            </a>
            <span class="navbar__spacer"></span>
            <Show
                when=move || auth.get().signed_in()
                fallback=move || {
                    view! {
                        <a class="navbar__link" href="/playground/demo">"Try Demo"</a>
                        <a class="navbar__link" href="/auth">"Login"</a>
                        <a class="btn btn--primary navbar__cta" href="/auth">"Get Started"</a>
                    }
                }
            >
                <a class="navbar__link" href="/projects">"My Playgrounds"</a>
                <button class="btn navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
