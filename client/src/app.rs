//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{auth::AuthPage, home::HomePage, playground::PlaygroundPage, projects::ProjectsPage};
use crate::state::{auth::AuthState, playground::PlaygroundState, projects::ProjectsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let projects = RwSignal::new(ProjectsState::default());
    let playground = RwSignal::new(PlaygroundState::default());

    provide_context(auth);
    provide_context(projects);
    provide_context(playground);

    // The token only exists in browser storage, so the session is restored
    // after hydration. Route guards wait for `restored`.
    Effect::new(move || {
        if !auth.get_untracked().restored {
            auth.set(AuthState::restore());
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/floorplan.css"/>
        <Title text="Sooru Prototype"/>

        <Router>
            <div class="app">
                <Navbar/>
                <main class="main-content">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("auth") view=AuthPage/>
                        <Route path=StaticSegment("projects") view=ProjectsPage/>
                        <Route path=(StaticSegment("playground"), ParamSegment("id")) view=PlaygroundPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
