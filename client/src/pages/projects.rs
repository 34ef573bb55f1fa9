//! Projects page listing the user's playgrounds.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route. Fetches the project list over REST once the session
//! is restored, filters and sorts it locally, and coordinates the
//! create->navigate and confirm->delete flows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::project_card::ProjectCard;
use crate::state::auth::AuthState;
use crate::state::projects::{ProjectsState, SortBy, validate_project_name};
use crate::util::auth::install_unauth_redirect;

pub const FETCH_FAILED: &str = "Failed to fetch playgrounds";
pub const CREATE_FAILED: &str = "Failed to create playground";
pub const DELETE_FAILED: &str = "Failed to delete playground";
pub const EMPTY_MESSAGE: &str = "No playgrounds found. Create your first playground to get started!";

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || !auth.get().signed_in() {
            return;
        }
        requested.set(true);
        fetch_projects(auth, projects);
    });

    let show_create = RwSignal::new(false);
    let new_name = RwSignal::new(String::new());

    let on_open_create = move |_| {
        new_name.set(String::new());
        show_create.set(true);
    };
    let on_cancel = Callback::new(move |()| show_create.set(false));

    let open_id = RwSignal::new(None::<String>);
    Effect::new(move || {
        if let Some(id) = open_id.get() {
            open_id.set(None);
            navigate(&format!("/playground/{id}"), NavigateOptions::default());
        }
    });
    let navigate_to_project = Callback::new(move |id: String| open_id.set(Some(id)));

    let on_delete = Callback::new(move |id: String| {
        if !crate::util::dialog::confirm(crate::util::dialog::CONFIRM_DELETE_PROJECT) {
            return;
        }
        delete_project(auth, projects, id);
    });

    view! {
        <div class="projects-page">
            <header class="projects-page__header">
                <h1>"My Playgrounds"</h1>
                <button class="btn btn--primary" on:click=on_open_create>
                    "Create New Playground"
                </button>
            </header>

            <div class="projects-page__controls">
                <input
                    class="projects-page__search"
                    type="search"
                    placeholder="Search playgrounds..."
                    prop:value=move || projects.get().search
                    on:input=move |ev| projects.update(|s| s.search = event_target_value(&ev))
                />
                <label class="projects-page__sort">
                    "Sort by:"
                    <select
                        prop:value=move || projects.get().sort_by.as_str()
                        on:change=move |ev| projects.update(|s| s.sort_by = SortBy::parse(&event_target_value(&ev)))
                    >
                        <option value=SortBy::LastModified.as_str()>"Last Modified"</option>
                        <option value=SortBy::Name.as_str()>"Name"</option>
                    </select>
                </label>
            </div>

            <Show when=move || projects.get().error.is_some()>
                <p class="projects-page__error">{move || projects.get().error.unwrap_or_default()}</p>
            </Show>

            <Show
                when=move || !projects.get().loading
                fallback=move || view! { <p class="projects-page__loading">"Loading playgrounds..."</p> }
            >
                {move || {
                    let visible = projects.get().visible();
                    if visible.is_empty() {
                        view! { <p class="projects-page__empty">{EMPTY_MESSAGE}</p> }.into_any()
                    } else {
                        view! {
                            <div class="projects-page__grid">
                                {visible
                                    .into_iter()
                                    .map(|project| {
                                        view! {
                                            <ProjectCard
                                                project=project
                                                on_open=navigate_to_project
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>

            <Show when=move || show_create.get()>
                <CreateProjectDialog
                    name=new_name
                    on_cancel=on_cancel
                    on_created=navigate_to_project
                />
            </Show>
        </div>
    }
}

/// Modal dialog for naming a new playground.
#[component]
fn CreateProjectDialog(name: RwSignal<String>, on_cancel: Callback<()>, on_created: Callback<String>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let projects = expect_context::<RwSignal<ProjectsState>>();
    let name_error = RwSignal::new(None::<&'static str>);

    let submit = Callback::new(move |()| {
        if projects.get_untracked().creating {
            return;
        }
        let valid = match validate_project_name(&name.get_untracked()) {
            Ok(valid) => valid,
            Err(message) => {
                name_error.set(Some(message));
                return;
            }
        };
        name_error.set(None);
        create_project(auth, projects, valid, on_created);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create New Playground"</h2>
                <label class="dialog__label">
                    "Playground Name"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="50"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || name_error.get().is_some()>
                    <p class="dialog__error">{move || name_error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || projects.get().creating
                        on:click=move |_| submit.run(())
                    >
                        {move || if projects.get().creating { "Creating..." } else { "Create & Open" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn fetch_projects(auth: RwSignal<AuthState>, projects: RwSignal<ProjectsState>) {
    projects.update(|s| {
        s.loading = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        match crate::net::api::list_projects(token.as_deref()).await {
            Ok(items) => projects.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(e) => {
                leptos::logging::warn!("project list failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                projects.update(|s| {
                    s.loading = false;
                    s.error = Some(FETCH_FAILED.to_owned());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
        projects.update(|s| s.loading = false);
    }
}

fn create_project(auth: RwSignal<AuthState>, projects: RwSignal<ProjectsState>, name: String, on_created: Callback<String>) {
    projects.update(|s| {
        s.creating = true;
        s.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        let body = crate::net::types::NewProject::named(name);
        match crate::net::api::create_project(token.as_deref(), &body).await {
            Ok(project) => {
                let id = project.id.clone();
                projects.update(|s| {
                    s.creating = false;
                    s.items.push(project);
                });
                on_created.run(id);
            }
            Err(e) => {
                leptos::logging::warn!("project create failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                projects.update(|s| {
                    s.creating = false;
                    s.error = Some(CREATE_FAILED.to_owned());
                });
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, name, on_created);
        projects.update(|s| s.creating = false);
    }
}

fn delete_project(auth: RwSignal<AuthState>, projects: RwSignal<ProjectsState>, project_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        match crate::net::api::delete_project(token.as_deref(), &project_id).await {
            Ok(_) => projects.update(|s| s.remove(&project_id)),
            Err(e) => {
                leptos::logging::warn!("project delete failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                projects.update(|s| s.error = Some(DELETE_FAILED.to_owned()));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, projects, project_id);
    }
}
