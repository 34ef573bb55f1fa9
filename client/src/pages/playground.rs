//! Playground page: requirements form, generated plan canvas and room editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route keyed by project id. Loads the project over REST,
//! drives generation and saving through `state::playground`, and keeps a
//! project socket open for the lifetime of the page so room edits from other
//! sessions show up live.

use canvas::plan::{RoomPatch, RoomType};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::measurements::MeasurementsPanel;
use crate::components::plan_canvas::PlanCanvas;
use crate::components::room_editor::RoomEditor;
use crate::state::auth::AuthState;
use crate::state::playground::{CountField, FlagField, PlaygroundState, parse_int};
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog::{CONFIRM_LEAVE_UNSAVED, confirm};

/// How long the save confirmation stays up, in milliseconds.
#[cfg(feature = "hydrate")]
const SUCCESS_CLEAR_MS: u64 = 3000;

#[component]
pub fn PlaygroundPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let project_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    #[cfg(feature = "hydrate")]
    let socket = StoredValue::new(None::<crate::net::socket::ProjectSocket>);

    // Load (and reload on id change) once a session is available.
    let loaded_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let id = project_id.get();
        if id.is_empty() || !auth.get().signed_in() || loaded_for.get_untracked().as_deref() == Some(id.as_str()) {
            return;
        }
        loaded_for.set(Some(id.clone()));
        playground.set(PlaygroundState::default());

        #[cfg(feature = "hydrate")]
        {
            if let Some(previous) = socket.get_value() {
                previous.close();
            }
            socket.set_value(Some(crate::net::socket::spawn_project_socket(id.clone(), playground)));
        }

        load_project(auth, playground, id);
    });

    #[cfg(feature = "hydrate")]
    on_cleanup(move || {
        if let Some(handle) = socket.get_value() {
            handle.close();
        }
    });

    let leave = RwSignal::new(false);
    Effect::new(move || {
        if leave.get() {
            leave.set(false);
            navigate("/projects", NavigateOptions::default());
        }
    });
    let on_back = move |_| {
        if playground.with_untracked(PlaygroundState::should_confirm_leave) && !confirm(CONFIRM_LEAVE_UNSAVED) {
            return;
        }
        leave.set(true);
    };

    let on_generate = move |_| {
        let request = match playground.try_update(PlaygroundState::begin_generate) {
            Some(Ok(request)) => request,
            Some(Err(_)) | None => return,
        };
        generate_plan(auth, playground, project_id.get_untracked(), request);
    };

    let on_save = move |_| {
        if playground.with_untracked(|p| p.saving) {
            return;
        }
        save_project(auth, playground, project_id.get_untracked(), true);
    };

    let on_patch = Callback::new(move |patch: RoomPatch| {
        let Some(room) = playground.try_update(|p| p.patch_selected(&patch)).flatten() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        socket.with_value(|slot| {
            if let Some(handle) = slot {
                handle.emit_room_update(&room);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        drop(room);
    });

    let on_delete_room = Callback::new(move |()| {
        playground.update(|p| {
            p.delete_selected();
        });
    });

    let on_add_room = move |_| {
        let room = playground.try_update(|p| p.add_room(RoomType::Bedroom));
        #[cfg(feature = "hydrate")]
        socket.with_value(|slot| {
            if let (Some(room), Some(handle)) = (room, slot) {
                handle.emit_room_update(&room);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        drop(room);
    };

    let count_input = move |field: CountField| {
        move |ev: leptos::ev::Event| playground.update(|p| p.set_count(field, parse_int(&event_target_value(&ev))))
    };
    let count_value = move |field: CountField| {
        move || {
            playground.with(|p| match field {
                CountField::Bedrooms => p.requirements.bedrooms,
                CountField::Bathrooms => p.requirements.bathrooms,
            })
        }
    };

    view! {
        <Show
            when=move || !playground.with(|p| p.loading)
            fallback=move || view! { <div class="loading-spinner">"Loading playground..."</div> }
        >
            <div class="playground">
                <div class="playground__header">
                    <button class="btn playground__back" on:click=on_back>
                        "← Back to Projects"
                    </button>
                    <h1>{move || playground.with(|p| p.name.clone())}</h1>
                    <span class="playground__live" class:playground__live--on=move || playground.with(|p| p.live)>
                        {move || if playground.with(|p| p.live) { "Live" } else { "Offline" }}
                    </span>
                </div>

                {move || {
                    playground
                        .with(|p| {
                            p.error
                                .clone()
                                .map(|e| ("alert alert--error", e))
                                .or_else(|| p.success.clone().map(|s| ("alert alert--success", s)))
                        })
                        .map(|(class, text)| view! { <div class=class>{text}</div> })
                }}

                <div class="playground__content">
                    <div class="playground__parameters">
                        <section class="playground__section">
                            <h2>"Dimensions"</h2>
                            <label class="playground__field">
                                "Width (ft)"
                                <input
                                    type="number"
                                    min="20"
                                    max="200"
                                    prop:value=move || playground.with(|p| p.plot.width.to_string())
                                    on:input=move |ev| playground.update(|p| p.set_plot_width(parse_int(&event_target_value(&ev))))
                                />
                            </label>
                            <label class="playground__field">
                                "Length (ft)"
                                <input
                                    type="number"
                                    min="20"
                                    max="200"
                                    prop:value=move || playground.with(|p| p.plot.length.to_string())
                                    on:input=move |ev| playground.update(|p| p.set_plot_length(parse_int(&event_target_value(&ev))))
                                />
                            </label>
                        </section>

                        <section class="playground__section">
                            <h2>"Room Requirements"</h2>
                            <label class="playground__field">
                                "Bedrooms"
                                <input
                                    type="number"
                                    min="1"
                                    max="5"
                                    prop:value=move || count_value(CountField::Bedrooms)().to_string()
                                    on:input=count_input(CountField::Bedrooms)
                                />
                            </label>
                            <label class="playground__field">
                                "Bathrooms"
                                <input
                                    type="number"
                                    min="1"
                                    max="4"
                                    prop:value=move || count_value(CountField::Bathrooms)().to_string()
                                    on:input=count_input(CountField::Bathrooms)
                                />
                            </label>
                            <div class="playground__checkboxes">
                                {FlagField::ALL
                                    .into_iter()
                                    .map(|field| {
                                        view! {
                                            <label>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || playground.with(|p| field.get(&p.requirements))
                                                    on:change=move |ev| playground.update(|p| p.set_flag(field, event_target_checked(&ev)))
                                                />
                                                {field.label()}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>

                        <div class="playground__actions">
                            <button
                                class="btn btn--primary playground__generate"
                                disabled=move || playground.with(|p| p.generating)
                                on:click=on_generate
                            >
                                {move || if playground.with(|p| p.generating) { "Generating..." } else { "Generate Floor Plan" }}
                            </button>
                            <Show when=move || playground.with(|p| p.modified)>
                                <button
                                    class="btn playground__save"
                                    disabled=move || playground.with(|p| p.saving)
                                    on:click=on_save
                                >
                                    "Save Changes"
                                </button>
                            </Show>
                            <Show when=move || playground.with(|p| p.plan.is_some())>
                                <button class="btn playground__add-room" on:click=on_add_room>
                                    "Add Room"
                                </button>
                            </Show>
                        </div>

                        <RoomEditor on_patch=on_patch on_delete=on_delete_room/>
                        <MeasurementsPanel/>
                    </div>

                    <div class="playground__canvas">
                        <PlanCanvas/>
                        <Show when=move || playground.with(|p| p.generating)>
                            <div class="loading-overlay">
                                <div class="loading-spinner"></div>
                                <p>"Generating your floor plan..."</p>
                            </div>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

fn load_project(auth: RwSignal<AuthState>, playground: RwSignal<PlaygroundState>, project_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        match crate::net::api::get_project(token.as_deref(), &project_id).await {
            Ok(project) => playground.update(|p| p.load(project)),
            Err(e) => {
                leptos::logging::warn!("playground load failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                playground.update(PlaygroundState::load_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, project_id);
        playground.update(PlaygroundState::load_failed);
    }
}

/// Generate, then auto-save the new plan with the current form values.
fn generate_plan(
    auth: RwSignal<AuthState>,
    playground: RwSignal<PlaygroundState>,
    project_id: String,
    request: crate::net::types::GenerateRequest,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        match crate::net::api::generate_plan(token.as_deref(), &project_id, &request).await {
            Ok(plan) => {
                playground.update(|p| p.finish_generate(plan));
                let update = playground.with_untracked(PlaygroundState::update_payload);
                if let Err(e) = crate::net::api::update_project(token.as_deref(), &project_id, &update).await {
                    leptos::logging::warn!("auto-save after generate failed: {e}");
                    crate::util::auth::expire_session(auth, &e);
                    playground.update(PlaygroundState::auto_save_failed);
                }
            }
            Err(e) => {
                leptos::logging::warn!("plan generation failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                playground.update(PlaygroundState::generate_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, project_id, request);
        playground.update(PlaygroundState::generate_failed);
    }
}

fn save_project(auth: RwSignal<AuthState>, playground: RwSignal<PlaygroundState>, project_id: String, announce: bool) {
    playground.update(|p| {
        p.saving = true;
        p.error = None;
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = auth.get_untracked().token;
        let update = playground.with_untracked(PlaygroundState::update_payload);
        match crate::net::api::update_project(token.as_deref(), &project_id, &update).await {
            Ok(_) => {
                playground.update(|p| p.mark_saved(announce));
                gloo_timers::future::sleep(std::time::Duration::from_millis(SUCCESS_CLEAR_MS)).await;
                playground.update(|p| {
                    if p.success.as_deref() == Some(crate::state::playground::SAVED_MESSAGE) {
                        p.success = None;
                    }
                });
            }
            Err(e) => {
                leptos::logging::warn!("playground save failed: {e}");
                crate::util::auth::expire_session(auth, &e);
                playground.update(PlaygroundState::save_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, project_id, announce);
        playground.update(PlaygroundState::save_failed);
    }
}
