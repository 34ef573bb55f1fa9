//! Card for one playground on the projects page.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::state::projects::display_date;
use crate::util::format::plot_size;

#[component]
pub fn ProjectCard(project: Project, on_open: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let id = project.id.clone();
    let delete_id = project.id.clone();
    let size = plot_size(project.dimensions);

    view! {
        <div class="project-card">
            <div class="project-card__header">
                <h3 class="project-card__name">{project.name}</h3>
                <button
                    class="project-card__delete"
                    title="Delete playground"
                    aria-label="Delete playground"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_delete.run(delete_id.clone());
                    }
                >
                    "×"
                </button>
            </div>
            <p class="project-card__meta">"Created: " {display_date(project.created_at.as_deref())}</p>
            <p class="project-card__meta">"Last Modified: " {display_date(project.last_modified.as_deref())}</p>
            {size.map(|s| view! { <p class="project-card__meta">{s}</p> })}
            <button class="btn btn--primary project-card__open" on:click=move |_| on_open.run(id.clone())>
                "Open Playground"
            </button>
        </div>
    }
}
