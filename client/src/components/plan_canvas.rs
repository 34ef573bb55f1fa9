//! Bridge component between playground state and the `canvas` renderer.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns drawing and hit-testing; this host only redraws when
//! the playground signal changes and turns clicks into selections. The 2D
//! context is acquired per frame inside `render_to_canvas`, so nothing
//! browser-side outlives a redraw.

use leptos::prelude::*;

use crate::state::playground::PlaygroundState;

#[component]
pub fn PlanCanvas() -> impl IntoView {
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let canvas = canvas_ref.get();
        playground.with(|p| {
            if let Err(e) = canvas::render::render_to_canvas(canvas.as_ref(), &p.scene()) {
                leptos::logging::warn!("floor plan render failed: {e:?}");
            }
        });
    });

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let (x, y) = (f64::from(ev.offset_x()), f64::from(ev.offset_y()));
        playground.update(|p| p.select_at(x, y));
    };

    view! {
        <canvas class="floor-plan-canvas" node_ref=canvas_ref on:click=on_click></canvas>
    }
}
