//! Side panel editing the selected room.
//!
//! DESIGN
//! ======
//! Every input produces a single-field [`RoomPatch`]; the page applies it to
//! the plan and decides what else happens (socket broadcast, modified flag).

#[cfg(test)]
#[path = "room_editor_test.rs"]
mod room_editor_test;

use canvas::geometry::{area, perimeter};
use canvas::plan::{RoomPatch, RoomType};
use leptos::prelude::*;

use crate::state::playground::{PlaygroundState, parse_int};
use crate::util::format::{area_line, perimeter_line};

/// Editable room fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomField {
    Name,
    Type,
    Width,
    Length,
    X,
    Y,
}

/// Build the patch for one input event. Numeric fields take the leading
/// integer of `raw`, or `0`.
#[must_use]
pub fn patch_for(field: RoomField, raw: &str) -> RoomPatch {
    #[allow(clippy::cast_precision_loss)]
    let number = || parse_int(raw) as f64;
    match field {
        RoomField::Name => RoomPatch { name: Some(raw.to_owned()), ..RoomPatch::default() },
        RoomField::Type => RoomPatch { room_type: Some(RoomType::from(raw)), ..RoomPatch::default() },
        RoomField::Width => RoomPatch { width: Some(number()), ..RoomPatch::default() },
        RoomField::Length => RoomPatch { length: Some(number()), ..RoomPatch::default() },
        RoomField::X => RoomPatch { x: Some(number()), ..RoomPatch::default() },
        RoomField::Y => RoomPatch { y: Some(number()), ..RoomPatch::default() },
    }
}

#[component]
pub fn RoomEditor(on_patch: Callback<RoomPatch>, on_delete: Callback<()>) -> impl IntoView {
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let room = Memo::new(move |_| playground.with(|p| p.selected_room().cloned()));

    let input = move |field: RoomField| move |ev: leptos::ev::Event| on_patch.run(patch_for(field, &event_target_value(&ev)));

    let number_field = move |label: &'static str, field: RoomField, value: fn(&canvas::plan::Room) -> f64| {
        view! {
            <label class="room-editor__field">
                {label}
                <input
                    class="room-editor__input"
                    type="number"
                    prop:value=move || room.get().map(|r| value(&r).to_string()).unwrap_or_default()
                    on:input=input(field)
                />
            </label>
        }
    };

    view! {
        <Show when=move || room.get().is_some()>
            <div class="room-editor">
                <div class="room-editor__header">
                    <h3>"Edit Room"</h3>
                    <button
                        class="room-editor__delete"
                        title="Delete Room"
                        aria-label="Delete Room"
                        on:click=move |_| on_delete.run(())
                    >
                        "×"
                    </button>
                </div>

                <label class="room-editor__field">
                    "Name"
                    <input
                        class="room-editor__input"
                        type="text"
                        prop:value=move || room.get().map(|r| r.name).unwrap_or_default()
                        on:input=input(RoomField::Name)
                    />
                </label>

                <label class="room-editor__field">
                    "Type"
                    <select
                        class="room-editor__input"
                        prop:value=move || room.get().map(|r| r.room_type.as_str().to_owned()).unwrap_or_default()
                        on:change=input(RoomField::Type)
                    >
                        {RoomType::KNOWN
                            .iter()
                            .map(|t| view! { <option value=t.as_str().to_owned()>{t.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <h4>"Dimensions"</h4>
                <div class="room-editor__row">
                    {number_field("Width (ft)", RoomField::Width, |r| r.dimensions.width)}
                    {number_field("Length (ft)", RoomField::Length, |r| r.dimensions.length)}
                </div>

                <h4>"Position"</h4>
                <div class="room-editor__row">
                    {number_field("X (ft)", RoomField::X, |r| r.position.x)}
                    {number_field("Y (ft)", RoomField::Y, |r| r.position.y)}
                </div>

                <div class="room-editor__info">
                    <p>{move || room.get().map(|r| area_line(area(r.dimensions))).unwrap_or_default()}</p>
                    <p>{move || room.get().map(|r| perimeter_line(perimeter(r.dimensions))).unwrap_or_default()}</p>
                </div>
            </div>
        </Show>
    }
}
