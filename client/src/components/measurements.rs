//! Area summary for the current plan.

use leptos::prelude::*;

use crate::state::playground::PlaygroundState;
use crate::util::format::{sq_ft, type_area_row, used_area};

#[component]
pub fn MeasurementsPanel() -> impl IntoView {
    let playground = expect_context::<RwSignal<PlaygroundState>>();
    let measurements = Memo::new(move |_| playground.with(PlaygroundState::measurements));

    view! {
        {move || {
            measurements
                .get()
                .map(|m| {
                    let rows = m.by_type.iter().map(type_area_row).collect::<Vec<_>>();
                    view! {
                        <div class="measurements">
                            <h3>"Measurements"</h3>
                            <div class="measurements__item">
                                <span class="measurements__label">"Total Plot Area:"</span>
                                <span>{sq_ft(m.total_area)}</span>
                            </div>
                            <div class="measurements__item">
                                <span class="measurements__label">"Used Area:"</span>
                                <span>{used_area(&m)}</span>
                            </div>
                            <div class="measurements__item">
                                <span class="measurements__label">"Available Area:"</span>
                                <span>{sq_ft(m.available_area)}</span>
                            </div>
                            <div class="measurements__by-type">
                                <h4>"Area by Room Type"</h4>
                                {rows
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="measurements__type">
                                                <span class="measurements__label">{format!("{label}:")}</span>
                                                <span>{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
