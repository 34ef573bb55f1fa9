//! Editor state for one open playground.
//!
//! DESIGN
//! ======
//! All edits go through methods here so the page stays a thin view: the plan
//! is only ever replaced with the result of an immutable `canvas::plan`
//! update, every user edit flips `modified`, and validation runs before the
//! page is handed a request to send. Remote `room-update` notifications are
//! applied as they arrive; they are not merged with local edits.

#[cfg(test)]
#[path = "playground_test.rs"]
mod playground_test;

use canvas::geometry::Measurements;
use canvas::hit::pick;
use canvas::plan::{Dimensions, FloorPlan, Plot, Position, Room, RoomId, RoomPatch, RoomType};
use canvas::render::Scene;
use serde_json::Value;

use crate::net::types::{GenerateRequest, Project, ProjectUpdate, Requirements};

/// Smallest accepted plot side, in feet.
pub const MIN_PLOT_FT: f64 = 20.0;
/// Largest accepted plot side, in feet.
pub const MAX_PLOT_FT: f64 = 200.0;

pub const MIN_DIMENSIONS_MESSAGE: &str = "Minimum dimensions should be 20ft × 20ft";
pub const MAX_DIMENSIONS_MESSAGE: &str = "Maximum dimensions should be 200ft × 200ft";
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate floor plan. Please try again.";
pub const GENERATED_MESSAGE: &str = "Floor plan generated successfully!";
pub const SAVED_MESSAGE: &str = "Changes saved successfully!";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save changes";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load playground";

/// Plot used until a project has been sized.
#[must_use]
pub fn default_plot() -> Plot {
    Dimensions::new(40.0, 60.0)
}

/// Check plot bounds before asking the server for a layout.
///
/// # Errors
///
/// Returns the message to show when either side is outside `[20, 200]` ft.
pub fn validate_dimensions(plot: Plot) -> Result<(), &'static str> {
    if plot.width < MIN_PLOT_FT || plot.length < MIN_PLOT_FT {
        return Err(MIN_DIMENSIONS_MESSAGE);
    }
    if plot.width > MAX_PLOT_FT || plot.length > MAX_PLOT_FT {
        return Err(MAX_DIMENSIONS_MESSAGE);
    }
    Ok(())
}

/// Parse a numeric input the way the form fields expect: the leading integer,
/// or `0` when there is none.
#[must_use]
pub fn parse_int(raw: &str) -> i64 {
    let raw = raw.trim();
    let digits_end = raw
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(raw.len(), |(i, _)| i);
    raw[..digits_end].parse().unwrap_or(0)
}

/// Room-count requirement fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountField {
    Bedrooms,
    Bathrooms,
}

/// Optional-space requirement fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagField {
    Kitchen,
    LivingRoom,
    DiningRoom,
    Study,
}

impl FlagField {
    pub const ALL: [FlagField; 4] = [Self::Kitchen, Self::LivingRoom, Self::DiningRoom, Self::Study];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::LivingRoom => "Living Room",
            Self::DiningRoom => "Dining Room",
            Self::Study => "Study",
        }
    }

    #[must_use]
    pub fn get(self, req: &Requirements) -> bool {
        match self {
            Self::Kitchen => req.kitchen,
            Self::LivingRoom => req.living_room,
            Self::DiningRoom => req.dining_room,
            Self::Study => req.study,
        }
    }

    fn set(self, req: &mut Requirements, value: bool) {
        match self {
            Self::Kitchen => req.kitchen = value,
            Self::LivingRoom => req.living_room = value,
            Self::DiningRoom => req.dining_room = value,
            Self::Study => req.study = value,
        }
    }
}

/// State of the playground page.
#[derive(Clone, Debug)]
pub struct PlaygroundState {
    pub project_id: Option<String>,
    pub name: String,
    pub plot: Plot,
    pub requirements: Requirements,
    pub plan: Option<FloorPlan>,
    pub selected: Option<RoomId>,
    /// Unsaved user edits exist.
    pub modified: bool,
    pub loading: bool,
    pub generating: bool,
    pub saving: bool,
    /// The realtime channel has joined the project room.
    pub live: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            project_id: None,
            name: String::new(),
            plot: default_plot(),
            requirements: Requirements::default(),
            plan: None,
            selected: None,
            modified: false,
            loading: true,
            generating: false,
            saving: false,
            live: false,
            error: None,
            success: None,
        }
    }
}

impl PlaygroundState {
    /// Take over a freshly fetched project. Unsized projects keep the default plot.
    pub fn load(&mut self, project: Project) {
        self.plot = project.sized_plot().unwrap_or_else(default_plot);
        self.requirements = project.requirements.unwrap_or_default();
        self.plan = project.generated_plan;
        self.project_id = Some(project.id);
        self.name = project.name;
        self.selected = None;
        self.modified = false;
        self.loading = false;
        self.error = None;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
    }

    pub fn set_plot_width(&mut self, width: i64) {
        self.plot.width = feet(width);
        self.modified = true;
    }

    pub fn set_plot_length(&mut self, length: i64) {
        self.plot.length = feet(length);
        self.modified = true;
    }

    /// Set a room count, clamped to zero.
    pub fn set_count(&mut self, field: CountField, value: i64) {
        let value = u32::try_from(value.max(0)).unwrap_or(u32::MAX);
        match field {
            CountField::Bedrooms => self.requirements.bedrooms = value,
            CountField::Bathrooms => self.requirements.bathrooms = value,
        }
        self.modified = true;
    }

    pub fn set_flag(&mut self, field: FlagField, value: bool) {
        field.set(&mut self.requirements, value);
        self.modified = true;
    }

    /// Validate the plot and, when it passes, mark generation as running and
    /// return the request to send.
    ///
    /// # Errors
    ///
    /// Returns the validation message, also stored in `error`. Nothing should
    /// be sent in that case.
    pub fn begin_generate(&mut self) -> Result<GenerateRequest, &'static str> {
        if let Err(message) = validate_dimensions(self.plot) {
            self.error = Some(message.to_owned());
            self.success = None;
            return Err(message);
        }
        self.generating = true;
        self.error = None;
        self.success = None;
        Ok(GenerateRequest { dimensions: self.plot, requirements: self.requirements.clone() })
    }

    /// Install a generated plan. It is auto-saved next, so it does not count
    /// as an unsaved edit.
    pub fn finish_generate(&mut self, plan: FloorPlan) {
        self.plan = Some(plan);
        self.selected = None;
        self.generating = false;
        self.success = Some(GENERATED_MESSAGE.to_owned());
    }

    pub fn generate_failed(&mut self) {
        self.generating = false;
        self.error = Some(GENERATE_FAILED_MESSAGE.to_owned());
    }

    /// Body for `PUT /projects/:id`.
    #[must_use]
    pub fn update_payload(&self) -> ProjectUpdate {
        ProjectUpdate {
            dimensions: self.plot,
            requirements: self.requirements.clone(),
            generated_plan: self.plan.clone(),
        }
    }

    pub fn mark_saved(&mut self, announce: bool) {
        self.saving = false;
        self.modified = false;
        if announce {
            self.success = Some(SAVED_MESSAGE.to_owned());
        }
    }

    pub fn save_failed(&mut self) {
        self.saving = false;
        self.error = Some(SAVE_FAILED_MESSAGE.to_owned());
    }

    /// The save that follows generation failed: the new plan only exists here,
    /// so it becomes an unsaved edit.
    pub fn auto_save_failed(&mut self) {
        self.save_failed();
        self.success = None;
        self.modified = true;
    }

    /// Select the room under a raw canvas offset, or clear the selection.
    pub fn select_at(&mut self, raw_x: f64, raw_y: f64) {
        self.selected = self
            .plan
            .as_ref()
            .and_then(|plan| pick(raw_x, raw_y, plan))
            .map(|room| room.id.clone());
    }

    #[must_use]
    pub fn selected_room(&self) -> Option<&Room> {
        let id = self.selected.as_deref()?;
        self.plan.as_ref()?.room(id)
    }

    /// Apply an editor change to the selected room and return the new room.
    pub fn patch_selected(&mut self, patch: &RoomPatch) -> Option<Room> {
        let id = self.selected.clone()?;
        let plan = self.plan.as_ref()?;
        if plan.room(&id).is_none() {
            return None;
        }
        let next = plan.with_room_patched(&id, patch);
        let room = next.room(&id).cloned();
        self.plan = Some(next);
        self.modified = true;
        room
    }

    /// Remove the selected room and return its id.
    pub fn delete_selected(&mut self) -> Option<RoomId> {
        let id = self.selected.take()?;
        let plan = self.plan.as_ref()?;
        if plan.room(&id).is_none() {
            return None;
        }
        self.plan = Some(plan.without_room(&id));
        self.modified = true;
        Some(id)
    }

    /// Append a 10×10 ft room at the plot origin and select it.
    pub fn add_room(&mut self, room_type: RoomType) -> Room {
        let room = Room::new(
            uuid::Uuid::new_v4().to_string(),
            room_type.label(),
            room_type,
            Dimensions::new(10.0, 10.0),
            Position::default(),
        );
        let plan = self.plan.take().unwrap_or_default();
        self.plan = Some(plan.with_room_added(room.clone()));
        self.selected = Some(room.id.clone());
        self.modified = true;
        room
    }

    /// Apply a `room-update` payload from another session.
    ///
    /// Accepts either `{ "projectId": .., "room": Room }` or a bare room.
    /// Payloads naming another project are ignored. Known rooms are replaced
    /// in place, unknown ones appended. Returns whether the plan changed.
    pub fn apply_remote_update(&mut self, payload: &Value) -> bool {
        if let Some(project_id) = payload.get("projectId").and_then(Value::as_str) {
            if self.project_id.as_deref() != Some(project_id) {
                return false;
            }
        }
        let raw = payload.get("room").unwrap_or(payload);
        let Ok(room) = serde_json::from_value::<Room>(raw.clone()) else {
            return false;
        };
        let Some(plan) = self.plan.as_ref() else {
            return false;
        };
        if plan.room(&room.id) == Some(&room) {
            return false;
        }
        self.plan = Some(if plan.room(&room.id).is_some() {
            plan.with_room_replaced(room)
        } else {
            plan.with_room_added(room)
        });
        true
    }

    /// Scene for the canvas renderer.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        Scene::new(self.canvas_plot(), self.plan.as_ref(), self.selected.as_deref())
    }

    /// The form plot clamped to `[20, 200]` ft. The form keeps the raw value
    /// so generation can still report it; the canvas never sees it.
    #[must_use]
    pub fn canvas_plot(&self) -> Plot {
        Dimensions::new(
            self.plot.width.clamp(MIN_PLOT_FT, MAX_PLOT_FT),
            self.plot.length.clamp(MIN_PLOT_FT, MAX_PLOT_FT),
        )
    }

    #[must_use]
    pub fn measurements(&self) -> Option<Measurements> {
        self.plan.as_ref().map(|plan| Measurements::of(self.plot, &plan.rooms))
    }

    /// Leaving now would drop edits.
    #[must_use]
    pub fn should_confirm_leave(&self) -> bool {
        self.modified
    }
}

#[allow(clippy::cast_precision_loss)]
fn feet(value: i64) -> f64 {
    value as f64
}
