//! Project-list state for the projects page.
//!
//! DESIGN
//! ======
//! The fetched list is kept as returned by the server; search and sort are
//! applied on read by [`ProjectsState::visible`] so clearing the search never
//! needs a refetch.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::cmp::Ordering;

use crate::net::types::Project;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 50;

/// Ordering of the project grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Most recently modified first.
    #[default]
    LastModified,
    Name,
}

impl SortBy {
    /// Value used by the `<select>` control.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LastModified => "lastModified",
            Self::Name => "name",
        }
    }

    /// Parse a `<select>` value; anything unknown sorts by last modified.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == "name" { Self::Name } else { Self::LastModified }
    }
}

/// Shared project list state.
#[derive(Clone, Debug, Default)]
pub struct ProjectsState {
    pub items: Vec<Project>,
    pub loading: bool,
    pub creating: bool,
    pub error: Option<String>,
    pub search: String,
    pub sort_by: SortBy,
}

impl ProjectsState {
    /// Projects matching the search, in display order.
    #[must_use]
    pub fn visible(&self) -> Vec<Project> {
        let needle = self.search.to_lowercase();
        let mut out: Vec<Project> = self
            .items
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        match self.sort_by {
            SortBy::Name => out.sort_by(|a, b| compare_names(&a.name, &b.name)),
            SortBy::LastModified => out.sort_by(|a, b| newest_first(a.last_modified.as_deref(), b.last_modified.as_deref())),
        }
        out
    }

    pub fn remove(&mut self, project_id: &str) {
        self.items.retain(|p| p.id != project_id);
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// ISO-8601 timestamps in one format order lexically. Undated projects sink.
fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Validate a new project name: 3 to 50 characters after trimming.
///
/// # Errors
///
/// Returns the message to show under the name field.
pub fn validate_project_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    let len = name.chars().count();
    if len < NAME_MIN_CHARS {
        return Err("Playground name must be at least 3 characters");
    }
    if len > NAME_MAX_CHARS {
        return Err("Playground name must be at most 50 characters");
    }
    Ok(name.to_owned())
}

/// Date part of an ISO-8601 timestamp for the project card.
#[must_use]
pub fn display_date(timestamp: Option<&str>) -> String {
    match timestamp {
        Some(ts) => ts.get(..10).unwrap_or(ts).to_owned(),
        None => "-".to_owned(),
    }
}
