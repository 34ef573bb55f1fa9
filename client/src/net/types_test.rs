#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

#[test]
fn requirements_default_matches_playground_form() {
    let req = Requirements::default();
    assert_eq!(req.bedrooms, 2);
    assert_eq!(req.bathrooms, 2);
    assert!(req.kitchen && req.living_room);
    assert!(!req.dining_room && !req.study);
}

#[test]
fn requirements_serialize_camel_case() {
    let value = serde_json::to_value(Requirements::default()).expect("serialize");
    assert_eq!(
        value,
        json!({
            "bedrooms": 2,
            "bathrooms": 2,
            "kitchen": true,
            "livingRoom": true,
            "diningRoom": false,
            "study": false
        })
    );
}

#[test]
fn project_deserializes_backend_document() {
    let project: Project = serde_json::from_value(json!({
        "_id": "p1",
        "name": "Lake house",
        "dimensions": {"width": 40, "length": 60},
        "createdAt": "2024-01-02T03:04:05.000Z",
        "lastModified": "2024-02-01T00:00:00.000Z",
        "owner": "u9",
        "generatedPlan": {"rooms": [{
            "id": "r1", "name": "Bedroom", "type": "bedroom",
            "dimensions": {"width": 10, "length": 12},
            "position": {"x": 0, "y": 0}
        }]}
    }))
    .expect("project");

    assert_eq!(project.id, "p1");
    assert_eq!(project.dimensions.width, 40.0);
    assert_eq!(project.generated_plan.as_ref().map(|p| p.rooms.len()), Some(1));
    assert_eq!(project.extra.get("owner"), Some(&json!("u9")));
    assert!(project.requirements.is_none());
}

#[test]
fn project_without_dimensions_is_unsized() {
    let project: Project = serde_json::from_value(json!({"_id": "p2", "name": "New"})).expect("project");
    assert_eq!(project.sized_plot(), None);

    let zero: Project =
        serde_json::from_value(json!({"id": "p3", "name": "Zero", "dimensions": {"width": 0, "length": 0}}))
            .expect("project");
    assert_eq!(zero.id, "p3");
    assert_eq!(zero.sized_plot(), None);
}

#[test]
fn project_round_trip_keeps_unknown_fields() {
    let raw = json!({"_id": "p1", "name": "N", "dimensions": {"width": 30, "length": 30}, "tags": ["a"]});
    let project: Project = serde_json::from_value(raw).expect("project");
    let back = serde_json::to_value(&project).expect("serialize");
    assert_eq!(back["_id"], "p1");
    assert_eq!(back["tags"], json!(["a"]));
}

#[test]
fn new_project_starts_with_empty_plot() {
    let value = serde_json::to_value(NewProject::named("Cabin")).expect("serialize");
    assert_eq!(value, json!({"name": "Cabin", "dimensions": {"width": 0.0, "length": 0.0}}));
}

#[test]
fn project_update_omits_missing_plan() {
    let update = ProjectUpdate {
        dimensions: Plot::new(40.0, 60.0),
        requirements: Requirements::default(),
        generated_plan: None,
    };
    let value = serde_json::to_value(update).expect("serialize");
    assert!(value.get("generatedPlan").is_none());
    assert_eq!(value["requirements"]["livingRoom"], true);
}

#[test]
fn auth_response_tolerates_missing_token() {
    let resp: AuthResponse = serde_json::from_value(json!({"message": "ok"})).expect("auth");
    assert!(resp.token.is_none());
    let resp: AuthResponse =
        serde_json::from_value(json!({"token": "t", "user": {"_id": "u1", "name": "Ada", "email": "a@b.c"}}))
            .expect("auth");
    assert_eq!(resp.token.as_deref(), Some("t"));
    assert_eq!(resp.user.map(|u| u.id), Some("u1".to_owned()));
}
