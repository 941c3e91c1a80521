use super::*;

#[test]
fn owner_deserializes_without_optional_fields() {
    let owner: Owner = serde_json::from_str(
        r#"{"id":1,"name":"Jane","email":"jane@x.io","phone":"555-0101"}"#,
    )
    .expect("owner json");
    assert_eq!(owner.name, "Jane");
    assert!(owner.address.is_none());
    assert!(owner.username.is_none());
}

#[test]
fn pet_uses_camel_case_birth_date() {
    let pet: Pet = serde_json::from_str(
        r#"{"id":2,"name":"Rex","breed":"Beagle","birthDate":"2020-05-01"}"#,
    )
    .expect("pet json");
    assert_eq!(pet.birth_date.as_deref(), Some("2020-05-01"));
    assert!(pet.owner.is_none());
}

#[test]
fn visit_status_round_trips_screaming_case() {
    assert_eq!(serde_json::to_string(&VisitStatus::Upcoming).expect("json"), "\"UPCOMING\"");
    let status: VisitStatus = serde_json::from_str("\"CANCELLED\"").expect("status json");
    assert_eq!(status, VisitStatus::Cancelled);
}

#[test]
fn visit_status_code_matches_wire_serialization() {
    for status in [VisitStatus::Upcoming, VisitStatus::Completed, VisitStatus::Cancelled] {
        let wire = serde_json::to_value(status).expect("status json");
        assert_eq!(wire, serde_json::json!(status.code()));
    }
}

#[test]
fn visit_defaults_status_to_upcoming() {
    let visit: Visit = serde_json::from_str(
        r#"{"id":3,"visitDate":"2026-09-01","description":"checkup"}"#,
    )
    .expect("visit json");
    assert_eq!(visit.status, VisitStatus::Upcoming);
}

#[test]
fn visit_payload_serializes_backend_field_names() {
    let payload = VisitPayload {
        date: "2026-09-01".to_owned(),
        description: "checkup".to_owned(),
        pet_id: 2,
        vet_id: 5,
    };
    let json = serde_json::to_value(&payload).expect("payload json");
    assert_eq!(json, serde_json::json!({
        "date": "2026-09-01",
        "description": "checkup",
        "petId": 2,
        "vetId": 5,
    }));
}
