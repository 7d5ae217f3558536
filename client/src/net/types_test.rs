use super::*;

#[test]
fn user_deserializes_with_only_id() {
    let user: User = serde_json::from_str(r#"{"id":"rider-7"}"#).unwrap();
    assert_eq!(user.id, "rider-7");
    assert_eq!(user.name, None);
    assert_eq!(user.email, None);
}

#[test]
fn user_ignores_unknown_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"Asha","email":"a@b.c","avatar":"x"}"#).unwrap();
    assert_eq!(user.name.as_deref(), Some("Asha"));
    assert_eq!(user.email.as_deref(), Some("a@b.c"));
}

#[test]
fn credentials_serialize_as_flat_object() {
    let body = serde_json::to_value(Credentials {
        email: "a@b.c".to_owned(),
        password: "pw".to_owned(),
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({"email": "a@b.c", "password": "pw"}));
}
