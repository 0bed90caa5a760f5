use super::*;

#[test]
fn parses_host_user_with_username() {
    let user = parse_host_user(r#"{"id":123456,"first_name":"Ann","username":"ann","is_premium":true}"#).unwrap();
    assert_eq!(user.id, 123_456);
    assert_eq!(user.username.as_deref(), Some("ann"));
}

#[test]
fn parses_host_user_without_username() {
    let user = parse_host_user(r#"{"id":77,"first_name":"NoHandle"}"#).unwrap();
    assert_eq!(user.display_name(), "user_77");
}

#[test]
fn rejects_payload_without_id() {
    assert!(parse_host_user(r#"{"first_name":"Ghost"}"#).is_none());
}

#[test]
fn rejects_non_json_payload() {
    assert!(parse_host_user("undefined").is_none());
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_build_has_no_host_user() {
    assert!(read_host_user().is_none());
}
