use super::*;

#[test]
fn build_request_trims_identity_fields() {
    let request = build_request(" bob ", " Bob Lee ", " bob@example.com ", "pw").unwrap();
    assert_eq!(request.account, "bob");
    assert_eq!(request.name, "Bob Lee");
    assert_eq!(request.email, "bob@example.com");
    assert_eq!(request.password, "pw");
}

#[test]
fn build_request_rejects_blank_fields() {
    assert_eq!(build_request("bob", "", "b@x.io", "pw"), Err("All fields are required."));
    assert_eq!(build_request("bob", "Bob", "b@x.io", ""), Err("All fields are required."));
}

#[test]
fn confirmation_needs_a_message() {
    let ok = MessageResponse { message: Some("User registered".to_owned()) };
    assert_eq!(confirmation(ok), Ok("User registered".to_owned()));
    assert_eq!(confirmation(MessageResponse::default()), Err(NO_MESSAGE));
}

#[test]
fn redirect_waits_two_seconds() {
    assert_eq!(REDIRECT_DELAY, Duration::from_secs(2));
}
