use recruit_domain::constants::{BODY_FIELD, REGISTER_ROUTE, REGISTRATION_TAG, SYSTEM_TAG};

#[test]
fn constants_match_wire_strings() {
    assert_eq!(REGISTER_ROUTE, "/api/register");
    assert_eq!(BODY_FIELD, "body");
    assert_eq!(SYSTEM_TAG, "System");
    assert_eq!(REGISTRATION_TAG, "Registration");
}
