use recruit_derive::api_model;

#[api_model(deny_unknown_fields = false)]
pub struct Probe {
    pub full_name: String,
    pub roll_number: Option<String>,
}

fn main() {
    let probe: Probe =
        serde_json::from_str(r#"{"fullName":"Ada","rollNumber":null,"extra":1}"#).unwrap();
    assert_eq!(probe.full_name, "Ada");
    assert!(probe.roll_number.is_none());
}
