#[test]
fn recruit_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/recruit_error_pass.rs");
    t.pass("tests/ui/api_model_pass.rs");
}
