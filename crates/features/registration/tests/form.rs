#![cfg(feature = "client")]

use recruit_domain::registration::{Field, RegistrationDraft};
use recruit_domain::steps::STEPS;
use recruit_registration::client::{
    Acknowledgement, Advance, FormError, GatewayError, HttpGateway, JoinForm, LogScript,
    RegistrationGateway, SubmissionOutcome, SubmissionState,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::time::Instant;

#[derive(Debug, Clone)]
enum Reply {
    Accept,
    Reject(&'static str),
}

#[derive(Debug, Clone)]
struct FakeGateway {
    reply: Reply,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl FakeGateway {
    fn new(reply: Reply, delay: Duration) -> Self {
        Self { reply, delay, calls: Arc::new(AtomicUsize::new(0)) }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RegistrationGateway for FakeGateway {
    async fn register(&self, _draft: &RegistrationDraft) -> Result<Acknowledgement, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        match self.reply {
            Reply::Accept => {
                Ok(Acknowledgement { message: "Registration successful".into(), data: None })
            },
            Reply::Reject(message) => Err(GatewayError::Rejected { message: message.into(), context: None }),
        }
    }
}

const VALID: &[(Field, &str)] = &[
    (Field::FullName, "Ada Lovelace"),
    (Field::RollNumber, "CS21B10042"),
    (Field::Email, "ada@example.edu"),
    (Field::Phone, "9876543210"),
    (Field::Department, "CSE"),
    (Field::Year, "2nd"),
    (Field::Motivation, "I want to build compilers with friends."),
];

fn fill<G: RegistrationGateway>(form: &mut JoinForm<G>) {
    for (field, value) in VALID {
        form.set_field(*field, *value);
    }
}

async fn walk_to_last_step<G: RegistrationGateway>(form: &mut JoinForm<G>) {
    for expected in 1..STEPS.len() {
        let moved = form.advance().await.expect("advance");
        assert_eq!(moved, Advance::Moved { to: expected });
    }
    assert!(form.is_last_step());
}

#[tokio::test(start_paused = true)]
async fn invalid_step_blocks_without_moving() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::ZERO);
    let mut form = JoinForm::new(gateway.clone());

    form.set_field(Field::FullName, "A");
    form.set_field(Field::RollNumber, "CS21B10042");

    let Advance::Blocked { errors } = form.advance().await.expect("advance") else {
        panic!("short name must block");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, Field::FullName);
    assert_eq!(form.current_step(), 0);
    assert_eq!(
        form.error(Field::FullName).map(|e| &*e.message),
        Some("Full name must be at least 2 characters")
    );
    assert_eq!(form.cursor().active, Some(Field::FullName));
    assert_eq!(gateway.calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn successful_submission_resets_after_delay() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::from_millis(100));
    let mut form = JoinForm::new(gateway.clone());
    fill(&mut form);
    walk_to_last_step(&mut form).await;

    let started = Instant::now();
    let outcome = form.advance().await.expect("submit");

    assert_eq!(
        outcome,
        Advance::Submitted(SubmissionOutcome::Success { message: "Registration successful".into() })
    );
    // six lines at 400ms, then the 3s success screen
    assert_eq!(started.elapsed(), Duration::from_millis(2400 + 3000));
    assert_eq!(gateway.calls(), 1);

    let SubmissionState::Success { message, log } = form.submission() else {
        panic!("expected success state");
    };
    assert_eq!(message, "Registration successful");
    assert_eq!(log.len(), LogScript::default().lines().len());

    assert_eq!(form.current_step(), 0);
    assert!(form.draft().is_empty());
    assert_eq!(form.errors().count(), 0);
}

#[tokio::test(start_paused = true)]
async fn outcome_comes_from_the_request_not_the_script() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::from_secs(10));
    let mut form = JoinForm::new(gateway).reset_delay(Duration::ZERO);
    fill(&mut form);

    let started = Instant::now();
    let outcome = form.submit().await.expect("submit");

    assert!(matches!(outcome, SubmissionOutcome::Success { .. }));
    assert_eq!(started.elapsed(), Duration::from_secs(10));
}

#[tokio::test(start_paused = true)]
async fn failure_appends_error_line_and_keeps_draft() {
    let gateway = FakeGateway::new(Reply::Reject("Roll number already registered"), Duration::ZERO);
    let script = LogScript::new(["> one", "> two"], Duration::from_millis(10));
    let mut form = JoinForm::new(gateway.clone()).script(script);
    fill(&mut form);
    walk_to_last_step(&mut form).await;

    let outcome = form.advance().await.expect("submit");
    assert_eq!(
        outcome,
        Advance::Submitted(SubmissionOutcome::Failed {
            message: "Roll number already registered".into()
        })
    );

    let SubmissionState::Failed { message, log } = form.submission() else {
        panic!("expected failed state");
    };
    assert_eq!(message, "Roll number already registered");
    assert_eq!(log, vec![
        "> one".to_owned(),
        "> two".to_owned(),
        "[ERROR] Roll number already registered".to_owned(),
    ]);
    assert_eq!(form.draft().full_name, "Ada Lovelace");
    assert!(form.is_last_step());

    // retry is allowed and reaches the gateway again
    form.advance().await.expect("retry");
    assert_eq!(gateway.calls(), 2);
}

#[tokio::test]
async fn backend_rejection_over_http_leaves_form_failed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/register")
        .match_body(mockito::Matcher::PartialJsonString(r#"{"rollNumber":"CS21B10042"}"#.into()))
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":false,"message":"Roll number already registered"}"#)
        .create_async()
        .await;

    let script = LogScript::new(["> sending"], Duration::from_millis(1));
    let mut form = JoinForm::new(HttpGateway::from_base_url(&server.url())).script(script);
    fill(&mut form);

    let outcome = form.submit().await.expect("submit");

    mock.assert_async().await;
    assert_eq!(outcome, SubmissionOutcome::Failed { message: "Roll number already registered".into() });
    let SubmissionState::Failed { message, log } = form.submission() else {
        panic!("expected failed state");
    };
    assert_eq!(message, "Roll number already registered");
    assert_eq!(log.last().map(String::as_str), Some("[ERROR] Roll number already registered"));
    assert_eq!(form.draft().email, "ada@example.edu");
}

#[tokio::test(start_paused = true)]
async fn submit_jumps_back_to_first_invalid_step() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::ZERO);
    let mut form = JoinForm::new(gateway.clone());
    fill(&mut form);
    walk_to_last_step(&mut form).await;

    form.set_field(Field::Email, "not-an-email");
    let Advance::Blocked { errors } = form.advance().await.expect("advance") else {
        panic!("invalid email must block submission");
    };

    assert_eq!(errors[0].field, Field::Email);
    assert_eq!(form.current_step(), 1);
    assert_eq!(gateway.calls(), 0);

    let err = form.submit().await.expect_err("still invalid");
    assert!(matches!(err, FormError::Invalid { .. }));
}

#[tokio::test(start_paused = true)]
async fn progress_is_published_while_in_flight() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::from_millis(50));
    let mut form = JoinForm::new(gateway).reset_delay(Duration::ZERO);
    fill(&mut form);

    let mut rx = form.subscribe();
    let watcher = tokio::spawn(async move {
        let mut longest = 0;
        while rx.changed().await.is_ok() {
            let state = rx.borrow_and_update().clone();
            match state {
                SubmissionState::InProgress { log } => longest = longest.max(log.len()),
                SubmissionState::Success { .. } => return longest,
                _ => {},
            }
        }
        longest
    });

    form.submit().await.expect("submit");
    let longest = watcher.await.expect("watcher");
    assert!(longest > 0, "in-progress log should have grown");
}

#[tokio::test(start_paused = true)]
async fn cancelled_submission_returns_to_idle() {
    let gateway = FakeGateway::new(Reply::Accept, Duration::from_secs(60));
    let mut form = JoinForm::new(gateway.clone());
    fill(&mut form);

    let timed_out = tokio::time::timeout(Duration::from_millis(50), form.submit()).await;
    assert!(timed_out.is_err());

    assert_eq!(form.submission(), SubmissionState::Idle);
    assert_eq!(gateway.calls(), 1);
    assert_eq!(form.draft().full_name, "Ada Lovelace");
    assert!(form.retreat().is_ok());
}

#[tokio::test(start_paused = true)]
async fn retreat_keeps_draft_and_stops_at_first_step() {
    let mut form = JoinForm::new(FakeGateway::new(Reply::Accept, Duration::ZERO));
    fill(&mut form);

    assert_eq!(form.retreat().expect("retreat"), 0);
    form.advance().await.expect("advance");
    assert_eq!(form.retreat().expect("retreat"), 0);
    assert_eq!(form.draft().roll_number, "CS21B10042");
}

#[tokio::test(start_paused = true)]
async fn blur_validates_and_typing_clears() {
    let mut form = JoinForm::new(FakeGateway::new(Reply::Accept, Duration::ZERO));

    form.set_field(Field::RollNumber, "ABC-1234567");
    assert!(form.error(Field::RollNumber).is_none(), "no error before blur");
    assert_eq!(form.cursor().position, 11);

    form.blur(Field::RollNumber);
    assert_eq!(
        form.error(Field::RollNumber).map(|e| &*e.message),
        Some("Roll number must contain only letters and numbers")
    );
    assert_eq!(form.cursor().active, None);

    form.set_field(Field::RollNumber, "ABC1234567");
    assert!(form.error(Field::RollNumber).is_none());
}

#[tokio::test(start_paused = true)]
async fn reset_discards_everything() {
    let gateway = FakeGateway::new(Reply::Reject("nope"), Duration::ZERO);
    let mut form = JoinForm::new(gateway);
    fill(&mut form);
    form.submit().await.expect("submit");
    assert!(matches!(form.submission(), SubmissionState::Failed { .. }));

    form.reset().expect("reset");
    assert_eq!(form.submission(), SubmissionState::Idle);
    assert!(form.draft().is_empty());
    assert_eq!(form.current_step(), 0);
}
