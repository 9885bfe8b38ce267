// tests/supervisor_fake_sink.rs

use statusrun_test_utils::builders::RunRequestBuilder;
use statusrun_test_utils::fake_sink::{FakeResponse, FakeSink};
use statusrun_test_utils::init_tracing;
use statusrun_test_utils::scripted_runner::ScriptedRunner;

use statusrun::errors::StatusRunError;
use statusrun::exec::ChildOutcome;
use statusrun::status::{StatusReporter, StatusState};
use statusrun::supervisor::{ProcessSupervisor, RunPhase};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[tokio::test]
async fn zero_exit_reports_pending_then_success() -> TestResult {
    init_tracing();

    let request = RunRequestBuilder::new().build();
    let sink = FakeSink::accepting();
    let runner = ScriptedRunner::exiting(0);

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner.clone());

    let report = supervisor.run(&request).await?;

    assert_eq!(report.state, StatusState::Success);
    assert_eq!(report.outcome, ChildOutcome::Exited(0));
    assert_eq!(report.exit_code(), 0);
    assert_eq!(sink.states(), vec![StatusState::Pending, StatusState::Success]);
    assert_eq!(runner.executed().len(), 1);
    assert_eq!(
        supervisor.phase(),
        RunPhase::TerminalReported(StatusState::Success)
    );

    Ok(())
}

#[tokio::test]
async fn nonzero_exit_reports_failure_and_exits_nonzero() -> TestResult {
    init_tracing();

    let request = RunRequestBuilder::new().command(&["make", "test"]).build();
    let sink = FakeSink::accepting();

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, ScriptedRunner::exiting(2));

    let report = supervisor.run(&request).await?;

    assert_eq!(report.state, StatusState::Failure);
    assert_ne!(report.exit_code(), 0);
    assert_eq!(sink.states(), vec![StatusState::Pending, StatusState::Failure]);

    Ok(())
}

#[tokio::test]
async fn start_failure_reports_error() -> TestResult {
    init_tracing();

    let request = RunRequestBuilder::new()
        .command(&["/nonexistent/binary", "--flag"])
        .build();
    let sink = FakeSink::accepting();
    let runner = ScriptedRunner::new(ChildOutcome::FailedToStart(
        "No such file or directory (os error 2)".to_string(),
    ));

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner);

    let report = supervisor.run(&request).await?;

    assert_eq!(report.state, StatusState::Error);
    assert_ne!(report.exit_code(), 0);
    assert_eq!(sink.states(), vec![StatusState::Pending, StatusState::Error]);

    Ok(())
}

#[tokio::test]
async fn rejected_pending_never_starts_the_child() {
    init_tracing();

    let request = RunRequestBuilder::new().build();
    let sink = FakeSink::with_responses(vec![FakeResponse::Status(
        404,
        "404 - Not Found\n".to_string(),
    )]);
    let runner = ScriptedRunner::exiting(0);

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner.clone());

    let result = supervisor.run(&request).await;

    match result {
        Err(StatusRunError::Reporting { state, status, body }) => {
            assert_eq!(state, StatusState::Pending);
            assert_eq!(status, Some(404));
            assert_eq!(body, "404 - Not Found\n");
        }
        other => panic!("Expected Reporting error, got: {other:?}"),
    }

    assert!(runner.executed().is_empty());
    assert_eq!(sink.states(), vec![StatusState::Pending]);
    assert_eq!(supervisor.phase(), RunPhase::Start);
}

#[tokio::test]
async fn unreachable_sink_on_pending_is_fatal() {
    init_tracing();

    let request = RunRequestBuilder::new().build();
    let sink = FakeSink::with_responses(vec![FakeResponse::Unreachable(
        "connection refused".to_string(),
    )]);
    let runner = ScriptedRunner::exiting(0);

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner.clone());

    match supervisor.run(&request).await {
        Err(StatusRunError::Reporting { status: None, body, .. }) => {
            assert!(body.contains("connection refused"));
        }
        other => panic!("Expected Reporting error without status, got: {other:?}"),
    }
    assert!(runner.executed().is_empty());
}

#[tokio::test]
async fn failed_terminal_report_is_not_masked_by_child_success() {
    init_tracing();

    let request = RunRequestBuilder::new().build();
    let sink = FakeSink::with_responses(vec![
        FakeResponse::created(),
        FakeResponse::Status(500, "boom".to_string()),
    ]);
    let runner = ScriptedRunner::exiting(0);

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner.clone());

    match supervisor.run(&request).await {
        Err(StatusRunError::Reporting { state, status, .. }) => {
            assert_eq!(state, StatusState::Success);
            assert_eq!(status, Some(500));
        }
        other => panic!("Expected Reporting error, got: {other:?}"),
    }

    assert_eq!(runner.executed().len(), 1);
    assert_eq!(sink.states(), vec![StatusState::Pending, StatusState::Success]);
    assert_eq!(supervisor.phase(), RunPhase::Running);
}

#[tokio::test]
async fn non_201_success_codes_are_still_failures() {
    init_tracing();

    let request = RunRequestBuilder::new().build();
    let sink = FakeSink::with_responses(vec![FakeResponse::Status(200, "Ok\n".to_string())]);

    let reporter = StatusReporter::new(sink, &request);
    let err = reporter
        .report_state(&request, StatusState::Pending)
        .await
        .expect_err("200 is not 201");

    assert!(matches!(
        err,
        StatusRunError::Reporting { status: Some(200), .. }
    ));
}

/// repo `acme/widget`, sha `deadbeef`, context `ci`, description
/// `unit test`, child exits 0.
#[tokio::test]
async fn concrete_scenario_posts_expected_requests() -> TestResult {
    init_tracing();

    let request = RunRequestBuilder::new()
        .api_url("https://api.github.com")
        .repository("acme/widget")
        .sha("deadbeef")
        .context("ci")
        .description("unit test")
        .username("octocat")
        .auth_token("token")
        .build();
    let sink = FakeSink::accepting();

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, ScriptedRunner::exiting(0));
    let report = supervisor.run(&request).await?;
    assert_eq!(report.exit_code(), 0);

    let requests = sink.requests();
    assert_eq!(requests.len(), 2);

    let bodies: Vec<String> = requests
        .iter()
        .map(|r| String::from_utf8(r.body.clone()).unwrap())
        .collect();
    assert_eq!(
        bodies,
        vec![
            r#"{"state":"pending","target_url":"","description":"unit test","context":"ci"}"#,
            r#"{"state":"success","target_url":"","description":"unit test","context":"ci"}"#,
        ]
    );

    for r in &requests {
        assert_eq!(r.url, "https://api.github.com/repos/acme/widget/statuses/deadbeef");
        assert_eq!(r.header("authorization"), Some("Basic b2N0b2NhdDp0b2tlbg=="));
        assert_eq!(r.header("content-type"), Some("application/json"));
        assert_eq!(r.header("user-agent"), Some("statusrun-tests"));
    }

    Ok(())
}

#[tokio::test]
async fn unstarted_child_stays_in_pending_reported() {
    init_tracing();

    let request = RunRequestBuilder::new().command(&["/nonexistent/binary"]).build();
    let sink = FakeSink::with_responses(vec![
        FakeResponse::created(),
        FakeResponse::Status(502, "bad gateway".to_string()),
    ]);
    let runner = ScriptedRunner::new(ChildOutcome::FailedToStart("not found".to_string()));

    let reporter = StatusReporter::new(sink.clone(), &request);
    let mut supervisor = ProcessSupervisor::new(reporter, runner);

    match supervisor.run(&request).await {
        Err(StatusRunError::Reporting { state, status, .. }) => {
            assert_eq!(state, StatusState::Error);
            assert_eq!(status, Some(502));
        }
        other => panic!("Expected Reporting error, got: {other:?}"),
    }

    assert_eq!(supervisor.phase(), RunPhase::PendingReported);
    assert_eq!(sink.states(), vec![StatusState::Pending, StatusState::Error]);
}
