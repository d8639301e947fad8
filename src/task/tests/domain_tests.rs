//! Lifecycle transition tests for the extraction task aggregate.

use crate::project::domain::{ProjectDomainError, ProjectStatus, RepositoryType};
use crate::task::domain::{
    ExtractionTask, ExtractionTaskError, FailureCategory, NewExtractionTask, TaskResult,
    TaskStateError, TaskStatus,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn task() -> ExtractionTask {
    let request =
        NewExtractionTask::new("  okhttp ", RepositoryType::Git, "https://example.org/ok.git")
            .with_summary("HTTP client")
            .with_requested_by("miner");
    ExtractionTask::new(request, &DefaultClock).expect("valid task")
}

#[rstest]
fn new_task_is_created_without_result(task: ExtractionTask) {
    assert_eq!(task.status(), TaskStatus::Created);
    assert!(task.result().is_none());
    assert!(task.started_at().is_none());
    assert!(task.finished_at().is_none());
    assert_eq!(task.project().name().as_str(), "okhttp");
    assert_eq!(task.project().status(), ProjectStatus::Active);
    assert_eq!(task.requested_by(), Some("miner"));
}

#[rstest]
fn description_names_the_project(task: ExtractionTask) {
    assert_eq!(
        task.description(),
        "extraction of examples for project `okhttp`"
    );
}

#[rstest]
#[case("   ", "https://example.org/x.git", ProjectDomainError::EmptyProjectName)]
#[case("x", "  ", ProjectDomainError::EmptyRepositoryLocation)]
fn blank_request_fields_are_rejected(
    #[case] name: &str,
    #[case] location: &str,
    #[case] expected: ProjectDomainError,
) {
    let result = ExtractionTask::new(
        NewExtractionTask::new(name, RepositoryType::Git, location),
        &DefaultClock,
    );
    assert_eq!(result.map(|_| ()), Err(expected));
}

#[rstest]
fn start_then_finish_records_result(mut task: ExtractionTask) {
    task.start(&DefaultClock).expect("first start succeeds");
    assert_eq!(task.status(), TaskStatus::Running);
    assert!(task.started_at().is_some());

    task.finish(TaskResult::Success, &DefaultClock)
        .expect("running task finishes");

    assert_eq!(task.status(), TaskStatus::Finished);
    assert!(task.result().is_some_and(TaskResult::is_success));
    assert!(task.finished_at() >= task.started_at());
}

#[rstest]
fn second_start_is_rejected(mut task: ExtractionTask) {
    task.start(&DefaultClock).expect("first start succeeds");

    assert_eq!(
        task.start(&DefaultClock),
        Err(TaskStateError::AlreadyStarted(task.id()))
    );
    assert_eq!(task.status(), TaskStatus::Running);
}

#[rstest]
fn finishing_a_created_task_is_rejected(mut task: ExtractionTask) {
    let result = task.finish(TaskResult::Success, &DefaultClock);

    assert_eq!(result, Err(TaskStateError::NotRunning(task.id())));
    assert_eq!(task.status(), TaskStatus::Created);
    assert!(task.result().is_none());
}

#[rstest]
fn finished_task_cannot_finish_again(mut task: ExtractionTask) {
    task.start(&DefaultClock).expect("start");
    task.finish(TaskResult::Success, &DefaultClock)
        .expect("finish");

    let again = task.finish(
        TaskResult::failure(ExtractionTaskError::Interrupted),
        &DefaultClock,
    );

    assert_eq!(again, Err(TaskStateError::NotRunning(task.id())));
    assert!(task.result().is_some_and(TaskResult::is_success));
}

#[rstest]
#[case(ExtractionTaskError::SourceApiMissing, FailureCategory::Precondition)]
#[case(
    ExtractionTaskError::Unexpected("boom".to_owned()),
    FailureCategory::Unexpected
)]
#[case(ExtractionTaskError::Interrupted, FailureCategory::Unexpected)]
fn errors_map_to_categories(
    #[case] error: ExtractionTaskError,
    #[case] expected: FailureCategory,
) {
    assert_eq!(error.category(), expected);
}

#[rstest]
fn categories_display_lowercase_names() {
    assert_eq!(FailureCategory::Precondition.to_string(), "precondition");
    assert_eq!(FailureCategory::Unexpected.as_str(), "unexpected");
}

#[rstest]
fn failure_result_displays_its_error() {
    let result = TaskResult::failure(ExtractionTaskError::SourceApiMissing);

    assert_eq!(result.as_str(), "failure");
    assert_eq!(
        result.to_string(),
        "failure: no source API project is registered"
    );
}
