//! Tests for the in-memory extractor.

use crate::extraction::{
    adapters::StaticExtractor,
    ports::{ExampleExtractor, ExtractionOutput, ExtractionRequest, ExtractorError},
};
use crate::project::domain::{ApiElement, Example, ExampleOrigin, ProjectId};
use camino::Utf8PathBuf;
use rstest::rstest;

fn request() -> ExtractionRequest {
    ExtractionRequest::new(
        "/srv/src",
        [Utf8PathBuf::from("/srv/api/lib/api.jar")],
        ProjectId::new(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn static_extractor_returns_prepared_output() {
    let output = ExtractionOutput {
        examples: vec![Example::new(
            "new Foo().bar();",
            [ApiElement::method("Foo", "bar()")].into_iter().collect(),
            ExampleOrigin::new("Main.java").with_line(12),
        )],
        ..ExtractionOutput::default()
    };
    let extractor = StaticExtractor::new(output.clone());
    let sent = request();

    let received = extractor.extract(&sent).await.expect("extraction succeeds");

    assert_eq!(received, output);
    assert_eq!(extractor.requests().expect("requests"), vec![sent]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_extractor_returns_its_error() {
    let extractor = StaticExtractor::failing(ExtractorError::Parse {
        path: Utf8PathBuf::from("src/Broken.java"),
        reason: "unexpected token".to_owned(),
    });

    let result = extractor.extract(&request()).await;

    assert!(matches!(
        result,
        Err(ExtractorError::Parse { reason, .. }) if reason == "unexpected token"
    ));
}
