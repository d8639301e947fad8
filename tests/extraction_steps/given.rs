//! Given steps for extraction task BDD scenarios.

use super::world::{ExtractionWorld, ScenarioExtractor};
use apiminer::extraction::{adapters::memory::StaticExtractor, ports::ExtractionOutput};
use apiminer::project::domain::{
    ApiElement, ApiSignature, Example, ExampleOrigin, Project, ProjectDescriptor, ProjectName,
    ProjectStatus, Repository, RepositoryType,
};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given(r#"a registered source API project "{name}""#)]
fn registered_source_api(world: &mut ExtractionWorld, name: String) -> Result<(), eyre::Report> {
    let project = Project::new(
        ProjectDescriptor {
            name: ProjectName::new(name).wrap_err("source API name")?,
            summary: String::new(),
            site_url: String::new(),
            status: ProjectStatus::Active,
            repository: Repository::new(RepositoryType::Local, "/opt/api")
                .wrap_err("source API repository")?,
        },
        &DefaultClock,
    );
    world
        .projects
        .register_source_api(project)
        .wrap_err("register source API")
}

#[given("an extractor that panics")]
fn extractor_that_panics(world: &mut ExtractionWorld) {
    world.extractor = ScenarioExtractor::Panicking;
}

#[given(r#"an extractor returning "{first}", "{second}" and "{third}""#)]
fn extractor_returning(world: &mut ExtractionWorld, first: String, second: String, third: String) {
    let signature: ApiSignature = [ApiElement::method("okhttp3.Call", "execute()")]
        .into_iter()
        .collect();
    let examples = [first, second, third]
        .into_iter()
        .map(|code| Example::new(code, signature.clone(), ExampleOrigin::new("Client.java")))
        .collect();
    world.extractor = ScenarioExtractor::Static(StaticExtractor::new(ExtractionOutput {
        examples,
        ..ExtractionOutput::default()
    }));
}
