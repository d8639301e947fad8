//! Given steps for example deduplication BDD scenarios.

use super::world::DedupWorld;
use apiminer::project::domain::{ApiElement, Example, ExampleOrigin};
use rstest_bdd_macros::given;

#[given(r#"an example "{code}" using "{member}""#)]
fn example_using_member(world: &mut DedupWorld, code: String, member: String) {
    let signature = [ApiElement::method("org.example.Api", member)]
        .into_iter()
        .collect();
    world
        .examples
        .push(Example::new(code, signature, ExampleOrigin::new("Sample.java")));
}
