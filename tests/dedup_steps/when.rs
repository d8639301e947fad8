//! When steps for example deduplication BDD scenarios.

use super::world::DedupWorld;
use rstest_bdd_macros::when;

#[when("the examples are deduplicated")]
fn examples_are_deduplicated(world: &mut DedupWorld) {
    let examples = std::mem::take(&mut world.examples);
    world.reduced = Some(world.engine.reduce(examples));
}

#[when("the examples are deduplicated twice")]
fn examples_are_deduplicated_twice(world: &mut DedupWorld) {
    let examples = std::mem::take(&mut world.examples);
    let once = world.engine.reduce(examples);
    world.reduced = Some(world.engine.reduce(once));
}
