//! Then steps for example deduplication BDD scenarios.

use super::world::DedupWorld;
use apiminer::project::domain::Example;
use rstest_bdd_macros::then;

fn reduced(world: &DedupWorld) -> Result<&[Example], eyre::Report> {
    world
        .reduced
        .as_deref()
        .ok_or_else(|| eyre::eyre!("examples were not deduplicated"))
}

#[then("exactly {count:usize} examples remain")]
fn examples_remain(world: &DedupWorld, count: usize) -> Result<(), eyre::Report> {
    let examples = reduced(world)?;
    if examples.len() != count {
        return Err(eyre::eyre!(
            "expected {count} examples, found {}",
            examples.len()
        ));
    }
    Ok(())
}

#[then(r#"example {position:usize} is "{code}""#)]
fn example_at_position(
    world: &DedupWorld,
    position: usize,
    code: String,
) -> Result<(), eyre::Report> {
    let example = position
        .checked_sub(1)
        .and_then(|index| reduced(world).ok()?.get(index))
        .ok_or_else(|| eyre::eyre!("no example at position {position}"))?;
    if example.code() != code {
        return Err(eyre::eyre!(
            "expected example {position} to be {code:?}, found {:?}",
            example.code()
        ));
    }
    Ok(())
}
