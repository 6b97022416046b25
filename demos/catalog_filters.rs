use std::error::Error;

use prodcat::filter::{prepare, FilterCriteria};
use prodcat::runner::{Options, Runner};

fn main() -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(Options {
        query: "an".to_string(),
        owner: "Anna".to_string(),
        ..Options::default()
    })?;

    let view = runner.run()?;
    println!("Matches: {}", view.visible.len());

    // the criteria are plain values; mutate and re-apply at will.
    let mut criteria = FilterCriteria::new("an", "Anna");
    criteria.clear_query();
    let owned_by_anna = prepare(&view.entries, &criteria);
    println!("Owned by Anna: {}", owned_by_anna.len());

    criteria.reset();
    let everything = prepare(&view.entries, &criteria);
    println!("Unfiltered: {}", everything.len());
    Ok(())
}
