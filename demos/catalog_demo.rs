use std::error::Error;

use prodcat::runner::{Options, Runner};

fn main() -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(Options::default())?;

    let view = runner.run()?;

    println!("Catalog entries: {}", view.entries.len());
    for entry in view.visible.iter() {
        println!(
            "{} {} ({} - {}) owned by {}",
            entry.id, entry.name, entry.category_icon, entry.category_title, entry.owner_name
        );
    }
    Ok(())
}
