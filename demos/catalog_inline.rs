use std::error::Error;

use prodcat::catalog::{Category, Product, Sex, User};
use prodcat::datasource::DatasetSource;
use prodcat::runner::{Options, Runner};

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![User {
        id: 1,
        name: "Anna".to_string(),
        sex: Sex::Female,
    }];
    let categories = vec![Category {
        id: 10,
        title: "Fruits".to_string(),
        icon: "🍎".to_string(),
        owner_id: 1,
    }];
    let products = vec![
        Product {
            id: 100,
            name: "Banana".to_string(),
            category_id: 10,
        },
        Product {
            id: 101,
            name: "Apple".to_string(),
            category_id: 10,
        },
    ];

    let runner = Runner::new(Options {
        users: DatasetSource::Inline(users),
        categories: DatasetSource::Inline(categories),
        products: DatasetSource::Inline(products),
        query: "ban".to_string(),
        ..Options::default()
    })?;

    let view = runner.run()?;
    for entry in view.visible.iter() {
        println!("{}: {}", entry.id, entry.name);
    }
    Ok(())
}
