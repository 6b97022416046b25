use thiserror::Error;

use crate::catalog::{self, CatalogEntry, Category, Product, User};
use crate::datasource::{self, DatasetError, DatasetSource};
use crate::filter::{self, FilterCriteria};

#[derive(Clone, Debug)]
pub struct Options {
    pub users: DatasetSource<User>,
    pub categories: DatasetSource<Category>,
    pub products: DatasetSource<Product>,
    pub query: String,
    pub owner: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            users: DatasetSource::Inline(datasource::demo_users()),
            categories: DatasetSource::Inline(datasource::demo_categories()),
            products: DatasetSource::Inline(datasource::demo_products()),
            query: String::new(),
            owner: String::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to load dataset: {source}")]
    Dataset {
        #[source]
        source: DatasetError,
    },

    #[error("failed to join catalog: {source}")]
    Join {
        #[source]
        source: catalog::JoinError,
    },
}

#[derive(Clone, Debug)]
pub struct CatalogView {
    pub entries: Vec<CatalogEntry>,
    pub visible: Vec<CatalogEntry>,
}

pub struct Runner {
    options: Options,
}

impl Runner {
    pub fn new(options: Options) -> Result<Self, CatalogError> {
        fn check_path<T>(source: &DatasetSource<T>, kind: &'static str) -> Result<(), CatalogError> {
            if let DatasetSource::FilePath(path) = source {
                if datasource::infer_format_from_path(path).is_none() {
                    return Err(CatalogError::Dataset {
                        source: DatasetError::UnknownFormat {
                            kind,
                            path: path.clone(),
                        },
                    });
                }
            }
            Ok(())
        }

        // fail on unloadable sources up front, before any work happens.
        check_path(&options.users, "users")?;
        check_path(&options.categories, "categories")?;
        check_path(&options.products, "products")?;
        Ok(Self { options })
    }

    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new(self.options.query.clone(), self.options.owner.clone())
    }

    // loads the three collections, joins them once, and applies the
    // current criteria. the returned entries list is the full catalog;
    // visible is the filtered subsequence.
    pub fn run(&self) -> Result<CatalogView, CatalogError> {
        let users = self
            .options
            .users
            .load("users")
            .map_err(|e| CatalogError::Dataset { source: e })?;
        let categories = self
            .options
            .categories
            .load("categories")
            .map_err(|e| CatalogError::Dataset { source: e })?;
        let products = self
            .options
            .products
            .load("products")
            .map_err(|e| CatalogError::Dataset { source: e })?;

        let entries = catalog::build_catalog(&users, &categories, &products)
            .map_err(|e| CatalogError::Join { source: e })?;
        let visible = filter::prepare(&entries, &self.criteria());

        Ok(CatalogView { entries, visible })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_run_against_demo_data() {
        let runner = Runner::new(Options::default()).unwrap();
        let view = runner.run().unwrap();
        assert_eq!(view.entries.len(), view.visible.len());
        assert!(!view.entries.is_empty());
    }

    #[test]
    fn initial_criteria_narrow_the_visible_set() {
        let runner = Runner::new(Options {
            owner: "Anna".to_string(),
            ..Options::default()
        })
        .unwrap();
        let view = runner.run().unwrap();
        assert!(view.visible.len() < view.entries.len());
        assert!(view.visible.iter().all(|e| e.owner_name == "Anna"));
    }

    #[test]
    fn new_rejects_paths_with_unknown_extension() {
        let result = Runner::new(Options {
            users: DatasetSource::FilePath("./users.csv".to_string()),
            ..Options::default()
        });
        assert!(result.is_err());
    }
}
