use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::catalog::{Category, Product, Sex, User};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read {kind} file: {path}: {source}")]
    FileRead {
        kind: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {kind} file as json: {path}: {source}")]
    ParseJson {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse {kind} file as yaml: {path}: {source}")]
    ParseYaml {
        kind: &'static str,
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("unrecognized dataset format for {kind} file: {path} (expected .json, .yml or .yaml)")]
    UnknownFormat { kind: &'static str, path: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

pub fn infer_format_from_path(path: &str) -> Option<DatasetFormat> {
    let lower = path.trim().to_lowercase();
    if lower.ends_with(".json") {
        return Some(DatasetFormat::Json);
    }
    if lower.ends_with(".yml") || lower.ends_with(".yaml") {
        return Some(DatasetFormat::Yaml);
    }
    None
}

#[derive(Clone, Debug)]
pub enum DatasetSource<T> {
    FilePath(String),
    Inline(Vec<T>),
}

impl<T: DeserializeOwned + Clone> DatasetSource<T> {
    pub fn load(&self, kind: &'static str) -> Result<Vec<T>, DatasetError> {
        match self {
            DatasetSource::Inline(records) => Ok(records.clone()),
            DatasetSource::FilePath(path) => {
                let format = infer_format_from_path(path).ok_or(DatasetError::UnknownFormat {
                    kind,
                    path: path.clone(),
                })?;
                let contents =
                    std::fs::read_to_string(path).map_err(|e| DatasetError::FileRead {
                        kind,
                        path: path.clone(),
                        source: e,
                    })?;
                match format {
                    DatasetFormat::Json => {
                        serde_json::from_str(&contents).map_err(|e| DatasetError::ParseJson {
                            kind,
                            path: path.clone(),
                            source: e,
                        })
                    }
                    DatasetFormat::Yaml => {
                        serde_yaml::from_str(&contents).map_err(|e| DatasetError::ParseYaml {
                            kind,
                            path: path.clone(),
                            source: e,
                        })
                    }
                }
            }
        }
    }
}

fn user(id: u32, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_string(),
        sex,
    }
}

fn category(id: u32, title: &str, icon: &str, owner_id: u32) -> Category {
    Category {
        id,
        title: title.to_string(),
        icon: icon.to_string(),
        owner_id,
    }
}

fn product(id: u32, name: &str, category_id: u32) -> Product {
    Product {
        id,
        name: name.to_string(),
        category_id,
    }
}

// bundled sample data so the tool works with no dataset files at all.
pub fn demo_users() -> Vec<User> {
    vec![
        user(1, "Roma", Sex::Male),
        user(2, "Anna", Sex::Female),
        user(3, "Max", Sex::Male),
        user(4, "John", Sex::Male),
    ]
}

pub fn demo_categories() -> Vec<Category> {
    vec![
        category(1, "Grocery", "🍞", 2),
        category(2, "Drinks", "🍷", 1),
        category(3, "Fruits", "🍏", 2),
        category(4, "Electronics", "💻", 1),
        category(5, "Clothes", "👚", 3),
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        product(1, "Milk", 1),
        product(2, "Bread", 1),
        product(3, "Garlic", 1),
        product(4, "Red Wine", 2),
        product(5, "Sparkling Water", 2),
        product(6, "Apple", 3),
        product(7, "Banana", 3),
        product(8, "iPhone 10", 4),
        product(9, "Laptop Pro", 4),
        product(10, "Jeans", 5),
        product(11, "T-shirt", 5),
    ]
}
