pub mod join;

use serde::Deserialize;
use serde::Serialize;

pub use join::{build_catalog, JoinError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "m",
            Sex::Female => "f",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub sex: Sex,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Category {
    pub id: u32,
    pub title: String,
    pub icon: String,
    #[serde(rename = "ownerId")]
    pub owner_id: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: u32,
}

// one denormalized row per product, produced once by the join and
// never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
    pub category_title: String,
    pub category_icon: String,
    pub owner_name: String,
    pub owner_sex: Sex,
}
