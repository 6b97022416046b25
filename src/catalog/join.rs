use std::collections::HashMap;

use thiserror::Error;

use super::{CatalogEntry, Category, Product, User};

#[derive(Debug, Error)]
pub enum JoinError {
    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("product {product_id} references unknown category {category_id}")]
    UnknownCategory { product_id: u32, category_id: u32 },

    #[error("category {category_id} references unknown owner {owner_id}")]
    UnknownOwner { category_id: u32, owner_id: u32 },
}

fn index_by_id<'a, T>(
    kind: &'static str,
    records: &'a [T],
    id_of: impl Fn(&T) -> u32,
) -> Result<HashMap<u32, &'a T>, JoinError> {
    let mut index: HashMap<u32, &T> = HashMap::with_capacity(records.len());
    for record in records.iter() {
        let id = id_of(record);
        if index.insert(id, record).is_some() {
            return Err(JoinError::DuplicateId { kind, id });
        }
    }
    Ok(index)
}

// resolves every product through its category to the owning user and
// emits one denormalized row per product, in product input order. a
// dangling reference aborts the whole join; no placeholder rows.
pub fn build_catalog(
    users: &[User],
    categories: &[Category],
    products: &[Product],
) -> Result<Vec<CatalogEntry>, JoinError> {
    let users_by_id = index_by_id("user", users, |u| u.id)?;
    let categories_by_id = index_by_id("category", categories, |c| c.id)?;
    index_by_id("product", products, |p| p.id)?;

    let mut entries: Vec<CatalogEntry> = Vec::with_capacity(products.len());
    for product in products.iter() {
        let category = categories_by_id.get(&product.category_id).ok_or(
            JoinError::UnknownCategory {
                product_id: product.id,
                category_id: product.category_id,
            },
        )?;
        let owner = users_by_id
            .get(&category.owner_id)
            .ok_or(JoinError::UnknownOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            })?;
        entries.push(CatalogEntry {
            id: product.id,
            name: product.name.clone(),
            category_title: category.title.clone(),
            category_icon: category.icon.clone(),
            owner_name: owner.name.clone(),
            owner_sex: owner.sex,
        });
    }
    Ok(entries)
}
