use crate::catalog::CatalogEntry;

// the pair of criteria the presentation layer owns. an empty string
// means the corresponding filter is inactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub owner: String,
}

impl FilterCriteria {
    pub fn new(query: impl Into<String>, owner: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            owner: owner.into(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn clear_owner(&mut self) {
        self.owner.clear();
    }

    // the "reset all filters" action.
    pub fn reset(&mut self) {
        self.query.clear();
        self.owner.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.owner.is_empty()
    }

    // both active filters must pass. the query matches the product
    // name as a case-insensitive substring; the owner filter is an
    // exact, case-sensitive name comparison.
    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        if !self.query.is_empty() {
            let name = entry.name.to_lowercase();
            if !name.contains(&self.query.to_lowercase()) {
                return false;
            }
        }
        if !self.owner.is_empty() && entry.owner_name != self.owner {
            return false;
        }
        true
    }
}

// pure selection over the immutable catalog: the output is always an
// order-preserving subsequence of the input.
pub fn prepare(entries: &[CatalogEntry], criteria: &FilterCriteria) -> Vec<CatalogEntry> {
    entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect()
}
