//! Query-string plumbing shared by every tabular list endpoint.

use serde::Deserialize;
use serde_json::Value;
use store::listing::{DEFAULT_PER_PAGE, PAGE_SIZES, Sort};
use validator::Validate;

/// Standard list parameters: pagination, single-column sort, global filter,
/// and column visibility.
#[derive(Debug, Deserialize, Validate)]
pub struct ListQuery {
    #[validate(range(min = 1))]
    pub page: Option<u64>,
    pub per_page: Option<u64>,
    pub sort: Option<String>,
    pub query: Option<String>,
    pub columns: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.unwrap_or(DEFAULT_PER_PAGE)
    }

    /// Rejects page sizes outside the fixed choices the list views offer.
    pub fn check_per_page(&self) -> Result<(), String> {
        match self.per_page {
            Some(size) if !PAGE_SIZES.contains(&size) => Err(format!(
                "per_page must be one of {PAGE_SIZES:?}, got {size}"
            )),
            _ => Ok(()),
        }
    }

    pub fn sort(&self) -> Option<Sort> {
        self.sort.as_deref().and_then(Sort::parse)
    }

    /// Parsed column-visibility selection, if the caller narrowed it.
    pub fn columns(&self) -> Option<Vec<String>> {
        self.columns.as_deref().map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

/// Drops hidden columns from serialized rows.
///
/// `id` always survives so row actions keep something to address. Filtering
/// and sorting already happened over the full column set; projection only
/// shapes the response.
pub fn project_columns(mut rows: Vec<Value>, columns: &[String]) -> Vec<Value> {
    if columns.is_empty() {
        return rows;
    }
    for row in rows.iter_mut() {
        if let Value::Object(map) = row {
            map.retain(|key, _| key == "id" || columns.iter().any(|c| c == key));
        }
    }
    rows
}
