use crate::error::{AnalyticsError, Result};
use serde::{Deserialize, Serialize};

/// One entry of the category enumeration: a stable key plus the label and
/// chart color the rendering layer attaches to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub label: String,
    pub color: String,
}

impl CategoryDef {
    pub fn new(key: &str, label: &str, color: &str) -> Self {
        Self {
            key: key.to_lowercase(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// The closed category enumeration, in display order.
///
/// Categories are declared configuration, never inferred from data: every
/// category-keyed aggregate emits exactly one row per entry here, zero-filled
/// when no item matches. Items whose category is not in the catalog are
/// excluded from keyed aggregates but still count toward overall totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCatalog {
    categories: Vec<CategoryDef>,
}

impl CategoryCatalog {
    /// Builds a catalog from explicit definitions. Keys are lowercased to
    /// match normalized item categories; duplicates and empty catalogs are
    /// rejected.
    pub fn new(categories: Vec<CategoryDef>) -> Result<Self> {
        if categories.is_empty() {
            return Err(AnalyticsError::InvalidCatalog(
                "catalog must declare at least one category".to_string(),
            ));
        }

        let mut normalized = Vec::with_capacity(categories.len());
        for def in categories {
            let key = def.key.trim().to_lowercase();
            if key.is_empty() {
                return Err(AnalyticsError::InvalidCatalog(
                    "category key must not be empty".to_string(),
                ));
            }
            if normalized.iter().any(|d: &CategoryDef| d.key == key) {
                return Err(AnalyticsError::InvalidCatalog(format!(
                    "duplicate category key '{}'",
                    key
                )));
            }
            normalized.push(CategoryDef {
                key,
                label: def.label,
                color: def.color,
            });
        }

        Ok(Self {
            categories: normalized,
        })
    }

    /// The packaged-foods catalog the dashboard ships with.
    pub fn retail_default() -> Self {
        Self {
            categories: vec![
                CategoryDef::new("vegetable", "Vegetable Pickles", "#1e88e5"),
                CategoryDef::new("nonveg", "Non Veg Pickles", "#e53935"),
                CategoryDef::new("powders", "Delicious Powders", "#f9a825"),
                CategoryDef::new("millets", "Millets Ready to Cook", "#00c853"),
                CategoryDef::new("readytoeat", "Ready to Eat", "#8e24aa"),
                CategoryDef::new("organic", "Organic Millets", "#2e7d32"),
            ],
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|d| d.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&CategoryDef> {
        self.categories.iter().find(|d| d.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|d| d.key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CategoryDef> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
