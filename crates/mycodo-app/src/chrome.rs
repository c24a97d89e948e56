//! Persistent chrome (brand + navigation links)
//!
//! Built once at mount and shared behind an `Arc`; navigation swaps the
//! content region only, so the same chrome instance lives for the whole run.

use mycodo_core::NavigationItem;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    brand: String,
    nav_items: Vec<NavigationItem>,
}

impl Chrome {
    pub fn new(brand: impl Into<String>, nav_items: Vec<NavigationItem>) -> Self {
        Self {
            brand: brand.into(),
            nav_items,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    /// Links in display order
    pub fn nav_items(&self) -> &[NavigationItem] {
        &self.nav_items
    }

    pub fn nav_item(&self, index: usize) -> Option<&NavigationItem> {
        self.nav_items.get(index)
    }

    pub fn link_count(&self) -> usize {
        self.nav_items.len()
    }
}
