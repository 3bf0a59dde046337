//! Menu catalog domain model.

use crate::error::{CafebotError, Result};
use serde::{Deserialize, Serialize};

/// One beverage type and the sizes it can be ordered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// Beverage type name (case-sensitive, e.g. "mocha").
    pub name: String,
    /// Allowed size names, in display order.
    pub sizes: Vec<String>,
}

/// Static mapping from beverage type to its allowed sizes.
///
/// Entry order is preserved: it drives the option order on response cards.
/// Lookups for unknown types return `None`/`false`, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    entries: Vec<MenuEntry>,
}

impl Default for MenuCatalog {
    /// The stock menu: a mocha in every size the shop pours, and a chai
    /// that only comes small or short.
    fn default() -> Self {
        let mut catalog = Self::empty();
        // Stock entries are non-empty and unique, so these cannot fail.
        catalog
            .add_beverage(
                "mocha",
                ["short", "tall", "grande", "venti", "small", "medium", "large"],
            )
            .expect("stock menu entry");
        catalog
            .add_beverage("chai", ["small", "short"])
            .expect("stock menu entry");
        catalog
    }
}

impl MenuCatalog {
    /// Creates a catalog with no entries. Add beverages with
    /// [`MenuCatalog::add_beverage`] before serving requests.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds a beverage type with its allowed sizes.
    ///
    /// Returns a `Config` error if the name or size list is empty, or if the
    /// type is already on the menu; catalog entries are fixed and non-empty
    /// for the process lifetime.
    pub fn add_beverage<I, S>(&mut self, name: impl Into<String>, sizes: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        if name.is_empty() {
            return Err(CafebotError::config("beverage type name must not be empty"));
        }
        if self.is_known_type(&name) {
            return Err(CafebotError::config(format!(
                "beverage type '{name}' is already on the menu"
            )));
        }
        let sizes: Vec<String> = sizes.into_iter().map(Into::into).collect();
        if sizes.is_empty() {
            return Err(CafebotError::config(format!(
                "beverage type '{name}' must allow at least one size"
            )));
        }
        self.entries.push(MenuEntry { name, sizes });
        Ok(self)
    }

    /// Returns the allowed sizes for a beverage type, in display order,
    /// or `None` if the type is not on the menu.
    pub fn allowed_sizes(&self, beverage_type: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.name == beverage_type)
            .map(|e| e.sizes.as_slice())
    }

    /// Returns true if the beverage type is on the menu.
    pub fn is_known_type(&self, beverage_type: &str) -> bool {
        self.entries.iter().any(|e| e.name == beverage_type)
    }

    /// Returns true if the size is allowed for the beverage type.
    /// False when the type itself is unknown.
    pub fn is_valid_size(&self, beverage_type: &str, size: &str) -> bool {
        self.allowed_sizes(beverage_type)
            .is_some_and(|sizes| sizes.iter().any(|s| s == size))
    }

    /// Iterates beverage type names in catalog order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_contents() {
        let catalog = MenuCatalog::default();
        let names: Vec<&str> = catalog.type_names().collect();
        assert_eq!(names, vec!["mocha", "chai"]);
        assert_eq!(
            catalog.allowed_sizes("chai").unwrap(),
            &["small".to_string(), "short".to_string()]
        );
    }

    #[test]
    fn test_unknown_type_lookups() {
        let catalog = MenuCatalog::default();
        assert!(!catalog.is_known_type("latte"));
        assert!(catalog.allowed_sizes("latte").is_none());
        assert!(!catalog.is_valid_size("latte", "small"));
    }

    #[test]
    fn test_size_validity() {
        let catalog = MenuCatalog::default();
        assert!(catalog.is_valid_size("mocha", "venti"));
        assert!(catalog.is_valid_size("chai", "short"));
        assert!(!catalog.is_valid_size("chai", "grande"));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let catalog = MenuCatalog::default();
        assert!(!catalog.is_known_type("Mocha"));
    }

    #[test]
    fn test_rejects_empty_entries() {
        let mut catalog = MenuCatalog::empty();
        assert!(catalog.add_beverage("", ["small"]).is_err());
        assert!(catalog.add_beverage("flat white", Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_rejects_duplicate_type() {
        let mut catalog = MenuCatalog::default();
        let err = catalog.add_beverage("mocha", ["small"]).unwrap_err();
        assert!(err.is_config());
    }
}
