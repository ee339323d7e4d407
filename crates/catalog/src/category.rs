//! Closed set of product categories.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use candyworld_core::DomainError;

/// Product category.
///
/// Closed on purpose: adding a variant is a code change, and every `match` over
/// it must be revisited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Candy,
    Dessert,
    Drink,
}

impl Category {
    /// Every category, in picker order.
    pub const ALL: [Category; 3] = [Category::Candy, Category::Dessert, Category::Drink];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Candy => "candy",
            Category::Dessert => "dessert",
            Category::Drink => "drink",
        }
    }

    /// French display label, as shown in the storefront's category picker.
    pub fn label_fr(self) -> &'static str {
        match self {
            Category::Candy => "Bonbons",
            Category::Dessert => "Gâteaux",
            Category::Drink => "Boissons",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    "category",
                    format!("must be one of candy, dessert, drink (got {s:?})"),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
    }

    #[test]
    fn rejects_unknown_and_miscased_names() {
        assert!("pastry".parse::<Category>().is_err());
        let err = "Candy".parse::<Category>().unwrap_err();
        assert_eq!(err.as_validation().map(|v| v.field), Some("category"));
    }

    #[test]
    fn french_labels_are_distinct() {
        let labels: Vec<&str> = Category::ALL.into_iter().map(Category::label_fr).collect();
        assert_eq!(labels, vec!["Bonbons", "Gâteaux", "Boissons"]);
    }

    #[test]
    fn serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Category::Drink).unwrap(), "\"drink\"");
        let c: Category = serde_json::from_str("\"dessert\"").unwrap();
        assert_eq!(c, Category::Dessert);
    }
}
