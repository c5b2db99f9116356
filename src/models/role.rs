//! Layout roles derived from free-text wardrobe categories.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const TOP_KEYWORDS: &[&str] = &[
    "top", "shirt", "t-shirt", "blouse", "sweater", "hoodie", "jacket", "outer", "dress",
];
const BOTTOM_KEYWORDS: &[&str] = &["bottom", "pant", "jeans", "skirt", "short", "trouser", "cargo"];
const FOOTWEAR_KEYWORDS: &[&str] = &["shoe", "sneaker", "heel", "boot", "sandal", "footwear", "flat"];

/// Visual role an item plays on a style board.
///
/// Roles are never stored. They are recomputed from an item's category text
/// with [`CategoryRole::classify`] on every layout and shuffle pass, because
/// categories are user- or AI-assigned free text ("Tops", "shirt", "jeans").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryRole {
    /// Shirts, jackets, dresses and other upper-body pieces
    Top,
    /// Pants, skirts, shorts
    Bottom,
    /// Shoes of any kind
    Footwear,
    /// Everything else (bags, jewelry, unknown categories)
    Accessory,
}

impl CategoryRole {
    /// All roles in classification priority order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Footwear, Self::Accessory];

    /// Classifies a category string into a role.
    ///
    /// Matching is a case-insensitive substring test against fixed keyword
    /// lists, checked in priority order top, bottom, footwear. The first role
    /// with a matching keyword wins, so "jacket-pant-combo" is a top. Anything
    /// that matches nothing, including the empty string, is an accessory.
    ///
    /// # Examples
    ///
    /// ```
    /// use styleboard::models::CategoryRole;
    ///
    /// assert_eq!(CategoryRole::classify("Sneakers"), CategoryRole::Footwear);
    /// assert_eq!(CategoryRole::classify("Scarf"), CategoryRole::Accessory);
    /// ```
    pub fn classify(category: &str) -> Self {
        let category = category.to_lowercase();
        let matches = |keywords: &[&str]| keywords.iter().any(|kw| category.contains(kw));

        if matches(TOP_KEYWORDS) {
            Self::Top
        } else if matches(BOTTOM_KEYWORDS) {
            Self::Bottom
        } else if matches(FOOTWEAR_KEYWORDS) {
            Self::Footwear
        } else {
            Self::Accessory
        }
    }

    /// Classifies an optional category; a missing category is an accessory.
    pub fn classify_opt(category: Option<&str>) -> Self {
        category.map_or(Self::Accessory, Self::classify)
    }

    /// Lower-case name used in CLI output and JSON.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Footwear => "footwear",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for CategoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Unknown role '{s}'. Expected one of: top, bottom, footwear, accessory"
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tops() {
        for cat in ["Tops", "shirt", "T-Shirt", "Blouse", "hoodie", "Outerwear", "Dresses"] {
            assert_eq!(CategoryRole::classify(cat), CategoryRole::Top, "{cat}");
        }
    }

    #[test]
    fn test_classify_bottoms() {
        for cat in ["Bottoms", "jeans", "Skirt", "Shorts", "trousers", "Cargo"] {
            assert_eq!(CategoryRole::classify(cat), CategoryRole::Bottom, "{cat}");
        }
    }

    #[test]
    fn test_classify_footwear() {
        for cat in ["Footwear", "sneaker", "High Heels", "Boots", "sandals", "ballet flats"] {
            assert_eq!(CategoryRole::classify(cat), CategoryRole::Footwear, "{cat}");
        }
    }

    #[test]
    fn test_classify_fallback_accessory() {
        assert_eq!(CategoryRole::classify("Accessories"), CategoryRole::Accessory);
        assert_eq!(CategoryRole::classify("Belt"), CategoryRole::Accessory);
        assert_eq!(CategoryRole::classify(""), CategoryRole::Accessory);
        assert_eq!(CategoryRole::classify_opt(None), CategoryRole::Accessory);
    }

    #[test]
    fn test_classify_priority_order() {
        assert_eq!(CategoryRole::classify("jacket-pant-combo"), CategoryRole::Top);
        assert_eq!(CategoryRole::classify("skirt with boots"), CategoryRole::Bottom);
        // "short" is a bottom keyword, and bottoms are checked before footwear
        assert_eq!(CategoryRole::classify("short boots"), CategoryRole::Bottom);
    }

    #[test]
    fn test_classify_deterministic() {
        let first = CategoryRole::classify("Sweater Vest");
        let second = CategoryRole::classify("Sweater Vest");
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_role() {
        assert_eq!("Top".parse::<CategoryRole>().unwrap(), CategoryRole::Top);
        assert_eq!(" footwear ".parse::<CategoryRole>().unwrap(), CategoryRole::Footwear);
        assert!("hat".parse::<CategoryRole>().is_err());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&CategoryRole::Accessory).unwrap();
        assert_eq!(json, "\"accessory\"");
    }
}
