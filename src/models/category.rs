use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The kind of plant being tracked.
///
/// - `Flower`: Stored as `"Flower"`
/// - `Vegetable`: Stored as `"Vegetable"`
/// - `IndoorPlant`: Stored as `"Indoor_plant"`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Flower,
    Vegetable,
    #[serde(rename = "Indoor_plant")]
    IndoorPlant,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 3] = [Self::Flower, Self::Vegetable, Self::IndoorPlant];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flower => "Flower",
            Self::Vegetable => "Vegetable",
            Self::IndoorPlant => "Indoor_plant",
        }
    }

    /// Human-readable label shown in the add-plant menu.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Flower => "Flower",
            Self::Vegetable => "Vegetable",
            Self::IndoorPlant => "Indoor Plant",
        }
    }

    /// Exact match on the stored tag.
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "Flower" => Some(Self::Flower),
            "Vegetable" => Some(Self::Vegetable),
            "Indoor_plant" => Some(Self::IndoorPlant),
            _ => None,
        }
    }

    pub fn from_menu_choice(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::Flower),
            "2" => Some(Self::Vegetable),
            "3" => Some(Self::IndoorPlant),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected flower, vegetable or indoor)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the stored tag or a case-insensitive alias.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(category) = Self::from_tag(s) {
            return Ok(category);
        }
        match s.trim().to_ascii_lowercase().as_str() {
            "flower" => Ok(Self::Flower),
            "vegetable" => Ok(Self::Vegetable),
            "indoor" | "indoor_plant" | "indoor-plant" | "indoorplant" => Ok(Self::IndoorPlant),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_match_storage_format() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.as_str()), Some(category));
        }
        assert_eq!(Category::IndoorPlant.as_str(), "Indoor_plant");
    }

    #[test]
    fn test_from_tag_is_exact() {
        assert_eq!(Category::from_tag("flower"), None);
        assert_eq!(Category::from_tag("IndoorPlant"), None);
        assert_eq!(Category::from_tag("Tree"), None);
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(Category::from_menu_choice("1"), Some(Category::Flower));
        assert_eq!(Category::from_menu_choice("2"), Some(Category::Vegetable));
        assert_eq!(Category::from_menu_choice("3"), Some(Category::IndoorPlant));
        assert_eq!(Category::from_menu_choice("4"), None);
        assert_eq!(Category::from_menu_choice(""), None);
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!("Flower".parse::<Category>(), Ok(Category::Flower));
        assert_eq!("VEGETABLE".parse::<Category>(), Ok(Category::Vegetable));
        assert_eq!("indoor-plant".parse::<Category>(), Ok(Category::IndoorPlant));
        assert_eq!("indoor".parse::<Category>(), Ok(Category::IndoorPlant));
        assert!("cactus".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_uses_stored_tag() {
        let json = serde_json::to_string(&Category::IndoorPlant).unwrap();
        assert_eq!(json, "\"Indoor_plant\"");
        let parsed: Category = serde_json::from_str("\"Vegetable\"").unwrap();
        assert_eq!(parsed, Category::Vegetable);
    }
}
