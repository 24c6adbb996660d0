use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of grocery categories.
///
/// The serialized form is the canonical label. Once published, do not rename
/// a label: it is both the persisted value and the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Produce")]
    Produce,
    #[serde(rename = "Dairy")]
    Dairy,
    #[serde(rename = "Pantry")]
    Pantry,
    #[serde(rename = "Meat")]
    Meat,
    #[default]
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// Canonical display label, also used as the sort key in list views.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Dairy => "Dairy",
            Self::Pantry => "Pantry",
            Self::Meat => "Meat",
            Self::Other => "Other",
        }
    }

    /// All variants in picker order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Produce,
            Self::Dairy,
            Self::Pantry,
            Self::Meat,
            Self::Other,
        ]
    }

    /// Parse a label, ignoring ASCII case. Unknown labels return `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which slice of the list a view should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_other() {
        assert_eq!(Category::default(), Category::Other);
    }

    #[test]
    fn labels_round_trip_through_parse() {
        for category in Category::all() {
            assert_eq!(Category::parse(category.label()), Some(*category));
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Category::parse(" dairy "), Some(Category::Dairy));
        assert_eq!(Category::parse("MEAT"), Some(Category::Meat));
        assert_eq!(Category::parse("frozen"), None);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&Category::Produce).unwrap();
        assert_eq!(json, "\"Produce\"");
        let parsed: Category = serde_json::from_str("\"Other\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn unknown_label_fails_to_deserialize() {
        assert!(serde_json::from_str::<Category>("\"Frozen\"").is_err());
    }

    #[test]
    fn filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Meat));
        assert!(CategoryFilter::Only(Category::Meat).matches(Category::Meat));
        assert!(!CategoryFilter::Only(Category::Meat).matches(Category::Dairy));
    }
}
