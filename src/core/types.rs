use serde::{Deserialize, Serialize};

/// Therapeutic category of a medication.
///
/// The category only drives the label shown to the user; matching never
/// branches on it. Labels outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Antibiotic,
    PainReliever,
    Antidiabetic,
    Other(String),
}

impl Category {
    /// Parse a category from a free-form label (case and surrounding
    /// whitespace are ignored)
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_lowercase().as_str() {
            "antibiotic" => Self::Antibiotic,
            "pain reliever" | "painkiller" => Self::PainReliever,
            "antidiabetic" => Self::Antidiabetic,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Human-readable label
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Antibiotic => "Antibiotic",
            Self::PainReliever => "Pain Reliever",
            Self::Antidiabetic => "Antidiabetic",
            Self::Other(name) => name,
        }
    }

    /// Does this category match a user-supplied filter label?
    #[must_use]
    pub fn matches_label(&self, label: &str) -> bool {
        self.label().eq_ignore_ascii_case(Self::from_label(label).label())
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
