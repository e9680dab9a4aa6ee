//! In-memory form of the provider's returned filter tree.
//!
//! Nodes come either from a parsed response or from local synthesis when the
//! provider omitted a filter the shopper has constrained. Both paths build
//! the same closed union so facet handlers never see raw markup.

use serde::{Deserialize, Serialize};

/// Upper bound used wherever a range has no maximum: 2^53 - 1, the largest
/// integer an `f64` represents exactly.
pub const UNBOUNDED_MAX: f64 = 9_007_199_254_740_991.0;

pub type ExternalFilterTree = Vec<FilterNode>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum FilterNode {
    Items(ItemsFilter),
    Range(RangeFilter),
}

impl FilterNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Items(f) => &f.name,
            Self::Range(f) => &f.name,
        }
    }

    /// A label node without items, used when a selection exists but the
    /// provider returned nothing to enumerate.
    pub fn empty_label(name: impl Into<String>) -> Self {
        Self::Items(ItemsFilter {
            name: name.into(),
            display: None,
            kind: ItemsKind::Label,
            select: SelectMode::default(),
            items: Vec::new(),
        })
    }

    /// A range node whose total and selected range are both `[min, max]`.
    pub fn pinned_range(name: impl Into<String>, min: f64, max: f64) -> Self {
        let bounds = Bounds { min, max };
        Self::Range(RangeFilter {
            name: name.into(),
            display: None,
            total: bounds,
            selected: bounds,
            step_size: None,
            unit: None,
        })
    }
}

/// Type tag of a list-shaped filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemsKind {
    Label,
    Select,
    Color,
    Image,
    Unknown(String),
}

impl ItemsKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "label" => Self::Label,
            "select" => Self::Select,
            "color" => Self::Color,
            "image" => Self::Image,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectMode {
    Single,
    #[default]
    Multiple,
}

impl SelectMode {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "single" { Self::Single } else { Self::Multiple }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsFilter {
    pub name: String,
    pub display: Option<String>,
    pub kind: ItemsKind,
    pub select: SelectMode,
    pub items: Vec<FilterItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterItem {
    pub name: String,
    pub frequency: Option<u32>,
    pub image: Option<String>,
    pub color: Option<String>,
    pub items: Vec<FilterItem>,
}

impl FilterItem {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFilter {
    pub name: String,
    pub display: Option<String>,
    pub total: Bounds,
    pub selected: Bounds,
    pub step_size: Option<f64>,
    pub unit: Option<String>,
}
