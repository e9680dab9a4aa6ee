//! Renderable facet results produced per search call.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartialFacetResult {
    ValueList(ValueListFacetResult),
    RadioList(ValueListFacetResult),
    Range(RangeFacetResult),
    MediaList(MediaListFacetResult),
    Tree(TreeFacetResult),
}

impl PartialFacetResult {
    pub fn facet_name(&self) -> &str {
        match self {
            Self::ValueList(r) | Self::RadioList(r) => &r.facet_name,
            Self::Range(r) => &r.facet_name,
            Self::MediaList(r) => &r.facet_name,
            Self::Tree(r) => &r.facet_name,
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::ValueList(r) | Self::RadioList(r) => r.active,
            Self::Range(r) => r.active,
            Self::MediaList(r) => r.active,
            Self::Tree(r) => r.active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueListItem {
    pub id: String,
    pub label: String,
    pub active: bool,
    pub frequency: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueListFacetResult {
    pub facet_name: String,
    pub active: bool,
    pub label: String,
    pub items: Vec<ValueListItem>,
    pub field_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeFacetResult {
    pub facet_name: String,
    pub active: bool,
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub active_min: f64,
    pub active_max: f64,
    pub min_field_name: String,
    pub max_field_name: String,
    pub unit: Option<String>,
    pub step_size: Option<f64>,
}

/// Entry of an image or color swatch list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaListItem {
    pub id: String,
    pub label: String,
    pub active: bool,
    pub image: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaListFacetResult {
    pub facet_name: String,
    pub active: bool,
    pub label: String,
    pub items: Vec<MediaListItem>,
    pub field_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeItem {
    pub id: String,
    pub label: String,
    pub active: bool,
    pub frequency: Option<u32>,
    pub children: Vec<TreeItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeFacetResult {
    pub facet_name: String,
    pub active: bool,
    pub label: String,
    pub items: Vec<TreeItem>,
    pub field_name: String,
}
