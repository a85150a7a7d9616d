pub mod provider;

use serde::{Deserialize, Serialize};

pub const GRID_ITEMS_MIN: u8 = 3;
pub const GRID_ITEMS_MAX: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    #[default]
    Grid,
    List,
    Table,
}

impl ViewStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewStyle::Grid => "grid",
            ViewStyle::List => "list",
            ViewStyle::Table => "table",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    #[default]
    Published,
    Downloaded,
    Views,
    Likes,
    Duration,
    Mediasize,
}

impl SortBy {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortBy::Published => "Date published",
            SortBy::Downloaded => "Date downloaded",
            SortBy::Views => "Views",
            SortBy::Likes => "Likes",
            SortBy::Duration => "Duration",
            SortBy::Mediasize => "Media size",
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![
            SortBy::Published,
            SortBy::Downloaded,
            SortBy::Views,
            SortBy::Likes,
            SortBy::Duration,
            SortBy::Mediasize,
        ]
    }

    // Keys used both as query values and in <option value="...">.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Published => "published",
            SortBy::Downloaded => "downloaded",
            SortBy::Views => "views",
            SortBy::Likes => "likes",
            SortBy::Duration => "duration",
            SortBy::Mediasize => "mediasize",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all_variants().into_iter().find(|sb| sb.as_str() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileSizeUnit {
    #[default]
    Binary,
    Metric,
}

/// Per-user display preferences stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    pub page_size: u32,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
    pub view_style_home: ViewStyle,
    pub grid_items: u8,
    pub hide_watched: bool,
    pub file_size_unit: FileSizeUnit,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            page_size: 12,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            view_style_home: ViewStyle::default(),
            grid_items: GRID_ITEMS_MIN,
            hide_watched: false,
            file_size_unit: FileSizeUnit::default(),
        }
    }
}

impl UserConfig {
    pub fn uses_si_units(&self) -> bool {
        self.file_size_unit == FileSizeUnit::Metric
    }

    pub fn apply(&mut self, patch: &UserConfigPatch) {
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(sort_order) = patch.sort_order {
            self.sort_order = sort_order;
        }
        if let Some(view_style) = patch.view_style_home {
            self.view_style_home = view_style;
        }
        if let Some(grid_items) = patch.grid_items {
            self.grid_items = grid_items.clamp(GRID_ITEMS_MIN, GRID_ITEMS_MAX);
        }
        if let Some(hide_watched) = patch.hide_watched {
            self.hide_watched = hide_watched;
        }
        if let Some(unit) = patch.file_size_unit {
            self.file_size_unit = unit;
        }
    }
}

/// Partial update; only the set fields are sent to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct UserConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_style_home: Option<ViewStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_items: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_watched: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size_unit: Option<FileSizeUnit>,
}
