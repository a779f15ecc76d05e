//! Navigation Menu Domain Models

use serde::{Deserialize, Serialize};

/// Flat navigational record with an optional parent reference.
///
/// `title`, `url`, and `icon` are display attributes, opaque to the tree
/// builder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Unique identifier
    pub id: i64,

    /// Parent item id; absent means top-level
    #[serde(default)]
    pub parent_id: Option<i64>,

    /// Sibling ordering key (ties broken by `id` ascending)
    #[serde(default)]
    pub order_position: i32,

    pub title: String,
    pub url: String,

    #[serde(default)]
    pub icon: Option<String>,
}

/// A menu item plus its ordered children (always empty at depth 2).
///
/// Built fresh on every call; never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MenuTreeNode {
    /// The underlying record, flattened into the node on the wire
    #[serde(flatten)]
    pub item: MenuItem,

    /// Ordered direct children
    pub children: Vec<MenuTreeNode>,
}

impl MenuTreeNode {
    /// Wraps a record as a leaf node with no children yet
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            children: Vec::new(),
        }
    }
}

/// Input for the sync_menu endpoint
#[derive(Debug, Deserialize)]
pub struct SyncMenuInput {
    /// Full flat menu record list as managed by the admin screens
    pub items: Vec<MenuItem>,
}

/// Response for menu synchronization
#[derive(Serialize)]
pub struct MenuSyncResponse {
    /// Status of the operation
    pub status: String,

    /// Number of records now stored
    pub count: usize,
}

/// Response for the menu_tree endpoint
#[derive(Serialize)]
pub struct MenuTreeResponse {
    /// Ordered top-level nodes with their ordered children
    pub menu: Vec<MenuTreeNode>,
}
