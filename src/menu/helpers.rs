//! Navigation Menu Business Logic Helpers
//!
//! This module contains the pure tree-assembly core that turns the flat,
//! parent-referencing menu record list into the two-level navigation tree
//! the frontend renders.

use super::models::{MenuItem, MenuTreeNode};
use std::collections::HashMap;
use tracing::warn;

/// Builds the two-level navigation tree from a flat record list.
///
/// # Behaviour
///
/// * Top-level nodes are sorted ascending by `(order_position, id)`; each
///   node's children are sorted the same way, independently.
/// * Duplicate `id` values resolve last-write-wins and are logged as a
///   data-quality warning.
/// * An item whose `parent_id` equals its own `id`, or whose parent is not
///   present in the list, is promoted to top-level. This can never create a
///   cycle.
/// * An item whose parent is itself a child (a third nesting level) is
///   dropped from the tree and logged; the output forest always has depth
///   at most two.
///
/// Pure function of its input, deterministic and idempotent; an empty list
/// yields an empty forest.
pub fn build_menu_tree(items: &[MenuItem]) -> Vec<MenuTreeNode> {
    // Pass 1: identity-keyed lookup, last write wins on duplicate ids.
    let mut by_id: HashMap<i64, &MenuItem> = HashMap::with_capacity(items.len());
    for item in items {
        if by_id.insert(item.id, item).is_some() {
            warn!(id = item.id, "duplicate menu item id, keeping the later record");
        }
    }

    // Pass 2: classify each surviving record as a root or a child of a root.
    let mut roots: Vec<MenuTreeNode> = Vec::new();
    let mut children_of: HashMap<i64, Vec<MenuItem>> = HashMap::new();

    for item in by_id.values().copied() {
        let parent = match item.parent_id {
            None => None,
            // Self-reference: treat as if the parent lookup failed.
            Some(parent_id) if parent_id == item.id => None,
            Some(parent_id) => by_id.get(&parent_id).copied(),
        };

        match parent {
            None => {
                if item.parent_id.is_some_and(|p| p != item.id) {
                    warn!(
                        id = item.id,
                        parent = ?item.parent_id,
                        "menu item references a missing parent, promoting to top level"
                    );
                }
                roots.push(MenuTreeNode::new(item.clone()));
            }
            Some(parent) if is_top_level(parent, &by_id) => {
                children_of.entry(parent.id).or_default().push(item.clone());
            }
            Some(parent) => {
                warn!(
                    id = item.id,
                    parent = parent.id,
                    "menu item nests deeper than two levels, dropping"
                );
            }
        }
    }

    // Attach and order.
    roots.sort_by_key(|node| (node.item.order_position, node.item.id));
    for root in &mut roots {
        if let Some(mut kids) = children_of.remove(&root.item.id) {
            kids.sort_by_key(|kid| (kid.order_position, kid.id));
            root.children = kids.into_iter().map(MenuTreeNode::new).collect();
        }
    }

    roots
}

/// True when the record will land at depth 1 of the tree
fn is_top_level(item: &MenuItem, by_id: &HashMap<i64, &MenuItem>) -> bool {
    match item.parent_id {
        None => true,
        Some(parent_id) if parent_id == item.id => true,
        Some(parent_id) => !by_id.contains_key(&parent_id),
    }
}
