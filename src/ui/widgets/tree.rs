//! Tree flattening and cursor handling

use crate::models::TreeNode;

/// One visible line of the tree pane
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub node: &'a TreeNode,
    pub depth: usize,
    pub expanded: bool,
}

impl VisibleRow<'_> {
    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf
    }
}

/// Open branches given the expanded keys.
///
/// With `auto_expand_parent` every ancestor of an expanded key opens too.
pub fn open_keys(tree: &[TreeNode], expanded: &[String], auto_expand_parent: bool) -> Vec<String> {
    let mut open: Vec<String> = expanded.to_vec();
    if auto_expand_parent {
        for key in expanded {
            for ancestor in ancestors(tree, key) {
                if !open.contains(&ancestor) {
                    open.push(ancestor);
                }
            }
        }
    }
    open
}

/// Depth-first list of the rows that are currently visible
pub fn flatten<'a>(tree: &'a [TreeNode], open: &[String]) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    flatten_into(tree, open, 0, &mut rows);
    rows
}

fn flatten_into<'a>(
    nodes: &'a [TreeNode],
    open: &[String],
    depth: usize,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    for node in nodes {
        let expanded = !node.is_leaf && open.contains(&node.key);
        rows.push(VisibleRow {
            node,
            depth,
            expanded,
        });
        if expanded {
            flatten_into(&node.children, open, depth + 1, rows);
        }
    }
}

/// Keys of the branches enclosing `key`, outermost first
pub fn ancestors(tree: &[TreeNode], key: &str) -> Vec<String> {
    for node in tree {
        if node.key == key {
            return Vec::new();
        }
        if node.children.iter().any(|c| c.contains_key(key)) {
            let mut chain = vec![node.key.clone()];
            chain.extend(ancestors(&node.children, key));
            return chain;
        }
    }
    Vec::new()
}

/// New expanded set after the user opens or closes `key`
pub fn toggle_open(open: &[String], key: &str) -> Vec<String> {
    if open.iter().any(|k| k == key) {
        open.iter().filter(|k| *k != key).cloned().collect()
    } else {
        let mut next = open.to_vec();
        next.push(key.to_string());
        next
    }
}

/// Cursor and scroll position of a pane
#[derive(Debug, Clone, Default)]
pub struct PaneCursor {
    pub selected: usize,
    pub offset: usize,
}

impl PaneCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move by `delta` rows; `i32::MIN`/`i32::MAX` jump to the ends
    pub fn move_by(&mut self, delta: i32, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        self.selected = if delta == i32::MIN {
            0
        } else if delta == i32::MAX {
            len - 1
        } else {
            (self.selected as i64 + delta as i64).clamp(0, len as i64 - 1) as usize
        };
    }

    /// Keep the cursor inside `len` rows
    pub fn clamp(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    /// Adjust the offset so the cursor is within a window of `height` rows
    pub fn scroll_into_view(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + height {
            self.offset = self.selected + 1 - height;
        }
    }
}
