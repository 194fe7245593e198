//! Derivation of the tree, list and leaf set from the source

use crate::models::{ListEntry, SourceItem, Title, TreeNode};

/// Everything derived from one pass over the source
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generated {
    pub tree: Vec<TreeNode>,
    pub list_data: Vec<ListEntry>,
    pub leaf_keys: Vec<String>,
    /// Leaves whose title matched the search term
    pub expanded_keys: Vec<String>,
}

impl Generated {
    pub fn list_keys(&self) -> Vec<String> {
        self.list_data.iter().map(|e| e.key.clone()).collect()
    }

    pub fn is_leaf(&self, key: &str) -> bool {
        self.leaf_keys.iter().any(|k| k == key)
    }
}

/// Walk `source` depth-first and build the derived data.
///
/// Matching only happens when `show_search` is on and `search` is non-empty.
pub fn generate(
    source: &[SourceItem],
    target: &[String],
    search: &str,
    show_search: bool,
) -> Generated {
    let term = if show_search && !search.is_empty() {
        Some(search)
    } else {
        None
    };

    let mut out = Generated::default();
    let tree = walk(source, target, term, &mut out);
    out.tree = tree;
    out
}

fn walk(
    items: &[SourceItem],
    target: &[String],
    term: Option<&str>,
    out: &mut Generated,
) -> Vec<TreeNode> {
    items
        .iter()
        .map(|item| match &item.children {
            None => {
                out.leaf_keys.push(item.key.clone());

                let title = match term {
                    Some(term) if item.title.contains(term) => {
                        out.expanded_keys.push(item.key.clone());
                        Title::highlight(&item.title, term)
                    }
                    _ => Title::Plain(item.title.clone()),
                };

                if target.contains(&item.key) {
                    out.list_data.push(ListEntry::new(&item.key, &item.title));
                }

                TreeNode {
                    key: item.key.clone(),
                    title,
                    is_leaf: true,
                    children: Vec::new(),
                    attributes: item.attributes.clone(),
                }
            }
            Some(children) => TreeNode {
                key: item.key.clone(),
                title: Title::Plain(item.title.clone()),
                is_leaf: false,
                children: walk(children, target, term, out),
                attributes: item.attributes.clone(),
            },
        })
        .collect()
}
