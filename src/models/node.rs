//! Render-ready tree nodes and list entries

use serde::Serialize;
use serde_json::{Map, Value};

/// Node title, optionally split around a search match
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Title {
    Plain(String),
    Highlighted {
        before: String,
        matched: String,
        after: String,
    },
}

impl Title {
    /// Split `title` around the first occurrence of `term`.
    ///
    /// Returns a plain title when `term` is empty or not found.
    pub fn highlight(title: &str, term: &str) -> Self {
        if term.is_empty() {
            return Self::Plain(title.to_string());
        }
        match title.find(term) {
            Some(idx) => Self::Highlighted {
                before: title[..idx].to_string(),
                matched: term.to_string(),
                after: title[idx + term.len()..].to_string(),
            },
            None => Self::Plain(title.to_string()),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Highlighted { .. })
    }

    /// Full text with the highlight removed
    pub fn text(&self) -> String {
        match self {
            Self::Plain(s) => s.clone(),
            Self::Highlighted {
                before,
                matched,
                after,
            } => format!("{}{}{}", before, matched, after),
        }
    }
}

/// A tree node as the left pane renders it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeNode {
    pub key: String,
    pub title: Title,
    pub is_leaf: bool,
    pub children: Vec<TreeNode>,
    pub attributes: Map<String, Value>,
}

impl TreeNode {
    /// Keys of every leaf below this node, or the node itself if it is a leaf
    pub fn leaf_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_leaf_keys(&mut keys);
        keys
    }

    fn collect_leaf_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        if self.is_leaf {
            keys.push(&self.key);
        } else {
            for child in &self.children {
                child.collect_leaf_keys(keys);
            }
        }
    }

    /// Whether `key` names this node or any node below it
    pub fn contains_key(&self, key: &str) -> bool {
        self.key == key || self.children.iter().any(|c| c.contains_key(key))
    }
}

/// A row of the right pane
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub key: String,
    pub title: String,
}

impl ListEntry {
    pub fn new(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_splits_first_occurrence() {
        let title = Title::highlight("banana", "an");
        assert_eq!(
            title,
            Title::Highlighted {
                before: "b".to_string(),
                matched: "an".to_string(),
                after: "ana".to_string(),
            }
        );
        assert_eq!(title.text(), "banana");
    }

    #[test]
    fn highlight_is_case_sensitive() {
        assert!(!Title::highlight("Alpha", "alpha").is_highlighted());
        assert!(Title::highlight("Alpha", "Al").is_highlighted());
    }

    #[test]
    fn empty_term_never_highlights() {
        assert_eq!(Title::highlight("Alpha", ""), Title::Plain("Alpha".to_string()));
    }

    #[test]
    fn highlight_handles_multibyte_titles() {
        let title = Title::highlight("源数据列表", "数据");
        assert_eq!(
            title,
            Title::Highlighted {
                before: "源".to_string(),
                matched: "数据".to_string(),
                after: "列表".to_string(),
            }
        );
    }
}
