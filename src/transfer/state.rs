//! Selection state and its reducer

use crate::models::{ListEntry, TreeNode};
use crate::transfer::generate::{generate, Generated};
use crate::transfer::props::TransferProps;

/// Events the control reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferEvent {
    /// Owner supplied new source/target
    PropsChanged,

    // Check boxes
    TreeCheck(Vec<String>),
    ListCheck { checked: bool, keys: Vec<String> },

    // Search boxes
    TreeSearch(String),
    ListSearch(String),

    /// User expanded or collapsed a branch; carries the full new expanded set
    TreeExpand(Vec<String>),

    // Operation buttons
    MoveRight,
    MoveLeft,
}

/// Tri-state check box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMark {
    Unchecked,
    Partial,
    Checked,
}

/// Result of applying one event
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: TransferState,
    /// New target set to hand to the owner, if the event produced one
    pub change: Option<Vec<String>>,
}

/// Widget-local state
#[derive(Debug, Clone, PartialEq)]
pub struct TransferState {
    pub generated: Generated,
    pub tree_checked_keys: Vec<String>,
    pub list_checked_keys: Vec<String>,
    pub tree_expanded_keys: Vec<String>,
    /// Reveal ancestors of expanded keys; cleared by a manual expand/collapse
    pub tree_auto_expand_parent: bool,
    pub tree_search: String,
    pub list_search: String,
}

impl TransferState {
    pub fn new(props: &TransferProps) -> Self {
        let generated = generate(&props.source, &props.target, "", props.show_search);
        let tree_checked_keys = generated.list_keys();
        Self {
            tree_expanded_keys: tree_checked_keys.clone(),
            tree_checked_keys,
            generated,
            list_checked_keys: Vec::new(),
            tree_auto_expand_parent: true,
            tree_search: String::new(),
            list_search: String::new(),
        }
    }

    /// Apply `event` without touching `self`
    pub fn reduce(&self, props: &TransferProps, event: TransferEvent) -> Transition {
        let mut state = self.clone();
        let mut change = None;

        match event {
            TransferEvent::PropsChanged => {
                state.generated = generate(
                    &props.source,
                    &props.target,
                    &state.tree_search,
                    props.show_search,
                );
                state.tree_checked_keys = state.generated.list_keys();
                // Rows that left the target can no longer be checked
                let list_keys = &state.tree_checked_keys;
                state.list_checked_keys.retain(|k| list_keys.contains(k));
            }

            TransferEvent::TreeCheck(keys) => {
                state.tree_checked_keys = keys
                    .into_iter()
                    .filter(|k| state.generated.is_leaf(k))
                    .collect();
            }

            TransferEvent::ListCheck { checked, keys } => {
                if checked {
                    state.list_checked_keys = uniq(state.list_checked_keys.into_iter().chain(keys));
                } else {
                    state.list_checked_keys.retain(|k| !keys.contains(k));
                }
            }

            TransferEvent::TreeSearch(term) => {
                state.tree_search = term;
                state.generated = generate(
                    &props.source,
                    &props.target,
                    &state.tree_search,
                    props.show_search,
                );
                state.tree_checked_keys = state.generated.list_keys();
                state.tree_expanded_keys = uniq(
                    state
                        .tree_checked_keys
                        .iter()
                        .chain(&state.generated.expanded_keys)
                        .cloned(),
                );
                state.tree_auto_expand_parent = true;
            }

            TransferEvent::ListSearch(term) => {
                state.list_search = term;
            }

            TransferEvent::TreeExpand(keys) => {
                state.tree_expanded_keys = keys;
                state.tree_auto_expand_parent = false;
            }

            TransferEvent::MoveRight => {
                if self.right_disabled() {
                    tracing::debug!("Move right ignored: nothing would change");
                } else {
                    change = Some(self.tree_checked_keys.clone());
                }
            }

            TransferEvent::MoveLeft => {
                if self.left_disabled() {
                    tracing::debug!("Move left ignored: no rows checked");
                } else {
                    change = Some(
                        self.generated
                            .list_data
                            .iter()
                            .map(|e| e.key.clone())
                            .filter(|k| !self.list_checked_keys.contains(k))
                            .collect(),
                    );
                    state.list_checked_keys.clear();
                }
            }
        }

        Transition { state, change }
    }

    pub fn tree(&self) -> &[TreeNode] {
        &self.generated.tree
    }

    pub fn list_data(&self) -> &[ListEntry] {
        &self.generated.list_data
    }

    pub fn leaf_keys(&self) -> &[String] {
        &self.generated.leaf_keys
    }

    /// Right button is disabled when the checked leaves already equal the target list
    pub fn right_disabled(&self) -> bool {
        let list_keys = self.generated.list_keys();
        self.tree_checked_keys.iter().all(|k| list_keys.contains(k))
            && list_keys.iter().all(|k| self.tree_checked_keys.contains(k))
    }

    pub fn left_disabled(&self) -> bool {
        self.list_checked_keys.is_empty()
    }

    /// Rows of the right pane after the list search filter
    pub fn visible_list(&self, props: &TransferProps) -> Vec<&ListEntry> {
        self.generated
            .list_data
            .iter()
            .filter(|e| !props.show_search || e.title.contains(&self.list_search))
            .collect()
    }

    pub fn header_check(&self) -> CheckMark {
        let checked = self.list_checked_keys.len();
        let total = self.generated.list_data.len();
        if checked > 0 && checked == total {
            CheckMark::Checked
        } else if checked > 0 && checked < total {
            CheckMark::Partial
        } else {
            CheckMark::Unchecked
        }
    }

    /// Event produced by clicking the header check box
    pub fn header_toggle(&self) -> TransferEvent {
        TransferEvent::ListCheck {
            checked: self.header_check() != CheckMark::Checked,
            keys: self.generated.list_keys(),
        }
    }

    /// Event produced by clicking the check box of one list row
    pub fn list_row_toggle(&self, key: &str) -> TransferEvent {
        TransferEvent::ListCheck {
            checked: !self.list_checked_keys.iter().any(|k| k == key),
            keys: vec![key.to_string()],
        }
    }

    /// Check mark of a tree node; branches reflect their leaves
    pub fn tree_check_mark(&self, node: &TreeNode) -> CheckMark {
        let leaves = node.leaf_keys();
        let checked = leaves
            .iter()
            .filter(|k| self.tree_checked_keys.iter().any(|c| c == *k))
            .count();
        if leaves.is_empty() || checked == 0 {
            CheckMark::Unchecked
        } else if checked == leaves.len() {
            CheckMark::Checked
        } else {
            CheckMark::Partial
        }
    }

    /// Event produced by clicking the check box of a tree node.
    ///
    /// A fully checked node drops all of its leaves, otherwise they are all added.
    pub fn tree_node_toggle(&self, node: &TreeNode) -> TransferEvent {
        let leaves = node.leaf_keys();
        let keys = if self.tree_check_mark(node) == CheckMark::Checked {
            self.tree_checked_keys
                .iter()
                .filter(|k| !leaves.contains(&k.as_str()))
                .cloned()
                .collect()
        } else {
            uniq(
                self.tree_checked_keys
                    .iter()
                    .cloned()
                    .chain(leaves.iter().map(|k| k.to_string())),
            )
        };
        TransferEvent::TreeCheck(keys)
    }
}

/// Header counter: `"3/10 items"`, or `"10 items"` when nothing is checked
pub fn count_label(checked: usize, total: usize) -> String {
    if checked > 0 {
        format!("{}/{} items", checked, total)
    } else {
        format!("{} items", total)
    }
}

/// Deduplicate keeping first occurrences
fn uniq(keys: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for key in keys {
        if !out.contains(&key) {
            out.push(key);
        }
    }
    out
}
