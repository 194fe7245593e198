//! Dual-pane tree transfer control.
//!
//! The left pane is a checkable tree of candidate items, the right pane the
//! flat list of items already selected. [`TransferState::reduce`] is a pure
//! reducer over the selection; [`TreeTransfer`] wraps it with props and a
//! change callback; [`ui::TransferView`] renders it with `ratatui`.

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod transfer;
pub mod ui;

pub use error::TransferError;
pub use models::{FieldNames, ListEntry, SourceItem, Title, TreeNode};
pub use transfer::{
    generate, CheckMark, Generated, TransferEvent, TransferProps, TransferState, Transition,
    TreeTransfer,
};
