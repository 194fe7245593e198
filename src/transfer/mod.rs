//! Tree transfer control logic

pub mod component;
pub mod generate;
pub mod props;
pub mod state;

pub use component::TreeTransfer;
pub use generate::{generate, Generated};
pub use props::TransferProps;
pub use state::{count_label, CheckMark, TransferEvent, TransferState, Transition};
