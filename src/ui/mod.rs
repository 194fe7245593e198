pub mod app;
pub mod layout;
pub mod theme;
pub mod transfer_view;
pub mod widgets;

pub use theme::Theme;
pub use transfer_view::{Pane, TransferView};
