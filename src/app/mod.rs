pub mod actions;
pub mod events;
