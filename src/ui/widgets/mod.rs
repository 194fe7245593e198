pub mod searchbar;
pub mod tree;
