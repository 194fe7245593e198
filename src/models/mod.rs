pub mod node;
pub mod source;

pub use node::{ListEntry, Title, TreeNode};
pub use source::{load_source, parse_source, parse_source_str, FieldNames, SourceItem};
