//! Control configuration

use crate::models::{FieldNames, SourceItem};

/// Inputs the owner of the control supplies
#[derive(Debug, Clone, PartialEq)]
pub struct TransferProps {
    /// Candidate hierarchy
    pub source: Vec<SourceItem>,
    /// Keys currently selected
    pub target: Vec<String>,
    /// Field accessors used when the source is decoded from JSON
    pub fields: FieldNames,
    /// Display-only count shown in the left header
    pub source_total: usize,
    pub source_title: String,
    pub target_title: String,
    pub show_search: bool,
    /// Extra styling hook, resolved to a theme variant by the renderer
    pub class_name: Option<String>,
}

impl Default for TransferProps {
    fn default() -> Self {
        Self {
            source: Vec::new(),
            target: Vec::new(),
            fields: FieldNames::default(),
            source_total: 0,
            source_title: "Source".to_string(),
            target_title: "Target".to_string(),
            show_search: false,
            class_name: None,
        }
    }
}

impl TransferProps {
    pub fn new(source: Vec<SourceItem>, target: Vec<String>) -> Self {
        Self {
            source,
            target,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, show_search: bool) -> Self {
        self.show_search = show_search;
        self
    }

    pub fn with_titles(mut self, source_title: &str, target_title: &str) -> Self {
        self.source_title = source_title.to_string();
        self.target_title = target_title.to_string();
        self
    }

    pub fn with_source_total(mut self, total: usize) -> Self {
        self.source_total = total;
        self
    }

    pub fn with_class_name(mut self, class_name: &str) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }
}
