//! Source hierarchy and its JSON decoding

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, TransferError};

/// Field names used to read items out of a JSON source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    pub key: String,
    pub title: String,
    pub children: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            key: "key".to_string(),
            title: "title".to_string(),
            children: "children".to_string(),
        }
    }
}

impl FieldNames {
    pub fn new(key: &str, title: &str, children: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            children: children.to_string(),
        }
    }
}

/// A node of the candidate hierarchy.
///
/// `children: None` marks a leaf. `Some(vec![])` is a branch that happens to
/// be empty and is never selectable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceItem {
    pub key: String,
    pub title: String,
    pub children: Option<Vec<SourceItem>>,
    /// Any other fields of the input object, carried through untouched
    pub attributes: Map<String, Value>,
}

impl SourceItem {
    pub fn leaf(key: &str, title: &str) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            children: None,
            attributes: Map::new(),
        }
    }

    pub fn branch(key: &str, title: &str, children: Vec<SourceItem>) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            children: Some(children),
            attributes: Map::new(),
        }
    }

    pub fn with_attribute(mut self, name: &str, value: Value) -> Self {
        self.attributes.insert(name.to_string(), value);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

/// Read and decode a source file
pub fn load_source(path: &Path, fields: &FieldNames) -> Result<Vec<SourceItem>> {
    let content = std::fs::read_to_string(path)?;
    parse_source_str(&content, fields)
}

/// Decode a source from JSON text
pub fn parse_source_str(content: &str, fields: &FieldNames) -> Result<Vec<SourceItem>> {
    let value: Value = serde_json::from_str(content)?;
    parse_source(&value, fields)
}

/// Decode a source from an already parsed JSON value
pub fn parse_source(value: &Value, fields: &FieldNames) -> Result<Vec<SourceItem>> {
    match value {
        Value::Array(items) => parse_items(items, fields, ""),
        other => Err(TransferError::NotAnArray(json_kind(other))),
    }
}

fn parse_items(items: &[Value], fields: &FieldNames, prefix: &str) -> Result<Vec<SourceItem>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_item(item, fields, &format!("{}[{}]", prefix, i)))
        .collect()
}

fn parse_item(value: &Value, fields: &FieldNames, path: &str) -> Result<SourceItem> {
    let Value::Object(object) = value else {
        return Err(TransferError::NotAnObject {
            path: path.to_string(),
        });
    };

    let key = object
        .get(&fields.key)
        .and_then(scalar_to_string)
        .ok_or_else(|| TransferError::MissingKey {
            path: path.to_string(),
            field: fields.key.clone(),
        })?;

    let title = object
        .get(&fields.title)
        .and_then(scalar_to_string)
        .unwrap_or_default();

    let children = match object.get(&fields.children) {
        None => None,
        Some(Value::Array(items)) => Some(parse_items(
            items,
            fields,
            &format!("{}.{}", path, fields.children),
        )?),
        Some(_) => {
            return Err(TransferError::InvalidChildren {
                path: path.to_string(),
                field: fields.children.clone(),
            })
        }
    };

    let attributes = object
        .iter()
        .filter(|(name, _)| {
            **name != fields.key && **name != fields.title && **name != fields.children
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(SourceItem {
        key,
        title,
        children,
        attributes,
    })
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_nested_items_with_default_fields() {
        let value = json!([
            {"key": "a", "title": "Alpha", "children": [
                {"key": "a1", "title": "One"},
                {"key": "a2", "title": "Two", "disabled": true}
            ]}
        ]);

        let items = parse_source(&value, &FieldNames::default()).unwrap();
        assert_eq!(items.len(), 1);
        assert!(!items[0].is_leaf());

        let children = items[0].children.as_ref().unwrap();
        assert_eq!(children[0], SourceItem::leaf("a1", "One"));
        assert_eq!(children[1].attributes.get("disabled"), Some(&json!(true)));
    }

    #[test]
    fn decodes_custom_field_names() {
        let fields = FieldNames::new("id", "name", "items");
        let value = json!([{"id": 7, "name": "Seven", "items": [{"id": "x", "name": "X"}]}]);

        let items = parse_source(&value, &fields).unwrap();
        assert_eq!(items[0].key, "7");
        assert_eq!(items[0].title, "Seven");
        assert_eq!(items[0].children.as_ref().unwrap()[0].key, "x");
        assert!(items[0].attributes.is_empty());
    }

    #[test]
    fn empty_children_array_is_a_branch() {
        let value = json!([{"key": "g", "title": "Group", "children": []}]);
        let items = parse_source(&value, &FieldNames::default()).unwrap();
        assert_eq!(items[0].children, Some(Vec::new()));
        assert!(!items[0].is_leaf());
    }

    #[test]
    fn missing_title_decodes_as_empty() {
        let items = parse_source(&json!([{"key": "k"}]), &FieldNames::default()).unwrap();
        assert_eq!(items[0].title, "");
    }

    #[test]
    fn reports_path_of_missing_key() {
        let value = json!([{"key": "a", "children": [{"title": "orphan"}]}]);
        let err = parse_source(&value, &FieldNames::default()).unwrap_err();
        match err {
            TransferError::MissingKey { path, field } => {
                assert_eq!(path, "[0].children[0]");
                assert_eq!(field, "key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_array_source_and_bad_children() {
        assert!(matches!(
            parse_source(&json!({"key": "a"}), &FieldNames::default()),
            Err(TransferError::NotAnArray("an object"))
        ));
        assert!(matches!(
            parse_source(&json!([{"key": "a", "children": 3}]), &FieldNames::default()),
            Err(TransferError::InvalidChildren { .. })
        ));
        assert!(matches!(
            parse_source(&json!(["a"]), &FieldNames::default()),
            Err(TransferError::NotAnObject { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.json");
        std::fs::write(&path, r#"[{"key": "a", "title": "Alpha"}]"#).unwrap();

        let items = load_source(&path, &FieldNames::default()).unwrap();
        assert_eq!(items, vec![SourceItem::leaf("a", "Alpha")]);
    }
}
