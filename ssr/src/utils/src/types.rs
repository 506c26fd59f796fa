use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use crate::profile::Platform;

/// Rendered in place of a missing value
pub const PLACEHOLDER: &str = "—";

#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(Option<String>),
    /// Handle linking out to the judge's profile page
    Handle { platform: Platform, handle: String },
}

impl Cell {
    pub fn text(value: impl ToString) -> Self {
        Self::Text(Some(value.to_string()))
    }

    pub fn maybe(value: Option<impl ToString>) -> Self {
        Self::Text(value.map(|v| v.to_string()))
    }

    pub fn display(&self) -> String {
        match self {
            Self::Text(Some(text)) => text.clone(),
            Self::Text(None) => PLACEHOLDER.to_string(),
            Self::Handle { handle, .. } if handle.is_empty() => PLACEHOLDER.to_string(),
            Self::Handle { handle, .. } => handle.clone(),
        }
    }
}

/// A row that can be laid out by the ratings and contest tables
pub trait TableRow: Clone + Send + Sync + 'static {
    fn cells(&self) -> Vec<Cell>;

    fn row_key(&self) -> String;
}

pub(crate) fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Accepts strings, numbers or null for fields the backend does not type consistently
pub(crate) fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Option::<Value>::deserialize(d)?;
    Ok(value.as_ref().and_then(value_text))
}

/// A list field that may be absent or not an array; unreadable entries are skipped
pub(crate) fn lenient_list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "lenient_text")]
        field: Option<String>,
        #[serde(default, deserialize_with = "lenient_list")]
        items: Vec<u32>,
    }

    #[test]
    fn lenient_fields_accept_mixed_json() {
        let p: Probe = serde_json::from_str(r#"{"field": 12, "items": [1, "x", 3]}"#).unwrap();
        assert_eq!(p.field.as_deref(), Some("12"));
        assert_eq!(p.items, vec![1, 3]);

        let p: Probe = serde_json::from_str(r#"{"field": null, "items": {"a": 1}}"#).unwrap();
        assert_eq!(p.field, None);
        assert!(p.items.is_empty());

        let p: Probe = serde_json::from_str("{}").unwrap();
        assert_eq!(p.field, None);
        assert!(p.items.is_empty());
    }

    #[test]
    fn cell_display_falls_back_to_placeholder() {
        assert_eq!(Cell::Text(None).display(), PLACEHOLDER);
        assert_eq!(Cell::text(1500).display(), "1500");
        let empty = Cell::Handle {
            platform: Platform::AtCoder,
            handle: String::new(),
        };
        assert_eq!(empty.display(), PLACEHOLDER);
    }
}
