//! Typed front matter.
//!
//! Only `author_keys` and `sidebar` are interpreted; every other key is kept
//! in [`FrontMatter::extra`] untouched.

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

/// Error parsing a front matter block.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum FrontMatterError {
    /// The block is not valid YAML or is not a mapping.
    #[error("invalid front matter YAML")]
    Yaml(#[from] serde_yaml::Error),
}

/// Metadata parsed from the block preceding the Markdown body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct FrontMatter {
    /// Confluence user keys of the page authors, in display order.
    #[serde(default, deserialize_with = "lenient_author_keys")]
    pub author_keys: Vec<String>,

    /// Render the page with a sidebar column holding the ToC and authors.
    #[serde(default, deserialize_with = "lenient_flag")]
    pub sidebar: bool,

    /// Keys not consumed by the renderer.
    #[serde(flatten)]
    pub extra: Mapping,
}

impl FrontMatter {
    /// Parse front matter from YAML.
    ///
    /// Blank input yields the default. Anything that is not a YAML mapping
    /// is rejected.
    pub fn from_yaml(content: &str) -> Result<Self, FrontMatterError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(trimmed)?)
    }

    /// Parse front matter, falling back to the default on any error.
    pub fn parse_lenient(content: &str) -> Self {
        match Self::from_yaml(content) {
            Ok(front_matter) => front_matter,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed front matter");
                Self::default()
            }
        }
    }
}

/// Accept a sequence of scalars, a single scalar, or null.
fn lenient_author_keys<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_to_string).collect(),
        Some(value) => scalar_to_string(&value).into_iter().collect(),
        None => Vec::new(),
    };
    Ok(keys)
}

/// Accept booleans plus the YAML 1.1 spellings (`yes`, `on`, ...).
fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => b,
        Some(Value::String(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "y"
        ),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| n != 0),
        _ => false,
    };
    Ok(flag)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_yaml_empty_is_default() {
        assert_eq!(FrontMatter::from_yaml("").unwrap(), FrontMatter::default());
        assert_eq!(
            FrontMatter::from_yaml("  \n\t ").unwrap(),
            FrontMatter::default()
        );
    }

    #[test]
    fn test_from_yaml_all_fields() {
        let fm = FrontMatter::from_yaml("author_keys:\n  - u1\n  - u2\nsidebar: true\n").unwrap();
        assert_eq!(fm.author_keys, vec!["u1".to_owned(), "u2".to_owned()]);
        assert!(fm.sidebar);
        assert!(fm.extra.is_empty());
    }

    #[test]
    fn test_from_yaml_flow_sequence() {
        let fm = FrontMatter::from_yaml("author_keys: [a1, a2]").unwrap();
        assert_eq!(fm.author_keys, vec!["a1".to_owned(), "a2".to_owned()]);
        assert!(!fm.sidebar);
    }

    #[test]
    fn test_from_yaml_missing_fields_default() {
        let fm = FrontMatter::from_yaml("title: Hello").unwrap();
        assert!(fm.author_keys.is_empty());
        assert!(!fm.sidebar);
    }

    #[test]
    fn test_from_yaml_preserves_unknown_keys() {
        let fm = FrontMatter::from_yaml("title: Hello\ntags: [a, b]\nsidebar: false").unwrap();
        assert_eq!(fm.extra.len(), 2);
        assert_eq!(
            fm.extra.get("title"),
            Some(&Value::String("Hello".to_owned()))
        );
        assert!(fm.extra.contains_key("tags"));
    }

    #[test]
    fn test_author_keys_null_is_empty() {
        let fm = FrontMatter::from_yaml("author_keys:\nsidebar: true").unwrap();
        assert!(fm.author_keys.is_empty());
        assert!(fm.sidebar);
    }

    #[test]
    fn test_author_keys_single_scalar() {
        let fm = FrontMatter::from_yaml("author_keys: jdoe").unwrap();
        assert_eq!(fm.author_keys, vec!["jdoe".to_owned()]);
    }

    #[test]
    fn test_author_keys_numeric_entries_stringified() {
        let fm = FrontMatter::from_yaml("author_keys: [12345, abc, ~]").unwrap();
        assert_eq!(fm.author_keys, vec!["12345".to_owned(), "abc".to_owned()]);
    }

    #[test]
    fn test_sidebar_yaml_11_spellings() {
        assert!(FrontMatter::from_yaml("sidebar: yes").unwrap().sidebar);
        assert!(FrontMatter::from_yaml("sidebar: On").unwrap().sidebar);
        assert!(!FrontMatter::from_yaml("sidebar: no").unwrap().sidebar);
        assert!(!FrontMatter::from_yaml("sidebar: maybe").unwrap().sidebar);
        assert!(!FrontMatter::from_yaml("sidebar:").unwrap().sidebar);
    }

    #[test]
    fn test_from_yaml_invalid_is_error() {
        assert!(FrontMatter::from_yaml("sidebar: [unclosed").is_err());
    }

    #[test]
    fn test_from_yaml_non_mapping_is_error() {
        assert!(FrontMatter::from_yaml("just a sentence").is_err());
        assert!(FrontMatter::from_yaml("- a\n- b").is_err());
    }

    #[test]
    fn test_parse_lenient_recovers() {
        assert_eq!(
            FrontMatter::parse_lenient("sidebar: [unclosed"),
            FrontMatter::default()
        );
        assert!(FrontMatter::parse_lenient("sidebar: true").sidebar);
    }
}
