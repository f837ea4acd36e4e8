//! The type-description tree produced by the extractor.

use indexmap::IndexMap;
use serde::Serialize;

/// Entity name to body, in table order.
pub type TypeDescriptor = IndexMap<String, EntityBody>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityBody {
    /// A raw type expression: a union of quoted literals or a reference name.
    Alias(String),
    /// No own fields, only a supertype (or union of supertypes).
    Extends(String),
    /// Explicit fields, optionally with a supertype.
    Fields(FieldMap),
}

impl EntityBody {
    /// True for a quoted literal union, which is emitted as an enum.
    pub fn is_literal_union(&self) -> bool {
        matches!(self, EntityBody::Alias(expr) if expr.starts_with('\''))
    }

    /// The expression to emit as a plain `type` alias, if the body has one.
    ///
    /// A field map counts when it carries a supertype and nothing else.
    pub fn alias_expression(&self) -> Option<&str> {
        match self {
            EntityBody::Alias(expr) | EntityBody::Extends(expr) => Some(expr),
            EntityBody::Fields(map) if map.fields.is_empty() => map.extends.as_deref(),
            EntityBody::Fields(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldMap {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    pub fields: IndexMap<String, String>,
}

impl FieldMap {
    pub fn with_extends(extends: impl Into<String>) -> Self {
        Self {
            extends: Some(extends.into()),
            fields: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        self.fields.insert(name.into(), expression.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_union_detection() {
        assert!(EntityBody::Alias("'A' | 'B'".to_string()).is_literal_union());
        assert!(!EntityBody::Alias("Paint".to_string()).is_literal_union());
        assert!(!EntityBody::Extends("'A'".to_string()).is_literal_union());
    }

    #[test]
    fn test_alias_expression() {
        assert_eq!(
            EntityBody::Fields(FieldMap::with_extends("Paint")).alias_expression(),
            Some("Paint")
        );

        let mut map = FieldMap::with_extends("Paint");
        map.insert("color", "Color");
        assert_eq!(EntityBody::Fields(map).alias_expression(), None);
        assert_eq!(
            EntityBody::Fields(FieldMap::default()).alias_expression(),
            None
        );
    }

    #[test]
    fn test_serialize_descriptor() {
        let mut types = TypeDescriptor::new();
        types.insert("Vector".to_string(), EntityBody::Extends("Point".to_string()));
        let mut map = FieldMap::default();
        map.insert("r", "Number");
        types.insert("Color".to_string(), EntityBody::Fields(map));

        let json = serde_json::to_string(&types).unwrap();
        assert_eq!(
            json,
            r#"{"Vector":{"extends":"Point"},"Color":{"fields":{"fields":{"r":"Number"}}}}"#
        );
    }
}
