//! Identifier and expression normalization shared by the generator.

use super::config::{Replacement, default_replacements};

/// Ordered literal substring replacements from documented primitive names to
/// TypeScript types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements {
    table: Vec<Replacement>,
}

impl Default for Replacements {
    fn default() -> Self {
        Self::new(default_replacements())
    }
}

impl Replacements {
    pub fn new(table: Vec<Replacement>) -> Self {
        Self { table }
    }

    /// Applies every replacement in order. Replacements are plain substring
    /// matches; `NumberFormat` becomes `numberFormat`.
    pub fn apply(&self, content: &str) -> String {
        self.table
            .iter()
            .filter(|r| !r.from.is_empty())
            .fold(content.to_string(), |acc, r| acc.replace(&r.from, &r.to))
    }
}

fn is_fully_uppercase(word: &str) -> bool {
    word.to_uppercase() == word
}

fn capitalize(word: &str, lowercase_rest: bool) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str();
            let rest = if lowercase_rest {
                rest.to_lowercase()
            } else {
                rest.to_string()
            };
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Joins `_`- or space-separated words into one identifier.
///
/// Unions pass through untouched. A lone `%` word is dropped. Fully
/// upper-case words are lowered after their first letter, other words keep
/// their inner casing.
pub fn to_camel_case(s: &str) -> String {
    if s.contains(" | ") {
        return s.to_string();
    }

    let separator = if s.contains('_') { '_' } else { ' ' };
    s.split(separator)
        .filter(|word| !word.is_empty() && *word != "%")
        .map(|word| capitalize(word, is_fully_uppercase(word)))
        .collect()
}

/// Normalizes a documented entity name: `BLEND_MODE` becomes `BlendMode`,
/// `FRAME` becomes `Frame`, `Paint` stays as is.
pub fn normalize_entity_name(name: &str) -> String {
    let name = if name.contains('_') {
        name.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| capitalize(word, true))
            .collect()
    } else {
        name.to_string()
    };

    if is_fully_uppercase(&name) {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => std::iter::once(first)
                .chain(chars.as_str().to_lowercase().chars())
                .collect(),
            None => name,
        }
    } else {
        name
    }
}

/// Name of the declaration synthesized for an inline union field.
pub fn nested_type_name(owner: &str, field: &str) -> String {
    let name = capitalize(field, false);
    if name.starts_with(owner) {
        name
    } else {
        format!("{}{}", owner, name)
    }
}

/// Strips the first and last character, i.e. the quotes of a literal.
pub(crate) fn unquote(value: &str) -> &str {
    let mut chars = value.chars();
    match (chars.next(), chars.next_back()) {
        (Some(_), Some(_)) => chars.as_str(),
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_replacements_default() {
        let replacements = Replacements::default();
        assert_eq!(replacements.apply("Number"), "number");
        assert_eq!(replacements.apply("Boolean"), "boolean");
        assert_eq!(replacements.apply("Transform"), "Array<Array<number>>");
        assert_eq!(replacements.apply("CornerRadius"), "number");
        assert_eq!(replacements.apply("Map<String, Any>"), "Map<string, any>");
        assert_eq!(replacements.apply("Paint[]"), "Paint[]");
    }

    #[test]
    fn test_replacements_are_ordered() {
        let replacements = Replacements::new(vec![
            Replacement::new("Paint", "Fill"),
            Replacement::new("Fill", "PaintNode"),
        ]);
        assert_eq!(replacements.apply("Paint"), "PaintNode");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("PASS_THROUGH"), "PassThrough");
        assert_eq!(to_camel_case("LINEAR_BURN"), "LinearBurn");
        assert_eq!(to_camel_case("NORMAL"), "Normal");
        assert_eq!(to_camel_case("number"), "Number");
        assert_eq!(to_camel_case("drop shadow"), "DropShadow");
        assert_eq!(to_camel_case("Paint"), "Paint");
        assert_eq!(to_camel_case("layoutGrid"), "LayoutGrid");
        assert_eq!(to_camel_case("FIXED %"), "Fixed");
        assert_eq!(to_camel_case("Paint | Effect"), "Paint | Effect");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_normalize_entity_name() {
        assert_eq!(normalize_entity_name("FRAME"), "Frame");
        assert_eq!(normalize_entity_name("BOOLEAN_OPERATION"), "BooleanOperation");
        assert_eq!(normalize_entity_name("blend_mode"), "BlendMode");
        assert_eq!(normalize_entity_name("Paint"), "Paint");
        assert_eq!(normalize_entity_name("LayoutGrid"), "LayoutGrid");
    }

    #[test]
    fn test_nested_type_name() {
        assert_eq!(nested_type_name("Paint", "type"), "PaintType");
        assert_eq!(nested_type_name("Paint", "paintMode"), "PaintMode");
        assert_eq!(nested_type_name("FrameNode", "layoutMode"), "FrameNodeLayoutMode");
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'SOLID'"), "SOLID");
        assert_eq!(unquote("''"), "");
        assert_eq!(unquote("'"), "");
    }

    proptest! {
        #[test]
        fn prop_underscored_names_lose_underscores(
            segments in prop::collection::vec("[a-z][a-zA-Z]{1,8}", 2..5)
        ) {
            let name = segments.join("_");
            let normalized = normalize_entity_name(&name);

            prop_assert!(!normalized.contains('_'));

            let mut rest = normalized.as_str();
            for segment in &segments {
                let expected = capitalize(segment, true);
                prop_assert!(rest.starts_with(&expected), "{} in {}", expected, normalized);
                rest = &rest[expected.len()..];
            }
            prop_assert!(rest.is_empty());
        }

        #[test]
        fn prop_unions_pass_through_camel_case(
            members in prop::collection::vec("[A-Za-z]{1,8}", 2..5)
        ) {
            let union = members.join(" | ");
            prop_assert_eq!(to_camel_case(&union), union);
        }
    }
}
