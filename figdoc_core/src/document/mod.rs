//! Role-based access to the documentation markup.
//!
//! The extractor never sees CSS selectors or DOM types. It asks a
//! [`DocumentNode`] for the children that play a given [`Role`] (the row's
//! name cell, a property field, a quoted literal, ...) and reads their text.
//! [`HtmlDocument`] backs this with `scraper`, but any structured-document
//! parser can implement the two traits.

mod html;

pub use html::{HtmlDocument, HtmlNode, RoleSelectors};

use crate::error::Result;
use std::fmt;

/// The part an element plays in a documentation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A body row of the table; one row describes one entity.
    Row,
    /// The element holding the entity name inside a row.
    EntityName,
    /// One property cell of a row.
    PropertyField,
    /// The field-name element inside a property cell.
    FieldName,
    /// A quoted constant alternative inside a property cell.
    Literal,
    /// A link to another documented type inside a property cell.
    ReferenceLink,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Row => "row",
            Role::EntityName => "entity name",
            Role::PropertyField => "property field",
            Role::FieldName => "field name",
            Role::Literal => "literal",
            Role::ReferenceLink => "reference link",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cheap handle to one element of a parsed document.
pub trait DocumentNode: Copy {
    /// All descendants playing `role`, in document order.
    fn select_all(&self, role: Role) -> Vec<Self>;

    /// The first descendant playing `role`.
    fn select_first(&self, role: Role) -> Option<Self> {
        self.select_all(role).into_iter().next()
    }

    /// Concatenated text content.
    fn text(&self) -> String;

    fn next_element_sibling(&self) -> Option<Self>;
}

/// A parsed page that can hand out its documentation tables.
pub trait SchemaDocument {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// Locate the table identified by `identifier`.
    ///
    /// Fails with [`crate::FigdocError::TableNotFound`] when nothing matches.
    fn table(&self, identifier: &str) -> Result<Self::Node<'_>>;
}
