use super::{DocumentNode, Role, SchemaDocument};
use crate::config::SelectorConfig;
use crate::error::{FigdocError, Result};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

fn compile(role: &str, selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| FigdocError::selector(role, e.to_string()))
}

/// Compiled CSS selectors, one per [`Role`].
#[derive(Debug, Clone)]
pub struct RoleSelectors {
    row: Selector,
    entity_name: Selector,
    property_field: Selector,
    field_name: Selector,
    literal: Selector,
    reference_link: Selector,
}

impl RoleSelectors {
    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        debug!("Compiling role selectors");
        Ok(Self {
            row: compile(Role::Row.as_str(), &config.row)?,
            entity_name: compile(Role::EntityName.as_str(), &config.entity_name)?,
            property_field: compile(Role::PropertyField.as_str(), &config.property_field)?,
            field_name: compile(Role::FieldName.as_str(), &config.field_name)?,
            literal: compile(Role::Literal.as_str(), &config.literal)?,
            reference_link: compile(Role::ReferenceLink.as_str(), &config.reference_link)?,
        })
    }

    pub fn get(&self, role: Role) -> &Selector {
        match role {
            Role::Row => &self.row,
            Role::EntityName => &self.entity_name,
            Role::PropertyField => &self.property_field,
            Role::FieldName => &self.field_name,
            Role::Literal => &self.literal,
            Role::ReferenceLink => &self.reference_link,
        }
    }
}

/// An HTML page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
    selectors: RoleSelectors,
}

impl HtmlDocument {
    pub fn parse(source: &str, selectors: &SelectorConfig) -> Result<Self> {
        let selectors = RoleSelectors::from_config(selectors)?;
        debug!(bytes = source.len(), "Parsing documentation page");
        Ok(Self {
            html: Html::parse_document(source),
            selectors,
        })
    }
}

impl SchemaDocument for HtmlDocument {
    type Node<'a>
        = HtmlNode<'a>
    where
        Self: 'a;

    fn table(&self, identifier: &str) -> Result<HtmlNode<'_>> {
        let selector = compile("table", identifier)?;
        let element = self
            .html
            .select(&selector)
            .next()
            .ok_or_else(|| FigdocError::table_not_found(identifier))?;
        trace!(table = identifier, "Located table");
        Ok(HtmlNode {
            element,
            selectors: &self.selectors,
        })
    }
}

/// An element of an [`HtmlDocument`] together with the selectors that give
/// its children their roles.
#[derive(Debug, Clone, Copy)]
pub struct HtmlNode<'a> {
    element: ElementRef<'a>,
    selectors: &'a RoleSelectors,
}

impl<'a> HtmlNode<'a> {
    fn wrap(&self, element: ElementRef<'a>) -> Self {
        Self {
            element,
            selectors: self.selectors,
        }
    }
}

impl DocumentNode for HtmlNode<'_> {
    fn select_all(&self, role: Role) -> Vec<Self> {
        self.element
            .select(self.selectors.get(role))
            .map(|element| self.wrap(element))
            .collect()
    }

    fn text(&self) -> String {
        self.element.text().collect()
    }

    fn next_element_sibling(&self) -> Option<Self> {
        self.element
            .next_siblings()
            .find_map(ElementRef::wrap)
            .map(|element| self.wrap(element))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="files-types">
          <table>
            <tbody>
              <tr>
                <td><span class="format--mono--a1">Color</span></td>
                <td>
                  <div class="developer_docs--propField--x">
                    <span class="developer_docs--monoDisplay--y">r</span><span>Number</span>
                  </div>
                </td>
              </tr>
            </tbody>
          </table>
        </div>
    "#;

    #[test]
    fn test_table_lookup_and_roles() {
        let doc = HtmlDocument::parse(PAGE, &SelectorConfig::default()).unwrap();
        let table = doc.table("#files-types table").unwrap();

        let rows = table.select_all(Role::Row);
        assert_eq!(rows.len(), 1);

        let name = rows[0].select_first(Role::EntityName).unwrap();
        assert_eq!(name.text(), "Color");

        let field = rows[0].select_first(Role::PropertyField).unwrap();
        let field_name = field.select_first(Role::FieldName).unwrap();
        assert_eq!(field_name.text(), "r");
        assert_eq!(field_name.next_element_sibling().unwrap().text(), "Number");
        assert!(field.select_first(Role::Literal).is_none());
    }

    #[test]
    fn test_missing_table() {
        let doc = HtmlDocument::parse(PAGE, &SelectorConfig::default()).unwrap();
        let err = doc.table("#node-types table").unwrap_err();
        assert!(matches!(err, FigdocError::TableNotFound { table } if table == "#node-types table"));
    }

    #[test]
    fn test_invalid_selector() {
        let selectors = SelectorConfig {
            row: "tbody >".to_string(),
            ..SelectorConfig::default()
        };
        let err = HtmlDocument::parse(PAGE, &selectors).err().unwrap();
        assert!(matches!(err, FigdocError::Selector { role, .. } if role == "row"));
    }
}
