//! Candidate Scanner: finds enhanceable fields inside a scope.

use mdf_domain::config::ScannerConfig;
use mdf_kernel::dom::{Descendants, Document, Element, NodeId};
use serde::Serialize;

/// The part of a document a scan covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "root", rename_all = "kebab-case")]
pub enum Scope {
    /// The whole document, starting at its root.
    Document,
    /// A subtree, including its root.
    Subtree(NodeId),
}

impl Scope {
    /// The node the walk starts from.
    #[must_use]
    pub const fn root(self, doc: &Document) -> NodeId {
        match self {
            Self::Document => doc.root(),
            Self::Subtree(root) => root,
        }
    }
}

/// Matches elements carrying the Field Marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    config: ScannerConfig,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(ScannerConfig::default())
    }
}

impl Scanner {
    #[must_use]
    pub const fn new(config: ScannerConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScannerConfig {
        &self.config
    }

    /// Tag compared ASCII case-insensitively, marker value compared exactly.
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        element.has_tag(&self.config.field_tag)
            && element.attribute(&self.config.marker_attribute) == Some(self.config.marker_value.as_str())
    }

    /// Lazily yields every marked element in `scope`, in document order.
    ///
    /// Each call starts a fresh walk. Scopes rooted at a dead node yield
    /// nothing. Overlapping scopes yield shared elements again; filtering
    /// repeats is the gate's job.
    #[must_use]
    pub fn scan<'d>(&'d self, doc: &'d Document, scope: Scope) -> Candidates<'d> {
        Candidates { doc, scanner: self, walk: doc.descendants(scope.root(doc)) }
    }
}

/// Iterator returned by [`Scanner::scan`].
#[derive(Debug, Clone)]
pub struct Candidates<'d> {
    doc: &'d Document,
    scanner: &'d Scanner,
    walk: Descendants<'d>,
}

impl Iterator for Candidates<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let (doc, scanner) = (self.doc, self.scanner);
        self.walk.find(|id| doc.element(*id).is_some_and(|element| scanner.matches(element)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdf_kernel::markup::{parse_document, parse_fragment};

    const PAGE: &str = r#"
        <body>
          <textarea id="a" data-md-editor="true"/>
          <textarea id="plain"/>
          <TEXTAREA id="b" data-md-editor="true"/>
          <textarea id="off" data-md-editor="false"/>
          <div data-md-editor="true" id="not-a-field"/>
          <section id="inlines">
            <div><textarea id="c" data-md-editor="true"/></div>
          </section>
        </body>"#;

    fn ids(doc: &Document, found: impl Iterator<Item = NodeId>) -> Vec<String> {
        found.filter_map(|id| doc.attribute(id, "id")).map(str::to_owned).collect()
    }

    #[test]
    fn document_scan_finds_marked_fields_in_order() {
        let doc = parse_document(PAGE).unwrap();
        let scanner = Scanner::default();
        assert_eq!(ids(&doc, scanner.scan(&doc, Scope::Document)), vec!["a", "b", "c"]);
    }

    #[test]
    fn subtree_scan_stays_inside_the_subtree() {
        let doc = parse_document(PAGE).unwrap();
        let inlines = doc.find_by_id("inlines").unwrap();
        let scanner = Scanner::default();
        assert_eq!(ids(&doc, scanner.scan(&doc, Scope::Subtree(inlines))), vec!["c"]);
    }

    #[test]
    fn subtree_root_itself_is_a_candidate() {
        let mut doc = parse_document(PAGE).unwrap();
        let field = parse_fragment(&mut doc, r#"<textarea id="new" data-md-editor="true"/>"#).unwrap();
        let scanner = Scanner::default();
        assert_eq!(ids(&doc, scanner.scan(&doc, Scope::Subtree(field))), vec!["new"]);
    }

    #[test]
    fn dead_scope_yields_nothing() {
        let mut doc = parse_document(PAGE).unwrap();
        let inlines = doc.find_by_id("inlines").unwrap();
        doc.remove(inlines).unwrap();
        assert_eq!(Scanner::default().scan(&doc, Scope::Subtree(inlines)).count(), 0);
    }

    #[test]
    fn scans_are_restartable() {
        let doc = parse_document(PAGE).unwrap();
        let scanner = Scanner::default();
        let first = scanner.scan(&doc, Scope::Document);
        let again = first.clone();
        assert_eq!(first.count(), 3);
        assert_eq!(again.count(), 3);
        assert_eq!(scanner.scan(&doc, Scope::Document).count(), 3);
    }

    #[test]
    fn custom_marker_is_honoured() {
        let doc = parse_document(r#"<form><input id="x" data-rich="yes"/><textarea id="y" data-md-editor="true"/></form>"#)
            .unwrap();
        let scanner = Scanner::new(ScannerConfig {
            field_tag: "input".to_owned(),
            marker_attribute: "data-rich".to_owned(),
            marker_value: "yes".to_owned(),
        });
        assert_eq!(ids(&doc, scanner.scan(&doc, Scope::Document)), vec!["x"]);
    }
}
