//! Element tree for decoded WCTS requests
//!
//! The dispatcher only ever reads the tree: it scans top-level siblings
//! for operation tags and pulls identifier fields out of nested CRS
//! descriptions. All lookups are case-insensitive on the local name so
//! that `<transformable>`, `<Transformable>`, and `<wcts:Transformable>`
//! are interchangeable.

/// A single XML element node.
///
/// Attributes keep document order. Text is the concatenation of all
/// direct text and CDATA content, with surrounding whitespace trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

/// The local part of a possibly prefixed XML name.
fn local_part(name: &str) -> &str {
    match name.rsplit_once(':') {
        Some((_, local)) => local,
        None => name,
    }
}

impl Element {
    /// Create an empty element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder-style attribute append.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Builder-style child append.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// The tag name as written in the document, prefix included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tag name without any namespace prefix.
    pub fn local_name(&self) -> &str {
        local_part(&self.name)
    }

    /// Whether this element's local name equals `tag`, ignoring case.
    pub fn is_named(&self, tag: &str) -> bool {
        self.local_name().eq_ignore_ascii_case(tag)
    }

    /// Direct children in document order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Trimmed text content of this element.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Look up an attribute by local name, ignoring case.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| local_part(key).eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// First direct child whose local name equals `tag`, ignoring case.
    pub fn child(&self, tag: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.is_named(tag))
    }

    /// Navigate a dotted element path, e.g.
    /// `"SourceCRS.CoordinateReferenceSystem"`.
    ///
    /// Each segment selects the first matching child of the previous
    /// node. Returns `None` as soon as a segment has no match.
    pub fn find(&self, path: &str) -> Option<&Element> {
        path.split('.')
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Resolve a dotted path to a value.
    ///
    /// The leaf segment is looked up first among the attributes of the
    /// parent node and then among its child elements, whose text content
    /// is returned. `element.value("service")` therefore finds either a
    /// `service="..."` attribute or a `<service>...</service>` child.
    pub fn value(&self, path: &str) -> Option<&str> {
        let (parent, leaf) = match path.rsplit_once('.') {
            Some((prefix, leaf)) => (self.find(prefix)?, leaf),
            None => (self, path),
        };
        if let Some(value) = parent.attr(leaf) {
            return Some(value);
        }
        parent.child(leaf).map(Element::text)
    }
}
