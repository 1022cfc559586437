use std::fmt::{self, Debug, Display, Formatter};

use ecow::{EcoString, EcoVec};
use serde::{Serialize, Serializer};

use crate::html::{HtmlTag, MergePolicy};

/// A node of an HTML tree.
///
/// Trees are owned by value: attaching a node to a parent moves it, so a node
/// has at most one parent and can never appear twice in a tree.
#[derive(Debug, Clone, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HtmlNode {
    /// The root of a full document.
    Document(Vec<HtmlNode>),
    /// A document type declaration, e.g. `html` for `<!DOCTYPE html>`.
    Doctype(EcoString),
    /// An element with attributes and children.
    Element(HtmlElement),
    /// Plain text, escaped on output.
    Text(EcoString),
    /// Trusted markup, written verbatim.
    Raw(EcoString),
    /// The contents of an HTML comment.
    Comment(EcoString),
}

impl HtmlNode {
    /// Create a plain text node.
    pub fn text(text: impl Into<EcoString>) -> Self {
        Self::Text(text.into())
    }

    /// Create a raw markup node.
    pub fn raw(markup: impl Into<EcoString>) -> Self {
        Self::Raw(markup.into())
    }

    /// Create a comment node.
    pub fn comment(text: impl Into<EcoString>) -> Self {
        Self::Comment(text.into())
    }

    /// The node's children. Empty for leaves.
    pub fn children(&self) -> &[HtmlNode] {
        match self {
            Self::Document(children) => children,
            Self::Element(element) => &element.children,
            _ => &[],
        }
    }

    /// The node as an element, if it is one.
    pub fn as_element(&self) -> Option<&HtmlElement> {
        match self {
            Self::Element(element) => Some(element),
            _ => None,
        }
    }

    /// The concatenated text of all text nodes in this subtree, in document
    /// order. Raw markup and comments do not contribute.
    pub fn text_content(&self) -> EcoString {
        let mut buf = EcoString::new();
        self.collect_text(&mut buf);
        buf
    }

    fn collect_text(&self, buf: &mut EcoString) {
        match self {
            Self::Text(text) => buf.push_str(text),
            _ => {
                for child in self.children() {
                    child.collect_text(buf);
                }
            }
        }
    }
}

impl From<HtmlElement> for HtmlNode {
    fn from(element: HtmlElement) -> Self {
        Self::Element(element)
    }
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Hash, Serialize)]
pub struct HtmlElement {
    /// The HTML tag.
    pub tag: HtmlTag,
    /// The element's attributes.
    pub attrs: HtmlAttrs,
    /// The element's children.
    pub children: Vec<HtmlNode>,
}

impl HtmlElement {
    /// Create a new, blank element without attributes or children.
    pub fn new(tag: HtmlTag) -> Self {
        Self { tag, attrs: HtmlAttrs::default(), children: vec![] }
    }

    /// Set an attribute, merging it with a previous value of the same key
    /// according to the standard [`MergePolicy`].
    pub fn with_attr(
        mut self,
        key: impl Into<EcoString>,
        value: impl Into<EcoString>,
    ) -> Self {
        self.attrs.set(key, value, &MergePolicy::STANDARD);
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<HtmlNode>) {
        self.children.push(child.into());
    }
}

impl HtmlTag {
    /// Whether this is a void tag whose associated element may not have
    /// children.
    pub fn is_void(self) -> bool {
        matches!(
            self,
            Self::Area
                | Self::Base
                | Self::Br
                | Self::Col
                | Self::Embed
                | Self::Hr
                | Self::Img
                | Self::Input
                | Self::Link
                | Self::Meta
                | Self::Param
                | Self::Source
                | Self::Track
                | Self::Wbr
        )
    }

    /// Whether the element's content is raw text that the HTML parser does not
    /// interpret as markup.
    pub fn is_raw_text(self) -> bool {
        matches!(self, Self::Script | Self::Style)
    }
}

impl Debug for HtmlTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for HtmlTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.as_str())
    }
}

impl Serialize for HtmlTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Attributes of an HTML element.
///
/// Keys are unique and keep the position of their first occurrence.
#[derive(Debug, Default, Clone, Eq, PartialEq, Hash)]
pub struct HtmlAttrs(pub EcoVec<(EcoString, EcoString)>);

impl HtmlAttrs {
    /// The value of an attribute, if it is set.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k.as_str() == key).map(|(_, v)| v.as_str())
    }

    /// Iterate over the attributes in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set an attribute. If the key is already present, its value is combined
    /// with the new one in place according to `policy`.
    pub fn set(
        &mut self,
        key: impl Into<EcoString>,
        value: impl Into<EcoString>,
        policy: &MergePolicy,
    ) {
        let key = key.into();
        let value = value.into();
        match self.0.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                let slot = &mut self.0.make_mut()[i].1;
                *slot = policy.combine(&key, slot.as_str(), &value);
            }
            None => self.0.push((key, value)),
        }
    }
}

impl Serialize for HtmlAttrs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
