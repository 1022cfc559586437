//! ht's HTML renderer.

mod encode;

pub use self::encode::html;

use std::fmt::{self, Display, Formatter};
use std::io;

use ht_library::html::HtmlNode;

/// A rendered-on-demand HTML tree, for embedding into other templating
/// systems or writing to any output stream.
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlComponent {
    /// The tree to render.
    pub node: HtmlNode,
}

impl HtmlComponent {
    /// Wrap a tree.
    pub fn new(node: impl Into<HtmlNode>) -> Self {
        Self { node: node.into() }
    }

    /// Render the tree into a writer.
    ///
    /// Trees that cannot be encoded yield an error of kind
    /// [`InvalidInput`](io::ErrorKind::InvalidInput).
    pub fn render(&self, w: &mut impl io::Write) -> io::Result<()> {
        let buf = html(&self.node)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.as_str()))?;
        w.write_all(buf.as_bytes())
    }
}

impl Display for HtmlComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buf = html(&self.node).map_err(|_| fmt::Error)?;
        f.write_str(&buf)
    }
}

impl From<HtmlNode> for HtmlComponent {
    fn from(node: HtmlNode) -> Self {
        Self::new(node)
    }
}

#[cfg(test)]
mod tests {
    use ht_library::html::{br, div, p};

    use super::*;

    #[test]
    fn test_render_into_writer() {
        let component = HtmlComponent::new(div(p("Hi")));
        let mut out = Vec::new();
        component.render(&mut out).unwrap();
        assert_eq!(out, b"<div><p>Hi</p></div>");
        assert_eq!(component.to_string(), "<div><p>Hi</p></div>");
    }

    #[test]
    fn test_render_error_is_invalid_input() {
        let component = HtmlComponent::from(br("no"));
        let err = component.render(&mut Vec::new()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "HTML void element <br> may not have children");
    }
}
