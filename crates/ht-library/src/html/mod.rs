//! HTML tree construction.
//!
//! The tree is made of [`HtmlNode`]s. Elements are built by the tag helpers
//! ([`div`], [`span`], [`table`], ...), which all delegate to [`elem`]. Each
//! helper takes a flat list of arguments (see [`IntoArgs`]) and classifies
//! every argument:
//!
//! - Nodes are appended as children.
//! - Attributes are set on the element. Repeated keys never produce
//!   duplicates: `class` and `content` values are merged as token lists (see
//!   [`MergePolicy`]), other keys are replaced.
//! - `None` contributes nothing, which makes [`when`] usable inline.
//! - Everything else becomes a text child.
//!
//! ```
//! use ht_library::html::*;
//!
//! let page = document([
//!     doctype("html"),
//!     html((
//!         lang("en"),
//!         head((meta(charset("utf-8")), title("Page"))),
//!         body(class("body")),
//!     )),
//! ]);
//! assert_eq!(page.children().len(), 2);
//! ```

mod attrs;
mod build;
mod dom;
mod elems;
mod merge;

pub use self::attrs::*;
pub use self::build::*;
pub use self::dom::*;
pub use self::elems::*;
pub use self::merge::*;

use std::fmt::Display;

use ecow::{eco_format, EcoString};

/// Create a document root holding the given children.
pub fn document(children: impl IntoIterator<Item = HtmlNode>) -> HtmlNode {
    HtmlNode::Document(children.into_iter().collect())
}

/// Create a document type declaration, e.g. `doctype("html")`.
pub fn doctype(name: impl Into<EcoString>) -> HtmlNode {
    HtmlNode::Doctype(name.into())
}

/// Create a comment node.
///
/// The text is stored as is. The renderer rejects text that cannot appear
/// inside an HTML comment.
pub fn comment(text: impl Into<EcoString>) -> HtmlNode {
    HtmlNode::comment(text)
}

/// Create a text node. The text is escaped when rendered.
pub fn text(text: impl Into<EcoString>) -> HtmlNode {
    HtmlNode::text(text)
}

/// Create a raw node whose markup is rendered verbatim.
///
/// The caller vouches that the markup is trusted, well-formed HTML.
pub fn raw(markup: impl Into<EcoString>) -> HtmlNode {
    HtmlNode::raw(markup)
}

/// The node if `cond` holds, `None` otherwise.
///
/// ```
/// use ht_library::html::*;
///
/// let node = div((when(true, text("shown")), when(false, text("hidden"))));
/// assert_eq!(node.text_content(), "shown");
/// ```
pub fn when(cond: bool, node: impl Into<HtmlNode>) -> Option<HtmlNode> {
    cond.then(|| node.into())
}

/// Embed the output of another templating system.
///
/// The closure writes into a buffer. On success, the buffer becomes a raw
/// node. On failure, the error message becomes an (escaped) text node instead.
///
/// ```
/// use std::fmt::Write;
/// use ht_library::html::*;
///
/// let partial = raw_from(|buf| write!(buf, "<strong>Hello, {}</strong>", "world"));
/// assert_eq!(partial, raw("<strong>Hello, world</strong>"));
/// ```
pub fn raw_from<F, E>(f: F) -> HtmlNode
where
    F: FnOnce(&mut String) -> Result<(), E>,
    E: Display,
{
    let mut buf = String::new();
    match f(&mut buf) {
        Ok(()) => HtmlNode::Raw(buf.into()),
        Err(err) => HtmlNode::Text(eco_format!("{err}")),
    }
}
