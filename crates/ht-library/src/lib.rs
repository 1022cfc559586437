//! ht's HTML tree construction library.
//!
//! Trees are assembled from nested function calls. Each tag helper (e.g.
//! [`html::div`]) accepts a flat argument list of child nodes, attributes and
//! plain values, classifies every argument and folds it into one element.
//!
//! ```
//! use ht_library::html::*;
//!
//! let node = div((
//!     class("card"),
//!     class("shadow"),
//!     h2("Title"),
//!     p(("Total: ", 42)),
//!     when(false, text("hidden")),
//! ));
//!
//! let element = node.as_element().unwrap();
//! assert_eq!(element.attrs.get("class"), Some("card shadow"));
//! assert_eq!(element.children.len(), 2);
//! ```
//!
//! Serialization lives in the `ht-html` crate.

pub mod diag;
pub mod html;
