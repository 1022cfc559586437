//! Classification of element builder arguments.

use std::error::Error;
use std::fmt::Display;

use ecow::{eco_format, EcoString};

use crate::html::{HtmlElement, HtmlNode, HtmlTag, MergePolicy};

/// An attribute given to an element builder.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Attr {
    /// The attribute's name.
    pub key: EcoString,
    /// The attribute's value. Empty for boolean attributes.
    pub value: EcoString,
}

impl Attr {
    /// Create a new attribute.
    pub fn new(key: impl Into<EcoString>, value: impl Into<EcoString>) -> Self {
        Self { key: key.into(), value: value.into() }
    }
}

/// One argument of an element builder.
///
/// Everything that converts into an `Arg` can be passed to a tag helper like
/// [`div`](crate::html::div). Nodes become children, attributes are set on
/// the element and every other value becomes a text child. `None` values
/// contribute nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Appended as the next child.
    Node(HtmlNode),
    /// Set on the element.
    Attr(Attr),
    /// Appended as a text child.
    Text(EcoString),
    /// Ignored.
    None,
}

impl Arg {
    /// Text from a value's `Display` representation.
    pub fn display(value: impl Display) -> Self {
        Self::Text(eco_format!("{value}"))
    }

    /// Text from an error's message.
    pub fn error(error: &dyn Error) -> Self {
        Self::Text(eco_format!("{error}"))
    }
}

impl From<HtmlNode> for Arg {
    fn from(node: HtmlNode) -> Self {
        Self::Node(node)
    }
}

impl From<HtmlElement> for Arg {
    fn from(element: HtmlElement) -> Self {
        Self::Node(element.into())
    }
}

impl From<Attr> for Arg {
    fn from(attr: Attr) -> Self {
        Self::Attr(attr)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Arg {
    fn from(text: String) -> Self {
        Self::Text(text.into())
    }
}

impl From<&String> for Arg {
    fn from(text: &String) -> Self {
        Self::Text(text.as_str().into())
    }
}

impl From<EcoString> for Arg {
    fn from(text: EcoString) -> Self {
        Self::Text(text)
    }
}

impl From<&EcoString> for Arg {
    fn from(text: &EcoString) -> Self {
        Self::Text(text.clone())
    }
}

macro_rules! display {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Arg {
            fn from(value: $ty) -> Self {
                Self::display(value)
            }
        })*
    };
}

display! {
    char, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<Arg>, E: Display> From<Result<T, E>> for Arg {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => value.into(),
            Err(err) => Self::display(err),
        }
    }
}

/// A flat list of builder arguments.
///
/// Implemented for single arguments, tuples of up to sixteen arguments,
/// vectors, arrays and options, so that callers can write
/// `div((class("a"), "text", span("child")))`.
pub trait IntoArgs {
    /// Produce the arguments in order.
    fn into_args(self) -> impl Iterator<Item = Arg>;
}

impl IntoArgs for () {
    fn into_args(self) -> impl Iterator<Item = Arg> {
        std::iter::empty()
    }
}

macro_rules! single {
    ($($ty:ty),* $(,)?) => {
        $(impl IntoArgs for $ty {
            fn into_args(self) -> impl Iterator<Item = Arg> {
                std::iter::once(Arg::from(self))
            }
        })*
    };
}

single! {
    Arg, HtmlNode, HtmlElement, Attr,
    &str, String, &String, EcoString, &EcoString,
    char, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
}

impl<T: Into<Arg>> IntoArgs for Option<T> {
    fn into_args(self) -> impl Iterator<Item = Arg> {
        std::iter::once(Arg::from(self))
    }
}

impl<T: Into<Arg>, E: Display> IntoArgs for Result<T, E> {
    fn into_args(self) -> impl Iterator<Item = Arg> {
        std::iter::once(Arg::from(self))
    }
}

impl<T: Into<Arg>> IntoArgs for Vec<T> {
    fn into_args(self) -> impl Iterator<Item = Arg> {
        self.into_iter().map(Into::<Arg>::into)
    }
}

impl<T: Into<Arg>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self) -> impl Iterator<Item = Arg> {
        self.into_iter().map(Into::<Arg>::into)
    }
}

macro_rules! tuple {
    ($($t:ident)+) => {
        impl<$($t: Into<Arg>),+> IntoArgs for ($($t,)+) {
            #[allow(non_snake_case)]
            fn into_args(self) -> impl Iterator<Item = Arg> {
                let ($($t,)+) = self;
                [$(Into::<Arg>::into($t)),+].into_iter()
            }
        }
    };
}

tuple!(A);
tuple!(A B);
tuple!(A B C);
tuple!(A B C D);
tuple!(A B C D E);
tuple!(A B C D E F);
tuple!(A B C D E F G);
tuple!(A B C D E F G H);
tuple!(A B C D E F G H I);
tuple!(A B C D E F G H I J);
tuple!(A B C D E F G H I J K);
tuple!(A B C D E F G H I J K L);
tuple!(A B C D E F G H I J K L M);
tuple!(A B C D E F G H I J K L M N);
tuple!(A B C D E F G H I J K L M N O);
tuple!(A B C D E F G H I J K L M N O P);

impl HtmlElement {
    /// Apply one argument to the element.
    ///
    /// Nodes and text are appended as children. An attribute whose key is
    /// already present is combined with the existing value in place, according
    /// to `policy`; otherwise it is appended.
    pub fn apply(&mut self, arg: Arg, policy: &MergePolicy) {
        match arg {
            Arg::Node(node) => self.children.push(node),
            Arg::Attr(Attr { key, value }) => self.attrs.set(key, value, policy),
            Arg::Text(text) => self.children.push(HtmlNode::Text(text)),
            Arg::None => {}
        }
    }

    /// Apply arguments in order, using the standard merge policy.
    pub fn with_args(self, args: impl IntoArgs) -> Self {
        self.with_args_in(args, &MergePolicy::STANDARD)
    }

    /// Apply arguments in order, using a custom merge policy.
    pub fn with_args_in(mut self, args: impl IntoArgs, policy: &MergePolicy) -> Self {
        for arg in args.into_args() {
            self.apply(arg, policy);
        }
        self
    }
}

/// Build an element from a tag and a list of arguments.
///
/// Arguments are processed strictly from left to right. Children keep their
/// order. Repeated attributes keep the position of their first occurrence and
/// are merged or replaced according to [`MergePolicy::STANDARD`].
///
/// A node is moved into its parent, so the same node cannot be attached
/// twice:
///
/// ```compile_fail
/// use ht_library::html::*;
///
/// let shared = span("shared");
/// let tree = div((shared, p(shared)));
/// ```
///
/// Clone it to place a copy in several spots:
///
/// ```
/// use ht_library::html::*;
///
/// let shared = span("shared");
/// let tree = div((shared.clone(), p(shared)));
/// assert_eq!(tree.text_content(), "sharedshared");
/// ```
pub fn elem(tag: HtmlTag, args: impl IntoArgs) -> HtmlNode {
    HtmlElement::new(tag).with_args(args).into()
}

#[cfg(test)]
mod tests {
    use std::fmt::Write;

    use super::*;
    use crate::html::*;

    fn element(node: &HtmlNode) -> &HtmlElement {
        node.as_element().expect("expected an element")
    }

    #[test]
    fn test_children_keep_order() {
        let node = div((text("1"), text("2"), text("3")));
        let texts: Vec<_> = node.children().iter().map(HtmlNode::text_content).collect();
        assert_eq!(texts, ["1", "2", "3"]);
    }

    #[test]
    fn test_absent_child_is_skipped() {
        assert_eq!(div(when(false, text("x"))).children().len(), div(()).children().len());
        assert_eq!(div(when(true, text("x"))).children(), [text("x")]);
        let missing: Option<&str> = None;
        assert!(p(missing).children().is_empty());
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(p(1).children(), [text("1")]);
        assert_eq!(p(true).children(), [text("true")]);
        assert_eq!(p(2.5).children(), [text("2.5")]);
        assert_eq!(p('x').children(), [text("x")]);
        let name = String::from("hello world");
        assert_eq!(p(&name).children(), [text("hello world")]);
        assert_eq!(p(Some("maybe")).children(), [text("maybe")]);
    }

    #[test]
    fn test_errors_become_text() {
        let err = std::io::Error::other("error message");
        assert_eq!(p(Arg::error(&err)).children(), [text("error message")]);

        let parsed: Result<i32, _> = "x".parse::<i32>();
        assert_eq!(p(parsed).children(), [text("invalid digit found in string")]);
        assert_eq!(p(Ok::<_, std::fmt::Error>(7)).children(), [text("7")]);
    }

    #[test]
    fn test_display_values_become_text() {
        struct Point(i32, i32);
        impl std::fmt::Display for Point {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "({}, {})", self.0, self.1)
            }
        }
        assert_eq!(span(Arg::display(Point(1, 2))).children(), [text("(1, 2)")]);
    }

    #[test]
    fn test_attribute_keys_are_unique_in_first_occurrence_order() {
        let node = input((
            type_("text"),
            class("input"),
            id("a"),
            class("w-full input"),
            type_("email"),
            id("b"),
        ));
        let attrs: Vec<_> = element(&node).attrs.iter().collect();
        assert_eq!(attrs, [("type", "email"), ("class", "input w-full"), ("id", "b")]);
    }

    #[test]
    fn test_content_attribute_merges() {
        let node = meta((name("viewport"), content("width=device-width"), content("initial-scale=1.0")));
        assert_eq!(
            element(&node).attrs.get("content"),
            Some("width=device-width, initial-scale=1.0"),
        );
    }

    #[test]
    fn test_boolean_attributes_are_empty() {
        let node = button((disabled(), "Disabled"));
        assert_eq!(element(&node).attrs.get("disabled"), Some(""));
        assert_eq!(node.children(), [text("Disabled")]);
    }

    #[test]
    fn test_custom_policy() {
        let node = HtmlElement::new(HtmlTag::Div)
            .with_args_in((class("a"), class("b")), &MergePolicy::NONE);
        assert_eq!(node.attrs.get("class"), Some("b"));
    }

    #[test]
    fn test_mixed_argument_kinds() {
        let node = ul((role("menu"), data("menu", "main"), li("Item 1"), Arg::None, li(2)));
        let list = element(&node);
        assert_eq!(list.attrs.get("role"), Some("menu"));
        assert_eq!(list.attrs.get("data-menu"), Some("main"));
        assert_eq!(list.children.len(), 2);
        assert_eq!(node.text_content(), "Item 12");
    }

    #[test]
    fn test_argument_lists() {
        let items = vec![li("a"), li("b")];
        assert_eq!(ol(items).children().len(), 2);
        assert_eq!(ol([li("a"), li("b"), li("c")]).children().len(), 3);

        let args: Vec<Arg> = vec![class("x").into(), "y".into(), Arg::None];
        let node = span(args);
        assert_eq!(element(&node).attrs.get("class"), Some("x"));
        assert_eq!(node.children(), [text("y")]);
    }

    #[test]
    fn test_raw_from() {
        let ok = raw_from(|buf| write!(buf, "<strong>Hello, {}</strong>", "Gopher"));
        assert_eq!(ok, raw("<strong>Hello, Gopher</strong>"));

        let failed = raw_from(|_| Err("template failed"));
        assert_eq!(failed, text("template failed"));
    }

    #[test]
    fn test_document() {
        let node = document([doctype("html"), html((lang("en"), body(())))]);
        assert_eq!(node.children().len(), 2);
        assert_eq!(node.children()[0], HtmlNode::Doctype("html".into()));
    }

    #[test]
    fn test_serialize_to_json() {
        let node = a((href("/"), class("nav"), "Home"));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "element": {
                    "tag": "a",
                    "attrs": { "href": "/", "class": "nav" },
                    "children": [{ "text": "Home" }]
                }
            }),
        );
    }
}
