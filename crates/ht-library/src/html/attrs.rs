//! Attribute helpers.

use ecow::{eco_format, EcoString};

use crate::html::Attr;

/// An attribute with an arbitrary key.
pub fn attr(key: impl Into<EcoString>, value: impl Into<EcoString>) -> Attr {
    Attr::new(key, value)
}

/// A `data-*` attribute, e.g. `data("menu", "main")` for `data-menu="main"`.
pub fn data(key: &str, value: impl Into<EcoString>) -> Attr {
    attr(eco_format!("data-{key}"), value)
}

/// An `aria-*` attribute, e.g. `aria("label", "Close")`.
pub fn aria(key: &str, value: impl Into<EcoString>) -> Attr {
    attr(eco_format!("aria-{key}"), value)
}

/// A `class` attribute made of several class names.
pub fn classes<I, S>(names: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    attr("class", join(names, " "))
}

/// A `content` attribute made of several comma-separated items.
pub fn contents<I, S>(items: I) -> Attr
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    attr("content", join(items, ", "))
}

fn join<I, S>(parts: I, sep: &str) -> EcoString
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = EcoString::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(part.as_ref());
    }
    out
}

macro_rules! valued {
    ($($func:ident $name:literal)*) => {
        $(
            #[doc = concat!("The `", $name, "` attribute.")]
            pub fn $func(value: impl Into<EcoString>) -> Attr {
                attr($name, value)
            }
        )*
    };
}

macro_rules! flags {
    ($($func:ident $name:literal)*) => {
        $(
            #[doc = concat!("The boolean `", $name, "` attribute.")]
            pub fn $func() -> Attr {
                attr($name, "")
            }
        )*
    };
}

valued! {
    action "action"
    alt "alt"
    autocomplete "autocomplete"
    charset "charset"
    class "class"
    content "content"
    download "download"
    enctype "enctype"
    for_ "for"
    height "height"
    href "href"
    id "id"
    label_attr "label"
    lang "lang"
    max "max"
    method "method"
    min "min"
    name "name"
    pattern "pattern"
    placeholder "placeholder"
    rel "rel"
    role "role"
    size "size"
    src "src"
    step "step"
    style_attr "style"
    target "target"
    title_attr "title"
    type_ "type"
    value "value"
    width "width"
}

flags! {
    async_ "async"
    autofocus "autofocus"
    checked "checked"
    defer "defer"
    disabled "disabled"
    hidden "hidden"
    multiple "multiple"
    readonly "readonly"
    required "required"
    selected "selected"
}

// htmx
valued! {
    hx_boost "hx-boost"
    hx_confirm "hx-confirm"
    hx_delete "hx-delete"
    hx_get "hx-get"
    hx_patch "hx-patch"
    hx_post "hx-post"
    hx_push_url "hx-push-url"
    hx_put "hx-put"
    hx_replace_url "hx-replace-url"
    hx_select "hx-select"
    hx_select_oob "hx-select-oob"
    hx_swap "hx-swap"
    hx_swap_oob "hx-swap-oob"
    hx_target "hx-target"
    hx_trigger "hx-trigger"
    hx_vals "hx-vals"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixed_attributes() {
        assert_eq!(data("menu", "main"), Attr::new("data-menu", "main"));
        assert_eq!(aria("hidden", "true").key, "aria-hidden");
    }

    #[test]
    fn test_multi_value_attributes() {
        assert_eq!(classes(["btn", "btn-primary"]).value, "btn btn-primary");
        assert_eq!(
            contents(["width=device-width", "initial-scale=1.0"]).value,
            "width=device-width, initial-scale=1.0"
        );
        assert_eq!(classes(Vec::<String>::new()).value, "");
    }

    #[test]
    fn test_keyword_named_helpers() {
        assert_eq!(type_("text").key, "type");
        assert_eq!(for_("name").key, "for");
        assert_eq!(async_(), Attr::new("async", ""));
    }
}
