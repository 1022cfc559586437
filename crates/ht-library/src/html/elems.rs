use std::str::FromStr;

use ecow::EcoString;

use crate::diag::{bail, StrResult};
use crate::html::{elem, HtmlNode, IntoArgs};

macro_rules! elems {
    ($($func:ident: $variant:ident $name:literal)*) => {
        /// The tag of an HTML element.
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum HtmlTag {
            $(
                #[doc = concat!("The `<", $name, ">` tag.")]
                $variant,
            )*
        }

        impl HtmlTag {
            /// All known tags.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Resolves the tag to a string.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }
        }

        impl FromStr for HtmlTag {
            type Err = EcoString;

            fn from_str(s: &str) -> StrResult<Self> {
                Ok(match s.to_ascii_lowercase().as_str() {
                    $($name => Self::$variant,)*
                    _ => bail!("unknown HTML tag `{s}`"),
                })
            }
        }

        $(
            #[doc = concat!("Produces an HTML `<", $name, ">` element.")]
            pub fn $func(args: impl IntoArgs) -> HtmlNode {
                elem(HtmlTag::$variant, args)
            }
        )*
    }
}

// `data_elem` because `data` builds `data-*` attributes.
elems! {
    a: A "a"
    abbr: Abbr "abbr"
    address: Address "address"
    area: Area "area"
    article: Article "article"
    aside: Aside "aside"
    audio: Audio "audio"
    b: B "b"
    base: Base "base"
    bdi: Bdi "bdi"
    bdo: Bdo "bdo"
    blockquote: Blockquote "blockquote"
    body: Body "body"
    br: Br "br"
    button: Button "button"
    canvas: Canvas "canvas"
    caption: Caption "caption"
    cite: Cite "cite"
    code: Code "code"
    col: Col "col"
    colgroup: Colgroup "colgroup"
    data_elem: Data "data"
    datalist: Datalist "datalist"
    dd: Dd "dd"
    del: Del "del"
    details: Details "details"
    dfn: Dfn "dfn"
    dialog: Dialog "dialog"
    div: Div "div"
    dl: Dl "dl"
    dt: Dt "dt"
    em: Em "em"
    embed: Embed "embed"
    fieldset: Fieldset "fieldset"
    figcaption: Figcaption "figcaption"
    figure: Figure "figure"
    footer: Footer "footer"
    form: Form "form"
    h1: H1 "h1"
    h2: H2 "h2"
    h3: H3 "h3"
    h4: H4 "h4"
    h5: H5 "h5"
    h6: H6 "h6"
    head: Head "head"
    header: Header "header"
    hgroup: Hgroup "hgroup"
    hr: Hr "hr"
    html: Html "html"
    i: I "i"
    iframe: Iframe "iframe"
    img: Img "img"
    input: Input "input"
    ins: Ins "ins"
    kbd: Kbd "kbd"
    label: Label "label"
    legend: Legend "legend"
    li: Li "li"
    link: Link "link"
    main: Main "main"
    map: Map "map"
    mark: Mark "mark"
    menu: Menu "menu"
    meta: Meta "meta"
    meter: Meter "meter"
    nav: Nav "nav"
    noscript: Noscript "noscript"
    object: Object "object"
    ol: Ol "ol"
    optgroup: Optgroup "optgroup"
    option: Option "option"
    output: Output "output"
    p: P "p"
    param: Param "param"
    picture: Picture "picture"
    pre: Pre "pre"
    progress: Progress "progress"
    q: Q "q"
    rp: Rp "rp"
    rt: Rt "rt"
    ruby: Ruby "ruby"
    s: S "s"
    samp: Samp "samp"
    script: Script "script"
    search: Search "search"
    section: Section "section"
    select: Select "select"
    slot: Slot "slot"
    small: Small "small"
    source: Source "source"
    span: Span "span"
    strong: Strong "strong"
    style: Style "style"
    sub: Sub "sub"
    summary: Summary "summary"
    sup: Sup "sup"
    table: Table "table"
    tbody: Tbody "tbody"
    td: Td "td"
    template: Template "template"
    textarea: Textarea "textarea"
    tfoot: Tfoot "tfoot"
    th: Th "th"
    thead: Thead "thead"
    time: Time "time"
    title: Title "title"
    tr: Tr "tr"
    track: Track "track"
    u: U "u"
    ul: Ul "ul"
    var: Var "var"
    video: Video "video"
    wbr: Wbr "wbr"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names_round_trip() {
        for &tag in HtmlTag::ALL {
            assert_eq!(tag.as_str().parse::<HtmlTag>(), Ok(tag));
        }
    }

    #[test]
    fn test_tag_from_str() {
        assert_eq!("DIV".parse::<HtmlTag>(), Ok(HtmlTag::Div));
        assert_eq!("blink".parse::<HtmlTag>().unwrap_err(), "unknown HTML tag `blink`");
    }

    #[test]
    fn test_helpers_use_their_tag() {
        assert_eq!(div(()).as_element().map(|e| e.tag), Some(HtmlTag::Div));
        assert_eq!(data_elem(()).as_element().map(|e| e.tag), Some(HtmlTag::Data));
        assert_eq!(option(()).as_element().map(|e| e.tag), Some(HtmlTag::Option));
    }
}
