use std::fs;
use std::time::Instant;

use ecow::eco_format;
use ht_library::diag::StrResult;
use ht_library::html::*;
use tera::{Context, Tera};

use crate::args::{DemoCommand, DemoPage, OutputFormat};

const SVG_SUN: &str = r#"<svg class="swap-off h-8 w-8 fill-current" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><circle cx="12" cy="12" r="5"/></svg>"#;
const SVG_MOON: &str = r#"<svg class="swap-on h-8 w-8 fill-current" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path d="M21 13A9 9 0 1 1 11 3a7 7 0 0 0 10 10z"/></svg>"#;
const PARTIAL: &str = "<strong>Hello, {{ name }}</strong>";
const CARD_IMAGE: &str =
    "https://img.daisyui.com/images/stock/photo-1606107557195-0e29a4b5b4aa.webp";

/// Execute a demo command.
pub fn demo(command: &DemoCommand) -> StrResult<()> {
    let nodes = page(command.page);

    let start = Instant::now();
    let output = match command.format {
        OutputFormat::Html => {
            let mut buf = String::new();
            for node in &nodes {
                buf.push_str(&ht_html::html(node)?);
                buf.push('\n');
            }
            buf
        }
        OutputFormat::Json => serde_json::to_string_pretty(&nodes)
            .map_err(|err| eco_format!("failed to serialize tree ({err})"))?,
    };
    log::info!("rendered {:?} page in {:?}", command.page, start.elapsed());

    match &command.output {
        Some(path) => fs::write(path, output).map_err(|err| {
            eco_format!("failed to write output to {} ({err})", path.display())
        })?,
        None => print!("{output}"),
    }

    Ok(())
}

/// The nodes making up a demo page.
pub fn page(page: DemoPage) -> Vec<HtmlNode> {
    match page {
        DemoPage::Basic => basic(),
        DemoPage::Daisyui => vec![daisyui()],
        DemoPage::Template => vec![template()],
    }
}

/// A gallery of small fragments, one per line.
fn basic() -> Vec<HtmlNode> {
    let greeting = String::from("hello world");
    let failure = std::io::Error::other("error message");

    vec![
        document([
            doctype("html"),
            html((
                lang("en"),
                head((
                    meta(charset("utf-8")),
                    meta((name("viewport"), contents(["width=device-width", "initial-scale=1.0"]))),
                    title("Page"),
                    script((src("main.js"), defer())),
                    link((rel("stylesheet"), href("style.css"))),
                )),
                body(class("body")),
            )),
        ]),
        div((class("container"), p("Hello, World!"))),
        fieldset((
            class("fieldset"),
            label((class("label"), for_("name"), "Name")),
            input((
                class("input"),
                id("name"),
                type_("text"),
                name("name"),
                placeholder("name"),
                value("John Doe"),
            )),
            p((class("help"), "Please enter your name.")),
        )),
        comment("some awesome comment"),
        text("<h1>Hello, World!</h1>"),
        raw("<h1>Hello, World!</h1>"),
        div((h1("Header 1"), h2("Header 2"), h3("Header 3"), h4("Header 4"), h5("Header 5"))),
        nav((
            role("navigation"),
            class("nav"),
            a((href("/"), "Home")),
            a((href("/about"), "About")),
        )),
        ul((
            role("menu"),
            class("menu"),
            data("menu", "main"),
            li("Item 1"),
            li("Item 2"),
            li("Item 3"),
        )),
        div((when(true, text("True")), when(false, text("False")))),
        card("Card Title", "A card component has a figure, a body part, and inside body there are title and actions parts"),
        p(&greeting),
        p(Some(&greeting)),
        p(1),
        p(true),
        p(Arg::error(&failure)),
    ]
}

fn card(heading: &str, description: &str) -> HtmlNode {
    div((
        classes(["card", "bg-base-100", "w-96", "shadow-sm"]),
        figure(img((src(CARD_IMAGE), alt("Card Image")))),
        div((
            class("card-body"),
            h2((class("card-title"), heading)),
            p(description),
            div((
                class("card-actions justify-end"),
                button((class("btn"), class("btn-primary"), "Buy Now")),
            )),
        )),
    ))
}

/// A full page of daisyUI components.
fn daisyui() -> HtmlNode {
    document([
        doctype("html"),
        html((
            lang("en"),
            head((
                meta(charset("utf-8")),
                meta((name("viewport"), content("width=device-width"), content("initial-scale=1.0"))),
                title("daisyUI"),
                link((
                    href("https://cdn.jsdelivr.net/npm/daisyui@5"),
                    rel("stylesheet"),
                    type_("text/css"),
                )),
                script(src("https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4")),
            )),
            body((class("antialiased"), navbar(), components())),
        )),
    ])
}

fn navbar() -> HtmlNode {
    div((
        class("navbar shadow-sm"),
        div((class("flex-1"), a((class("btn btn-ghost text-xl"), href("#"), "daisyUI")))),
        div((
            class("flex-none"),
            label((
                class("swap swap-rotate"),
                input((class("theme-controller"), type_("checkbox"), value("dark"))),
                raw(SVG_MOON),
                raw(SVG_SUN),
            )),
        )),
    ))
}

fn components() -> HtmlNode {
    div((
        class("px-6 py-8 flex flex-col gap-16"),
        section_block("Buttons", buttons()),
        section_block("Alerts", alerts()),
        section_block("Card", card("Shoes!", "If a dog chews shoes whose shoes does he choose?")),
        section_block("Form", form_controls()),
        section_block("Badges", badges()),
        section_block("Stats", stats()),
    ))
}

/// A titled section.
fn section_block(heading: &str, content: HtmlNode) -> HtmlNode {
    div((
        class("flex flex-col gap-3"),
        h2((class("text-xl font-semibold"), heading)),
        content,
    ))
}

fn buttons() -> HtmlNode {
    let variants = ["primary", "secondary", "accent", "outline", "soft", "ghost", "link"];
    let mut args: Vec<Arg> = vec![
        class("flex flex-wrap gap-2").into(),
        button((class("btn"), "Default")).into(),
    ];
    args.extend(variants.iter().map(|variant| {
        let label = capitalize(variant);
        Arg::from(button((class("btn"), class(eco_format!("btn-{variant}")), label)))
    }));
    args.push(button((class("btn"), class("btn-disabled"), disabled(), "Disabled")).into());
    div(args)
}

fn alerts() -> HtmlNode {
    let alerts = [
        (None, "Neutral alert: basic usage."),
        (Some("alert-info"), "Info alert: some extra context."),
        (Some("alert-success"), "Success alert: everything worked!"),
        (Some("alert-warning"), "Warning alert: something looks off."),
        (Some("alert-error"), "Error alert: action failed."),
    ];
    let mut args: Vec<Arg> = vec![class("flex flex-col gap-2").into()];
    args.extend(alerts.into_iter().map(|(kind, message)| {
        Arg::from(div((class("alert"), kind.map(class), span(message))))
    }));
    div(args)
}

fn form_controls() -> HtmlNode {
    div((
        class("grid grid-cols-1 sm:grid-cols-2 gap-4"),
        fieldset((
            class("fieldset"),
            label((class("label"), "Username")),
            input((class("input w-full"), type_("text"), placeholder("johndoe"))),
            label((class("label"), "Required")),
        )),
        fieldset((
            class("fieldset"),
            label((class("label"), "Password")),
            input((class("input w-full"), type_("password"), placeholder("••••••••"))),
            label((
                class("label"),
                a((class("link link-hover"), href("#"), "Forgot password?")),
            )),
        )),
        fieldset((
            class("fieldset"),
            label((
                class("label justify-start gap-4"),
                input((class("checkbox checkbox-primary"), type_("checkbox"), checked())),
                "Accept terms and conditions",
            )),
        )),
        div((
            class("sm:col-span-2"),
            button((class("btn btn-primary w-full sm:w-auto"), "Submit")),
        )),
    ))
}

fn badges() -> HtmlNode {
    let kinds = ["primary", "secondary", "accent", "ghost", "outline"];
    let mut args: Vec<Arg> =
        vec![class("flex flex-wrap gap-2").into(), div((class("badge"), "neutral")).into()];
    args.extend(kinds.iter().map(|kind| {
        Arg::from(div((class("badge"), class(eco_format!("badge-{kind}")), *kind)))
    }));
    div(args)
}

fn stats() -> HtmlNode {
    let stat = |heading: &str, value: &str, desc: &str| {
        div((
            class("stat"),
            div((class("stat-title"), heading)),
            div((class("stat-value"), value)),
            div((class("stat-desc"), desc)),
        ))
    };
    div((
        class("stats stats-vertical lg:stats-horizontal shadow"),
        stat("Downloads", "31K", "Jan 1st - Feb 1st"),
        stat("New Users", "4,200", "↗︎ 400 (22%)"),
        stat("New Registers", "1,200", "↘︎ 90 (14%)"),
    ))
}

/// A page that embeds a fragment produced by another template engine.
fn template() -> HtmlNode {
    template_with(PARTIAL, "Gopher")
}

fn template_with(source: &str, name: &str) -> HtmlNode {
    div((
        class("prose"),
        p("Before partial"),
        raw_from(|buf| partial(buf, source, name)),
        p("After partial"),
    ))
}

/// Render a Tera partial into the buffer, with autoescaping on.
fn partial(buf: &mut String, source: &str, name: &str) -> tera::Result<()> {
    let mut context = Context::new();
    context.insert("name", name);
    buf.push_str(&Tera::one_off(source, &context, true)?);
    Ok(())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pages_render() {
        for page in [DemoPage::Basic, DemoPage::Daisyui, DemoPage::Template] {
            for node in super::page(page) {
                ht_html::html(&node).unwrap();
            }
        }
    }

    #[test]
    fn test_template_page() {
        assert_eq!(
            ht_html::html(&template()).unwrap(),
            r#"<div class="prose"><p>Before partial</p><strong>Hello, Gopher</strong><p>After partial</p></div>"#,
        );
    }

    #[test]
    fn test_template_escapes_variables() {
        let node = template_with(PARTIAL, "<img src=x onerror=alert(1)>");
        assert_eq!(
            ht_html::html(&node).unwrap(),
            concat!(
                r#"<div class="prose"><p>Before partial</p>"#,
                "<strong>Hello, &lt;img src=x onerror=alert(1)&gt;</strong>",
                "<p>After partial</p></div>",
            ),
        );
    }

    #[test]
    fn test_template_failure_becomes_text() {
        let node = template_with("<strong>{{ name </strong>", "Gopher");
        let fragment = &node.children()[1];
        assert!(matches!(fragment, HtmlNode::Text(_)));
        assert!(!ht_html::html(&node).unwrap().contains("<strong>"));
    }

    #[test]
    fn test_buttons_merge_classes() {
        let node = buttons();
        let primary = node.children()[1].as_element().unwrap();
        assert_eq!(primary.attrs.get("class"), Some("btn btn-primary"));
        assert_eq!(node.children()[1].text_content(), "Primary");
        let disabled = node.children().last().unwrap().as_element().unwrap();
        assert_eq!(disabled.attrs.get("disabled"), Some(""));
    }

    #[test]
    fn test_neutral_alert_has_single_class() {
        let node = alerts();
        let neutral = node.children()[0].as_element().unwrap();
        assert_eq!(neutral.attrs.get("class"), Some("alert"));
        let info = node.children()[1].as_element().unwrap();
        assert_eq!(info.attrs.get("class"), Some("alert alert-info"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("primary"), "Primary");
        assert_eq!(capitalize(""), "");
    }
}
