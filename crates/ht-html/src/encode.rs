use ht_library::diag::{bail, StrResult};
use ht_library::html::{HtmlElement, HtmlNode};

/// Encodes an HTML tree into a string.
///
/// Fails if the tree contains something that cannot be represented in HTML
/// syntax, like a void element with children.
pub fn html(node: &HtmlNode) -> StrResult<String> {
    let mut w = Writer { buf: String::new() };
    write_node(&mut w, node)?;
    log::debug!("encoded HTML ({} bytes)", w.buf.len());
    Ok(w.buf)
}

// TODO: Pretty printing.

struct Writer {
    buf: String,
}

/// Encode an HTML node into the writer.
fn write_node(w: &mut Writer, node: &HtmlNode) -> StrResult<()> {
    match node {
        HtmlNode::Document(children) => {
            for child in children {
                write_node(w, child)?;
            }
        }
        HtmlNode::Doctype(name) => write_doctype(w, name)?,
        HtmlNode::Element(element) => write_element(w, element)?,
        HtmlNode::Text(text) => write_escaped(w, text),
        HtmlNode::Raw(markup) => w.buf.push_str(markup),
        HtmlNode::Comment(text) => write_comment(w, text)?,
    }
    Ok(())
}

/// Encode a document type declaration into the writer.
fn write_doctype(w: &mut Writer, name: &str) -> StrResult<()> {
    if name.contains('>') {
        bail!("doctype {name:?} may not contain `>`");
    }
    w.buf.push_str("<!DOCTYPE ");
    w.buf.push_str(name);
    w.buf.push('>');
    Ok(())
}

/// Encode a comment into the writer.
fn write_comment(w: &mut Writer, text: &str) -> StrResult<()> {
    // https://html.spec.whatwg.org/#comments
    if text.starts_with('>')
        || text.starts_with("->")
        || text.contains("<!--")
        || text.contains("-->")
        || text.contains("--!>")
        || text.ends_with("<!-")
    {
        bail!("comment {text:?} cannot be represented in HTML");
    }
    w.buf.push_str("<!--");
    w.buf.push_str(text);
    w.buf.push_str("-->");
    Ok(())
}

/// Encode text or an attribute value into the writer.
fn write_escaped(w: &mut Writer, text: &str) {
    for c in text.chars() {
        match c {
            '<' => w.buf.push_str("&lt;"),
            '>' => w.buf.push_str("&gt;"),
            '&' => w.buf.push_str("&amp;"),
            '\'' => w.buf.push_str("&#39;"),
            '"' => w.buf.push_str("&quot;"),
            _ => w.buf.push(c),
        }
    }
}

/// Encode one element into the writer.
fn write_element(w: &mut Writer, element: &HtmlElement) -> StrResult<()> {
    if element.tag.is_void() && !element.children.is_empty() {
        bail!("HTML void element {} may not have children", element.tag);
    }

    w.buf.push('<');
    w.buf.push_str(element.tag.as_str());

    for (key, value) in element.attrs.iter() {
        if !is_valid_attr_name(key) {
            bail!("invalid attribute name {key:?} on {}", element.tag);
        }
        w.buf.push(' ');
        w.buf.push_str(key);
        w.buf.push_str("=\"");
        write_escaped(w, value);
        w.buf.push('"');
    }

    w.buf.push('>');

    if element.tag.is_void() {
        return Ok(());
    }

    for node in &element.children {
        match node {
            HtmlNode::Text(text) if element.tag.is_raw_text() => {
                write_raw_text(w, element, text)?
            }
            _ => write_node(w, node)?,
        }
    }

    w.buf.push_str("</");
    w.buf.push_str(element.tag.as_str());
    w.buf.push('>');
    Ok(())
}

/// Encode the text of a `script` or `style` element verbatim.
///
/// https://html.spec.whatwg.org/#cdata-rcdata-restrictions
fn write_raw_text(w: &mut Writer, element: &HtmlElement, text: &str) -> StrResult<()> {
    let closing = format!("</{}", element.tag.as_str());
    if text.to_ascii_lowercase().contains(&closing) {
        bail!("{} text may not contain `{closing}`", element.tag);
    }
    w.buf.push_str(text);
    Ok(())
}

/// Whether the string is a valid attribute name.
///
/// https://html.spec.whatwg.org/#attributes-2
fn is_valid_attr_name(name: &str) -> bool {
    !name.is_empty()
        && name.chars().all(|c| {
            !c.is_control()
                && !c.is_whitespace()
                && !matches!(c, '"' | '\'' | '>' | '/' | '=' | '\u{FDD0}'..='\u{FDEF}')
        })
}
