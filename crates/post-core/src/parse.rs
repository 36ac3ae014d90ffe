use kuchiki::{traits::*, ElementData, NodeRef};

use crate::types::{ContentElement, RunStyle};

mod embed;
mod inline;
mod media;

use inline::RunBuilder;

/// Convert a campaign post HTML fragment into an ordered element sequence.
///
/// Pure function of its input: malformed markup is recovered by the
/// underlying tree builder, unclassifiable nodes degrade to plain text or
/// transparent containers, and empty input yields an empty sequence.
pub fn html_to_elements(html: &str) -> Vec<ContentElement> {
    let mut out = Vec::new();
    if html.trim().is_empty() {
        return out;
    }
    let document = kuchiki::parse_html().one(html.to_string());
    let mut text = RunBuilder::new();
    walk(&document, &RunStyle::default(), &mut out, &mut text);
    text.flush_into(&mut out);
    out
}

enum NodeClass {
    Embed,
    Video,
    Image,
    Block,
    Inline(InlineMark),
    LineBreak,
    Skip,
    Transparent,
}

enum InlineMark {
    Bold,
    Italic,
    Link,
}

fn classify(node: &NodeRef, el: &ElementData) -> NodeClass {
    if embed::is_embed_wrapper(node, el) {
        return NodeClass::Embed;
    }
    if media::is_video_node(el) {
        return NodeClass::Video;
    }
    let tag = el.name.local.to_lowercase();
    match tag.as_str() {
        "img" | "figure" => NodeClass::Image,
        "strong" | "b" => NodeClass::Inline(InlineMark::Bold),
        "em" | "i" => NodeClass::Inline(InlineMark::Italic),
        "a" => NodeClass::Inline(InlineMark::Link),
        "br" => NodeClass::LineBreak,
        "head" | "title" | "meta" | "link" | "script" | "style" | "noscript" | "template" => {
            NodeClass::Skip
        }
        "p" | "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "div" | "section" | "article"
        | "header" | "footer" | "main" | "aside" | "blockquote" | "pre" | "ul" | "ol" | "li"
        | "dl" | "dt" | "dd" | "hr" | "table" | "thead" | "tbody" | "tfoot" | "tr" | "td"
        | "th" | "caption" => NodeClass::Block,
        _ => NodeClass::Transparent,
    }
}

fn walk(node: &NodeRef, style: &RunStyle, out: &mut Vec<ContentElement>, text: &mut RunBuilder) {
    for child in node.children() {
        if let Some(data) = child.as_text() {
            text.push_text(&data.borrow(), style);
            continue;
        }
        let Some(el) = child.as_element() else {
            continue;
        };
        match classify(&child, el) {
            NodeClass::Skip => {}
            NodeClass::LineBreak => text.push_break(style),
            NodeClass::Embed => {
                text.flush_into(out);
                out.push(ContentElement::Embed(embed::embed_element(&child)));
            }
            NodeClass::Video => match media::video_element(&child, el) {
                Some(video) => {
                    text.flush_into(out);
                    out.push(ContentElement::Video(video));
                }
                // no usable source: salvage whatever text the node holds
                None => walk(&child, style, out, text),
            },
            NodeClass::Image => match media::image_element(&child, el) {
                Some(image) => {
                    text.flush_into(out);
                    out.push(ContentElement::Image(image));
                }
                None => {
                    if el.name.local.as_ref().eq_ignore_ascii_case("img") {
                        if let Some(alt) = media::image_alt_text(el) {
                            text.push_text(&alt, style);
                        }
                    } else {
                        text.flush_into(out);
                        walk(&child, &RunStyle::default(), out, text);
                        text.flush_into(out);
                    }
                }
            },
            NodeClass::Block => {
                text.flush_into(out);
                walk(&child, &RunStyle::default(), out, text);
                text.flush_into(out);
            }
            NodeClass::Inline(mark) => {
                let inner = styled(style, mark, el);
                walk(&child, &inner, out, text);
            }
            NodeClass::Transparent => walk(&child, style, out, text),
        }
    }
}

fn styled(base: &RunStyle, mark: InlineMark, el: &ElementData) -> RunStyle {
    let mut style = base.clone();
    match mark {
        InlineMark::Bold => style.bold = true,
        InlineMark::Italic => style.italic = true,
        InlineMark::Link => {
            if let Some(href) = el.attributes.borrow().get("href") {
                let href = href.trim();
                if !href.is_empty() {
                    style.link = Some(href.to_string());
                }
            }
        }
    }
    style
}
