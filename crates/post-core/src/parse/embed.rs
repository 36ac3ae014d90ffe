use kuchiki::{ElementData, NodeRef};
use url::Url;

use crate::types::EmbedElement;

// Authoring convention for third-party oEmbed widgets: a wrapper marked by
// class or data attribute, holding the provider's iframe.
const MARKER_CLASS: &str = "oembed";
const MARKER_ATTR: &str = "data-oembed-url";

pub(crate) fn is_embed_wrapper(node: &NodeRef, el: &ElementData) -> bool {
    has_marker(el) && first_iframe(node).is_some()
}

/// Captures the wrapper as one opaque element; its children are not walked.
pub(crate) fn embed_element(node: &NodeRef) -> EmbedElement {
    let provider_host = first_iframe(node)
        .and_then(|iframe| iframe.attributes.borrow().get("src").map(str::to_string))
        .map(|src| host_of(&src))
        .unwrap_or_default();
    EmbedElement {
        provider_host,
        raw_html: inner_html(node),
    }
}

fn has_marker(el: &ElementData) -> bool {
    let attrs = el.attributes.borrow();
    if attrs.get(MARKER_ATTR).is_some() {
        return true;
    }
    attrs.get("class").map_or(false, |classes| {
        classes
            .split_ascii_whitespace()
            .any(|class| class.eq_ignore_ascii_case(MARKER_CLASS))
    })
}

fn first_iframe(node: &NodeRef) -> Option<kuchiki::NodeDataRef<ElementData>> {
    node.select("iframe").ok()?.next()
}

fn host_of(src: &str) -> String {
    let src = src.trim();
    let parsed = match Url::parse(src) {
        Ok(url) => Some(url),
        // scheme-relative src is common in pasted embed markup
        Err(_) if src.starts_with("//") => Url::parse(&format!("https:{src}")).ok(),
        Err(_) => None,
    };
    match parsed.as_ref().and_then(|url| url.host_str()) {
        Some(host) => host.to_string(),
        None => {
            log::debug!("embed iframe src has no parseable host: {src:?}");
            String::new()
        }
    }
}

fn inner_html(node: &NodeRef) -> String {
    let mut bytes = Vec::new();
    for child in node.children() {
        if let Err(err) = child.serialize(&mut bytes) {
            log::debug!("failed to serialize embed markup: {err}");
        }
    }
    String::from_utf8(bytes).unwrap_or_default()
}
