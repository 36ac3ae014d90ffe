use std::time::Duration;

use kuchiki::{Attributes, ElementData, NodeRef};

use super::inline::collapse_text;
use crate::types::{ImageElement, VideoElement};

pub(crate) fn is_video_node(el: &ElementData) -> bool {
    if el.name.local.as_ref().eq_ignore_ascii_case("video") {
        return true;
    }
    el.attributes.borrow().get("data-video-url").is_some()
}

pub(crate) fn image_element(node: &NodeRef, el: &ElementData) -> Option<ImageElement> {
    let tag = el.name.local.to_lowercase();
    if tag == "img" {
        let attrs = el.attributes.borrow();
        let src = image_src(&attrs)?;
        let caption = image_label(&attrs);
        return Some(ImageElement { src, caption });
    }
    // figure: the first nested img supplies the source
    let mut src = None;
    let mut alt = None;
    if let Ok(mut imgs) = node.select("img") {
        if let Some(img) = imgs.next() {
            let attrs = img.attributes.borrow();
            src = image_src(&attrs);
            alt = image_label(&attrs);
        }
    }
    let src = src?;
    let caption = figure_caption(node).or(alt);
    Some(ImageElement { src, caption })
}

pub(crate) fn image_alt_text(el: &ElementData) -> Option<String> {
    image_label(&el.attributes.borrow())
}

fn image_src(attrs: &Attributes) -> Option<String> {
    non_empty(attrs.get("src")).or_else(|| non_empty(attrs.get("data-src")))
}

fn image_label(attrs: &Attributes) -> Option<String> {
    let label = attrs
        .get("alt")
        .or_else(|| attrs.get("title"))
        .or_else(|| attrs.get("aria-label"));
    label.map(collapse_text).filter(|label| !label.is_empty())
}

fn figure_caption(node: &NodeRef) -> Option<String> {
    let mut captions = node.select("figcaption").ok()?;
    captions
        .next()
        .map(|cap| collapse_text(&cap.as_node().text_contents()))
        .filter(|text| !text.is_empty())
}

pub(crate) fn video_element(node: &NodeRef, el: &ElementData) -> Option<VideoElement> {
    let attrs = el.attributes.borrow();
    if attrs.get("data-video-url").is_some() {
        let source_url = non_empty(attrs.get("data-video-hls"))
            .or_else(|| non_empty(attrs.get("data-video-high")))
            .or_else(|| non_empty(attrs.get("data-video-url")))?;
        return Some(VideoElement {
            source_url,
            thumbnail_url: non_empty(attrs.get("data-video-poster")),
            seek_position: seek_seconds(attrs.get("data-video-start")),
        });
    }

    // bare <video>: rank the src attribute and <source> children
    let mut hls = None;
    let mut high = None;
    let mut first = None;
    for child in node.children() {
        let Some(source) = child.as_element() else {
            continue;
        };
        if !source.name.local.as_ref().eq_ignore_ascii_case("source") {
            continue;
        }
        let sattrs = source.attributes.borrow();
        let Some(src) = non_empty(sattrs.get("src")) else {
            continue;
        };
        if hls.is_none() && is_hls(&src, sattrs.get("type")) {
            hls = Some(src.clone());
        } else if high.is_none() && is_high_quality(&sattrs) {
            high = Some(src.clone());
        }
        if first.is_none() {
            first = Some(src);
        }
    }
    let base = non_empty(attrs.get("src"));
    if hls.is_none() {
        if let Some(base) = base.as_deref() {
            if is_hls(base, None) {
                hls = Some(base.to_string());
            }
        }
    }
    let Some(source_url) = hls.or(high).or(base).or(first) else {
        log::debug!("video node without a usable source, keeping its text only");
        return None;
    };
    Some(VideoElement {
        source_url,
        thumbnail_url: non_empty(attrs.get("poster")),
        seek_position: seek_seconds(attrs.get("data-start")),
    })
}

fn is_hls(src: &str, mime: Option<&str>) -> bool {
    if let Some(mime) = mime {
        if mime.to_ascii_lowercase().contains("mpegurl") {
            return true;
        }
    }
    let path = src.split(['?', '#']).next().unwrap_or(src);
    path.to_ascii_lowercase().ends_with(".m3u8")
}

fn is_high_quality(attrs: &Attributes) -> bool {
    attrs
        .get("data-quality")
        .or_else(|| attrs.get("label"))
        .map_or(false, |q| q.trim().eq_ignore_ascii_case("high"))
}

fn seek_seconds(value: Option<&str>) -> Duration {
    let secs = value.and_then(|v| v.trim().parse::<f64>().ok());
    match secs {
        // try_from handles the non-finite, negative, and overflow cases
        Some(secs) => Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO),
        None => Duration::ZERO,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
