use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One renderable unit of a campaign post, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentElement {
    Text(Vec<StyleRun>),
    Image(ImageElement),
    Video(VideoElement),
    Embed(EmbedElement),
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRun {
    pub text: String,
    pub style: RunStyle,
}

impl StyleRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStyle {
    pub bold: bool,
    pub italic: bool,
    pub link: Option<String>,
}

impl RunStyle {
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && self.link.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageElement {
    pub src: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoElement {
    pub source_url: String,
    pub thumbnail_url: Option<String>,
    /// Playback start offset; zero unless the markup carries one.
    pub seek_position: Duration,
}

/// A third-party oEmbed widget, kept opaque for the embed renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedElement {
    /// Host of the first nested iframe's `src`; empty when unparseable.
    pub provider_host: String,
    /// The wrapper's inner markup, verbatim.
    pub raw_html: String,
}

impl ContentElement {
    /// True when both values are the same variant, regardless of content.
    pub fn same_kind(&self, other: &ContentElement) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}
