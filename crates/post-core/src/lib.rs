pub mod diff;
pub mod parse;
pub mod types;

pub use diff::{apply_ops, diff, DisplayOp};
pub use parse::html_to_elements;
pub use types::{ContentElement, EmbedElement, ImageElement, RunStyle, StyleRun, VideoElement};
