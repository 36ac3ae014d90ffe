use serde::{Deserialize, Serialize};

use crate::types::ContentElement;

/// One list mutation the rendering layer applies to its display state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DisplayOp {
    Insert {
        index: usize,
        element: ContentElement,
    },
    Remove {
        index: usize,
    },
    Update {
        index: usize,
        element: ContentElement,
    },
}

/// Positional diff between two element sequences.
///
/// Elements are compared index by index: an equal pair emits nothing, a
/// changed pair of the same variant emits `Update`, a variant change emits
/// `Remove` then `Insert` at that index. The tail of `next` is inserted in
/// order; the tail of `previous` is removed in reverse index order so that
/// earlier removals cannot shift later ones. Applying the result to
/// `previous` in order yields exactly `next`.
pub fn diff(previous: &[ContentElement], next: &[ContentElement]) -> Vec<DisplayOp> {
    let mut ops = Vec::new();
    let shared = previous.len().min(next.len());
    for (index, (old, new)) in previous.iter().zip(next.iter()).enumerate() {
        if old.same_kind(new) {
            if old != new {
                ops.push(DisplayOp::Update {
                    index,
                    element: new.clone(),
                });
            }
        } else {
            ops.push(DisplayOp::Remove { index });
            ops.push(DisplayOp::Insert {
                index,
                element: new.clone(),
            });
        }
    }
    for (index, element) in next.iter().enumerate().skip(shared) {
        ops.push(DisplayOp::Insert {
            index,
            element: element.clone(),
        });
    }
    for index in (shared..previous.len()).rev() {
        ops.push(DisplayOp::Remove { index });
    }
    ops
}

/// Reference applier for an op list produced by [`diff`] against the same
/// `previous` snapshot. Indices from any other pairing are not defended.
pub fn apply_ops(previous: &[ContentElement], ops: &[DisplayOp]) -> Vec<ContentElement> {
    let mut current = previous.to_vec();
    for op in ops {
        match op {
            DisplayOp::Insert { index, element } => current.insert(*index, element.clone()),
            DisplayOp::Remove { index } => {
                current.remove(*index);
            }
            DisplayOp::Update { index, element } => current[*index] = element.clone(),
        }
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmbedElement, ImageElement, StyleRun};

    fn text(content: &str) -> ContentElement {
        ContentElement::Text(vec![StyleRun::plain(content)])
    }

    fn image(src: &str) -> ContentElement {
        ContentElement::Image(ImageElement {
            src: src.to_string(),
            caption: None,
        })
    }

    fn embed(host: &str) -> ContentElement {
        ContentElement::Embed(EmbedElement {
            provider_host: host.to_string(),
            raw_html: format!("<iframe src=\"https://{}/x\"></iframe>", host),
        })
    }

    #[test]
    fn identical_sequences_diff_to_nothing() {
        let seq = vec![text("a"), image("x.png"), embed("www.youtube.com")];
        assert!(diff(&seq, &seq).is_empty());
    }

    #[test]
    fn changed_payload_becomes_update() {
        let previous = vec![text("A"), image("x.png")];
        let next = vec![text("A"), image("y.png")];
        assert_eq!(
            diff(&previous, &next),
            vec![DisplayOp::Update {
                index: 1,
                element: image("y.png"),
            }]
        );
    }

    #[test]
    fn appended_element_becomes_insert() {
        let previous = vec![text("A")];
        let next = vec![text("A"), image("x.png")];
        assert_eq!(
            diff(&previous, &next),
            vec![DisplayOp::Insert {
                index: 1,
                element: image("x.png"),
            }]
        );
    }

    #[test]
    fn variant_change_is_remove_then_insert() {
        let previous = vec![text("A"), text("B")];
        let next = vec![text("A"), image("x.png")];
        assert_eq!(
            diff(&previous, &next),
            vec![
                DisplayOp::Remove { index: 1 },
                DisplayOp::Insert {
                    index: 1,
                    element: image("x.png"),
                },
            ]
        );
    }

    #[test]
    fn diff_against_empty_removes_in_reverse_order() {
        let previous = vec![text("A"), image("x.png"), text("B")];
        assert_eq!(
            diff(&previous, &[]),
            vec![
                DisplayOp::Remove { index: 2 },
                DisplayOp::Remove { index: 1 },
                DisplayOp::Remove { index: 0 },
            ]
        );
        assert!(apply_ops(&previous, &diff(&previous, &[])).is_empty());
    }

    #[test]
    fn empty_previous_inserts_everything_in_order() {
        let next = vec![text("A"), image("x.png")];
        assert_eq!(
            diff(&[], &next),
            vec![
                DisplayOp::Insert {
                    index: 0,
                    element: text("A"),
                },
                DisplayOp::Insert {
                    index: 1,
                    element: image("x.png"),
                },
            ]
        );
    }

    #[test]
    fn applying_a_diff_round_trips() {
        let cases = [
            (Vec::new(), vec![text("a")]),
            (vec![text("a")], Vec::new()),
            (
                vec![text("a"), text("b"), image("x.png")],
                vec![image("y.png"), text("b"), text("c"), embed("open.spotify.com")],
            ),
            (
                vec![embed("w.soundcloud.com"), text("intro")],
                vec![text("intro"), embed("w.soundcloud.com")],
            ),
        ];
        for (previous, next) in cases {
            let ops = diff(&previous, &next);
            assert_eq!(apply_ops(&previous, &ops), next);
        }
    }
}
