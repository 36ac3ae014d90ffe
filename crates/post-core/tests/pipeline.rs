use post_core::{apply_ops, diff, html_to_elements, ContentElement};

const FIRST_REVISION: &str = r#"
    <p>Hey everyone, the new album is <b>done</b>!</p>
    <figure><img src="https://cdn.example.com/cover.jpg" alt="Album cover"></figure>
    <p>Track list coming soon.</p>
    "#;

const SECOND_REVISION: &str = r#"
    <p>Hey everyone, the new album is <b>out now</b>!</p>
    <figure><img src="https://cdn.example.com/cover.jpg" alt="Album cover"></figure>
    <div class="oembed"><iframe src="https://open.spotify.com/embed/album/1"></iframe></div>
    <p>Track list coming soon.</p>
    "#;

#[test]
fn reparsed_revision_applies_cleanly_over_the_displayed_one() {
    let displayed = html_to_elements(FIRST_REVISION);
    let fresh = html_to_elements(SECOND_REVISION);
    let ops = diff(&displayed, &fresh);
    assert!(!ops.is_empty());
    assert_eq!(apply_ops(&displayed, &ops), fresh);
}

#[test]
fn unchanged_revision_produces_no_operations() {
    let displayed = html_to_elements(SECOND_REVISION);
    let fresh = html_to_elements(SECOND_REVISION);
    assert!(diff(&displayed, &fresh).is_empty());
}

#[test]
fn edit_in_place_keeps_untouched_elements_stable() {
    let displayed = html_to_elements(FIRST_REVISION);
    let fresh = html_to_elements(SECOND_REVISION);
    let ops = diff(&displayed, &fresh);
    // the cover image at index 1 is identical in both revisions
    assert!(matches!(displayed[1], ContentElement::Image(_)));
    assert!(ops.iter().all(|op| match op {
        post_core::DisplayOp::Update { index, .. } => *index != 1,
        post_core::DisplayOp::Remove { index } => *index != 1,
        _ => true,
    }));
}
