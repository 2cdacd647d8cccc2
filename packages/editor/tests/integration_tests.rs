//! End-to-end edit protocol tests: open → live preview → commit/cancel

use lectern_document::{Deck, Page, Section, SectionAddress, SectionKind, StyleProps};
use lectern_editor::{
    EditController, EditorError, FontFamily, FontSize, InlineCommand, PreviewOp, Selection,
    SessionState,
};
use lectern_renderer::{render_page, Frame};

fn deck_and_frame() -> (Deck, Frame) {
    let deck = Deck::sample();
    let frame = render_page("page01", deck.get_page("page01").unwrap());
    (deck, frame)
}

fn addr() -> SectionAddress {
    SectionAddress::new("page01", 0)
}

#[test]
fn test_revert_restores_element_exactly_and_leaves_deck_alone() {
    let (deck, mut frame) = deck_and_frame();
    let before_element = frame.element(0).unwrap().clone();
    let before_section = deck.section(&addr()).unwrap().clone();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();

    // An arbitrary pile of live-preview mutations
    edits.preview(PreviewOp::SetFontSize(FontSize::Px80)).unwrap();
    edits
        .preview(PreviewOp::SetSectionColor("#00ff00".to_string()))
        .unwrap();
    edits
        .preview(PreviewOp::SetFontFamily(FontFamily::Kai))
        .unwrap();
    edits
        .preview(PreviewOp::SetSelection(Selection::new(0, 6)))
        .unwrap();
    edits
        .preview(PreviewOp::Inline(InlineCommand::Bold))
        .unwrap();
    edits
        .preview(PreviewOp::ReplaceContent {
            html: "完全不同的內容<br>第二行".to_string(),
            selection: Selection::caret(0),
        })
        .unwrap();

    edits.cancel(&mut frame).unwrap();

    assert_eq!(frame.element(0).unwrap(), &before_element);
    assert_eq!(deck.section(&addr()).unwrap(), &before_section);
    assert_eq!(edits.state(), SessionState::Closed);
}

#[test]
fn test_live_preview_mutates_element_not_deck() {
    let (deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    edits.preview(PreviewOp::SetFontSize(FontSize::Px60)).unwrap();

    // The bound element reflects the change immediately
    let session = edits.session().unwrap();
    assert_eq!(session.element().font_size.as_deref(), Some("60px"));

    // The deck still carries the stored style
    let style = deck.section(&addr()).unwrap().style.as_ref().unwrap();
    assert_eq!(style.font_size.as_deref(), Some("48px"));
}

#[test]
fn test_inline_format_syncs_edit_area_into_element() {
    let (deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    edits
        .preview(PreviewOp::SetSelection(Selection::new(0, "歡迎".len())))
        .unwrap();
    edits
        .preview(PreviewOp::Inline(InlineCommand::Bold))
        .unwrap();

    let session = edits.session().unwrap();
    assert_eq!(session.area().html, "<b>歡迎</b>來到生命河");
    assert_eq!(session.element().html, "<b>歡迎</b>來到生命河");
}

#[test]
fn test_commit_writes_all_three_style_fields_and_content() {
    let (mut deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();

    // Touch nothing; commit must still write the whole override
    let committed = edits.commit(&mut deck).unwrap();
    assert_eq!(committed, addr());

    let section = deck.section(&addr()).unwrap();
    let style = section.style.as_ref().unwrap();
    assert_eq!(style.font_size.as_deref(), Some("48px"));
    assert_eq!(style.color.as_deref(), Some("#ffffff"));
    assert_eq!(style.font_family, None);
    assert_eq!(section.content, "歡迎來到生命河");
    assert_eq!(edits.state(), SessionState::Closed);
}

#[test]
fn test_commit_carries_touched_controls() {
    let (mut deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    edits.preview(PreviewOp::SetFontSize(FontSize::Px60)).unwrap();
    edits
        .preview(PreviewOp::SetFontFamily(FontFamily::JhengHei))
        .unwrap();
    edits
        .preview(PreviewOp::SetSectionColor("#ffee00".to_string()))
        .unwrap();
    edits
        .preview(PreviewOp::ReplaceContent {
            html: "新詞<br>新句".to_string(),
            selection: Selection::caret(0),
        })
        .unwrap();

    edits.commit(&mut deck).unwrap();

    let section = deck.section(&addr()).unwrap();
    let style = section.style.as_ref().unwrap();
    assert_eq!(style.font_size.as_deref(), Some("60px"));
    assert_eq!(style.color.as_deref(), Some("#ffee00"));
    assert_eq!(style.font_family.as_deref(), Some("Microsoft JhengHei"));
    assert_eq!(section.content, "新詞<br>新句");
}

#[test]
fn test_second_open_is_rejected_while_open() {
    let (deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();

    let err = edits.open(&deck, &mut frame, addr(), 0).unwrap_err();
    assert!(matches!(err, EditorError::SessionAlreadyOpen));

    // The first session is still live and usable
    assert_eq!(edits.state(), SessionState::Open);
    edits.preview(PreviewOp::SetFontSize(FontSize::Px32)).unwrap();
}

#[test]
fn test_open_after_close_succeeds() {
    let (mut deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    edits.commit(&mut deck).unwrap();

    // Repaint returns element ownership to the frame
    frame = render_page("page01", deck.get_page("page01").unwrap());
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    edits.cancel(&mut frame).unwrap();
    assert_eq!(edits.state(), SessionState::Closed);
}

#[test]
fn test_session_takes_element_out_of_frame() {
    let (deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();

    // The slot is vacant while the session owns the element
    assert!(frame.element(0).is_none());

    edits.cancel(&mut frame).unwrap();
    assert!(frame.element(0).is_some());
}

#[test]
fn test_preview_without_session_fails() {
    let mut edits = EditController::new();
    let err = edits
        .preview(PreviewOp::SetFontSize(FontSize::Px24))
        .unwrap_err();
    assert!(matches!(err, EditorError::SessionNotOpen));
}

#[test]
fn test_panel_resets_between_sessions() {
    let (mut deck, mut frame) = deck_and_frame();

    let mut edits = EditController::new();
    edits.open(&deck, &mut frame, addr(), 0).unwrap();

    // Drag the panel somewhere far away
    let panel = edits.session_mut().unwrap().panel_mut();
    panel.begin_drag((0.0, 0.0));
    panel.drag_to((5000.0, 5000.0));
    panel.end_drag();
    assert_eq!(edits.session().unwrap().panel().offset(), (5000.0, 5000.0));

    edits.commit(&mut deck).unwrap();
    frame = render_page("page01", deck.get_page("page01").unwrap());

    // The next session opens back at the centered default
    edits.open(&deck, &mut frame, addr(), 0).unwrap();
    assert_eq!(edits.session().unwrap().panel().offset(), (0.0, 0.0));
}

#[test]
fn test_open_on_raw_section_is_rejected() {
    let mut deck = Deck::new();
    deck.pages.insert(
        "page01",
        Page {
            title: "圖".to_string(),
            nav_label: None,
            background: None,
            sections: vec![Section {
                kind: SectionKind::Other("image".to_string()),
                content: "<img src='x.png'>".to_string(),
                style: Some(StyleProps::default()),
            }],
        },
    );
    let mut frame = render_page("page01", deck.get_page("page01").unwrap());

    let mut edits = EditController::new();
    let err = edits.open(&deck, &mut frame, addr(), 0).unwrap_err();
    assert!(matches!(err, EditorError::NotEditable(_)));
}

#[test]
fn test_open_on_vacated_slot_fails() {
    let (deck, mut frame) = deck_and_frame();
    frame.take_element(0);

    let mut edits = EditController::new();
    let err = edits.open(&deck, &mut frame, addr(), 0).unwrap_err();
    assert!(matches!(err, EditorError::ElementUnbound { slot: 0 }));
}
