//! Integration tests for layout: line breaking, pagination and documents.

use std::thread;

use tategaki::{
    break_lines, layout, paginate, Composition, Document, Error, JsonFormat, KinsokuPolicy,
    KinsokuRules, LayoutOptions, LineEnd,
};

const PROSE: &str = "吾輩は猫である。名前はまだ無い。\n\
どこで生れたかとんと見当がつかぬ。何でも薄暗いじめじめした所で「ニャーニャー」泣いていた事だけは記憶している。\n\
\n\
吾輩はここで始めて人間というものを見た。しかもあとで聞くとそれは書生という人間中で一番獰悪な種族であったそうだ。";

fn options(cpp: usize, cpl: usize) -> LayoutOptions {
    LayoutOptions::new()
        .with_chars_per_page(cpp)
        .with_chars_per_line(cpl)
}

#[test]
fn test_round_trip_all_modes() {
    for composition in [Composition::LineGrid, Composition::CharacterStream] {
        for policy in [
            KinsokuPolicy::PullForward,
            KinsokuPolicy::PushBack,
            KinsokuPolicy::Disabled,
        ] {
            for (cpp, cpl) in [(400, 20), (30, 5), (7, 3), (1, 1)] {
                let opts = options(cpp, cpl)
                    .with_kinsoku(policy)
                    .with_composition(composition);
                let doc = Document::from_text(PROSE, &opts).unwrap();
                assert_eq!(
                    doc.plain_text(),
                    PROSE,
                    "{:?} {:?} {}x{}",
                    composition,
                    policy,
                    cpp,
                    cpl
                );
            }
        }
    }
}

#[test]
fn test_page_numbers_are_contiguous() {
    let doc = Document::from_text(PROSE, &options(20, 5)).unwrap();
    assert!(doc.page_count() > 1);
    for (i, page) in doc.pages().iter().enumerate() {
        assert_eq!(page.number() as usize, i + 1);
        assert!(!page.is_empty());
    }
}

#[test]
fn test_page_boundary_400_401() {
    for composition in [Composition::LineGrid, Composition::CharacterStream] {
        let opts = LayoutOptions::default().with_composition(composition);

        let exact = Document::from_text(&"あ".repeat(400), &opts).unwrap();
        assert_eq!(exact.page_count(), 1);

        let over = Document::from_text(&"あ".repeat(401), &opts).unwrap();
        assert_eq!(over.page_count(), 2);
        assert_eq!(over.get_page(2).unwrap().content(), "あ");
    }
}

#[test]
fn test_newline_padding_in_character_stream() {
    let text = format!("あ\n{}う", "い".repeat(20));
    let pages = paginate(&text, 40, 20).unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].content(), format!("あ\n{}", "い".repeat(20)));
    assert_eq!(pages[1].content(), "う");
}

#[test]
fn test_pull_forward_hangs_at_most_one_char() {
    let rules = KinsokuRules::default();
    let texts = [
        PROSE.to_string(),
        "ー".repeat(75),
        format!("あいうえお{}か", "…".repeat(50)),
        format!("{}はい。」「いいえ。」", "」".repeat(13)),
    ];

    for text in &texts {
        for cpl in 1..12 {
            let lines = break_lines(text, &options(400, cpl)).unwrap();
            for line in &lines {
                assert!(
                    line.char_count() <= cpl + 1,
                    "line {:?} longer than {} + 1",
                    line.text(),
                    cpl
                );
            }
            for pair in lines.windows(2) {
                if pair[0].end() != LineEnd::Wrap {
                    continue;
                }
                let first = pair[1].first_char().unwrap();
                // Only the second of two adjacent no-start chars may open a line.
                if rules.is_no_start(first) {
                    assert_eq!(pair[0].char_count(), cpl + 1, "width {}", cpl);
                    assert!(rules.is_no_start(pair[0].last_char().unwrap()));
                }
            }
        }
    }
}

#[test]
fn test_long_prolonged_run_spans_pages() {
    let doc = Document::from_text(&"ー".repeat(1000), &LayoutOptions::default()).unwrap();
    assert!(doc.page_count() > 1);
    assert_eq!(doc.plain_text(), "ー".repeat(1000));
    for page in doc.pages() {
        assert!(page.line_count() <= 20);
        assert!(page.lines().iter().all(|l| l.char_count() <= 21));
    }
}

#[test]
fn test_push_back_never_ends_wrapped_line_with_opening_bracket() {
    let rules = KinsokuRules::default();
    let text = "あいう「えお」かきく（けこ）さしす『せそ』";
    let opts = options(400, 1).with_kinsoku(KinsokuPolicy::PushBack);

    for cpl in 2..8 {
        let lines = break_lines(text, &opts.clone().with_chars_per_line(cpl)).unwrap();
        for line in lines.iter().filter(|l| l.end() == LineEnd::Wrap) {
            let all_forbidden = line.text().chars().all(|c| rules.is_no_end(c));
            let last = line.last_char().unwrap();
            assert!(
                all_forbidden || !rules.is_no_end(last),
                "line {:?} ends with {:?} at width {}",
                line.text(),
                last,
                cpl
            );
        }
    }
}

#[test]
fn test_disabled_breaks_every_n_chars() {
    let opts = options(400, 4).with_kinsoku(KinsokuPolicy::Disabled);
    let lines = break_lines("あいう。えおか、き", &opts).unwrap();
    let texts: Vec<&str> = lines.iter().map(|l| l.text()).collect();
    assert_eq!(texts, ["あいう。", "えおか、", "き"]);
}

#[test]
fn test_grid_pages_respect_line_count() {
    let opts = options(30, 5);
    let doc = Document::from_text(PROSE, &opts).unwrap();
    assert_eq!(doc.lines_per_page(), 6);
    for page in doc.pages() {
        assert!(page.line_count() <= 6);
    }
}

#[test]
fn test_layout_is_deterministic() {
    let first = layout(PROSE, 30, 5).unwrap();
    let second = layout(PROSE, 30, 5).unwrap();
    assert_eq!(
        tategaki::render::to_json(&first, JsonFormat::Compact).unwrap(),
        tategaki::render::to_json(&second, JsonFormat::Compact).unwrap()
    );
}

#[test]
fn test_concurrent_layout_matches_sequential() {
    let expected = layout(PROSE, 30, 5).unwrap().plain_text();
    let page_count = layout(PROSE, 30, 5).unwrap().page_count();

    thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| layout(PROSE, 30, 5).unwrap()))
            .collect();
        for handle in handles {
            let doc = handle.join().unwrap();
            assert_eq!(doc.plain_text(), expected);
            assert_eq!(doc.page_count(), page_count);
        }
    });
}

#[test]
fn test_empty_text_rejected() {
    assert!(matches!(layout("", 400, 20), Err(Error::EmptyContent)));
}

#[test]
fn test_invalid_config_rejected() {
    assert!(matches!(layout("あ", 0, 20), Err(Error::InvalidConfig(_))));
    assert!(matches!(layout("あ", 400, 0), Err(Error::InvalidConfig(_))));
    assert!(matches!(layout("あ", 10, 20), Err(Error::InvalidConfig(_))));
}

#[test]
fn test_line_endings_and_nfc_normalized() {
    let doc = layout("か\u{3099}\r\nき\rく", 400, 20).unwrap();
    assert_eq!(doc.plain_text(), "が\nき\nく");

    let raw = LayoutOptions::default().with_normalization(false);
    let doc = Document::from_text("か\u{3099}", &raw).unwrap();
    assert_eq!(doc.plain_text(), "か\u{3099}");
}

#[test]
fn test_blank_lines_are_kept() {
    let lines = break_lines("あ\n\nい", &LayoutOptions::default()).unwrap();
    let texts: Vec<&str> = lines.iter().map(|l| l.text()).collect();
    assert_eq!(texts, ["あ", "", "い"]);
    assert!(lines[1].is_blank());
}
