//! End-to-end pipeline tests over complete synthetic documents.

use restruct::{
    render, BoundingBox, ContentItem, Fragment, FragmentDocument, NoisePattern, NoiseProfile,
    Page, Pipeline, PipelineOptions, RenderOptions, Restruct, Role,
};

fn frag(text: &str, x0: f32, y0: f32) -> Fragment {
    Fragment::text(text, BoundingBox::new(x0, y0, x0 + 150.0, y0 + 12.0))
}

/// A 3-page document: a cover, a two-column prose page, and a table
/// page bracketed by footer boilerplate.
fn sample_document() -> FragmentDocument {
    let mut doc = FragmentDocument::new();

    // Page 0: cover (always dropped)
    let mut cover = Page::new(0, 612.0, 792.0);
    cover.add_fragment(frag("Disciplinary Procedures Manual", 150.0, 300.0));
    cover.add_fragment(frag("2024 Edition", 250.0, 340.0));
    doc.add_page(cover);

    // Page 1: two columns: heading + prose on the left, a list on the
    // right (right column starts past mid=306 + margin)
    let mut prose = Page::new(1, 612.0, 792.0);
    prose.add_fragment(frag("(a) a verbal warning", 340.0, 80.0));
    prose.add_fragment(frag("1.  SCOPE", 50.0, 72.0));
    prose.add_fragment(frag("This manual governs the conduct process.", 50.0, 100.0));
    prose.add_fragment(frag("(b) a written reprimand", 340.0, 110.0));
    doc.add_page(prose);

    // Page 2: a 4x3 table bracketed by footer boilerplate
    let mut table = Page::new(2, 612.0, 792.0);
    table.add_fragment(frag("INTERNAL DRAFT - do not distribute", 150.0, 20.0));
    table.add_fragment(frag("Sanction   Level   Appealable", 50.0, 100.0));
    table.add_fragment(frag("Warning   1   yes", 50.0, 130.0));
    table.add_fragment(frag("Probation   2   yes", 50.0, 160.0));
    table.add_fragment(frag("Dismissal   3   no", 50.0, 190.0));
    table.add_fragment(frag("Page 3 of 3", 270.0, 760.0));
    doc.add_page(table);

    doc
}

fn profile_with_watermark() -> NoiseProfile {
    NoiseProfile::default().with_pattern(NoisePattern::Contains {
        token: "internal draft".to_string(),
    })
}

#[test]
fn end_to_end_scenario() {
    let doc = sample_document();
    let pipeline = Pipeline::new(
        PipelineOptions::new().with_noise_profile(profile_with_watermark()),
    )
    .unwrap();
    let stream = pipeline.process(&doc).unwrap();

    // Page 0 contributes nothing; page 1 contributes four units; page 2
    // contributes exactly one table
    let roles: Vec<Option<Role>> = stream
        .iter()
        .map(|item| match item {
            ContentItem::Unit(u) => Some(u.role),
            ContentItem::Table(_) => None,
        })
        .collect();
    assert_eq!(
        roles,
        vec![
            Some(Role::Heading1),
            Some(Role::Body),
            Some(Role::ListItem),
            Some(Role::ListItem),
            None,
        ]
    );

    // Left column in full before the right column
    let texts: Vec<String> = stream.iter().map(|i| i.plain_text()).collect();
    assert_eq!(texts[0], "1.  SCOPE");
    assert!(texts[1].starts_with("This manual"));
    assert!(texts[2].starts_with("(a)"));
    assert!(texts[3].starts_with("(b)"));

    // The table kept all 4 rows and 3 columns
    let table = match &stream.items[4] {
        ContentItem::Table(t) => t,
        other => panic!("expected table, got {:?}", other),
    };
    assert_eq!(table.row_count(), 4);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.header(), &["Sanction", "Level", "Appealable"]);

    // Neither footer line survives anywhere in the stream
    let all_text = stream.plain_text();
    assert!(!all_text.contains("Page 3 of 3"));
    assert!(!all_text.contains("INTERNAL DRAFT"));
}

#[test]
fn end_to_end_markdown() {
    let doc = sample_document();
    let result = Restruct::new()
        .with_noise_profile(profile_with_watermark())
        .process_source(&doc)
        .unwrap();
    let markdown = result.to_markdown().unwrap();

    assert!(markdown.starts_with("# 1.  SCOPE"));
    assert!(markdown.contains("- (a) a verbal warning"));
    assert!(markdown.contains("| Sanction | Level | Appealable |"));
    assert!(markdown.contains("| --- | --- | --- |"));
    assert!(!markdown.contains("Page 3 of 3"));
}

#[test]
fn single_table_row_is_not_a_table() {
    let mut doc = FragmentDocument::new();
    let mut page = Page::new(1, 612.0, 792.0);
    page.add_fragment(frag("Some introductory sentence here.", 50.0, 72.0));
    page.add_fragment(frag("left aligned   right aligned", 50.0, 100.0));
    page.add_fragment(frag("A closing sentence follows it.", 50.0, 130.0));
    doc.add_page(page);

    let stream = Pipeline::with_defaults().process(&doc).unwrap();
    assert_eq!(stream.len(), 3);
    assert!(stream.iter().all(|item| !item.is_table()));
}

#[test]
fn toc_page_is_dropped() {
    let mut doc = FragmentDocument::new();
    let mut toc = Page::new(1, 612.0, 792.0);
    toc.add_fragment(frag(
        "Table of Contents\n1. Scope ........ 2\n2. Terms ........ 4",
        50.0,
        72.0,
    ));
    doc.add_page(toc);

    let stream = Pipeline::with_defaults().process(&doc).unwrap();
    assert!(stream.is_empty());
}

#[test]
fn dehyphenation_spans_fragments() {
    let mut doc = FragmentDocument::new();
    let mut page = Page::new(1, 612.0, 792.0);
    page.add_fragment(frag("The committee reviews discipli-", 50.0, 72.0));
    page.add_fragment(frag("nary matters quarterly.", 50.0, 90.0));
    doc.add_page(page);

    let stream = Pipeline::with_defaults().process(&doc).unwrap();
    assert_eq!(stream.len(), 1);
    assert!(stream.plain_text().contains("disciplinary matters"));
}

#[test]
fn empty_stream_serializes_and_renders() {
    let doc = FragmentDocument::new();
    let stream = Pipeline::with_defaults().process(&doc).unwrap();
    assert!(stream.is_empty());

    let markdown = render::to_markdown(&stream, &RenderOptions::default()).unwrap();
    assert!(markdown.is_empty());

    let json = serde_json::to_string(&stream).unwrap();
    let parsed: restruct::ContentStream = serde_json::from_str(&json).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn content_stream_roundtrips_through_json() {
    let doc = sample_document();
    let pipeline = Pipeline::new(
        PipelineOptions::new().with_noise_profile(profile_with_watermark()),
    )
    .unwrap();
    let stream = pipeline.process(&doc).unwrap();

    let json = serde_json::to_string(&stream).unwrap();
    let parsed: restruct::ContentStream = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.len(), stream.len());
    assert_eq!(parsed.plain_text(), stream.plain_text());
}
