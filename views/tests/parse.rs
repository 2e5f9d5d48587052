use indoc::indoc;
use pretty_assertions::assert_eq;
use views::property::value::Value;
use views::view::slots::PropType;
use views::{DiagnosticKind, ParseError, ParseOptions, Parsed, Parser};

fn parse(source: &str) -> Parsed {
    Parser::new(source.to_string(), 0)
        .parse()
        .expect("parse failed")
}

fn kinds(parsed: &Parsed) -> Vec<DiagnosticKind> {
    parsed.diagnostics.iter().map(|d| d.kind).collect()
}

fn names(parsed: &Parsed) -> Vec<&str> {
    parsed.views.iter().map(|v| v.name()).collect()
}

#[test]
fn nested_groups() {
    let parsed = parse(indoc! {"
        Vertical as Card
        backgroundColor: white
        Text as Title
        text: Hello
        Horizontal as Row
        Image
        source: a.png
        Text
        text: b
    "});

    assert!(parsed.diagnostics.is_empty());
    assert_eq!(names(&parsed), vec!["Card"]);

    let card = &parsed.views[0].root;
    assert_eq!(card.properties.len(), 1);
    let children: Vec<_> = card.children.iter().map(|b| b.id_name()).collect();
    assert_eq!(children, vec!["Title", "Row"]);

    let row = &card.children[1];
    assert_eq!(row.children.len(), 2);
    assert_eq!(
        row.property("source").map(|p| &p.value),
        None,
        "properties after a child belong to the child"
    );
    assert_eq!(
        row.children[0].property("source").map(|p| p.value.clone()),
        Some(Value::Text("a.png".into()))
    );
}

#[test]
fn children_index_suffixes_duplicates() {
    let parsed = parse("Vertical\nText\nText\nText as Title\nText\n");
    let index = parsed.views[0].root.children_index.as_ref().unwrap();
    let entries: Vec<_> = index.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(
        entries,
        vec![("Text", 0), ("Text1", 1), ("Title", 2), ("Text2", 3)]
    );
}

#[test]
fn parse_is_idempotent() {
    let source = indoc! {"
        Vertical
        onClick: props.onClick
        Text
        color: red
        when: props.isActive
        color: blue
    "};
    assert_eq!(parse(source), parse(source));
}

#[test]
fn list_holds_a_single_view() {
    let parsed = parse(indoc! {"
        List
        from: props.items
        Vertical as Row
        Text
        text: item.name

        Vertical as Extra
    "});

    assert_eq!(kinds(&parsed), vec![DiagnosticKind::ListArity]);
    let list = &parsed.views[0].root;
    assert_eq!(list.children.len(), 1);
    assert_eq!(list.children[0].id_name(), "Row");
    assert_eq!(parsed.views.len(), 1);
}

#[test]
fn basic_block_inside_list() {
    let parsed = parse("List\nText\nImage\n");

    assert_eq!(
        kinds(&parsed),
        vec![DiagnosticKind::BasicInList, DiagnosticKind::BlockInsideLeaf]
    );
    let nested = &parsed.diagnostics.as_slice()[1];
    assert_eq!(nested.notes, vec!["put 2 empty lines before".to_string()]);
    assert!(parsed.views[0].root.children.is_empty());
}

#[test]
fn block_after_a_leaf_top_block() {
    let parsed = parse("Text\ntext: hi\nImage\nsource: a.png\n");

    assert_eq!(kinds(&parsed), vec![DiagnosticKind::BlockInsideLeaf]);
    assert_eq!(
        parsed.diagnostics.as_slice()[0].notes,
        vec!["add a Vertical at the top".to_string()]
    );
    assert_eq!(names(&parsed), vec!["Text", "Image"]);

    let text = &parsed.views[0].root;
    assert_eq!(text.properties.len(), 1);
    assert_eq!(text.loc.end.line, 1);
}

#[test]
fn block_outside_the_top_block() {
    let parsed = parse("Vertical\nText\n\n\n\nImage\n");

    assert_eq!(kinds(&parsed), vec![DiagnosticKind::OutsideTopBlock]);
    assert_eq!(
        parsed.diagnostics.as_slice()[0].notes,
        vec!["remove 2 empty lines before".to_string()]
    );
    assert_eq!(names(&parsed), vec!["Vertical", "Image"]);
}

#[test]
fn captures_link_to_the_next_one() {
    let parsed = parse(indoc! {"
        Vertical
        CaptureEmail as Email
        CaptureSecure as Password
        Text as Label
        CaptureText
        CaptureText as Name
    "});

    let children = &parsed.views[0].root.children;
    assert_eq!(children[0].capture_next.as_deref(), Some("Password"));
    assert_eq!(children[1].capture_next.as_deref(), Some("Name"));
    assert_eq!(children[2].capture_next, None);
    assert_eq!(children[3].capture_next, None);
    assert_eq!(children[4].capture_next, None);
}

#[test]
fn scoped_variants_are_indexed() {
    let parsed = parse(indoc! {"
        Text
        color: red
        when: props.isActive
        color: blue
        fontSize: 12
    "});

    let text = &parsed.views[0].root;
    let color = text.scopes_for("color").unwrap();
    assert_eq!(color.get("props.isActive"), Some(&2));
    let size = text.scopes_for("fontSize").unwrap();
    assert_eq!(size.get("props.isActive"), Some(&3));

    assert!(text.has_default("color"));
    assert!(!text.has_default("fontSize"));
    assert_eq!(text.properties[2].in_scope.as_deref(), Some("props.isActive"));
    assert_eq!(text.properties[0].in_scope, None);
}

#[test]
fn stems_are_stripped() {
    let parsed = parse("Vertical\nonClick: props.go\nbackgroundColorHover: red\n");
    let hover = &parsed.views[0].root.properties[1];
    assert_eq!(hover.name, "backgroundColor");
    assert_eq!(hover.name_raw, "backgroundColorHover");
    assert!(hover.tags.style);
    assert!(parsed.views[0].root.is_actionable());
}

#[test]
fn bound_styles_mark_the_block_animated() {
    let parsed = parse("Vertical\nopacity: props.opacity\nText\ncolor: red\n");
    let root = &parsed.views[0].root;
    assert!(root.animated);
    assert!(!root.children[0].animated);
}

#[test]
fn fonts_are_collected() {
    let parsed = parse(indoc! {"
        Vertical
        Text
        fontFamily: 'Open Sans', sans-serif
        fontWeight: 700
        Text
        fontFamily: Roboto
        Image
        fontFamily: Ignored
    "});

    let families: Vec<_> = parsed.fonts.families().collect();
    assert_eq!(families, vec!["Open Sans", "Roboto"]);
    assert_eq!(parsed.fonts.weights("Open Sans").unwrap(), ["700"]);
    assert_eq!(parsed.fonts.weights("Roboto").unwrap(), ["400"]);
    assert_eq!(parsed.views[0].fonts, parsed.fonts);
}

#[test]
fn props_are_typed() {
    let parsed = parse(indoc! {"
        Vertical
        onClick: props.onSelect
        width: props.size
        when: props.isSelected
        backgroundColor: props.tint
    "});

    assert_eq!(parsed.props.get("onSelect"), Some(PropType::Function));
    assert_eq!(parsed.props.get("size"), Some(PropType::Number));
    assert_eq!(parsed.props.get("isSelected"), Some(PropType::Boolean));
    assert_eq!(parsed.props.get("tint"), Some(PropType::String));
    assert_eq!(parsed.views[0].slots, parsed.props);
}

#[test]
fn comments_are_kept_on_request() {
    let source = "Text\n# the title\n# # note for later\ntext: hi\n";

    let skipped = parse(source);
    assert_eq!(skipped.views[0].root.properties.len(), 1);

    let kept = Parser::new(source.to_string(), 0)
        .with_options(ParseOptions {
            skip_comments: false,
        })
        .parse()
        .unwrap();
    let properties = &kept.views[0].root.properties;
    assert_eq!(properties.len(), 3);
    assert!(properties[0].is_comment());
    assert!(!properties[0].tags.user_comment);
    assert_eq!(properties[0].value, Value::Text("the title".into()));
    assert!(properties[1].tags.user_comment);
    assert_eq!(properties[1].value, Value::Text("note for later".into()));
}

#[test]
fn crlf_is_normalized() {
    assert_eq!(
        parse("Vertical\r\nText\r\ntext: hi\r\n"),
        parse("Vertical\nText\ntext: hi\n")
    );
}

#[test]
fn empty_source_is_an_error() {
    let result = Parser::new("  \n\n".to_string(), 0).parse();
    assert_eq!(result, Err(ParseError::EmptySource));
}

#[test]
fn stray_lines_are_reported() {
    let parsed = parse("color: red\nVertical\nnot a line\n");
    assert_eq!(
        kinds(&parsed),
        vec![
            DiagnosticKind::OrphanProperty,
            DiagnosticKind::UnrecognizedLine
        ]
    );
    assert!(!parsed.diagnostics.has_errors());
}

#[test]
fn property_after_a_closed_block_is_reported() {
    let parsed = parse("Vertical\nHorizontal as Row\n\nbackgroundColor: red\n");

    assert_eq!(kinds(&parsed), vec![DiagnosticKind::OrphanProperty]);
    let orphan = &parsed.diagnostics.as_slice()[0];
    assert_eq!(orphan.message, "`Row` is already closed");
    assert_eq!(orphan.position.line, 3);
    assert!(parsed.views[0].root.children[0].properties.is_empty());
}

#[test]
fn diagnostics_render_with_source() {
    let source = "Text\nImage\n";
    let parsed = parse(source);
    let report = parsed.diagnostics.render("card.view", source);
    assert!(report.contains("warning"));
    assert!(report.contains("card.view"));
    assert!(report.contains("add a Vertical at the top"));
}
