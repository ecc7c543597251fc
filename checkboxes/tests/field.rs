use checkboxes::{Choice, FieldType, FieldTypeError, Options, Selection};

const TAGS: &str = "
[fields.tags]
# shown on the edit page
type = checkboxes
label = Tags
choices = news, blog, release
choice_labels = News, Blog, Release
choice_labels[de] = Neuigkeiten, Blog, Veröffentlichung
default = news, blog
";

#[test]
fn test_parse_options_block() {
    let options = Options::parse(TAGS).unwrap();
    assert_eq!(options.get("type"), Some("checkboxes"));
    assert_eq!(options.get("choice_labels[de]"), Some("Neuigkeiten, Blog, Veröffentlichung"));
    assert_eq!(options.get("missing"), None);
}

#[test]
fn test_parse_rejects_line_without_equals() {
    let err = Options::parse("type = checkboxes\nchoices").unwrap_err();
    assert_eq!(err, FieldTypeError::Syntax { line: 2 });
}

#[test]
fn test_parse_rejects_second_section() {
    let text = "[fields.a]\nchoices = x, y\n[fields.b]\nchoices = z\n";
    let err = Options::parse(text).unwrap_err();
    assert_eq!(err, FieldTypeError::MultipleSections { line: 3 });
}

#[test]
fn test_single_section_header_is_ignored() {
    let options = Options::parse("[fields.a]\nchoices = x, y\n").unwrap();
    let field = FieldType::from_options("a", &options).unwrap();
    assert_eq!(field.choices.len(), 2);
}

#[test]
fn test_field_from_options() {
    let options = Options::parse(TAGS).unwrap();
    let field = FieldType::from_options("tags", &options).unwrap();

    assert_eq!(field.name, "tags");
    assert_eq!(field.display_label(), "Tags");
    assert_eq!(
        field.choices,
        vec![
            Choice::new("news", "News"),
            Choice::new("blog", "Blog"),
            Choice::new("release", "Release"),
        ]
    );
    assert_eq!(field.placeholder, Selection::from_list(["news", "blog"]));
}

#[test]
fn test_labels_default_to_ids() {
    let options = Options::new().with("choices", "a, b");
    let field = FieldType::from_options("f", &options).unwrap();
    assert_eq!(field.choices, vec![Choice::new("a", "a"), Choice::new("b", "b")]);
    assert_eq!(field.placeholder, Selection::Absent);
    assert_eq!(field.display_label(), "f");
}

#[test]
fn test_empty_default_is_absent() {
    let options = Options::new().with("choices", "a").with("default", "");
    let field = FieldType::from_options("f", &options).unwrap();
    assert_eq!(field.placeholder, Selection::Absent);
}

#[test]
fn test_whitespace_default_is_empty() {
    // Options trims values when parsed, not when set directly.
    let options = Options::new().with("choices", "a").with("default", " ");
    let field = FieldType::from_options("f", &options).unwrap();
    assert_eq!(field.placeholder, Selection::Empty);
}

#[test]
fn test_wrong_type_is_rejected() {
    let options = Options::new().with("type", "select").with("choices", "a");
    let err = FieldType::from_options("f", &options).unwrap_err();
    assert_eq!(
        err,
        FieldTypeError::UnsupportedType {
            field: "f".into(),
            found: "select".into(),
        }
    );
}

#[test]
fn test_missing_choices_is_rejected() {
    let options = Options::new().with("type", "checkboxes");
    let err = FieldType::from_options("f", &options).unwrap_err();
    assert_eq!(err, FieldTypeError::MissingChoices { field: "f".into() });
    assert_eq!(err.to_string(), "field f: no choices configured");
}

#[test]
fn test_label_count_mismatch_is_rejected() {
    let options = Options::new()
        .with("choices", "a, b")
        .with("choice_labels", "A");
    let err = FieldType::from_options("f", &options).unwrap_err();
    assert_eq!(
        err,
        FieldTypeError::LabelCountMismatch {
            field: "f".into(),
            choices: 2,
            labels: 1,
        }
    );
}

#[test]
fn test_choice_lookup() {
    let options = Options::new().with("choices", "a, b");
    let field = FieldType::from_options("f", &options).unwrap();
    assert_eq!(field.choice("b").map(|c| c.label_key.as_str()), Some("b"));
    assert!(field.choice("z").is_none());
}

#[test]
fn test_field_type_serde() {
    let options = Options::parse(TAGS).unwrap();
    let field = FieldType::from_options("tags", &options).unwrap();

    let json = serde_json::to_value(&field).unwrap();
    assert_eq!(json["placeholder"], "news, blog");
    assert_eq!(json["choices"][2]["id"], "release");

    let back: FieldType = serde_json::from_value(json).unwrap();
    assert_eq!(back, field);
}
