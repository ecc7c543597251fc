use checkboxes::i18n::Identity;
use checkboxes::render::{Buffer, Rect, render_rows, rows_width};
use checkboxes::{CheckboxRow, CheckboxVariant, Checkboxes, Choice, FieldType, Selection};

fn row(label: &str, checked: bool, disabled: bool) -> CheckboxRow {
    CheckboxRow {
        id: label.to_lowercase(),
        label: label.into(),
        checked,
        disabled,
    }
}

#[test]
fn test_big_variant_rows() {
    let mut buf = Buffer::new(20, 3);
    let rows = vec![row("News", true, false), row("Blog", false, false)];
    render_rows(&mut buf, Rect::from_size(20, 3), &rows, CheckboxVariant::Big, None);

    assert_eq!(buf.row_text(0), "[x] News");
    assert_eq!(buf.row_text(1), "[ ] Blog");
    assert_eq!(buf.row_text(2), "");
}

#[test]
fn test_small_variant_rows() {
    let mut buf = Buffer::new(10, 2);
    let rows = vec![row("A", true, false), row("B", false, false)];
    render_rows(&mut buf, Rect::from_size(10, 2), &rows, CheckboxVariant::Small, None);

    assert_eq!(buf.row_text(0), "◼ A");
    assert_eq!(buf.row_text(1), "◻ B");
}

#[test]
fn test_checked_indicator_is_bold() {
    let mut buf = Buffer::new(10, 1);
    render_rows(
        &mut buf,
        Rect::from_size(10, 1),
        &[row("A", true, false)],
        CheckboxVariant::Big,
        None,
    );
    assert!(buf.get(1, 0).unwrap().style.bold);
    assert!(!buf.get(4, 0).unwrap().style.bold);
}

#[test]
fn test_disabled_rows_are_dimmed() {
    let mut buf = Buffer::new(10, 1);
    render_rows(
        &mut buf,
        Rect::from_size(10, 1),
        &[row("A", false, true)],
        CheckboxVariant::Big,
        None,
    );
    assert!(buf.get(0, 0).unwrap().style.dim);
    assert!(buf.get(4, 0).unwrap().style.dim);
}

#[test]
fn test_focused_row_is_reversed_across_area() {
    let mut buf = Buffer::new(12, 2);
    let rows = vec![row("A", false, false), row("B", false, false)];
    render_rows(&mut buf, Rect::from_size(12, 2), &rows, CheckboxVariant::Big, Some(1));

    assert!(!buf.get(0, 0).unwrap().style.reverse);
    assert!(buf.get(0, 1).unwrap().style.reverse);
    assert!(buf.get(11, 1).unwrap().style.reverse);
}

#[test]
fn test_focused_checked_row_keeps_bold_indicator() {
    let mut buf = Buffer::new(10, 1);
    render_rows(
        &mut buf,
        Rect::from_size(10, 1),
        &[row("A", true, true)],
        CheckboxVariant::Big,
        Some(0),
    );
    let indicator = buf.get(1, 0).unwrap().style;
    assert!(indicator.bold && indicator.dim && indicator.reverse);
    let label = buf.get(4, 0).unwrap().style;
    assert!(!label.bold && label.dim && label.reverse);
}

#[test]
fn test_long_labels_are_truncated() {
    let mut buf = Buffer::new(10, 1);
    render_rows(
        &mut buf,
        Rect::from_size(10, 1),
        &[row("Release notes", false, false)],
        CheckboxVariant::Big,
        None,
    );
    assert_eq!(buf.row_text(0), "[ ] Relea…");
}

#[test]
fn test_rows_clipped_to_area_height() {
    let mut buf = Buffer::new(10, 4);
    let rows = vec![row("A", false, false), row("B", false, false), row("C", false, false)];
    render_rows(&mut buf, Rect::new(1, 1, 9, 2), &rows, CheckboxVariant::Big, None);

    assert_eq!(buf.row_text(0), "");
    assert_eq!(buf.row_text(1), " [ ] A");
    assert_eq!(buf.row_text(2), " [ ] B");
    assert_eq!(buf.row_text(3), "");
}

#[test]
fn test_wide_labels() {
    let mut buf = Buffer::new(10, 1);
    render_rows(
        &mut buf,
        Rect::from_size(10, 1),
        &[row("日本", false, false)],
        CheckboxVariant::Big,
        None,
    );
    assert_eq!(buf.row_text(0), "[ ] 日本");
    assert!(buf.get(5, 0).unwrap().wide_continuation);
}

#[test]
fn test_rows_width() {
    let rows = vec![row("A", false, false), row("Longer", false, false)];
    assert_eq!(rows_width(&rows, CheckboxVariant::Big), 10);
    assert_eq!(rows_width(&rows, CheckboxVariant::Small), 8);
    assert_eq!(rows_width(&[], CheckboxVariant::Big), 3);
}

#[test]
fn test_sizes_saturate() {
    let huge = row(&"w".repeat(70_000), false, false);
    assert_eq!(rows_width(&[huge], CheckboxVariant::Big), u16::MAX);

    let choices = (0..70_000).map(|i| Choice::new(i.to_string(), "x")).collect();
    let field = FieldType::new("f", choices);
    assert_eq!(Checkboxes::new(&field).intrinsic_height(), u16::MAX);
}

#[test]
fn test_widget_render_and_size() {
    let field = FieldType::new("f", vec![Choice::new("a", "Alpha"), Choice::new("b", "Beta")]);
    let value = Selection::from_list(["b"]);
    let widget = Checkboxes::new(&field).value(&value);

    assert_eq!(widget.intrinsic_height(), 2);
    assert_eq!(widget.intrinsic_width(&Identity), 9);

    let mut buf = Buffer::new(12, 2);
    widget.render(&mut buf, Rect::from_size(12, 2), None, &Identity);
    assert_eq!(buf.row_text(0), "[ ] Alpha");
    assert_eq!(buf.row_text(1), "[x] Beta");
}

#[test]
fn test_buffer_diff() {
    let mut a = Buffer::new(4, 1);
    let b = Buffer::new(4, 1);
    assert_eq!(a.diff(&b).count(), 0);

    a.put_str(1, 0, "xy", Default::default(), 4);
    let changed: Vec<_> = a.diff(&b).map(|(x, y, cell)| (x, y, cell.char)).collect();
    assert_eq!(changed, vec![(1, 0, 'x'), (2, 0, 'y')]);

    a.clear();
    assert_eq!(a.diff(&b).count(), 0);
}
