//! FeatureTable construction, column access, and CSV output tests.

use frametab::{COLUMNS, FeatureTable, FrameStack, build_rows};
use ndarray::{Array2, Array4};

fn coordinate_stack(frames: usize, height: usize, width: usize) -> FrameStack {
    FrameStack::from_array(Array4::from_shape_fn(
        (frames, height, width, 6),
        |(f, i, j, c)| (f * 1000 + i * 100 + j * 10 + c) as f64,
    ))
}

// ── construction ───────────────────────────────────────────────────

#[test]
fn from_stack_matches_build_rows() {
    let stack = coordinate_stack(4, 3, 2);
    let selection = [0, 3, 1];

    let table = FeatureTable::from_stack(&stack, &selection);
    let rows = build_rows(&stack, &selection);

    assert_eq!(table.num_rows(), rows.nrows());
    assert_eq!(table.data(), rows.view());
}

#[test]
fn from_single_frame_labels_every_row() {
    let stack = coordinate_stack(3, 2, 2);
    let table = FeatureTable::from_single_frame(stack.frame(1), 7.0);

    assert_eq!(table.num_rows(), 2 * 2);
    let labels = table.column("f").expect("f column exists");
    assert!(labels.iter().all(|&label| label == 7.0));

    // Channel values come from frame 1 even though the label says 7.
    let blues = table.column("B").expect("B column exists");
    assert_eq!(blues[0], 1000.0);
}

#[test]
fn single_element_selection_equals_single_frame_path() {
    let stack = coordinate_stack(4, 3, 2);

    let via_selection = FeatureTable::from_stack(&stack, &[2]);
    let via_frame = FeatureTable::from_single_frame(stack.frame(2), 2.0);

    assert_eq!(via_selection.data(), via_frame.data());
}

#[test]
fn empty_selection_gives_empty_table() {
    let stack = coordinate_stack(2, 2, 2);
    let table = FeatureTable::from_stack(&stack, &[]);
    assert!(table.is_empty());
    assert_eq!(table.num_columns(), COLUMNS.len());
}

#[test]
#[should_panic]
fn from_rows_rejects_wrong_width() {
    let _table = FeatureTable::from_rows(Array2::zeros((4, 5)));
}

// ── column access ──────────────────────────────────────────────────

#[test]
fn columns_resolve_by_name() {
    let stack = coordinate_stack(2, 2, 2);
    let table = FeatureTable::from_stack(&stack, &[1]);

    for (index, name) in COLUMNS.iter().enumerate() {
        let column = table.column(name).expect("every listed column resolves");
        assert_eq!(column, table.data().column(index));
    }

    assert!(table.column("x").is_none());
    assert!(table.column("").is_none());
}

#[test]
fn coordinate_columns_count_pixels() {
    let stack = coordinate_stack(2, 3, 4);
    let table = FeatureTable::from_stack(&stack, &[0]);

    let i = table.column("i").expect("i column exists");
    let j = table.column("j").expect("j column exists");
    assert_eq!(i.iter().cloned().fold(f64::MIN, f64::max), 2.0);
    assert_eq!(j.iter().cloned().fold(f64::MIN, f64::max), 3.0);
}

// ── CSV output ─────────────────────────────────────────────────────

#[test]
fn csv_starts_with_header() {
    let stack = coordinate_stack(1, 1, 2);
    let table = FeatureTable::from_stack(&stack, &[0]);

    let mut output = Vec::new();
    table.write_csv(&mut output).expect("write to memory");
    let text = String::from_utf8(output).expect("CSV is UTF-8");

    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("f,i,j,B,G,R,H,S,V"));
    assert_eq!(lines.count(), 2, "one line per pixel after the header");
}

#[test]
fn csv_writes_integral_values_without_fraction() {
    let stack = coordinate_stack(1, 1, 1);
    let table = FeatureTable::from_stack(&stack, &[0]);

    let mut output = Vec::new();
    table.write_csv(&mut output).expect("write to memory");
    let text = String::from_utf8(output).expect("CSV is UTF-8");

    assert_eq!(text.lines().nth(1), Some("0,0,0,0,1,2,3,4,5"));
}

#[test]
fn save_csv_round_trips_through_a_file() {
    let stack = coordinate_stack(2, 2, 2);
    let table = FeatureTable::from_stack(&stack, &[0, 1]);

    let directory = tempfile::tempdir().expect("Failed to create temp dir");
    let path = directory.path().join("pixels.csv");
    table.save_csv(&path).expect("save CSV");

    let text = std::fs::read_to_string(&path).expect("read CSV back");
    assert_eq!(text.lines().count(), 1 + table.num_rows());
    assert!(text.starts_with("f,i,j,"));
}

#[test]
fn empty_table_writes_header_only() {
    let stack = coordinate_stack(1, 2, 2);
    let table = FeatureTable::from_stack(&stack, &[]);

    let mut output = Vec::new();
    table.write_csv(&mut output).expect("write to memory");
    let text = String::from_utf8(output).expect("CSV is UTF-8");
    assert_eq!(text, "f,i,j,B,G,R,H,S,V\n");
}
