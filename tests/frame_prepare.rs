// tests/frame_prepare.rs
//
// Tests for the load-time preparation pipeline and the descriptive
// statistics behind the Data page.
//
use baac_scope::frame::{self, Frame};

fn load(text: &str) -> Frame {
    frame::prepare(Frame::from_csv(text, ';'))
}

#[test]
fn decimal_commas_normalize_and_bad_coordinates_drop_the_row() {
    let f = load(
        "Num_Acc;lat;lon\n\
         1;48,85;2,35\n\
         2;-;3,1\n\
         3;43,3;5,4\n",
    );

    // Row 2 has no usable latitude; maps and the model need both.
    assert_eq!(f.nrows(), 2);
    assert_eq!(f.cell(0, 1), "48.85");
    assert_eq!(f.cell(0, 2), "2.35");
    assert_eq!(f.cell(1, 1), "43.3");
}

#[test]
fn long_is_renamed_to_lon() {
    let f = load("lat;long\n48,85;2,35\n");
    assert_eq!(f.headers, vec!["lat".to_string(), "lon".to_string()]);
    assert!(f.col("long").is_none());
}

#[test]
fn hrmn_colon_times_become_decimals() {
    let f = load("Num_Acc;hrmn\n1;12:30\n2;07:05\n3;whenever\n");

    assert_eq!(f.cell(0, 1), "12.30");
    assert_eq!(f.cell(1, 1), "07.05");
    // Junk time becomes a null cell; the row itself survives.
    assert_eq!(f.cell(2, 1), "");
    assert_eq!(f.nrows(), 3);
}

#[test]
fn departement_and_commune_codes() {
    // Corsica: "2A"/"2B" prefixes don't parse as numbers.
    let f = load("dep;com\n75;75056\n2A;2A004\n");

    assert_eq!(f.cell(0, 0), "75");
    assert_eq!(f.cell(1, 0), ""); // dep nulls out
    assert_eq!(f.cell(1, 1), "0"); // com zeroes out
}

#[test]
fn free_text_address_column_is_dropped() {
    let f = load("Num_Acc;adr;dep\n1;12 rue de la Paix;75\n");
    assert_eq!(f.headers, vec!["Num_Acc".to_string(), "dep".to_string()]);
    assert_eq!(f.cell(0, 1), "75");
}

#[test]
fn null_counts_include_ragged_rows() {
    let f = Frame {
        headers: vec!["a".into(), "b".into()],
        rows: vec![
            vec!["1".into(), "".into()],
            vec!["2".into()], // ragged: no cell for "b"
            vec!["".into(), "3".into()],
        ],
    };
    let nulls = frame::null_counts(&f);
    assert_eq!(nulls, vec![("a".to_string(), 1), ("b".to_string(), 2)]);
}

#[test]
fn describe_uses_sample_std_and_interpolated_quantiles() {
    let f = Frame {
        headers: vec!["v".into(), "label".into()],
        rows: (1..=4)
            .map(|i| vec![i.to_string(), "text".into()])
            .collect(),
    };

    let described = frame::describe(&f);
    // Only the numeric column shows up.
    assert_eq!(described.len(), 1);
    let (name, s) = &described[0];
    assert_eq!(name, "v");

    assert_eq!(s.count, 4);
    assert!((s.mean - 2.5).abs() < 1e-12);
    assert!((s.std - 1.2909944487358056).abs() < 1e-12); // ddof = 1
    assert_eq!(s.min, 1.0);
    assert!((s.q25 - 1.75).abs() < 1e-12);
    assert!((s.q50 - 2.5).abs() < 1e-12);
    assert!((s.q75 - 3.25).abs() < 1e-12);
    assert_eq!(s.max, 4.0);
}

#[test]
fn describe_skips_nulls_but_counts_the_rest() {
    let f = Frame {
        headers: vec!["v".into()],
        rows: vec![
            vec!["10".into()],
            vec!["".into()],
            vec!["30".into()],
        ],
    };
    let described = frame::describe(&f);
    assert_eq!(described[0].1.count, 2);
    assert!((described[0].1.mean - 20.0).abs() < 1e-12);
}

#[test]
fn numeric_column_detection() {
    let f = Frame {
        headers: vec!["n".into(), "mixed".into(), "empty".into()],
        rows: vec![
            vec!["1".into(), "1".into(), "".into()],
            vec!["2,5".into(), "two".into(), "".into()],
            vec!["".into(), "3".into(), "".into()],
        ],
    };
    assert!(f.is_numeric_column(0)); // commas and nulls are fine
    assert!(!f.is_numeric_column(1)); // one word spoils it
    assert!(!f.is_numeric_column(2)); // nothing to go on
    assert_eq!(f.numeric_columns(), vec![0]);
}

#[test]
fn histogram_bins_cover_the_range() {
    let values: Vec<f64> = (0..=10).map(|i| i as f64).collect();
    let h = frame::histogram(&values, 5).unwrap();

    assert_eq!(h.lo, 0.0);
    assert_eq!(h.hi, 10.0);
    // 0,1 | 2,3 | 4,5 | 6,7 | 8,9,10 — the max lands in the last bin.
    assert_eq!(h.counts, vec![2, 2, 2, 2, 3]);
    assert_eq!(h.counts.iter().sum::<usize>(), values.len());
    assert_eq!(h.max_count(), 3);

    let (lo, hi) = h.bin_range(1);
    assert!((lo - 2.0).abs() < 1e-12);
    assert!((hi - 4.0).abs() < 1e-12);
}

#[test]
fn histogram_degenerate_and_empty_input() {
    let h = frame::histogram(&[7.0, 7.0, 7.0], 20).unwrap();
    assert_eq!(h.lo, h.hi);
    assert_eq!(h.counts[0], 3);
    assert_eq!(h.counts[1..].iter().sum::<usize>(), 0);

    assert!(frame::histogram(&[], 20).is_none());
}

#[test]
fn parse_number_accepts_both_decimal_marks() {
    assert_eq!(frame::parse_number(" 48,85 "), Some(48.85));
    assert_eq!(frame::parse_number("2.35"), Some(2.35));
    assert_eq!(frame::parse_number("-0,5"), Some(-0.5));
    assert_eq!(frame::parse_number(""), None);
    assert_eq!(frame::parse_number("  "), None);
    assert_eq!(frame::parse_number("NUL"), None);
}
