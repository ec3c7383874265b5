use linesort::{
    AnnotationConfig, BlankLinePolicy, DirectionRequest, FieldTrim, LengthMetric, LineSorter,
    SortDirection, SortOptions, Transformed, transform,
};
use pretty_assertions::assert_eq;

fn sorter(options: SortOptions) -> LineSorter {
    LineSorter::new(options)
}

#[test]
fn test_transform_reports_direction() {
    let sorter = LineSorter::default();
    assert_eq!(
        sorter.transform("bb\na"),
        Transformed {
            text: "a\nbb".to_string(),
            direction: SortDirection::Ascending,
        }
    );
    assert_eq!(
        sorter.transform("a\nbb"),
        Transformed {
            text: "bb\na".to_string(),
            direction: SortDirection::Descending,
        }
    );
}

#[test]
fn test_degenerate_inputs_do_not_fail() {
    assert_eq!(transform(""), "");
    assert_eq!(transform("\n"), "");
    assert_eq!(transform("\n\n  \n\t"), "");
    assert_eq!(transform("x"), "x");
    assert_eq!(transform("@A\n@B"), "@A\n@B");
    assert_eq!(transform("   @A"), "   @A");
}

#[test]
fn test_trailing_annotations_sort_as_empty_field() {
    let input = "private String te;\nprivate String t;\n@Orphan";
    assert_eq!(
        transform(input),
        "@Orphan\nprivate String t;\nprivate String te;"
    );
}

#[test]
fn test_annotation_cut_off_by_blank_line_stays_detached() {
    let input = "@Detached\n\nprivate String te;\nprivate String t;";
    assert_eq!(
        transform(input),
        "@Detached\nprivate String t;\nprivate String te;"
    );
}

#[test]
fn test_final_newline_is_dropped_by_default() {
    assert_eq!(transform("bb;\na;\n"), "a;\nbb;");
}

#[test]
fn test_keep_trailing_newline() {
    let sorter = sorter(SortOptions {
        keep_trailing_newline: true,
        ..SortOptions::default()
    });

    let once = sorter.transform("bb;\na;\n");
    assert_eq!(once.text, "a;\nbb;\n");
    assert_eq!(once.direction, SortDirection::Ascending);

    let twice = sorter.transform(&once.text);
    assert_eq!(twice.text, "bb;\na;\n");
    assert_eq!(twice.direction, SortDirection::Descending);

    assert_eq!(sorter.transform("bb;\na;").text, "a;\nbb;");
}

#[test]
fn test_crlf_round_trips() {
    let once = transform("private String te;\r\nprivate String t;");
    assert_eq!(once, "private String t;\r\nprivate String te;");

    let twice = transform(&once);
    assert_eq!(twice, "private String te;\r\nprivate String t;");
}

#[test]
fn test_carriage_returns_inside_lines_are_kept() {
    assert_eq!(
        transform("private String te;\r\r\nprivate String t;"),
        "private String t;\r\nprivate String te;\r"
    );
}

#[test]
fn test_mixed_line_endings_split_on_lf_only() {
    let input = "private String te;\nprivate String test;\r\nprivate String t;";
    let output = transform(input);
    assert_eq!(
        output,
        "private String t;\nprivate String te;\nprivate String test;\r"
    );
    assert_eq!(output.matches('\r').count(), input.matches('\r').count());
}

#[test]
fn test_fixed_direction_never_toggles() {
    let ascending = sorter(SortOptions {
        direction: DirectionRequest::Fixed(SortDirection::Ascending),
        ..SortOptions::default()
    });
    let result = ascending.transform("a\nbb\nccc");
    assert_eq!(result.text, "a\nbb\nccc");
    assert_eq!(result.direction, SortDirection::Ascending);

    let descending = sorter(SortOptions {
        direction: DirectionRequest::Fixed(SortDirection::Descending),
        ..SortOptions::default()
    });
    assert_eq!(descending.transform("bb\nccc\na").text, "ccc\nbb\na");
}

#[test]
fn test_sort_ignores_direction_option() {
    let sorter = LineSorter::default();
    assert_eq!(sorter.sort("a\nbb", SortDirection::Ascending), "a\nbb");
    assert_eq!(sorter.sort("a\nbb", SortDirection::Descending), "bb\na");
}

#[test]
fn test_float_policy_keeps_blank_lines() {
    let sorter = sorter(SortOptions {
        blank_lines: BlankLinePolicy::Float,
        ..SortOptions::default()
    });
    assert_eq!(sorter.transform("bb\n\na").text, "\na\nbb");
}

#[test]
fn test_float_blank_sorted_last_ends_with_newline() {
    let sorter = sorter(SortOptions {
        blank_lines: BlankLinePolicy::Float,
        ..SortOptions::default()
    });
    // The blank line is an empty last line, so the text ends with its terminator.
    let result = sorter.transform("\na\nbb");
    assert_eq!(result.direction, SortDirection::Descending);
    assert_eq!(result.text, "bb\na\n");
}

#[test]
fn test_trim_policy_strips_field_whitespace() {
    let sorter = sorter(SortOptions {
        field_trim: FieldTrim::Trim,
        ..SortOptions::default()
    });
    assert_eq!(
        sorter.transform("  @Override\n      bb;\n a;").text,
        "a;\n  @Override\nbb;"
    );
}

#[test]
fn test_display_width_metric() {
    let options = SortOptions {
        direction: DirectionRequest::Fixed(SortDirection::Ascending),
        ..SortOptions::default()
    };
    let chars = sorter(options.clone());
    let width = sorter(SortOptions {
        metric: LengthMetric::DisplayWidth,
        ..options
    });

    assert_eq!(chars.transform("abc\n名前").text, "名前\nabc");
    assert_eq!(width.transform("名前\nabc").text, "abc\n名前");
}

#[test]
fn test_rust_attributes() {
    let sorter = sorter(SortOptions {
        annotations: AnnotationConfig::rust(),
        ..SortOptions::default()
    });
    let input = "    #[serde(default)]\n    pub long_name: u32,\n    pub a: u8,";
    assert_eq!(
        sorter.transform(input).text,
        "    pub a: u8,\n    #[serde(default)]\n    pub long_name: u32,"
    );
}

#[test]
fn test_without_annotations_every_line_is_a_field() {
    let sorter = sorter(SortOptions {
        annotations: AnnotationConfig::none(),
        ..SortOptions::default()
    });
    assert_eq!(
        sorter.transform("@Deprecated\nprivate int n;").text,
        "private int n;\n@Deprecated"
    );
}
