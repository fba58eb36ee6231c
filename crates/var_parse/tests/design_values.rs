use cotton_var_parse::{parse_css_vars, replace_var_fallbacks, strip_comments};
use pretty_assertions::assert_eq;

/// 设计工具导出的典型值：(原始值, 替换回退值后的结果, var 数量)
const CASES: &[(&str, &str, usize)] = &[
    ("16px", "16px", 0),
    ("var(--background-bg2, #FFF)", "#FFF", 1),
    ("var(--text-1)", "var(--text-1)", 1),
    (
        "1px solid var(--line-line_light, #E5E6EB)",
        "1px solid #E5E6EB",
        1,
    ),
    (
        "0px 4px 10px 0px var(--shadow, rgba(0, 0, 0, 0.10))",
        "0px 4px 10px 0px rgba(0, 0, 0, 0.10)",
        1,
    ),
    (
        "linear-gradient(90deg, var(--norm-brand_pink, #FF4D8D) 0%, var(--norm-brand_blue, #3B82F6) 100%)",
        "linear-gradient(90deg, #FF4D8D 0%, #3B82F6 100%)",
        2,
    ),
];

#[test]
fn test_design_tool_values() {
    let mut failed = Vec::new();

    for (input, expected, count) in CASES {
        let usages = parse_css_vars(input);
        let resolved = replace_var_fallbacks(input, &usages);

        if usages.len() != *count || resolved != *expected {
            failed.push(format!(
                "  ✗ {}: {} vars → '{}' (expected {} → '{}')",
                input,
                usages.len(),
                resolved,
                count,
                expected
            ));
        }
    }

    assert!(failed.is_empty(), "Failed cases:\n{}", failed.join("\n"));
}

#[test]
fn test_comment_then_parse() {
    let raw = "var(--text-1, #333) /* Text/Primary */";
    let cleaned = strip_comments(raw);
    let value = cleaned.trim();
    let usages = parse_css_vars(value);

    assert_eq!(usages.len(), 1);
    assert_eq!(replace_var_fallbacks(value, &usages), "#333");
}

#[test]
fn test_spans_are_ordered_and_disjoint() {
    let value = "var(--a, 1px) var(--b) calc(var(--c, 2px) + 1px)";
    let usages = parse_css_vars(value);

    assert_eq!(usages.len(), 3);
    for pair in usages.windows(2) {
        assert!(pair[0].start < pair[0].end);
        assert!(pair[0].end <= pair[1].start);
    }
    assert_eq!(usages[2].source(value), "var(--c, 2px)");
}
