/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use html_beautifier::{beautify, Options};

/// Helper to format with defaults.
fn pretty(source: &str) -> String {
    beautify(source, &Options::default())
}

#[test]
fn indents_with_four_spaces_by_default() {
    assert_eq!(pretty("<span>html</span>"), "<span>\n    html\n</span>");
}

#[test]
fn trailing_input_newline_is_not_kept() {
    assert_eq!(pretty("<span>html</span>\n"), "<span>\n    html\n</span>");
}

#[test]
fn nests_elements_one_level_per_tag() {
    assert_eq!(
        pretty("<div><span>a</span></div>"),
        "<div>\n    <span>\n        a\n    </span>\n</div>"
    );
}

#[test]
fn void_elements_do_not_indent() {
    assert_eq!(
        pretty("<div><br><span>x</span></div>"),
        "<div>\n    <br>\n    <span>\n        x\n    </span>\n</div>"
    );
}

#[test]
fn self_closing_tags_do_not_indent() {
    assert_eq!(
        pretty("<div><a-widget/>x</div>"),
        "<div>\n    <a-widget/>\n    x\n</div>"
    );
}

#[test]
fn end_tags_match_case_insensitively() {
    assert_eq!(pretty("<DIV>x</div>"), "<DIV>\n    x\n</div>");
}

#[test]
fn stray_end_tags_do_not_unwind_below_zero() {
    assert_eq!(pretty("</div><p>x</p>"), "</div>\n<p>\n    x\n</p>");
}

#[test]
fn honors_indent_size() {
    let options = Options {
        indent_size: 2,
        ..Options::default()
    };
    assert_eq!(
        beautify("<span>html</span>", &options),
        "<span>\n  html\n</span>"
    );
}

#[test]
fn honors_escaped_tab_indent_character() {
    let options = Options {
        indent_char: String::from("\\t"),
        indent_size: 1,
        ..Options::default()
    };
    assert_eq!(beautify("<span>x</span>", &options), "<span>\n\tx\n</span>");
}

#[test]
fn indent_level_offsets_every_line() {
    let options = Options {
        indent_level: 1,
        ..Options::default()
    };
    assert_eq!(
        beautify("<span>x</span>", &options),
        "    <span>\n        x\n    </span>"
    );
}

#[test]
fn joins_lines_with_the_configured_eol() {
    let options = Options {
        eol: String::from("\\r\\n"),
        ..Options::default()
    };
    assert_eq!(
        beautify("<span>x</span>", &options),
        "<span>\r\n    x\r\n</span>"
    );
}

#[test]
fn end_with_newline_appends_a_terminator() {
    let options = Options {
        end_with_newline: true,
        ..Options::default()
    };
    assert_eq!(beautify("<p>x</p>", &options), "<p>\n    x\n</p>\n");
}

#[test]
fn crlf_input_is_accepted() {
    assert_eq!(pretty("<div>\r\na\r\n</div>"), "<div>\n    a\n</div>");
}

#[test]
fn blank_lines_between_nodes_are_preserved() {
    assert_eq!(
        pretty("<div>a</div>\n\n\n<div>b</div>"),
        "<div>\n    a\n</div>\n\n\n<div>\n    b\n</div>"
    );
}

#[test]
fn blank_lines_are_capped_by_max_preserve_newlines() {
    let options = Options {
        max_preserve_newlines: 2,
        ..Options::default()
    };
    assert_eq!(
        beautify("<p>a</p>\n\n\n\n\n<p>b</p>", &options),
        "<p>\n    a\n</p>\n\n<p>\n    b\n</p>"
    );
}

#[test]
fn zero_cap_preserves_every_newline() {
    let options = Options {
        max_preserve_newlines: 0,
        ..Options::default()
    };
    assert_eq!(
        beautify("<p>a</p>\n\n\n\n<p>b</p>", &options),
        "<p>\n    a\n</p>\n\n\n\n<p>\n    b\n</p>"
    );
}

#[test]
fn disabled_preserve_newlines_drops_blank_lines() {
    let options = Options {
        preserve_newlines: false,
        ..Options::default()
    };
    assert_eq!(
        beautify("<p>a</p>\n\n\n<p>b</p>", &options),
        "<p>\n    a\n</p>\n<p>\n    b\n</p>"
    );
}

#[test]
fn leading_blank_lines_are_dropped() {
    assert_eq!(pretty("\n\n\n<p>x</p>"), "<p>\n    x\n</p>");
}

#[test]
fn multi_line_text_indents_each_line() {
    assert_eq!(pretty("<div>a\nb</div>"), "<div>\n    a\n    b\n</div>");
}

#[test]
fn pre_content_is_untouched() {
    assert_eq!(
        pretty("<div><pre>a\n   b</pre></div>"),
        "<div>\n    <pre>a\n   b</pre>\n</div>"
    );
}

#[test]
fn empty_script_stays_inline() {
    assert_eq!(
        pretty("<div><script></script></div>"),
        "<div>\n    <script></script>\n</div>"
    );
}

#[test]
fn script_content_is_untouched() {
    assert_eq!(
        pretty("<script>\nvar a = 1;\n</script>"),
        "<script>\nvar a = 1;\n</script>"
    );
}

#[test]
fn markup_inside_pre_is_not_reindented() {
    assert_eq!(pretty("<pre><b>x</b></pre>"), "<pre><b>x</b></pre>");
}

#[test]
fn comments_get_their_own_line() {
    assert_eq!(
        pretty("<div><!-- note -->x</div>"),
        "<div>\n    <!-- note -->\n    x\n</div>"
    );
}

#[test]
fn multi_line_comments_keep_their_shape() {
    assert_eq!(
        pretty("<div><!--a\n  b--></div>"),
        "<div>\n    <!--a\n  b-->\n</div>"
    );
}

#[test]
fn doctype_gets_its_own_line() {
    assert_eq!(
        pretty("<!DOCTYPE html><html>x</html>"),
        "<!DOCTYPE html>\n<html>\n    x\n</html>"
    );
}

#[test]
fn attributes_collapse_to_single_spaces() {
    assert_eq!(
        pretty("<div   id=\"x\"  class = 'y'>a</div>"),
        "<div id=\"x\" class='y'>\n    a\n</div>"
    );
}

#[test]
fn quoted_attribute_values_are_preserved() {
    assert_eq!(
        pretty("<a title=\"two  spaces\">x</a>"),
        "<a title=\"two  spaces\">\n    x\n</a>"
    );
}

#[test]
fn literal_angle_bracket_stays_text() {
    assert_eq!(pretty("<p>a < b</p>"), "<p>\n    a < b\n</p>");
}

#[test]
fn empty_input_formats_to_nothing() {
    assert_eq!(pretty(""), "");
}

#[test]
fn whitespace_only_input_formats_to_nothing() {
    assert_eq!(pretty("  \n \n"), "");
}

#[test]
fn empty_input_with_end_with_newline_is_one_terminator() {
    let options = Options {
        end_with_newline: true,
        ..Options::default()
    };
    assert_eq!(beautify("", &options), "\n");
}

#[test]
fn misnested_end_tags_degrade_gracefully() {
    assert_eq!(
        pretty("<b><i>x</b></i>"),
        "<b>\n    <i>\n        x\n</b>\n</i>"
    );
}

#[test]
fn full_document_round() {
    let source = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n</head>\n<body>\n<p>hi</p>\n</body>\n</html>\n";
    let expected = "<!DOCTYPE html>\n<html>\n    <head>\n        <meta charset=\"utf-8\">\n    </head>\n    <body>\n        <p>\n            hi\n        </p>\n    </body>\n</html>";
    assert_eq!(pretty(source), expected);
}
