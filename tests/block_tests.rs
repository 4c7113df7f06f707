use pretty_assertions::assert_eq;
use streammark::to_html;

// Headings

#[test]
fn heading_level_two() {
    assert_eq!(to_html("## Title\n"), "<h2>Title</h2>\n");
}

#[test]
fn heading_leading_whitespace_dropped() {
    assert_eq!(to_html("#   \t Spaced\n"), "<h1>Spaced</h1>\n");
}

#[test]
fn heading_text_is_single_line() {
    assert_eq!(to_html("# One\nTwo"), "<h1>One</h1>\n<p>Two</p>\n");
}

#[test]
fn heading_nine_hashes() {
    assert_eq!(to_html("#########x"), "<h9>x</h9>\n");
}

#[test]
fn heading_keeps_carriage_return_before_newline() {
    assert_eq!(to_html("# CRLF\r\n"), "<h1>CRLF\r</h1>\n");
}

// Blockquotes

#[test]
fn blockquote_redispatches_list_line() {
    assert_eq!(
        to_html("> quoted\n* item\n"),
        "<blockquote> quoted</blockquote>\n<ul><li> item\n</li></ul>\n"
    );
}

#[test]
fn blockquote_unterminated_still_closed() {
    assert_eq!(to_html("> never ends"), "<blockquote> never ends</blockquote>\n");
}

#[test]
fn blockquote_trailing_newline_kept_at_eof() {
    assert_eq!(to_html(">q\n"), "<blockquote>q\n</blockquote>\n");
}

#[test]
fn blockquote_does_not_end_at_paragraph_text() {
    assert_eq!(to_html(">a\nplain"), "<blockquote>a\nplain</blockquote>\n");
}

#[test]
fn blockquote_deeper_markers_are_text() {
    assert_eq!(to_html(">>nested\n"), "<blockquote>>nested\n</blockquote>\n");
}

// Lists

#[test]
fn list_three_items() {
    assert_eq!(
        to_html("* a\n* b\n* c"),
        "<ul><li> a</li><li> b</li><li> c</li></ul>\n"
    );
}

#[test]
fn list_ended_by_heading() {
    assert_eq!(to_html("*a\n## b"), "<ul><li>a</li></ul>\n<h2>b</h2>\n");
}

#[test]
fn list_ended_by_blank_line() {
    assert_eq!(to_html("*a\n\n*b"), "<ul><li>a</li></ul>\n<ul><li>b</li></ul>\n");
}

#[test]
fn list_ended_by_fence() {
    assert_eq!(
        to_html("*a\n```x```"),
        "<ul><li>a</li></ul>\n<pre><code>x</code></pre>\n"
    );
}

#[test]
fn list_item_keeps_inline_backticks_verbatim() {
    assert_eq!(to_html("*`a`"), "<ul><li>`a`</li></ul>\n");
}

// Fenced code blocks

#[test]
fn code_block_basic() {
    assert_eq!(
        to_html("```\ncode here\n```\n"),
        "<pre><code>code here\n</code></pre>\n"
    );
}

#[test]
fn code_block_info_string_is_copied() {
    assert_eq!(
        to_html("```rust\nfn f() {}\n```"),
        "<pre><code>rust\nfn f() {}\n</code></pre>\n"
    );
}

#[test]
fn code_block_leading_blank_lines_skipped() {
    assert_eq!(to_html("```\n\n\n  x```"), "<pre><code>x</code></pre>\n");
}

#[test]
fn code_block_keeps_markdown_markers() {
    assert_eq!(
        to_html("```\n# not a heading\n> nor a quote\n```"),
        "<pre><code># not a heading\n> nor a quote\n</code></pre>\n"
    );
}

#[test]
fn code_block_text_after_closing_fence() {
    assert_eq!(
        to_html("```\nx\n```after"),
        "<pre><code>x\n</code></pre>\n<p>after</p>\n"
    );
}

// Paragraphs

#[test]
fn paragraph_lines_merge() {
    assert_eq!(to_html("first line\nsecond line"), "<p>first line\nsecond line</p>\n");
}

#[test]
fn paragraph_ends_at_blank_line() {
    assert_eq!(to_html("a\n\nb\n"), "<p>a</p>\n<p>b\n</p>\n");
}

#[test]
fn paragraph_ends_at_quote() {
    assert_eq!(to_html("a\n>b"), "<p>a</p>\n<blockquote>b</blockquote>\n");
}

#[test]
fn paragraph_starting_with_space() {
    assert_eq!(to_html(" indented"), "<p> indented</p>\n");
}

#[test]
fn blank_lines_between_blocks_collapse() {
    assert_eq!(to_html("\n\n\n# H\n\n\n\npara"), "<h1>H</h1>\n<p>para</p>\n");
}

// Tag balance on truncated input

#[test]
fn every_block_closed_at_end_of_input() {
    for (input, expected) in [
        ("#", "<h1></h1>\n"),
        (">", "<blockquote></blockquote>\n"),
        ("*", "<ul><li></li></ul>\n"),
        ("```", "<pre><code></code></pre>\n"),
        ("x", "<p>x</p>\n"),
        ("x `open", "<p>x <code>open</code></p>\n"),
        ("x ```open", "<p>x <code>open</code></p>\n"),
    ] {
        assert_eq!(to_html(input), expected, "input {input:?}");
    }
}
