use regex::Regex;
use std::sync::OnceLock;

/// Scraped text must be strictly longer than this (in UTF-16 code units) to be returned
pub const MIN_ACCEPTED_CHARS: usize = 50;

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script>";
const LYRICS_MARKER: &str = "lyrics";

static NEWLINE_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_newline_run_regex() -> &'static Regex {
    NEWLINE_RUN_REGEX.get_or_init(|| Regex::new(r"\n{2,}").unwrap())
}

/// Byte offset of the first ASCII-case-insensitive match of `needle` at or after `from`.
///
/// `needle` must be ASCII, so every returned offset lands on a char boundary.
fn find_ignore_ascii_case(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let hay = haystack.as_bytes();
    let needle = needle.as_bytes();
    if from > hay.len() || needle.len() > hay.len() - from {
        return None;
    }

    (from..=hay.len() - needle.len())
        .find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Remove every `<script ...> ... </script>` block.
///
/// The opening tag ends at the first `>` after `<script`; the block ends at the
/// first `</script>` after that. An opening tag with no matching close is left as is.
pub fn strip_script_blocks(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cursor = 0;

    while let Some(start) = find_ignore_ascii_case(html, SCRIPT_OPEN, cursor) {
        let after_open = start + SCRIPT_OPEN.len();
        let Some(open_end) = html[after_open..].find('>').map(|i| after_open + i) else {
            break;
        };
        let Some(close) = find_ignore_ascii_case(html, SCRIPT_CLOSE, open_end + 1) else {
            break;
        };

        out.push_str(&html[cursor..start]);
        cursor = close + SCRIPT_CLOSE.len();
    }

    out.push_str(&html[cursor..]);
    out
}

/// Remove markup tags: a `<` followed by at least one non-`>` character, up to
/// the next `>` or the end of the input.
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(lt) = rest.find('<') {
        out.push_str(&rest[..lt]);
        let after = &rest[lt + 1..];
        let body_len = after.find('>').unwrap_or(after.len());

        if body_len == 0 {
            // `<>` and a lone trailing `<` are plain text
            out.push('<');
            rest = after;
        } else if body_len < after.len() {
            rest = &after[body_len + 1..];
        } else {
            rest = "";
        }
    }

    out.push_str(rest);
    out
}

/// Collapse every run of two or more `\n` into a single `\n`
pub fn collapse_newline_runs(text: &str) -> String {
    get_newline_run_regex().replace_all(text, "\n").into_owned()
}

/// Unicode whitespace minus NEL, plus the byte order mark
fn is_trimmable(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

fn trim_text(text: &str) -> &str {
    text.trim_matches(is_trimmable)
}

/// Reduce a fetched HTML page to its visible text
pub fn clean_html(html: &str) -> String {
    let without_scripts = strip_script_blocks(html);
    let without_tags = strip_tags(&without_scripts);
    let collapsed = collapse_newline_runs(&without_tags);
    trim_text(&collapsed).to_string()
}

/// Pick the text following the first "lyrics" (any case), or the whole text if absent
pub fn lyrics_candidate(cleaned: &str) -> &str {
    match find_ignore_ascii_case(cleaned, LYRICS_MARKER, 0) {
        Some(pos) => trim_text(&cleaned[pos + LYRICS_MARKER.len()..]),
        None => cleaned,
    }
}

/// Check the candidate is long enough to be trusted
pub fn is_acceptable(candidate: &str) -> bool {
    !candidate.is_empty() && candidate.encode_utf16().count() > MIN_ACCEPTED_CHARS
}

/// Run the full heuristic over a search result page.
/// Returns None when the page yields nothing long enough to pass for lyrics.
pub fn extract_lyrics(html: &str) -> Option<String> {
    let cleaned = clean_html(html);
    let candidate = lyrics_candidate(&cleaned);

    if is_acceptable(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}
