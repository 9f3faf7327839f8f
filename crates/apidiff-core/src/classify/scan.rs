//! Low-level scanning over one declaration line.
//!
//! Whitespace is anything `char::is_whitespace` accepts. All returned
//! offsets are byte offsets on char boundaries.

/// Keywords accepted in the leading modifier run.
pub const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "abstract",
    "final",
    "native",
    "strictfp",
    "synchronized",
    "transient",
    "volatile",
    "default",
];

/// Skip the modifier run at the start of `line`.
///
/// Each modifier must be followed by whitespace; the run is consumed
/// greedily. The remainder starts at a non-whitespace character or is empty.
pub fn strip_modifiers(line: &str) -> &str {
    let mut rest = line.trim_start();
    loop {
        let Some(word_end) = rest.find(char::is_whitespace) else {
            return rest;
        };
        if !MODIFIERS.contains(&&rest[..word_end]) {
            return rest;
        }
        rest = rest[word_end..].trim_start();
    }
}

/// Split off the leading non-whitespace token.
///
/// Returns `(token, remainder)` where the remainder keeps its leading
/// whitespace.
pub fn split_token(text: &str) -> (&str, &str) {
    let end = text.find(char::is_whitespace).unwrap_or(text.len());
    text.split_at(end)
}

/// Maximal whitespace runs in `text` as `(start, end)` byte ranges.
pub fn whitespace_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    for (idx, ch) in text.char_indices() {
        match (ch.is_whitespace(), open) {
            (true, None) => open = Some(idx),
            (false, Some(start)) => {
                runs.push((start, idx));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, text.len()));
    }
    runs
}

/// Length of a `name(...)` signature at the start of `text`.
///
/// The leading token must contain `(` after at least one character, and a
/// `)` must follow it somewhere in `text`. The signature runs up to and
/// including the last `)` of `text`, so a parameter list containing spaces
/// is captured whole.
pub fn callable_len(text: &str) -> Option<usize> {
    let (token, _) = split_token(text);
    let open = token
        .char_indices()
        .skip(1)
        .find(|&(_, ch)| ch == '(')
        .map(|(idx, _)| idx)?;
    let close = text.rfind(')')?;
    (close > open).then_some(close + 1)
}

/// Byte offset where a `= <value>` initializer begins, if any.
///
/// The offset is the start of the whitespace run before a standalone `=`
/// token, so `text[..offset]` is the declarator without its initializer.
pub fn initializer_start(text: &str) -> Option<usize> {
    whitespace_runs(text).into_iter().find_map(|(start, end)| {
        let (token, _) = split_token(&text[end..]);
        (token == "=").then_some(start)
    })
}
