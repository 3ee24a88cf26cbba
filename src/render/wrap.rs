use unicode_segmentation::UnicodeSegmentation;

/// Breaks lines longer than `max_line_length` grapheme clusters.
///
/// A break replaces the last run of spaces at or before the column; a word
/// longer than the column is split at the column, never inside a grapheme
/// cluster. Each inserted break is a newline followed by `line_prefix`.
/// Existing newlines are kept and restart the count. The prefix does not
/// count toward the column.
pub fn wrap_at_space(text: &str, max_line_length: usize, line_prefix: &str) -> String {
    if max_line_length == 0 {
        return text.to_string();
    }

    let separator = format!("\n{}", line_prefix);
    let mut out = String::with_capacity(text.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&split_line(line, max_line_length).join(&separator));
    }
    out
}

fn split_line(line: &str, width: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = line;
    loop {
        // One grapheme past the column, so a space sitting on it still counts.
        let window = rest
            .grapheme_indices(true)
            .take(width + 1)
            .collect::<Vec<_>>();
        if window.len() <= width {
            break;
        }
        let head = window
            .iter()
            .rposition(|(_, grapheme)| *grapheme == " ")
            .map(|space| rest[..window[space].0].trim_end_matches(' '))
            .filter(|head| !head.is_empty());
        match head {
            Some(head) => {
                pieces.push(head);
                rest = rest[head.len()..].trim_start_matches(' ');
            }
            None => {
                let limit = window[width].0;
                pieces.push(&rest[..limit]);
                rest = &rest[limit..];
            }
        }
    }
    if !rest.is_empty() || pieces.is_empty() {
        pieces.push(rest);
    }
    pieces
}
