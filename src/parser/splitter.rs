//! Nesting-aware splitting of a raw path into segment substrings

/// Split a path expression into its dot-delimited segments.
///
/// A `.` separates segments only at nesting depth zero; inside `(...)` or
/// `[...]` it belongs to the segment under construction, so a call argument
/// such as `where(name = "a.b")` or an index such as `items[2]` survives
/// intact. The empty path and the bare root path `"."` yield no segments,
/// meaning "return the context unchanged".
pub fn split_segments(path: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in path.chars() {
        match ch {
            '(' | '[' => {
                depth += 1;
                current.push(ch);
            }
            ')' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '.' if depth == 0 => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}
