//! Anchor detection from path data.
//!
//! Only the leading move command is inspected: `M x,y ...` or `m x y ...`.

use crate::types::CELL_SIZE;

/// Parse the point of the leading move command.
///
/// Coordinates may contain digits, `.`, `e` and `-`; the separator is a
/// comma or a single space. Anything else yields `None`.
pub fn parse_move(path: &str) -> Option<(f64, f64)> {
    let rest = path
        .strip_prefix("M ")
        .or_else(|| path.strip_prefix("m "))?;

    let (x, rest) = take_number(rest);
    let rest = rest.strip_prefix(',').or_else(|| rest.strip_prefix(' '))?;
    let (y, _) = take_number(rest);

    Some((x.parse().ok()?, y.parse().ok()?))
}

/// Grid cell containing the leading point of `path`.
pub fn anchor_of(path: &str) -> Option<(i32, i32)> {
    let (x, y) = parse_move(path)?;
    let cell = CELL_SIZE as f64;
    Some(((x / cell).floor() as i32, (y / cell).floor() as i32))
}

fn take_number(s: &str) -> (&str, &str) {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == 'e' || c == '-'))
        .unwrap_or(s.len());
    s.split_at(end)
}
