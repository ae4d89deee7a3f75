/// Byte offset of the first parenthesis that breaks nesting, if any.
///
/// A `)` with nothing open is reported at its own offset; an unclosed `(` is
/// reported at the offset of the innermost one still open at the end.
pub fn find_unbalanced(units: &str) -> Option<usize> {
    let mut open: Vec<usize> = Vec::new();

    for (offset, c) in units.char_indices() {
        match c {
            '(' => open.push(offset),
            ')' => {
                if open.pop().is_none() {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }

    open.pop()
}

/// Check that every `)` closes the most recent unmatched `(` and none are left open
pub fn is_well_formed(units: &str) -> bool {
    find_unbalanced(units).is_none()
}

/// Deepest level of `(` nesting reached anywhere in the text
pub fn nesting_depth(units: &str) -> usize {
    let mut depth: usize = 0;
    let mut deepest = 0;

    for c in units.chars() {
        match c {
            '(' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ')' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }

    deepest
}
