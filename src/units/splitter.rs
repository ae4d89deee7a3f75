#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Multiply => lhs * rhs,
            Operator::Divide => lhs / rhs,
        }
    }
}

/// Slice of an expression holding one operand and, optionally, the operator
/// that follows it (e.g. `"min/"`, `"(day*day)"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    source: &'a str,
}

impl<'a> Fragment<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Full text, trailing operator included
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    /// Operand text with the trailing operator removed
    pub fn operand(&self) -> &'a str {
        strip_trailing_operator(self.source)
    }

    pub fn trailing_operator(&self) -> Option<Operator> {
        self.source.chars().last().and_then(Operator::from_char)
    }
}

pub fn is_operator(c: char) -> bool {
    Operator::from_char(c).is_some()
}

/// True when the text has no operators and no parentheses
pub fn is_base_operand(units: &str) -> bool {
    !units.chars().any(|c| is_operator(c) || c == '(' || c == ')')
}

pub fn strip_trailing_operator(units: &str) -> &str {
    match units.chars().last() {
        Some(c) if is_operator(c) => &units[..units.len() - c.len_utf8()],
        _ => units,
    }
}

/// Split on `*` and `/` at nesting depth 0, keeping each operator on the
/// fragment it closes. A base operand comes back whole.
///
/// `"degree*min/(day*day)"` yields `["degree*", "min/", "(day*day)"]`.
pub fn split_on_operators(units: &str) -> Vec<Fragment<'_>> {
    if is_base_operand(units) {
        return vec![Fragment::new(units)];
    }

    let mut fragments = Vec::new();
    let mut start = 0;
    let mut depth: usize = 0;

    for (offset, c) in units.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            _ if depth == 0 && is_operator(c) => {
                let end = offset + c.len_utf8();
                fragments.push(Fragment::new(&units[start..end]));
                start = end;
            }
            _ => {}
        }
    }

    if start < units.len() {
        fragments.push(Fragment::new(&units[start..]));
    }

    fragments
}
