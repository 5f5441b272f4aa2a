// src/domain/format.rs
//
// Presentation-only value formatting plus the better/worse marker used
// by the side-by-side table. Absent-ish values collapse to an em dash,
// numeric-looking strings are treated as numbers, all other text passes
// through untouched.

/// Shown wherever a field has nothing to display.
pub const PLACEHOLDER: &str = "—";

/// How a numeric field is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Dollar,
    Percent,
    Number,
}

/// Which side of a comparison counts as an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Better {
    Higher,
    Lower,
}

/// Outcome of annotating one side of a compared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Better,
    Worse,
}

/// A field value on its way to the page: a real number or free text,
/// either possibly absent.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Num(Option<f64>),
    Text(Option<String>),
}

impl FieldValue {
    pub fn num(value: Option<f64>) -> Self {
        FieldValue::Num(value)
    }

    pub fn text(value: &Option<String>) -> Self {
        FieldValue::Text(value.clone())
    }

    /// The numeric reading of this value, if it has one. Text counts
    /// only when the whole trimmed string parses as a finite number, so
    /// string-encoded numbers sort and format like real ones while
    /// "12,000 sq ft" stays text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Num(n) => n.filter(|n| n.is_finite()),
            FieldValue::Text(Some(s)) => parse_numeric(s),
            FieldValue::Text(None) => None,
        }
    }

    /// Absent, empty, or the source's "NF" sentinel.
    fn is_blank(&self) -> bool {
        match self {
            FieldValue::Num(None) | FieldValue::Text(None) => true,
            FieldValue::Num(Some(n)) => !n.is_finite(),
            FieldValue::Text(Some(s)) => s.is_empty() || s == "NF",
        }
    }
}

/// Whole-string numeric parse: "5500" counts, "12,000 sq ft" does not.
pub fn parse_numeric(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Render a field value for display. Blank values collapse to the
/// placeholder, non-numeric text is shown verbatim, and numbers follow
/// the field kind. With no kind, a numeric string keeps its own
/// spelling and a number prints plainly.
pub fn format_value(value: &FieldValue, kind: Option<FieldKind>) -> String {
    if value.is_blank() {
        return PLACEHOLDER.to_string();
    }

    match (value.as_number(), kind) {
        (Some(n), Some(FieldKind::Dollar)) => format!("${}", group_digits(n)),
        (Some(n), Some(FieldKind::Percent)) => format!("{n:.2}%"),
        (Some(n), Some(FieldKind::Number)) => group_digits(n),
        (Some(n), None) => match value {
            FieldValue::Text(Some(s)) => s.clone(),
            _ => n.to_string(),
        },
        (None, _) => match value {
            FieldValue::Text(Some(s)) => s.clone(),
            _ => PLACEHOLDER.to_string(),
        },
    }
}

/// Better/worse marker for one side of the comparison table. `a` is the
/// side being annotated, `b` the opposing one. Produced only when both
/// sides read as numbers and differ.
pub fn trend(a: &FieldValue, b: &FieldValue, better: Better) -> Option<Trend> {
    let x = a.as_number()?;
    let y = b.as_number()?;
    if x == y {
        return None;
    }

    let wins = match better {
        Better::Higher => x > y,
        Better::Lower => x < y,
    };
    Some(if wins { Trend::Better } else { Trend::Worse })
}

/// Comma-group an amount the way `toLocaleString` would: thousands
/// separators on the integer part, fractions kept to at most three
/// places with trailing zeros dropped.
pub fn group_digits(n: f64) -> String {
    let negative = n < 0.0;
    let rounded = format!("{:.3}", n.abs());
    let (int_part, frac_part) = match rounded.split_once('.') {
        Some(parts) => parts,
        None => (rounded.as_str(), ""),
    };

    let mut grouped = String::new();
    if negative {
        grouped.push('-');
    }
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
