use std::borrow::Cow;

/// Whether `c` may appear inside a quoted identifier.
///
/// # Examples
/// ```
/// use fsmc_core::utils::is_ident_char;
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('-'));
/// assert!(!is_ident_char('{'));
/// ```
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Whether `label` can be written without quotes: a single alphanumeric character.
pub fn is_bare_ident(label: &str) -> bool {
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphanumeric())
}

/// Whether `label` can be written at all, quoted or not.
///
/// The empty label is reserved for epsilon and is never a valid identifier.
pub fn is_valid_ident(label: &str) -> bool {
    !label.is_empty() && label.chars().all(is_ident_char)
}

/// Writes `label` in identifier syntax, quoting when it is not a bare identifier.
///
/// Labels with characters outside the identifier set are quoted as-is; the
/// result then no longer lexes back to the same label.
pub fn quote_ident(label: &str) -> Cow<'_, str> {
    if is_bare_ident(label) {
        Cow::Borrowed(label)
    } else {
        Cow::Owned(format!("'{label}'"))
    }
}
