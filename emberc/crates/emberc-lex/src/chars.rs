//! Character-class predicates for the Ember scanner.
//!
//! Names are ASCII-only: an identifier starts with `[A-Za-z_]` and continues
//! with `[A-Za-z0-9_]`. Everything else outside a literal is either
//! whitespace, punctuation, or invalid.

/// Checks if a character is skipped as whitespace between tokens.
///
/// # Example
///
/// ```
/// use emberc_lex::chars::is_whitespace;
///
/// assert!(is_whitespace(' '));
/// assert!(is_whitespace('\n'));
/// assert!(!is_whitespace('\u{a0}'));
/// ```
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Checks if a character can start an identifier or builtin name.
///
/// # Example
///
/// ```
/// use emberc_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('Z'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier or builtin name.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is alphabetic in the Unicode sense.
///
/// Used by the numeric sub-automaton: any letter directly after a number
/// invalidates the literal instead of starting a new token.
#[inline]
pub fn is_alphabetic(c: char) -> bool {
    c.is_alphabetic()
}

/// Checks if a character is a decimal digit `0-9`.
#[inline]
pub fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is a binary digit `0-1`.
#[inline]
pub fn is_binary_digit(c: char) -> bool {
    matches!(c, '0' | '1')
}

/// Checks if a character is an octal digit `0-7`.
#[inline]
pub fn is_octal_digit(c: char) -> bool {
    matches!(c, '0'..='7')
}

/// Checks if a character is a hexadecimal digit `0-9a-fA-F`.
#[inline]
pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// # Example
///
/// ```
/// use emberc_lex::chars::is_digit_in_radix;
///
/// assert!(is_digit_in_radix('1', 2));
/// assert!(!is_digit_in_radix('2', 2));
/// assert!(is_digit_in_radix('7', 8));
/// assert!(!is_digit_in_radix('8', 8));
/// assert!(is_digit_in_radix('F', 16));
/// assert!(!is_digit_in_radix('g', 16));
/// ```
#[inline]
pub fn is_digit_in_radix(c: char, radix: u32) -> bool {
    match radix {
        2 => is_binary_digit(c),
        8 => is_octal_digit(c),
        10 => is_decimal_digit(c),
        16 => is_hex_digit(c),
        _ => false,
    }
}

/// Checks if a character is a control character: C0 (`U+0000..=U+001F`)
/// or DEL (`U+007F`).
///
/// Tab, line feed and carriage return are control characters too; literal
/// scanners decide which of them they tolerate.
#[inline]
pub fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1f}' | '\u{7f}')
}

/// Checks if a character may not appear raw inside a literal.
///
/// Every control character except tab. Line feed is handled separately by
/// each literal, since it terminates single-line literals.
#[inline]
pub fn is_disallowed_in_literal(c: char) -> bool {
    is_control(c) && c != '\t'
}
