#[inline]
pub(crate) fn is_string_delimiter(c: char) -> bool {
    matches!(c, '"' | '\'' | '\u{201C}' | '\u{201D}')
}

/// The closing quote that pairs with an opening quote character.
#[inline]
pub(crate) fn matching_quote(c: char) -> char {
    match c {
        '\'' => '\'',
        '\u{201C}' | '\u{201D}' => '\u{201D}',
        _ => '"',
    }
}

#[inline]
pub(crate) fn is_string_start(c: char) -> bool {
    is_string_delimiter(c) || c.is_alphabetic()
}

#[inline]
pub(crate) fn is_number_start(c: char) -> bool {
    c.is_ascii_digit() || c == '-' || c == '.'
}

#[inline]
pub(crate) fn is_structural(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ':' | ',')
}

/// Characters that may extend a numeric token. The comma doubles as a decimal
/// separator except directly inside an array, where it separates elements.
#[inline]
pub(crate) fn is_number_char(c: char, in_array: bool) -> bool {
    matches!(c, '0'..='9' | '-' | '.' | 'e' | 'E' | '/') || (c == ',' && !in_array)
}
