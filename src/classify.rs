//! Pure character predicates used throughout the scanner. No state, no
//! dependencies; every grammar decision that hinges on a single code point
//! goes through here.

/// Standard JSON whitespace. Copied verbatim to the output.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\n' | '\t' | '\r')
}

/// Extended Unicode whitespace that strict JSON does not allow: no-break
/// space, the en/em/thin space family, narrow no-break space, medium
/// mathematical space, and ideographic space. Each one is normalized to a
/// single ASCII space on output.
#[inline]
pub fn is_special_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}'
    )
}

/// Any character that can open a string: ASCII quotes, backtick/acute
/// accent, and the curly "smart" quote pairs.
#[inline]
pub fn is_quote(c: char) -> bool {
    is_double_quote_like(c) || is_single_quote_like(c)
}

#[inline]
pub fn is_double_quote_like(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

#[inline]
pub fn is_single_quote_like(c: char) -> bool {
    matches!(c, '\'' | '\u{2018}' | '\u{2019}' | '`' | '\u{B4}')
}

/// Whether `close` is an acceptable closing quote for the opener `open`:
/// the opener itself, the end-quote member of the opener's family, or an
/// ASCII double quote. Mixed quote styles close on the double quote.
#[inline]
pub fn quote_matches(open: char, close: char) -> bool {
    if close == open || close == '"' {
        return true;
    }
    if is_double_quote_like(open) {
        close == '\u{201D}'
    } else {
        matches!(close, '\'' | '\u{2019}')
    }
}

/// Whether a character can start a JSON-ish value: a container opener, a
/// sign, an identifier/number character, or any quote. This gates the
/// missing-colon repair in object parsing.
#[inline]
pub fn is_start_of_value(c: char) -> bool {
    matches!(c, '{' | '[' | '-' | '_') || c.is_alphanumeric() || is_quote(c)
}

/// Characters that terminate an unquoted token.
#[inline]
pub fn is_structural(c: char) -> bool {
    matches!(c, '{' | '}' | '[' | ']' | ':' | ',')
}

/// Raw control characters are invalid inside JSON strings and get
/// re-escaped on output.
#[inline]
pub fn is_control(c: char) -> bool {
    (c as u32) < 0x20
}

/// Identifier-forming characters; a keyword match must not be followed by
/// one of these.
#[inline]
pub fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
