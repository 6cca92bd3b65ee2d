// Character classification for tokenization

/// Character type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    Unknown,
    Letter,
    Digit,
    Whitespace,
    Punctuation,
}

/// Returns the character type for a given character.
///
/// Letters are any Unicode alphabetic characters, so Czech diacritics and
/// other scripts tokenize as words.
pub fn get_char_type(c: char) -> CharType {
    if c.is_alphabetic() {
        return CharType::Letter;
    }
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if c.is_numeric() {
        return CharType::Digit;
    }
    if is_punctuation_char(c) || is_quotation_mark(c) {
        return CharType::Punctuation;
    }
    CharType::Unknown
}

/// Check whether a character is sentence or word punctuation.
fn is_punctuation_char(c: char) -> bool {
    matches!(
        c,
        '.' | ','
            | ';'
            | '-'
            | '!'
            | '?'
            | ':'
            | '\''
            | '('
            | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '/'
            | '&'
            | '\u{00AD}' // SOFT HYPHEN
            | '\u{2010}' // HYPHEN
            | '\u{2011}' // NON-BREAKING HYPHEN
            | '\u{2013}' // EN DASH
            | '\u{2014}' // EM DASH
            | '\u{2019}' // RIGHT SINGLE QUOTATION MARK
            | '\u{2026}' // HORIZONTAL ELLIPSIS
    )
}

/// Check whether a character is a quotation mark, including the Czech
/// low-high pair and guillemets.
pub fn is_quotation_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{00AB}' // «
            | '\u{00BB}' // »
            | '\u{201C}' // LEFT DOUBLE QUOTATION MARK
            | '\u{201D}' // RIGHT DOUBLE QUOTATION MARK
            | '\u{201E}' // DOUBLE LOW-9 QUOTATION MARK
            | '\u{2018}' // LEFT SINGLE QUOTATION MARK
            | '\u{201A}' // SINGLE LOW-9 QUOTATION MARK
    )
}

/// Check whether a character is a hyphen variant that can join word parts.
pub fn is_hyphen(c: char) -> bool {
    matches!(c, '-' | '\u{00AD}' | '\u{2010}' | '\u{2011}')
}

/// Check whether a character ends a sentence on its own.
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '\u{2026}')
}
