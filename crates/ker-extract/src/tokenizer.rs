// Tokenizer and sentence splitting
//
// A character-class scanner: words are runs of letters and digits that may
// continue across an apostrophe, a hyphen, or a dot when the next character
// keeps the word going ("don't", "state-of-the-art", "e.g", "3.14").

use ker_core::character::{CharType, get_char_type, is_hyphen, is_sentence_terminator};
use ker_core::enums::TokenType;
use ker_core::token::Token;

/// Length of the word starting at `text[0]`.
fn word_length(text: &[char]) -> usize {
    let textlen = text.len();
    let mut wlen: usize = 0;
    let mut processing_number = false;
    let mut seen_letters = false;

    while wlen < textlen {
        match get_char_type(text[wlen]) {
            CharType::Letter => {
                processing_number = false;
                seen_letters = true;
                wlen += 1;
            }
            CharType::Digit => {
                processing_number = true;
                wlen += 1;
            }
            CharType::Whitespace | CharType::Unknown => return wlen,
            CharType::Punctuation => {
                let next = text.get(wlen + 1).map(|&c| get_char_type(c));
                let c = text[wlen];
                let continues = match c {
                    '\'' | '\u{2019}' => next == Some(CharType::Letter),
                    _ if is_hyphen(c) => {
                        matches!(next, Some(CharType::Letter | CharType::Digit))
                    }
                    // "e.g" stays one word; "1.5" too, but "abc.1" splits.
                    '.' => match next {
                        Some(CharType::Letter) => true,
                        Some(CharType::Digit) => !seen_letters,
                        _ => false,
                    },
                    ',' => processing_number && next == Some(CharType::Digit),
                    _ => false,
                };
                if !continues {
                    return wlen;
                }
                wlen += 1;
            }
        }
    }
    textlen
}

/// Find the next token starting at position `pos`.
///
/// Returns `(TokenType, token_length)`; the caller advances `pos` by the
/// length. Returns `(TokenType::None, 0)` at end of text.
pub fn next_token(text: &[char], text_len: usize, pos: usize) -> (TokenType, usize) {
    let remaining = text_len.saturating_sub(pos);
    if remaining == 0 {
        return (TokenType::None, 0);
    }
    let slice = &text[pos..pos + remaining];

    match get_char_type(slice[0]) {
        CharType::Letter | CharType::Digit => (TokenType::Word, word_length(slice)),
        CharType::Whitespace => {
            let mut i = 1;
            while i < remaining && get_char_type(slice[i]) == CharType::Whitespace {
                i += 1;
            }
            (TokenType::Whitespace, i)
        }
        CharType::Punctuation => {
            if remaining >= 3 && slice[..3] == ['.', '.', '.'] {
                return (TokenType::Punctuation, 3);
            }
            (TokenType::Punctuation, 1)
        }
        CharType::Unknown => (TokenType::Unknown, 1),
    }
}

/// Tokenize text into a list of tokens, whitespace included.
pub fn tokens(text: &str) -> Vec<Token> {
    let text_chars: Vec<char> = text.chars().collect();
    let text_len = text_chars.len();
    let mut result = Vec::new();
    let mut pos = 0;
    while pos < text_len {
        let (token_type, token_len) = next_token(&text_chars, text_len, pos);
        if token_type == TokenType::None || token_len == 0 {
            break;
        }
        let token_text: String = text_chars[pos..pos + token_len].iter().collect();
        result.push(Token::new(token_type, token_text, pos));
        pos += token_len;
    }
    result
}

/// Split text into sentences of tagged (non-whitespace) tokens.
///
/// A sentence ends at a terminator (`.`, `!`, `?`, ellipsis) that is followed
/// by whitespace or the end of text. Closing quotes and brackets directly
/// after the terminator stay in the ending sentence.
pub fn sentences(text: &str) -> Vec<Vec<Token>> {
    let all = tokens(text);
    let mut result = Vec::new();
    let mut current: Vec<Token> = Vec::new();
    let mut end_found = false;

    for token in all {
        if token.token_type == TokenType::Whitespace {
            if end_found && !current.is_empty() {
                result.push(std::mem::take(&mut current));
                end_found = false;
            }
            continue;
        }
        if token.token_type == TokenType::Punctuation {
            let first = token.text.chars().next().unwrap_or(' ');
            if is_sentence_terminator(first) {
                end_found = true;
            } else if !matches!(first, ')' | ']' | '"' | '\u{201C}' | '\u{201D}') {
                end_found = false;
            }
        } else {
            end_found = false;
        }
        current.push(token);
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}
