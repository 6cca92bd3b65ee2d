// Token types: tokenizer output and normalizer output

use crate::enums::TokenType;

// ---------------------------------------------------------------------------
// Token
// ---------------------------------------------------------------------------

/// A text token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The type of this token.
    pub token_type: TokenType,

    /// The text content of this token.
    pub text: String,

    /// Length of the token in characters.
    pub token_len: usize,

    /// Character offset of this token within the text.
    pub pos: usize,
}

impl Token {
    /// Create a new token.
    pub fn new(token_type: TokenType, text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            token_type,
            text,
            token_len,
            pos,
        }
    }

    /// Whether the tagger sees this token (everything but whitespace).
    pub fn is_tagged(&self) -> bool {
        !matches!(self.token_type, TokenType::Whitespace | TokenType::None)
    }
}

// ---------------------------------------------------------------------------
// Normalizer output
// ---------------------------------------------------------------------------

/// A noun or adjective reduced to its dictionary form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken {
    /// Raw lemma, with any disambiguation markers stripped.
    pub lemma: String,

    /// The word as it appeared in the text.
    pub surface: String,
}

impl NormalizedToken {
    pub fn new(lemma: impl Into<String>, surface: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            surface: surface.into(),
        }
    }
}

/// Result of normalizing one piece of text.
///
/// `token_count` covers every token the tagger considered, not only the
/// nouns and adjectives returned in `tokens`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalized {
    pub tokens: Vec<NormalizedToken>,
    pub token_count: usize,
}

impl Normalized {
    pub fn new(tokens: Vec<NormalizedToken>, token_count: usize) -> Self {
        Self {
            tokens,
            token_count,
        }
    }

    /// Whether no candidate tokens were produced.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new_counts_characters() {
        let tok = Token::new(TokenType::Word, "\u{010D}aj", 3);
        assert_eq!(tok.token_len, 3);
        assert_eq!(tok.pos, 3);
        assert_eq!(tok.text, "čaj");
    }

    #[test]
    fn whitespace_is_not_tagged() {
        assert!(Token::new(TokenType::Word, "cat", 0).is_tagged());
        assert!(Token::new(TokenType::Punctuation, ".", 3).is_tagged());
        assert!(!Token::new(TokenType::Whitespace, " ", 4).is_tagged());
    }

    #[test]
    fn normalized_default_is_empty() {
        let n = Normalized::default();
        assert!(n.is_empty());
        assert_eq!(n.token_count, 0);
    }

    #[test]
    fn normalized_token_new() {
        let t = NormalizedToken::new("search", "searches");
        assert_eq!(t.lemma, "search");
        assert_eq!(t.surface, "searches");
    }
}
