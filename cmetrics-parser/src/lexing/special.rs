//! Configurable one- and two-character token sets.

/// One-character tokens returned as single tokens by default. Newline is
/// deliberately a token: the assembler needs it to spot preprocessor lines.
pub const DEFAULT_ONE_CHAR_TOKENS: &[&str] = &[
    "\n", "<", ">", "{", "}", "[", "]", "(", ")", ":", "=", "+", "-", "*", ".",
];

/// Two-character tokens, preferred over their one-character prefixes.
pub const DEFAULT_TWO_CHAR_TOKENS: &[&str] = &[
    "<<", ">>", "::", "++", "--", "==", "+=", "-=", "*=", "/=",
];

/// The replaceable special-token configuration of a [Tokenizer].
///
/// [Tokenizer]: crate::lexing::Tokenizer
#[derive(Debug, Clone)]
pub struct SpecialTokens {
    one_char: Vec<String>,
    two_char: Vec<String>,
}

impl Default for SpecialTokens {
    fn default() -> Self {
        SpecialTokens {
            one_char: DEFAULT_ONE_CHAR_TOKENS.iter().map(|t| t.to_string()).collect(),
            two_char: DEFAULT_TWO_CHAR_TOKENS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl SpecialTokens {
    pub fn is_one_char(&self, ch: u8) -> bool {
        let needle = (ch as char).to_string();
        self.one_char.iter().any(|t| *t == needle)
    }

    pub fn is_two_char(&self, pair: &str) -> bool {
        self.two_char.iter().any(|t| t == pair)
    }

    /// Replace both sets wholesale from a comma-separated string.
    ///
    /// Items of one character (newline included) land in the one-character
    /// set, longer items in the two-character set.
    pub fn replace_from_csv(&mut self, csv: &str) {
        self.one_char.clear();
        self.two_char.clear();
        for item in split_token_list(csv) {
            if item.len() == 1 || item == "\n" {
                self.one_char.push(item);
            } else if item.len() >= 2 {
                self.two_char.push(item);
            }
        }
    }
}

/// Split a comma-separated token list.
///
/// Commas and whitespace separate items, except that a newline is kept as
/// item content so `"\n"` can be configured as a token.
pub fn split_token_list(src: &str) -> Vec<String> {
    let mut items = Vec::new();
    let mut current = String::new();
    for ch in src.chars() {
        if (ch == ',' || ch.is_whitespace()) && ch != '\n' {
            if !current.is_empty() {
                items.push(std::mem::take(&mut current));
            }
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        items.push(current);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sets_cover_the_lexical_contract() {
        let special = SpecialTokens::default();
        assert!(special.is_one_char(b'\n'));
        assert!(special.is_one_char(b'{'));
        assert!(special.is_two_char("::"));
        assert!(special.is_two_char("+="));
        assert!(!special.is_one_char(b';'));
        assert!(!special.is_two_char("->"));
    }

    #[test]
    fn split_keeps_newline_items() {
        let items = split_token_list("., :, +, +=, \n { }");
        assert_eq!(items, vec![".", ":", "+", "+=", "\n", "{", "}"]);
    }

    #[test]
    fn replace_sorts_items_by_length() {
        let mut special = SpecialTokens::default();
        special.replace_from_csv("., :, +=, \n");
        assert!(special.is_one_char(b'.'));
        assert!(special.is_one_char(b':'));
        assert!(special.is_one_char(b'\n'));
        assert!(special.is_two_char("+="));
        assert!(!special.is_one_char(b'{'));
        assert!(!special.is_two_char("::"));
    }
}
