//! Property tests for the tokenizer over generated source fragments.

use cmetrics_parser::Tokenizer;

use proptest::prelude::*;

// Printable fragments drawn from the character classes the lexer handles,
// without raw control bytes.
const SOURCE_FRAGMENT: &str = r#"[a-z0-9_ \n{}();=+<>*/:'".,#-]{0,120}"#;

fn drain(source: &str) -> Vec<Result<String, String>> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.attach_str(source);
    let mut out = Vec::new();
    loop {
        match tokenizer.next_token() {
            Ok(Some(tok)) => out.push(Ok(tok)),
            Ok(None) => return out,
            Err(err) => {
                out.push(Err(err.to_string()));
                return out;
            }
        }
    }
}

proptest! {
    #[test]
    fn tokenizing_is_deterministic(source in SOURCE_FRAGMENT) {
        prop_assert_eq!(drain(&source), drain(&source));
    }

    #[test]
    fn tokens_are_never_empty(source in SOURCE_FRAGMENT) {
        for tok in drain(&source).into_iter().flatten() {
            prop_assert!(!tok.is_empty());
        }
    }

    #[test]
    fn line_count_never_decreases(source in SOURCE_FRAGMENT) {
        let mut tokenizer = Tokenizer::new();
        tokenizer.attach_str(&source);
        let mut last = tokenizer.line_count();
        while let Ok(Some(_)) = tokenizer.next_token() {
            let line = tokenizer.line_count();
            prop_assert!(line >= last);
            last = line;
        }
    }

    #[test]
    fn identifier_tokens_contain_no_separators(source in "[a-z_ \n]{0,80}") {
        for tok in drain(&source).into_iter().flatten() {
            if tok != "\n" {
                prop_assert!(!tok.contains(' '));
                prop_assert!(!tok.contains('\n'));
            }
        }
    }
}
