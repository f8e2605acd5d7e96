//! Concrete detection patterns for C++-like constructs.
//!
//! Every pattern inspects a single semi-expression. Scope-opening constructs
//! are recognized by their trailing `{` plus what surrounds it; statements by
//! their trailing `;` and what survives a normalization pass that strips
//! invocation parens, template groups, modifiers and initializers.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::assembling::TokenCollection;
use crate::lexing::is_comment;
use crate::parsing::engine::Pattern;

/// Control keywords that may own a `(` without being a function.
pub const PAREN_CONTROL_KEYWORDS: &[&str] = &["for", "while", "switch", "if", "catch"];

/// The full control-keyword set used for loop/conditional detection.
pub const CONTROL_KEYWORDS: &[&str] = &["for", "while", "switch", "if", "else", "catch"];

/// Modifier tokens discarded when classifying declarations and executables.
static MODIFIERS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "const", "extern", "friend", "mutable", "signed", "static", "typedef", "typename",
        "unsigned", "volatile", "&", "*", "std", "::", "public", "protected", "private", ":",
        "++", "--",
    ]
    .into_iter()
    .collect()
});

pub fn is_modifier(tok: &str) -> bool {
    MODIFIERS.contains(tok)
}

fn opens_scope(semi: &TokenCollection) -> bool {
    semi.last() == Some("{")
}

/// Position of `tok`, `None` when absent.
fn position(semi: &TokenCollection, tok: &str) -> Option<usize> {
    let pos = semi.find(tok);
    (pos < semi.len()).then_some(pos)
}

/// `(` immediately after `]` (a capture list being invoked), or `[`
/// immediately after `=` (a lambda assigned to a name).
pub fn has_lambda_adjacency(semi: &TokenCollection) -> bool {
    let paren_after_bracket = match (position(semi, "]"), position(semi, "(")) {
        (Some(close), Some(paren)) => paren == close + 1,
        _ => false,
    };
    let bracket_after_assign = match (position(semi, "="), position(semi, "[")) {
        (Some(assign), Some(open)) => open == assign + 1,
        _ => false,
    };
    paren_after_bracket || bracket_after_assign
}

/// Any `{` opens a scope, generically and anonymously.
pub struct BeginOfScope;

impl Pattern for BeginOfScope {
    fn test(&self, semi: &TokenCollection) -> bool {
        semi.contains("{")
    }
}

/// Any `}` closes the current scope.
pub struct EndOfScope;

impl Pattern for EndOfScope {
    fn test(&self, semi: &TokenCollection) -> bool {
        semi.contains("}")
    }
}

/// A scope-opening `(`-construct that is neither a control clause nor a
/// lambda pattern.
pub struct FunctionDefinition;

impl Pattern for FunctionDefinition {
    fn test(&self, semi: &TokenCollection) -> bool {
        if !opens_scope(semi) {
            return false;
        }
        let paren = match position(semi, "(") {
            Some(paren) if paren > 0 => paren,
            _ => return false,
        };
        !PAREN_CONTROL_KEYWORDS.contains(&&semi[paren - 1]) && !has_lambda_adjacency(semi)
    }
}

/// A scope opened by a control keyword, or an `else` block.
pub struct LoopOrControl;

impl Pattern for LoopOrControl {
    fn test(&self, semi: &TokenCollection) -> bool {
        if !opens_scope(semi) {
            return false;
        }
        if semi.contains("else") {
            return true;
        }
        match position(semi, "(") {
            Some(paren) if paren > 0 => CONTROL_KEYWORDS.contains(&&semi[paren - 1]),
            _ => false,
        }
    }
}

/// A scope opened with `class` or `struct` in the header.
pub struct ClassOrStruct;

impl Pattern for ClassOrStruct {
    fn test(&self, semi: &TokenCollection) -> bool {
        opens_scope(semi) && (semi.contains("class") || semi.contains("struct"))
    }
}

/// A lambda introducer anywhere in the semi-expression. Unlike the other
/// scope detectors this one does not insist on a trailing `{`.
pub struct LambdaScope;

impl Pattern for LambdaScope {
    fn test(&self, semi: &TokenCollection) -> bool {
        has_lambda_adjacency(semi)
    }
}

/// A `#` anywhere marks a preprocessor line.
pub struct PreprocDirective;

impl Pattern for PreprocDirective {
    fn test(&self, semi: &TokenCollection) -> bool {
        semi.contains("#")
    }
}

/// Strip invocation parens: the first `(`..`)` run, unless the `(` belongs to
/// a control clause or starts the collection.
fn remove_invocation_parens(tc: &mut TokenCollection) {
    let start = tc.find("(");
    let end = tc.find(")");
    if start >= end || end == tc.len() || start == 0 {
        return;
    }
    if PAREN_CONTROL_KEYWORDS.contains(&&tc[start - 1]) {
        return;
    }
    for _ in start..=end {
        tc.remove_at(start);
    }
}

/// Collapse a template angle-bracket group into the token that precedes it,
/// so `vector < int >` classifies as the single type token `vector<int>`.
fn condense_template_types(tc: &mut TokenCollection) {
    let start = tc.find("<");
    let mut end = tc.find(">");
    if start >= end || start == 0 {
        return;
    }
    if end == tc.len() {
        end = tc.find(">::");
        if end == tc.len() {
            return;
        }
    }
    let continues = &tc[end] == ">::";
    let mut tok = tc[start - 1].to_string();
    for i in start..=end {
        tok.push_str(&tc[i]);
    }
    for _ in start..=end {
        tc.remove_at(start);
    }
    if continues {
        if let Some(next) = tc.get(start) {
            tok.push_str(next);
            tc.remove_at(start);
        }
    }
    let _ = tc.set(start - 1, tok);
}

/// The shared normalization behind declaration/executable classification.
///
/// Returns `None` unless the semi-expression is a statement (ends in `;`,
/// more than two tokens). Otherwise returns what survives: invocation parens
/// and template groups folded away; modifiers, comments, newlines and
/// `return` dropped; everything from `=` or `;` on discarded.
pub fn strip_statement(semi: &TokenCollection) -> Option<TokenCollection> {
    if semi.last() != Some(";") || semi.len() <= 2 {
        return None;
    }
    let mut tc = semi.clone();
    remove_invocation_parens(&mut tc);
    condense_template_types(&mut tc);

    let mut kept = TokenCollection::new();
    for tok in tc.iter() {
        if is_modifier(tok) || is_comment(tok) || tok == "\n" || tok == "return" {
            continue;
        }
        if tok == "=" || tok == ";" {
            break;
        }
        kept.push(tok);
    }
    Some(kept)
}

/// A statement reduced to exactly a type and a name.
pub struct Declaration;

impl Pattern for Declaration {
    fn test(&self, semi: &TokenCollection) -> bool {
        strip_statement(semi).map_or(false, |kept| kept.len() == 2)
    }
}

/// A statement that is not a declaration.
pub struct Executable;

impl Pattern for Executable {
    fn test(&self, semi: &TokenCollection) -> bool {
        strip_statement(semi).map_or(false, |kept| kept.len() != 2)
    }
}
