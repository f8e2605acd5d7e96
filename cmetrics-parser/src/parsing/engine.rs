//! Rule and action abstractions plus the evaluate-all engine.

use crate::assembling::TokenCollection;
use crate::parsing::ParseContext;

/// A pattern test over one semi-expression. Pure: detection never touches the
/// parse context.
pub trait Pattern {
    fn test(&self, semi: &TokenCollection) -> bool;
}

/// A side effect run when a rule's pattern matches: tree mutation or
/// reporting, observed through the parse context.
pub trait Action {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext);
}

/// One pattern with its ordered actions.
pub struct Rule {
    label: &'static str,
    pattern: Box<dyn Pattern>,
    actions: Vec<Box<dyn Action>>,
}

impl Rule {
    pub fn new(label: &'static str, pattern: impl Pattern + 'static) -> Self {
        Rule {
            label,
            pattern: Box::new(pattern),
            actions: Vec::new(),
        }
    }

    pub fn with_action(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Test the pattern and, on a match, run every action in registration
    /// order.
    pub fn fire(&self, semi: &TokenCollection, ctx: &mut ParseContext) -> bool {
        if !self.pattern.test(semi) {
            return false;
        }
        for action in &self.actions {
            action.apply(semi, ctx);
        }
        true
    }
}

/// Ordered list of rules applied to every semi-expression.
#[derive(Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        RuleEngine::default()
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Apply every rule to the collection, unconditionally and in order. A
    /// match never suppresses the evaluation of later rules. Returns whether
    /// any rule matched.
    pub fn parse_one(&self, semi: &TokenCollection, ctx: &mut ParseContext) -> bool {
        let mut matched = false;
        for rule in &self.rules {
            if rule.fire(semi, ctx) {
                matched = true;
            }
        }
        matched
    }
}
