//! Actions fired by matching rules: tree mutation and report lines.

use crate::assembling::TokenCollection;
use crate::ast::ScopeKind;
use crate::lexing::is_comment;
use crate::parsing::engine::Action;
use crate::parsing::rules::CONTROL_KEYWORDS;
use crate::parsing::ParseContext;

/// Name of a function-like construct: the token just before its `(`.
fn name_before_paren(semi: &TokenCollection) -> &str {
    let paren = semi.find("(");
    if paren == 0 || paren >= semi.len() {
        return "anonymous";
    }
    &semi[paren - 1]
}

/// The control keyword owning the `(`, or `else` for a bare else block.
fn control_keyword(semi: &TokenCollection) -> &str {
    let paren = semi.find("(");
    if paren > 0 && paren < semi.len() && CONTROL_KEYWORDS.contains(&&semi[paren - 1]) {
        return &semi[paren - 1];
    }
    "else"
}

/// Name of a class or struct: two tokens before its opening brace.
fn class_name(semi: &TokenCollection) -> &str {
    let brace = semi.find("{");
    if brace < 2 || brace >= semi.len() {
        return "anonymous";
    }
    &semi[brace - 2]
}

/// Push an anonymous unknown scope. First responder to any `{`; a more
/// specific rule retypes it afterwards.
pub struct PushAnonymousScope;

impl Action for PushAnonymousScope {
    fn apply(&self, _semi: &TokenCollection, ctx: &mut ParseContext) {
        ctx.open_scope(ScopeKind::Unknown, "anonymous");
    }
}

/// Finalize and pop the current scope on `}`.
pub struct CloseScope;

impl Action for CloseScope {
    fn apply(&self, _semi: &TokenCollection, ctx: &mut ParseContext) {
        ctx.close_scope();
    }
}

pub struct RetypeAsFunction;

impl Action for RetypeAsFunction {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let name = name_before_paren(semi).to_string();
        ctx.reopen_top(ScopeKind::Function, &name);
    }
}

pub struct RetypeAsLoop;

impl Action for RetypeAsLoop {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let name = control_keyword(semi).to_string();
        ctx.reopen_top(ScopeKind::LoopOrControl, &name);
    }
}

pub struct RetypeAsClass;

impl Action for RetypeAsClass {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let name = class_name(semi).to_string();
        ctx.reopen_top(ScopeKind::ClassOrStruct, &name);
    }
}

pub struct RetypeAsLambda;

impl Action for RetypeAsLambda {
    fn apply(&self, _semi: &TokenCollection, ctx: &mut ParseContext) {
        ctx.reopen_top(ScopeKind::Lambda, "anonymous");
    }
}

pub struct ReportPreproc;

impl Action for ReportPreproc {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!("{:>5}  preproc stmt: {}", line, semi.show(false)));
    }
}

pub struct ReportFunction;

impl Action for ReportFunction {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!("{:>5}  function def: {}", line, semi.show(false)));
    }
}

pub struct ReportLoop;

impl Action for ReportLoop {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let label = match control_keyword(semi) {
            "for" => "for loop",
            "while" => "while loop",
            "switch" => "switch",
            "if" => "if condition",
            "catch" => "catch",
            _ => "else",
        };
        let line = ctx.line();
        ctx.report(format!("{:>5}  {}: {}", line, label, semi.show(false)));
    }
}

pub struct ReportClass;

impl Action for ReportClass {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!(
            "{:>5}  class or struct def: {}",
            line,
            semi.show(false)
        ));
    }
}

pub struct ReportLambda;

impl Action for ReportLambda {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!("{:>5}  lambda: {}", line, semi.show(false)));
    }
}

/// Comment tokens carry no classification weight, so the printable forms drop
/// them before joining.
fn show_without_comments(semi: &TokenCollection) -> String {
    let kept: TokenCollection = semi.iter().filter(|tok| !is_comment(tok)).collect();
    kept.show(false)
}

pub struct ReportDeclaration;

impl Action for ReportDeclaration {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!(
            "{:>5}  declaration: {}",
            line,
            show_without_comments(semi)
        ));
    }
}

pub struct ReportExecutable;

impl Action for ReportExecutable {
    fn apply(&self, semi: &TokenCollection, ctx: &mut ParseContext) {
        let line = ctx.line();
        ctx.report(format!(
            "{:>5}  executable: {}",
            line,
            show_without_comments(semi)
        ));
    }
}
