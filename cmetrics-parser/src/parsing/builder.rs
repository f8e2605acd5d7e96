//! Analyzer assembly and the per-file drive loop.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::assembling::{AssembleError, SemiExpression};
use crate::ast::{FunctionMetrics, ScopeTree};
use crate::lexing::Tokenizer;
use crate::parsing::actions::{
    CloseScope, PushAnonymousScope, ReportClass, ReportDeclaration, ReportExecutable,
    ReportFunction, ReportLambda, ReportLoop, ReportPreproc, RetypeAsClass, RetypeAsFunction,
    RetypeAsLambda, RetypeAsLoop,
};
use crate::parsing::engine::{Rule, RuleEngine};
use crate::parsing::rules::{
    BeginOfScope, ClassOrStruct, Declaration, EndOfScope, Executable, FunctionDefinition,
    LambdaScope, LoopOrControl, PreprocDirective,
};
use crate::parsing::ParseContext;

/// Everything one analysis run produces: the scope tree and the per-construct
/// classification log.
#[derive(Debug, Serialize)]
pub struct FileAnalysis {
    pub tree: ScopeTree,
    pub reports: Vec<String>,
}

impl FileAnalysis {
    pub fn render_tree(&self) -> String {
        self.tree.render()
    }

    pub fn function_table(&self) -> Vec<FunctionMetrics> {
        self.tree.function_table()
    }

    pub fn root_complexity(&self) -> usize {
        self.tree.complexity(self.tree.root())
    }

    pub fn open_scopes(&self) -> usize {
        self.tree.open_scopes()
    }
}

/// Configures and assembles an [Analyzer].
///
/// The rule set and its order are fixed; what varies is whether comment
/// tokens flow through and whether classification reports are collected.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerBuilder {
    return_comments: bool,
    quiet: bool,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        AnalyzerBuilder::default()
    }

    /// Let comment tokens through the lexer instead of suppressing them.
    pub fn return_comments(mut self, yes: bool) -> Self {
        self.return_comments = yes;
        self
    }

    /// Build the scope tree only; skip the classification report log.
    pub fn quiet(mut self, yes: bool) -> Self {
        self.quiet = yes;
        self
    }

    pub fn build(self) -> Analyzer {
        let mut tokenizer = Tokenizer::new();
        tokenizer.return_comments(self.return_comments);
        let semi = SemiExpression::new(tokenizer);

        let mut engine = RuleEngine::new();

        // Detection order matters: the generic scope rules run first so the
        // retyping rules always find an anonymous node on top of the stack.
        engine.add_rule(Rule::new("begin scope", BeginOfScope).with_action(PushAnonymousScope));
        engine.add_rule(Rule::new("end scope", EndOfScope).with_action(CloseScope));

        let mut function = Rule::new("function def", FunctionDefinition);
        let mut looping = Rule::new("loop or control", LoopOrControl);
        let mut class = Rule::new("class or struct", ClassOrStruct);
        let mut preproc = Rule::new("preproc stmt", PreprocDirective);
        let mut lambda = Rule::new("lambda", LambdaScope);
        let mut declaration = Rule::new("declaration", Declaration);
        let mut executable = Rule::new("executable", Executable);

        function = function.with_action(RetypeAsFunction);
        looping = looping.with_action(RetypeAsLoop);
        class = class.with_action(RetypeAsClass);
        lambda = lambda.with_action(RetypeAsLambda);
        if !self.quiet {
            function = function.with_action(ReportFunction);
            looping = looping.with_action(ReportLoop);
            class = class.with_action(ReportClass);
            preproc = preproc.with_action(ReportPreproc);
            lambda = lambda.with_action(ReportLambda);
            declaration = declaration.with_action(ReportDeclaration);
            executable = executable.with_action(ReportExecutable);
        }

        engine.add_rule(function);
        engine.add_rule(looping);
        engine.add_rule(class);
        engine.add_rule(preproc);
        engine.add_rule(lambda);
        engine.add_rule(declaration);
        engine.add_rule(executable);

        Analyzer {
            semi,
            engine,
            ctx: ParseContext::new(),
        }
    }
}

/// The per-file driver: pulls semi-expressions and runs the rule set over
/// each until the stream ends.
pub struct Analyzer {
    semi: SemiExpression,
    engine: RuleEngine,
    ctx: ParseContext,
}

impl Analyzer {
    /// Attach a file. Returns whether the open succeeded.
    pub fn attach_file(&mut self, path: &Path) -> bool {
        match File::open(path) {
            Ok(file) => {
                self.semi.attach(file);
                true
            }
            Err(_) => false,
        }
    }

    /// Attach in-memory source, mainly for tests and embedding.
    pub fn attach_source(&mut self, source: &str) {
        self.semi
            .tokenizer_mut()
            .attach_str(source);
    }

    /// Pull the next semi-expression. `Ok(false)` when the stream is
    /// exhausted.
    pub fn next(&mut self) -> Result<bool, AssembleError> {
        self.semi.get(true)
    }

    /// Run every rule over the current semi-expression.
    pub fn parse_one(&mut self) -> bool {
        self.ctx.set_line(self.semi.current_line());
        self.engine.parse_one(self.semi.tokens(), &mut self.ctx)
    }

    /// Drive the attached stream to exhaustion.
    pub fn run(&mut self) -> Result<(), AssembleError> {
        while self.next()? {
            self.parse_one();
        }
        Ok(())
    }

    pub fn context(&self) -> &ParseContext {
        &self.ctx
    }

    /// Consume the analyzer and hand back its products.
    pub fn finish(self) -> FileAnalysis {
        let (tree, reports) = self.ctx.into_parts();
        FileAnalysis { tree, reports }
    }
}
