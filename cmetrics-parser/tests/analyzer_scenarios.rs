//! End-to-end analysis scenarios over small in-memory sources.

use cmetrics_parser::{Analyzer, AnalyzerBuilder, ScopeKind};

fn analyze(source: &str) -> cmetrics_parser::FileAnalysis {
    let mut analyzer = AnalyzerBuilder::new().build();
    analyzer.attach_source(source);
    analyzer.run().expect("clean input");
    analyzer.finish()
}

fn quiet_analyzer(source: &str) -> Analyzer {
    let mut analyzer = AnalyzerBuilder::new().quiet(true).build();
    analyzer.attach_source(source);
    analyzer
}

#[test]
fn nested_scopes_nest_in_the_tree() {
    let analysis = analyze("void f() {\n  for (int i = 0; i < n; i++) {\n    g();\n  }\n}\n");
    let tree = &analysis.tree;

    let root = tree.node(tree.root());
    let f = tree.node(root.children[0]);
    assert_eq!(f.kind, ScopeKind::Function);
    assert_eq!(f.name, "f");
    let body = tree.node(f.children[0]);
    assert_eq!(body.kind, ScopeKind::LoopOrControl);
    assert_eq!(body.name, "for");
}

#[test]
fn line_extents_are_ordered_and_closed_on_balanced_input() {
    let analysis = analyze("void f() {\n  if (x) {\n    y;\n  }\n}\n");
    assert_eq!(analysis.open_scopes(), 0);

    let tree = &analysis.tree;
    let f = tree.node(tree.node(tree.root()).children[0]);
    let end = f.end_line.expect("f is closed");
    assert!(f.start_line <= end);
    assert_eq!(f.start_line, 1);
    assert_eq!(end, 5);
}

#[test]
fn end_lines_match_the_closing_brace_line() {
    // everything on one line, no trailing newline to lean on
    let analysis = analyze("void f() { if (x) { } }");
    let tree = &analysis.tree;

    let f = tree.node(tree.node(tree.root()).children[0]);
    assert_eq!(f.start_line, 1);
    assert_eq!(f.end_line, Some(1));
    let cond = tree.node(f.children[0]);
    assert_eq!(cond.end_line, Some(1));
}

#[test]
fn statements_sharing_a_line_report_the_same_number() {
    let analysis = analyze("int a; int b;\nint c;");
    assert!(analysis.reports[0].contains("declaration: int a ;"));
    assert!(analysis.reports[0].trim_start().starts_with('1'));
    assert!(analysis.reports[1].trim_start().starts_with('1'));
    assert!(analysis.reports[2].trim_start().starts_with('2'));
}

#[test]
fn unbalanced_input_is_tolerated_and_counted() {
    let analysis = analyze("void f() { if (x) {\n");
    assert_eq!(analysis.open_scopes(), 2);

    // extra closers never pop past the global scope
    let analysis = analyze("} } }\n");
    assert_eq!(analysis.open_scopes(), 0);
    assert!(analysis.tree.node(analysis.tree.root()).is_open());
}

#[test]
fn statements_classify_as_declaration_or_executable() {
    let analysis = analyze("int x;\nfoo();\nx = y + 1;\nstd::vector<int> v;\n");
    let joined = analysis.reports.join("\n");
    assert!(joined.contains("declaration: int x ;"));
    assert!(joined.contains("executable: foo ( ) ;"));
    assert!(joined.contains("executable: x = y + 1 ;"));
    assert!(joined.contains("declaration: std :: vector < int > v ;"));
}

#[test]
fn class_and_struct_scopes_are_detected() {
    let analysis = analyze("class Widget {\npublic:\n  void draw() { }\n};\n");
    let tree = &analysis.tree;
    let class = tree.node(tree.node(tree.root()).children[0]);
    assert_eq!(class.kind, ScopeKind::ClassOrStruct);
    let draw = tree.node(class.children[0]);
    assert_eq!(draw.kind, ScopeKind::Function);
    assert_eq!(draw.name, "draw");
}

#[test]
fn lambda_scopes_are_not_mistaken_for_functions() {
    let analysis = analyze("auto f = [](int x) {\n  return x;\n};\n");
    let tree = &analysis.tree;
    let lambda = tree.node(tree.node(tree.root()).children[0]);
    assert_eq!(lambda.kind, ScopeKind::Lambda);
}

#[test]
fn preprocessor_lines_are_reported_not_scoped() {
    let analysis = analyze("#include <iostream>\n#define N 10\nint x;\n");
    let preprocs: Vec<&String> = analysis
        .reports
        .iter()
        .filter(|r| r.contains("preproc stmt"))
        .collect();
    assert_eq!(preprocs.len(), 2);
    // a preprocessor line is numbered by the line it sits on, even though
    // its terminator is the newline that ends it
    assert!(preprocs[0].trim_start().starts_with('1'));
    assert!(preprocs[1].trim_start().starts_with('2'));
    assert_eq!(analysis.tree.node(analysis.tree.root()).children.len(), 0);
}

#[test]
fn function_table_carries_size_and_complexity() {
    let source = "\
void simple() {\n\
  x;\n\
}\n\
void branchy() {\n\
  if (a) {\n\
    if (b) {\n\
    }\n\
  }\n\
  while (c) {\n\
  }\n\
}\n";
    let analysis = analyze(source);
    let rows = analysis.function_table();
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].name, "simple");
    assert_eq!(rows[0].start_line, 1);
    assert_eq!(rows[0].line_count, 3);
    assert_eq!(rows[0].complexity, 1);

    assert_eq!(rows[1].name, "branchy");
    assert_eq!(rows[1].line_count, 8);
    assert_eq!(rows[1].complexity, 4);
}

#[test]
fn report_lines_carry_source_line_numbers() {
    let analysis = analyze("int a;\nint b;\n");
    assert!(analysis.reports[0].trim_start().starts_with('1'));
    assert!(analysis.reports[1].trim_start().starts_with('2'));
}

#[test]
fn the_driver_can_step_one_construct_at_a_time() {
    let mut analyzer = quiet_analyzer("int x; void f() { }");
    assert!(analyzer.next().expect("clean input"));
    assert!(analyzer.parse_one());
    assert_eq!(analyzer.context().stack_depth(), 1);

    assert!(analyzer.next().expect("clean input"));
    assert!(analyzer.parse_one());
    assert_eq!(analyzer.context().stack_depth(), 2);
}
