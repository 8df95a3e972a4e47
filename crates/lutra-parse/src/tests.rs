use std::fmt::Write as _;

use expect_test::expect;
use lutra_ast::{
    CallExpr, ErrorExpr, ExceptHandler, ExprStmt, FormatOptions, LiteralExpr, Module, NameExpr,
    PassStmt, RaiseStmt, Stmt, SuiteStmt, TryStmt, TupleExpr, Walker,
};
use lutra_errors::Severity;

use crate::{Parsed, module};

fn messages(parsed: &Parsed) -> Vec<&str> {
    parsed.diagnostics().iter().map(|d| d.message()).collect()
}

fn check_roundtrip(text: &str) -> Parsed {
    let parsed = module(text);
    assert_eq!(parsed.reconstruct(&FormatOptions::default()), text);
    assert_eq!(messages(&parsed), Vec::<&str>::new());
    parsed
}

/// Reconstruction must stay exact even when the parser reported problems.
fn check_roundtrip_with_diagnostics(text: &str, expected: &[&str]) -> Parsed {
    let parsed = module(text);
    assert_eq!(parsed.reconstruct(&FormatOptions::default()), text);
    assert_eq!(messages(&parsed), expected);
    parsed
}

#[test]
fn full_try_statement() {
    check_roundtrip(
        "try:\n    f()\nexcept  ValueError  as e:\n    pass\nelse:\n    g()\nfinally:\n    h()\n",
    );
}

#[test]
fn comments_survive_everywhere() {
    check_roundtrip(
        "# leading\ntry:  # after header\n    f()  # in body\n\n    # between statements\n    pass\nexcept ValueError:\n    # handler comment\n    pass\nfinally:\n    pass\n# trailing\n",
    );
}

#[test]
fn try_finally_only() {
    check_roundtrip("try:\n    f()\nfinally:\n    h()\n");
}

#[test]
fn one_line_suites() {
    check_roundtrip("try: f()\nexcept ValueError: pass\n");
}

#[test]
fn nested_try() {
    check_roundtrip(
        "try:\n    try:\n        pass\n    except A:\n        pass\nexcept B:\n    pass\n",
    );
}

#[test]
fn tuple_test_with_binding() {
    check_roundtrip("try:\n    pass\nexcept (ValueError, TypeError) as e:\n    raise\n");
}

#[test]
fn raise_with_value() {
    check_roundtrip("try:\n    raise\nexcept ValueError:\n    raise TypeError('bad')\n");
}

#[test]
fn call_arguments_keep_their_spacing() {
    check_roundtrip("f( 1 , 'x' )\ng(a,)\nh(2.5)\n");
}

#[test]
fn empty_file() {
    check_roundtrip("");
}

#[test]
fn comment_only_file() {
    check_roundtrip("# just a comment\n");
}

#[test]
fn windows_line_endings() {
    check_roundtrip("try:\r\n    pass\r\nfinally:\r\n    pass\r\n");
}

#[test]
fn reconstruction_is_idempotent() {
    let text = "try:\n    f()\nexcept ValueError as e:\n    pass\n";
    let parsed = module(text);
    let format = FormatOptions::default();
    assert_eq!(parsed.reconstruct(&format), parsed.reconstruct(&format));
}

fn first_handler(parsed: &Parsed) -> &ExceptHandler {
    match &parsed.module().statements()[0] {
        Stmt::Try(try_stmt) => &try_stmt.handlers()[0],
        other => panic!("expected a try statement, got {other:?}"),
    }
}

#[test]
fn as_binding_sets_alt_form() {
    let parsed = check_roundtrip("try:\n    pass\nexcept ValueError as e:\n    pass\n");
    let handler = first_handler(&parsed);
    assert!(parsed.source().is_alt_form(handler.header_index()));
}

#[test]
fn comma_binding_warns_and_roundtrips() {
    let parsed = check_roundtrip_with_diagnostics(
        "try:\n    pass\nexcept ValueError, e:\n    pass\n",
        &["use 'except x as y' instead of the legacy 'except x, y'"],
    );
    assert_eq!(parsed.diagnostics()[0].severity(), Severity::Warning);
    let handler = first_handler(&parsed);
    assert!(!parsed.source().is_alt_form(handler.header_index()));
}

#[test]
fn bare_try_is_reported() {
    check_roundtrip_with_diagnostics(
        "try:\n    pass\n",
        &["expected at least one 'except' or 'finally' clause"],
    );
}

#[test]
fn else_requires_a_handler() {
    check_roundtrip_with_diagnostics(
        "try:\n    pass\nelse:\n    pass\nfinally:\n    pass\n",
        &["'else' clause requires at least one 'except' clause"],
    );
}

#[test]
fn catch_all_must_be_last() {
    check_roundtrip_with_diagnostics(
        "try:\n    pass\nexcept:\n    pass\nexcept ValueError:\n    pass\n",
        &["default 'except' clause must be last"],
    );
}

#[test]
fn missing_colon_is_repaired() {
    let parsed = module("try\n    pass\nfinally:\n    pass\n");
    assert_eq!(messages(&parsed), vec!["expected ':'"]);
    assert_eq!(
        parsed.reconstruct(&FormatOptions::default()),
        "try:\n    pass\nfinally:\n    pass\n",
    );
}

#[test]
fn long_comments_rewrap_under_format_options() {
    let text = "# this is a very long leading comment that keeps going\ntry:\n    pass\nfinally:\n    pass\n";
    let parsed = module(text);
    assert_eq!(parsed.reconstruct(&FormatOptions::default()), text);
    assert_eq!(
        parsed.reconstruct(&FormatOptions { wrap_comments: Some(30) }),
        "# this is a very long leading\n# comment that keeps going\ntry:\n    pass\nfinally:\n    pass\n",
    );
}

/// Prints one line per node through the walker hooks; indentation follows
/// the enter/leave pairing.
#[derive(Default)]
struct TreeDump {
    depth: usize,
    out: String,
}

impl TreeDump {
    fn open(&mut self, label: String) {
        let indent = "  ".repeat(self.depth);
        writeln!(self.out, "{indent}{label}").unwrap();
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth -= 1;
    }
}

impl Walker for TreeDump {
    fn enter_module(&mut self, _: &Module) -> bool {
        self.open("MODULE".to_string());
        true
    }
    fn leave_module(&mut self, _: &Module) {
        self.close();
    }
    fn enter_suite(&mut self, node: &SuiteStmt) -> bool {
        self.open(format!("SUITE@{}", u32::from(node.start())));
        true
    }
    fn leave_suite(&mut self, _: &SuiteStmt) {
        self.close();
    }
    fn enter_expr_stmt(&mut self, node: &ExprStmt) -> bool {
        self.open(format!("EXPR_STMT@{}", u32::from(node.start())));
        true
    }
    fn leave_expr_stmt(&mut self, _: &ExprStmt) {
        self.close();
    }
    fn enter_pass(&mut self, node: &PassStmt) -> bool {
        self.open(format!("PASS@{}", u32::from(node.start())));
        true
    }
    fn leave_pass(&mut self, _: &PassStmt) {
        self.close();
    }
    fn enter_raise(&mut self, node: &RaiseStmt) -> bool {
        self.open(format!("RAISE@{}", u32::from(node.start())));
        true
    }
    fn leave_raise(&mut self, _: &RaiseStmt) {
        self.close();
    }
    fn enter_try(&mut self, node: &TryStmt) -> bool {
        self.open(format!("TRY@{}", u32::from(node.start())));
        true
    }
    fn leave_try(&mut self, _: &TryStmt) {
        self.close();
    }
    fn enter_handler(&mut self, node: &ExceptHandler) -> bool {
        self.open(format!("HANDLER@{}", u32::from(node.start())));
        true
    }
    fn leave_handler(&mut self, _: &ExceptHandler) {
        self.close();
    }
    fn enter_name(&mut self, node: &NameExpr) -> bool {
        self.open(format!("NAME {}@{}", node.name(), u32::from(node.start())));
        true
    }
    fn leave_name(&mut self, _: &NameExpr) {
        self.close();
    }
    fn enter_literal(&mut self, node: &LiteralExpr) -> bool {
        self.open(format!("LITERAL {}@{}", node.text(), u32::from(node.start())));
        true
    }
    fn leave_literal(&mut self, _: &LiteralExpr) {
        self.close();
    }
    fn enter_tuple(&mut self, node: &TupleExpr) -> bool {
        self.open(format!("TUPLE@{}", u32::from(node.start())));
        true
    }
    fn leave_tuple(&mut self, _: &TupleExpr) {
        self.close();
    }
    fn enter_call(&mut self, node: &CallExpr) -> bool {
        self.open(format!("CALL@{}", u32::from(node.start())));
        true
    }
    fn leave_call(&mut self, _: &CallExpr) {
        self.close();
    }
    fn enter_error(&mut self, node: &ErrorExpr) -> bool {
        self.open(format!("ERROR {}@{}", node.text(), u32::from(node.start())));
        true
    }
    fn leave_error(&mut self, _: &ErrorExpr) {
        self.close();
    }
}

#[test]
fn tree_shape() {
    let text =
        "try:\n    f()\nexcept  ValueError  as e:\n    pass\nelse:\n    g()\nfinally:\n    h()\n";
    let parsed = module(text);
    let mut dump = TreeDump::default();
    parsed.module().walk(&mut dump);

    expect![[r#"
        MODULE
          TRY@0
            SUITE@3
              EXPR_STMT@9
                CALL@9
                  NAME f@9
            HANDLER@13
              NAME ValueError@21
              NAME e@36
              SUITE@37
                PASS@43
            SUITE@52
              EXPR_STMT@58
                CALL@58
                  NAME g@58
            SUITE@69
              EXPR_STMT@75
                CALL@75
                  NAME h@75
    "#]]
    .assert_eq(&dump.out);
}
