//! Deterministic source emission for synthetic nodes
//!
//! The host compiler owns printing of real source files; this emitter only
//! renders the synthetic statements this crate produces, so hosts without a
//! printer (and this crate's own tests) can inspect the generated code as
//! text. Output is stable: same nodes, same text.

use std::fmt::Write;

use crate::ast::{Expr, Stmt};

const INDENT: &str = "  ";

/// Render a single statement to JavaScript source text.
pub fn emit_stmt(stmt: &Stmt) -> String {
    let mut emitter = Emitter::new();
    emitter.stmt(stmt);
    emitter.finish()
}

/// Render a statement list to JavaScript source text, one statement per line.
pub fn emit_unit(body: &[Stmt]) -> String {
    let mut emitter = Emitter::new();
    for stmt in body {
        emitter.stmt(stmt);
        emitter.newline();
    }
    emitter.finish()
}

struct Emitter {
    out: String,
    indent: usize,
}

impl Emitter {
    fn new() -> Self {
        Self {
            out: String::new(),
            indent: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::VarDecl { name, init } => {
                let _ = write!(self.out, "var {name} = ");
                self.expr(init);
                self.out.push(';');
            }
            Stmt::Expr(expr) => {
                self.expr(expr);
                self.out.push(';');
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::This => self.out.push_str("this"),
            Expr::Ident(name) => self.out.push_str(name),
            Expr::Member { object, property } => {
                self.callee(object);
                let _ = write!(self.out, ".{property}");
            }
            Expr::Assign { target, value } => {
                self.expr(target);
                self.out.push_str(" = ");
                self.expr(value);
            }
            Expr::ObjectLit => self.out.push_str("{}"),
            Expr::StringLit(value) => {
                let _ = write!(self.out, "'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"));
            }
            Expr::Function { body } => {
                self.out.push_str("function () {");
                self.indent += 1;
                for stmt in body {
                    self.newline();
                    self.stmt(stmt);
                }
                self.indent -= 1;
                self.newline();
                self.out.push('}');
            }
            Expr::Call { callee, args } => {
                self.callee(callee);
                self.out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.expr(arg);
                }
                self.out.push(')');
            }
        }
    }

    /// Emit an expression in callee/object position, parenthesizing the
    /// shapes that would otherwise parse as a statement or bind too loosely.
    fn callee(&mut self, expr: &Expr) {
        let needs_parens = matches!(expr, Expr::Function { .. } | Expr::Assign { .. });
        if needs_parens {
            self.out.push('(');
            self.expr(expr);
            self.out.push(')');
        } else {
            self.expr(expr);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast_builder::{assign, call, ident, iife_call, member, receiver_member, var_decl};

    #[test]
    fn test_emit_var_decl() {
        let stmt = var_decl("foo", receiver_member(&["NS", "foo"]));
        assert_eq!(emit_stmt(&stmt), "var foo = this.NS.foo;");
    }

    #[test]
    fn test_emit_assignment() {
        let stmt = assign(receiver_member(&["NSNamed", "bar", "foo"]), ident("foo"));
        assert_eq!(emit_stmt(&stmt), "this.NSNamed.bar.foo = foo;");
    }

    #[test]
    fn test_emit_object_literal_assignment() {
        let stmt = assign(receiver_member(&["NSNamed", "bar"]), Expr::ObjectLit);
        assert_eq!(emit_stmt(&stmt), "this.NSNamed.bar = {};");
    }

    #[test]
    fn test_emit_empty_iife() {
        let stmt = iife_call(vec![]);
        assert_eq!(emit_stmt(&stmt), "(function () {\n}).call(this);");
    }

    #[test]
    fn test_emit_iife_indents_body() {
        let stmt = iife_call(vec![var_decl("foo", receiver_member(&["NS", "foo"]))]);
        assert_eq!(
            emit_stmt(&stmt),
            "(function () {\n  var foo = this.NS.foo;\n}).call(this);"
        );
    }

    #[test]
    fn test_emit_call_with_args() {
        let expr = call(member(ident("fn"), "apply"), vec![Expr::This, ident("args")]);
        assert_eq!(emit_stmt(&Stmt::Expr(expr)), "fn.apply(this, args);");
    }

    #[test]
    fn test_emit_string_literal_escapes_quotes() {
        let stmt = Stmt::Expr(Expr::StringLit("it's".to_owned()));
        assert_eq!(emit_stmt(&stmt), "'it\\'s';");
    }
}
