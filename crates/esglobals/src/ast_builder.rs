//! AST builder module for creating synthetic nodes
//!
//! This module provides factory functions for the declaration nodes a host
//! hands to the formatter and for the statement/expression nodes the
//! formatter emits. Keeping construction here keeps the rewriter free of
//! struct-literal noise.

use crate::ast::{Declaration, ExportSpecifier, Expr, ImportBinding, ImportSpecifier, Stmt};

/// Create a name expression: `name`
pub fn ident(name: &str) -> Expr {
    Expr::Ident(name.to_owned())
}

/// Create a string literal expression: `'value'`
pub fn string_lit(value: &str) -> Expr {
    Expr::StringLit(value.to_owned())
}

/// Create a member expression: `obj.attr`
pub fn member(object: Expr, property: &str) -> Expr {
    Expr::Member {
        object: Box::new(object),
        property: property.to_owned(),
    }
}

/// Create a member chain anchored at the receiver: `this.a.b.c`
pub fn receiver_member(segments: &[&str]) -> Expr {
    segments
        .iter()
        .fold(Expr::This, |object, segment| member(object, segment))
}

/// Create a variable declaration statement: `var name = init;`
pub fn var_decl(name: &str, init: Expr) -> Stmt {
    Stmt::VarDecl {
        name: name.to_owned(),
        init,
    }
}

/// Create an assignment expression statement: `target = value;`
pub fn assign(target: Expr, value: Expr) -> Stmt {
    Stmt::Expr(Expr::Assign {
        target: Box::new(target),
        value: Box::new(value),
    })
}

/// Create a function call expression: `callee(args...)`
pub fn call(callee: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call {
        callee: Box::new(callee),
        args,
    }
}

/// Wrap a statement list in an immediately invoked function whose receiver
/// is the caller's `this`: `(function () { ... }).call(this);`
pub fn iife_call(body: Vec<Stmt>) -> Stmt {
    let function = Expr::Function { body };
    Stmt::Expr(call(member(function, "call"), vec![Expr::This]))
}

/// Create a side-effect-only import declaration: `import "source"`
pub fn import_side_effect(source: &str) -> Declaration {
    Declaration::Import {
        source: source.to_owned(),
        specifiers: Vec::new(),
    }
}

/// Create a default import declaration: `import local from "source"`
pub fn import_default(local: &str, source: &str) -> Declaration {
    Declaration::Import {
        source: source.to_owned(),
        specifiers: vec![ImportSpecifier {
            local: local.to_owned(),
            binding: ImportBinding::Default,
        }],
    }
}

/// Create a namespace import declaration: `import * as local from "source"`
pub fn import_namespace(local: &str, source: &str) -> Declaration {
    Declaration::Import {
        source: source.to_owned(),
        specifiers: vec![ImportSpecifier {
            local: local.to_owned(),
            binding: ImportBinding::Namespace,
        }],
    }
}

/// Create a named import declaration from `(imported, local)` pairs:
/// `import { imported as local, ... } from "source"`
pub fn import_named(bindings: &[(&str, &str)], source: &str) -> Declaration {
    Declaration::Import {
        source: source.to_owned(),
        specifiers: bindings
            .iter()
            .map(|(imported, local)| ImportSpecifier {
                local: (*local).to_owned(),
                binding: ImportBinding::Named((*imported).to_owned()),
            })
            .collect(),
    }
}

/// Create a default export declaration: `export default value`
pub fn export_default(value: Expr) -> Declaration {
    Declaration::ExportDefault { value }
}

/// Create a named export declaration from `(local, exported)` pairs:
/// `export { local as exported, ... }`
pub fn export_named(bindings: &[(&str, &str)]) -> Declaration {
    Declaration::ExportNamed {
        specifiers: export_specifiers(bindings),
        source: None,
    }
}

/// Create a named re-export declaration from `(local, exported)` pairs:
/// `export { local as exported, ... } from "source"`
pub fn export_named_from(bindings: &[(&str, &str)], source: &str) -> Declaration {
    Declaration::ExportNamed {
        specifiers: export_specifiers(bindings),
        source: Some(source.to_owned()),
    }
}

/// Create a wildcard re-export declaration: `export * from "source"`
pub fn export_all(source: &str) -> Declaration {
    Declaration::ExportAll {
        source: source.to_owned(),
    }
}

fn export_specifiers(bindings: &[(&str, &str)]) -> Vec<ExportSpecifier> {
    bindings
        .iter()
        .map(|(local, exported)| ExportSpecifier {
            local: (*local).to_owned(),
            exported: (*exported).to_owned(),
        })
        .collect()
}
