//! Closed AST model for module-scoped declarations and synthetic output nodes
//!
//! The host compiler hands the formatter one [`Declaration`] per
//! `import`/`export` it visits; the formatter hands back synthetic [`Stmt`]
//! nodes to splice in place of the original. Both sides are closed enums, so
//! a new declaration shape is a compile-time error in every match site
//! rather than a silently ignored runtime tag.

/// A module-scoped declaration as surfaced by the host compiler.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// `import "x"` (no specifiers) or `import a, { b as c } from "x"`
    Import {
        source: String,
        specifiers: Vec<ImportSpecifier>,
    },

    /// `export default <expr>` (covers inline declarations as well; the host
    /// supplies the declaration's value expression)
    ExportDefault { value: Expr },

    /// `export { a as b }` or, with a source, `export { a as b } from "x"`
    ExportNamed {
        specifiers: Vec<ExportSpecifier>,
        source: Option<String>,
    },

    /// `export * from "x"`
    ExportAll { source: String },
}

/// One binding introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// The local name the binding is visible under in the importing unit
    pub local: String,
    /// How the binding reaches into the source module
    pub binding: ImportBinding,
}

/// The shape of an individual import binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import foo from "x"` — the module's default value
    Default,
    /// `import * as foo from "x"` — the module's named exports as one object
    Namespace,
    /// `import { imported as local } from "x"` — a single named member
    Named(String),
}

/// One binding exported by an `export { ... }` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSpecifier {
    /// The name the value is bound to inside the unit (or inside the source
    /// module for re-exports)
    pub local: String,
    /// The name the value is published under
    pub exported: String,
}

/// A synthetic statement emitted by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `var name = init;`
    VarDecl { name: String, init: Expr },
    /// An expression statement: `expr;`
    Expr(Expr),
}

/// A synthetic expression emitted by the formatter.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The invocation-time receiver: `this`
    This,
    /// A bare identifier reference
    Ident(String),
    /// `object.property`
    Member { object: Box<Expr>, property: String },
    /// `target = value`
    Assign { target: Box<Expr>, value: Box<Expr> },
    /// An empty object literal: `{}`
    ObjectLit,
    /// A string literal
    StringLit(String),
    /// An anonymous zero-argument function expression
    Function { body: Vec<Stmt> },
    /// `callee(args...)`
    Call { callee: Box<Expr>, args: Vec<Expr> },
}

impl Declaration {
    /// Check whether this declaration introduces no bindings at all
    /// (a side-effect-only import).
    pub fn is_side_effect_import(&self) -> bool {
        matches!(
            self,
            Declaration::Import { specifiers, .. } if specifiers.is_empty()
        )
    }
}
