//! Rewrites module-scoped ES `import`/`export` declarations into plain
//! statements that read and write properties on a shared, caller-supplied
//! namespace object, so a compilation unit can execute standalone (e.g.
//! concatenated into one script with no module loader) while still
//! exchanging values with other units compiled the same way.
//!
//! The host compiler feeds one [`ast::Declaration`] at a time into a
//! [`rewriter::RewriteSession`] and splices the returned statements in place
//! of the original; a final [`rewriter::RewriteSession::wrap_unit`] binds
//! `this` inside the rewritten body to the namespace root.

pub mod ast;
pub mod ast_builder;
pub mod config;
pub mod emitter;
pub mod resolver;
pub mod rewriter;
pub mod types;

pub use crate::{
    ast::Declaration,
    config::{Config, UnitConfig},
    rewriter::RewriteSession,
};
