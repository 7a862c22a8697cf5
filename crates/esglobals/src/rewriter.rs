//! Declaration rewriting for one compilation unit
//!
//! A [`RewriteSession`] consumes the unit's `import`/`export` declarations
//! one at a time and produces the plain statements that replace them:
//! variable bindings reading from the shared namespace for imports, and
//! property assignments (preceded by any missing namespace-object creation)
//! for exports. The session owns the per-unit namespace creation ledger;
//! nothing is shared between units, so rewriting independent units in
//! parallel is safe by construction.

use anyhow::Result;
use log::debug;

use crate::{
    ast::{Declaration, Expr, ImportBinding, Stmt},
    ast_builder,
    config::UnitConfig,
    resolver::{GlobalPathResolver, NamespacePath},
    types::FxIndexSet,
};

/// A rewrite session for a single compilation unit.
///
/// Created from an immutable [`UnitConfig`] and discarded when the unit's
/// rewrite completes. The only mutable state is the namespace creation
/// ledger, which guarantees each intermediate namespace object is
/// initialized exactly once per unit.
#[derive(Debug)]
pub struct RewriteSession {
    config: UnitConfig,
    resolver: GlobalPathResolver,
    /// Ledger of namespace path prefixes whose `{}` initializer has
    /// already been emitted, keyed by dotted path
    declared_prefixes: FxIndexSet<String>,
}

impl RewriteSession {
    /// Start a session for the unit described by `config`.
    ///
    /// Fails before any rewriting when the configuration cannot name the
    /// unit (see [`UnitConfig`]).
    pub fn new(config: UnitConfig) -> Result<Self> {
        let resolver = GlobalPathResolver::new(&config)?;
        debug!(
            "starting rewrite session for '{}' under global '{}'",
            config.filename.display(),
            config.global_name
        );

        Ok(Self {
            config,
            resolver,
            declared_prefixes: FxIndexSet::default(),
        })
    }

    /// The unit configuration this session was created with.
    pub fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Rewrite one declaration into its replacement statements.
    ///
    /// The returned list is spliced by the host in place of the original
    /// declaration; it is empty for declaration kinds that need no
    /// replacement code. A failure aborts only this declaration's output;
    /// the session stays usable for sibling declarations.
    pub fn rewrite(&mut self, declaration: &Declaration) -> Result<Vec<Stmt>> {
        match declaration {
            Declaration::Import { source, specifiers } => {
                if specifiers.is_empty() {
                    // The imported unit's side effects are applied by load
                    // order, outside this rewrite.
                    debug!("side-effect import '{source}' needs no replacement");
                    return Ok(Vec::new());
                }

                let mut statements = Vec::with_capacity(specifiers.len());
                for specifier in specifiers {
                    let path = match &specifier.binding {
                        ImportBinding::Default => self.resolver.resolve(source, None, false)?,
                        ImportBinding::Namespace => self.resolver.resolve(source, None, true)?,
                        ImportBinding::Named(imported) => {
                            self.resolver.resolve(source, Some(imported), false)?
                        }
                    };
                    statements.push(ast_builder::var_decl(&specifier.local, path.to_expr()));
                }
                Ok(statements)
            }

            Declaration::ExportDefault { value } => {
                let path = self.resolver.resolve_own(None);
                let mut statements = Vec::new();
                self.assign_to_global(&path, value.clone(), &mut statements);
                Ok(statements)
            }

            Declaration::ExportNamed { specifiers, source } => {
                let mut statements = Vec::new();
                for specifier in specifiers {
                    let destination = self.resolver.resolve_own(Some(&specifier.exported));
                    let value = match source {
                        // Re-export: read the value straight out of the
                        // source module's namespace slot.
                        Some(source) => self
                            .resolver
                            .resolve(source, Some(&specifier.local), false)?
                            .to_expr(),
                        None => ast_builder::ident(&specifier.local),
                    };
                    self.assign_to_global(&destination, value, &mut statements);
                }
                Ok(statements)
            }

            Declaration::ExportAll { source } => {
                // The source unit's own export rewriting already populates
                // the shared namespace.
                debug!("wildcard re-export from '{source}' needs no replacement");
                Ok(Vec::new())
            }
        }
    }

    /// Rewrite a whole declaration list and apply the final unit wrap.
    pub fn rewrite_unit(&mut self, declarations: &[Declaration]) -> Result<Vec<Stmt>> {
        let mut body = Vec::new();
        for declaration in declarations {
            body.extend(self.rewrite(declaration)?);
        }
        Ok(Self::wrap_unit(body))
    }

    /// Wrap the unit's final statement list so `this` inside it resolves to
    /// the caller-supplied namespace object:
    /// `(function () { <body> }).call(this);`
    ///
    /// Applied exactly once, as the very last step, for any body length.
    pub fn wrap_unit(body: Vec<Stmt>) -> Vec<Stmt> {
        vec![ast_builder::iife_call(body)]
    }

    /// Emit an assignment of `value` to `path`, preceded by `{}` initializers
    /// for any of the path's prefixes not yet seen this session.
    fn assign_to_global(&mut self, path: &NamespacePath, value: Expr, out: &mut Vec<Stmt>) {
        for prefix in path.creation_prefixes() {
            if self.declared_prefixes.insert(prefix.dotted()) {
                debug!("creating namespace object {prefix}");
                out.push(ast_builder::assign(prefix.to_expr(), Expr::ObjectLit));
            }
        }
        out.push(ast_builder::assign(path.to_expr(), value));
    }
}
