//! Global namespace path resolution
//!
//! Maps a module specifier (plus an optional member name and wildcard flag)
//! to the dotted path its value lives under in the shared namespace object,
//! e.g. `this.es6GlobalsNamed.foo.x`. Resolution is purely lexical: no
//! filesystem access, and identical inputs always produce identical paths.

use std::{
    fmt,
    path::{Component, Path, PathBuf},
};

use anyhow::{Result, anyhow, bail};
use log::debug;

use crate::{
    ast::Expr,
    ast_builder,
    config::UnitConfig,
};

/// Suffix appended to the namespace root for named and wildcard bindings,
/// keeping them out of the object that holds module default values.
const NAMED_SUFFIX: &str = "Named";

/// A fully resolved namespace path: root (possibly suffixed), module
/// segment, and an optional member segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// The dotted path without the receiver, e.g. `es6GlobalsNamed.foo.x`.
    /// Used as the ledger key for namespace-creation bookkeeping.
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// The receiver-anchored reference, e.g. `this.es6GlobalsNamed.foo.x`.
    pub fn qualified(&self) -> String {
        format!("this.{}", self.dotted())
    }

    /// Build the member-expression chain for this path.
    pub fn to_expr(&self) -> Expr {
        let segments: Vec<&str> = self.segments.iter().map(String::as_str).collect();
        ast_builder::receiver_member(&segments)
    }

    /// The prefixes that must refer to an object before this path can be
    /// assigned to, from the namespace root outward. The root itself is
    /// excluded: the host owns `this.<root>`.
    pub fn creation_prefixes(&self) -> impl Iterator<Item = Self> + '_ {
        (1..self.segments.len().saturating_sub(1)).map(|end| Self {
            segments: self.segments[..=end].to_vec(),
        })
    }
}

impl fmt::Display for NamespacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/// Resolves module specifiers to namespace paths for one compilation unit.
///
/// Constructed once per rewrite session from the unit's [`UnitConfig`];
/// all state is derived at construction and never mutated.
#[derive(Debug)]
pub struct GlobalPathResolver {
    /// Namespace root name, before any `Named` suffix
    global_name: String,
    /// Directory containing the unit, for resolving relative specifiers
    unit_dir: PathBuf,
    /// The unit's own module segment, used for its exports
    unit_segment: String,
}

impl GlobalPathResolver {
    /// Derive a resolver from the unit configuration.
    pub fn new(config: &UnitConfig) -> Result<Self> {
        let unit_path = if config.filename.is_absolute() {
            config.filename.clone()
        } else {
            config.base_dir.join(&config.filename)
        };

        let unit_segment = module_segment(&unit_path).ok_or_else(|| {
            anyhow!(
                "cannot derive a module name from unit filename '{}'",
                config.filename.display()
            )
        })?;
        let unit_dir = unit_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        Ok(Self {
            global_name: config.global_name.clone(),
            unit_dir,
            unit_segment,
        })
    }

    /// Resolve a specifier from an import or re-export declaration.
    ///
    /// Relative specifiers resolve against the unit's directory; bare
    /// specifiers are opaque names. When `member` is given or `is_wildcard`
    /// is set, the path is rooted under the `Named`-suffixed namespace.
    pub fn resolve(
        &self,
        specifier: &str,
        member: Option<&str>,
        is_wildcard: bool,
    ) -> Result<NamespacePath> {
        if specifier.is_empty() {
            bail!("module specifier must not be empty");
        }

        let resolved = if specifier.starts_with('.') {
            self.resolve_relative(specifier)
        } else {
            PathBuf::from(specifier)
        };
        let module = module_segment(&resolved).ok_or_else(|| {
            anyhow!("cannot derive a module name from specifier '{specifier}'")
        })?;

        let path = self.build(module, member, is_wildcard);
        debug!("resolved specifier '{specifier}' -> {path}");
        Ok(path)
    }

    /// Resolve a path under the unit's own module segment, as used by its
    /// export declarations. `member` follows the same suffixing rule as
    /// [`Self::resolve`]; the unit's own exports are never wildcards.
    pub fn resolve_own(&self, member: Option<&str>) -> NamespacePath {
        self.build(self.unit_segment.clone(), member, false)
    }

    fn build(&self, module: String, member: Option<&str>, is_wildcard: bool) -> NamespacePath {
        let mut root = self.global_name.clone();
        if member.is_some() || is_wildcard {
            root.push_str(NAMED_SUFFIX);
        }

        let mut segments = vec![root, module];
        if let Some(member) = member {
            segments.push(member.to_owned());
        }

        NamespacePath { segments }
    }

    /// Lexically join a relative specifier onto the unit's directory.
    /// Only the final component matters for the module segment, so `.` and
    /// `..` are folded without consulting the filesystem.
    fn resolve_relative(&self, specifier: &str) -> PathBuf {
        let mut resolved = self.unit_dir.clone();
        for component in Path::new(specifier).components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(segment) => resolved.push(segment),
                Component::RootDir | Component::Prefix(_) => {
                    resolved = PathBuf::from(component.as_os_str());
                }
            }
        }
        resolved
    }
}

/// The final path component with its extension stripped, if one can be
/// derived at all.
fn module_segment(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}
