use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item};

const FACADE_NAMES: [&str; 2] = ["vc_tree", "vc"];
const MEMBER_PREFIX: &str = "vc_";

/// The dependency names declared by the Cargo.toml of the crate that invokes
/// a macro.
///
/// Generated code names the engine through a path that must resolve in the
/// caller, which may depend on `vc_mapping` directly or only on the `vc_tree`
/// facade.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_mapping"));
/// ```
///
/// # Resolution rules
///
/// `[dependencies]` is searched first, then `[dev-dependencies]`. In each:
///
/// 1. `name` itself resolves to `::name`.
/// 2. For a `vc_` member, the facade `vc_tree` (or its alias `vc`) resolves to
///    `::vc_tree::short_name`, e.g. `vc_mapping` -> `::vc_tree::mapping`.
///
/// If neither table matches, the result is `::name`. A crate referencing
/// itself needs `extern crate self as name;` for that path to resolve.
#[derive(Debug)]
pub struct Manifest {
    dependencies: BTreeSet<String>,
    dev_dependencies: BTreeSet<String>,
    modified_time: SystemTime,
}

impl Manifest {
    fn load(path: &Path, modified_time: SystemTime) -> Self {
        let text = std::fs::read_to_string(path)
            .unwrap_or_else(|_| panic!("Unable to read cargo manifest: {}", path.display()));
        let document = Document::parse(text)
            .unwrap_or_else(|_| panic!("Failed to parse cargo manifest: {}", path.display()));

        let names = |table: &str| match document.get(table) {
            Some(Item::Table(deps)) => deps.iter().map(|(key, _)| key.to_owned()).collect(),
            _ => BTreeSet::new(),
        };

        Self {
            dependencies: names("dependencies"),
            dev_dependencies: names("dev-dependencies"),
            modified_time,
        }
    }

    fn resolve(deps: &BTreeSet<String>, name: &str) -> Option<syn::Path> {
        if deps.contains(name) {
            return Some(parse_path(&format!("::{name}")));
        }
        let short_name = name.strip_prefix(MEMBER_PREFIX)?;
        FACADE_NAMES
            .into_iter()
            .find(|facade| deps.contains(*facade))
            .map(|facade| parse_path(&format!("::{facade}::{short_name}")))
    }

    /// Returns the path under which the crate `name` is reachable from the
    /// caller. See the type docs for the rules.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        Self::resolve(&self.dependencies, name)
            .or_else(|| Self::resolve(&self.dev_dependencies, name))
            .unwrap_or_else(|| parse_path(&format!("::{name}")))
    }

    /// Runs `func` with the [`Manifest`] of the caller's Cargo.toml.
    ///
    /// Manifests are cached per path and reloaded when the file changes.
    /// Reading one still takes a global lock, so call this once per macro
    /// invocation and reuse the returned path.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let dir = std::env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR should be auto-defined by cargo.");
        let path = PathBuf::from(dir).join("Cargo.toml");
        let modified_time = std::fs::metadata(&path)
            .and_then(|meta| meta.modified())
            .unwrap_or_else(|_| panic!("Cargo manifest does not exist at path {}", path.display()));

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Self::load(&path, modified_time);
        let result = func(&manifest);
        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);
        result
    }
}

fn parse_path(path: &str) -> syn::Path {
    syn::parse_str(path).unwrap_or_else(|_| panic!("`{path}` is not a valid path"))
}

#[cfg(test)]
mod tests {
    use super::Manifest;
    use quote::ToTokens;

    fn manifest(deps: &[&str], dev_deps: &[&str]) -> Manifest {
        Manifest {
            dependencies: deps.iter().map(|s| s.to_string()).collect(),
            dev_dependencies: dev_deps.iter().map(|s| s.to_string()).collect(),
            modified_time: std::time::SystemTime::UNIX_EPOCH,
        }
    }

    fn resolved(manifest: &Manifest) -> String {
        manifest
            .get_crate_path("vc_mapping")
            .to_token_stream()
            .to_string()
            .replace(' ', "")
    }

    #[test]
    fn resolution_order() {
        assert_eq!(resolved(&manifest(&["vc_mapping"], &[])), "::vc_mapping");
        assert_eq!(resolved(&manifest(&["vc_tree"], &[])), "::vc_tree::mapping");
        assert_eq!(resolved(&manifest(&["vc"], &[])), "::vc::mapping");
        assert_eq!(resolved(&manifest(&["serde"], &["vc_tree"])), "::vc_tree::mapping");
        assert_eq!(resolved(&manifest(&[], &[])), "::vc_mapping");
    }
}
