//! Registry for generic type declarations grouped by friendly name.
//!
//! The `GenericRegistry` accepts declaration descriptors as the host's type
//! catalog discovers them and indexes each declared name under its
//! (namespace, erased base name) key, so that a caller holding only a
//! friendly name like `List` can recover the concrete declaration of the
//! arity it wants.
//!
//! # Design
//!
//! - Namespaces live in an `FxHashMap`: they are only ever point-looked-up.
//! - Base names within a namespace live in a `BTreeMap` so enumeration is
//!   deterministic.
//! - Declared names under a base name keep registration order. The sequence
//!   is never reordered or deduplicated; the first entry is the default
//!   representative for the family.
//! - One `RwLock` guards the whole index. Writes are rare (type discovery,
//!   mostly at startup) and critical sections are short. Queries that call
//!   into the resolver snapshot the candidate names under the read lock and
//!   resolve with the lock released.

use std::collections::BTreeMap;
use std::sync::Arc;

use keel_host::{HostType, TypeResolver, erase_arity, qualify};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Declarations of one namespace, grouped by erased base name.
#[derive(Debug, Default)]
struct NamespaceIndex {
    /// Erased base name -> declared names in registration order.
    base_names: BTreeMap<String, Vec<String>>,
}

/// Registry mapping friendly generic type names to concrete declarations.
///
/// Append-only for the life of the process: entries are added by
/// [`register`](GenericRegistry::register) and never removed or mutated.
/// All methods take `&self`; interior locking makes the registry safe to
/// share across threads (see [`SharedGenericRegistry`]).
#[derive(Debug, Default)]
pub struct GenericRegistry {
    namespaces: RwLock<FxHashMap<String, NamespaceIndex>>,
}

impl GenericRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        GenericRegistry {
            namespaces: RwLock::new(FxHashMap::default()),
        }
    }

    /// Record a generic type declaration discovered in the host.
    ///
    /// The declared name is indexed under the namespace and the base name
    /// obtained by erasing any arity marker. The full declared name is
    /// appended unconditionally - duplicate registrations are the caller's
    /// responsibility to avoid.
    ///
    /// A descriptor without a namespace or without a name is skipped
    /// silently: registration is best-effort metadata capture and must never
    /// abort a discovery pass.
    pub fn register(&self, ty: &dyn HostType) {
        let (Some(namespace), Some(declared)) = (ty.namespace(), ty.name()) else {
            return;
        };
        let base = erase_arity(declared);

        let mut namespaces = self.namespaces.write();
        let index = namespaces.entry(namespace.to_owned()).or_default();
        index
            .base_names
            .entry(base.to_owned())
            .or_default()
            .push(declared.to_owned());

        tracing::trace!(namespace, declared, base, "registered generic declaration");
    }

    /// Enumerate the erased base names registered under a namespace.
    ///
    /// Returns `None` if nothing was ever registered under the namespace,
    /// so callers can tell "no generics here" from "unknown namespace". The
    /// returned names are sorted and are a snapshot: later registrations do
    /// not affect it.
    pub fn base_names(&self, namespace: &str) -> Option<Vec<String>> {
        let namespaces = self.namespaces.read();
        let index = namespaces.get(namespace)?;
        Some(index.base_names.keys().cloned().collect())
    }

    /// Resolve the declaration with exactly `param_count` generic parameters.
    ///
    /// `name` may still carry an arity marker; it is erased before lookup.
    /// Candidates are tried in registration order and the first whose
    /// resolved handle reports the requested parameter count wins; a
    /// candidate the resolver cannot produce is skipped, not fatal. Returns
    /// `None` when no entry exists or no candidate matches.
    #[tracing::instrument(level = "trace", skip(self, resolver))]
    pub fn resolve_arity<R: TypeResolver>(
        &self,
        resolver: &R,
        namespace: &str,
        name: &str,
        param_count: usize,
    ) -> Option<R::Handle> {
        let candidates = self.candidates(namespace, name)?;
        candidates
            .iter()
            .filter_map(|declared| resolver.resolve(&qualify(namespace, declared)))
            .find(|handle| handle.generic_param_count() == param_count)
    }

    /// Resolve every declaration sharing a base name, in registration order.
    ///
    /// `name` may still carry an arity marker; it is erased before lookup.
    /// Returns `None` when the namespace or base name was never registered,
    /// and a possibly-empty list when the entry exists but some or all
    /// variants do not currently load - unresolvable names are dropped
    /// silently.
    #[tracing::instrument(level = "trace", skip(self, resolver))]
    pub fn resolve_variants<R: TypeResolver>(
        &self,
        resolver: &R,
        namespace: &str,
        name: &str,
    ) -> Option<Vec<R::Handle>> {
        let candidates = self.candidates(namespace, name)?;
        let handles = candidates
            .iter()
            .filter_map(|declared| resolver.resolve(&qualify(namespace, declared)))
            .collect();
        Some(handles)
    }

    /// Resolve the declaration matching a handle's name with `param_count`
    /// generic parameters.
    ///
    /// Convenience over [`resolve_arity`](GenericRegistry::resolve_arity)
    /// for callers holding a live handle. Returns `None` if the handle lacks
    /// a namespace or name.
    pub fn resolve_for_type<R: TypeResolver>(
        &self,
        resolver: &R,
        ty: &dyn HostType,
        param_count: usize,
    ) -> Option<R::Handle> {
        let namespace = ty.namespace()?;
        let name = ty.name()?;
        self.resolve_arity(resolver, namespace, name, param_count)
    }

    /// Resolve every declaration sharing a handle's base name.
    ///
    /// Convenience over
    /// [`resolve_variants`](GenericRegistry::resolve_variants) for callers
    /// holding a live handle. Returns `None` if the handle lacks a namespace
    /// or name.
    pub fn variants_for_type<R: TypeResolver>(
        &self,
        resolver: &R,
        ty: &dyn HostType,
    ) -> Option<Vec<R::Handle>> {
        let namespace = ty.namespace()?;
        let name = ty.name()?;
        self.resolve_variants(resolver, namespace, name)
    }

    /// First-registered declared name for an exact base-name key.
    ///
    /// The key is used exactly as given - no arity erasure - because this
    /// lookup is meant for keys that are already erased. Never consults a
    /// resolver, so it reports what was registered even when the declaration
    /// does not currently load.
    pub fn default_variant(&self, namespace: &str, base_name: &str) -> Option<String> {
        let namespaces = self.namespaces.read();
        let index = namespaces.get(namespace)?;
        let declared = index.base_names.get(base_name)?;
        declared.first().cloned()
    }

    /// Number of namespaces with at least one registered declaration.
    pub fn namespace_count(&self) -> usize {
        self.namespaces.read().len()
    }

    /// Check if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.namespaces.read().is_empty()
    }

    /// Snapshot the declared-name sequence for `(namespace, name)`.
    ///
    /// Erases any arity marker from `name` before lookup. `None` covers both
    /// an unknown namespace and an unknown base name; the public queries
    /// collapse the two on purpose. Returning an owned snapshot lets callers
    /// run the resolver without holding the registry lock.
    fn candidates(&self, namespace: &str, name: &str) -> Option<Vec<String>> {
        let base = erase_arity(name);
        let namespaces = self.namespaces.read();
        let index = namespaces.get(namespace)?;
        let declared = index.base_names.get(base)?;
        Some(declared.clone())
    }
}

/// Shared handle to the process-lifetime generic registry.
///
/// The hosting component creates one registry and clones this handle into
/// every discovery and query call site, so all of them observe the same
/// index. The newtype keeps `Arc<GenericRegistry>` from leaking into
/// signatures across the codebase.
#[derive(Clone)]
pub struct SharedGenericRegistry(Arc<GenericRegistry>);

impl SharedGenericRegistry {
    /// Create a handle to a new empty registry.
    pub fn new() -> Self {
        SharedGenericRegistry(Arc::new(GenericRegistry::new()))
    }
}

impl std::fmt::Debug for SharedGenericRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedGenericRegistry")
            .field("namespaces", &self.0.namespace_count())
            .finish()
    }
}

impl Default for SharedGenericRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for SharedGenericRegistry {
    type Target = GenericRegistry;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
