//! Type name registries for the Keel runtime.
//!
//! Host type systems encode generic arity in the declared name (`` List`1 ``,
//! `` Dictionary`2 ``), but callers on the embedding side know types by their
//! friendly base name plus a desired parameter count. This crate maintains
//! the mapping between the two:
//! - [`GenericRegistry`] indexes every discovered generic declaration by
//!   (namespace, erased base name)
//! - [`SharedGenericRegistry`] is the clonable process-lifetime handle the
//!   hosting component passes to discovery and query call sites
//!
//! Type discovery and the loading of resolved names stay outside this crate,
//! behind the `keel_host` traits.

mod generics;

pub use generics::{GenericRegistry, SharedGenericRegistry};
