//! Keel host vocabulary - the boundary to the embedded type system.
//!
//! This crate contains the shared vocabulary between the Keel runtime and
//! the host type system it embeds:
//! - `HostType` for opaque type handles
//! - `TypeDesc` for owned type descriptors
//! - `TypeResolver` for turning qualified names back into live handles
//! - Naming conventions (qualification, arity markers, erasure)
//!
//! # Design Philosophy
//!
//! The runtime never inspects host types structurally. Everything it needs
//! is the three read-only facts on [`HostType`]: namespace, declared name,
//! and generic parameter count. How a host materializes handles, loads
//! assemblies, or represents type identity stays on the host's side of the
//! [`TypeResolver`] seam.

mod handle;
mod names;
mod resolve;

pub use handle::{HostType, TypeDesc};
pub use names::{ARITY_MARKER, NAMESPACE_SEPARATOR, erase_arity, qualify};
pub use resolve::TypeResolver;
