//! The resolver seam between the runtime and the host's type loader.

use crate::HostType;

/// Turns qualified names back into live type handles.
///
/// Implemented by the host's assembly/type-loading machinery. The registry
/// only ever calls [`resolve`](TypeResolver::resolve) and treats `None` as
/// "this name does not currently load" - a name may reference a type in an
/// assembly that is unloaded or not yet loaded at query time, and that must
/// surface as absence, never as a failure.
pub trait TypeResolver {
    /// The handle type this resolver produces.
    type Handle: HostType;

    /// Resolve a qualified name to a live handle, or `None` if no type with
    /// that name is currently loadable.
    fn resolve(&self, qualified_name: &str) -> Option<Self::Handle>;
}
