use crate::catalog::domain::{Decorated, Describable};
use crate::ports::outbound::DisplayNameLookup;

/// Returns a copy of `entity` with resolved display names attached
///
/// The input is left untouched. Codes the lookup cannot resolve are simply
/// absent from the result.
pub fn decorate<T, L>(entity: &T, lookup: &L) -> Decorated<T>
where
    T: Describable + Clone,
    L: DisplayNameLookup + ?Sized,
{
    let request = entity.display_request();
    Decorated::new(entity.clone(), lookup.resolve(&request))
}
