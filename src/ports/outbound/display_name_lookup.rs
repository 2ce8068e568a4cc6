use crate::catalog::domain::{DisplayNames, DisplayRequest};

/// DisplayNameLookup port for resolving human-readable names of coded attributes
///
/// This port abstracts the display-name service that maps codes such as
/// `PRODUCTION` to names such as "Production". It is injected into the
/// aggregators instead of being looked up globally.
///
/// Implementations must never fail: a code that cannot be resolved is simply
/// left out of the returned map.
pub trait DisplayNameLookup {
    /// Resolves display names for the coded attributes of one entity
    ///
    /// # Arguments
    /// * `request` - The entity kind and its coded attributes
    ///
    /// # Returns
    /// A map of display field (`<attribute>Display`) to resolved name
    fn resolve(&self, request: &DisplayRequest<'_>) -> DisplayNames;
}

impl<T: DisplayNameLookup + ?Sized> DisplayNameLookup for &T {
    fn resolve(&self, request: &DisplayRequest<'_>) -> DisplayNames {
        (**self).resolve(request)
    }
}
