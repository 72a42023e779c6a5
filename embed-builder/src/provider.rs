use embed::{EmbedProvider, SmolStr};

use crate::error::ErrorList;

/// Chainable wrapper around [`EmbedProvider`].
///
/// The platform documents no constraints for provider data, so nothing is
/// validated here; use at your own risk. The builder still participates in
/// the finalize protocol so providers attach like every other sub-entity.
#[derive(Default, Debug, Clone)]
pub struct ProviderBuilder {
    provider: EmbedProvider,
    errors: Option<ErrorList>,
}

impl ProviderBuilder {
    /// Creates an empty provider with no accumulated errors.
    pub fn new() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// Provider name; unvalidated.
    pub fn name(mut self, name: impl Into<SmolStr>) -> Self {
        self.provider.name = Some(name.into());
        self
    }

    /// Provider link; unvalidated.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        self.provider.url = Some(url.into());
        self
    }

    /// Hands back the plain record and the (always absent) error list,
    /// resetting the builder.
    pub fn finalize(&mut self) -> (EmbedProvider, Option<ErrorList>) {
        (core::mem::take(&mut self.provider), self.errors.take())
    }
}
