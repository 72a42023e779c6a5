use embed::{EmbedAuthor, SmolStr};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::{is_valid_icon_url, text_len, SHORT_TEXT_LIMIT};

/// Chainable, validating wrapper around [`EmbedAuthor`].
///
/// Invalid input never corrupts the record: the offending setter leaves the
/// attribute unchanged and records one error for [`finalize`](Self::finalize)
/// to report.
#[derive(Default, Debug, Clone)]
pub struct AuthorBuilder {
    author: EmbedAuthor,
    errors: Option<ErrorList>,
}

impl AuthorBuilder {
    /// Creates an empty author with no accumulated errors.
    pub fn new() -> AuthorBuilder {
        AuthorBuilder::default()
    }

    /// Author display name, at most 256 characters.
    pub fn name(mut self, name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let len = text_len(&name);

        if len <= SHORT_TEXT_LIMIT {
            self.author.name = name;
        } else {
            error::push(
                &mut self.errors,
                ValidationError::LabelTooLong {
                    field: "author name",
                    limit: SHORT_TEXT_LIMIT,
                    len,
                    value: name,
                },
            );
        }
        self
    }

    /// Link target for the author name; unvalidated.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        self.author.url = Some(url.into());
        self
    }

    /// Author icon; must start with `http://`, `https://`, or `attachment://`.
    pub fn icon_url(mut self, icon_url: impl Into<SmolStr>) -> Self {
        let icon_url = icon_url.into();

        if is_valid_icon_url(&icon_url) {
            self.author.icon_url = Some(icon_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "author iconUrl",
                    value: icon_url,
                },
            );
        }
        self
    }

    /// Proxied author icon; same URL-prefix rule as [`icon_url`](Self::icon_url).
    pub fn proxy_icon_url(mut self, proxy_icon_url: impl Into<SmolStr>) -> Self {
        let proxy_icon_url = proxy_icon_url.into();

        if is_valid_icon_url(&proxy_icon_url) {
            self.author.proxy_icon_url = Some(proxy_icon_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "author proxyIconUrl",
                    value: proxy_icon_url,
                },
            );
        }
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedAuthor, Option<ErrorList>) {
        (core::mem::take(&mut self.author), self.errors.take())
    }
}
