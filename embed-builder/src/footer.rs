use embed::{EmbedFooter, SmolStr};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::{is_valid_icon_url, text_len, LONG_TEXT_LIMIT};

/// Chainable, validating wrapper around [`EmbedFooter`].
#[derive(Default, Debug, Clone)]
pub struct FooterBuilder {
    footer: EmbedFooter,
    errors: Option<ErrorList>,
}

impl FooterBuilder {
    /// Creates an empty footer with no accumulated errors.
    pub fn new() -> FooterBuilder {
        FooterBuilder::default()
    }

    /// Footer text, 1–2048 characters.
    pub fn text(mut self, text: impl Into<SmolStr>) -> Self {
        let text = text.into();
        let len = text_len(&text);

        if len > LONG_TEXT_LIMIT {
            error::push(
                &mut self.errors,
                ValidationError::BodyTooLong {
                    field: "footer text",
                    limit: LONG_TEXT_LIMIT,
                    len,
                },
            );
        } else if text.is_empty() {
            error::push(&mut self.errors, ValidationError::Empty { field: "footer text" });
        } else {
            self.footer.text = text;
        }
        self
    }

    /// Footer icon; must start with `http://`, `https://`, or `attachment://`.
    pub fn icon_url(mut self, icon_url: impl Into<SmolStr>) -> Self {
        let icon_url = icon_url.into();

        if is_valid_icon_url(&icon_url) {
            self.footer.icon_url = Some(icon_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "footer iconUrl",
                    value: icon_url,
                },
            );
        }
        self
    }

    /// Proxied footer icon; same URL-prefix rule as [`icon_url`](Self::icon_url).
    pub fn proxy_icon_url(mut self, proxy_icon_url: impl Into<SmolStr>) -> Self {
        let proxy_icon_url = proxy_icon_url.into();

        if is_valid_icon_url(&proxy_icon_url) {
            self.footer.proxy_icon_url = Some(proxy_icon_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "footer proxyIconUrl",
                    value: proxy_icon_url,
                },
            );
        }
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedFooter, Option<ErrorList>) {
        (core::mem::take(&mut self.footer), self.errors.take())
    }
}
