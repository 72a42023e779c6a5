use embed::{EmbedThumbnail, SmolStr};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::is_valid_icon_url;

/// Chainable, validating wrapper around [`EmbedThumbnail`]. Same rules as
/// [`ImageBuilder`](crate::ImageBuilder), applied to the thumbnail slot.
#[derive(Default, Debug, Clone)]
pub struct ThumbnailBuilder {
    thumbnail: EmbedThumbnail,
    errors: Option<ErrorList>,
}

impl ThumbnailBuilder {
    /// Creates an empty thumbnail with no accumulated errors.
    pub fn new() -> ThumbnailBuilder {
        ThumbnailBuilder::default()
    }

    /// Thumbnail source; must start with `http://`, `https://`, or `attachment://`.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        let url = url.into();

        if is_valid_icon_url(&url) {
            self.thumbnail.url = url;
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "thumbnail url",
                    value: url,
                },
            );
        }
        self
    }

    /// Proxied thumbnail source; same URL-prefix rule as [`url`](Self::url).
    pub fn proxy_url(mut self, proxy_url: impl Into<SmolStr>) -> Self {
        let proxy_url = proxy_url.into();

        if is_valid_icon_url(&proxy_url) {
            self.thumbnail.proxy_url = Some(proxy_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "thumbnail proxyUrl",
                    value: proxy_url,
                },
            );
        }
        self
    }

    /// Thumbnail height in pixels; must be positive.
    pub fn height(mut self, height: i32) -> Self {
        if height > 0 {
            self.thumbnail.height = Some(height);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "thumbnail height",
                    value: height,
                },
            );
        }
        self
    }

    /// Thumbnail width in pixels; must be positive.
    pub fn width(mut self, width: i32) -> Self {
        if width > 0 {
            self.thumbnail.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "thumbnail width",
                    value: width,
                },
            );
        }
        self
    }

    /// Sets height and width together; if either is non-positive, neither
    /// is assigned and a single error is recorded.
    pub fn dimensions(mut self, height: i32, width: i32) -> Self {
        if height > 0 && width > 0 {
            self.thumbnail.height = Some(height);
            self.thumbnail.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::DimensionsNotPositive {
                    field: "thumbnail",
                    height,
                    width,
                },
            );
        }
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedThumbnail, Option<ErrorList>) {
        (core::mem::take(&mut self.thumbnail), self.errors.take())
    }
}
