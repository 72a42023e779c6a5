use embed::{EmbedImage, SmolStr};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::is_valid_icon_url;

/// Chainable, validating wrapper around [`EmbedImage`].
#[derive(Default, Debug, Clone)]
pub struct ImageBuilder {
    image: EmbedImage,
    errors: Option<ErrorList>,
}

impl ImageBuilder {
    /// Creates an empty image with no accumulated errors.
    pub fn new() -> ImageBuilder {
        ImageBuilder::default()
    }

    /// Image source; must start with `http://`, `https://`, or `attachment://`.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        let url = url.into();

        if is_valid_icon_url(&url) {
            self.image.url = url;
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl { field: "image url", value: url },
            );
        }
        self
    }

    /// Proxied image source; same URL-prefix rule as [`url`](Self::url).
    pub fn proxy_url(mut self, proxy_url: impl Into<SmolStr>) -> Self {
        let proxy_url = proxy_url.into();

        if is_valid_icon_url(&proxy_url) {
            self.image.proxy_url = Some(proxy_url);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::InvalidUrl {
                    field: "image proxyUrl",
                    value: proxy_url,
                },
            );
        }
        self
    }

    /// Image height in pixels; must be positive.
    pub fn height(mut self, height: i32) -> Self {
        if height > 0 {
            self.image.height = Some(height);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "image height",
                    value: height,
                },
            );
        }
        self
    }

    /// Image width in pixels; must be positive.
    pub fn width(mut self, width: i32) -> Self {
        if width > 0 {
            self.image.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "image width",
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
            self.image.height = Some(height);
            self.image.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::DimensionsNotPositive {
                    field: "image",
                    height,
                    width,
                },
            );
        }
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedImage, Option<ErrorList>) {
        (core::mem::take(&mut self.image), self.errors.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_chain() {
        let (image, errors) = ImageBuilder::new()
            .url("https://cdn.example.com/photo.png")
            .dimensions(1080, 1920)
            .finalize();

        assert!(errors.is_none());
        assert_eq!(image.url, "https://cdn.example.com/photo.png");
        assert_eq!(image.height, Some(1080));
        assert_eq!(image.width, Some(1920));
    }

    #[test]
    fn test_independent_dimension_setters() {
        let (image, errors) = ImageBuilder::new().height(0).width(300).finalize();

        // width still lands even though height was rejected
        assert_eq!(image.height, None);
        assert_eq!(image.width, Some(300));
        assert_eq!(
            errors,
            Some(vec![ValidationError::NotPositive {
                field: "image height",
                value: 0,
            }])
        );
    }

    #[test]
    fn test_paired_dimensions_all_or_nothing() {
        let (image, errors) = ImageBuilder::new().dimensions(-1, 300).finalize();

        assert_eq!(image.height, None);
        assert_eq!(image.width, None);
        assert_eq!(
            errors,
            Some(vec![ValidationError::DimensionsNotPositive {
                field: "image",
                height: -1,
                width: 300,
            }])
        );
    }

    #[test]
    fn test_bad_url() {
        let (image, errors) = ImageBuilder::new().url("file:///tmp/photo.png").finalize();

        assert_eq!(image.url, "");
        assert_eq!(errors.map(|e| e.len()), Some(1));
    }
}
