use embed::{EmbedVideo, SmolStr};

use crate::error::{self, ErrorList, ValidationError};

/// Chainable, validating wrapper around [`EmbedVideo`].
///
/// Unlike images and thumbnails, the video URL carries no prefix rule: the
/// platform populates video embeds itself and ignores proxy data, so there
/// is no restricted slot to guard.
#[derive(Default, Debug, Clone)]
pub struct VideoBuilder {
    video: EmbedVideo,
    errors: Option<ErrorList>,
}

impl VideoBuilder {
    /// Creates an empty video with no accumulated errors.
    pub fn new() -> VideoBuilder {
        VideoBuilder::default()
    }

    /// Video source; unvalidated.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        self.video.url = url.into();
        self
    }

    /// Video height in pixels; must be positive.
    pub fn height(mut self, height: i32) -> Self {
        if height > 0 {
            self.video.height = Some(height);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "video height",
                    value: height,
                },
            );
        }
        self
    }

    /// Video width in pixels; must be positive.
    pub fn width(mut self, width: i32) -> Self {
        if width > 0 {
            self.video.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::NotPositive {
                    field: "video width",
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
            self.video.height = Some(height);
            self.video.width = Some(width);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::DimensionsNotPositive {
                    field: "video",
                    height,
                    width,
                },
            );
        }
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedVideo, Option<ErrorList>) {
        (core::mem::take(&mut self.video), self.errors.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_not_prefix_checked() {
        // video urls are set verbatim, unlike image/thumbnail urls
        let (video, errors) = VideoBuilder::new().url("rtmp://stream.example.com/live").finalize();

        assert!(errors.is_none());
        assert_eq!(video.url, "rtmp://stream.example.com/live");
    }

    #[test]
    fn test_dimension_rules() {
        let (video, errors) = VideoBuilder::new().height(720).width(-1).finalize();

        assert_eq!(video.height, Some(720));
        assert_eq!(video.width, None);
        assert_eq!(
            errors,
            Some(vec![ValidationError::NotPositive {
                field: "video width",
                value: -1,
            }])
        );
    }
}
