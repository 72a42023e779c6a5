use embed::{
    Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider, EmbedThumbnail,
    EmbedType, EmbedVideo, Message, SmolStr, Timestamp,
};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::{self, text_len, LONG_TEXT_LIMIT, MAX_COLOR, MAX_FIELD_COUNT, SHORT_TEXT_LIMIT};
use crate::{
    AuthorBuilder, FieldBuilder, FooterBuilder, ImageBuilder, ProviderBuilder, ThumbnailBuilder,
    VideoBuilder,
};

/// Chainable, validating wrapper around a whole [`Embed`].
///
/// Scalar setters share the silent-fail contract of the sub-entity
/// builders. Sub-entities attach either as builders, which are finalized on
/// attachment with their errors folded into this builder's list, or as raw
/// records, which are assigned verbatim:
///
/// ```
/// use embed_builder::{AuthorBuilder, EmbedBuilder, FieldBuilder};
///
/// let (embed, errors) = EmbedBuilder::new()
///     .title("Deploy finished")
///     .color(0x2ECC71)
///     .author(AuthorBuilder::new().name("release bot"))
///     .field(FieldBuilder::new().name("duration").value("42s").inline(true))
///     .finalize();
///
/// assert!(errors.is_none());
/// assert_eq!(embed.title.as_deref(), Some("Deploy finished"));
/// ```
#[derive(Default, Debug, Clone)]
pub struct EmbedBuilder {
    embed: Embed,
    errors: Option<ErrorList>,
}

impl EmbedBuilder {
    /// Creates an empty embed with no accumulated errors.
    pub fn new() -> EmbedBuilder {
        EmbedBuilder::default()
    }

    /// Embed title, at most 256 characters.
    pub fn title(mut self, title: impl Into<SmolStr>) -> Self {
        let title = title.into();
        let len = text_len(&title);

        if len <= SHORT_TEXT_LIMIT {
            self.embed.title = Some(title);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::LabelTooLong {
                    field: "embed title",
                    limit: SHORT_TEXT_LIMIT,
                    len,
                    value: title,
                },
            );
        }
        self
    }

    /// Embed description, at most 2048 characters.
    pub fn description(mut self, description: impl Into<SmolStr>) -> Self {
        let description = description.into();
        let len = text_len(&description);

        if len <= LONG_TEXT_LIMIT {
            self.embed.description = Some(description);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::BodyTooLong {
                    field: "embed description",
                    limit: LONG_TEXT_LIMIT,
                    len,
                },
            );
        }
        self
    }

    /// Main link target of the embed; unvalidated.
    pub fn url(mut self, url: impl Into<SmolStr>) -> Self {
        self.embed.url = Some(url.into());
        self
    }

    /// Accent color, `0..=16_777_215`.
    pub fn color(mut self, color: u32) -> Self {
        if color <= MAX_COLOR {
            self.embed.color = color;
        } else {
            error::push(
                &mut self.errors,
                ValidationError::OutOfRange {
                    field: "embed color",
                    value: i64::from(color),
                    min: 0,
                    max: i64::from(MAX_COLOR),
                },
            );
        }
        self
    }

    /// Embed kind, statically known; never fails.
    pub fn kind(mut self, kind: EmbedType) -> Self {
        self.embed.ty = kind;
        self
    }

    /// Embed kind by platform name, one of `rich`, `image`, `video`,
    /// `gifv`, `link`, or `article`.
    pub fn kind_name(mut self, kind: impl Into<SmolStr>) -> Self {
        let kind = kind.into();

        match kind.parse::<EmbedType>() {
            Ok(ty) => self.embed.ty = ty,
            Err(_) => error::push(&mut self.errors, ValidationError::InvalidType { value: kind }),
        }
        self
    }

    /// Stamps the embed with the current UTC instant; never fails.
    pub fn current_timestamp(self) -> Self {
        self.timestamp(Timestamp::now_utc())
    }

    /// Stamps the embed with the given instant (stored UTC, platform
    /// wire format); never fails.
    pub fn timestamp(mut self, timestamp: Timestamp) -> Self {
        self.embed.timestamp = Some(timestamp);
        self
    }

    /// Finalizes `field`, folds its errors into this builder, and appends
    /// the record via [`raw_field`](Self::raw_field).
    pub fn field(mut self, mut field: FieldBuilder) -> Self {
        let (record, errors) = field.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_field(record)
    }

    /// Appends an already-built field record. Embeds hold at most 25
    /// fields; past that the field is dropped and an error names it.
    pub fn raw_field(mut self, field: EmbedField) -> Self {
        if self.embed.fields.len() < MAX_FIELD_COUNT {
            self.embed.fields.push(field);
        } else {
            error::push(
                &mut self.errors,
                ValidationError::FieldLimit {
                    name: field.name,
                    limit: MAX_FIELD_COUNT,
                },
            );
        }
        self
    }

    /// Applies [`field`](Self::field) to each builder in order, so a batch
    /// crossing the 25-field boundary accepts a prefix and rejects the rest
    /// individually.
    pub fn fields(self, fields: impl IntoIterator<Item = FieldBuilder>) -> Self {
        fields.into_iter().fold(self, EmbedBuilder::field)
    }

    /// Applies [`raw_field`](Self::raw_field) to each record in order.
    pub fn raw_fields(self, fields: impl IntoIterator<Item = EmbedField>) -> Self {
        fields.into_iter().fold(self, EmbedBuilder::raw_field)
    }

    /// Marks every currently-attached field inline; never fails.
    pub fn inline_all_fields(mut self) -> Self {
        for field in &mut self.embed.fields {
            field.inline = true;
        }
        self
    }

    /// Marks every currently-attached field block-formatted; never fails.
    pub fn outline_all_fields(mut self) -> Self {
        for field in &mut self.embed.fields {
            field.inline = false;
        }
        self
    }

    /// Finalizes `author` into the author slot, folding its errors in.
    /// Replaces any previously attached author.
    pub fn author(mut self, mut author: AuthorBuilder) -> Self {
        let (record, errors) = author.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_author(record)
    }

    /// Sets the author slot to an already-built record, unvalidated.
    pub fn raw_author(mut self, author: EmbedAuthor) -> Self {
        self.embed.author = Some(author);
        self
    }

    /// Finalizes `footer` into the footer slot, folding its errors in.
    pub fn footer(mut self, mut footer: FooterBuilder) -> Self {
        let (record, errors) = footer.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_footer(record)
    }

    /// Sets the footer slot to an already-built record, unvalidated.
    pub fn raw_footer(mut self, footer: EmbedFooter) -> Self {
        self.embed.footer = Some(footer);
        self
    }

    /// Finalizes `image` into the image slot, folding its errors in.
    pub fn image(mut self, mut image: ImageBuilder) -> Self {
        let (record, errors) = image.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_image(record)
    }

    /// Sets the image slot to an already-built record, unvalidated.
    pub fn raw_image(mut self, image: EmbedImage) -> Self {
        self.embed.image = Some(image);
        self
    }

    /// Finalizes `thumbnail` into the thumbnail slot, folding its errors in.
    pub fn thumbnail(mut self, mut thumbnail: ThumbnailBuilder) -> Self {
        let (record, errors) = thumbnail.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_thumbnail(record)
    }

    /// Sets the thumbnail slot to an already-built record, unvalidated.
    pub fn raw_thumbnail(mut self, thumbnail: EmbedThumbnail) -> Self {
        self.embed.thumbnail = Some(thumbnail);
        self
    }

    /// Finalizes `video` into the video slot, folding its errors in.
    pub fn video(mut self, mut video: VideoBuilder) -> Self {
        let (record, errors) = video.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_video(record)
    }

    /// Sets the video slot to an already-built record, unvalidated.
    pub fn raw_video(mut self, video: EmbedVideo) -> Self {
        self.embed.video = Some(video);
        self
    }

    /// Finalizes `provider` into the provider slot. Providers validate
    /// nothing, so no errors can fold in today; merged anyway in case
    /// provider rules ever appear.
    pub fn provider(mut self, mut provider: ProviderBuilder) -> Self {
        let (record, errors) = provider.finalize();
        error::merge(&mut self.errors, errors);
        self.raw_provider(record)
    }

    /// Sets the provider slot to an already-built record, unvalidated.
    pub fn raw_provider(mut self, provider: EmbedProvider) -> Self {
        self.embed.provider = Some(provider);
        self
    }

    /// Certifies the assembled embed against the platform's acceptance
    /// rules (see [`validate_embed`](crate::validate::validate_embed)).
    ///
    /// Errors already accumulated by setters short-circuit the deeper
    /// checks and are returned as-is, without clearing the builder.
    pub fn validate(&self, msg: Option<&Message>) -> Option<ErrorList> {
        if self.errors.is_some() {
            return self.errors.clone();
        }
        validate::validate_embed(&self.embed, msg)
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder. Sub-builders were already
    /// drained at attachment time and are not touched.
    pub fn finalize(&mut self) -> (Embed, Option<ErrorList>) {
        (core::mem::take(&mut self.embed), self.errors.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_chain() {
        let (embed, errors) = EmbedBuilder::new()
            .title("weekly report")
            .description("all systems nominal")
            .url("https://status.example.com")
            .color(0xFF7700)
            .kind(EmbedType::Rich)
            .finalize();

        assert!(errors.is_none());
        assert_eq!(embed.title.as_deref(), Some("weekly report"));
        assert_eq!(embed.description.as_deref(), Some("all systems nominal"));
        assert_eq!(embed.color, 0xFF7700);
        assert_eq!(embed.ty, EmbedType::Rich);
    }

    #[test]
    fn test_color_range() {
        let (embed, errors) = EmbedBuilder::new().color(16_777_216).finalize();

        assert_eq!(embed.color, 0);
        assert_eq!(
            errors,
            Some(vec![ValidationError::OutOfRange {
                field: "embed color",
                value: 16_777_216,
                min: 0,
                max: 16_777_215,
            }])
        );

        // the upper bound itself is legal
        let (embed, errors) = EmbedBuilder::new().color(16_777_215).finalize();
        assert!(errors.is_none());
        assert_eq!(embed.color, 16_777_215);
    }

    #[test]
    fn test_kind_name() {
        let (embed, errors) = EmbedBuilder::new().kind_name("article").finalize();
        assert!(errors.is_none());
        assert_eq!(embed.ty, EmbedType::Article);

        let (embed, errors) = EmbedBuilder::new().kind_name("poll").finalize();
        assert_eq!(embed.ty, EmbedType::default());
        assert_eq!(
            errors,
            Some(vec![ValidationError::InvalidType {
                value: SmolStr::new("poll"),
            }])
        );
    }

    #[test]
    fn test_timestamps() {
        let (embed, errors) = EmbedBuilder::new().current_timestamp().finalize();
        assert!(errors.is_none());
        assert!(embed.timestamp.is_some());

        let ts = Timestamp::UNIX_EPOCH;
        let (embed, errors) = EmbedBuilder::new().timestamp(ts).finalize();
        assert!(errors.is_none());
        assert_eq!(embed.timestamp, Some(ts));
    }

    #[test]
    fn test_field_limit() {
        let mut builder = EmbedBuilder::new();
        for i in 0..26 {
            builder = builder.field(
                FieldBuilder::new()
                    .name(format!("field {i}"))
                    .value("value"),
            );
        }

        let (embed, errors) = builder.finalize();
        assert_eq!(embed.fields.len(), 25);
        assert_eq!(
            errors,
            Some(vec![ValidationError::FieldLimit {
                name: SmolStr::new("field 25"),
                limit: 25,
            }])
        );
    }

    #[test]
    fn test_bulk_fields_accept_prefix() {
        let batch = (0..30).map(|i| {
            FieldBuilder::new()
                .name(format!("field {i}"))
                .value("value")
        });

        let (embed, errors) = EmbedBuilder::new().fields(batch).finalize();

        assert_eq!(embed.fields.len(), 25);
        assert_eq!(embed.fields[24].name, "field 24");
        // each of the five rejected fields gets its own error
        assert_eq!(errors.map(|e| e.len()), Some(5));
    }

    #[test]
    fn test_inline_then_outline_all() {
        let (embed, errors) = EmbedBuilder::new()
            .fields((0..3).map(|i| {
                FieldBuilder::new()
                    .name(format!("field {i}"))
                    .value("value")
                    .inline(i % 2 == 0)
            }))
            .inline_all_fields()
            .outline_all_fields()
            .finalize();

        assert!(errors.is_none());
        assert_eq!(embed.fields.len(), 3);
        assert!(embed.fields.iter().all(|f| !f.inline));
    }

    #[test]
    fn test_sub_builder_errors_propagate() {
        let (embed, errors) = EmbedBuilder::new()
            .author(AuthorBuilder::new().name("bot").icon_url("no-scheme"))
            .footer(FooterBuilder::new().text(""))
            .finalize();

        // records still attach with whatever validated
        assert_eq!(embed.author.as_ref().unwrap().name, "bot");
        assert!(embed.footer.is_some());

        assert_eq!(
            errors,
            Some(vec![
                ValidationError::InvalidUrl {
                    field: "author iconUrl",
                    value: SmolStr::new("no-scheme"),
                },
                ValidationError::Empty { field: "footer text" },
            ])
        );
    }

    #[test]
    fn test_raw_attach_skips_validation() {
        let author = EmbedAuthor {
            name: SmolStr::new("n".repeat(300)),
            icon_url: Some(SmolStr::new("no-scheme")),
            ..Default::default()
        };

        let (embed, errors) = EmbedBuilder::new().raw_author(author.clone()).finalize();

        assert!(errors.is_none());
        assert_eq!(embed.author, Some(author));
    }

    #[test]
    fn test_attach_last_write_wins() {
        let (embed, errors) = EmbedBuilder::new()
            .footer(FooterBuilder::new().text("first"))
            .footer(FooterBuilder::new().text("second"))
            .finalize();

        assert!(errors.is_none());
        assert_eq!(embed.footer.unwrap().text, "second");
    }

    #[test]
    fn test_finalize_resets() {
        let mut builder = EmbedBuilder::new().title("t".repeat(300));

        let (_, errors) = builder.finalize();
        assert_eq!(errors.map(|e| e.len()), Some(1));

        let (embed, errors) = builder.finalize();
        assert!(errors.is_none());
        assert_eq!(embed, Embed::default());
    }

    #[test]
    fn test_validate_short_circuits_on_builder_errors() {
        let builder = EmbedBuilder::new().color(99_999_999);

        let errors = builder.validate(None).unwrap();
        assert_eq!(errors.len(), 1);

        // validate is non-destructive: finalize still reports them
        let mut builder = builder;
        let (_, errors) = builder.finalize();
        assert_eq!(errors.map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_validate_clean_builder_runs_deep_checks() {
        let builder = EmbedBuilder::new()
            .title("ok")
            .raw_field(EmbedField::default());

        // raw fields bypass setter validation; validate still catches them
        let errors = builder.validate(None).unwrap();
        assert_eq!(
            errors,
            vec![
                ValidationError::Empty { field: "field name" },
                ValidationError::Empty { field: "field value" },
            ]
        );

        let builder = EmbedBuilder::new().title("ok");
        assert_eq!(builder.validate(None), None);
    }
}
