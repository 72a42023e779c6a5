//! Platform constants and whole-embed certification.

use embed::{Embed, Message, SmolStr};

use crate::error::{self, ErrorList, ValidationError};

/// Limit on titles, field names, and author names.
pub const SHORT_TEXT_LIMIT: usize = 256;

/// Limit on field values.
pub const FIELD_VALUE_LIMIT: usize = 1024;

/// Limit on descriptions and footer text.
pub const LONG_TEXT_LIMIT: usize = 2048;

/// Aggregate budget across all counted text in one embed.
pub const TOTAL_TEXT_LIMIT: usize = 6000;

/// Maximum number of fields attached to one embed.
pub const MAX_FIELD_COUNT: usize = 25;

/// Largest accepted color value (`0xFFFFFF`).
pub const MAX_COLOR: u32 = 16_777_215;

/// Limit on an outgoing message's body text.
pub const MAX_MESSAGE_CONTENT: usize = 2000;

/// The only URL schemes the platform accepts in icon/media slots.
pub const ACCEPTED_URL_PREFIXES: [&str; 3] = ["https://", "attachment://", "http://"];

/// Whether the platform will accept `url` in one of its restricted slots.
pub fn is_valid_icon_url(url: &str) -> bool {
    ACCEPTED_URL_PREFIXES.iter().any(|prefix| url.starts_with(prefix))
}

// limits are documented in characters, not bytes
pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Certify that the platform is likely to accept `embed` as assembled.
///
/// With a [`Message`], additionally cross-checks `attachment://` URLs
/// against the files actually attached and the body length against
/// [`MAX_MESSAGE_CONTENT`]. Returns `None` when everything passes.
pub fn validate_embed(embed: &Embed, msg: Option<&Message>) -> Option<ErrorList> {
    let mut errors = None;

    let total = embed.total_text_len();
    if total > TOTAL_TEXT_LIMIT {
        error::push(
            &mut errors,
            ValidationError::TotalTextOverLimit {
                limit: TOTAL_TEXT_LIMIT,
                len: total,
            },
        );
    }

    check_label(&mut errors, "embed title", embed.title.as_deref());
    for field in &embed.fields {
        check_label(&mut errors, "field name", Some(&field.name));
    }
    if let Some(ref author) = embed.author {
        check_label(&mut errors, "author name", Some(&author.name));
    }

    for field in &embed.fields {
        let len = text_len(&field.value);
        if len > FIELD_VALUE_LIMIT {
            error::push(
                &mut errors,
                ValidationError::BodyTooLong {
                    field: "field value",
                    limit: FIELD_VALUE_LIMIT,
                    len,
                },
            );
        }
    }

    check_body(&mut errors, "embed description", embed.description.as_deref());
    check_body(&mut errors, "footer text", embed.footer.as_ref().map(|f| &*f.text));

    if embed.fields.len() > MAX_FIELD_COUNT {
        // only reachable through raw records; the builder caps attachment
        error::push(
            &mut errors,
            ValidationError::FieldLimit {
                name: embed.fields[MAX_FIELD_COUNT].name.clone(),
                limit: MAX_FIELD_COUNT,
            },
        );
    }

    if let Some(ref footer) = embed.footer {
        if footer.text.is_empty() {
            error::push(&mut errors, ValidationError::Empty { field: "footer text" });
        }
    }
    for field in &embed.fields {
        if field.name.is_empty() {
            error::push(&mut errors, ValidationError::Empty { field: "field name" });
        }
        if field.value.is_empty() {
            error::push(&mut errors, ValidationError::Empty { field: "field value" });
        }
    }

    if let Some(msg) = msg {
        check_attachments(&mut errors, embed, msg);

        let len = text_len(&msg.content);
        if len > MAX_MESSAGE_CONTENT {
            error::push(
                &mut errors,
                ValidationError::BodyTooLong {
                    field: "message content",
                    limit: MAX_MESSAGE_CONTENT,
                    len,
                },
            );
        }
    }

    errors
}

fn check_label(errors: &mut Option<ErrorList>, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let len = text_len(value);
        if len > SHORT_TEXT_LIMIT {
            error::push(
                errors,
                ValidationError::LabelTooLong {
                    field,
                    limit: SHORT_TEXT_LIMIT,
                    len,
                    value: SmolStr::new(value),
                },
            );
        }
    }
}

fn check_body(errors: &mut Option<ErrorList>, field: &'static str, value: Option<&str>) {
    if let Some(value) = value {
        let len = text_len(value);
        if len > LONG_TEXT_LIMIT {
            error::push(
                errors,
                ValidationError::BodyTooLong {
                    field,
                    limit: LONG_TEXT_LIMIT,
                    len,
                },
            );
        }
    }
}

/// Every `attachment://` URL in the embed must reference a file attached
/// to the message it is sent with.
fn check_attachments(errors: &mut Option<ErrorList>, embed: &Embed, msg: &Message) {
    let mut check = |field: &'static str, url: Option<&SmolStr>| {
        let Some(url) = url else { return };

        if let Some(filename) = url.strip_prefix("attachment://") {
            if !msg.has_attachment(filename) {
                error::push(
                    errors,
                    ValidationError::UnattachedFile {
                        field,
                        value: url.clone(),
                    },
                );
            }
        }
    };

    check("embed url", embed.url.as_ref());

    if let Some(ref author) = embed.author {
        check("author iconUrl", author.icon_url.as_ref());
        check("author proxyIconUrl", author.proxy_icon_url.as_ref());
    }

    if let Some(ref footer) = embed.footer {
        check("footer iconUrl", footer.icon_url.as_ref());
        check("footer proxyIconUrl", footer.proxy_icon_url.as_ref());
    }

    if let Some(ref image) = embed.image {
        check("image url", Some(&image.url));
        check("image proxyUrl", image.proxy_url.as_ref());
    }

    if let Some(ref thumbnail) = embed.thumbnail {
        check("thumbnail url", Some(&thumbnail.url));
        check("thumbnail proxyUrl", thumbnail.proxy_url.as_ref());
    }

    if let Some(ref video) = embed.video {
        check("video url", Some(&video.url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embed::{Attachment, EmbedField, EmbedFooter, EmbedImage};

    fn field(name: &str, value: &str) -> EmbedField {
        EmbedField {
            name: SmolStr::new(name),
            value: SmolStr::new(value),
            inline: false,
        }
    }

    #[test]
    fn test_icon_url_prefixes() {
        assert!(is_valid_icon_url("https://cdn.example.com/a.png"));
        assert!(is_valid_icon_url("http://example.com/a.png"));
        assert!(is_valid_icon_url("attachment://a.png"));

        assert!(!is_valid_icon_url("ftp://example.com/a.png"));
        assert!(!is_valid_icon_url("example.com/a.png"));
        assert!(!is_valid_icon_url(""));
        // prefix check is exact, not case-insensitive
        assert!(!is_valid_icon_url("HTTPS://example.com/a.png"));
    }

    #[test]
    fn test_passing_embed() {
        let embed = Embed {
            title: Some(SmolStr::new("status")),
            description: Some(SmolStr::new("all good")),
            fields: [field("uptime", "14d")].into_iter().collect(),
            ..Default::default()
        };

        assert_eq!(validate_embed(&embed, None), None);
    }

    #[test]
    fn test_total_budget() {
        let chunk: String = "x".repeat(2000);
        let embed = Embed {
            description: Some(SmolStr::new(&chunk)),
            fields: [
                field("a", &chunk),
                field("b", &chunk),
                field("c", &chunk),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        };

        let errors = validate_embed(&embed, None).unwrap();
        assert!(errors.contains(&ValidationError::TotalTextOverLimit {
            limit: TOTAL_TEXT_LIMIT,
            len: 2000 * 4 + 3,
        }));
    }

    #[test]
    fn test_per_field_limits() {
        let embed = Embed {
            title: Some(SmolStr::new("t".repeat(257))),
            description: Some(SmolStr::new("d".repeat(2049))),
            ..Default::default()
        };

        let errors = validate_embed(&embed, None).unwrap();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ValidationError::LabelTooLong { field: "embed title", len: 257, .. }
        ));
        assert!(matches!(
            errors[1],
            ValidationError::BodyTooLong { field: "embed description", len: 2049, .. }
        ));
    }

    #[test]
    fn test_empty_required_text() {
        let embed = Embed {
            footer: Some(EmbedFooter::default()),
            fields: [field("", "")].into_iter().collect(),
            ..Default::default()
        };

        let errors = validate_embed(&embed, None).unwrap();
        assert_eq!(
            errors,
            vec![
                ValidationError::Empty { field: "footer text" },
                ValidationError::Empty { field: "field name" },
                ValidationError::Empty { field: "field value" },
            ]
        );
    }

    #[test]
    fn test_attachment_cross_check() {
        let embed = Embed {
            image: Some(EmbedImage {
                url: SmolStr::new("attachment://chart.png"),
                ..Default::default()
            }),
            ..Default::default()
        };

        let mut msg = Message::default();
        let errors = validate_embed(&embed, Some(&msg)).unwrap();
        assert_eq!(
            errors,
            vec![ValidationError::UnattachedFile {
                field: "image url",
                value: SmolStr::new("attachment://chart.png"),
            }]
        );

        msg.attachments.push(Attachment {
            filename: SmolStr::new("chart.png"),
            url: None,
        });
        assert_eq!(validate_embed(&embed, Some(&msg)), None);

        // http urls are not cross-checked
        let embed = Embed {
            url: Some(SmolStr::new("https://example.com")),
            ..Default::default()
        };
        assert_eq!(validate_embed(&embed, Some(&Message::default())), None);
    }

    #[test]
    fn test_message_content_length() {
        let embed = Embed::default();
        let msg = Message {
            content: SmolStr::new("m".repeat(2001)),
            ..Default::default()
        };

        let errors = validate_embed(&embed, Some(&msg)).unwrap();
        assert_eq!(
            errors,
            vec![ValidationError::BodyTooLong {
                field: "message content",
                limit: MAX_MESSAGE_CONTENT,
                len: 2001,
            }]
        );

        // absent message context skips the check entirely
        assert_eq!(validate_embed(&embed, None), None);
    }
}
