use embed::{EmbedField, SmolStr};

use crate::error::{self, ErrorList, ValidationError};
use crate::validate::{text_len, FIELD_VALUE_LIMIT, SHORT_TEXT_LIMIT};

/// Chainable, validating wrapper around [`EmbedField`].
///
/// Field names and values must both be non-empty once the field is sent,
/// so the setters reject empty strings outright.
#[derive(Default, Debug, Clone)]
pub struct FieldBuilder {
    field: EmbedField,
    errors: Option<ErrorList>,
}

impl FieldBuilder {
    /// Creates an empty field with no accumulated errors.
    pub fn new() -> FieldBuilder {
        FieldBuilder::default()
    }

    /// Field name, 1–256 characters.
    pub fn name(mut self, name: impl Into<SmolStr>) -> Self {
        let name = name.into();
        let len = text_len(&name);

        if len > SHORT_TEXT_LIMIT {
            error::push(
                &mut self.errors,
                ValidationError::LabelTooLong {
                    field: "field name",
                    limit: SHORT_TEXT_LIMIT,
                    len,
                    value: name,
                },
            );
        } else if name.is_empty() {
            error::push(&mut self.errors, ValidationError::Empty { field: "field name" });
        } else {
            self.field.name = name;
        }
        self
    }

    /// Field value, 1–1024 characters.
    pub fn value(mut self, value: impl Into<SmolStr>) -> Self {
        let value = value.into();
        let len = text_len(&value);

        if len > FIELD_VALUE_LIMIT {
            error::push(
                &mut self.errors,
                ValidationError::BodyTooLong {
                    field: "field value",
                    limit: FIELD_VALUE_LIMIT,
                    len,
                },
            );
        } else if value.is_empty() {
            error::push(&mut self.errors, ValidationError::Empty { field: "field value" });
        } else {
            self.field.value = value;
        }
        self
    }

    /// Whether the field renders inline; never fails.
    pub fn inline(mut self, inline: bool) -> Self {
        self.field.inline = inline;
        self
    }

    /// Hands back the plain record and everything that went wrong since the
    /// last finalize, resetting the builder.
    pub fn finalize(&mut self) -> (EmbedField, Option<ErrorList>) {
        (core::mem::take(&mut self.field), self.errors.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_chain() {
        let (field, errors) = FieldBuilder::new().name("status").value("ok").inline(true).finalize();

        assert!(errors.is_none());
        assert_eq!(field.name, "status");
        assert_eq!(field.value, "ok");
        assert!(field.inline);
    }

    #[test]
    fn test_empty_name_rejected() {
        let (field, errors) = FieldBuilder::new().name("").value("ok").finalize();

        // name stays unset, value still lands
        assert_eq!(field.name, "");
        assert_eq!(field.value, "ok");
        assert_eq!(
            errors,
            Some(vec![ValidationError::Empty { field: "field name" }])
        );
    }

    #[test]
    fn test_limits() {
        let (field, errors) = FieldBuilder::new()
            .name("n".repeat(257))
            .value("v".repeat(1025))
            .finalize();

        assert_eq!(field, EmbedField::default());

        let errors = errors.unwrap();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ValidationError::LabelTooLong { field: "field name", limit: 256, len: 257, .. }
        ));
        assert_eq!(
            errors[1],
            ValidationError::BodyTooLong {
                field: "field value",
                limit: 1024,
                len: 1025,
            }
        );
    }

    #[test]
    fn test_boundary_lengths_accepted() {
        let (field, errors) = FieldBuilder::new()
            .name("n".repeat(256))
            .value("v".repeat(1024))
            .finalize();

        assert!(errors.is_none());
        assert_eq!(text_len(&field.name), 256);
        assert_eq!(text_len(&field.value), 1024);
    }
}
