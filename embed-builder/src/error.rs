use smol_str::SmolStr;

/// Errors accumulated by a builder since its last finalize.
///
/// Builders store an `Option<ErrorList>`: `None` means no violation has
/// occurred, `Some` is always non-empty. The two are never conflated.
pub type ErrorList = Vec<ValidationError>;

/// One constraint violation, recorded by a silent-fail setter or by
/// whole-embed validation. Rendered messages name the offending property,
/// the value, and the nature of the violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} '{value}' does not start with \"http://\" | \"https://\" | \"attachment://\"")]
    InvalidUrl { field: &'static str, value: SmolStr },

    /// Over-limit text on a short field; the value is short enough to echo.
    #[error("{field} exceeds {limit} characters: length = {len} | '{value}'")]
    LabelTooLong {
        field: &'static str,
        limit: usize,
        len: usize,
        value: SmolStr,
    },

    /// Over-limit text on a long-form field; the value is elided.
    #[error("{field} exceeds {limit} characters: length = {len}")]
    BodyTooLong {
        field: &'static str,
        limit: usize,
        len: usize,
    },

    #[error("{field} should not be empty if set")]
    Empty { field: &'static str },

    #[error("{field} '{value}' is not between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("{field} '{value}' is not between 0 and infinity")]
    NotPositive { field: &'static str, value: i32 },

    #[error("{field} height '{height}' or {field} width '{width}' is less than or equal to 0")]
    DimensionsNotPositive {
        field: &'static str,
        height: i32,
        width: i32,
    },

    #[error("embed type '{value}' is not one of \"rich\" | \"image\" | \"video\" | \"gifv\" | \"link\" | \"article\"")]
    InvalidType { value: SmolStr },

    #[error("adding field '{name}' would cause field count to exceed {limit}")]
    FieldLimit { name: SmolStr, limit: usize },

    #[error("embed exceeds {limit} total characters: length = {len}")]
    TotalTextOverLimit { limit: usize, len: usize },

    #[error("{field} '{value}' does not reference a file attached to the message")]
    UnattachedFile { field: &'static str, value: SmolStr },
}

/// Append one error, allocating the list on first use.
pub(crate) fn push(errors: &mut Option<ErrorList>, err: ValidationError) {
    errors.get_or_insert_with(ErrorList::new).push(err);
}

/// Merge a finalized sub-builder's errors into a parent's list, in order.
pub(crate) fn merge(errors: &mut Option<ErrorList>, more: Option<ErrorList>) {
    if let Some(more) = more {
        errors.get_or_insert_with(ErrorList::new).extend(more);
    }
}
