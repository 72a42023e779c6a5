//! Fluent, validating builders for chat-platform message embeds.
//!
//! Each builder wraps one plain record from [`embed-model`](embed) and
//! enforces the platform's documented limits as values are set. Setters
//! fail silently: invalid input leaves the record untouched and records a
//! descriptive [`ValidationError`] instead of panicking or returning early,
//! so a caller sees every problem at once rather than stopping at the
//! first. The terminal [`finalize`](EmbedBuilder::finalize) hands back the
//! plain record plus anything that went wrong:
//!
//! ```
//! use embed_builder::{EmbedBuilder, FieldBuilder, FooterBuilder};
//!
//! let (embed, errors) = EmbedBuilder::new()
//!     .title("Build finished")
//!     .color(0x00FF00)
//!     .current_timestamp()
//!     .field(FieldBuilder::new().name("duration").value("42s").inline(true))
//!     .footer(FooterBuilder::new().text("ci pipeline"))
//!     .finalize();
//!
//! assert!(errors.is_none());
//! assert_eq!(embed.fields.len(), 1);
//! ```
//!
//! An error list is `None` exactly when no violation occurred since the
//! last finalize; it is never present-but-empty.

pub mod error;
pub mod validate;

mod author;
mod embed_builder;
mod field;
mod footer;
mod image;
mod provider;
mod thumbnail;
mod video;

pub use error::{ErrorList, ValidationError};
pub use validate::validate_embed;

pub use author::AuthorBuilder;
pub use embed_builder::EmbedBuilder;
pub use field::FieldBuilder;
pub use footer::FooterBuilder;
pub use image::ImageBuilder;
pub use provider::ProviderBuilder;
pub use thumbnail::ThumbnailBuilder;
pub use video::VideoBuilder;

// the records a finalized builder hands back
pub use embed::{
    Attachment, Embed, EmbedAuthor, EmbedField, EmbedFooter, EmbedImage, EmbedProvider,
    EmbedThumbnail, EmbedType, EmbedVideo, Message, SmolStr, Timestamp,
};
