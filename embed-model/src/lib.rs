//! Plain record types for chat-platform message embeds.
//!
//! These are the wire shapes the platform accepts: no validation lives here.
//! The `embed-builder` crate layers validated, chainable construction on top.

#[macro_use]
extern crate serde;

pub use smol_str::SmolStr;
pub use timestamp::Timestamp;

#[cfg(feature = "thin-vec")]
pub use thin_vec::ThinVec as MaybeThinVec;

#[cfg(not(feature = "thin-vec"))]
pub type MaybeThinVec<T> = Vec<T>;

pub mod embed;
pub mod message;

pub use embed::*;
pub use message::*;

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_none_or_empty(value: &Option<SmolStr>) -> bool {
    match value {
        Some(ref value) => value.is_empty(),
        None => true,
    }
}
