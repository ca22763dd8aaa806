//! Classification of stored cache entries.
//!
//! Every key carries the compression and serialization markers of the
//! writer that produced it; [`detect`] turns those markers into a
//! [`FormatTag`] without touching the payload.

pub mod detect;
pub mod tag;

pub use detect::detect;
pub use tag::{Compression, FormatTag, Serialization};
