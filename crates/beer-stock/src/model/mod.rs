//! Pure data structures: the stored [`Beer`] record and its transfer shapes.

pub mod beer;
pub mod dto;

pub use beer::*;
pub use dto::*;
