//! Pure data structures: the stored records, their raw payloads and validated fields.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
