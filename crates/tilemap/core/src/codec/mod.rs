//! Sparse grid snapshot codec.
//!
//! [`encode`] walks every registered grid and emits one record per occupied,
//! catalog-mapped cell. [`decode`] replays a document onto the registry,
//! clearing each mentioned grid first. Neither operation fails: anomalies are
//! collected in the returned [`EncodeReport`] / [`DecodeReport`].
mod decode;
mod encode;
mod report;

pub use decode::{decode, decode_grid};
pub use encode::{encode, encode_grid};
pub use report::{DecodeReport, EncodeReport};
