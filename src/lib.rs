//! Two-party hash-based commitment scheme.
//!
//! A committer binds itself to a private byte string without revealing it,
//! then later opens the commitment so the receiver can check the reveal
//! against the earlier digest. The commitment is `c = H(r || x)` for a
//! fresh random `r` of a fixed, agreed length; hiding follows from the
//! random-oracle heuristic and binding from collision resistance of `H`.
#[macro_use]
extern crate quick_error;

pub mod channels;
pub mod commitments;
pub mod protocols;
