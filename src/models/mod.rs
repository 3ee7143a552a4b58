//! Domain models for the comment board.
//!
//! There is a single entity, [`Comment`], held in an append-only log for the
//! lifetime of the process. [`NewComment`] is the submission input accepted by
//! both the vulnerable and the safe board.

mod comment;

pub use comment::*;
