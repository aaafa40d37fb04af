//! Snapshot reconstruction: turning a commit identifier back into file
//! contents.
//!
//! The [`Reconstructor`] resolves an identifier through the commit index,
//! reads the record out of the commit log, and re-materializes every
//! referenced file's bytes from the content log. Two materialization modes
//! exist and only two:
//!
//! - **checkout** writes the files into the work dir, unconditionally
//!   overwriting whatever is there (no merge with working-tree state);
//! - **show** renders commit metadata and contents to a writer without
//!   touching disk.

pub mod error;
pub mod reconstruct;

pub use error::{CheckoutError, CheckoutResult};
pub use reconstruct::{MaterializedFile, Reconstructor, Snapshot};
