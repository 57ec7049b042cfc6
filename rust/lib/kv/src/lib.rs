//! Key-value persistence port.
//!
//! Small client-side preferences (theme flag, flagged quiz questions) are
//! written through [`KVStore`] so callers never touch a concrete storage
//! backend directly. [`RedbStore`] persists to disk, [`MemoryKV`] lives
//! for the process.

pub mod error;
pub mod memory;
pub mod redb;
pub mod traits;

pub use error::KVError;
pub use memory::MemoryKV;
pub use redb::RedbStore;
pub use traits::KVStore;
