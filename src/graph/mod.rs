//! Social graph subsystem.
//!
//! # Data Flow
//! ```text
//! data.users.users (decoded by source/)
//!     → types.rs (User, UserId, MutualPair)
//!     → mutual.rs (FollowGraph adjacency map)
//!     → HashSet<MutualPair> (unordered, deduplicated)
//!     → delivery/ payload
//! ```
//!
//! # Invariants
//! - A `MutualPair` always holds two distinct ids, smaller id first
//! - The detector never fails; `null` or missing follow lists decode as empty
//! - A user entry without an `id`, or with a non-integer follow id, is a
//!   decode error that fails the whole fetch
//! - Result order is unspecified; compare results as sets

pub mod mutual;
pub mod types;

pub use mutual::{find_mutual_pairs, FollowGraph};
pub use types::{MutualPair, User, UserId};
