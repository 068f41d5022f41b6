//! Path translation between what a client sees and what storage holds
//!
//! - **[`Segments`]**: total parsing of "/" separated client input
//! - **[`Jail`]**: the containment boundary and the visible root it exposes
//! - **[`PathTranslator`]**: virtual → physical and physical → display
//! - **[`PhysicalPath`]** / **[`DisplayPath`]**: the two output forms
//!
//! ## Literal ".."
//!
//! Parent segments are passed through untouched. Containment is decided
//! by where a path is anchored (home, visible root), not by collapsing
//! traversal, so the backing store must still refuse to follow ".."
//! out of the jail if it resolves it.

mod jail;
mod resolved;
mod segments;
mod translator;

pub use jail::{check_containment, Jail};
pub use resolved::{DisplayPath, PhysicalPath};
pub use segments::Segments;
pub use translator::PathTranslator;
