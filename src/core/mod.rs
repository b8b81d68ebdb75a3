/*!

Engine internals: traversal machinery, sentinel symbols, substitutions, and errors. The
public pieces are re-exported through the `api` module.

*/

pub mod error;
pub mod net_symbol;
pub mod substitution;
pub mod traversal;
pub mod traverser;

use smallvec::SmallVec;

/// A position in a term: the sequence of child indices leading from the root to a
/// subterm. The empty path is the root itself; `[0, 1]` is the first child's second
/// child.
pub type Path = SmallVec<[u32; 8]>;
