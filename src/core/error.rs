/*!

Errors surfaced by pattern set construction and insertion. Match failure is not an error:
an empty iterator, an empty vector, or `None` report it, depending on the entry point.

*/

use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum MatchError {
  /// A pattern built against one context was given to a pattern set built against
  /// another. The set is left unchanged.
  #[error("all patterns in a pattern set must share the set's context")]
  ContextMismatch,
}
