/*!

Lazy preorder walks over a term. Three variants exist because the consumers need
different per-node data:

 - [`Preorder`] yields each subterm; discrimination net insertion consumes this.
 - [`PreorderWithPath`] yields each subterm with its positional path; pattern
   construction and the deterministic matcher consume this.
 - [`PreorderWithArity`] yields each subterm with its arity.

All three support single-shot `skip()`: calling it between two emissions omits the
subtree rooted at the node just emitted, and the request is cleared as soon as it is
honored. For a walk that can be snapshotted for backtracking, see
[`Traverser`](crate::core::traverser::Traverser).

*/

use crate::api::context::TermContext;

use super::Path;

/// Preorder walk yielding each subterm.
pub struct Preorder<'c, 't, C: TermContext> {
  context: &'c C,
  /// The node emitted last, whose children are scheduled on the next advance.
  pending: Option<&'t C::Term>,
  stack:   Vec<&'t C::Term>,
  skip_requested: bool,
}

impl<'c, 't, C: TermContext> Preorder<'c, 't, C> {
  pub fn new(context: &'c C, term: &'t C::Term) -> Self {
    Preorder {
      context,
      pending: None,
      stack: vec![term],
      skip_requested: false,
    }
  }

  /// Omit the subtree rooted at the node just emitted. Single-shot.
  pub fn skip(&mut self) {
    self.skip_requested = true;
  }
}

impl<'c, 't, C: TermContext> Iterator for Preorder<'c, 't, C> {
  type Item = &'t C::Term;

  fn next(&mut self) -> Option<&'t C::Term> {
    if let Some(node) = self.pending.take() {
      if self.skip_requested {
        self.skip_requested = false;
      } else {
        // Push right-to-left so the leftmost child is popped first.
        for child in self.context.children(node).iter().rev() {
          self.stack.push(child);
        }
      }
    }
    let node = self.stack.pop()?;
    self.pending = Some(node);
    Some(node)
  }
}

/// Preorder walk yielding each subterm together with its positional path from the root.
pub struct PreorderWithPath<'c, 't, C: TermContext> {
  context: &'c C,
  pending: Option<(&'t C::Term, Path)>,
  stack:   Vec<(&'t C::Term, Path)>,
  skip_requested: bool,
}

impl<'c, 't, C: TermContext> PreorderWithPath<'c, 't, C> {
  pub fn new(context: &'c C, term: &'t C::Term) -> Self {
    PreorderWithPath {
      context,
      pending: None,
      stack: vec![(term, Path::new())],
      skip_requested: false,
    }
  }

  /// Omit the subtree rooted at the node just emitted. Single-shot.
  pub fn skip(&mut self) {
    self.skip_requested = true;
  }
}

impl<'c, 't, C: TermContext> Iterator for PreorderWithPath<'c, 't, C> {
  type Item = (&'t C::Term, Path);

  fn next(&mut self) -> Option<(&'t C::Term, Path)> {
    if let Some((node, path)) = self.pending.take() {
      if self.skip_requested {
        self.skip_requested = false;
      } else {
        for (i, child) in self.context.children(node).iter().enumerate().rev() {
          let mut child_path = path.clone();
          child_path.push(i as u32);
          self.stack.push((child, child_path));
        }
      }
    }
    let (node, path) = self.stack.pop()?;
    self.pending = Some((node, path.clone()));
    Some((node, path))
  }
}

/// Preorder walk yielding each subterm together with its arity.
pub struct PreorderWithArity<'c, 't, C: TermContext> {
  inner: Preorder<'c, 't, C>,
}

impl<'c, 't, C: TermContext> PreorderWithArity<'c, 't, C> {
  pub fn new(context: &'c C, term: &'t C::Term) -> Self {
    PreorderWithArity { inner: Preorder::new(context, term) }
  }

  /// Omit the subtree rooted at the node just emitted. Single-shot.
  pub fn skip(&mut self) {
    Preorder::skip(&mut self.inner);
  }
}

impl<'c, 't, C: TermContext> Iterator for PreorderWithArity<'c, 't, C> {
  type Item = (&'t C::Term, usize);

  fn next(&mut self) -> Option<(&'t C::Term, usize)> {
    let node = self.inner.next()?;
    Some((node, self.inner.context.children(node).len()))
  }
}
