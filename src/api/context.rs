/*!

The abstraction over a term representation. The engine never looks inside a term
directly; everything it does is phrased in terms of the observer operations below, so
s-expression tuples, CAS expression nodes, and task graphs all plug in the same way.

Contexts are values, not singletons. Identity decides whether two patterns share a
context: patterns and pattern sets hold their context behind an `Arc`, and mixing
contexts is rejected even when the two values are structurally identical.

*/

use std::{
  fmt::Debug,
  hash::Hash
};

use crate::core::{
  substitution::Substitution,
  traversal::{Preorder, PreorderWithArity, PreorderWithPath},
  traverser::Traverser,
};

/// The observer operations a term representation must supply. All four must be pure:
/// deterministic and side-effect free.
pub trait TermContext: Sized {
  /// The (opaque) term type. Clones should be cheap enough to hand out per binding;
  /// representations with expensive deep clones can wrap subtrees in `Arc`.
  type Term: Clone + PartialEq + Debug;

  /// The constructor label of a term. Heads key the edge maps of discrimination nets
  /// and matching automata, so they must be hashable; terms themselves need not be.
  type Head: Clone + Eq + Hash + Debug;

  /// The constructor label of `t`. For a leaf this may identify the leaf itself.
  fn head(&self, t: &Self::Term) -> Self::Head;

  /// The ordered direct subterms of `t`; empty for a leaf.
  fn children<'t>(&self, t: &'t Self::Term) -> &'t [Self::Term];

  /// Construct a term with the given head and children. For non-leaf `t`,
  /// `rebuild(head(t), children(t))` must reproduce a term equal to `t`.
  fn rebuild(&self, head: Self::Head, children: Vec<Self::Term>) -> Self::Term;

  /// `t` with whole-subterm substitutions applied. The engine surfaces this to callers
  /// (a match's substitution maps the pattern back onto the matched term) but does not
  /// use it internally. The default is the natural whole-subterm substitution.
  fn substitute(&self, t: &Self::Term, subs: &Substitution<Self>) -> Self::Term {
    if let Some(replacement) = subs.get(t) {
      return replacement.clone();
    }
    let children = self.children(t);
    if children.is_empty() {
      return t.clone();
    }
    let rebuilt = children.iter().map(|child| self.substitute(child, subs)).collect();
    self.rebuild(self.head(t), rebuilt)
  }

  // region Derived observers

  /// The `i`th direct subterm of `t`.
  fn child<'t>(&self, t: &'t Self::Term, i: usize) -> Option<&'t Self::Term> {
    self.children(t).get(i)
  }

  /// The subterm of `t` at a positional path, or `None` when the path leaves the term.
  fn subterm_at<'t>(&self, t: &'t Self::Term, path: &[u32]) -> Option<&'t Self::Term> {
    let mut current = t;
    for &i in path {
      current = self.child(current, i as usize)?;
    }
    Some(current)
  }

  // endregion

  // region Traversals

  /// Lazy preorder walk over `t`.
  fn traverse<'c, 't>(&'c self, t: &'t Self::Term) -> Preorder<'c, 't, Self> {
    Preorder::new(self, t)
  }

  /// Preorder walk yielding each subterm with its positional path.
  fn traverse_with_path<'c, 't>(&'c self, t: &'t Self::Term) -> PreorderWithPath<'c, 't, Self> {
    PreorderWithPath::new(self, t)
  }

  /// Preorder walk yielding each subterm with its arity.
  fn traverse_with_arity<'c, 't>(&'c self, t: &'t Self::Term) -> PreorderWithArity<'c, 't, Self> {
    PreorderWithArity::new(self, t)
  }

  /// Stack based copyable walk, for matchers that snapshot choice points.
  fn traverser<'c, 't>(&'c self, t: &'t Self::Term) -> Traverser<'c, 't, Self> {
    Traverser::new(self, t)
  }

  // endregion
}
