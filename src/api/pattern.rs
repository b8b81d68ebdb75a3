/*!

A `Pattern` is a term together with the subterms designated as its variables, plus the
variable bookkeeping both matching strategies consume. Construction walks the pattern
once; after that a pattern is immutable and may be shared freely.

*/

use std::{
  fmt::{Debug, Formatter},
  sync::Arc
};

use enumflags2::{bitflags, BitFlags};

use crate::core::{traversal::PreorderWithPath, Path};

use super::context::TermContext;

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum PatternAttribute {
  /// The pattern contains no variables.
  Ground,

  /// No variable occurs more than once, so bindings never need an agreement check.
  Linear,
}

pub type PatternAttributes = BitFlags<PatternAttribute, u8>;

pub struct Pattern<C: TermContext> {
  context:   Arc<C>,
  term:      C::Term,
  variables: Vec<C::Term>,

  /// The variables in the order they occur under preorder traversal of the pattern,
  /// duplicates preserved. Consumed by the discrimination net.
  var_list: Vec<C::Term>,

  /// For each variable (in first-occurrence order), every positional path at which it
  /// occurs. Consumed by the matching automaton.
  path_lookup: Vec<(C::Term, Vec<Path>)>,

  attributes: PatternAttributes,
}

impl<C: TermContext> Pattern<C> {
  /// Build a pattern over `term`. Every subterm equal to an entry of `variables` acts
  /// as a variable and matches any subterm.
  pub fn new(context: &Arc<C>, term: C::Term, variables: impl Into<Vec<C::Term>>) -> Self {
    let variables = variables.into();
    let mut var_list: Vec<C::Term> = Vec::new();
    let mut path_lookup: Vec<(C::Term, Vec<Path>)> = Vec::new();

    {
      let mut walk = context.traverse_with_path(&term);
      while let Some((subterm, path)) = walk.next() {
        if !variables.contains(subterm) {
          continue;
        }
        var_list.push(subterm.clone());
        if let Some(entry) = path_lookup.iter_mut().find(|entry| entry.0 == *subterm) {
          entry.1.push(path);
        } else {
          path_lookup.push((subterm.clone(), vec![path]));
        }
        // A variable is atomic: never record occurrences inside one.
        PreorderWithPath::skip(&mut walk);
      }
    }

    let mut attributes = PatternAttributes::default();
    if var_list.is_empty() {
      attributes.insert(PatternAttribute::Ground);
    }
    if path_lookup.iter().all(|(_, paths)| paths.len() == 1) {
      attributes.insert(PatternAttribute::Linear);
    }

    Pattern {
      context: Arc::clone(context),
      term,
      variables,
      var_list,
      path_lookup,
      attributes,
    }
  }

  // region Accessors

  #[inline(always)]
  pub fn context(&self) -> &Arc<C> {
    &self.context
  }

  /// The raw pattern term.
  #[inline(always)]
  pub fn term(&self) -> &C::Term {
    &self.term
  }

  /// The declared variables.
  #[inline(always)]
  pub fn variables(&self) -> &[C::Term] {
    &self.variables
  }

  /// The variables in preorder-occurrence order, duplicates preserved.
  #[inline(always)]
  pub fn var_list(&self) -> &[C::Term] {
    &self.var_list
  }

  /// Each variable with every positional path at which it occurs.
  #[inline(always)]
  pub fn path_lookup(&self) -> &[(C::Term, Vec<Path>)] {
    &self.path_lookup
  }

  /// Does the pattern contain no variables?
  #[inline(always)]
  pub fn is_ground(&self) -> bool {
    self.attributes.contains(PatternAttribute::Ground)
  }

  /// Does every variable occur exactly once?
  #[inline(always)]
  pub fn is_linear(&self) -> bool {
    self.attributes.contains(PatternAttribute::Linear)
  }

  /// Is this subterm one of the pattern's declared variables?
  #[inline(always)]
  pub(crate) fn is_variable(&self, subterm: &C::Term) -> bool {
    self.variables.contains(subterm)
  }

  // endregion
}

impl<C: TermContext> Clone for Pattern<C> {
  fn clone(&self) -> Self {
    Pattern {
      context:     Arc::clone(&self.context),
      term:        self.term.clone(),
      variables:   self.variables.clone(),
      var_list:    self.var_list.clone(),
      path_lookup: self.path_lookup.clone(),
      attributes:  self.attributes,
    }
  }
}

impl<C: TermContext> Debug for Pattern<C> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Pattern")
     .field("term", &self.term)
     .field("variables", &self.variables)
     .finish()
  }
}

/// Patterns are equal when they were built against the same context from equal terms
/// with equal variable declarations.
impl<C: TermContext> PartialEq for Pattern<C> {
  fn eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.context, &other.context)
      && self.term == other.term
      && self.variables == other.variables
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use crate::api::built_in::sexpr::{app, int, sym, SexprContext};
  use crate::core::Path;

  use super::Pattern;

  fn path(indices: &[u32]) -> Path {
    Path::from_slice(indices)
  }

  fn abc() -> Vec<crate::api::built_in::sexpr::Sexpr> {
    vec![sym("a"), sym("b"), sym("c")]
  }

  #[test]
  fn variable_bookkeeping() {
    let context = Arc::new(SexprContext);

    let p = Pattern::new(&context, app("add", vec![sym("a"), sym("b")]), abc());
    assert_eq!(p.var_list(), &[sym("a"), sym("b")]);
    assert_eq!(p.path_lookup(), &[
      (sym("a"), vec![path(&[0])]),
      (sym("b"), vec![path(&[1])]),
    ]);
    assert!(p.is_linear());
    assert!(!p.is_ground());

    let p = Pattern::new(&context, app("add", vec![sym("a"), sym("a")]), abc());
    assert_eq!(p.var_list(), &[sym("a"), sym("a")]);
    assert_eq!(p.path_lookup(), &[
      (sym("a"), vec![path(&[0]), path(&[1])]),
    ]);
    assert!(!p.is_linear());

    let p = Pattern::new(
      &context,
      app("add", vec![app("double", vec![sym("a")]), sym("b")]),
      abc(),
    );
    assert_eq!(p.var_list(), &[sym("a"), sym("b")]);
    assert_eq!(p.path_lookup(), &[
      (sym("a"), vec![path(&[0, 0])]),
      (sym("b"), vec![path(&[1])]),
    ]);

    let p = Pattern::new(&context, app("add", vec![int(1), int(2)]), abc());
    assert!(p.var_list().is_empty());
    assert!(p.path_lookup().is_empty());
    assert!(p.is_ground());
    assert!(p.is_linear());
  }

  #[test]
  fn occurrence_counts_agree() {
    let context = Arc::new(SexprContext);
    let p = Pattern::new(
      &context,
      app("add", vec![sym("a"), app("inc", vec![sym("a"), sym("b")])]),
      abc(),
    );
    let total: usize = p.path_lookup().iter().map(|(_, paths)| paths.len()).sum();
    assert_eq!(p.var_list().len(), total);
  }
}
