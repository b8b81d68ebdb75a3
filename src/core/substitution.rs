/*!

Substitutions map pattern variables to the subterms they matched, plus the shared
post-pass both matching strategies run to validate non-linear candidates. Lookup is by
equality rather than hashing: terms are not required to be hashable, only heads are, and
a pattern rarely holds more than a handful of variables.

*/

use std::collections::HashMap;
use std::fmt::{Debug, Formatter};

use crate::api::{context::TermContext, pattern::Pattern};

use super::Path;

/// A finite map from variables to subterms. Produced per successful match and never
/// mutated after being yielded.
pub struct Substitution<C: TermContext> {
  bindings: Vec<(C::Term, C::Term)>,
}

impl<C: TermContext> Substitution<C> {
  pub fn new() -> Self {
    Substitution { bindings: Vec::new() }
  }

  /// Record a binding. The first binding for a variable wins on lookup; callers that
  /// need agreement between repeated bindings check before inserting.
  pub fn insert(&mut self, variable: C::Term, term: C::Term) {
    self.bindings.push((variable, term));
  }

  /// The subterm bound to `variable`, if any.
  pub fn get(&self, variable: &C::Term) -> Option<&C::Term> {
    self.bindings
        .iter()
        .find(|(bound, _)| bound == variable)
        .map(|(_, term)| term)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&C::Term, &C::Term)> {
    self.bindings.iter().map(|(variable, term)| (variable, term))
  }

  #[inline(always)]
  pub fn len(&self) -> usize {
    self.bindings.len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.bindings.is_empty()
  }
}

impl<C: TermContext> Default for Substitution<C> {
  fn default() -> Self {
    Substitution::new()
  }
}

impl<C: TermContext> Clone for Substitution<C> {
  fn clone(&self) -> Self {
    Substitution { bindings: self.bindings.clone() }
  }
}

impl<C: TermContext> Debug for Substitution<C> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut map = f.debug_map();
    for (variable, term) in self.iter() {
      map.entry(variable, term);
    }
    map.finish()
  }
}

/// Equality is as a finite map: the same variables bound to the same subterms,
/// regardless of binding order.
impl<C: TermContext> PartialEq for Substitution<C> {
  fn eq(&self, other: &Self) -> bool {
    self.len() == other.len()
      && self.iter().all(|(variable, term)| other.get(variable) == Some(term))
  }
}

/// Validate a candidate produced by the discrimination net and build its substitution.
///
/// `bindings` holds the subterms matched at wildcard edges, in traversal order; zipping
/// it against the pattern's variable occurrence list pairs each subterm with its
/// variable. A repeated variable must have bound equal subterms or the candidate is
/// rejected (`None`).
pub(crate) fn bind_ordered<C: TermContext>(
  pattern:  &Pattern<C>,
  bindings: &[&C::Term],
) -> Option<Substitution<C>> {
  let var_list = pattern.var_list();
  assert_eq!(
    var_list.len(),
    bindings.len(),
    "variable occurrence list and collected bindings disagree in length; \
     this is a bug in discrimination net construction"
  );

  let mut subs = Substitution::new();
  if pattern.is_linear() {
    // No variable repeats, so no agreement check is needed.
    for (variable, &term) in var_list.iter().zip(bindings) {
      subs.insert(variable.clone(), term.clone());
    }
    return Some(subs);
  }

  for (variable, &term) in var_list.iter().zip(bindings) {
    if let Some(previous) = subs.get(variable) {
      if previous != term {
        return None;
      }
      continue;
    }
    subs.insert(variable.clone(), term.clone());
  }
  Some(subs)
}

/// Validate a candidate produced by the matching automaton and build its substitution.
///
/// The automaton cached the subterm at every position where a wildcard edge was
/// available; each variable's occurrence paths index into that cache. All occurrences
/// must have cached equal subterms or the candidate is rejected (`None`).
pub(crate) fn bind_paths<'t, C: TermContext>(
  pattern: &Pattern<C>,
  cache:   &HashMap<Path, &'t C::Term>,
) -> Option<Substitution<C>> {
  let mut subs = Substitution::new();
  for (variable, paths) in pattern.path_lookup() {
    let Some(first) = cache.get(&paths[0]) else {
      panic!(
        "no subterm cached at variable position {:?}; \
         this is a bug in matching automaton construction",
        paths[0]
      );
    };
    for path in &paths[1..] {
      let Some(other) = cache.get(path) else {
        panic!(
          "no subterm cached at variable position {:?}; \
           this is a bug in matching automaton construction",
          path
        );
      };
      if other != first {
        return None;
      }
    }
    subs.insert(variable.clone(), (*first).clone());
  }
  Some(subs)
}
