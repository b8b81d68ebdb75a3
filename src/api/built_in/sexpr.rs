/*!

An s-expression term implementation. A term is a function application over an interned
function name, a list, or an atomic leaf (integer, float, or symbol). Symbols double as
the usual choice of pattern variable.

The head of an application is its function name and the head of a list is the list
constructor itself, so `[1]` and `[1 2 3]` share a head and are told apart by arity. The
head of a leaf is the leaf, which is why atoms must be hashable: floats are wrapped in
`OrderedFloat` to give them total order and a hash.

*/

use std::fmt::{Display, Formatter};

use ordered_float::OrderedFloat;

use crate::abstractions::{join_string, IString};
use crate::api::context::TermContext;

/// An atomic leaf.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SexprAtom {
  Int(i64),
  Float(OrderedFloat<f64>),
  Symbol(IString),
}

/// A term: a function application, a list, or an atom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sexpr {
  Apply(IString, Vec<Sexpr>),
  List(Vec<Sexpr>),
  Atom(SexprAtom),
}

/// The constructor label of a term: the applied function's name, the list constructor,
/// or (for leaves) the atom itself.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SexprHead {
  Function(IString),
  List,
  Atom(SexprAtom),
}

// region Builder helpers

pub fn app(name: &str, args: Vec<Sexpr>) -> Sexpr {
  Sexpr::Apply(IString::from(name), args)
}

pub fn list(items: Vec<Sexpr>) -> Sexpr {
  Sexpr::List(items)
}

pub fn sym(name: &str) -> Sexpr {
  Sexpr::Atom(SexprAtom::Symbol(IString::from(name)))
}

pub fn int(value: i64) -> Sexpr {
  Sexpr::Atom(SexprAtom::Int(value))
}

pub fn float(value: f64) -> Sexpr {
  Sexpr::Atom(SexprAtom::Float(OrderedFloat(value)))
}

// endregion

/// The term context for [`Sexpr`].
#[derive(Debug, Default)]
pub struct SexprContext;

impl TermContext for SexprContext {
  type Term = Sexpr;
  type Head = SexprHead;

  fn head(&self, t: &Sexpr) -> SexprHead {
    match t {
      Sexpr::Apply(name, _) => SexprHead::Function(name.clone()),
      Sexpr::List(_)        => SexprHead::List,
      Sexpr::Atom(atom)     => SexprHead::Atom(atom.clone()),
    }
  }

  fn children<'t>(&self, t: &'t Sexpr) -> &'t [Sexpr] {
    match t {
      Sexpr::Apply(_, args) => args,
      Sexpr::List(items)    => items,
      Sexpr::Atom(_)        => &[],
    }
  }

  fn rebuild(&self, head: SexprHead, children: Vec<Sexpr>) -> Sexpr {
    match head {
      SexprHead::Function(name) => Sexpr::Apply(name, children),
      SexprHead::List           => Sexpr::List(children),
      SexprHead::Atom(atom)     => Sexpr::Atom(atom),
    }
  }
}

// region Display

impl Display for SexprAtom {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      SexprAtom::Int(value)    => write!(f, "{}", value),
      SexprAtom::Float(value)  => write!(f, "{}", value),
      SexprAtom::Symbol(name)  => write!(f, "{}", name),
    }
  }
}

impl Display for Sexpr {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Sexpr::Apply(name, args) if args.is_empty() => write!(f, "({})", name),
      Sexpr::Apply(name, args) => write!(f, "({} {})", name, join_string(args.iter(), " ")),
      Sexpr::List(items)       => write!(f, "[{}]", join_string(items.iter(), " ")),
      Sexpr::Atom(atom)        => write!(f, "{}", atom),
    }
  }
}

impl Display for SexprHead {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      SexprHead::Function(name) => write!(f, "{}", name),
      SexprHead::List           => write!(f, "list"),
      SexprHead::Atom(atom)     => write!(f, "{}", atom),
    }
  }
}

// endregion

#[cfg(test)]
mod tests {
  use crate::api::context::TermContext;
  use crate::core::substitution::Substitution;

  use super::*;

  #[test]
  fn heads() {
    let context = SexprContext;
    assert_eq!(
      context.head(&app("inc", vec![int(1)])),
      SexprHead::Function("inc".into())
    );
    assert_eq!(context.head(&list(vec![int(1), int(2)])), SexprHead::List);
    assert_eq!(context.head(&list(vec![])), SexprHead::List);
    assert_eq!(context.head(&int(7)), SexprHead::Atom(SexprAtom::Int(7)));
    assert_eq!(
      context.head(&sym("x")),
      SexprHead::Atom(SexprAtom::Symbol("x".into()))
    );
  }

  #[test]
  fn children() {
    let context = SexprContext;
    assert_eq!(context.children(&app("add", vec![int(1), int(2)])), &[int(1), int(2)]);
    assert_eq!(context.children(&list(vec![int(1)])), &[int(1)]);
    assert!(context.children(&int(1)).is_empty());
    assert!(context.children(&sym("x")).is_empty());
  }

  #[test]
  fn rebuild_inverts_observation() {
    let context = SexprContext;
    for term in [
      app("add", vec![app("inc", vec![int(1)]), int(2)]),
      list(vec![int(1), sym("x")]),
    ] {
      let rebuilt = context.rebuild(
        context.head(&term),
        context.children(&term).to_vec(),
      );
      assert_eq!(rebuilt, term);
    }
  }

  #[test]
  fn natural_substitution() {
    let context = SexprContext;
    let mut subs: Substitution<SexprContext> = Substitution::new();
    subs.insert(sym("x"), int(2));

    assert_eq!(
      context.substitute(&app("add", vec![app("add", vec![int(1), sym("x")])]), &subs),
      app("add", vec![app("add", vec![int(1), int(2)])])
    );
    assert_eq!(
      context.substitute(&app("add", vec![sym("x"), sym("x")]), &subs),
      app("add", vec![int(2), int(2)])
    );
    // Substitution is whole-subterm, so unbound leaves pass through.
    assert_eq!(context.substitute(&sym("y"), &subs), sym("y"));
  }

  #[test]
  fn path_indexing() {
    let context = SexprContext;
    let term = app("add", vec![
      app("add", vec![app("add", vec![app("add", vec![int(1), int(2)]), int(2)]), int(2)]),
      int(2),
    ]);
    assert_eq!(context.subterm_at(&term, &[]), Some(&term));
    assert_eq!(
      context.subterm_at(&term, &[0, 0]),
      Some(&app("add", vec![app("add", vec![int(1), int(2)]), int(2)]))
    );
    assert_eq!(context.subterm_at(&term, &[0, 0, 0, 1]), Some(&int(2)));
    assert_eq!(context.subterm_at(&term, &[5]), None);

    assert_eq!(context.child(&term, 1), Some(&int(2)));
    assert_eq!(context.child(&int(2), 0), None);
  }

  #[test]
  fn rendering() {
    assert_eq!(app("add", vec![int(1), sym("x")]).to_string(), "(add 1 x)");
    assert_eq!(list(vec![int(1), int(2)]).to_string(), "[1 2]");
    assert_eq!(app("nullary", vec![]).to_string(), "(nullary)");
    assert_eq!(float(2.5).to_string(), "2.5");
  }
}
