/*!

Joining an iterator of displayable items with a separator, which doesn't exist in the
stdlib for general iterators. (C.f. `Vec::join(…)`.)

*/

use std::fmt::Display;

/// Render every item of `iter` and join the results with `sep`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  let mut joined = String::new();
  for (i, item) in iter.enumerate() {
    if i > 0 {
      joined.push_str(sep);
    }
    joined.push_str(&item.to_string());
  }
  joined
}
