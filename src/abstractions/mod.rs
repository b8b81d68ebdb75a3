/*!

Types/type aliases that abstract over the implementing backing type.

The `IString` type is the motivating example: an interned string type that several
external crates could provide. This module redirects to whichever implementation is
chosen. To use the [`string_cache` crate](https://crates.io/crates/string_cache), we just
define `IString` as an alias for `string_cache::DefaultAtom`:

```ignore
pub use string_cache::DefaultAtom as IString;
```

Swapping in a different interning crate is a one-line change here and nowhere else.

For infrastructure with genuinely different backing implementations we define a thin
abstraction layer instead. The `log` module is one: its (crate) public interface is the
level macros plus `set_global_logging_threshold()`/`get_global_logging_threshold()`,
while the `tracing`-based backing implementation stays private to the module.

*/

mod string_join;

// Logging
pub mod log;

// Interned string. `DefaultAtom` is backed by a global cache that can be used across
// threads.
pub use string_cache::DefaultAtom as IString;

// Join sequences of displayable things with a separator
pub(crate) use string_join::join_string;
