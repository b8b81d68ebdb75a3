/*!

Logging with a global verbosity threshold on top of the `tracing` crate.

Messages are logged at a *level* (critical, error, warning, info, debug, trace) and at a
numeric *threshold*. The global logging threshold is a single verbosity knob shared by
all levels: a message is emitted only when its threshold is at most the global value, so
a message with threshold 0 is always emitted. Higher thresholds mean chattier messages.

```
use termnet::log::{info, debug, set_global_logging_threshold};

set_global_logging_threshold(3);
let value = 42;
info!(2, "processing value: {}", value); // Emitted: 2 <= 3
debug!(4, "rarely interesting: {}", value); // Not emitted: 4 > 3
debug!("always emitted"); // Omitting the threshold means threshold 0
```

The macros initialize the subscriber on first use; no explicit setup is required. The
global threshold is an atomic, so adjusting it is thread safe.

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::{
    atomic::{AtomicU8, Ordering},
    LazyLock
  };

use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::ThresholdFieldFormatter;
pub use macros::*;

/// Used for implicit initialization.
static INIT_LOGGER: LazyLock<()> = LazyLock::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(ThresholdFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stdout),
      );

  tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");
});

/// This does not need to be called directly. Initializes the logging system.
pub fn init_logger() {
  LazyLock::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3); // Default threshold

/// Sets the global threshold. Messages logged at a greater threshold are not emitted.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_logging() {
    let foo = 42;

    set_global_logging_threshold(3);

    info!(2, "Processing value: {}", foo); // Emitted
    debug!(4, "NOT emitted: {:?}", foo);   // Filtered out
    warning!("An unexpected condition occurred."); // Default threshold 0, emitted
    error!(5, "NOT emitted: {}", foo);     // Filtered out
    critical!(1, "Critical failure: {}", foo); // Emitted

    set_global_logging_threshold(5);
    info!(5, "Emitted after raising the threshold.");
  }
}
