// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Emit a `tracing` event at the given level when the `tracing` feature is enabled.
///
/// Expands to nothing otherwise, so arguments must not have side effects.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    }};
}

pub(crate) use trace_event;
