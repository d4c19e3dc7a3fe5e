//! Runnable demos live under `examples/`; this crate has no library API.
