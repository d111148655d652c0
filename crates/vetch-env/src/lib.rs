//! # vetch-env
//!
//! Typed access to environment-variable configuration.
//!
//! Reads go through a caller-declared closed key set: accessors are generic
//! over a key enum (see [`env_keys!`]), so a variable name that was never
//! declared fails to compile instead of failing in production.
//!
//! Two accessors share the same coercion logic and differ only in presence
//! policy:
//! - [`Env`] (strict): a usable typed value or a clear failure; the
//!   default entry point.
//! - [`LooseEnv`] (permissive): absence is `None`; reachable from a strict
//!   accessor via [`Env::loose`] for call sites that want to decide for
//!   themselves.
//!
//! ## Example
//!
//! ```
//! use vetch_env::{env_keys, Env};
//!
//! env_keys! {
//!     /// Variables this service reads at startup.
//!     enum ServiceVar { PORT, DEBUG, SAMPLE_RATE }
//! }
//!
//! let env: Env<ServiceVar> = Env::new(
//!     [("PORT", "8080"), ("DEBUG", "on")].into_iter().collect(),
//! );
//!
//! assert_eq!(env.int(ServiceVar::PORT)?, 8080);
//! assert_eq!(env.bool(ServiceVar::DEBUG)?, true);
//! assert_eq!(env.float_or(ServiceVar::SAMPLE_RATE, 1.0)?, 1.0);
//! assert!(env.loose().str(ServiceVar::SAMPLE_RATE).is_none());
//! # Ok::<(), vetch_env::VetchError>(())
//! ```

pub mod loose;
pub mod snapshot;
pub mod strict;

// Re-export main types
pub use loose::LooseEnv;
pub use snapshot::Snapshot;
pub use strict::Env;

// The key contract and error taxonomy live in vetch-core.
pub use vetch_core::env_keys;
pub use vetch_core::{EnvKey, ValueKind, VetchError, VetchResult};
