//! NuGet registry probing.
//!
//! Checks whether a package version is served by the registry and polls
//! until it is.

pub mod poll;
pub mod probe;

#[cfg(test)]
pub(crate) mod testing;

pub use poll::{PollLoop, Sleeper, TokioSleeper, DEFAULT_DELAY};
pub use probe::{package_url, NuGetProbe, ResourceProbe, DEFAULT_REGISTRY_URL};
