//! `steer-sim` — the simulation runner.
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`builder`]  | `SimBuilder` — fail-fast scenario validation            |
//! | [`sim`]      | `Sim` — the step loop and collision resolver            |
//! | [`observer`] | `SimObserver` hooks and `NoopObserver`                  |
//!
//! A run is: validate the scenario with [`SimBuilder`], then [`Sim::run`]
//! with an observer.  The loop is single-threaded and sequential; all
//! nondeterminism comes from the seeded per-agent RNGs, so a (scenario,
//! seed) pair always replays identically.

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
