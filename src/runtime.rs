//! Runtime for executing a joke bot session
//!
//! Node logic (menus, writer, critic) runs here against a `Console` and the
//! resolved model clients; the state machine decides what runs next.

pub mod cycle;
mod executor;
pub mod menu;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use executor::JokeBot;
pub use traits::*;
