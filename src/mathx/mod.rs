//! Gameplay math used across plugins.
//!
//! Everything in here is a pure function of its inputs: no resources, no
//! queries, no frame state. Plugins stay thin by pushing formula work here.

pub mod anchor;
pub mod color;
pub mod lob;
pub mod side;

#[cfg(test)]
mod tests;
