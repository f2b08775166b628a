//! Finding audiobooks on disk.
//!
//! `classify` decides whether a directory is an audiobook branch and lists
//! its chapters; `walk` descends a tree and hands every branch to a handler.

mod branch;
mod walk;

pub use branch::{Branch, classify};
pub use walk::walk;

#[cfg(test)]
mod tests;
