//! # Introduction
//!
//! Analogize explains data structures through analogies drawn from a personal
//! interest. Pick an interest (Dance, Music, ...) and a concept (Stack, Graph, ...)
//! and get a flavored analogy, the key steps, and a short code snippet. Stacks and
//! queues also come with a live sequence you can push to and pop from.
//!
//! ## Layers
//!
//! ```text
//! catalog → explain ─┐
//!         → demo ────┴→ session → ui
//! ```
//!
//! 1. [`catalog`] — the closed [`catalog::Interest`] and [`catalog::Concept`] sets
//!    and the per-interest [`catalog::Flavor`] nouns.
//! 2. [`explain`] — [`explain::resolve`], a pure lookup from a pair to an
//!    [`explain::Explanation`].
//! 3. [`demo`] — the stack-like and queue-like [`demo::BoundedSequence`]s.
//! 4. [`session`] — selection rules tying the above together.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//! 6. [`cli`] and [`logging`] — argument parsing and file-backed tracing.

pub mod catalog;
pub mod cli;
pub mod demo;
pub mod explain;
pub mod logging;
pub mod session;
pub mod ui;
