//! # rimdiff core
//!
//! Extraction, expansion, reverse resolution and reconciliation of the
//! Radmind and InterMapper address lists, plus the readers and writers
//! around them.
//!
//! * [`extract`] and [`expand`] turn raw text into addresses.
//! * [`resolver`] maps addresses to hostnames.
//! * [`reconcile`] orders the lists and computes the differences.
//! * [`diff`] wires the above into one run.
//! * [`sources`], [`report`] and [`sink`] deal with input and output.

pub mod diff;
pub mod expand;
pub mod extract;
pub mod reconcile;
pub mod report;
pub mod resolver;
pub mod sink;
pub mod sources;
