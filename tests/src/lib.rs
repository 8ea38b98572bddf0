//! End-to-end tests for `rimdiff`: real files on disk, a scripted resolver
//! and the full extraction → resolution → reconciliation → report path.

#![cfg(test)]

mod reconciliation;
mod util;
