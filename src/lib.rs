#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! auditqna — deduplicate, fill and print the audit question/answer file.
//!
//! Two binaries share this library: `audit-fill` (backup, dedupe, optional
//! interactive fill, save) and `audit-qna` (print the raw file).

pub mod cli;
pub mod commands;
pub mod fill;
pub mod store;
pub mod types;
