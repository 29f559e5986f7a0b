#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)]

//! Core library for prdraft.
//!
//! The engine operates on a single text buffer: a PR description
//! template made of blank-line-delimited sections whose first line is a
//! bold-wrapped heading (`**Summary**`). Every operation is a pure
//! function over its inputs; the caller holds the current document and
//! passes it back on each call. Expected abnormal conditions (missing
//! section, empty line, nothing to trim) are representable in return
//! values, so nothing in here panics or errors for them.

pub mod config;
pub mod heading;
pub mod placeholder;
pub mod section;
pub mod template;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
