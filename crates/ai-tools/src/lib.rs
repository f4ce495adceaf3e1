//! Tooling primitives for deterministic game AI.
//!
//! This crate is intentionally lightweight and engine-agnostic. Agents record
//! plain trace events here; rendering them (debug overlays, inspectors, logs) is
//! left to the host.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod trace;

pub use trace::{NullTraceSink, TraceEvent, TraceLog, TraceSink, Tracer, VecTraceSink};
