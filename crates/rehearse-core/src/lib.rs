//! rehearse-core: rule-based scoring for interview practice answers.
//!
//! This crate turns a free-text answer plus a per-question rubric into a
//! multi-dimensional score with written feedback, estimates speaking
//! confidence from voice transcripts, and aggregates both across an
//! interview session. Scoring is deterministic and performs no I/O.

pub mod bank;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod model;
pub mod report;
pub mod scorer;
pub mod selection;
pub mod statistics;
pub mod text;
pub mod traits;
pub mod voice;
