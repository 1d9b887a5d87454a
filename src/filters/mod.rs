//! Noise suppression for commit windows.
//!
//! A pure, infallible pass that removes commits judged uninformative for
//! summarization: generated merge messages, known automation authors, and
//! repeated message first lines. Survivors keep their input order, so the
//! window stays newest-first.

pub mod noise;

pub use noise::NoiseFilter;
