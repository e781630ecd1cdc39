//! Text extraction and summarization pipeline.
//!
//! This crate turns uploaded document bytes into plain text and derives
//! naive summaries from previously extracted text:
//!
//! - [`detect()`] classifies a filename into a [`DocumentKind`] by extension.
//! - [`extract()`] dispatches to the matching format extractor (PDF, DOCX,
//!   plain text) and returns an [`ExtractedText`].
//! - [`summarize()`] produces a [`Summary`](doculens_core::models::Summary)
//!   by sentence truncation.
//!
//! Extraction is fail-soft: every extractor-level failure (unsupported
//! format, unreadable source, malformed content) collapses to
//! [`ExtractedText::NoText`] at the dispatcher boundary, so callers can
//! always persist a record regardless of extraction outcome. Summarization
//! rejection is the one caller-visible failure, see [`SummarizeError`].
//!
//! All functions are synchronous and operate on their own inputs; there is
//! no shared state between concurrent invocations.

pub mod detect;
pub mod extract;
pub mod summarize;

pub use detect::{detect, DocumentKind};
pub use extract::{extract, extract_path, ExtractedText};
pub use summarize::{summarize, SummarizeError, MAX_SUMMARY_SENTENCES, MIN_SOURCE_CHARS};
