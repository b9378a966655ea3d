//! Core library for prosemeter.
//!
//! Quantitative writing-quality metrics for natural-language text. Every
//! analyzer is a pure function of its input; [`analyze_document`] runs all of
//! them and returns one serializable [`DocumentAnalysis`].
//!
//! # Modules
//!
//! - [`analysis`] - Per-aspect analyzers, the report records, and the engine
//! - [`readability`] - Syllables, Flesch scores, reading time
//! - [`text`] - Word, sentence, and paragraph segmentation
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use prosemeter_core::analyze_document;
//!
//! let analysis = analyze_document("The cat sat. The cat ran.");
//! assert_eq!(analysis.statistics.word_count, 6);
//! println!("overall: {}", analysis.overall_score);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod markdown;
pub mod math;
pub mod readability;
pub mod text;
pub mod word_lists;

pub use analysis::{DocumentAnalysis, analyze_bounded, analyze_document, check_input_size};
pub use config::{Config, ConfigLoader, ConfigSources, DEFAULT_MAX_INPUT_BYTES, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use readability::{ReadabilityLevel, ReadabilityResult, ReadingTime};
