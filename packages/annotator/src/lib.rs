//! Finnsyll Annotator - lexicon loading, gold evaluation and the `finnsyll` CLI.
//!
//! This crate provides the outer layer around `finnsyll-engine`: it reads the
//! lexicon files named by a YAML configuration, loads hand-verified gold
//! syllabifications, and exposes annotation and evaluation on the command
//! line.
//!
//! # Example
//!
//! ```
//! use finnsyll_annotator::loader::{parse_compound_file, parse_word_list};
//! use finnsyll_engine::{Annotator, Lexicon};
//!
//! let initial = parse_word_list("kala\nmaa\n");
//! let compounds = parse_compound_file("-\nrauta-tie\n").unwrap();
//! let lexicon = Lexicon::new(initial, Vec::<String>::new(), Vec::<String>::new(), compounds).unwrap();
//!
//! assert_eq!(Annotator::new(&lexicon).syllabify("kalakauppa"), "ka.la.kaup.pa");
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Lexicon configuration file and limits
//! - [`loader`]: Word list and compound dictionary parsing
//! - [`gold`]: Gold file parsing
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod gold;
pub mod loader;

// Re-export commonly used items
pub use config::{LexiconConfig, LexiconPaths};
pub use error::{AnnotatorError, Result};
pub use gold::load_gold_file;
pub use loader::load_lexicon;
