//! # Condense
//!
//! A CLI tool for extractive summarisation of heterogeneous sources.
//!
//! ## Features
//!
//! - **Many sources, one pipeline**: web pages, YouTube transcripts, PDFs and plain-text files
//! - **LexRank ranking**: graph-centrality sentence scoring, fully deterministic
//! - **Chunk-then-merge**: long documents are summarised per chunk, then the
//!   merged selection is re-ranked down to the requested length

pub mod chunk;
pub mod config;
pub mod extract;
pub mod rank;
pub mod scraper;
pub mod source;
pub mod summarize;
pub mod summary;
pub mod tokenize;
pub mod transcript;

pub use config::Config;
pub use extract::Document;
pub use source::Source;
pub use summarize::summarize;
pub use summary::Summary;
