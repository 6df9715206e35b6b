//! vaidya-kb — disease-information knowledge base and query core.
//!
//! Loads a tabular disease dataset once, then answers free-text health
//! queries: resolve the disease name (exact, substring, fuzzy), classify
//! the information need from trigger keywords, and render priority-ordered
//! text. Matching, classification, and rendering are pure functions over
//! the loaded dataset.
//!
//! # Example
//!
//! ```rust,no_run
//! use vaidya_kb::{dispatch, KnowledgeBase};
//!
//! #[tokio::main]
//! async fn main() {
//!     let kb = KnowledgeBase::load("data/diseases.csv").await;
//!     let answer = dispatch::process(&kb, "home treatment for asthma");
//!     println!("{answer}");
//! }
//! ```

pub mod dataset;
pub mod dispatch;
pub mod intent;
pub mod matcher;
pub mod record;
pub mod reply;

pub use dataset::KnowledgeBase;
pub use intent::IntentKind;
pub use matcher::{find, validate_and_find, MatchResult};
pub use record::{Aspect, DiseaseRecord};
