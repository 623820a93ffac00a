//! # sg-core
//!
//! Test catalog and decision tree engine for statguide.
//!
//! - [`catalog`]: the read-only table of statistical tests, keyed by exact id
//! - [`tree`]: decision nodes, options, and recommendations as plain data
//! - [`sections`]: the eight research-goal sections and their questions
//! - [`engine`]: sessions, answer sources, and full traversals
//! - [`validate`]: exhaustive path enumeration and data-defect checks
//! - [`errors`]: the error taxonomy shared by all of the above
//!
//! ```
//! use sg_core::{Guide, ScriptedAnswers};
//!
//! let guide = Guide::standard();
//! let mut answers = ScriptedAnswers::new(["2", "n"]);
//! let outcome = guide.run("g", &mut answers).expect("traversal completes");
//! let recommendation = outcome.recommendation().expect("leaf reached");
//! assert_eq!(recommendation.test_ids, ["Levene's Test", "Brown-Forsythe Test"]);
//! ```

pub mod catalog;
pub mod engine;
pub mod errors;
pub mod sections;
pub mod tree;
pub mod validate;

pub use catalog::{Catalog, TestEntry, TestKind};
pub use engine::{Answer, AnswerSource, Guide, Outcome, ScriptedAnswers, Session};
pub use errors::GuideError;
pub use sections::SectionKey;
pub use tree::{Branch, DecisionNode, DecisionOption, Recommendation, Step};
pub use validate::{Defect, GuidePath, ValidationReport};
