//! Traversal over the decision tree.
//!
//! [`Guide`] owns the tree built once at startup. A [`Session`] is the
//! per-consultation cursor: the node currently being asked and the answers
//! given so far. [`Guide::run`] drives a session to its end by pulling keys
//! from an [`AnswerSource`].

use std::collections::VecDeque;

use serde::Serialize;

use crate::errors::GuideError;
use crate::sections;
use crate::tree::{DecisionNode, Recommendation, Step};

/// Upper bound on questions asked in one session. The standard tree is at
/// most six questions deep.
pub const MAX_DEPTH: usize = 10;

/// Anything that can pick an option key for a node: a console prompt, a web
/// form, a scripted harness.
pub trait AnswerSource {
    /// Return an option key for `node`.
    ///
    /// Implementations should only return keys the node offers. If one slips
    /// through, the engine asks again without advancing.
    ///
    /// # Errors
    ///
    /// Returns an error when no further answer can be produced
    /// (e.g. [`GuideError::InputClosed`]).
    fn choose(&mut self, node: &DecisionNode) -> Result<String, GuideError>;
}

/// Answers fed from a fixed list of keys.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    keys: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Keys not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn choose(&mut self, _node: &DecisionNode) -> Result<String, GuideError> {
        self.keys.pop_front().ok_or(GuideError::InputClosed)
    }
}

/// One recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub node_id: &'static str,
    pub key: &'static str,
}

/// Result of a full traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'g> {
    Recommended(&'g Recommendation),
    /// Reached only through a data-completeness defect in the tree.
    NoRecommendation,
}

impl<'g> Outcome<'g> {
    #[must_use]
    pub const fn recommendation(self) -> Option<&'g Recommendation> {
        match self {
            Self::Recommended(recommendation) => Some(recommendation),
            Self::NoRecommendation => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Guide
// ---------------------------------------------------------------------------

/// The full decision tree: a research-goal menu over eight sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    menu: DecisionNode,
}

impl Default for Guide {
    fn default() -> Self {
        Self::standard()
    }
}

impl Guide {
    /// Build the standard tree.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_menu(sections::menu())
    }

    /// Wrap a custom menu node. Options of the menu act as sections.
    #[must_use]
    pub const fn from_menu(menu: DecisionNode) -> Self {
        Self { menu }
    }

    /// The top-level research-goal question.
    #[must_use]
    pub const fn menu(&self) -> &DecisionNode {
        &self.menu
    }

    /// Entry node of a section.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::UnknownSection`] if `section_key` is not one of
    /// the menu keys, or leads straight to a recommendation.
    pub fn start(&self, section_key: &str) -> Result<&DecisionNode, GuideError> {
        match self.menu.answer(section_key) {
            Ok(Step::Ask(entry)) => Ok(entry),
            Ok(Step::Recommend(_)) | Err(_) => Err(GuideError::UnknownSection {
                key: section_key.to_string(),
            }),
        }
    }

    /// Entry nodes of every section, in menu order.
    pub fn sections(&self) -> impl Iterator<Item = (&'static str, &DecisionNode)> + '_ {
        self.menu
            .options
            .iter()
            .filter_map(|option| match Step::from(&option.branch) {
                Step::Ask(entry) => Some((option.key, entry)),
                Step::Recommend(_) => None,
            })
    }

    /// Begin a session at a section entry.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::UnknownSection`] for an unknown key.
    pub fn session(&self, section_key: &str) -> Result<Session<'_>, GuideError> {
        let entry = self.start(section_key)?;
        Ok(Session::new(entry))
    }

    /// Begin a session at the research-goal menu.
    #[must_use]
    pub fn session_from_menu(&self) -> Session<'_> {
        Session::new(&self.menu)
    }

    /// Drive a full traversal of one section.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::UnknownSection`] for an unknown key, or whatever
    /// error the answer source raises when it cannot produce an answer.
    pub fn run<S>(&self, section_key: &str, source: &mut S) -> Result<Outcome<'_>, GuideError>
    where
        S: AnswerSource + ?Sized,
    {
        let mut session = self.session(section_key)?;
        session.drive(source)?;
        Ok(session.outcome())
    }

    /// Drive a full traversal starting at the research-goal menu.
    ///
    /// # Errors
    ///
    /// Returns whatever error the answer source raises when it cannot
    /// produce an answer.
    pub fn run_from_menu<S>(&self, source: &mut S) -> Result<Outcome<'_>, GuideError>
    where
        S: AnswerSource + ?Sized,
    {
        let mut session = self.session_from_menu();
        session.drive(source)?;
        Ok(session.outcome())
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cursor<'g> {
    Asking(&'g DecisionNode),
    Finished(&'g Recommendation),
    Stuck,
}

/// Per-consultation traversal state.
#[derive(Debug, Clone)]
pub struct Session<'g> {
    cursor: Cursor<'g>,
    history: Vec<Answer>,
}

impl<'g> Session<'g> {
    #[must_use]
    pub const fn new(entry: &'g DecisionNode) -> Self {
        Self {
            cursor: Cursor::Asking(entry),
            history: Vec::new(),
        }
    }

    /// The node awaiting an answer, if the session is still open.
    #[must_use]
    pub const fn current(&self) -> Option<&'g DecisionNode> {
        match self.cursor {
            Cursor::Asking(node) => Some(node),
            Cursor::Finished(_) | Cursor::Stuck => None,
        }
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        !matches!(self.cursor, Cursor::Asking(_))
    }

    /// Answers accepted so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Answer] {
        &self.history
    }

    /// Submit an answer for the current node.
    ///
    /// An invalid key leaves the cursor and history untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidOption`] if the key is not offered by the
    /// current node (or the session has already finished).
    pub fn submit(&mut self, key: &str) -> Result<Step<'g>, GuideError> {
        let Cursor::Asking(node) = self.cursor else {
            return Err(GuideError::InvalidOption {
                key: key.to_string(),
                valid: Vec::new(),
            });
        };

        let option = node.select(key)?;
        let step = Step::from(&option.branch);
        self.history.push(Answer {
            node_id: node.id,
            key: option.key,
        });
        tracing::debug!(node = node.id, key, "answer accepted");

        self.cursor = match step {
            Step::Ask(next) if next.options.is_empty() => {
                tracing::warn!(node = next.id, "decision node offers no options");
                Cursor::Stuck
            }
            Step::Ask(next) if self.history.len() >= MAX_DEPTH => {
                tracing::warn!(node = next.id, depth = MAX_DEPTH, "depth bound exceeded");
                Cursor::Stuck
            }
            Step::Ask(next) => Cursor::Asking(next),
            Step::Recommend(recommendation) => Cursor::Finished(recommendation),
        };
        Ok(step)
    }

    /// Pull answers until the session finishes.
    ///
    /// # Errors
    ///
    /// Propagates any non-recoverable error from the answer source.
    pub fn drive<S>(&mut self, source: &mut S) -> Result<(), GuideError>
    where
        S: AnswerSource + ?Sized,
    {
        if let Some(node) = self.current().filter(|node| node.options.is_empty()) {
            tracing::warn!(node = node.id, "decision node offers no options");
            self.cursor = Cursor::Stuck;
        }

        while let Some(node) = self.current() {
            let key = source.choose(node)?;
            match self.submit(&key) {
                Ok(_) => {}
                Err(error) if error.is_recoverable() => {
                    tracing::debug!(
                        node = node.id,
                        key = key.as_str(),
                        "answer source returned an invalid key"
                    );
                }
                Err(error) => return Err(error),
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn outcome(&self) -> Outcome<'g> {
        match self.cursor {
            Cursor::Finished(recommendation) => Outcome::Recommended(recommendation),
            Cursor::Asking(_) | Cursor::Stuck => Outcome::NoRecommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{AnswerSource, Guide, Outcome, ScriptedAnswers, Session};
    use crate::errors::GuideError;
    use crate::tree::{DecisionNode, Recommendation, Step};

    #[test]
    fn start_resolves_every_section() {
        let guide = Guide::standard();
        for key in ["a", "b", "c", "d", "e", "f", "g", "h"] {
            let entry = guide.start(key).expect("section exists");
            assert!(entry.id.starts_with(key));
        }
        assert_eq!(guide.sections().count(), 8);
    }

    #[test]
    fn start_rejects_unknown_section() {
        let guide = Guide::standard();
        let error = guide.start("z").expect_err("z is not a section");
        assert!(matches!(error, GuideError::UnknownSection { ref key } if key == "z"));
        assert!(guide.run("z", &mut ScriptedAnswers::default()).is_err());
    }

    #[test]
    fn invalid_submit_does_not_advance() {
        let guide = Guide::standard();
        let mut session = guide.session("a").expect("section a");
        let before = session.current().map(|node| node.id);

        let error = session.submit("x").expect_err("x is invalid");
        assert!(error.is_recoverable());
        assert_eq!(session.current().map(|node| node.id), before);
        assert!(session.history().is_empty());
    }

    #[test]
    fn run_skips_invalid_keys_from_source() {
        let guide = Guide::standard();
        let mut answers = ScriptedAnswers::new(["x", "1", "nope", "2", "i", "y", "y"]);
        let outcome = guide.run("a", &mut answers).expect("completes");
        assert_eq!(
            outcome.recommendation().map(|r| r.test_ids.clone()),
            Some(vec!["Two-Sample t-test"])
        );
        assert_eq!(answers.remaining(), 0);
    }

    #[test]
    fn running_out_of_answers_is_input_closed() {
        let guide = Guide::standard();
        let mut answers = ScriptedAnswers::new(["1"]);
        let error = guide.run("a", &mut answers).expect_err("runs dry");
        assert!(matches!(error, GuideError::InputClosed));
    }

    #[test]
    fn history_records_answers_in_order() {
        let guide = Guide::standard();
        let mut session = guide.session_from_menu();
        session
            .drive(&mut ScriptedAnswers::new(["g", "2", "n"]))
            .expect("completes");
        let history = session.history();
        let keys = history.iter().map(|a| a.key).collect::<Vec<_>>();
        let nodes = history.iter().map(|a| a.node_id).collect::<Vec<_>>();
        assert_eq!(keys, vec!["g", "2", "n"]);
        assert_eq!(nodes, vec!["menu", "g.groups", "g.two.normal"]);
        assert!(session.is_finished());
    }

    #[test]
    fn submit_after_finish_is_rejected() {
        let guide = Guide::standard();
        let mut session = guide.session("h").expect("section h");
        assert!(matches!(session.submit("nested"), Ok(Step::Recommend(_))));
        assert!(session.submit("nested").is_err());
    }

    #[test]
    fn node_without_options_yields_no_recommendation() {
        let dead_end = DecisionNode::new("a.empty", "?");
        let entry = DecisionNode::new("a.entry", "Scale?").ask("1", "Dead end", dead_end);
        let menu = DecisionNode::new("menu", "Goal?").ask("a", "Broken", entry);
        let guide = Guide::from_menu(menu);
        let outcome = guide
            .run("a", &mut ScriptedAnswers::new(["1"]))
            .expect("no source error");
        assert_eq!(outcome, Outcome::NoRecommendation);
    }

    #[test]
    fn menu_recommendation_is_not_a_section() {
        let menu = DecisionNode::new("menu", "Goal?").recommend(
            "a",
            "Shortcut",
            Recommendation::test("Sign Test"),
        );
        let guide = Guide::from_menu(menu);
        assert!(matches!(guide.start("a"), Err(GuideError::UnknownSection { .. })));
    }

    struct Counting {
        inner: ScriptedAnswers,
        asked: Vec<&'static str>,
    }

    impl AnswerSource for Counting {
        fn choose(&mut self, node: &DecisionNode) -> Result<String, GuideError> {
            self.asked.push(node.id);
            self.inner.choose(node)
        }
    }

    #[test]
    fn source_is_asked_again_on_the_same_node_after_invalid_key() {
        let guide = Guide::standard();
        let mut source = Counting {
            inner: ScriptedAnswers::new(["x", "nested"]),
            asked: Vec::new(),
        };
        let outcome = guide.run("h", &mut source).expect("completes");
        assert_eq!(source.asked, vec!["h.need", "h.need"]);
        assert!(matches!(outcome, Outcome::Recommended(_)));
    }

    #[test]
    fn fresh_session_starts_at_entry() {
        let guide = Guide::standard();
        let entry = guide.start("c").expect("section c");
        let session = Session::new(entry);
        assert_eq!(session.current().map(|n| n.id), Some("c.scale"));
        assert_eq!(session.outcome(), Outcome::NoRecommendation);
    }
}
