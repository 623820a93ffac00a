//! Decision tree data model.
//!
//! A [`DecisionNode`] owns its options and each option owns its [`Branch`],
//! so the tree is acyclic by construction. Nothing here knows about consoles
//! or prompts: any front end can walk the tree through [`DecisionNode::answer`].

use serde::Serialize;

use crate::errors::GuideError;

/// Terminal outcome of a traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Catalog ids, in display order. Several ids mean the guide considers
    /// them equally valid for the answers given.
    pub test_ids: Vec<&'static str>,
    pub notes: Option<&'static str>,
    /// A further recommendation emitted after this one in the same result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional: Option<Box<Recommendation>>,
}

impl Recommendation {
    #[must_use]
    pub fn tests(test_ids: &[&'static str]) -> Self {
        Self {
            test_ids: test_ids.to_vec(),
            notes: None,
            additional: None,
        }
    }

    #[must_use]
    pub fn test(test_id: &'static str) -> Self {
        Self::tests(&[test_id])
    }

    #[must_use]
    pub fn with_notes(mut self, notes: &'static str) -> Self {
        self.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn followed_by(mut self, additional: Self) -> Self {
        self.additional = Some(Box::new(additional));
        self
    }

    /// This recommendation and every additional one after it, in order.
    pub fn stages(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |stage| stage.additional.as_deref())
    }

    /// Every test id across all stages, in order.
    pub fn all_test_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages()
            .flat_map(|stage| stage.test_ids.iter().copied())
    }

    /// Whether a significant result calls for post-hoc comparisons, i.e. the
    /// stage recommends an ANOVA or Kruskal-Wallis variant.
    #[must_use]
    pub fn calls_for_post_hoc(&self) -> bool {
        self.test_ids
            .iter()
            .any(|id| id.contains("ANOVA") || id.contains("Kruskal-Wallis"))
    }
}

/// Where an answer leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Branch {
    Ask(Box<DecisionNode>),
    Recommend(Recommendation),
}

/// Borrowed result of answering a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'g> {
    Ask(&'g DecisionNode),
    Recommend(&'g Recommendation),
}

impl<'g> From<&'g Branch> for Step<'g> {
    fn from(branch: &'g Branch) -> Self {
        match branch {
            Branch::Ask(node) => Self::Ask(node),
            Branch::Recommend(recommendation) => Self::Recommend(recommendation),
        }
    }
}

/// One selectable answer of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOption {
    pub key: &'static str,
    pub label: &'static str,
    pub branch: Branch,
}

/// A single-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionNode {
    /// Dotted path name, stable across releases (e.g. `a.continuous.groups`).
    pub id: &'static str,
    pub question: &'static str,
    pub options: Vec<DecisionOption>,
}

impl DecisionNode {
    #[must_use]
    pub const fn new(id: &'static str, question: &'static str) -> Self {
        Self {
            id,
            question,
            options: Vec::new(),
        }
    }

    /// Add an option that continues with another question.
    #[must_use]
    pub fn ask(mut self, key: &'static str, label: &'static str, next: Self) -> Self {
        self.options.push(DecisionOption {
            key,
            label,
            branch: Branch::Ask(Box::new(next)),
        });
        self
    }

    /// Add an option that ends the traversal.
    #[must_use]
    pub fn recommend(
        mut self,
        key: &'static str,
        label: &'static str,
        recommendation: Recommendation,
    ) -> Self {
        self.options.push(DecisionOption {
            key,
            label,
            branch: Branch::Recommend(recommendation),
        });
        self
    }

    /// Resolve an option key to the next node or a recommendation.
    ///
    /// The key must match exactly; callers normalize user input first.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidOption`] if the key is not offered here.
    pub fn answer(&self, key: &str) -> Result<Step<'_>, GuideError> {
        self.select(key).map(|option| Step::from(&option.branch))
    }

    /// Like [`DecisionNode::answer`], but returns the matched option itself.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::InvalidOption`] if the key is not offered here.
    pub fn select(&self, key: &str) -> Result<&DecisionOption, GuideError> {
        self.option(key).ok_or_else(|| GuideError::InvalidOption {
            key: key.to_string(),
            valid: self.keys().map(str::to_string).collect(),
        })
    }

    #[must_use]
    pub fn option(&self, key: &str) -> Option<&DecisionOption> {
        self.options.iter().find(|option| option.key == key)
    }

    #[must_use]
    pub fn has_option(&self, key: &str) -> bool {
        self.option(key).is_some()
    }

    /// Option keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|option| option.key)
    }
}
