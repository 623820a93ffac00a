//! Exhaustive checks over every answer path of a [`Guide`].

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::engine::{Answer, Guide, MAX_DEPTH};
use crate::tree::{Branch, DecisionNode, Recommendation};

/// A data defect found in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "defect", rename_all = "snake_case")]
pub enum Defect {
    NoOptions {
        node: &'static str,
    },
    DuplicateKey {
        node: &'static str,
        key: &'static str,
    },
    EmptyRecommendation {
        node: &'static str,
        key: &'static str,
    },
    MissingTest {
        node: &'static str,
        key: &'static str,
        test_id: &'static str,
    },
    TooDeep {
        node: &'static str,
        depth: usize,
    },
    Revisited {
        node: &'static str,
    },
}

impl Defect {
    /// Snake-case name of the defect class, matching the serialized tag.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NoOptions { .. } => "no_options",
            Self::DuplicateKey { .. } => "duplicate_key",
            Self::EmptyRecommendation { .. } => "empty_recommendation",
            Self::MissingTest { .. } => "missing_test",
            Self::TooDeep { .. } => "too_deep",
            Self::Revisited { .. } => "revisited",
        }
    }
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoOptions { node } => write!(f, "{node}: node offers no options"),
            Self::DuplicateKey { node, key } => {
                write!(f, "{node}: option key '{key}' appears more than once")
            }
            Self::EmptyRecommendation { node, key } => {
                write!(f, "{node}/{key}: recommendation names no tests")
            }
            Self::MissingTest { node, key, test_id } => {
                write!(f, "{node}/{key}: '{test_id}' is not in the catalog")
            }
            Self::TooDeep { node, depth } => {
                write!(f, "{node}: path exceeds {depth} questions")
            }
            Self::Revisited { node } => write!(f, "{node}: node revisited on one path"),
        }
    }
}

/// One complete answer path from a section entry to a recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuidePath<'g> {
    pub section: &'static str,
    pub answers: Vec<Answer>,
    pub recommendation: &'g Recommendation,
}

impl GuidePath<'_> {
    /// Answer keys joined the way a user would type them.
    #[must_use]
    pub fn keys(&self) -> String {
        self.answers
            .iter()
            .map(|answer| answer.key)
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

/// Summary of a full validation walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub sections: usize,
    pub nodes: usize,
    pub paths: usize,
    pub max_depth: usize,
    pub defects: Vec<Defect>,
}

impl ValidationReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.defects.is_empty()
    }
}

/// Check every path of every section against the tree invariants and the
/// catalog.
#[must_use]
pub fn validate(guide: &Guide, catalog: &Catalog) -> ValidationReport {
    let mut walker = Walker::new(Some(catalog));
    let mut sections = 0;
    for (key, entry) in guide.sections() {
        sections += 1;
        walker.walk_section(key, entry);
    }
    for defect in &walker.defects {
        tracing::warn!(%defect, "guide data defect");
    }
    ValidationReport {
        sections,
        nodes: walker.nodes,
        paths: walker.paths.len(),
        max_depth: walker.max_depth,
        defects: walker.defects,
    }
}

/// Every answer path of every section, in menu and option order.
#[must_use]
pub fn paths(guide: &Guide) -> Vec<GuidePath<'_>> {
    let mut walker = Walker::new(None);
    for (key, entry) in guide.sections() {
        walker.walk_section(key, entry);
    }
    walker.paths
}

/// Every answer path of one section.
#[must_use]
pub fn section_paths<'g>(section: &'static str, entry: &'g DecisionNode) -> Vec<GuidePath<'g>> {
    let mut walker = Walker::new(None);
    walker.walk_section(section, entry);
    walker.paths
}

struct Walker<'g, 'c> {
    catalog: Option<&'c Catalog>,
    section: &'static str,
    on_path: Vec<&'static str>,
    answers: Vec<Answer>,
    paths: Vec<GuidePath<'g>>,
    defects: Vec<Defect>,
    nodes: usize,
    max_depth: usize,
}

impl<'g, 'c> Walker<'g, 'c> {
    const fn new(catalog: Option<&'c Catalog>) -> Self {
        Self {
            catalog,
            section: "",
            on_path: Vec::new(),
            answers: Vec::new(),
            paths: Vec::new(),
            defects: Vec::new(),
            nodes: 0,
            max_depth: 0,
        }
    }

    fn walk_section(&mut self, section: &'static str, entry: &'g DecisionNode) {
        self.section = section;
        self.visit(entry);
    }

    fn visit(&mut self, node: &'g DecisionNode) {
        if self.on_path.contains(&node.id) {
            self.defects.push(Defect::Revisited { node: node.id });
            return;
        }
        if self.on_path.len() >= MAX_DEPTH {
            self.defects.push(Defect::TooDeep {
                node: node.id,
                depth: MAX_DEPTH,
            });
            return;
        }

        self.nodes += 1;
        self.on_path.push(node.id);
        self.max_depth = self.max_depth.max(self.on_path.len());

        if node.options.is_empty() {
            self.defects.push(Defect::NoOptions { node: node.id });
        }

        let mut seen = HashSet::new();
        for option in &node.options {
            if !seen.insert(option.key) {
                self.defects.push(Defect::DuplicateKey {
                    node: node.id,
                    key: option.key,
                });
            }

            self.answers.push(Answer {
                node_id: node.id,
                key: option.key,
            });
            match &option.branch {
                Branch::Ask(next) => self.visit(next),
                Branch::Recommend(recommendation) => {
                    self.check_recommendation(node.id, option.key, recommendation);
                    self.paths.push(GuidePath {
                        section: self.section,
                        answers: self.answers.clone(),
                        recommendation,
                    });
                }
            }
            self.answers.pop();
        }

        self.on_path.pop();
    }

    fn check_recommendation(
        &mut self,
        node: &'static str,
        key: &'static str,
        recommendation: &Recommendation,
    ) {
        for stage in recommendation.stages() {
            if stage.test_ids.is_empty() {
                self.defects.push(Defect::EmptyRecommendation { node, key });
            }
        }

        let Some(catalog) = self.catalog else { return };
        for test_id in recommendation.all_test_ids() {
            if !catalog.contains(test_id) {
                self.defects
                    .push(Defect::MissingTest { node, key, test_id });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{Defect, paths, validate};
    use crate::catalog::Catalog;
    use crate::engine::Guide;
    use crate::tree::{DecisionNode, Recommendation};

    fn tiny_guide(entry: DecisionNode) -> Guide {
        Guide::from_menu(DecisionNode::new("menu", "Goal?").ask("a", "Only", entry))
    }

    #[test]
    fn flags_missing_catalog_ids() {
        let guide = tiny_guide(
            DecisionNode::new("a.q", "?")
                .recommend("y", "Yes", Recommendation::test("Sign Test"))
                .recommend("n", "No", Recommendation::test("Stale Test")),
        );
        let report = validate(&guide, Catalog::standard());
        assert_eq!(
            report.defects,
            vec![Defect::MissingTest {
                node: "a.q",
                key: "n",
                test_id: "Stale Test",
            }]
        );
        assert_eq!(report.paths, 2);
    }

    #[test]
    fn flags_empty_recommendations_and_duplicate_keys() {
        let guide = tiny_guide(
            DecisionNode::new("a.q", "?")
                .recommend("y", "Yes", Recommendation::tests(&[]))
                .recommend("y", "Again", Recommendation::test("Sign Test")),
        );
        let report = validate(&guide, Catalog::standard());
        assert!(report.defects.contains(&Defect::EmptyRecommendation {
            node: "a.q",
            key: "y",
        }));
        assert!(report.defects.contains(&Defect::DuplicateKey {
            node: "a.q",
            key: "y",
        }));
    }

    #[test]
    fn flags_dead_ends() {
        let dead_end = DecisionNode::new("a.q.y", "?");
        let guide = tiny_guide(DecisionNode::new("a.q", "?").ask("y", "Yes", dead_end));
        let report = validate(&guide, Catalog::standard());
        assert_eq!(report.defects, vec![Defect::NoOptions { node: "a.q.y" }]);
        assert_eq!(report.paths, 0);
    }

    #[test]
    fn flags_revisited_ids_on_one_path() {
        let sign = Recommendation::test("Sign Test");
        let again = DecisionNode::new("a.q", "?").recommend("n", "No", sign);
        let guide = tiny_guide(DecisionNode::new("a.q", "?").ask("y", "Yes", again));
        let report = validate(&guide, Catalog::standard());
        assert_eq!(report.defects, vec![Defect::Revisited { node: "a.q" }]);
    }

    #[test]
    fn flags_paths_beyond_depth_bound() {
        let ids = [
            "a.0", "a.1", "a.2", "a.3", "a.4", "a.5", "a.6", "a.7", "a.8", "a.9", "a.10",
        ];
        let leaf = Recommendation::test("Sign Test");
        let mut node = DecisionNode::new("a.leaf", "?").recommend("y", "Yes", leaf);
        for id in ids.into_iter().rev() {
            node = DecisionNode::new(id, "?").ask("y", "Yes", node);
        }
        let report = validate(&tiny_guide(node), Catalog::standard());
        assert!(
            report
                .defects
                .iter()
                .any(|defect| matches!(defect, Defect::TooDeep { .. }))
        );
    }

    #[test]
    fn paths_keys_read_like_typed_answers() {
        let guide = Guide::standard();
        let all = paths(&guide);
        let welch = all
            .iter()
            .find(|path| path.recommendation.test_ids == vec!["Welch's t-test"])
            .expect("welch path exists");
        assert_eq!(welch.section, "a");
        assert_eq!(welch.keys(), "1 > 2 > i > y > n");
    }

    #[test]
    fn defects_render_readably() {
        let defect = Defect::MissingTest {
            node: "a.q",
            key: "n",
            test_id: "Stale Test",
        };
        assert_eq!(
            defect.to_string(),
            "a.q/n: 'Stale Test' is not in the catalog"
        );
        assert_eq!(defect.kind(), "missing_test");
        let json = serde_json::to_value(&defect).expect("serializes");
        assert_eq!(json["defect"], defect.kind());
    }
}
