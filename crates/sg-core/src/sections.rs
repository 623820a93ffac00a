//! The eight research-goal sections and the questions behind each of them.
//!
//! Branch order encodes domain policy: parametric forks come before
//! variance/sphericity/shape forks, and every "no / unsure" answer lands on the
//! more robust test.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::ids;
use crate::errors::GuideError;
use crate::tree::{DecisionNode, Recommendation};

// ---------------------------------------------------------------------------
// SectionKey
// ---------------------------------------------------------------------------

/// Top-level research goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    CompareGroups,
    Relationships,
    Regression,
    DistributionalFit,
    TimeSeries,
    Survival,
    Variances,
    ModelComparison,
}

impl SectionKey {
    pub const ALL: [Self; 8] = [
        Self::CompareGroups,
        Self::Relationships,
        Self::Regression,
        Self::DistributionalFit,
        Self::TimeSeries,
        Self::Survival,
        Self::Variances,
        Self::ModelComparison,
    ];

    /// The single-letter menu key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::CompareGroups => "a",
            Self::Relationships => "b",
            Self::Regression => "c",
            Self::DistributionalFit => "d",
            Self::TimeSeries => "e",
            Self::Survival => "f",
            Self::Variances => "g",
            Self::ModelComparison => "h",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CompareGroups => "Comparing groups (means, medians, proportions)",
            Self::Relationships => "Examining relationships or associations between variables",
            Self::Regression => "Predicting an outcome based on predictor variables (Regression)",
            Self::DistributionalFit => "Assessing distributional fit or checking model assumptions",
            Self::TimeSeries => "Analyzing time-ordered data (Time Series Analysis)",
            Self::Survival => "Analyzing time-to-event data (Survival Analysis)",
            Self::Variances => "Comparing variances/dispersion between groups",
            Self::ModelComparison => "General model comparison or parameter testing",
        }
    }

    /// Resolve an exact menu key.
    ///
    /// # Errors
    ///
    /// Returns [`GuideError::UnknownSection`] for anything but `a`..`h`.
    pub fn from_key(key: &str) -> Result<Self, GuideError> {
        Self::ALL
            .into_iter()
            .find(|section| section.key() == key)
            .ok_or_else(|| GuideError::UnknownSection {
                key: key.to_string(),
            })
    }

    /// Build the entry question of this section.
    #[must_use]
    pub fn entry(self) -> DecisionNode {
        match self {
            Self::CompareGroups => compare_groups(),
            Self::Relationships => relationships(),
            Self::Regression => regression(),
            Self::DistributionalFit => distributional_fit(),
            Self::TimeSeries => time_series(),
            Self::Survival => survival(),
            Self::Variances => variances(),
            Self::ModelComparison => model_comparison(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SectionKey {
    type Err = GuideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s)
    }
}

/// The research-goal menu; option `a`..`h` leads to each section entry.
#[must_use]
pub fn menu() -> DecisionNode {
    SectionKey::ALL.into_iter().fold(
        DecisionNode::new("menu", "1. What is your primary research goal?"),
        |node, section| node.ask(section.key(), section.label(), section.entry()),
    )
}

// ---------------------------------------------------------------------------
// Shared questions
// ---------------------------------------------------------------------------

const YES: &str = "Yes";
const NO: &str = "No";

fn rank_alternatives() -> Recommendation {
    Recommendation::tests(&[ids::WILCOXON_SIGNED_RANK, ids::SIGN_TEST])
}

fn rank_correlations() -> Recommendation {
    Recommendation::tests(&[ids::SPEARMAN, ids::KENDALLS_TAU])
}

fn small_cell_counts(id: &'static str, otherwise: DecisionNode) -> DecisionNode {
    DecisionNode::new(
        id,
        "Are expected cell counts small (e.g., any cell < 5 for a 2x2 table)?",
    )
    .recommend(
        "y",
        "Yes (consider Fisher's)",
        Recommendation::test(ids::FISHERS_EXACT),
    )
    .ask("n", "No (Chi-squared likely appropriate)", otherwise)
}

fn small_cell_counts_terminal(id: &'static str) -> DecisionNode {
    DecisionNode::new(
        id,
        "Are expected cell counts small (e.g., any cell < 5 for a 2x2 table)?",
    )
    .recommend(
        "y",
        "Yes (consider Fisher's)",
        Recommendation::test(ids::FISHERS_EXACT),
    )
    .recommend(
        "n",
        "No (Chi-squared likely appropriate)",
        Recommendation::test(ids::CHI_SQUARED_INDEPENDENCE),
    )
}

// ---------------------------------------------------------------------------
// A: comparing groups
// ---------------------------------------------------------------------------

fn compare_groups() -> DecisionNode {
    DecisionNode::new(
        "a.scale",
        "A1. What is the scale of your dependent variable (the outcome you are measuring)?",
    )
    .ask(
        "1",
        "Continuous (Interval/Ratio Data - e.g., blood pressure, test score)",
        continuous_groups(),
    )
    .ask(
        "2",
        "Categorical (Nominal/Ordinal Data - e.g., yes/no, low/medium/high)",
        categorical_groups(),
    )
}

fn continuous_groups() -> DecisionNode {
    DecisionNode::new(
        "a.continuous.groups",
        "A1.1.1. How many groups are you comparing?",
    )
    .ask(
        "1",
        "One Group (comparing sample to a known/hypothesized population value)",
        one_group(),
    )
    .ask("2", "Two Groups", two_groups())
    .ask("3", "Three or More Groups", three_or_more_groups())
}

fn one_group() -> DecisionNode {
    let variance_known = DecisionNode::new(
        "a.continuous.one.variance_known",
        "Is the population variance known?",
    )
    .recommend("y", YES, Recommendation::test(ids::Z_TEST_MEANS))
    .recommend(
        "n",
        "No (more common)",
        Recommendation::test(ids::ONE_SAMPLE_T_TEST),
    );

    DecisionNode::new(
        "a.continuous.one.parametric",
        "Are parametric assumptions met (e.g., normality of data or differences)?",
    )
    .ask("y", YES, variance_known)
    .recommend(
        "n",
        "No / Small sample / Ordinal-like continuous data",
        rank_alternatives(),
    )
}

fn two_groups() -> DecisionNode {
    let equal_variances = DecisionNode::new(
        "a.continuous.two.independent.variances",
        "Do you assume equal variances between the two groups (or test confirmed equality)?",
    )
    .recommend("y", YES, Recommendation::test(ids::TWO_SAMPLE_T_TEST))
    .recommend(
        "n",
        "No (or test confirmed inequality, or unsure - prefer Welch's)",
        Recommendation::test(ids::WELCH_T_TEST),
    );

    let independent = DecisionNode::new(
        "a.continuous.two.independent.parametric",
        "Are parametric assumptions met (normality, homogeneity of variances)?",
    )
    .ask("y", YES, equal_variances)
    .recommend(
        "n",
        "No / Ordinal data / Small samples",
        Recommendation::test(ids::MANN_WHITNEY_U),
    );

    let paired = DecisionNode::new(
        "a.continuous.two.paired.parametric",
        "Are parametric assumptions met (normality of differences)?",
    )
    .recommend("y", YES, Recommendation::test(ids::PAIRED_T_TEST))
    .recommend(
        "n",
        "No / Ordinal data / Small samples",
        rank_alternatives(),
    );

    DecisionNode::new(
        "a.continuous.two.design",
        "Are the samples independent or paired/related (e.g., same subject measured twice)?",
    )
    .ask("i", "Independent Samples", independent)
    .ask("p", "Paired/Related Samples", paired)
}

fn three_or_more_groups() -> DecisionNode {
    let factors = DecisionNode::new(
        "a.continuous.many.independent.factors",
        "Are you considering just one grouping factor, or more (e.g., drug type AND gender) or a covariate?",
    )
    .recommend(
        "1",
        "One grouping factor (e.g., drug type)",
        Recommendation::test(ids::ONE_WAY_ANOVA),
    )
    .recommend(
        "2",
        "Two (or more) grouping factors (e.g., drug type AND gender)",
        Recommendation::test(ids::TWO_WAY_ANOVA),
    )
    .recommend(
        "c",
        "One grouping factor AND a continuous covariate to control for",
        Recommendation::test(ids::ANCOVA),
    );

    let ordered = DecisionNode::new(
        "a.continuous.many.independent.ordered",
        "Do the groups have a natural ordering, and you expect a trend in medians (e.g., dose-response)?",
    )
    .recommend(
        "y",
        YES,
        Recommendation::tests(&[ids::KRUSKAL_WALLIS, ids::JONCKHEERE_TERPSTRA]),
    )
    .recommend("n", NO, Recommendation::test(ids::KRUSKAL_WALLIS));

    let independent = DecisionNode::new(
        "a.continuous.many.independent.parametric",
        "Are parametric assumptions met (normality within groups, homogeneity of variances)?",
    )
    .ask("y", YES, factors)
    .ask("n", "No / Ordinal data / Small samples", ordered);

    let related = DecisionNode::new(
        "a.continuous.many.related.parametric",
        "Are parametric assumptions met (sphericity for ANOVA)?",
    )
    .recommend(
        "y",
        YES,
        Recommendation::test(ids::REPEATED_MEASURES_ANOVA),
    )
    .recommend(
        "n",
        "No / Ordinal data",
        Recommendation::test(ids::FRIEDMAN),
    );

    DecisionNode::new(
        "a.continuous.many.design",
        "Are the samples independent or related (e.g., repeated measures on the same subject)?",
    )
    .ask("i", "Independent Samples", independent)
    .ask("r", "Related Samples (Repeated Measures)", related)
}

fn categorical_groups() -> DecisionNode {
    let one_variable = DecisionNode::new(
        "a.categorical.one.binary",
        "Is the outcome binary (e.g., success/failure) and are you comparing to a known proportion?",
    )
    .recommend(
        "y",
        YES,
        Recommendation::tests(&[ids::BINOMIAL, ids::Z_TEST_ONE_PROPORTION]),
    )
    .recommend(
        "n",
        "No (general frequency comparison)",
        Recommendation::test(ids::CHI_SQUARED_GOODNESS_OF_FIT),
    );

    let trend = DecisionNode::new(
        "a.categorical.two.independent.trend",
        "Is one variable a grouping variable and the other an ordered categorical outcome, testing for trend in proportions?",
    )
    .recommend(
        "y",
        YES,
        Recommendation::tests(&[ids::CHI_SQUARED_INDEPENDENCE, ids::COCHRAN_ARMITAGE]),
    )
    .recommend(
        "n",
        "No (general association)",
        Recommendation::test(ids::CHI_SQUARED_INDEPENDENCE),
    );

    let two_variables = DecisionNode::new(
        "a.categorical.two.design",
        "Are the samples for the two categorical variables independent or paired/related?",
    )
    .ask(
        "i",
        "Independent",
        small_cell_counts("a.categorical.two.independent.cells", trend),
    )
    .recommend("p", "Paired/Related", Recommendation::test(ids::MCNEMAR));

    DecisionNode::new(
        "a.categorical.structure",
        "A1.2.1. How many categorical variables/groups are involved and what's the structure?",
    )
    .ask(
        "1",
        "One categorical variable (comparing observed to expected frequencies)",
        one_variable,
    )
    .ask(
        "2",
        "Two categorical variables (testing for association/independence)",
        two_variables,
    )
    .recommend(
        "3",
        "More than two related categorical variables (e.g., same subject, multiple binary items)",
        Recommendation::test(ids::COCHRANS_Q),
    )
    .recommend(
        "p",
        "Comparing proportions between two independent groups (binary outcome)",
        Recommendation::test(ids::Z_TEST_TWO_PROPORTIONS),
    )
}

// ---------------------------------------------------------------------------
// B: relationships
// ---------------------------------------------------------------------------

fn relationships() -> DecisionNode {
    let linear = DecisionNode::new(
        "b.continuous.linear",
        "Do you expect a linear relationship and are parametric assumptions (e.g., bivariate normality) met?",
    )
    .recommend("y", YES, Recommendation::test(ids::PEARSON))
    .recommend(
        "n",
        "No (or monotonic relationship expected, or assumptions violated)",
        rank_correlations(),
    );

    DecisionNode::new(
        "b.scales",
        "B1. What are the scales of the TWO variables you are correlating/associating?",
    )
    .ask("cc", "Both Continuous (Interval/Ratio)", linear)
    .recommend(
        "oo",
        "Both Ordinal (or one/both Ordinal and assumptions for Pearson not met)",
        rank_correlations(),
    )
    .ask(
        "nn",
        "Both Nominal (Categorical)",
        small_cell_counts_terminal("b.nominal.cells"),
    )
    .recommend(
        "cn",
        "One Continuous, One Nominal (Categorical with 2 levels - often like comparing means)",
        Recommendation::tests(&[ids::TWO_SAMPLE_T_TEST, ids::MANN_WHITNEY_U]).with_notes(
            "This is framed as comparing means of the continuous variable across the 2 levels of the nominal variable. Point-biserial correlation is related. Parametric assumptions apply to the t-test.",
        ),
    )
    .recommend(
        "c_cat_multi",
        "One Continuous, One Nominal (Categorical with 3+ levels - often like comparing means)",
        Recommendation::tests(&[ids::ONE_WAY_ANOVA, ids::KRUSKAL_WALLIS]).with_notes(
            "This is framed as comparing means of the continuous variable across the 3+ levels of the nominal variable. Eta-squared from ANOVA indicates association strength. Parametric assumptions apply to ANOVA.",
        ),
    )
}

// ---------------------------------------------------------------------------
// C: regression
// ---------------------------------------------------------------------------

fn regression() -> DecisionNode {
    let predictors = DecisionNode::new(
        "c.continuous.predictors",
        "How many independent variables (IVs) are you using for prediction?",
    )
    .recommend(
        "1",
        "One IV",
        Recommendation::test(ids::SIMPLE_LINEAR_REGRESSION),
    )
    .recommend(
        "m",
        "Multiple IVs (two or more)",
        Recommendation::test(ids::MULTIPLE_LINEAR_REGRESSION),
    );

    let overdispersion = DecisionNode::new(
        "c.count.overdispersion",
        "Do you suspect overdispersion (variance of counts much larger than the mean)?",
    )
    .recommend(
        "y",
        "Yes / Unsure (consider Negative Binomial)",
        Recommendation::tests(&[ids::POISSON_REGRESSION, ids::NEGATIVE_BINOMIAL_REGRESSION]),
    )
    .recommend(
        "n",
        "No (Poisson might be appropriate)",
        Recommendation::test(ids::POISSON_REGRESSION),
    );

    DecisionNode::new(
        "c.scale",
        "C1. What is the scale of your dependent variable (DV - the outcome you are predicting)?",
    )
    .ask("1", "Continuous (Interval/Ratio)", predictors)
    .recommend(
        "2",
        "Binary (e.g., yes/no, success/failure)",
        Recommendation::test(ids::LOGISTIC_REGRESSION),
    )
    .recommend(
        "3",
        "Ordinal (e.g., low/medium/high, Likert scale)",
        Recommendation::test(ids::ORDINAL_LOGISTIC_REGRESSION),
    )
    .ask("4", "Count (e.g., number of events, items)", overdispersion)
}

// ---------------------------------------------------------------------------
// D: distributional fit
// ---------------------------------------------------------------------------

fn distributional_fit() -> DecisionNode {
    let two_sample = DecisionNode::new(
        "d.two_sample.medians",
        "Are you specifically interested in testing if medians of two or more groups are equal (less powerful than Mann-Whitney/Kruskal-Wallis for location shifts, but tests overall distribution equality more broadly)?",
    )
    .recommend(
        "y",
        YES,
        Recommendation::test(ids::KOLMOGOROV_SMIRNOV_TWO_SAMPLE)
            .followed_by(Recommendation::test(ids::MOODS_MEDIAN)),
    )
    .recommend(
        "n",
        NO,
        Recommendation::test(ids::KOLMOGOROV_SMIRNOV_TWO_SAMPLE),
    );

    let autocorrelation = DecisionNode::new(
        "d.autocorrelation.where",
        "Where are you checking for autocorrelation?",
    )
    .recommend(
        "reg",
        "In regression residuals",
        Recommendation::test(ids::DURBIN_WATSON),
    )
    .recommend(
        "ts",
        "In a time series itself",
        Recommendation::test(ids::LJUNG_BOX),
    );

    DecisionNode::new("d.goal", "D1. What are you trying to assess?")
        .recommend(
            "norm",
            "Normality of a single sample",
            Recommendation::tests(&[
                ids::SHAPIRO_WILK,
                ids::ANDERSON_DARLING,
                ids::KOLMOGOROV_SMIRNOV_ONE_SAMPLE,
                ids::LILLIEFORS,
            ]),
        )
        .recommend(
            "spec",
            "Goodness-of-Fit to a *specific* (non-normal) distribution for continuous data",
            Recommendation::tests(&[ids::KOLMOGOROV_SMIRNOV_ONE_SAMPLE, ids::ANDERSON_DARLING]),
        )
        .recommend(
            "cat_gof",
            "Goodness-of-Fit for categorical data (one variable, observed vs. expected)",
            Recommendation::test(ids::CHI_SQUARED_GOODNESS_OF_FIT),
        )
        .ask(
            "2samp_dist",
            "Comparing if two samples come from the same overall distribution",
            two_sample,
        )
        .ask(
            "autocorr",
            "Checking for autocorrelation (serial correlation) in time series data or regression residuals",
            autocorrelation,
        )
}

// ---------------------------------------------------------------------------
// E-H: single-question sections
// ---------------------------------------------------------------------------

fn time_series() -> DecisionNode {
    DecisionNode::new(
        "e.goal",
        "E1. What is the primary goal of your time series analysis?",
    )
    .recommend(
        "autocorr",
        "Testing for autocorrelation (series correlated with its past values)?",
        Recommendation::tests(&[ids::LJUNG_BOX, ids::DURBIN_WATSON]),
    )
    .recommend(
        "stationarity",
        "Testing for stationarity (does mean/variance change over time)?",
        Recommendation::tests(&[ids::AUGMENTED_DICKEY_FULLER, ids::KPSS]).with_notes(
            "These two tests for stationarity have opposite null hypotheses; often good to use both.",
        ),
    )
}

fn survival() -> DecisionNode {
    DecisionNode::new("f.goal", "F1. What is your primary goal?")
        .recommend(
            "compare_curves",
            "Comparing survival curves between two or more independent groups?",
            Recommendation::test(ids::LOG_RANK),
        )
        .recommend(
            "model_predictors",
            "Modeling the effect of predictors (covariates) on survival time/hazard rate?",
            Recommendation::test(ids::COX_PROPORTIONAL_HAZARDS),
        )
}

fn variances() -> DecisionNode {
    let robust = || Recommendation::tests(&[ids::LEVENE, ids::BROWN_FORSYTHE]);

    let two = DecisionNode::new(
        "g.two.normal",
        "Do your data meet normality assumptions (required for F-test, less so for Levene's)?",
    )
    .recommend(
        "y",
        "Yes (or F-test is specifically desired despite sensitivity)",
        Recommendation::tests(&[ids::F_TEST_VARIANCES, ids::LEVENE]),
    )
    .recommend("n", "No / Unsure (prefer robust test)", robust());

    let many = DecisionNode::new(
        "g.many.normal",
        "Do your data meet normality assumptions (required for Bartlett's, less so for Levene's)?",
    )
    .recommend(
        "y",
        "Yes (or Bartlett's is specifically desired despite sensitivity)",
        Recommendation::tests(&[ids::BARTLETT, ids::LEVENE, ids::BROWN_FORSYTHE]),
    )
    .recommend("n", "No / Unsure (prefer robust test)", robust());

    DecisionNode::new(
        "g.groups",
        "G1. How many groups are you comparing variances for?",
    )
    .ask("2", "Two Groups", two)
    .ask("m", "Two or More Groups", many)
}

fn model_comparison() -> DecisionNode {
    DecisionNode::new("h.need", "H1. What is your specific need?")
        .recommend(
            "nested",
            "Comparing the fit of two nested statistical models (one model is simpler version of other)?",
            Recommendation::test(ids::LIKELIHOOD_RATIO),
        )
        .recommend(
            "params",
            "Testing the significance of one or more parameters in a statistical model (e.g., regression coefficients)?",
            Recommendation::tests(&[ids::WALD, ids::SCORE_TEST]),
        )
}
