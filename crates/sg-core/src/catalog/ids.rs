//! Catalog id constants.
//!
//! The decision tree references tests through these constants so a renamed
//! entry cannot silently leave a stale id behind in a branch.

// Group comparisons, continuous outcome
pub const ONE_SAMPLE_T_TEST: &str = "One-Sample t-test";
pub const TWO_SAMPLE_T_TEST: &str = "Two-Sample t-test";
pub const WELCH_T_TEST: &str = "Welch's t-test";
pub const PAIRED_T_TEST: &str = "Paired t-test";
pub const ONE_WAY_ANOVA: &str = "One-Way ANOVA";
pub const TWO_WAY_ANOVA: &str = "Two-Way ANOVA";
pub const REPEATED_MEASURES_ANOVA: &str = "Repeated Measures ANOVA";
pub const ANCOVA: &str = "ANCOVA";
pub const Z_TEST_MEANS: &str = "Z-test for Means";
pub const MANN_WHITNEY_U: &str = "Mann-Whitney U Test";
pub const WILCOXON_SIGNED_RANK: &str = "Wilcoxon Signed-Rank Test";
pub const KRUSKAL_WALLIS: &str = "Kruskal-Wallis H Test";
pub const FRIEDMAN: &str = "Friedman Test";
pub const SIGN_TEST: &str = "Sign Test";
pub const JONCKHEERE_TERPSTRA: &str = "Jonckheere-Terpstra Test";
pub const MOODS_MEDIAN: &str = "Mood's Median Test";

// Categorical outcome
pub const CHI_SQUARED_GOODNESS_OF_FIT: &str = "Chi-squared Goodness-of-Fit Test";
pub const CHI_SQUARED_INDEPENDENCE: &str = "Chi-squared Test of Independence";
pub const FISHERS_EXACT: &str = "Fisher's Exact Test";
pub const MCNEMAR: &str = "McNemar's Test";
pub const COCHRANS_Q: &str = "Cochran's Q Test";
pub const BINOMIAL: &str = "Binomial Test";
pub const Z_TEST_ONE_PROPORTION: &str = "One-sample Z-test for Proportions";
pub const Z_TEST_TWO_PROPORTIONS: &str = "Two-sample Z-test for Proportions";
pub const COCHRAN_ARMITAGE: &str = "Cochran-Armitage Test for Trend";

// Relationships
pub const PEARSON: &str = "Pearson Correlation";
pub const SPEARMAN: &str = "Spearman Rank Correlation";
pub const KENDALLS_TAU: &str = "Kendall's Tau";

// Regression
pub const SIMPLE_LINEAR_REGRESSION: &str = "Simple Linear Regression";
pub const MULTIPLE_LINEAR_REGRESSION: &str = "Multiple Linear Regression";
pub const LOGISTIC_REGRESSION: &str = "Logistic Regression";
pub const POISSON_REGRESSION: &str = "Poisson Regression";
pub const NEGATIVE_BINOMIAL_REGRESSION: &str = "Negative Binomial Regression";
pub const ORDINAL_LOGISTIC_REGRESSION: &str = "Ordinal Logistic Regression";

// Variances
pub const F_TEST_VARIANCES: &str = "F-test for Equality of Variances";
pub const LEVENE: &str = "Levene's Test";
pub const BARTLETT: &str = "Bartlett's Test";
pub const BROWN_FORSYTHE: &str = "Brown-Forsythe Test";

// Distributional fit
pub const SHAPIRO_WILK: &str = "Shapiro-Wilk Test";
pub const KOLMOGOROV_SMIRNOV_ONE_SAMPLE: &str = "Kolmogorov-Smirnov One-sample";
pub const KOLMOGOROV_SMIRNOV_TWO_SAMPLE: &str = "Kolmogorov-Smirnov Two-sample";
pub const ANDERSON_DARLING: &str = "Anderson-Darling Test";
pub const LILLIEFORS: &str = "Lilliefors Test";

// Time series
pub const DURBIN_WATSON: &str = "Durbin-Watson Test";
pub const LJUNG_BOX: &str = "Ljung-Box Test";
pub const AUGMENTED_DICKEY_FULLER: &str = "Augmented Dickey-Fuller Test";
pub const KPSS: &str = "KPSS Test";

// Survival
pub const LOG_RANK: &str = "Log-Rank Test";
pub const COX_PROPORTIONAL_HAZARDS: &str = "Cox Proportional Hazards Model";

// Model comparison
pub const LIKELIHOOD_RATIO: &str = "Likelihood Ratio Test";
pub const WALD: &str = "Wald Test";
pub const SCORE_TEST: &str = "Score Test";
