//! The standard catalog table.

use super::TestKind::{General, NonParametric, Parametric};
use super::{TestEntry, ids};

/// Every test the guide can recommend, in reference order.
pub static STANDARD_ENTRIES: &[TestEntry] = &[
    TestEntry {
        id: ids::ONE_SAMPLE_T_TEST,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests if the mean of a single sample is significantly different from a known or hypothesized population mean.",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Data are a random sample from the population.",
            "Observations are independent.",
            "Data are approximately normally distributed (or sample size is large, e.g., n > 30, by Central Limit Theorem).",
        ],
    },
    TestEntry {
        id: ids::TWO_SAMPLE_T_TEST,
        kind: Parametric,
        aliases: &["Independent t-test"],
        abbreviation: None,
        usage: None,
        purpose: "Compares the means of two independent groups to determine if there is a statistically significant difference between them.",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Two independent samples/groups.",
            "Observations are independent within and between groups.",
            "Data in each group are approximately normally distributed (or sample sizes are large).",
            "Homogeneity of variances (variances are equal in both groups - if not, Welch's t-test is used).",
        ],
    },
    TestEntry {
        id: ids::WELCH_T_TEST,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares the means of two independent groups when the assumption of equal variances is violated.",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Two independent samples/groups.",
            "Observations are independent within and between groups.",
            "Data in each group are approximately normally distributed (or sample sizes are large).",
            "(Does NOT assume homogeneity of variances).",
        ],
    },
    TestEntry {
        id: ids::PAIRED_T_TEST,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares the means of the same group or item at two different time points or under two different conditions (paired data).",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Data are paired (e.g., before-after measurements on the same subject).",
            "The differences between the paired observations are approximately normally distributed (or sample size of pairs is large).",
            "Pairs are a random sample from the population of pairs.",
            "Observations within pairs are dependent, but pairs themselves are independent.",
        ],
    },
    TestEntry {
        id: ids::ONE_WAY_ANOVA,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares the means of three or more independent groups to determine if at least one group mean is different from the others.",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Three or more independent categorical groups.",
            "Observations are independent within and between groups.",
            "Data in each group are approximately normally distributed (or sample sizes in groups are adequate).",
            "Homogeneity of variances (variances are equal across all groups - check with Levene's or Bartlett's test).",
        ],
    },
    TestEntry {
        id: ids::TWO_WAY_ANOVA,
        kind: Parametric,
        aliases: &["Higher-way ANOVA"],
        abbreviation: None,
        usage: None,
        purpose: "Examines the effect of two (or more) independent categorical variables (factors) on a continuous dependent variable, including their potential interaction effect.",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "Two or more independent categorical factors.",
            "Observations are independent.",
            "Data within each cell (combination of factor levels) are approximately normally distributed.",
            "Homogeneity of variances across all cells.",
        ],
    },
    TestEntry {
        id: ids::REPEATED_MEASURES_ANOVA,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares means across three or more time points or conditions for the same subjects (within-subjects design).",
        assumptions: &[
            "Dependent variable is continuous (interval/ratio).",
            "One within-subjects factor with three or more levels (conditions/time points).",
            "Observations are dependent (same subjects).",
            "The differences between levels are multivariate normally distributed.",
            "Sphericity (variances of the differences between all pairs of levels are equal). If violated, corrections like Greenhouse-Geisser or Huynh-Feldt are used.",
        ],
    },
    TestEntry {
        id: ids::ANCOVA,
        kind: Parametric,
        aliases: &["Analysis of Covariance"],
        abbreviation: None,
        usage: None,
        purpose: "Combines ANOVA and regression to compare means of groups on a dependent variable while statistically controlling for the effect of one or more continuous covariates.",
        assumptions: &[
            "All assumptions of ANOVA (normality, homogeneity of variances, independence of errors for DV within groups).",
            "Linear relationship between the covariate(s) and the dependent variable.",
            "Homogeneity of regression slopes (the relationship between covariate and DV is the same across all groups).",
            "Covariate is measured without error (or with negligible error).",
            "Covariate is independent of the treatment effect (grouping variable).",
        ],
    },
    TestEntry {
        id: ids::Z_TEST_MEANS,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests if a sample mean is significantly different from a known population mean when the population variance is known.",
        assumptions: &[
            "Dependent variable is continuous.",
            "Population variance (σ²) is known.",
            "Data are a random sample.",
            "Observations are independent.",
            "Data are normally distributed or sample size is large (n > 30).",
        ],
    },
    TestEntry {
        id: ids::MANN_WHITNEY_U,
        kind: NonParametric,
        aliases: &["Wilcoxon Rank-Sum Test"],
        abbreviation: None,
        usage: None,
        purpose: "Non-parametric alternative to the independent two-sample t-test. Compares the medians (or distributions) of two independent groups.",
        assumptions: &[
            "Dependent variable is at least ordinal (or continuous but not normally distributed).",
            "Two independent samples/groups.",
            "Observations are independent.",
            "For testing medians specifically, assumes distributions have similar shapes (otherwise tests for stochastic dominance).",
        ],
    },
    TestEntry {
        id: ids::WILCOXON_SIGNED_RANK,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Non-parametric alternative to the paired t-test or one-sample t-test. Compares medians for paired data or a single sample median against a hypothesized value.",
        assumptions: &[
            "Dependent variable is at least ordinal (or continuous but differences not normal).",
            "Data are paired (for paired version) or a single sample.",
            "The distribution of the differences (for paired) or data (for one-sample) is symmetric (for testing median).",
            "Observations are independent (between pairs or for single sample).",
        ],
    },
    TestEntry {
        id: ids::KRUSKAL_WALLIS,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Non-parametric alternative to one-way ANOVA. Compares the medians (or distributions) of three or more independent groups.",
        assumptions: &[
            "Dependent variable is at least ordinal (or continuous but assumptions for ANOVA violated).",
            "Three or more independent categorical groups.",
            "Observations are independent.",
            "For testing medians specifically, assumes distributions in all groups have similar shapes.",
        ],
    },
    TestEntry {
        id: ids::FRIEDMAN,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Non-parametric alternative to repeated measures ANOVA. Compares medians across three or more related groups or conditions.",
        assumptions: &[
            "Dependent variable is at least ordinal.",
            "Data consist of k >= 3 related groups/conditions (e.g., same subject under different treatments, or multiple raters rating same items).",
            "Observations are ranks within each block (subject/rater).",
            "No interaction between blocks and treatments is assumed.",
        ],
    },
    TestEntry {
        id: ids::SIGN_TEST,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "A simple non-parametric test for consistent differences between pairs of observations (e.g., positive vs. negative change) or if a single sample median is different from a hypothesized value. Only considers the direction of differences, not magnitude.",
        assumptions: &[
            "Data are paired (for paired version) or a single sample.",
            "Variable is at least ordinal, allowing for direction of difference.",
            "Observations are independent (between pairs or in the single sample).",
        ],
    },
    TestEntry {
        id: ids::JONCKHEERE_TERPSTRA,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests for an ordered difference (trend) among medians of three or more independent groups when the groups themselves have a natural ordering (e.g., increasing dose levels).",
        assumptions: &[
            "Dependent variable is at least ordinal.",
            "Independent variable defines three or more groups that are ordered a priori.",
            "Independent samples.",
            "Assumes a monotonic trend across group medians.",
        ],
    },
    TestEntry {
        id: ids::MOODS_MEDIAN,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests if the medians of two or more independent groups are equal. It is a specific application of the Chi-squared test on counts above/below the overall median.",
        assumptions: &[
            "Dependent variable is continuous (or ordinal with many levels).",
            "Two or more independent samples/groups.",
            "Observations are independent.",
            "Less powerful than Mann-Whitney U or Kruskal-Wallis for detecting shifts if their assumptions hold.",
        ],
    },
    TestEntry {
        id: ids::CHI_SQUARED_GOODNESS_OF_FIT,
        kind: General,
        aliases: &["χ² Goodness-of-Fit Test"],
        abbreviation: None,
        usage: None,
        purpose: "Tests if the observed frequencies of a single categorical variable match expected frequencies from a hypothesized distribution.",
        assumptions: &[
            "Data are categorical (nominal or ordinal).",
            "Observations are independent.",
            "Sample size is reasonably large (e.g., expected frequency in each category ≥ 5 for reliability of chi-squared approximation).",
        ],
    },
    TestEntry {
        id: ids::CHI_SQUARED_INDEPENDENCE,
        kind: General,
        aliases: &["χ² Test of Association"],
        abbreviation: None,
        usage: None,
        purpose: "Tests if two categorical variables are associated or independent by comparing observed frequencies in a contingency table to expected frequencies under the null hypothesis of independence.",
        assumptions: &[
            "Both variables are categorical (nominal or ordinal).",
            "Observations are independent.",
            "Data are from a random sample.",
            "Sample size is reasonably large (e.g., expected frequency in each cell of the contingency table ≥ 5 for most cells, and no cell < 1).",
        ],
    },
    TestEntry {
        id: ids::FISHERS_EXACT,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests for independence between two categorical variables in a 2x2 contingency table, especially useful when sample sizes are small and expected cell counts are low (violating Chi-squared assumptions).",
        assumptions: &[
            "Both variables are categorical and dichotomous (2x2 table).",
            "Observations are independent.",
            "Row and column totals are considered fixed (conditional test).",
        ],
    },
    TestEntry {
        id: ids::MCNEMAR,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("for 2x2 tables, binary outcome, two related groups/times"),
        purpose: "Tests for changes in proportions for paired categorical data (binary outcome measured twice on the same subject, or matched pairs). Focuses on discordant pairs.",
        assumptions: &[
            "Data are paired and categorical (binary).",
            "Sample is random.",
            "Nominal scale of data.",
        ],
    },
    TestEntry {
        id: ids::COCHRANS_Q,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "An extension of McNemar's test for three or more related categorical variables (binary responses) from the same subjects or matched sets. Tests if the proportion of 'successes' is equal across conditions.",
        assumptions: &[
            "Dependent variable is binary (0/1).",
            "Three or more related groups/conditions.",
            "Data are arranged in blocks (e.g., subjects).",
            "Random sample of blocks.",
        ],
    },
    TestEntry {
        id: ids::BINOMIAL,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests if the proportion of successes in a series of independent Bernoulli trials matches a hypothesized population proportion.",
        assumptions: &[
            "Data consist of 'n' independent trials.",
            "Each trial has only two possible outcomes (success/failure).",
            "The probability of success (p) is constant for each trial.",
        ],
    },
    TestEntry {
        id: ids::Z_TEST_ONE_PROPORTION,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Large N"),
        purpose: "Tests if a sample proportion is significantly different from a hypothesized population proportion, using a normal approximation for large samples.",
        assumptions: &[
            "Data are binary.",
            "Random sample.",
            "Observations are independent.",
            "Large sample size (typically np ≥ 10 and n(1-p) ≥ 10 for normal approximation to hold).",
        ],
    },
    TestEntry {
        id: ids::Z_TEST_TWO_PROPORTIONS,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Large N, often equivalent to Chi-squared for 2x2"),
        purpose: "Compares proportions from two independent groups, using a normal approximation for large samples. Often equivalent to the Chi-squared test for a 2x2 table.",
        assumptions: &[
            "Data are binary for both groups.",
            "Two independent random samples.",
            "Observations are independent.",
            "Large sample sizes in both groups (e.g., n1*p1, n1*(1-p1), n2*p2, n2*(1-p2) all ≥ 5 or 10).",
        ],
    },
    TestEntry {
        id: ids::COCHRAN_ARMITAGE,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("for ordered trend"),
        purpose: "Tests for a linear trend in proportions across levels of an ordered categorical variable (e.g., does proportion of 'yes' increase with dose level?).",
        assumptions: &[
            "One variable is binary (outcome).",
            "The other variable is categorical with ordered levels (exposure/group).",
            "Independent observations.",
            "Scores are assigned to the ordered categories to represent the trend.",
        ],
    },
    TestEntry {
        id: ids::PEARSON,
        kind: Parametric,
        aliases: &["Pearson Correlation Coefficient"],
        abbreviation: None,
        usage: Some("test of significance"),
        purpose: "Measures the strength and direction of the linear relationship between two continuous variables. The test determines if this correlation is statistically different from zero.",
        assumptions: &[
            "Both variables are continuous (interval/ratio).",
            "Linear relationship between the two variables.",
            "Bivariate normality (observations are sampled from a bivariate normal distribution).",
            "Observations are independent.",
            "Homoscedasticity (variance of one variable is similar across all values of the other - visible in scatterplot).",
        ],
    },
    TestEntry {
        id: ids::SPEARMAN,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Measures the strength and direction of the monotonic (not necessarily linear) association between two ranked variables (or continuous variables converted to ranks).",
        assumptions: &[
            "Variables are at least ordinal (or continuous).",
            "Monotonic relationship.",
            "Observations are independent.",
            "Paired observations.",
        ],
    },
    TestEntry {
        id: ids::KENDALLS_TAU,
        kind: NonParametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Another non-parametric measure of rank correlation, assessing the strength of monotonic association. Often preferred for smaller datasets or data with many tied ranks.",
        assumptions: &[
            "Variables are at least ordinal.",
            "Monotonic relationship.",
            "Observations are independent.",
            "Paired observations.",
        ],
    },
    TestEntry {
        id: ids::SIMPLE_LINEAR_REGRESSION,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: Some("F-test for model, t-tests for coefficients"),
        purpose: "Models the linear relationship between one independent variable (predictor) and one continuous dependent variable (outcome). F-test checks overall model fit; t-tests check individual coefficient significance.",
        assumptions: &[
            "Linear relationship between IV and DV.",
            "Independent observations (residuals are independent).",
            "Homoscedasticity (constant variance of residuals across all levels of IV).",
            "Normality of residuals (errors are normally distributed).",
            "IV is measured without error (or error is negligible).",
        ],
    },
    TestEntry {
        id: ids::MULTIPLE_LINEAR_REGRESSION,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: Some("F-test for model, t-tests for coefficients"),
        purpose: "Models the linear relationship between multiple independent variables (predictors) and one continuous dependent variable (outcome). F-test checks overall model fit; t-tests check individual coefficient significance.",
        assumptions: &[
            "Linear relationship between each IV and the DV (after accounting for other IVs).",
            "Independent observations (residuals are independent).",
            "Homoscedasticity (constant variance of residuals).",
            "Normality of residuals.",
            "Absence of perfect multicollinearity among IVs (IVs are not perfectly correlated).",
            "IVs are measured without error (or error is negligible).",
        ],
    },
    TestEntry {
        id: ids::LOGISTIC_REGRESSION,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Likelihood Ratio Test, Wald Test, Score Test for model/coefficients"),
        purpose: "Models the probability of a binary outcome (0 or 1) based on one or more predictor variables (continuous or categorical). Model and coefficients are tested with the Likelihood Ratio, Wald, or Score test.",
        assumptions: &[
            "Dependent variable is binary (dichotomous).",
            "Independent observations.",
            "Linearity of the logit: The log-odds of the outcome are linearly related to continuous predictors.",
            "Absence of perfect multicollinearity among predictors.",
            "Sufficiently large sample size (e.g., rule of thumb 10-20 events per predictor variable).",
        ],
    },
    TestEntry {
        id: ids::POISSON_REGRESSION,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Likelihood Ratio Test, Wald Test, Score Test"),
        purpose: "Models count data (non-negative integers) based on one or more predictor variables. Assumes the mean and variance of the count are equal.",
        assumptions: &[
            "Dependent variable is a count (non-negative integers).",
            "Independent observations.",
            "The logarithm of the mean count is a linear function of the predictors (log-linear model).",
            "Equidispersion: The mean of the distribution is equal to its variance (E[Y] = Var[Y]).",
            "Events occur independently over a fixed period of time/space.",
        ],
    },
    TestEntry {
        id: ids::NEGATIVE_BINOMIAL_REGRESSION,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Likelihood Ratio Test, Wald Test, Score Test; handles overdispersion"),
        purpose: "Models count data, similar to Poisson regression, but is more flexible as it allows for overdispersion (variance greater than the mean).",
        assumptions: &[
            "Dependent variable is a count.",
            "Independent observations.",
            "Logarithm of the mean count is a linear function of predictors.",
            "Allows for overdispersion (variance > mean).",
        ],
    },
    TestEntry {
        id: ids::ORDINAL_LOGISTIC_REGRESSION,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Models an ordinal dependent variable (categories with a natural order) based on one or more predictor variables.",
        assumptions: &[
            "Dependent variable is ordinal.",
            "Independent observations.",
            "Proportional odds assumption (or parallel lines assumption): The effect of predictors is consistent across the different thresholds of the ordinal categories.",
            "Absence of perfect multicollinearity.",
        ],
    },
    TestEntry {
        id: ids::F_TEST_VARIANCES,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares the variances of two populations to determine if they are significantly different. Highly sensitive to violations of normality.",
        assumptions: &[
            "Data in both groups are approximately normally distributed.",
            "Independent samples.",
            "Observations are independent.",
        ],
    },
    TestEntry {
        id: ids::LEVENE,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests for equality of variances (homogeneity of variances) between two or more groups. More robust to non-normality than Bartlett's test or the F-test for variances.",
        assumptions: &[
            "Independent samples.",
            "Dependent variable is continuous.",
            "Tests absolute deviations (or squared deviations) from group means/medians using ANOVA.",
        ],
    },
    TestEntry {
        id: ids::BARTLETT,
        kind: Parametric,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests for equality of variances between two or more groups, assuming the data in each group are normally distributed. Sensitive to non-normality.",
        assumptions: &[
            "Data in each group are approximately normally distributed.",
            "Independent samples.",
            "Observations are independent.",
        ],
    },
    TestEntry {
        id: ids::BROWN_FORSYTHE,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "A modification of Levene's test for equality of variances, often considered more robust, especially when distributions are skewed. Uses ANOVA on absolute deviations from group medians.",
        assumptions: &["Independent samples.", "Dependent variable is continuous."],
    },
    TestEntry {
        id: ids::SHAPIRO_WILK,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests the null hypothesis that a sample of data came from a normally distributed population.",
        assumptions: &[
            "Data are a random sample.",
            "Observations are independent.",
            "Specifically designed for testing normality; often more powerful than other general goodness-of-fit tests for normality.",
        ],
    },
    TestEntry {
        id: ids::KOLMOGOROV_SMIRNOV_ONE_SAMPLE,
        kind: General,
        aliases: &["K-S Test (One-sample)"],
        abbreviation: None,
        usage: None,
        purpose: "Tests if a sample of data comes from a specific, fully specified continuous distribution (e.g., normal with given mean/SD, exponential, uniform).",
        assumptions: &[
            "Data are a random sample from a continuous distribution.",
            "The hypothesized distribution must be fully specified (parameters known, not estimated from data, for the standard K-S test). Lilliefors test is a modification for normality when mean/SD are estimated.",
        ],
    },
    TestEntry {
        id: ids::KOLMOGOROV_SMIRNOV_TWO_SAMPLE,
        kind: NonParametric,
        aliases: &["K-S Test (Two-sample)"],
        abbreviation: None,
        usage: None,
        purpose: "Tests if two independent samples come from the same underlying continuous distribution, without specifying what that distribution is. Sensitive to differences in location, scale, and shape.",
        assumptions: &[
            "Two independent random samples.",
            "Data are from continuous distributions (though can be used for discrete if care is taken with ties).",
        ],
    },
    TestEntry {
        id: ids::ANDERSON_DARLING,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests if a sample of data comes from a specific distribution (e.g., normal, exponential, Weibull). Often considered more powerful than K-S for detecting deviations in the tails of the distribution.",
        assumptions: &[
            "Data are a random sample.",
            "The specific distribution being tested against needs to be chosen.",
        ],
    },
    TestEntry {
        id: ids::LILLIEFORS,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "A modification of the Kolmogorov-Smirnov test specifically for testing normality when the mean and variance of the population are unknown and are estimated from the sample data.",
        assumptions: &["Data are a random sample.", "Testing for normality."],
    },
    TestEntry {
        id: ids::DURBIN_WATSON,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Tests for first-order autocorrelation (serial correlation) in the residuals from a regression analysis.",
        assumptions: &[
            "Regression model has been fitted.",
            "Errors are normally distributed.",
            "Regressors are non-stochastic (fixed).",
            "The test is for first-order autocorrelation (AR(1) process).",
        ],
    },
    TestEntry {
        id: ids::LJUNG_BOX,
        kind: General,
        aliases: &["Box-Pierce Test"],
        abbreviation: None,
        usage: None,
        purpose: "Tests for overall autocorrelation (up to a specified number of lags) in a time series or in the residuals of a time series model. Tests if a group of autocorrelations are different from zero.",
        assumptions: &[
            "Time series data.",
            "Null hypothesis is that the data are independently distributed (no serial correlation).",
        ],
    },
    TestEntry {
        id: ids::AUGMENTED_DICKEY_FULLER,
        kind: General,
        aliases: &[],
        abbreviation: Some("ADF"),
        usage: None,
        purpose: "Tests for a unit root in a time series sample, which is a common way to test for stationarity. The null hypothesis is that a unit root is present (the series is non-stationary).",
        assumptions: &[
            "Time series data.",
            "The underlying model can be an AR(p) process. The 'augmented' part adds lagged difference terms to handle more complex dynamics.",
        ],
    },
    TestEntry {
        id: ids::KPSS,
        kind: General,
        aliases: &["Kwiatkowski-Phillips-Schmidt-Shin Test"],
        abbreviation: None,
        usage: None,
        purpose: "Another test for stationarity in a time series. Unlike ADF, the null hypothesis of the KPSS test is that the series is stationary (around a deterministic trend or level).",
        assumptions: &[
            "Time series data.",
            "Null hypothesis can be level stationarity or trend stationarity.",
        ],
    },
    TestEntry {
        id: ids::LOG_RANK,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "Compares the survival distributions of two or more independent groups (e.g., treatment vs. control). Tests the null hypothesis that there is no difference in survival between the groups over time.",
        assumptions: &[
            "Two or more independent groups.",
            "Survival times are accurately measured and censoring is non-informative (censoring reasons are unrelated to survival probability).",
            "Proportional hazards: The hazard ratio between groups is assumed to be constant over time (though log-rank is somewhat robust to violations, especially if hazards don't cross).",
        ],
    },
    TestEntry {
        id: ids::COX_PROPORTIONAL_HAZARDS,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: Some("Wald/Likelihood Ratio tests for coefficients"),
        purpose: "A semi-parametric regression model for survival data that examines the effect of predictor variables (covariates) on the hazard rate, without assuming a specific baseline hazard function. Coefficients are tested with Wald or Likelihood Ratio tests.",
        assumptions: &[
            "Proportional hazards: The effect of covariates on the hazard is multiplicative and constant over time (hazard ratio is constant).",
            "Independent observations (or use robust standard errors for clustered data).",
            "Linearity of continuous covariates on the log-hazard scale.",
            "Non-informative censoring.",
        ],
    },
    TestEntry {
        id: ids::LIKELIHOOD_RATIO,
        kind: General,
        aliases: &[],
        abbreviation: Some("LRT"),
        usage: None,
        purpose: "A general statistical test used for comparing the fit of two nested statistical models (one model is a simpler, restricted version of the other). Tests if the more complex model provides a significantly better fit.",
        assumptions: &[
            "Models are estimated using maximum likelihood.",
            "The simpler model is nested within the more complex model.",
            "Certain regularity conditions hold for the likelihood functions.",
        ],
    },
    TestEntry {
        id: ids::WALD,
        kind: General,
        aliases: &[],
        abbreviation: None,
        usage: None,
        purpose: "A general statistical test used for assessing the significance of parameters in a statistical model (e.g., regression coefficients). Tests if a parameter is significantly different from a hypothesized value (often zero).",
        assumptions: &[
            "Parameter estimates are approximately normally distributed (often relies on large sample theory and maximum likelihood estimation).",
            "The variance-covariance matrix of the parameter estimates is known or can be consistently estimated.",
        ],
    },
    TestEntry {
        id: ids::SCORE_TEST,
        kind: General,
        aliases: &["Lagrange Multiplier Test"],
        abbreviation: None,
        usage: None,
        purpose: "Another general test for model parameters or model specification. Often used when models are harder to fit under the alternative hypothesis, as it only requires estimation under the null hypothesis.",
        assumptions: &[
            "Relies on properties of the score function (gradient of the log-likelihood).",
            "Often used for testing omitted variables or other restrictions in a model.",
        ],
    },
];
