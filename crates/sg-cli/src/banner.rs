use std::io::{self, Write};

const NOTES: &str = "\
IMPORTANT NOTES:
*   Assumptions are Key: Always check the assumptions of the chosen test.
    Violating assumptions can lead to incorrect conclusions.
*   Sample Size: Some tests are better suited for small or large sample sizes.
    This guide provides some hints, but it's a critical consideration.
*   Post-Hoc Tests: If an ANOVA or Kruskal-Wallis test is significant for 3+ groups,
    you'll need post-hoc tests (e.g., Tukey's, Dunn's) to see *which* specific
    groups differ. These aren't listed as separate primary tests but are crucial follow-ups.
*   Multiple Comparisons: If you perform many tests, the chance of a false positive
    (Type I error) increases. Consider adjustments like Bonferroni correction or
    False Discovery Rate (FDR) control.
*   This is a Guide: Complex research designs might require more nuanced choices
    or combinations of tests. When in doubt, consult a statistician.
*   Effect Size: Significance (p-value) doesn't tell you the magnitude or
    practical importance of an effect. Always report and interpret effect sizes.
*   Data Exploration: Before testing, always explore your data visually
    (histograms, boxplots, scatterplots) and with descriptive statistics.
*   (P) marks a Parametric test, (NP) a Non-Parametric test, where relevant.";

/// Welcome text and usage notes, printed once before the first question.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nWelcome to the Statistical Test Guide!")?;
    writeln!(out, "Let's find a suitable test for your data.")?;
    writeln!(out, "{}", "-".repeat(51))?;
    writeln!(out, "{NOTES}")?;
    writeln!(out, "{}", "-".repeat(80))
}

#[cfg(test)]
mod tests {
    use super::write_banner;

    #[test]
    fn banner_welcomes_then_lists_notes() {
        let mut out = Vec::new();
        write_banner(&mut out).expect("writes");
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.starts_with("\nWelcome to the Statistical Test Guide!\n"));
        assert!(text.contains("IMPORTANT NOTES:"));
        assert!(text.contains("Bonferroni"));
        assert!(text.trim_end().ends_with(&"-".repeat(80)));
    }
}
