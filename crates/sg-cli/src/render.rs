//! Plain-text rendering of recommendations for the console.

use std::io::{self, Write};

use sg_core::{Catalog, Recommendation, TestEntry};

const POST_HOC_NOTE: &str = "NOTE: If this test is significant for 3+ groups, follow up with appropriate post-hoc tests (e.g., Tukey's HSD, Dunn's test) to identify which specific groups differ.";

const CLOSING: &str =
    "End of consultation. Remember to verify test assumptions and consider effect sizes!";

/// Acknowledgment prompt printed after the closing reminder.
pub const PAUSE: &str = "\nPress Enter to close this window...";

/// Name shown in the block heading: id, alternate names, and the
/// parametric marker.
pub fn display_name(entry: &TestEntry) -> String {
    let parenthesized = |text: &str| format!(" ({text})");
    let abbreviation = entry.abbreviation.map(parenthesized).unwrap_or_default();
    let aliases = entry
        .aliases
        .iter()
        .map(|alias| format!(" (or {alias})"))
        .collect::<String>();
    let usage = entry.usage.map(parenthesized).unwrap_or_default();
    let marker = entry.kind.marker().map(parenthesized).unwrap_or_default();
    format!("{}{abbreviation}{aliases}{usage}{marker}", entry.id)
}

/// Write every stage of a recommendation as its own block.
pub fn write_recommendation<W: Write>(
    out: &mut W,
    recommendation: &Recommendation,
    catalog: &Catalog,
) -> io::Result<()> {
    for stage in recommendation.stages() {
        write_stage(out, stage, catalog)?;
    }
    Ok(())
}

fn write_stage<W: Write>(out: &mut W, stage: &Recommendation, catalog: &Catalog) -> io::Result<()> {
    writeln!(out, "\n--- Recommendation ---")?;
    if stage.test_ids.is_empty() {
        writeln!(
            out,
            "Could not determine a specific test with the provided path. Please review your choices or consult a statistician."
        )?;
    } else {
        writeln!(out, "Based on your answers, suitable test(s) might be:")?;
        for id in &stage.test_ids {
            write_test(out, id, catalog)?;
        }
        if stage.calls_for_post_hoc() {
            writeln!(out, "\n  {POST_HOC_NOTE}")?;
        }
    }
    if let Some(notes) = stage.notes {
        writeln!(out, "\nAdditional Notes from guide: {notes}")?;
    }
    writeln!(out, "----------------------")
}

fn write_test<W: Write>(out: &mut W, id: &str, catalog: &Catalog) -> io::Result<()> {
    let entry = match catalog.lookup(id) {
        Ok(entry) => entry,
        Err(error) => {
            tracing::warn!(test_id = id, %error, "recommended test has no catalog entry");
            writeln!(out, "\n  >>> {id} <<<")?;
            return writeln!(
                out,
                "    (Summary for '{id}' is not yet available in the guide.)"
            );
        }
    };

    writeln!(out, "\n  >>> {} <<<", display_name(entry))?;
    writeln!(out, "    Purpose: {}", entry.purpose)?;
    if entry.assumptions.is_empty() {
        return writeln!(
            out,
            "    (Key assumptions not detailed for this entry yet)."
        );
    }
    writeln!(out, "    Key Assumptions:")?;
    for assumption in entry.assumptions {
        writeln!(out, "      - {assumption}")?;
    }
    Ok(())
}

/// Shown when a traversal ends without reaching a recommendation.
pub fn write_no_recommendation<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "\nNo specific test identified for this path yet, or the path is incomplete in this guide."
    )?;
    writeln!(
        out,
        "Please review your choices or consult a statistician for complex scenarios."
    )
}

pub fn write_closing<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{CLOSING}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sg_core::catalog::ids;
    use sg_core::{Catalog, Recommendation};

    use super::{display_name, write_no_recommendation, write_recommendation};

    fn rendered(recommendation: &Recommendation) -> String {
        let mut out = Vec::new();
        write_recommendation(&mut out, recommendation, Catalog::standard()).expect("writes");
        String::from_utf8(out).expect("utf-8")
    }

    #[test]
    fn display_name_carries_aliases_and_marker() {
        let catalog = Catalog::standard();
        let mann_whitney = catalog.lookup(ids::MANN_WHITNEY_U).expect("cataloged");
        assert_eq!(
            display_name(mann_whitney),
            "Mann-Whitney U Test (or Wilcoxon Rank-Sum Test) (NP)"
        );
        let fisher = catalog.lookup(ids::FISHERS_EXACT).expect("cataloged");
        assert_eq!(display_name(fisher), "Fisher's Exact Test");
    }

    #[test]
    fn display_name_carries_abbreviation_and_usage() {
        let catalog = Catalog::standard();
        let lrt = catalog.lookup(ids::LIKELIHOOD_RATIO).expect("cataloged");
        assert_eq!(display_name(lrt), "Likelihood Ratio Test (LRT)");
        let mcnemar = catalog.lookup(ids::MCNEMAR).expect("cataloged");
        assert_eq!(
            display_name(mcnemar),
            "McNemar's Test (for 2x2 tables, binary outcome, two related groups/times)"
        );
        let simple = catalog
            .lookup(ids::SIMPLE_LINEAR_REGRESSION)
            .expect("cataloged");
        assert_eq!(
            display_name(simple),
            "Simple Linear Regression (F-test for model, t-tests for coefficients) (P)"
        );
    }

    #[test]
    fn block_lists_purpose_and_assumptions() {
        let out = rendered(&Recommendation::test(ids::WELCH_T_TEST));
        assert!(out.starts_with("\n--- Recommendation ---\nBased on your answers"));
        assert!(out.contains(">>> Welch's t-test"));
        assert!(out.contains("    Purpose: "));
        assert!(out.contains("    Key Assumptions:\n      - "));
        assert!(out.ends_with("----------------------\n"));
        assert!(!out.contains("post-hoc"));
    }

    #[test]
    fn anova_and_kruskal_wallis_get_post_hoc_note() {
        let out = rendered(&Recommendation::test(ids::KRUSKAL_WALLIS));
        assert!(out.contains("follow up with appropriate post-hoc tests"));
    }

    #[test]
    fn missing_catalog_id_prints_placeholder() {
        let out = rendered(&Recommendation::test("Unlisted Test"));
        assert!(out.contains(">>> Unlisted Test <<<"));
        assert!(out.contains("(Summary for 'Unlisted Test' is not yet available in the guide.)"));
    }

    #[test]
    fn notes_follow_the_tests() {
        let out = rendered(
            &Recommendation::tests(&[ids::AUGMENTED_DICKEY_FULLER, ids::KPSS])
                .with_notes("Use both."),
        );
        let kpss = out.find(">>> KPSS Test").expect("kpss block");
        let notes = out
            .find("Additional Notes from guide: Use both.")
            .expect("notes");
        assert!(kpss < notes);
    }

    #[test]
    fn each_stage_is_its_own_block() {
        let out = rendered(
            &Recommendation::test(ids::KOLMOGOROV_SMIRNOV_TWO_SAMPLE)
                .followed_by(Recommendation::test(ids::MOODS_MEDIAN)),
        );
        assert_eq!(out.matches("--- Recommendation ---").count(), 2);
        let ks = out.find("Kolmogorov-Smirnov Two-sample").expect("ks");
        let mood = out.find("Mood's Median Test").expect("mood");
        assert!(ks < mood);
    }

    #[test]
    fn empty_stage_says_no_test_determined() {
        let out = rendered(&Recommendation::tests(&[]));
        assert!(out.contains("Could not determine a specific test"));
    }

    #[test]
    fn no_recommendation_message() {
        let mut out = Vec::new();
        write_no_recommendation(&mut out).expect("writes");
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("No specific test identified for this path yet"));
    }
}
