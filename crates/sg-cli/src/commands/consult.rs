use std::io::{self, BufRead, Write};

use sg_config::SessionConfig;
use sg_core::{Catalog, Guide, GuideError, Outcome};

use crate::console::ConsoleAnswers;
use crate::{banner, render};

/// Handle `statguide` and `statguide consult`.
pub fn handle(section: Option<&str>, config: &SessionConfig) -> anyhow::Result<()> {
    let guide = Guide::standard();
    consult(
        &guide,
        Catalog::standard(),
        section,
        config,
        io::stdin().lock(),
        io::stdout().lock(),
    )
}

/// Run one consultation over arbitrary input and output streams.
///
/// End of input mid-session is not an error: the closing reminder is still
/// printed and the acknowledgment pause is skipped.
pub fn consult<R: BufRead, W: Write>(
    guide: &Guide,
    catalog: &Catalog,
    section: Option<&str>,
    config: &SessionConfig,
    input: R,
    output: W,
) -> anyhow::Result<()> {
    let mut session = match section {
        Some(key) => guide.session(key)?,
        None => guide.session_from_menu(),
    };
    tracing::debug!(section = section.unwrap_or("menu"), "starting consultation");

    let mut console = ConsoleAnswers::new(input, output, config.prompt.as_str());
    if config.show_banner {
        banner::write_banner(console.output())?;
    }

    let input_open = match session.drive(&mut console) {
        Ok(()) => {
            match session.outcome() {
                Outcome::Recommended(recommendation) => {
                    render::write_recommendation(console.output(), recommendation, catalog)?;
                }
                Outcome::NoRecommendation => render::write_no_recommendation(console.output())?,
            }
            true
        }
        Err(GuideError::InputClosed) => {
            tracing::info!(
                answers = session.history().len(),
                "input closed before a recommendation"
            );
            writeln!(console.output())?;
            false
        }
        Err(error) => return Err(error.into()),
    };

    render::write_closing(console.output())?;
    if input_open && config.pause_on_exit {
        console.pause(render::PAUSE)?;
    }
    console.output().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;
    use sg_config::SessionConfig;
    use sg_core::{Catalog, DecisionNode, Guide, GuideError};

    use super::consult;

    fn quiet_session() -> SessionConfig {
        SessionConfig {
            show_banner: false,
            pause_on_exit: false,
            ..SessionConfig::default()
        }
    }

    fn run(section: Option<&str>, config: &SessionConfig, input: &str) -> anyhow::Result<String> {
        let guide = Guide::standard();
        let mut out = Vec::new();
        consult(
            &guide,
            Catalog::standard(),
            section,
            config,
            Cursor::new(input.as_bytes()),
            &mut out,
        )?;
        Ok(String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn menu_session_reaches_recommendation() {
        let out = run(None, &quiet_session(), "g\n2\nn\n").expect("consultation");
        assert!(out.starts_with("\n1. What is your primary research goal?\n  a) Comparing groups"));
        assert!(out.contains(">>> Levene's Test"));
        assert!(out.contains(">>> Brown-Forsythe Test"));
        assert!(out.ends_with(
            "\nEnd of consultation. Remember to verify test assumptions and consider effect sizes!\n"
        ));
    }

    #[test]
    fn section_start_skips_the_menu() {
        let out = run(Some("h"), &quiet_session(), "nested\n").expect("consultation");
        assert!(!out.contains("primary research goal"));
        assert!(out.starts_with("\nH1. What is your specific need?"));
        assert!(out.contains(">>> Likelihood Ratio Test (LRT)"));
    }

    #[test]
    fn invalid_answer_reprompts_same_question() {
        let out = run(Some("f"), &quiet_session(), "  X \nCOMPARE_CURVES\n").expect("consultation");
        assert_eq!(out.matches("F1. What is your primary goal?").count(), 1);
        assert!(out.contains("Please choose from: compare_curves, model_predictors"));
        assert!(out.contains(">>> Log-Rank Test"));
    }

    #[test]
    fn median_follow_up_prints_both_blocks_after_answering() {
        let out = run(Some("d"), &quiet_session(), "2samp_dist\ny\n").expect("consultation");
        let question = out
            .find("specifically interested in testing if medians")
            .expect("asked");
        let ks = out
            .find(">>> Kolmogorov-Smirnov Two-sample")
            .expect("ks block");
        let mood = out.find(">>> Mood's Median Test").expect("mood block");
        assert!(question < ks && ks < mood);
        assert_eq!(out.matches("--- Recommendation ---").count(), 2);
    }

    #[test]
    fn end_of_input_still_says_goodbye() {
        let config = SessionConfig {
            show_banner: false,
            ..SessionConfig::default()
        };
        let out = run(Some("a"), &config, "1\n").expect("eof is not an error");
        assert!(!out.contains("--- Recommendation ---"));
        assert!(out.contains("End of consultation."));
        assert!(!out.contains("Press Enter"));
    }

    #[test]
    fn banner_and_pause_follow_config() {
        let out = run(Some("h"), &SessionConfig::default(), "params\n\n").expect("consultation");
        let welcomes = out.matches("Welcome to the Statistical Test Guide!");
        assert_eq!(welcomes.count(), 1);
        assert!(out.contains(">>> Wald Test"));
        assert!(out.ends_with("Press Enter to close this window..."));
    }

    #[test]
    fn unknown_section_aborts() {
        let error = run(Some("z"), &quiet_session(), "").expect_err("z is not a section");
        assert!(matches!(
            error.downcast_ref::<GuideError>(),
            Some(GuideError::UnknownSection { .. })
        ));
    }

    #[test]
    fn dead_end_prints_no_recommendation() {
        let dead_end = DecisionNode::new("a.x", "?");
        let entry = DecisionNode::new("a.entry", "Scale?").ask("1", "Dead end", dead_end);
        let guide = Guide::from_menu(DecisionNode::new("menu", "Goal?").ask("a", "Broken", entry));
        let mut out = Vec::new();
        consult(
            &guide,
            Catalog::standard(),
            Some("a"),
            &quiet_session(),
            Cursor::new("1\n".as_bytes()),
            &mut out,
        )
        .expect("consultation");
        let out = String::from_utf8(out).expect("utf-8");
        assert!(out.contains("No specific test identified for this path yet"));
    }
}
