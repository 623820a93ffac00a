use serde::Serialize;
use sg_core::engine::MAX_DEPTH;
use sg_core::validate::validate;
use sg_core::{Catalog, Guide, ValidationReport};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::{Tabular, output_record, output_rows};

#[derive(Debug, Serialize)]
struct CheckRow {
    check: &'static str,
    status: &'static str,
    detail: String,
}

impl Tabular for CheckRow {
    const HEADERS: &'static [&'static str] = &["check", "status", "detail"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.check.to_string(),
            self.status.to_string(),
            self.detail.clone(),
        ]
    }
}

/// Handle `statguide check`. Fails when the tree has any defect.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let guide = Guide::standard();
    let report = validate(&guide, Catalog::standard());

    match flags.format {
        OutputFormat::Table => output_rows(&rows(&report), flags.format)?,
        OutputFormat::Json | OutputFormat::Raw => output_record(&report, flags.format)?,
    }

    if !report.is_clean() {
        anyhow::bail!("{} guide defect(s) found", report.defects.len());
    }
    Ok(())
}

fn rows(report: &ValidationReport) -> Vec<CheckRow> {
    let mut rows = vec![
        CheckRow {
            check: "sections",
            status: "ok",
            detail: format!("{} sections, {} questions", report.sections, report.nodes),
        },
        CheckRow {
            check: "paths",
            status: "ok",
            detail: format!("{} answer paths", report.paths),
        },
        CheckRow {
            check: "depth",
            status: if report.max_depth <= MAX_DEPTH {
                "ok"
            } else {
                "failed"
            },
            detail: format!(
                "deepest path asks {} of at most {MAX_DEPTH} questions",
                report.max_depth
            ),
        },
    ];

    if report.is_clean() {
        rows.push(CheckRow {
            check: "defects",
            status: "ok",
            detail: "none".to_string(),
        });
    }
    rows.extend(report.defects.iter().map(|defect| CheckRow {
        check: defect.kind(),
        status: "failed",
        detail: defect.to_string(),
    }));
    rows
}
