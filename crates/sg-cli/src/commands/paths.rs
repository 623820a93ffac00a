use sg_core::validate::{GuidePath, paths, section_paths};
use sg_core::{Guide, SectionKey};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PathsArgs;
use crate::output::{Tabular, output_rows};

impl Tabular for GuidePath<'_> {
    const HEADERS: &'static [&'static str] = &["section", "answers", "tests", "notes"];

    fn cells(&self) -> Vec<String> {
        let tests = self
            .recommendation
            .stages()
            .map(|stage| stage.test_ids.join(", "))
            .collect::<Vec<_>>()
            .join(" then ");
        let notes = self
            .recommendation
            .stages()
            .filter_map(|stage| stage.notes)
            .collect::<Vec<_>>()
            .join(" ");
        let notes = if notes.is_empty() {
            "-".to_string()
        } else {
            notes
        };
        vec![self.section.to_string(), self.keys(), tests, notes]
    }
}

/// Handle `statguide paths`.
pub fn handle(args: &PathsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let guide = Guide::standard();
    let rows = match args.section.as_deref() {
        Some(key) => {
            let section = SectionKey::from_key(key)?;
            section_paths(section.key(), guide.start(section.key())?)
        }
        None => paths(&guide),
    };
    tracing::debug!(paths = rows.len(), "enumerated answer paths");
    output_rows(&rows, flags.format)
}
