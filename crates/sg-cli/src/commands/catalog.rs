use sg_core::{Catalog, TestEntry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CatalogArgs;
use crate::output::{Tabular, output_record, output_rows};

impl Tabular for TestEntry {
    const HEADERS: &'static [&'static str] = &["id", "kind", "purpose"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.kind.to_string(),
            self.purpose.to_string(),
        ]
    }
}

/// Handle `statguide catalog [ID]`.
pub fn handle(args: &CatalogArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let catalog = Catalog::standard();
    match args.id.as_deref() {
        Some(id) => output_record(catalog.lookup(id)?, flags.format),
        None => output_rows(catalog.entries(), flags.format),
    }
}
