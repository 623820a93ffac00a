use clap::{Args, Subcommand};

/// Top-level command tree. Running without a command starts a consultation.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Walk through the questions and get a test recommendation.
    Consult(ConsultArgs),
    /// List catalog entries, or show one by exact id.
    Catalog(CatalogArgs),
    /// Enumerate every answer path and where it leads.
    Paths(PathsArgs),
    /// Validate the decision tree against the catalog.
    Check,
}

#[derive(Clone, Debug, Args)]
pub struct ConsultArgs {
    /// Skip the research-goal menu and start at a section (a-h)
    #[arg(short, long)]
    pub section: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Exact test id, e.g. "Welch's t-test"
    pub id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PathsArgs {
    /// Only enumerate one section (a-h)
    #[arg(short, long)]
    pub section: Option<String>,
}
