use catalog_views::application::dto::{OutputFormat, ViewKind};
use clap::Parser;
use std::path::PathBuf;

/// Build attestation coverage and rating views from a catalog snapshot
#[derive(Parser, Debug)]
#[command(name = "catalog-views")]
#[command(version)]
#[command(
    about = "Build attestation coverage and rating views from a catalog snapshot",
    long_about = None
)]
pub struct Args {
    /// Directory holding the snapshot JSON files
    #[arg(short, long, default_value = ".")]
    pub snapshot: PathBuf,

    /// Views to build: attestation, ratings or all
    #[arg(short, long)]
    pub view: Option<ViewKind>,

    /// Attested entity kind whose runs count towards coverage (e.g. LOGICAL_DATA_FLOW)
    #[arg(short = 'k', long = "kind", value_name = "ATTESTED_ENTITY_KIND")]
    pub kind: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to catalog-views.config.yml in the snapshot directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when any application was never attested
    #[arg(long)]
    pub require_attested: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["catalog-views"]).unwrap();
        assert_eq!(args.snapshot, PathBuf::from("."));
        assert!(args.view.is_none());
        assert!(args.kind.is_none());
        assert!(args.format.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(!args.require_attested);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "catalog-views",
            "-s",
            "data",
            "-v",
            "ratings",
            "-k",
            "PHYSICAL_FLOW",
            "-f",
            "md",
            "-o",
            "out.md",
            "-c",
            "views.yml",
            "--require-attested",
        ])
        .unwrap();

        assert_eq!(args.snapshot, PathBuf::from("data"));
        assert_eq!(args.view, Some(ViewKind::Ratings));
        assert_eq!(args.kind.as_deref(), Some("PHYSICAL_FLOW"));
        assert_eq!(args.format, Some(OutputFormat::Markdown));
        assert_eq!(args.output, Some(PathBuf::from("out.md")));
        assert_eq!(args.config, Some(PathBuf::from("views.yml")));
        assert!(args.require_attested);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let result = Args::try_parse_from(["catalog-views", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_view_is_rejected() {
        let result = Args::try_parse_from(["catalog-views", "--view", "flows"]);
        assert!(result.is_err());
    }
}
