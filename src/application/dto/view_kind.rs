/// Which catalog views to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    /// Attestation coverage grid and its summary
    Attestation,
    /// Ratings grouped by measurable kind
    Ratings,
    /// Both views (default)
    #[default]
    All,
}

impl ViewKind {
    pub fn includes_attestation(&self) -> bool {
        matches!(self, ViewKind::Attestation | ViewKind::All)
    }

    pub fn includes_ratings(&self) -> bool {
        matches!(self, ViewKind::Ratings | ViewKind::All)
    }
}

impl std::str::FromStr for ViewKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "attestation" | "attestations" => Ok(ViewKind::Attestation),
            "ratings" | "rating" => Ok(ViewKind::Ratings),
            "all" => Ok(ViewKind::All),
            _ => Err(format!(
                "Invalid view: {}. Please specify 'attestation', 'ratings' or 'all'",
                s
            )),
        }
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Attestation => write!(f, "attestation"),
            ViewKind::Ratings => write!(f, "ratings"),
            ViewKind::All => write!(f, "all"),
        }
    }
}
