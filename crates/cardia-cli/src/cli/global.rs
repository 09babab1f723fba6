use cardia_config::GeneralConfig;
use clap::ValueEnum;

/// How command results are printed on stdout.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned columns; nested records are flattened.
    Table,
    /// One JSON document per line, for piping.
    Raw,
}

/// Which listing a row limit applies to. Each has its own configured default.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Listing {
    /// `data list`, `data filter`.
    Observations,
    /// `prediction list`.
    Predictions,
    /// `student list`, `course list`, `enroll list`.
    Registry,
}

impl Listing {
    const fn configured(self, general: &GeneralConfig) -> u32 {
        match self {
            Self::Observations => general.default_limit,
            Self::Predictions => general.history_limit,
            Self::Registry => general.registry_limit,
        }
    }
}

/// Flags accepted before or after any subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
}

impl GlobalFlags {
    /// Default tracing filter when `CARDIA_LOG` is unset.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }

    /// Row limit for one listing: the subcommand's `--limit`, then the global
    /// one, then the listing's configured default, capped at `max_limit`.
    #[must_use]
    pub fn limit_for(&self, local: Option<u32>, general: &GeneralConfig, listing: Listing) -> u32 {
        let requested = local
            .or(self.limit)
            .unwrap_or_else(|| listing.configured(general));
        if requested > general.max_limit {
            tracing::warn!(requested, max = general.max_limit, ?listing, "limit capped");
        }
        requested.min(general.max_limit)
    }
}
