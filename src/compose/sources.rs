//! Artifact source capability layer.
//!
//! Table and visual artifacts come from external engines. Sources are
//! registered per concern in preference order; extraction walks the
//! chain, falling back to the next source when one fails or produces
//! nothing, and to an empty result when the chain is exhausted.

use std::sync::Arc;

use crate::error::Result;
use crate::model::Artifact;

/// A collaborator that produces table artifacts for a page.
pub trait TableSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Extract table artifacts for the given page (1-indexed).
    fn extract(&self, page_number: u32) -> Result<Vec<Artifact>>;
}

/// A collaborator that produces visual (chart/image) artifacts for a page.
pub trait VisualSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Extract visual artifacts for the given page (1-indexed).
    fn extract(&self, page_number: u32) -> Result<Vec<Artifact>>;
}

/// Typed result of running one concern's source chain for a page.
///
/// Distinguishes "nothing found" from "extraction failed" from "no
/// source configured", so callers are not forced into silent absorption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The chain produced artifacts (possibly none).
    Extracted(Vec<Artifact>),

    /// Every configured source failed; carries the first failure.
    Failed {
        /// Name of the first failing source
        source_name: String,
        /// Failure description
        reason: String,
    },

    /// No source is configured for this concern.
    Unavailable,
}

impl SourceOutcome {
    /// Get the extracted artifacts, degrading failure and absence to an
    /// empty slice.
    ///
    /// This is the best-effort compatibility view; callers that need to
    /// distinguish failure should match on the outcome instead.
    pub fn artifacts(&self) -> &[Artifact] {
        match self {
            SourceOutcome::Extracted(artifacts) => artifacts,
            _ => &[],
        }
    }

    /// Consume the outcome, degrading failure and absence to an empty list.
    pub fn into_artifacts(self) -> Vec<Artifact> {
        match self {
            SourceOutcome::Extracted(artifacts) => artifacts,
            _ => Vec::new(),
        }
    }

    /// Check if every configured source failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, SourceOutcome::Failed { .. })
    }

    /// Check if the chain ran and produced a result.
    pub fn is_extracted(&self) -> bool {
        matches!(self, SourceOutcome::Extracted(_))
    }
}

/// The set of external collaborators available to the composer.
///
/// Sources are stored per concern in preference order: richest engine
/// first, simpler fallbacks after. An empty chain means the concern is
/// unavailable and contributes nothing.
#[derive(Clone, Default)]
pub struct Collaborators {
    tables: Vec<Arc<dyn TableSource>>,
    visuals: Vec<Arc<dyn VisualSource>>,
}

impl Collaborators {
    /// Create an empty collaborator set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a table source. Earlier registrations are preferred.
    pub fn with_table_source(mut self, source: Arc<dyn TableSource>) -> Self {
        self.tables.push(source);
        self
    }

    /// Register a visual source. Earlier registrations are preferred.
    pub fn with_visual_source(mut self, source: Arc<dyn VisualSource>) -> Self {
        self.visuals.push(source);
        self
    }

    /// Check if any table source is configured.
    pub fn has_tables(&self) -> bool {
        !self.tables.is_empty()
    }

    /// Check if any visual source is configured.
    pub fn has_visuals(&self) -> bool {
        !self.visuals.is_empty()
    }

    /// Run the table source chain for a page.
    pub fn tables_for(&self, page_number: u32) -> SourceOutcome {
        // The map is lazy; later sources only run when earlier ones
        // fall through.
        run_chain(
            self.tables
                .iter()
                .map(|s| (s.name().to_string(), s.extract(page_number))),
            page_number,
            "table",
        )
    }

    /// Run the visual source chain for a page.
    pub fn visuals_for(&self, page_number: u32) -> SourceOutcome {
        run_chain(
            self.visuals
                .iter()
                .map(|s| (s.name().to_string(), s.extract(page_number))),
            page_number,
            "visual",
        )
    }
}

fn run_chain(
    attempts: impl Iterator<Item = (String, Result<Vec<Artifact>>)>,
    page_number: u32,
    concern: &str,
) -> SourceOutcome {
    let mut first_failure: Option<(String, String)> = None;
    let mut any_succeeded = false;

    for (name, attempt) in attempts {
        match attempt {
            Ok(artifacts) if !artifacts.is_empty() => {
                log::debug!(
                    "{} source '{}' produced {} artifacts for page {}",
                    concern,
                    name,
                    artifacts.len(),
                    page_number
                );
                return SourceOutcome::Extracted(artifacts);
            }
            Ok(_) => {
                // Empty output falls through to the next source.
                any_succeeded = true;
            }
            Err(e) => {
                log::warn!(
                    "{} source '{}' failed for page {}: {}",
                    concern,
                    name,
                    page_number,
                    e
                );
                if first_failure.is_none() {
                    first_failure = Some((name, e.to_string()));
                }
            }
        }
    }

    match (any_succeeded, first_failure) {
        (true, _) => SourceOutcome::Extracted(Vec::new()),
        (false, Some((source_name, reason))) => SourceOutcome::Failed {
            source_name,
            reason,
        },
        (false, None) => SourceOutcome::Unavailable,
    }
}
