//! Best-effort execution of every registered builder plugin.

use crate::build::adapters::CommandBuilder;
use crate::build::ports::BuilderPlugin;
use crate::panic::panic_message;
use camino::Utf8Path;
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

/// How one builder plugin fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    /// The builder reported a successful build.
    Succeeded,
    /// The builder did not apply or its build failed.
    Declined,
    /// The builder returned an error.
    Failed(String),
    /// The builder panicked.
    Panicked(String),
}

/// Outcome of running one builder plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Builder name.
    pub builder: String,
    /// What happened.
    pub status: BuildStatus,
}

/// Outcomes of a build pass, in plugin registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    outcomes: Vec<BuildOutcome>,
}

impl BuildReport {
    /// Returns every recorded outcome.
    #[must_use]
    pub fn outcomes(&self) -> &[BuildOutcome] {
        &self.outcomes
    }

    /// Returns how many builders were run.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns how many builders reported success.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == BuildStatus::Succeeded)
            .count()
    }
}

/// Runs every registered builder plugin against a source tree.
///
/// A failing, declining or panicking builder never stops the remaining ones.
#[derive(Clone, Default)]
pub struct BuildOrchestrator {
    plugins: Vec<Arc<dyn BuilderPlugin>>,
}

impl BuildOrchestrator {
    /// Creates an orchestrator with no plugins.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an orchestrator with the Maven, Ant and Gradle builders.
    #[must_use]
    pub fn with_default_builders() -> Self {
        Self::new()
            .with_plugin(Arc::new(CommandBuilder::maven()))
            .with_plugin(Arc::new(CommandBuilder::ant()))
            .with_plugin(Arc::new(CommandBuilder::gradle()))
    }

    /// Registers a plugin.
    #[must_use]
    pub fn with_plugin(mut self, plugin: Arc<dyn BuilderPlugin>) -> Self {
        self.register(plugin);
        self
    }

    /// Registers a plugin in place.
    pub fn register(&mut self, plugin: Arc<dyn BuilderPlugin>) {
        self.plugins.push(plugin);
    }

    /// Returns the number of registered plugins.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Returns `true` when no plugin is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Runs every plugin against `source_directory` and reports how each
    /// one fared.
    pub async fn run(&self, source_directory: &Utf8Path) -> BuildReport {
        let mut report = BuildReport::default();
        for plugin in &self.plugins {
            let builder = plugin.name().to_owned();
            tracing::debug!(builder = %builder, "building with builder");
            let attempt = AssertUnwindSafe(plugin.build(source_directory))
                .catch_unwind()
                .await;
            let status = match attempt {
                Ok(Ok(true)) => {
                    tracing::debug!(builder = %builder, "build succeeded");
                    BuildStatus::Succeeded
                }
                Ok(Ok(false)) => {
                    tracing::debug!(builder = %builder, "build failed or not applicable");
                    BuildStatus::Declined
                }
                Ok(Err(err)) => {
                    tracing::error!(builder = %builder, error = %err, "builder returned an error");
                    BuildStatus::Failed(err.to_string())
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(builder = %builder, panic = %message, "builder panicked");
                    BuildStatus::Panicked(message)
                }
            };
            report.outcomes.push(BuildOutcome { builder, status });
        }
        report
    }
}

impl fmt::Debug for BuildOrchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.plugins.iter().map(|plugin| plugin.name()))
            .finish()
    }
}
