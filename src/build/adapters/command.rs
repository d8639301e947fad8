//! Builder plugins that run a build tool when its project file is present.

use crate::build::ports::{BuilderError, BuilderPlugin, BuilderResult};
use async_trait::async_trait;
use camino::Utf8Path;
use std::sync::Arc;
use tokio::process::Command;

/// Runs `program args...` in the source tree root when `marker_file` exists
/// there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBuilder {
    name: String,
    marker_file: String,
    program: String,
    args: Vec<String>,
}

impl CommandBuilder {
    /// Creates a marker-gated command builder.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        marker_file: impl Into<String>,
        program: impl Into<String>,
        args: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            name: name.into(),
            marker_file: marker_file.into(),
            program: program.into(),
            args: args.into_iter().collect(),
        }
    }

    /// Apache Maven, gated on `pom.xml`.
    #[must_use]
    pub fn maven() -> Self {
        Self::new(
            "maven",
            "pom.xml",
            "mvn",
            ["--batch-mode", "--quiet", "-DskipTests", "compile"].map(str::to_owned),
        )
    }

    /// Apache Ant, gated on `build.xml`.
    #[must_use]
    pub fn ant() -> Self {
        Self::new("ant", "build.xml", "ant", ["-quiet".to_owned()])
    }

    /// Gradle, gated on `build.gradle`.
    #[must_use]
    pub fn gradle() -> Self {
        Self::new(
            "gradle",
            "build.gradle",
            "gradle",
            ["--quiet", "compileJava"].map(str::to_owned),
        )
    }

    /// Returns the project file that enables this builder.
    #[must_use]
    pub fn marker_file(&self) -> &str {
        &self.marker_file
    }
}

#[async_trait]
impl BuilderPlugin for CommandBuilder {
    fn name(&self) -> &str {
        &self.name
    }

    async fn build(&self, source_directory: &Utf8Path) -> BuilderResult<bool> {
        let marker = source_directory.join(&self.marker_file);
        if !tokio::fs::try_exists(&marker)
            .await
            .map_err(BuilderError::other)?
        {
            return Ok(false);
        }

        let output = Command::new(&self.program)
            .args(&self.args)
            .current_dir(source_directory)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| BuilderError::Launch {
                program: self.program.clone(),
                source: Arc::new(source),
            })?;
        if !output.status.success() {
            tracing::debug!(
                builder = %self.name,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "build command exited unsuccessfully"
            );
        }
        Ok(output.status.success())
    }
}
