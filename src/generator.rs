//! Per-config generation pipeline and batch driver.

use crate::config::{BatchConfig, Config};
use crate::error::{BeanDocError, BeanDocResult};
use crate::hierarchy::ClassHierarchy;
use crate::links::LinkResolver;
use crate::output::{LineSink, SinkProvider};
use crate::parser::TypeDescriptor;
use crate::renderer::{DocumentRenderer, OutputFormat};
use crate::walker::WalkSummary;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Renders one config into `sink` without touching the filesystem.
///
/// The preamble is always written; the hierarchy only when the root exists.
pub fn render_config(
    types: &[TypeDescriptor],
    config: &Config,
    format: OutputFormat,
    sink: &mut dyn LineSink,
) -> BeanDocResult<WalkSummary> {
    let hierarchy = ClassHierarchy::build(types, &config.root_class_name)?;
    let links = LinkResolver::new(config, types);
    DocumentRenderer::new(format)
        .render(&hierarchy, config, &links, sink)
        .map_err(BeanDocError::Io)
}

/// Generates the artifact of one config through `provider`.
///
/// The sink is flushed whenever it was opened, even if rendering failed.
pub fn generate(
    types: &[TypeDescriptor],
    config: &Config,
    format: OutputFormat,
    provider: &mut dyn SinkProvider,
) -> BeanDocResult<(PathBuf, WalkSummary)> {
    let document = DocumentRenderer::new(format);
    let path = config.output_path(document.extension());

    let hierarchy = ClassHierarchy::build(types, &config.root_class_name)?;
    let links = LinkResolver::new(config, types);

    let mut sink = provider
        .open(&path)
        .map_err(|e| BeanDocError::output(&path, e))?;
    let rendered = document.render(&hierarchy, config, &links, sink.as_mut());
    let flushed = sink.flush();
    drop(sink);

    let summary = rendered.map_err(|e| BeanDocError::output(&path, e))?;
    flushed.map_err(|e| BeanDocError::output(&path, e))?;

    if summary.root_found {
        info!(
            config = %config.name,
            path = %path.display(),
            sections = summary.rendered.len(),
            "generated hierarchy reference"
        );
    } else {
        warn!(
            config = %config.name,
            root = %config.root_class_name,
            "root type not found, wrote empty document"
        );
    }
    Ok((path, summary))
}

/// Result of one config within a batch
#[derive(Debug)]
pub struct ConfigOutcome {
    pub name: String,
    pub result: BeanDocResult<(PathBuf, WalkSummary)>,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<ConfigOutcome>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &BeanDocError)> {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .err()
                .map(|err| (outcome.name.as_str(), err))
        })
    }

    pub fn outcome(&self, name: &str) -> Option<&ConfigOutcome> {
        self.outcomes.iter().find(|outcome| outcome.name == name)
    }
}

/// Generates every config set in name order. A failing set is logged and
/// recorded; the remaining sets still run.
pub fn generate_batch(
    types: &[TypeDescriptor],
    batch: &BatchConfig,
    format: OutputFormat,
    provider: &mut dyn SinkProvider,
) -> BatchReport {
    let mut report = BatchReport::default();

    for config in batch.configs() {
        let result = generate(types, config, format, provider);
        if let Err(err) = &result {
            error!(config = %config.name, error = %err, "config set failed");
        }
        report.outcomes.push(ConfigOutcome {
            name: config.name.clone(),
            result,
        });
    }

    report
}
