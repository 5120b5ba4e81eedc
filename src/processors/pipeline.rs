use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::error::{ProcessingError, Result};
use crate::models::{ConversionOutput, ConversionRequest, MinuteBounds, OutputKind};
use crate::processors::MinuteFilter;
use crate::readers::SoundingReader;
use crate::sources::SourceProvider;
use crate::utils::filename::{extract_mesh_basename, output_filename};
use crate::utils::progress::ProgressSink;
use crate::writers::{GeoJsonWriter, SexagesimalTextWriter};

/// Stages of one conversion request, in execution order. Each stage reports
/// a fixed milestone, so progress is non-decreasing by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Parsing,
    Transforming,
    Rendering,
    Complete,
}

impl PipelineStage {
    pub fn percent(&self) -> u8 {
        match self {
            PipelineStage::Loading => 10,
            PipelineStage::Parsing => 40,
            PipelineStage::Transforming => 60,
            PipelineStage::Rendering => 80,
            PipelineStage::Complete => 100,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PipelineStage::Loading => "Reading source data...",
            PipelineStage::Parsing => "Parsing sounding records...",
            PipelineStage::Transforming => "Processing soundings...",
            PipelineStage::Rendering => "Preparing output...",
            PipelineStage::Complete => "Complete",
        }
    }
}

/// Cache fingerprint for one conversion: the source identifier, the output
/// kind and the bounds (when present).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RequestKey {
    source: String,
    kind: OutputKind,
    bounds: Option<MinuteBounds>,
}

/// Sequences fetch, parse, transform and render for conversion requests and
/// caches finished outputs by request fingerprint.
///
/// The cache is unbounded and lives as long as the pipeline instance —
/// one browsing session's working set. Concurrent lookups and inserts are
/// safe; identical keys produce identical outputs, so last-writer-wins on a
/// racing insert is acceptable.
pub struct DepthPipeline {
    reader: SoundingReader,
    cache: DashMap<RequestKey, Arc<ConversionOutput>>,
    parse_runs: AtomicUsize,
}

impl DepthPipeline {
    pub fn new() -> Self {
        Self {
            reader: SoundingReader::new(),
            cache: DashMap::new(),
            parse_runs: AtomicUsize::new(0),
        }
    }

    /// Use a specific reader configuration (e.g. parallel parsing for large
    /// meshes).
    pub fn with_reader(mut self, reader: SoundingReader) -> Self {
        self.reader = reader;
        self
    }

    /// Number of parse passes performed so far. Cache hits do not parse.
    pub fn parse_runs(&self) -> usize {
        self.parse_runs.load(Ordering::Relaxed)
    }

    /// Run one conversion request to completion. A repeated identical
    /// request returns the cached output without fetching or parsing again.
    ///
    /// The source fetch runs on a blocking task and is the only suspension
    /// point; the compute stages are synchronous. A failed request leaves
    /// the cache untouched.
    pub async fn execute(
        &self,
        source: Arc<dyn SourceProvider>,
        request: ConversionRequest,
        progress: &dyn ProgressSink,
    ) -> Result<Arc<ConversionOutput>> {
        let key = RequestKey {
            source: source.identifier().to_string(),
            kind: request.kind,
            bounds: request.bounds,
        };

        if let Some(hit) = self.cache.get(&key) {
            debug!(source = %key.source, kind = %key.kind, "cache hit");
            self.report(progress, PipelineStage::Complete);
            return Ok(Arc::clone(hit.value()));
        }

        self.report(progress, PipelineStage::Loading);
        let fetch_source = Arc::clone(&source);
        let text = tokio::task::spawn_blocking(move || fetch_source.fetch()).await??;

        self.report(progress, PipelineStage::Parsing);
        self.parse_runs.fetch_add(1, Ordering::Relaxed);
        let table = self.reader.parse(&text)?;
        debug!(records = table.len(), "parsed sounding table");

        self.report(progress, PipelineStage::Transforming);
        let basename = extract_mesh_basename(source.identifier()).ok_or_else(|| {
            ProcessingError::UnidentifiableSource(source.identifier().to_string())
        })?;
        let filename = output_filename(&basename, request.kind);

        self.report(progress, PipelineStage::Rendering);
        let payload = match request.kind {
            OutputKind::DecimalPassthrough => text,
            OutputKind::SexagesimalText => SexagesimalTextWriter::new().render(&table.sexagesimal),
            OutputKind::SexagesimalSearch => {
                let bounds = request.bounds.unwrap_or_default();
                let kept = MinuteFilter::new(bounds).apply(&table.sexagesimal)?;
                SexagesimalTextWriter::new().render(&kept)
            }
            OutputKind::GeoJson => {
                let writer = GeoJsonWriter::new();
                let collection = writer.project(&table.decimal);
                writer.to_pretty_json(&collection)?
            }
        };

        self.report(progress, PipelineStage::Complete);

        let output = Arc::new(ConversionOutput { payload, filename });
        self.cache.insert(key, Arc::clone(&output));
        Ok(output)
    }

    fn report(&self, progress: &dyn ProgressSink, stage: PipelineStage) {
        debug!(stage = ?stage, percent = stage.percent(), "pipeline stage");
        progress.report(stage.percent(), stage.message());
    }
}

impl Default for DepthPipeline {
    fn default() -> Self {
        Self::new()
    }
}
