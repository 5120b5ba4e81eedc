use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use validator::Validate;

use crate::analyzers::DepthAnalyzer;
use crate::cli::args::{Cli, Commands};
use crate::error::{ProcessingError, Result};
use crate::models::{ConversionRequest, MinuteBounds, OutputKind};
use crate::processors::DepthPipeline;
use crate::readers::SoundingReader;
use crate::sources::{FileSource, SourceProvider};
use crate::utils::citation::citation_line;
use crate::utils::constants::{CITATION_FILENAME, DEFAULT_OUTPUT_DIR};
use crate::utils::progress::ConsoleProgress;

pub async fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    match cli.command {
        Commands::Convert {
            input,
            format,
            lon_from,
            lon_to,
            lat_from,
            lat_to,
            output_dir,
            use_mmap,
            parallel,
            max_workers,
        } => {
            let kind = OutputKind::from_suffix(&format).ok_or_else(|| {
                ProcessingError::Config(format!("Unsupported format: {}", format))
            })?;

            let request = build_request(kind, lon_from, lon_to, lat_from, lat_to)?;

            println!("Converting {} ({})", input.display(), kind);

            let source: Arc<dyn SourceProvider> =
                Arc::new(FileSource::new(&input).with_mmap(use_mmap));

            let reader = if parallel {
                SoundingReader::with_parallel(max_workers)
            } else {
                SoundingReader::new()
            };
            let pipeline = DepthPipeline::new().with_reader(reader);

            let progress = ConsoleProgress::new(false);
            let output = pipeline.execute(source, request, &progress).await?;
            progress.finish();

            let out_dir = output_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
            fs::create_dir_all(&out_dir)?;

            let out_path = out_dir.join(&output.filename);
            fs::write(&out_path, output.payload.as_bytes())?;
            fs::write(out_dir.join(CITATION_FILENAME), citation_line())?;

            println!(
                "Wrote {} ({} bytes)",
                out_path.display(),
                output.payload.len()
            );
        }

        Commands::Validate { input, use_mmap } => {
            println!("Validating {}", input.display());

            let source = FileSource::new(&input).with_mmap(use_mmap);
            let text = source.fetch()?;
            let table = SoundingReader::new().parse(&text)?;

            let invalid = table
                .decimal
                .iter()
                .filter(|record| record.validate().is_err())
                .count();

            println!("Parsed {} soundings", table.len());
            if invalid == 0 {
                println!("✅ All coordinates within valid ranges");
            } else {
                println!("⚠️  Found {} soundings with out-of-range coordinates", invalid);
            }
        }

        Commands::Info { input } => {
            println!("Analyzing {}", input.display());

            let source = FileSource::new(&input);
            let text = source.fetch()?;
            let table = SoundingReader::new().parse(&text)?;

            let analyzer = DepthAnalyzer::new();
            let stats = analyzer.analyze(&table.decimal)?;
            println!("\n{}", stats.summary());
        }
    }

    Ok(())
}

fn build_request(
    kind: OutputKind,
    lon_from: Option<u8>,
    lon_to: Option<u8>,
    lat_from: Option<u8>,
    lat_to: Option<u8>,
) -> Result<ConversionRequest> {
    let has_bounds =
        lon_from.is_some() || lon_to.is_some() || lat_from.is_some() || lat_to.is_some();

    if has_bounds && kind != OutputKind::SexagesimalSearch {
        return Err(ProcessingError::Config(format!(
            "Minute bounds only apply to the search60 format, not {}",
            kind.suffix()
        )));
    }

    let mut request = ConversionRequest::new(kind);
    if has_bounds {
        let bounds = MinuteBounds::new(lon_from, lon_to, lat_from, lat_to);
        bounds.validate()?;
        bounds.ensure_ordered()?;
        request = request.with_bounds(bounds);
    }

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_rejects_bounds_for_plain_formats() {
        let result = build_request(
            OutputKind::SexagesimalText,
            Some(10),
            Some(20),
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_build_request_rejects_unordered_bounds() {
        let result = build_request(
            OutputKind::SexagesimalSearch,
            Some(40),
            Some(30),
            None,
            None,
        );
        assert!(matches!(result, Err(ProcessingError::InvalidBounds(_))));
    }

    #[test]
    fn test_build_request_rejects_out_of_range_minutes() {
        let result = build_request(
            OutputKind::SexagesimalSearch,
            Some(10),
            Some(60),
            None,
            None,
        );
        assert!(matches!(result, Err(ProcessingError::Validation(_))));
    }

    #[test]
    fn test_build_request_with_open_bounds() {
        let request =
            build_request(OutputKind::SexagesimalSearch, Some(30), None, None, None).unwrap();
        let bounds = request.bounds.unwrap();
        assert_eq!(bounds.lon_from, Some(30));
        assert_eq!(bounds.lon_to, None);
    }
}
