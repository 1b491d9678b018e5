//! Batch thumbnail generation.
//!
//! Takes the file list and options from the CLI and runs one resize per
//! valid PNG input, strictly in argument order. The two argument-level
//! checks (at least one file, output path is an existing directory) happen before any
//! file is touched; after that, nothing is fatal — a file that is not a
//! `.png` or that the backend cannot convert is skipped and the batch moves
//! on.
//!
//! ## Destination derivation
//!
//! ```text
//! photos/sample_2021_01.png            → photos/sample_2021_tn.png
//! photos/sample_2021_01.png  -o out/   → out/sample_2021_tn.png
//! ```
//!
//! The filename rule lives in [`naming::thumbnail_file_name`]; this module
//! only joins it with the destination directory.

use crate::geometry::Geometry;
use crate::imaging::{ResizeBackend, ResizeParams};
use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("no input files given")]
    NoInputFiles,
    #[error("output path is not a directory: {}", .0.display())]
    OutputNotADirectory(PathBuf),
}

/// Options for a batch run, as resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Write thumbnails here instead of next to each source file.
    pub output_dir: Option<PathBuf>,
    pub geometry: Geometry,
    /// Print each created thumbnail's path.
    pub verbose: bool,
    /// Report intended destinations without converting anything.
    pub dry_run: bool,
}

/// One source file paired with its derived destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Progress notification emitted while the batch runs.
///
/// The runner stays free of I/O: the caller's sink decides where each
/// event goes (dry-run traces to stderr, created paths to stdout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchEvent {
    /// Dry-run: this destination would have been written.
    Planned { destination: PathBuf },
    /// A thumbnail was written.
    Created { destination: PathBuf },
}

/// Outcome counts for a completed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub planned: usize,
    /// Inputs whose name is not a `.png` candidate.
    pub skipped: usize,
    /// Inputs the backend failed to convert.
    pub failed: usize,
}

/// Derive the job for one input path, or `None` if the input is not a
/// thumbnail candidate (wrong extension, or a name that is not UTF-8).
///
/// The destination directory is `output_dir` when given, otherwise the
/// source file's own directory.
pub fn plan_job(source: &Path, output_dir: Option<&Path>) -> Option<Job> {
    let name = source.file_name()?.to_str()?;
    let thumb_name = naming::thumbnail_file_name(name)?;
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => source.parent().unwrap_or(Path::new("")).to_path_buf(),
    };
    Some(Job {
        source: source.to_path_buf(),
        destination: dir.join(thumb_name),
    })
}

/// Validate options and run the batch.
///
/// Validation failures return `Err` before any conversion is attempted.
/// Per-file problems never do: a non-candidate input or a backend failure
/// bumps the summary counter and the batch continues with the next file.
pub fn run_batch(
    backend: &impl ResizeBackend,
    files: &[PathBuf],
    options: &BatchOptions,
    sink: &mut dyn FnMut(BatchEvent),
) -> Result<BatchSummary, BatchError> {
    if files.is_empty() {
        return Err(BatchError::NoInputFiles);
    }
    if let Some(dir) = &options.output_dir {
        if !dir.is_dir() {
            // Covers both a nonexistent path and one that is a regular file.
            return Err(BatchError::OutputNotADirectory(dir.clone()));
        }
    }

    let mut summary = BatchSummary::default();
    for source in files {
        let Some(job) = plan_job(source, options.output_dir.as_deref()) else {
            summary.skipped += 1;
            continue;
        };

        if options.dry_run {
            summary.planned += 1;
            sink(BatchEvent::Planned {
                destination: job.destination,
            });
            continue;
        }

        let params = ResizeParams {
            source: job.source,
            output: job.destination,
            geometry: options.geometry,
        };
        match backend.resize(&params) {
            Ok(()) => {
                summary.converted += 1;
                if options.verbose {
                    sink(BatchEvent::Created {
                        destination: params.output,
                    });
                }
            }
            Err(_) => summary.failed += 1,
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::MockBackend;

    fn collect_events(
        backend: &MockBackend,
        files: &[PathBuf],
        options: &BatchOptions,
    ) -> (Result<BatchSummary, BatchError>, Vec<BatchEvent>) {
        let mut events = Vec::new();
        let result = run_batch(backend, files, options, &mut |e| events.push(e));
        (result, events)
    }

    #[test]
    fn plan_job_next_to_source() {
        let job = plan_job(Path::new("photos/sample_2021_01.png"), None).unwrap();
        assert_eq!(job.destination, Path::new("photos/sample_2021_tn.png"));
    }

    #[test]
    fn plan_job_with_output_dir() {
        let job = plan_job(
            Path::new("photos/sample_2021_01.png"),
            Some(Path::new("thumbs")),
        )
        .unwrap();
        assert_eq!(job.destination, Path::new("thumbs/sample_2021_tn.png"));
    }

    #[test]
    fn plan_job_bare_filename() {
        let job = plan_job(Path::new("sample_01.png"), None).unwrap();
        assert_eq!(job.destination, Path::new("sample_tn.png"));
    }

    #[test]
    fn plan_job_rejects_non_png() {
        assert_eq!(plan_job(Path::new("photos/sample_01.jpg"), None), None);
        assert_eq!(plan_job(Path::new("photos/sample_01.PNG"), None), None);
    }

    #[test]
    fn empty_file_list_is_fatal() {
        let backend = MockBackend::new();
        let (result, events) = collect_events(&backend, &[], &BatchOptions::default());
        assert!(matches!(result, Err(BatchError::NoInputFiles)));
        assert!(events.is_empty());
    }

    #[test]
    fn missing_output_dir_is_fatal_before_any_conversion() {
        let backend = MockBackend::new();
        let options = BatchOptions {
            output_dir: Some(PathBuf::from("/definitely/not/a/real/dir")),
            ..BatchOptions::default()
        };
        let (result, _) = collect_events(&backend, &[PathBuf::from("a_01.png")], &options);

        assert!(matches!(result, Err(BatchError::OutputNotADirectory(_))));
        assert!(backend.recorded().is_empty());
    }

    #[test]
    fn converts_each_png_in_order() {
        let backend = MockBackend::new();
        let files = vec![PathBuf::from("b_02.png"), PathBuf::from("a_01.png")];
        let (result, _) = collect_events(&backend, &files, &BatchOptions::default());

        let summary = result.unwrap();
        assert_eq!(summary.converted, 2);

        let ops = backend.recorded();
        assert_eq!(ops[0].source, Path::new("b_02.png"));
        assert_eq!(ops[1].source, Path::new("a_01.png"));
    }

    #[test]
    fn non_png_is_skipped_silently() {
        let backend = MockBackend::new();
        let files = vec![
            PathBuf::from("a_01.png"),
            PathBuf::from("notes.txt"),
            PathBuf::from("b_01.jpg"),
        ];
        let options = BatchOptions {
            verbose: true,
            ..BatchOptions::default()
        };
        let (result, events) = collect_events(&backend, &files, &options);

        let summary = result.unwrap();
        assert_eq!(summary.converted, 1);
        assert_eq!(summary.skipped, 2);
        // No event of any kind for the skipped inputs.
        assert_eq!(events.len(), 1);
        assert_eq!(backend.recorded().len(), 1);
    }

    #[test]
    fn backend_failure_does_not_stop_the_batch() {
        let backend = MockBackend::failing_for(vec![PathBuf::from("bad_01.png")]);
        let files = vec![
            PathBuf::from("good_01.png"),
            PathBuf::from("bad_01.png"),
            PathBuf::from("also_good_01.png"),
        ];
        let (result, _) = collect_events(&backend, &files, &BatchOptions::default());

        let summary = result.unwrap();
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.failed, 1);
        // All three were attempted.
        assert_eq!(backend.recorded().len(), 3);
    }

    #[test]
    fn failed_conversion_emits_no_created_event() {
        let backend = MockBackend::failing_for(vec![PathBuf::from("bad_01.png")]);
        let options = BatchOptions {
            verbose: true,
            ..BatchOptions::default()
        };
        let (_, events) = collect_events(&backend, &[PathBuf::from("bad_01.png")], &options);
        assert!(events.is_empty());
    }

    #[test]
    fn dry_run_plans_without_converting() {
        let backend = MockBackend::new();
        let files = vec![
            PathBuf::from("a_01.png"),
            PathBuf::from("skip.txt"),
            PathBuf::from("b_02.png"),
        ];
        let options = BatchOptions {
            dry_run: true,
            ..BatchOptions::default()
        };
        let (result, events) = collect_events(&backend, &files, &options);

        let summary = result.unwrap();
        assert_eq!(summary.planned, 2);
        assert_eq!(summary.skipped, 1);
        assert!(backend.recorded().is_empty());

        // Exactly one trace per .png input.
        assert_eq!(
            events,
            vec![
                BatchEvent::Planned {
                    destination: PathBuf::from("a_tn.png")
                },
                BatchEvent::Planned {
                    destination: PathBuf::from("b_tn.png")
                },
            ]
        );
    }

    #[test]
    fn created_events_only_when_verbose() {
        let backend = MockBackend::new();
        let files = vec![PathBuf::from("a_01.png")];

        let (_, quiet_events) = collect_events(&backend, &files, &BatchOptions::default());
        assert!(quiet_events.is_empty());

        let options = BatchOptions {
            verbose: true,
            ..BatchOptions::default()
        };
        let (_, verbose_events) = collect_events(&backend, &files, &options);
        assert_eq!(
            verbose_events,
            vec![BatchEvent::Created {
                destination: PathBuf::from("a_tn.png")
            }]
        );
    }

    #[test]
    fn geometry_is_passed_through_to_backend() {
        let backend = MockBackend::new();
        let options = BatchOptions {
            geometry: "120x90".parse().unwrap(),
            ..BatchOptions::default()
        };
        run_batch(
            &backend,
            &[PathBuf::from("a_01.png")],
            &options,
            &mut |_| {},
        )
        .unwrap();

        assert_eq!(backend.recorded()[0].geometry, "120x90".parse().unwrap());
    }
}
