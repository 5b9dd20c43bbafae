//! Pipeline execution implementation.

use crate::core::date::{DateResolver, ResolverConfig};
use crate::core::input::DirectoryArgument;
use crate::core::metadata::{ExifDecoder, MetadataDecoder};
use crate::core::rename::{RenameConfig, RenameOutcome, Renamer};
use crate::core::scanner::{DirectoryWalker, WalkConfig};
use crate::events::{null_sender, Event, EventSender, PipelineEvent, RenameSummary, WalkEvent};
use std::time::Instant;
use tracing::info;

/// Configuration for the pipeline
#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    /// Walker configuration
    pub walk: WalkConfig,
    /// Where capture dates are read from
    pub resolver: ResolverConfig,
    /// How new names are built
    pub rename: RenameConfig,
}

/// Builder for pipeline configuration
pub struct PipelineBuilder {
    config: PipelineConfig,
    decoder: Option<Box<dyn MetadataDecoder>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            config: PipelineConfig::default(),
            decoder: None,
        }
    }

    /// Set the metadata decoder
    pub fn decoder(mut self, decoder: Box<dyn MetadataDecoder>) -> Self {
        self.decoder = Some(decoder);
        self
    }

    /// Set the name prefix
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.rename.prefix = prefix.into();
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        let resolver = DateResolver::new(
            self.config.resolver.clone(),
            self.decoder.unwrap_or_else(|| Box::new(ExifDecoder)),
        );
        Pipeline {
            walker: DirectoryWalker::new(self.config.walk.clone()),
            resolver,
            config: self.config,
        }
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Walk, date and rename every file under a directory
pub struct Pipeline {
    config: PipelineConfig,
    walker: DirectoryWalker,
    resolver: DateResolver,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Run the pipeline without events
    pub fn run(&self, root: &DirectoryArgument) -> RenameSummary {
        self.run_with_events(root, &null_sender())
    }

    /// Run the pipeline with event reporting.
    ///
    /// Each run starts with fresh sequence counters. Per-file problems are
    /// reported as events and counted in the summary, never returned.
    pub fn run_with_events(&self, root: &DirectoryArgument, events: &EventSender) -> RenameSummary {
        let start_time = Instant::now();
        let root = root.path();
        info!(root = %root.display(), "starting rename run");

        events.send(Event::Pipeline(PipelineEvent::Started {
            root: root.to_path_buf(),
        }));

        let mut renamer = Renamer::new(self.config.rename.clone());
        let mut summary = RenameSummary::default();

        for record in self.walker.walk(root, events) {
            summary.files_visited += 1;

            let resolution = self.resolver.resolve(&record);
            match renamer.process(&record, resolution, events) {
                RenameOutcome::Success => summary.renamed += 1,
                RenameOutcome::Failed => summary.failed += 1,
                RenameOutcome::DateUnavailable => summary.date_unavailable += 1,
            }
        }

        events.send(Event::Walk(WalkEvent::Completed {
            files_visited: summary.files_visited,
        }));

        summary.duration_ms = start_time.elapsed().as_millis() as u64;
        info!(
            visited = summary.files_visited,
            renamed = summary.renamed,
            failed = summary.failed,
            undated = summary.date_unavailable,
            "rename run finished"
        );

        events.send(Event::Pipeline(PipelineEvent::Completed {
            summary: summary.clone(),
        }));

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::metadata::{MetadataDirectory, EXIF_IFD0};
    use crate::error::MetadataError;
    use crate::events::{EventChannel, RenameEvent};
    use std::collections::HashMap;
    use std::fs::{self, File};
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Serves IFD0 dates by file name, "no metadata" for everything else
    struct DatesByName(HashMap<String, String>);

    impl DatesByName {
        fn new(entries: &[(&str, &str)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(name, date)| (name.to_string(), date.to_string()))
                    .collect(),
            )
        }
    }

    impl MetadataDecoder for DatesByName {
        fn decode(&self, path: &Path) -> Result<Vec<MetadataDirectory>, MetadataError> {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            Ok(self
                .0
                .get(&name)
                .map(|date| vec![MetadataDirectory::new(EXIF_IFD0).with_tag("Date/Time", date)])
                .unwrap_or_default())
        }
    }

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap();
        path
    }

    fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn renames_tree_by_embedded_date() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("trip");
        fs::create_dir(&sub).unwrap();
        touch(temp_dir.path(), "a.jpg");
        touch(temp_dir.path(), "b.jpeg");
        touch(&sub, "c.JPG");

        let pipeline = Pipeline::builder()
            .decoder(Box::new(DatesByName::new(&[
                ("a.jpg", "2023:07:04 10:15:00"),
                ("b.jpeg", "2023:07:05 08:00:00"),
                ("c.JPG", "2023:07:04 18:30:00"),
            ])))
            .build();
        let root = DirectoryArgument::validate(temp_dir.path()).unwrap();

        let summary = pipeline.run(&root);

        assert_eq!(summary.files_visited, 3);
        assert_eq!(summary.renamed, 3);
        // "trip" sorts after the root files, so c.JPG is the second July 4th photo
        assert_eq!(
            listing(temp_dir.path()),
            vec!["FROG_20230704_1.jpg", "FROG_20230705_1.jpeg", "trip"]
        );
        assert_eq!(listing(&sub), vec!["FROG_20230704_2.JPG"]);
    }

    #[test]
    fn malformed_date_is_skipped_and_counted() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "bad.jpg");

        let pipeline = Pipeline::builder()
            .decoder(Box::new(DatesByName::new(&[("bad.jpg", "not a date")])))
            .build();
        let root = DirectoryArgument::validate(temp_dir.path()).unwrap();
        let (sender, receiver) = EventChannel::new();

        let summary = pipeline.run_with_events(&root, &sender);
        drop(sender);

        assert_eq!(summary.date_unavailable, 1);
        assert_eq!(listing(temp_dir.path()), vec!["bad.jpg"]);
        assert!(receiver.iter().any(|e| matches!(
            e,
            Event::Rename(RenameEvent::DateUnavailable { ref original_name, .. })
                if original_name == "bad.jpg"
        )));
    }

    #[test]
    fn each_run_starts_counters_afresh() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = Pipeline::builder()
            .decoder(Box::new(DatesByName::new(&[
                ("a.jpg", "2023:07:04 10:15:00"),
                ("b.jpg", "2023:07:04 10:15:00"),
            ])))
            .build();
        let root = DirectoryArgument::validate(temp_dir.path()).unwrap();

        touch(temp_dir.path(), "a.jpg");
        assert_eq!(pipeline.run(&root).renamed, 1);

        // The renamed file is re-dated from its mtime, and b.jpg takes
        // sequence 1 for July 4th again
        touch(temp_dir.path(), "b.jpg");
        let summary = pipeline.run(&root);

        assert_eq!(summary.files_visited, 2);
        assert_eq!(summary.renamed, 2);
        assert!(temp_dir.path().join("FROG_20230704_1.jpg").exists());
    }

    #[test]
    fn custom_prefix() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "a.jpg");

        let pipeline = Pipeline::builder()
            .decoder(Box::new(DatesByName::new(&[("a.jpg", "2023:07:04 10:15:00")])))
            .prefix("TRIP")
            .build();
        let root = DirectoryArgument::validate(temp_dir.path()).unwrap();
        pipeline.run(&root);

        assert_eq!(listing(temp_dir.path()), vec!["TRIP_20230704_1.jpg"]);
    }

    #[test]
    fn completion_event_carries_summary() {
        let temp_dir = TempDir::new().unwrap();
        let pipeline = Pipeline::builder().build();
        let root = DirectoryArgument::validate(temp_dir.path()).unwrap();
        let (sender, receiver) = EventChannel::new();

        pipeline.run_with_events(&root, &sender);
        drop(sender);

        let completed = receiver.iter().find_map(|e| match e {
            Event::Pipeline(PipelineEvent::Completed { summary }) => Some(summary),
            _ => None,
        });
        assert_eq!(completed.unwrap().files_visited, 0);
    }
}
