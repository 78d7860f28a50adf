//! Create pipeline: write a sidecar for every data file that lacks one.

use super::{FileError, Mode, PipelineError, Reporter, RunSettings, RunSummary, Status};
use crate::checksum;
use crate::sidecar::{self, WriteOutcome};
use crate::walker::{self, EntryKind};
use std::io::Write;
use std::path::Path;

/// Walk `root` and create missing sidecars, reporting one line per data file
/// to `out` followed by the summary block.
pub fn create_checksums<W: Write>(
    root: &Path,
    settings: &RunSettings,
    out: W,
) -> Result<RunSummary, PipelineError> {
    let entries = walker::walk(root, &settings.walk)?;
    tracing::info!(
        root = %root.display(),
        algorithm = %settings.algorithm,
        extension = %settings.extension,
        "creating checksums"
    );

    let mut report = Reporter::new(Mode::Create, out);
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                report.record_error(&path, &FileError::from(e))?;
                continue;
            }
        };
        if entry.kind(&settings.extension) != EntryKind::Data {
            continue;
        }
        if entry.is_dangling() {
            let err = FileError::DanglingLink {
                path: entry.path().to_path_buf(),
            };
            report.record_error(entry.path(), &err)?;
            continue;
        }
        match create_one(entry.path(), settings) {
            Ok(status) => report.record(entry.path(), status)?,
            Err(e) => report.record_error(entry.path(), &e)?,
        }
    }

    let summary = report.finish()?;
    tracing::info!(
        total = summary.total,
        ok = summary.ok,
        errors = summary.errors,
        "create finished"
    );
    Ok(summary)
}

fn create_one(path: &Path, settings: &RunSettings) -> Result<Status, FileError> {
    let target = sidecar::sidecar_path(path, &settings.extension);
    if sidecar::exists(&target) {
        tracing::debug!(path = %path.display(), "sidecar exists, skipping");
        return Ok(Status::Skipped);
    }

    let digest = checksum::hash_path(path, settings.algorithm, settings.read_buffer_bytes)?;
    match sidecar::write_sidecar(&target, &digest)? {
        WriteOutcome::Written => {
            tracing::debug!(path = %path.display(), digest = %digest, "sidecar written");
            Ok(Status::Ok)
        }
        WriteOutcome::AlreadyExists => Ok(Status::Skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run(root: &Path, settings: &RunSettings) -> (RunSummary, String) {
        let mut buf = Vec::new();
        let summary = create_checksums(root, settings, &mut buf).unwrap();
        (summary, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn creates_sidecar_for_data_file_only() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.txt"), "hello").unwrap();
        fs::write(root.join(".hidden"), "secret").unwrap();
        fs::write(root.join("b.txt.md5"), "whatever").unwrap();

        let (summary, out) = run(root, &RunSettings::default());

        assert_eq!(
            fs::read_to_string(root.join("a.txt.md5")).unwrap(),
            "5d41402abc4b2a76b9719d911017c592"
        );
        assert!(!root.join(".hidden.md5").exists());
        assert!(!root.join("b.txt.md5.md5").exists());
        assert_eq!(fs::read_to_string(root.join("b.txt.md5")).unwrap(), "whatever");
        assert_eq!((summary.total, summary.ok), (1, 1));
        assert!(out.starts_with(&format!("{} OK\n", root.join("a.txt").display())));
        assert!(out.ends_with("OK: 1\nSkipped: 0\n********************\n"));
    }

    #[test]
    fn second_run_skips_everything() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        fs::write(root.join("one"), "1").unwrap();
        fs::write(root.join("sub/two"), "2").unwrap();

        let (first, _) = run(root, &RunSettings::default());
        assert_eq!((first.total, first.ok), (2, 2));

        let (second, out) = run(root, &RunSettings::default());
        assert_eq!((second.total, second.ok, second.not_ok()), (2, 0, 2));
        assert!(second.is_clean());
        assert_eq!(out.matches(" SKIPPED\n").count(), 2);
        let sidecars = walker::walk(root, &Default::default())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.kind("md5") == EntryKind::Sidecar)
            .count();
        assert_eq!(sidecars, 2);
    }

    #[test]
    fn sha256_settings_use_own_extension() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("a.txt"), "hello\n").unwrap();

        let settings = RunSettings::for_algorithm(crate::checksum::Algorithm::Sha256);
        run(root, &settings);
        assert_eq!(
            fs::read_to_string(root.join("a.txt.sha256")).unwrap(),
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03"
        );
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = create_checksums(&dir.path().join("nope"), &RunSettings::default(), Vec::new())
            .unwrap_err();
        assert!(matches!(err, PipelineError::Walk(_)));
    }
}
