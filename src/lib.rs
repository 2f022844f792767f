use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, info};

pub mod config;
pub mod container;
pub mod errors;
pub mod record;

pub use container::{ContainerDocument, DEFAULT_OUTPUT};
pub use errors::ExportError;
pub use record::{format_record, Conformer};

/// rearrange the pasted conformer string `raw` and write it as the only record
/// of a container file at `path`, stamped with `created`. the input is checked
/// before anything touches the filesystem, so a malformed string leaves an
/// existing file at `path` alone
pub fn export(
    raw: &str,
    created: DateTime<Utc>,
    path: impl AsRef<Path>,
) -> Result<PathBuf, ExportError> {
    let path = path.as_ref();
    let conformer = Conformer::parse(raw)?;
    debug!(
        "structure {} with {} bytes of coordinates",
        conformer.structure,
        conformer.coordinates.len()
    );

    let record = conformer.record().to_string();
    ContainerDocument::new(record, created).write(path)?;

    info!("wrote {}", path.display());
    Ok(path.to_owned())
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use chrono::TimeZone;

    use super::*;

    const ETHANOL: &str = "eMHAIh@ #qxnjsbG[f@@CV?bpATlYqSQ^brHTcidvtKPTLXdhCNwimWYdBEohCvWAKGohzuBAvythT@H`@h@@";

    #[test]
    fn ethanol() {
        let dir = tempfile::tempdir().unwrap();
        let created = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let path = export(ETHANOL, created, dir.path().join(DEFAULT_OUTPUT))
            .unwrap();

        let got = read_to_string(&path).unwrap();
        let lines: Vec<_> = got.lines().collect();
        assert_eq!(lines[2], "<created=\"1700000000\">");
        assert_eq!(
            lines[16],
            "idcoordinates3D\tFragFp\tStructure\tStructure No"
        );
        assert_eq!(
            lines[17],
            "#qxnjsbG[f@@CV?bpATlYqSQ^brHTcidvtKPTLXdhCNwimWYdBEohCvWAKGohzuBAvythT@H`@h@@\tplaceholder\teMHAIh@\t1"
        );
        assert_eq!(lines[18], "<datawarrior properties>");
        assert_eq!(lines.last(), Some(&"</datawarrior properties>"));
        assert!(got.ends_with(container::FOOTER));
    }

    #[test]
    fn malformed_leaves_file_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        let created = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let res = export("eMHAIh@", created, &path);
        assert!(matches!(res, Err(ExportError::MalformedInput { found: 1 })));
        assert!(!path.exists());

        export("A B", created, &path).unwrap();
        let before = read_to_string(&path).unwrap();
        assert!(export("", created, &path).is_err());
        assert_eq!(read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn second_run_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);
        let first = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let second = Utc.timestamp_opt(1_700_000_100, 0).unwrap();

        export("A B", first, &path).unwrap();
        export("C D", second, &path).unwrap();

        let got = read_to_string(&path).unwrap();
        assert!(got.contains("\nD\tplaceholder\tC\t1\n"));
        assert!(got.contains("<created=\"1700000100\">"));
        assert!(!got.contains("\tA\t1"));
        assert!(!got.contains("1700000000"));
    }
}
