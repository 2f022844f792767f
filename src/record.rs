//! splitting a pasted "Molecule 3D" string into its two tokens and laying them
//! out as the single data row of a container file

use std::fmt::Display;

use crate::errors::ExportError;

/// filler for the FragFp column. DataWarrior recomputes the fingerprint on
/// load, so the value itself is irrelevant for the export to .sdf
pub const FRAG_FP_PLACEHOLDER: &str = "placeholder";

/// the compound counter shown in DataWarrior's spreadsheet. only one record is
/// ever written
pub const RECORD_INDEX: &str = "1";

/// A conformer as copied from DataWarrior's 3D-Structure window: the idcode of
/// the sketch followed by the encoded 3D coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conformer<'a> {
    pub structure: &'a str,
    pub coordinates: &'a str,
}

impl<'a> Conformer<'a> {
    /// take the first two whitespace-separated tokens of `raw`. anything after
    /// the second token is ignored
    pub fn parse(raw: &'a str) -> Result<Self, ExportError> {
        let mut tokens = raw.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(structure), Some(coordinates)) => Ok(Self {
                structure,
                coordinates,
            }),
            (Some(_), None) => Err(ExportError::MalformedInput { found: 1 }),
            _ => Err(ExportError::MalformedInput { found: 0 }),
        }
    }

    pub fn record(&self) -> FormattedRecord<'a> {
        FormattedRecord {
            coordinates: self.coordinates,
            frag_fp: FRAG_FP_PLACEHOLDER,
            structure: self.structure,
            index: RECORD_INDEX,
        }
    }
}

/// One tab-separated row in the column order of the container header:
/// `idcoordinates3D FragFp Structure "Structure No"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormattedRecord<'a> {
    pub coordinates: &'a str,
    pub frag_fp: &'a str,
    pub structure: &'a str,
    pub index: &'a str,
}

impl Display for FormattedRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.coordinates, self.frag_fp, self.structure, self.index
        )
    }
}

/// rearrange `raw` into the record line expected by the container file
pub fn format_record(raw: &str) -> Result<String, ExportError> {
    Ok(Conformer::parse(raw)?.record().to_string())
}
