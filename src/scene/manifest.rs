//! Plain-text prop manifest loader.
//!
//! ### Format
//! One collider box per line:
//!
//! ```text
//! # label   min_x min_y min_z   max_x max_y max_z
//! Purger    -1.0  0.0  -6.0    1.0   2.4  -4.5
//! ```
//!
//! Blank lines and `#` comments are skipped.  A label may repeat; every
//! line adds one collider box to that prop.

use std::{fs, io, path::Path};

use glam::Vec3;
use thiserror::Error;

use super::geometry::Aabb;

/// Errors that can be encountered while reading a prop manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected 7 fields (label + 6 extents), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("line {line}: {field:?} is not a number")]
    BadNumber { line: usize, field: String },
}

/// One manifest line: a labeled collider box.
#[derive(Clone, Debug, PartialEq)]
pub struct PropEntry {
    pub label: String,
    pub bounds: Aabb,
}

/// Load and parse a manifest from disk.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PropEntry>, ManifestError> {
    parse(&fs::read_to_string(path)?)
}

/// Parse manifest text.
pub fn parse(text: &str) -> Result<Vec<PropEntry>, ManifestError> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: SmallFields = trimmed.split_whitespace().collect();
        if fields.len() != 7 {
            return Err(ManifestError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let mut extents = [0.0_f32; 6];
        for (slot, field) in extents.iter_mut().zip(&fields[1..]) {
            *slot = field.parse().map_err(|_| ManifestError::BadNumber {
                line,
                field: (*field).to_string(),
            })?;
        }

        entries.push(PropEntry {
            label: fields[0].to_string(),
            bounds: Aabb::new(
                Vec3::new(extents[0], extents[1], extents[2]),
                Vec3::new(extents[3], extents[4], extents[5]),
            ),
        });
    }

    Ok(entries)
}

type SmallFields<'a> = smallvec::SmallVec<[&'a str; 8]>;

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn parses_entries_and_skips_comments() {
        let text = "\
# oxygenation plant colliders
Purger      -1 0 -6   1 2.4 -4.5

Cold_Box     3 0 -8   5 3.0 -6.0
Cold_Box     3 3 -8   4 4.0 -7.0
";
        let entries = parse(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].label, "Purger");
        assert_eq!(
            entries[0].bounds,
            Aabb::new(vec3(-1.0, 0.0, -6.0), vec3(1.0, 2.4, -4.5))
        );
        assert_eq!(entries[1].label, "Cold_Box");
        assert_eq!(entries[2].label, "Cold_Box");
    }

    #[test]
    fn wrong_field_count_is_reported_with_line() {
        let err = parse("Purger 1 2 3\n").unwrap_err();
        match err {
            ManifestError::FieldCount { line, found } => {
                assert_eq!(line, 1);
                assert_eq!(found, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_extent_is_reported() {
        let err = parse("# ok\nPurger -1 0 -6 1 top -4.5\n").unwrap_err();
        match err {
            ManifestError::BadNumber { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, "top");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
