//! Output location mapping
//!
//! Maps a discovered input file to the Avro schema file it produces. The
//! mapping is pure: take the file name component of the source path, strip
//! the last extension, and place `<base>.avsc` directly under the output
//! root. Sub-directory structure of the source tree is intentionally
//! flattened.

use std::path::{Path, PathBuf};

/// Extension appended to every generated Avro schema file
pub const AVRO_SCHEMA_EXTENSION: &str = "avsc";

/// Map a source schema path to its target Avro schema path
///
/// The base name is the file name up to (not including) the final `.`;
/// a file name without a `.`, or with a `.` only at position zero
/// (`.hidden`), is used whole.
pub fn target_path(source: &Path, output_root: &Path) -> PathBuf {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let base = match name.rfind('.') {
        Some(idx) if idx > 0 => &name[..idx],
        _ => name.as_str(),
    };

    output_root.join(format!("{}.{}", base, AVRO_SCHEMA_EXTENSION))
}
