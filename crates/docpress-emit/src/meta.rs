//! Writer for per-folder `meta.json` files.

use std::fs;
use std::path::Path;

use docpress_site::MetaFile;

use crate::EmitError;

/// Filename of the per-folder ordering/metadata file.
pub const META_FILENAME: &str = "meta.json";

/// Writes every meta record as a `meta.json` under `out_dir`, creating
/// folders as needed. Returns the number of files written.
pub fn write_meta_files(out_dir: &Path, metas: &[MetaFile]) -> Result<usize, EmitError> {
    for meta in metas {
        let dir = if meta.dir.is_empty() {
            out_dir.to_path_buf()
        } else {
            out_dir.join(&meta.dir)
        };
        fs::create_dir_all(&dir)?;
        let mut json = serde_json::to_string_pretty(&meta.data)?;
        json.push('\n');
        fs::write(dir.join(META_FILENAME), json)?;
    }
    Ok(metas.len())
}
