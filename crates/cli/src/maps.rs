use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Map files in `dir`: `.txt` files not starting with `README`, sorted by name.
pub fn discover_maps(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut maps = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_map_file(&path) {
            maps.push(path);
        }
    }
    maps.sort();
    Ok(maps)
}

fn is_map_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.ends_with(".txt") && !name.starts_with("README")
}

/// The label shown in the selection list: the file stem.
pub fn map_label(path: &Path) -> String {
    path.file_stem().map_or_else(|| path.display().to_string(), |stem| stem.to_string_lossy().into_owned())
}
