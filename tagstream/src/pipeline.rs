use std::{
    fs,
    io::Cursor,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::info;
use tagstream_rs::Normalizer;

/// Reads `input`, normalizes it and writes the result next to it as
/// `cleaned_<filename>`. Invalid UTF-8 in the input is replaced rather than
/// rejected. Returns the output path together with the written lines.
pub fn clean_playlist(input: &Path) -> Result<(PathBuf, Vec<String>)> {
    let raw = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let text = String::from_utf8_lossy(&raw).into_owned();

    let mut normalizer = Normalizer::new(Cursor::new(text));
    normalizer.normalize()?;
    let lines = normalizer.get_result();
    info!("Normalized {} lines", lines.len());

    let out_path = output_path(input);
    let mut contents = String::new();
    for line in &lines {
        contents.push_str(line);
        contents.push('\n');
    }
    fs::write(&out_path, contents)
        .with_context(|| format!("Failed to write {}", out_path.display()))?;

    Ok((out_path, lines))
}

/// Sibling path with the `cleaned_` prefix on the file name.
pub fn output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("cleaned_{}", file_name))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::output_path;

    #[test]
    fn test_output_path_keeps_parent() {
        assert_eq!(
            output_path(Path::new("lists/liste.m3u")),
            PathBuf::from("lists/cleaned_liste.m3u")
        );
        assert_eq!(
            output_path(Path::new("liste.m3u")),
            PathBuf::from("cleaned_liste.m3u")
        );
    }
}
