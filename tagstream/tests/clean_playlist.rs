use std::fs;

use tagstream::{check, clean_playlist};
use tempfile::tempdir;

#[test]
fn cleaned_file_is_written_next_to_the_input() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("liste.m3u");
    fs::write(
        &input,
        "#EXTM3U\n#EXTINF:-1,Sinemalar 🎬\nhttp://example.com/sec.m3u8\n#EXTINF:-1,Kanal 1\nhttp://example.com/1.m3u8\n",
    )
    .unwrap();

    let (out_path, lines) = clean_playlist(&input).unwrap();
    assert_eq!(out_path, dir.path().join("cleaned_liste.m3u"));

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, lines.join("\n") + "\n");

    // the entry after the section header inherits its group
    assert!(lines[3].contains("group-title=\"SİNEMALAR\""));
    assert!(lines[3].contains("tvg-id=\"Kanal.1\""));
}

#[test]
fn cleaning_its_own_output_is_a_fixed_point() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("liste.m3u");
    fs::write(
        &input,
        "#EXTM3U\n\n\n#EXTINF:-1,Belgesel Kanalı\nhttp://example.com/sec.m3u8\n#EXTINF:-1,Kanal A\nhttp://example.com/a.m3u8\n",
    )
    .unwrap();

    let (first_path, first_lines) = clean_playlist(&input).unwrap();
    let (_, second_lines) = clean_playlist(&first_path).unwrap();
    assert_eq!(first_lines, second_lines);
}

#[test]
fn missing_resource_lines_are_reported_not_probed() {
    let lines: Vec<String> = ["#EXTM3U", "#EXTINF:-1 tvg-id=\"a\",A"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let entries = check::collect_entries(&lines);
    assert_eq!(entries.len(), 1);
    assert!(entries[0].1.is_none());
}
