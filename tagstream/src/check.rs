use std::time::Duration;

use anyhow::Result;
use log::info;
use reqwest::blocking::Client;

use crate::Config;
use tagstream_rs::format::directives;

const DEFAULT_TIMEOUT_SECS: u64 = 6;

/// Reason recorded for a metadata line that has no resource line at all.
pub const MISSING_URL: &str = "<missing>";

pub struct CheckReport {
    pub total: usize,
    pub ok: usize,
    pub bad: Vec<(String, String)>,
}

/// Pairs every `#EXTINF` line of the finalized output with the line that
/// follows it, when that line is a resource location rather than another
/// directive.
pub fn collect_entries(lines: &[String]) -> Vec<(String, Option<String>)> {
    let mut entries = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        if directives::has_prefix(&lines[i], directives::EXTINF) {
            let url = lines
                .get(i + 1)
                .filter(|next| !next.is_empty() && !next.starts_with('#'))
                .cloned();
            entries.push((lines[i].clone(), url));
            i += 2;
        } else {
            i += 1;
        }
    }
    entries
}

/// Best-effort reachability check over the finalized output lines. Probes
/// run sequentially with a fixed timeout; the playlist file is never
/// touched. Returns an error only when the HTTP client itself cannot be
/// constructed, in which case the caller is expected to skip the step.
pub fn run_check(lines: &[String], config: &Config) -> Result<CheckReport> {
    let timeout = Duration::from_secs(config.check_timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
    let mut builder = Client::builder().timeout(timeout);
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.as_str());
    }
    let client = builder.build()?;

    info!("Checking URLs (this may take a while)");
    let entries = collect_entries(lines);

    let mut ok = 0;
    let mut bad = Vec::new();
    for (extinf, url) in &entries {
        let Some(url) = url else {
            bad.push((extinf.clone(), MISSING_URL.to_owned()));
            continue;
        };
        match probe(&client, url) {
            Ok(()) => ok += 1,
            Err(reason) => bad.push((extinf.clone(), reason)),
        }
    }

    Ok(CheckReport {
        total: entries.len(),
        ok,
        bad,
    })
}

/// HEAD first, following redirects; a client or server error status is
/// retried once with a GET whose body is never read.
fn probe(client: &Client, url: &str) -> Result<(), String> {
    let mut status = client
        .head(url)
        .send()
        .map_err(|e| e.to_string())?
        .status();

    if status.as_u16() >= 400 {
        status = client.get(url).send().map_err(|e| e.to_string())?.status();
    }

    if status.as_u16() >= 400 {
        return Err(format!("HTTP {}", status.as_u16()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{MISSING_URL, collect_entries, run_check};
    use crate::Config;

    fn lines(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_collect_pairs() {
        let entries = collect_entries(&lines(&[
            "#EXTM3U",
            "#EXTINF:-1 tvg-id=\"a\",A",
            "http://example.com/a.m3u8",
            "#EXTINF:-1 tvg-id=\"b\",B",
            "http://example.com/b.m3u8",
        ]));
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.as_deref(), Some("http://example.com/a.m3u8"));
        assert_eq!(entries[1].1.as_deref(), Some("http://example.com/b.m3u8"));
    }

    #[test]
    fn test_entry_without_url_is_missing() {
        let entries = collect_entries(&lines(&["#EXTINF:-1 tvg-id=\"a\",A"]));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].1.is_none());
    }

    #[test]
    fn test_missing_url_counts_in_total_but_not_in_ok() {
        // no probe is issued for a URL-less entry, so this runs offline
        let report = run_check(
            &lines(&["#EXTM3U", "#EXTINF:-1 tvg-id=\"a\",A"]),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(report.total, 1);
        assert_eq!(report.ok, 0);
        assert_eq!(report.bad.len(), 1);
        assert_eq!(report.bad[0].1, MISSING_URL);
    }

    #[test]
    fn test_following_directive_is_not_a_url() {
        let entries = collect_entries(&lines(&[
            "#EXTINF:-1 tvg-id=\"a\",A",
            "#EXTGRP:news",
            "http://example.com/a.m3u8",
        ]));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].1.is_none());
    }
}
