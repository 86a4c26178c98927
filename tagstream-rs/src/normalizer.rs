use std::{
    error::Error,
    fmt::Display,
    io::{self, BufRead},
    mem::swap,
};

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::classifier::detect_section;
use crate::format::{DEFAULT_GROUP, directives, logo_for_group, tags};
use crate::parser::parse_extinf;

pub struct Normalizer(Box<dyn NormalizerImplTrait>);

impl Normalizer {
    pub fn new<T: BufRead + 'static>(reader: T) -> Self {
        Self(Box::new(NormalizerImpl::new(reader)))
    }

    pub fn normalize(&mut self) -> Result<(), NormalizeError> {
        self.0.normalize()
    }

    pub fn get_result(&mut self) -> Vec<String> {
        self.0.get_result()
    }
}

#[derive(Debug)]
pub enum NormalizeError {
    IoError(io::Error),
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => e.fmt(f),
        }
    }
}
impl Error for NormalizeError {}
impl From<io::Error> for NormalizeError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

trait NormalizerImplTrait {
    fn normalize(&mut self) -> Result<(), NormalizeError>;
    fn get_result(&mut self) -> Vec<String>;
}

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("Regular expression error");
    static ref ID_REJECT: Regex =
        Regex::new(r"[^A-Za-z0-9._-]").expect("Regular expression error");
}

/// Derives a tvg-id from a display name: whitespace runs become a single `.`,
/// everything outside `[A-Za-z0-9._-]` is stripped, and an empty result
/// becomes `"unknown"`.
pub fn sanitize_id(name: &str) -> SmolStr {
    let collapsed = WHITESPACE_RUN.replace_all(name.trim(), ".");
    let stripped = ID_REJECT.replace_all(&collapsed, "");
    if stripped.is_empty() {
        SmolStr::new_static("unknown")
    } else {
        SmolStr::new(stripped)
    }
}

struct NormalizerImpl<T: BufRead + 'static> {
    reader: T,
    lines: Vec<String>,
    output: Vec<String>,
    current_group: Option<SmolStr>,
}

impl<T: BufRead + 'static> NormalizerImpl<T> {
    pub fn new(reader: T) -> Self {
        Self {
            reader,
            lines: Vec::new(),
            output: Vec::new(),
            current_group: None,
        }
    }

    /// Reads the whole input into a tidy line sequence: every line trimmed,
    /// runs of blank lines collapsed to one, no trailing blanks.
    fn read_lines(&mut self) -> Result<(), io::Error> {
        let mut buffer = String::new();
        let mut prev_blank = false;
        loop {
            buffer.clear();
            if self.reader.read_line(&mut buffer)? == 0 {
                break;
            }

            let trimmed = buffer.trim();
            if trimmed.is_empty() {
                if !prev_blank {
                    self.lines.push(String::new());
                }
                prev_blank = true;
            } else {
                self.lines.push(trimmed.to_owned());
                prev_blank = false;
            }
        }

        while self.lines.last().is_some_and(|line| line.is_empty()) {
            self.lines.pop();
        }

        Ok(())
    }

    /// Single forward pass over the tidy lines. Always advances by at least
    /// one line per iteration, so termination holds for any input.
    fn process(&mut self) {
        let mut i = 0;
        while i < self.lines.len() {
            let line = &self.lines[i];

            if directives::has_prefix(line, directives::EXTM3U) {
                self.output.push(line.clone());
                i += 1;
                continue;
            }

            if directives::has_prefix(line, directives::EXTINF) {
                i = self.process_extinf(i);
                continue;
            }

            // stray lines and comments pass through untouched
            self.output.push(line.clone());
            i += 1;
        }
    }

    /// Handles one `#EXTINF` line at `index` and returns the index to resume
    /// from.
    fn process_extinf(&mut self, index: usize) -> usize {
        let line = self.lines[index].clone();
        let mut extinf = parse_extinf(&line);

        if let Some(section) = detect_section(&line) {
            // section header: update the ambient group and re-emit the header
            // itself with standardized tags
            self.current_group = Some(SmolStr::new_static(section.name()));

            let title = extinf.title.clone();
            extinf.fill(tags::TVG_NAME, title.clone());
            extinf.fill(tags::GROUP_TITLE, section.name());
            extinf.fill(tags::TVG_LOGO, section.default_logo());
            extinf.fill(tags::TVG_ID, sanitize_id(&title));
            self.output.push(extinf.to_string());

            let next = index + 1;
            if next < self.lines.len()
                && !directives::has_prefix(&self.lines[next], directives::EXTINF)
            {
                self.output.push(self.lines[next].clone());
                return next + 1;
            }
            return index + 1;
        }

        // ordinary entry: its URL is the first following line that is not a
        // directive; a blank line there counts as no URL and is not consumed
        let mut scan = index + 1;
        while scan < self.lines.len() && self.lines[scan].starts_with('#') {
            scan += 1;
        }
        let url = self
            .lines
            .get(scan)
            .filter(|candidate| !candidate.is_empty())
            .cloned();

        let group = extinf
            .value_of(tags::GROUP_TITLE)
            .cloned()
            .or_else(|| self.current_group.clone())
            .unwrap_or_else(|| SmolStr::new_static(DEFAULT_GROUP));
        extinf.fill(tags::GROUP_TITLE, group.clone());

        let name = extinf
            .value_of(tags::TVG_NAME)
            .cloned()
            .or_else(|| (!extinf.title.is_empty()).then(|| extinf.title.clone()))
            .or_else(|| url.as_deref().map(|u| SmolStr::new(u)))
            .unwrap_or_default();
        extinf.fill(tags::TVG_NAME, name.clone());
        extinf.fill(tags::TVG_ID, sanitize_id(&name));
        extinf.fill(tags::TVG_LOGO, logo_for_group(&group));

        extinf.title = name;
        self.output.push(extinf.to_string());

        match url {
            Some(url) => {
                self.output.push(url);
                scan + 1
            }
            None => scan,
        }
    }
}

impl<T: BufRead + 'static> NormalizerImplTrait for NormalizerImpl<T> {
    fn normalize(&mut self) -> Result<(), NormalizeError> {
        self.read_lines()?;
        self.process();
        Ok(())
    }

    fn get_result(&mut self) -> Vec<String> {
        let mut result = Vec::new();
        swap(&mut self.output, &mut result);
        result
    }
}
