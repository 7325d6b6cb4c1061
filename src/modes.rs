//! Tally of tracks by musical mode and the report printed from it.

use std::fmt;

use crate::clients::entities::AudioFeatureRecord;

/// Mode value the audio-features API uses for minor keys.
pub const MINOR: i32 = 0;
/// Mode value the audio-features API uses for major keys.
pub const MAJOR: i32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeTally {
    pub minor: u64,
    pub major: u64,
}

/// Counts records by mode. Any mode other than [`MINOR`] or [`MAJOR`],
/// including a missing one, is ignored.
pub fn aggregate(records: &[AudioFeatureRecord]) -> ModeTally {
    let mut tally = ModeTally::default();
    for record in records {
        match record.mode {
            Some(MINOR) => tally.minor += 1,
            Some(MAJOR) => tally.major += 1,
            _ => {}
        }
    }
    tally
}

/// Percentage of `count` over `total_tracks`, or `None` for an empty set.
#[allow(clippy::cast_precision_loss)]
pub fn percentage(count: u64, total_tracks: usize) -> Option<f64> {
    if total_tracks == 0 {
        return None;
    }
    let coefficient = 100.0 / total_tracks as f64;
    Some(count as f64 * coefficient)
}

/// Rounds a percentage for display, ties to even.
#[allow(clippy::cast_possible_truncation)]
pub fn round_percentage(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// Renders names the way a list literal reads: `['a', 'b']`.
pub fn format_name_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| quote_name(n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn quote_name(name: &str) -> String {
    let quote = if name.contains('\'') && !name.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(quote);
    for ch in name.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == quote => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if c.is_control() => quoted.push_str(&format!("\\x{:02x}", u32::from(c))),
            c => quoted.push(c),
        }
    }
    quoted.push(quote);
    quoted
}

/// Outcome of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeReport {
    pub playlist_names: Vec<String>,
    /// Number of track ids collected, the percentage denominator
    pub total_tracks: usize,
    pub tally: ModeTally,
}

impl ModeReport {
    pub fn new(playlist_names: Vec<String>, total_tracks: usize, tally: ModeTally) -> Self {
        ModeReport {
            playlist_names,
            total_tracks,
            tally,
        }
    }

    pub fn major_percentage(&self) -> Option<f64> {
        percentage(self.tally.major, self.total_tracks)
    }

    pub fn minor_percentage(&self) -> Option<f64> {
        percentage(self.tally.minor, self.total_tracks)
    }

    /// JSON rendering used by `--json`.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({
            "playlists": self.playlist_names,
            "total_tracks": self.total_tracks,
            "minor": self.tally.minor,
            "major": self.tally.major,
            "major_percent": self.major_percentage().map(round_percentage),
            "minor_percent": self.minor_percentage().map(round_percentage),
        }))
    }
}

impl fmt::Display for ModeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Reparition of modes in playlists {}:",
            format_name_list(&self.playlist_names)
        )?;
        match (self.major_percentage(), self.minor_percentage()) {
            (Some(major), Some(minor)) => {
                writeln!(f, "- Major: {}%", round_percentage(major))?;
                write!(f, "- Minor: {}%", round_percentage(minor))
            }
            _ => write!(f, "- No tracks to analyze"),
        }
    }
}
