use glam::vec2;
use once_cell::sync::Lazy;
use regex::Regex;

use super::LevelError;
use crate::world::{Level, Rgb, Wall};

/// Parse the text format: `R G B : x1,y1 -> x2,y2` per line.
///
/// `#` starts a comment; blank lines are skipped.
pub fn parse_text(name: impl Into<String>, src: &str) -> Result<Level, LevelError> {
    static RE: Lazy<Regex> = Lazy::new(|| {
        let num = r"([-+]?\d+(?:\.\d+)?)";
        Regex::new(&format!(
            r"^(\d+)\s+(\d+)\s+(\d+)\s*:\s*{num}\s*,\s*{num}\s*->\s*{num}\s*,\s*{num}$"
        ))
        .unwrap()
    });

    let mut walls = Vec::new();
    for (i, raw) in src.lines().enumerate() {
        let line = i + 1;
        let body = raw.split('#').next().unwrap_or("").trim();
        if body.is_empty() {
            continue;
        }

        let bad = || LevelError::BadLine {
            line,
            text: body.to_owned(),
        };
        let caps = RE.captures(body).ok_or_else(bad)?;

        let mut rgb = [0u8; 3];
        for (k, slot) in rgb.iter_mut().enumerate() {
            let value: u32 = caps[k + 1].parse().map_err(|_| bad())?;
            *slot = u8::try_from(value).map_err(|_| LevelError::BadChannel { line, value })?;
        }

        let mut xy = [0f32; 4];
        for (k, slot) in xy.iter_mut().enumerate() {
            *slot = caps[k + 4].parse().map_err(|_| bad())?;
        }
        // a long enough digit run parses to infinity
        if !xy.iter().all(|v| v.is_finite()) {
            return Err(bad());
        }

        walls.push(Wall::new(
            Rgb::new(rgb[0], rgb[1], rgb[2]),
            vec2(xy[0], xy[1]),
            vec2(xy[2], xy[3]),
        ));
    }
    Ok(Level::new(name, walls))
}
