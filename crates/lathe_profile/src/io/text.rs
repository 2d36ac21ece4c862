//! Flat text form of a profile: one `\t{x, y},` initializer row per point,
//! ready to paste into an array literal.

use std::fs;
use std::path::Path;

use crate::{
    error::{ProfileError, Result},
    types::{OutputProfile, ProfilePoint},
};

/// One emitted row, `x` to 3 decimals and `y` to 4
pub fn format_point(point: &ProfilePoint) -> String {
    format!("\t{{{:.3}, {:.4}}},\n", point.x, point.y)
}

impl OutputProfile {
    /// Render the profile bottom-to-top
    pub fn to_text(&self) -> String {
        self.emitted().map(format_point).collect()
    }

    /// Save the rendered profile to a file
    pub fn save_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_text())?;
        Ok(())
    }
}

/// Parse rows written by [`OutputProfile::to_text`], in file order.
///
/// Blank lines are skipped; the trailing comma is optional.
pub fn parse_profile(text: &str) -> Result<Vec<ProfilePoint>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line).map_err(|reason| ProfileError::Parse { line: i + 1, reason }))
        .collect()
}

/// Read a profile text file
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<Vec<ProfilePoint>> {
    let text = fs::read_to_string(path)?;
    parse_profile(&text)
}

fn parse_line(line: &str) -> std::result::Result<ProfilePoint, String> {
    let body = line.trim();
    let body = body.strip_suffix(',').unwrap_or(body).trim_end();
    let body = body
        .strip_prefix('{')
        .and_then(|b| b.strip_suffix('}'))
        .ok_or_else(|| format!("expected `{{x, y}}`, got `{}`", line.trim()))?;

    let mut fields = body.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(format!("expected two values, got `{body}`"));
    };

    let x: f64 = x.parse().map_err(|e| format!("bad x `{x}`: {e}"))?;
    let y: f64 = y.parse().map_err(|e| format!("bad y `{y}`: {e}"))?;
    Ok(ProfilePoint::new(x, y))
}
