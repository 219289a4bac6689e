//! Named color scale presets
//!
//! A preset holds several resolutions of the same scale. Each entry of
//! `colors` is an interleaved value array in `encoding`, ordered by
//! increasing stop count; `positions`, when present, is parallel to it.
//!
//! ```json
//! {
//!   "identifier": "gray",
//!   "type": "sequential",
//!   "encoding": "RGB",
//!   "colors": [[0, 0, 0, 255, 255, 255]]
//! }
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scale::ColorEncoding;
use crate::{Error, Result};

/// Perceptual family of a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetType {
    Sequential,
    Diverging,
    Qualitative,
}

/// A named scale definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub identifier: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PresetType>,
    pub encoding: ColorEncoding,
    pub colors: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<Vec<f64>>>,
}

impl Preset {
    /// Pick the value array to build a scale of `step_count` stops from
    ///
    /// Returns the first array with at least `step_count` stops, or the
    /// last (largest) one, together with its positions if any.
    pub fn select(&self, step_count: usize) -> Result<(&[f64], Option<&[f64]>)> {
        let stride = self.encoding.stride();
        let index = self
            .colors
            .iter()
            .position(|values| values.len() / stride >= step_count)
            .or_else(|| self.colors.len().checked_sub(1))
            .ok_or_else(|| Error::EmptyPreset(self.identifier.clone()))?;

        let positions = self
            .positions
            .as_ref()
            .and_then(|all| all.get(index))
            .map(Vec::as_slice);

        debug!(
            preset = %self.identifier,
            step_count,
            index,
            stops = self.colors[index].len() / stride,
            "selected preset resolution"
        );

        Ok((self.colors[index].as_slice(), positions))
    }
}

/// Parse a JSON array of presets
pub fn parse_presets(json: &str) -> Result<Vec<Preset>> {
    Ok(serde_json::from_str(json)?)
}

/// Look up a preset by identifier
pub fn find_preset<'a>(presets: &'a [Preset], identifier: &str) -> Result<&'a Preset> {
    presets
        .iter()
        .find(|p| p.identifier == identifier)
        .ok_or_else(|| Error::UnknownPreset(identifier.to_owned()))
}
