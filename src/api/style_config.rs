use serde::{Deserialize, Serialize};

use crate::component::{ComponentBase, DEFAULT_OFFSET_DP, DEFAULT_TEXT_SIZE_DP, Typeface};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

pub const COMPONENT_STYLE_JSON_SCHEMA_V1: u32 = 1;

/// Serializable component style, expressed in density-independent units.
///
/// Hosts persist this instead of pixel values so a saved style renders the
/// same on every screen density. Missing fields fall back to the component
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentStyleConfig {
    pub enabled: bool,
    pub x_offset_dp: f64,
    pub y_offset_dp: f64,
    pub text_size_dp: f64,
    pub text_color: Color,
    pub typeface: Option<Typeface>,
}

impl Default for ComponentStyleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            x_offset_dp: DEFAULT_OFFSET_DP,
            y_offset_dp: DEFAULT_OFFSET_DP,
            text_size_dp: DEFAULT_TEXT_SIZE_DP,
            text_color: Color::BLACK,
            typeface: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct ComponentStyleJsonContractV1 {
    schema_version: u32,
    style: ComponentStyleConfig,
}

impl ComponentStyleConfig {
    /// Applies the style through the component setters, so the text-size
    /// clamp and unit conversion take effect.
    pub fn apply_to(&self, base: &mut ComponentBase) {
        base.set_enabled(self.enabled);
        base.set_x_offset(self.x_offset_dp);
        base.set_y_offset(self.y_offset_dp);
        base.set_text_size(self.text_size_dp);
        base.set_text_color(self.text_color);
        base.set_typeface(self.typeface.clone());
    }

    /// Captures the current style of `base`, converting pixels back to dp.
    #[must_use]
    pub fn capture(base: &ComponentBase) -> Self {
        let density = base.density();
        Self {
            enabled: base.is_enabled(),
            x_offset_dp: density.px_to_dp(base.x_offset()),
            y_offset_dp: density.px_to_dp(base.y_offset()),
            text_size_dp: density.px_to_dp(base.text_size()),
            text_color: base.text_color(),
            typeface: base.typeface().cloned(),
        }
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        let payload = ComponentStyleJsonContractV1 {
            schema_version: COMPONENT_STYLE_JSON_SCHEMA_V1,
            style: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize component style: {e}"))
        })
    }

    /// Parses either a versioned contract payload or a bare style object.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse component style json: {e}"))
        })?;
        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("invalid component style: {e}"))
            });
        }

        let payload: ComponentStyleJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidData(format!("invalid component style payload: {e}"))
        })?;
        if payload.schema_version != COMPONENT_STYLE_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported component style schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.style)
    }
}
