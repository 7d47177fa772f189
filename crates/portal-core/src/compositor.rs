//! Preview compositor - live miniature of a detail view for gallery cards.
//!
//! The full detail view is rendered unchanged inside a clipping viewport,
//! sized at `100 / scale` percent and scaled down by `scale` from the top-left
//! corner, so after scaling it fills the viewport exactly.

use serde::{Deserialize, Serialize};

use crate::detail::DetailMode;
use crate::error::{PortalError, PortalResult};

/// Geometry of the thumbnail viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewFrame {
    /// Scale-down factor in `(0, 1]`
    pub scale: f32,
    pub aspect_width: u32,
    pub aspect_height: u32,
    /// Height of the bottom fade overlay in rem
    pub fade_rem: f32,
}

impl Default for PreviewFrame {
    fn default() -> Self {
        Self {
            scale: 0.22,
            aspect_width: 4,
            aspect_height: 3,
            fade_rem: 4.0,
        }
    }
}

impl PreviewFrame {
    pub fn validate(&self) -> PortalResult<()> {
        if !(self.scale > 0.0 && self.scale <= 1.0) {
            return Err(PortalError::Config(format!(
                "preview scale must be in (0, 1], got {}",
                self.scale
            )));
        }
        if self.aspect_width == 0 || self.aspect_height == 0 {
            return Err(PortalError::Config(
                "preview aspect ratio must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Width and height of the unscaled content, in percent of the viewport.
    pub fn content_percent(&self) -> f32 {
        100.0 / self.scale
    }

    /// Style for the clipping viewport.
    pub fn viewport_style(&self) -> String {
        format!(
            "position: relative; width: 100%; aspect-ratio: {} / {}; overflow: hidden;",
            self.aspect_width, self.aspect_height
        )
    }

    /// Style for the scaled content wrapper.
    pub fn content_style(&self) -> String {
        let size = self.content_percent();
        format!(
            "pointer-events: none; transform-origin: top left; transform: scale({}); width: {:.1}%; height: {:.1}%;",
            self.scale, size, size
        )
    }

    /// Style for the bottom fade overlay.
    pub fn fade_style(&self) -> String {
        format!(
            "pointer-events: none; position: absolute; left: 0; right: 0; bottom: 0; height: {}rem;",
            self.fade_rem
        )
    }

    /// Mode the embedded detail view must be rendered in.
    pub fn detail_mode(&self) -> DetailMode {
        DetailMode::Preview
    }
}
