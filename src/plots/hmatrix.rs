//! Diamond-grid heatmap of a symmetric matrix.
//!
//! The upper triangle is drawn rotated by 45 degrees, so each item's row and
//! column meet at its label on the right edge. Optional clusters fan the
//! blocks apart and optional edges are drawn as bundled curves next to the
//! labels.

use std::borrow::Cow;
use std::path::Path;

use tracing::info;

use crate::data::MatrixData;
use crate::error::{Error, Result};
use crate::layout::layout;
use crate::options::RenderOptions;
use crate::output::SvgEncoder;
use crate::scene::Scene;
use crate::theme::Theme;

/// Builder for diamond-grid matrix heatmaps.
#[derive(Debug, Clone, Default)]
pub struct HMatrix {
    /// Matrix to render.
    data: Option<MatrixData>,
    /// Layout and canvas options.
    options: RenderOptions,
    /// Scene laid out by [`Self::build`]; cleared by every setter.
    scene: Option<Scene>,
}

impl HMatrix {
    /// Create a new builder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the matrix.
    #[must_use]
    pub fn data(mut self, data: MatrixData) -> Self {
        self.data = Some(data);
        self.scene = None;
        self
    }

    /// Replace the options.
    #[must_use]
    pub fn options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self.scene = None;
        self
    }

    /// Set the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.set_dimensions_inner(width, height);
        self
    }

    fn set_dimensions_inner(&mut self, width: u32, height: u32) {
        self.options.width = f64::from(width);
        self.options.height = f64::from(height);
        self.scene = None;
    }

    /// Set the stylesheet.
    #[must_use]
    pub fn style(mut self, style: Theme) -> Self {
        self.options.style = style;
        self.scene = None;
        self
    }

    /// The current options.
    #[must_use]
    pub fn render_options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build and validate the heatmap.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] without data, otherwise any validation
    /// error of the data or the options.
    pub fn build(mut self) -> Result<Self> {
        let data = self.data.as_ref().ok_or(Error::EmptyData)?;
        self.scene = Some(layout(data, &self.options)?);
        Ok(self)
    }

    /// Scene laid out by [`Self::build`], if the builder has not changed
    /// since.
    #[must_use]
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    fn laid_out(&self) -> Result<Cow<'_, Scene>> {
        if let Some(scene) = &self.scene {
            return Ok(Cow::Borrowed(scene));
        }
        let data = self.data.as_ref().ok_or(Error::EmptyData)?;
        Ok(Cow::Owned(layout(data, &self.options)?))
    }

    /// Lay out the matrix, reusing the scene from [`Self::build`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyData`] without data, or a validation error.
    pub fn layout(&self) -> Result<Scene> {
        self.laid_out().map(Cow::into_owned)
    }

    /// Render to SVG markup.
    ///
    /// # Errors
    ///
    /// See [`Self::layout`].
    pub fn to_svg(&self) -> Result<String> {
        let scene = self.laid_out()?;
        Ok(SvgEncoder::from_scene(&scene).render())
    }

    /// Render to an SVG file.
    ///
    /// # Errors
    ///
    /// Returns a layout error or an I/O error.
    pub fn write_svg(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let scene = self.laid_out()?;
        SvgEncoder::from_scene(&scene).write_to_file(path)?;
        info!(path = %path.display(), "wrote svg");
        Ok(())
    }
}

impl batuta_common::display::WithDimensions for HMatrix {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.set_dimensions_inner(width, height);
    }
}
