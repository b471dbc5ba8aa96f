use anyhow::Result;

use cyclogon_curve::CurveSamples;
use cyclogon_engine::coords::OrthoProjection;
use cyclogon_engine::core::{App, AppControl, FrameCtx};
use cyclogon_engine::paint::Color;
use cyclogon_engine::render::{LineStripRenderer, RenderCtx, ShaderSources, StripVertices};

/// Draws one precomputed curve as a line strip on a white background.
pub struct CurveViewer {
    samples: CurveSamples,
    shaders: ShaderSources,
    projection: OrthoProjection,
    clear: Color,

    // Created in `on_ready`, dropped in `on_shutdown`.
    renderer: Option<LineStripRenderer>,
}

impl CurveViewer {
    pub fn new(samples: CurveSamples, shaders: ShaderSources, projection: OrthoProjection) -> Self {
        Self {
            samples,
            shaders,
            projection,
            clear: Color::WHITE,
            renderer: None,
        }
    }
}

impl App for CurveViewer {
    fn on_ready(&mut self, ctx: &RenderCtx<'_>) -> Result<()> {
        let vertices = StripVertices::new(self.samples.points(), self.samples.colors())?;
        let renderer = LineStripRenderer::new(ctx, &self.shaders, self.projection, vertices)?;

        log::info!("uploaded {} points to the GPU", renderer.vertex_count());
        self.renderer = Some(renderer);
        Ok(())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(renderer) = self.renderer.as_ref() else {
            return AppControl::Continue;
        };
        ctx.render(self.clear, |_rctx, target| renderer.render(target))
    }

    fn on_shutdown(&mut self) {
        if self.renderer.take().is_some() {
            log::debug!("released line strip GPU resources");
        }
    }
}
