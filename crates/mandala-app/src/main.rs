use anyhow::Result;

use mandala_engine::core::{App, AppControl, FrameCtx};
use mandala_engine::device::GpuInit;
use mandala_engine::logging::{LoggingConfig, init_logging};
use mandala_engine::paint::Color;
use mandala_engine::render::SceneRenderer;
use mandala_engine::scene::Canvas;
use mandala_engine::window::{Runtime, RuntimeConfig};
use mandala_patterns::Composer;

/// The visualization app: one composer, one canvas, one renderer.
struct Mandala {
    composer: Composer,
    canvas: Canvas,
    renderer: SceneRenderer,
}

impl Mandala {
    fn new() -> Self {
        Self {
            composer: Composer::new(),
            canvas: Canvas::new(1280.0, 720.0),
            renderer: SceneRenderer::new(),
        }
    }
}

impl App for Mandala {
    fn on_resize(&mut self, width: f32, height: f32) {
        self.canvas.set_size(width, height);
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        // Keep the canvas in sync even if a resize slipped past the hook
        // (some platforms deliver the first size only with the redraw).
        let (w, h) = ctx.window.logical_size();
        self.canvas.set_size(w, h);

        self.composer.advance();
        self.composer.compose(&mut self.canvas);

        if ctx.time.frame_index % 600 == 0 {
            log::debug!(
                "frame {}: {} draw commands, clock {:.3}",
                ctx.time.frame_index,
                self.canvas.items().len(),
                self.composer.clock(),
            );
        }

        let canvas = &self.canvas;
        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, canvas);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "mandala".to_string(),
        width: 1280.0,
        height: 720.0,
    };

    log::info!("starting mandala");
    Runtime::run(config, GpuInit::default(), Mandala::new())
}
