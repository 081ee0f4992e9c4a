use std::error::Error;
use std::time::{Duration, Instant};

use pixels::{PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::graphics::Renderer2d;
use crate::pixels_renderer::PixelsRenderer2d;
use crate::surface::{Surface, SurfaceSize};

pub struct AppConfig {
    pub title: String,
    /// Logical size of the pixel buffer; the window opens at this size.
    pub buffer_size: SurfaceSize,
    pub vsync: bool,
}

/// What the host should do after a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep delivering timestamps.
    Continue,
    /// Stop scheduling callbacks and close the window.
    Exit,
}

/// Receives one callback per display refresh.
///
/// `now` is the time since the event loop started; it is monotonically non-decreasing.
pub trait FrameHandler {
    /// Paints the first frame before any timestamp is delivered.
    fn init(&mut self, _gfx: &mut dyn Renderer2d) {}

    fn on_frame(&mut self, now: Duration, gfx: &mut dyn Renderer2d) -> FrameControl;

    /// Escape was pressed. Handlers usually stop here.
    fn on_escape(&mut self) {}
}

pub fn run_app<H: FrameHandler + 'static>(
    config: AppConfig,
    mut handler: H,
) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new();
    let buffer_size = config.buffer_size;
    let window = WindowBuilder::new()
        .with_title(config.title)
        .with_inner_size(PhysicalSize::new(buffer_size.width, buffer_size.height))
        .build(&event_loop)?;

    let window_size = window.inner_size();
    let surface_texture = SurfaceTexture::new(window_size.width, window_size.height, &window);
    let pixels = PixelsBuilder::new(buffer_size.width, buffer_size.height, surface_texture)
        .enable_vsync(config.vsync)
        .build()?;
    let mut renderer = PixelsRenderer2d::new(pixels, buffer_size)?;

    renderer.draw_frame(|gfx| handler.init(gfx));
    let start = Instant::now();
    tracing::info!(
        width = buffer_size.width,
        height = buffer_size.height,
        vsync = config.vsync,
        "window opened"
    );

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        match &event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    tracing::info!("close requested");
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(size) => {
                    if let Err(err) = renderer.resize_window(size.width, size.height) {
                        tracing::error!(%err, "resize failed");
                    }
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput {
                    input:
                        KeyboardInput {
                            state: ElementState::Pressed,
                            virtual_keycode: Some(VirtualKeyCode::Escape),
                            ..
                        },
                    ..
                } => {
                    handler.on_escape();
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let now = start.elapsed();
                let control = renderer.draw_frame(|gfx| handler.on_frame(now, gfx));
                if let Err(err) = renderer.present() {
                    tracing::error!(%err, "present failed");
                }
                if control == FrameControl::Exit {
                    tracing::info!("frame handler requested exit");
                    *control_flow = ControlFlow::Exit;
                }
            }
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            _ => {}
        }
    });
}
