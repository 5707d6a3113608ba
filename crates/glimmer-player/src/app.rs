//! Player application implementing winit ApplicationHandler
//!
//! Runs the frame loop: advances the scene on every redraw, shades into
//! the CPU framebuffer, and blits the result to the window surface.

use crate::blit::BlitPipeline;
use crate::context::GpuContext;
use glimmer_core::Result;
use glimmer_scenes::SceneBundle;
use glimmer_shade::{FrameBuffer, Renderer, Scene};
use std::sync::Arc;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

pub struct PlayerApp {
    // Scene state
    scene: Box<dyn Scene>,
    renderer: Renderer,
    frame: FrameBuffer,
    start: Option<Instant>,
    show_intermediate: bool,

    // Presentation
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    blit: Option<BlitPipeline>,

    // Window options
    pub fullscreen: bool,
}

impl PlayerApp {
    pub fn new(bundle: SceneBundle, fullscreen: bool) -> Result<Self> {
        let config = bundle.config;
        let renderer = Renderer::new(config.clone(), bundle.scene.pass_mode())?;
        let frame = FrameBuffer::new(config.width, config.height);
        Ok(Self {
            scene: bundle.scene,
            renderer,
            frame,
            start: None,
            show_intermediate: false,
            window: None,
            gpu: None,
            blit: None,
            fullscreen,
        })
    }

    fn initialize(&mut self, event_loop: &ActiveEventLoop) {
        let (width, height) = (self.renderer.config().width, self.renderer.config().height);
        let window_attrs = Window::default_attributes()
            .with_title(format!("Glimmer Player - {}", self.scene.name()))
            .with_inner_size(PhysicalSize::new(width, height));

        let window = Arc::new(event_loop.create_window(window_attrs).unwrap());

        if self.fullscreen {
            window.set_fullscreen(Some(winit::window::Fullscreen::Borderless(None)));
        }

        self.window = Some(window.clone());

        // Initialize presentation
        let gpu = pollster::block_on(GpuContext::new(window)).unwrap();
        let blit = BlitPipeline::new(&gpu.device, gpu.config.format, width, height);

        self.gpu = Some(gpu);
        self.blit = Some(blit);
    }

    fn render(&mut self) {
        let Some(gpu) = &self.gpu else {
            return;
        };
        let Some(blit) = &self.blit else {
            return;
        };

        // The clock starts when the first frame is drawn
        let start = *self.start.get_or_insert_with(Instant::now);
        let time = start.elapsed().as_secs_f32();

        self.renderer
            .render_frame(self.scene.as_mut(), &mut self.frame, time);

        let shown = if self.show_intermediate {
            self.renderer.intermediate().unwrap_or(&self.frame)
        } else {
            &self.frame
        };
        blit.upload(&gpu.queue, shown);

        let output = match gpu.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                return;
            }
            Err(e) => {
                eprintln!("Surface error: {:?}", e);
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        blit.draw(
            &gpu.device,
            &gpu.queue,
            &view,
            gpu.config.width,
            gpu.config.height,
        );

        output.present();
    }
}

impl ApplicationHandler for PlayerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            self.initialize(event_loop);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(new_size);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(key_code) = event.physical_key {
                        match key_code {
                            KeyCode::Escape => {
                                event_loop.exit();
                            }
                            KeyCode::Enter => {
                                // Only meaningful for two-pass scenes
                                if self.renderer.intermediate().is_some() {
                                    self.show_intermediate = !self.show_intermediate;
                                }
                            }
                            KeyCode::F11 => {
                                if let Some(window) = &self.window {
                                    if window.fullscreen().is_some() {
                                        window.set_fullscreen(None);
                                    } else {
                                        window.set_fullscreen(Some(
                                            winit::window::Fullscreen::Borderless(None),
                                        ));
                                    }
                                }
                            }
                            _ => {}
                        }
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                self.render();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
