use std::sync::Arc;

use anyhow::{Context, Result};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorIcon, Window, WindowId},
};

mod config;
mod input;
mod math;
mod renderer;
mod ui;

use config::{ViewerConfig, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use input::{InputState, camera_key, drag_button, scroll_direction};
use math::{Mesh, MeshRenderer, generate};
use renderer::camera::{DragButton, DragState};
use renderer::{CameraController, GpuState, LightingUniform, Projection, Response};
use ui::{SceneInfo, UiActions, UiState, apply_theme, draw_help_overlay, draw_side_panel};

struct App {
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    egui_state: Option<egui_winit::State>,
    egui_renderer: Option<egui_wgpu::Renderer>,
    egui_ctx: egui::Context,

    config: ViewerConfig,
    mesh: Mesh,
    mesh_renderer: MeshRenderer,
    camera: CameraController,
    projection: Projection,
    ui_state: UiState,
    input: InputState,

    last_vsync_state: bool,
    fatal: Option<anyhow::Error>,
}

fn strip_vertex_capacity(config: &ViewerConfig) -> usize {
    config.rows * (config.cols + 1) * 2
}

fn sample_mesh(config: &ViewerConfig) -> Mesh {
    let mesh = generate(config.rows, config.cols, config.domain);
    log::info!(
        "sampled Enneper surface: {}x{} cells, {} vertices",
        mesh.rows(),
        mesh.cols(),
        mesh.vertices().len()
    );
    mesh
}

impl App {
    fn new() -> Self {
        let config = ViewerConfig::default();

        Self {
            window: None,
            gpu: None,
            egui_state: None,
            egui_renderer: None,
            egui_ctx: egui::Context::default(),

            mesh: sample_mesh(&config),
            mesh_renderer: MeshRenderer::new(config.shading),
            camera: CameraController::default(),
            projection: Projection::default(),
            ui_state: UiState::from_config(&config),
            input: InputState::default(),

            last_vsync_state: config.vsync,
            fatal: None,
            config,
        }
    }

    fn init_gpu(&mut self, window: Arc<Window>) -> Result<()> {
        let gpu = pollster::block_on(GpuState::new(
            window.clone(),
            self.config.vsync,
            strip_vertex_capacity(&self.config),
        ))?;
        gpu.update_lighting(&LightingUniform::default());

        let egui_state = egui_winit::State::new(
            self.egui_ctx.clone(),
            self.egui_ctx.viewport_id(),
            &window,
            Some(window.scale_factor() as f32),
            None,
            Some(2048),
        );

        let egui_renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.config.format, None, 1, false);

        apply_theme(&self.egui_ctx);

        let size = window.inner_size();
        self.projection.reshape(size.width, size.height);

        window.request_redraw();

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.egui_state = Some(egui_state);
        self.egui_renderer = Some(egui_renderer);

        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        log::error!("{error:#}");
        self.fatal = Some(error);
        event_loop.exit();
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn apply(&mut self, response: Response, event_loop: &ActiveEventLoop) {
        match response {
            Response::Redraw => self.request_redraw(),
            Response::Exit => event_loop.exit(),
            Response::Ignored => {}
        }
    }

    fn update_cursor_icon(&self) {
        let Some(window) = &self.window else { return };

        let icon = match self.camera.drag() {
            DragState::Dragging {
                button: DragButton::Left,
                ..
            } => CursorIcon::Grabbing,
            DragState::Dragging {
                button: DragButton::Middle,
                ..
            } => CursorIcon::Move,
            _ => CursorIcon::Default,
        };
        window.set_cursor(icon);
    }

    fn handle_ui_actions(&mut self, actions: UiActions) {
        let next = self.ui_state.apply_to(&self.config);

        if actions.regenerate_mesh && (next.rows != self.config.rows || next.cols != self.config.cols)
        {
            self.mesh = sample_mesh(&next);
        }

        if actions.reset_camera {
            log::debug!("camera reset");
            self.camera.reset();
        }

        self.mesh_renderer.shading = next.shading;
        self.config = next;
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(egui_state)) = (&self.window, &mut self.egui_state) else {
            return;
        };

        let raw_input = egui_state.take_egui_input(window);

        let info = SceneInfo {
            camera: self.camera.state,
            vertices: self.mesh.vertices().len(),
            strips: self.mesh.rows(),
        };

        let mut ui_actions = UiActions::default();

        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            ui_actions = draw_side_panel(ctx, &mut self.ui_state, &info);

            if self.ui_state.show_help {
                draw_help_overlay(ctx, &info.camera, self.ui_state.shading);
            }
        });

        self.handle_ui_actions(ui_actions);

        let Some(gpu) = &mut self.gpu else { return };
        let Some(window) = &self.window else { return };
        let Some(egui_state) = &mut self.egui_state else {
            return;
        };
        let Some(egui_renderer) = &mut self.egui_renderer else {
            return;
        };

        egui_state.handle_platform_output(window, full_output.platform_output);

        if self.config.vsync != self.last_vsync_state {
            gpu.set_vsync(self.config.vsync);
            self.last_vsync_state = self.config.vsync;
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("surface lost, reconfiguring");
                gpu.resize(gpu.size);
                window.request_redraw();
                return;
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow::anyhow!("out of GPU memory"));
                return;
            }
            Err(wgpu::SurfaceError::Timeout) => {
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let draw_list = self.mesh_renderer.draw(&self.mesh, self.camera.view_matrix());
        gpu.submit_draw_list(&self.projection, &draw_list);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, delta) in full_output.textures_delta.set {
            egui_renderer.update_texture(&gpu.device, &gpu.queue, id, &delta);
        }

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Main Encoder"),
            });

        egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        gpu.render_surface(&view, &mut encoder);

        {
            let render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let mut render_pass = render_pass.forget_lifetime();
            egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in full_output.textures_delta.free {
            egui_renderer.free_texture(&id);
        }

        gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        let repaint_now = full_output
            .viewport_output
            .get(&egui::ViewportId::ROOT)
            .is_some_and(|v| v.repaint_delay.is_zero());
        if repaint_now {
            window.request_redraw();
        }
    }

    fn handle_key(&mut self, code: KeyCode, event_loop: &ActiveEventLoop) {
        if code == KeyCode::Tab {
            self.ui_state.show_panel = !self.ui_state.show_panel;
            self.request_redraw();
            return;
        }

        if let Some(key) = camera_key(code) {
            let response = self.camera.key(key);
            self.apply(response, event_loop);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_position(PhysicalPosition::new(100, 100));

        let result = event_loop
            .create_window(window_attrs)
            .context("create window")
            .and_then(|window| self.init_gpu(Arc::new(window)));

        if let Err(e) = result {
            self.fail(event_loop, e.context("renderer initialisation failed"));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if let WindowEvent::CursorMoved { position, .. } = &event {
            self.input.track(*position);
        }

        if let Some(egui_state) = &mut self.egui_state {
            if let Some(window) = &self.window {
                let response = egui_state.on_window_event(window, &event);
                if response.repaint {
                    window.request_redraw();
                }
                // Releases always reach the camera so a drag cannot outlive its button.
                let release = matches!(
                    event,
                    WindowEvent::MouseInput {
                        state: ElementState::Released,
                        ..
                    }
                );
                if response.consumed && !release {
                    return;
                }
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size);
                }
                self.projection.reshape(size.width, size.height);
                self.request_redraw();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.handle_key(code, event_loop);
                    }
                }
            }

            WindowEvent::CursorMoved { .. } => {
                let response = self.camera.motion(self.input.cursor);
                self.apply(response, event_loop);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(button) = drag_button(button) {
                    let response = match state {
                        ElementState::Pressed => self.camera.press(button, self.input.cursor),
                        ElementState::Released => self.camera.release(button),
                    };
                    self.apply(response, event_loop);
                    self.update_cursor_icon();
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                if let Some(direction) = scroll_direction(delta) {
                    let response = self.camera.scroll(direction);
                    self.apply(response, event_loop);
                }
            }

            WindowEvent::RedrawRequested => {
                self.render(event_loop);
            }

            _ => {}
        }
    }
}

fn main() -> Result<()> {
    let default = "info,wgpu_core=warn,wgpu_hal=warn,wgpu=warn,naga=warn";
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp_secs()
        .try_init();

    let event_loop = EventLoop::new().context("create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new();
    event_loop.run_app(&mut app).context("run event loop")?;

    match app.fatal.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
