use crate::camera::OrbitCamera;
use crate::constants::*;
use crate::core::{rgb_hex, LiveVisualState, RenderTarget};
use glam::{Mat4, Quat, Vec3};
use web_sys as web;

mod helpers;
pub(crate) mod mesh;
mod post;
mod scene;
mod targets;

use helpers::{srgb_to_linear, to_wgpu_color};
use post::{PostBindGroups, PostResources};
use scene::{SceneResources, SceneUniforms};
use targets::{RenderTargets, HDR_FORMAT};

/// Camera and lighting as last written by the scroll driver.
#[derive(Clone, Copy, Debug)]
struct ViewState {
    camera_distance: f32,
    fov_degrees: f32,
    look_at: Vec3,
    background: Vec3,
    light_color: Vec3,
    ambient_intensity: f32,
    sphere_color: Vec3,
    particle_color: Vec3,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    scene: SceneResources,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    width: u32,
    height: u32,
    time_accum: f32,
    view: ViewState,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        initial: &LiveVisualState,
        particle_seed: u64,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits on web avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!("request_device error: {:?}", e))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let scene = scene::create_scene_resources(&device, HDR_FORMAT, particle_seed);
        let targets = RenderTargets::new(&device, width, height);
        let post = post::create_post_resources(&device, HDR_FORMAT, format);
        let post_groups = post.bind_groups(&device, &targets);
        log::info!("[gpu] surface {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            targets,
            post,
            post_groups,
            width,
            height,
            time_accum: 0.0,
            view: ViewState {
                camera_distance: initial.camera_distance,
                fov_degrees: initial.field_of_view,
                look_at: Vec3::ZERO,
                background: initial.background_color,
                light_color: initial.light_color,
                ambient_intensity: initial.ambient_intensity,
                sphere_color: initial.light_color,
                particle_color: initial.light_color,
            },
        })
    }

    /// Colours keyed by the active section rather than the scroll position.
    pub fn set_section_tints(&mut self, sphere: Vec3, particles: Vec3) {
        self.view.sphere_color = sphere;
        self.view.particle_color = particles;
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups = self.post.bind_groups(&self.device, &self.targets);
        }
    }

    fn scene_uniforms(&self) -> SceneUniforms {
        let v = &self.view;
        let t = self.time_accum;
        let aspect = self.width as f32 / self.height.max(1) as f32;
        let camera = OrbitCamera {
            distance: v.camera_distance,
            fov_degrees: v.fov_degrees,
            look_at: v.look_at,
        };
        let view_proj = camera.view_proj(aspect, CAMERA_ZNEAR, CAMERA_ZFAR);
        let basis = camera.basis();

        let pulse = 1.0 + (t * SPHERE_PULSE_FREQ).sin() * SPHERE_PULSE_AMOUNT;
        let sphere_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(pulse),
            Quat::from_euler(glam::EulerRot::XYZ, t * SPHERE_SPIN_X, t * SPHERE_SPIN_Y, 0.0),
            Vec3::ZERO,
        );
        let particle_model = Mat4::from_quat(Quat::from_euler(
            glam::EulerRot::XYZ,
            t * PARTICLE_SPIN_X,
            t * PARTICLE_SPIN_Y,
            0.0,
        ));

        let lin = srgb_to_linear;
        SceneUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            sphere_model: sphere_model.to_cols_array_2d(),
            particle_model: particle_model.to_cols_array_2d(),
            camera_pos: basis.eye.extend(PARTICLE_SIZE).to_array(),
            camera_right: basis.right.extend(0.0).to_array(),
            camera_up: basis.up.extend(0.0).to_array(),
            background: lin(v.background).extend(v.ambient_intensity).to_array(),
            key_light_pos: KEY_LIGHT_POS.extend(KEY_LIGHT_INTENSITY).to_array(),
            key_light_color: lin(v.light_color).extend(1.0).to_array(),
            rim_light_pos: RIM_LIGHT_POS.extend(RIM_LIGHT_INTENSITY).to_array(),
            rim_light_color: lin(rgb_hex(RIM_LIGHT_HEX)).extend(1.0).to_array(),
            sphere_color: lin(v.sphere_color).extend(SPHERE_EMISSIVE).to_array(),
            particle_color: lin(v.particle_color).extend(PARTICLE_OPACITY).to_array(),
            fog_time: [FOG_NEAR, FOG_FAR, t, 0.0],
        }
    }

    pub fn render(&mut self, dt_sec: f32) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let uniforms = self.scene_uniforms();
        self.queue
            .write_buffer(&self.scene.uniform_buffer, 0, bytemuck::bytes_of(&uniforms));
        self.post.write_uniforms(
            &self.queue,
            [self.width as f32 / 2.0, self.height as f32 / 2.0],
            BLOOM_STRENGTH,
            BLOOM_THRESHOLD,
        );

        // Pass 1: lit scene into HDR, cleared to the fog/background colour
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(to_wgpu_color(srgb_to_linear(
                            self.view.background,
                        ))),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.scene.draw(&mut rpass);
        }

        // Pass 2: bright pass -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            &self.post.bright_pipeline,
            &self.post_groups.hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Pass 5: composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            &self.post.composite_pipeline,
            &self.post_groups.hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> RenderTarget for GpuState<'a> {
    fn apply_visual_state(&mut self, state: &LiveVisualState) {
        self.view.camera_distance = state.camera_distance;
        self.view.fov_degrees = state.field_of_view;
        self.view.background = state.background_color;
        self.view.light_color = state.light_color;
        self.view.ambient_intensity = state.ambient_intensity;
    }

    fn set_look_at(&mut self, target: Vec3) {
        self.view.look_at = target;
    }
}
