pub mod draw;
pub mod init;
pub mod pipeline;
pub mod resources;
pub mod shaders;

use crate::batch::FrameBatch;
use crate::camera::Camera;
use crate::mesh::{create_circle, create_rectangle, Mesh};
use resources::GameBuffers;
use wgpu::*;

pub struct Renderer {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub surface_config: SurfaceConfiguration,
    pub size: (u32, u32),
    pub camera: Camera,

    pub main_pipeline: RenderPipeline,
    pub camera_bind_group: BindGroup,

    pub buffers: GameBuffers,
    pub meshes: (Mesh, Mesh), // rect, circle
}

impl Renderer {
    /// `width` x `height` is the board size in pixels
    pub async fn new(canvas: web_sys::HtmlCanvasElement, width: u32, height: u32) -> Result<Self, String> {
        let ctx = init::init_wgpu(canvas, width, height).await?;
        let camera = Camera::orthographic(ctx.size.0 as f32, ctx.size.1 as f32);

        let buffers = resources::create_buffers(&ctx.device, &camera);
        let pipes = pipeline::create_pipelines(&ctx.device, ctx.config.format);

        let (vertices, indices) = create_rectangle();
        let rect_mesh = Mesh::new(&ctx.device, &vertices, &indices);
        let (vertices, indices) = create_circle(32);
        let circle_mesh = Mesh::new(&ctx.device, &vertices, &indices);

        let camera_bind_group = ctx.device.create_bind_group(&BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &pipes.camera_layout,
            entries: &[BindGroupEntry {
                binding: 0,
                resource: buffers.camera.as_entire_binding(),
            }],
        });

        Ok(Self {
            device: ctx.device,
            queue: ctx.queue,
            surface: ctx.surface,
            surface_config: ctx.config,
            size: ctx.size,
            camera,
            main_pipeline: pipes.main_pipeline,
            camera_bind_group,
            buffers,
            meshes: (rect_mesh, circle_mesh),
        })
    }

    pub fn draw(&self, batch: &FrameBatch) -> Result<(), String> {
        draw::draw_frame(self, batch)
    }
}
