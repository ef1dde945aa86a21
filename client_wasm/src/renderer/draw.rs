use super::resources::MAX_INSTANCES;
use super::Renderer;
use crate::batch::{linear_rgba, FrameBatch, InstanceData};
use crate::mesh::Mesh;
use game_core::Color as BoardColor;
use wgpu::*;

pub fn draw_frame(renderer: &Renderer, batch: &FrameBatch) -> Result<(), String> {
    let output = renderer
        .surface
        .get_current_texture()
        .map_err(|e| format!("Failed to get current texture: {:?}", e))?;
    let view = output.texture.create_view(&TextureViewDescriptor::default());
    let mut encoder = renderer
        .device
        .create_command_encoder(&CommandEncoderDescriptor {
            label: Some("Render Encoder"),
        });

    let rect_count = upload(renderer, &renderer.buffers.rects, &batch.rects);
    let circle_count = upload(renderer, &renderer.buffers.circles, &batch.circles);

    let [r, g, b, a] = linear_rgba(batch.clear.unwrap_or(BoardColor::BACKGROUND));

    {
        let mut pass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some("Board Pass"),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: &view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(Color {
                        r: r as f64,
                        g: g as f64,
                        b: b as f64,
                        a: a as f64,
                    }),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        pass.set_pipeline(&renderer.main_pipeline);
        pass.set_bind_group(0, &renderer.camera_bind_group, &[]);

        let (rect_mesh, circle_mesh) = &renderer.meshes;
        draw_instances(&mut pass, rect_mesh, &renderer.buffers.rects, rect_count);
        draw_instances(&mut pass, circle_mesh, &renderer.buffers.circles, circle_count);
    }

    renderer.queue.submit(std::iter::once(encoder.finish()));
    output.present();

    Ok(())
}

fn upload(renderer: &Renderer, buffer: &Buffer, instances: &[InstanceData]) -> u32 {
    if instances.len() > MAX_INSTANCES {
        log::warn!(
            "{} instances exceed buffer capacity {}, extra shapes dropped",
            instances.len(),
            MAX_INSTANCES
        );
    }
    let count = instances.len().min(MAX_INSTANCES);
    if count > 0 {
        renderer
            .queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(&instances[..count]));
    }
    count as u32
}

fn draw_instances(pass: &mut RenderPass<'_>, mesh: &Mesh, instances: &Buffer, count: u32) {
    if count == 0 {
        return;
    }
    pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
    pass.set_vertex_buffer(1, instances.slice(..));
    pass.set_index_buffer(mesh.index_buffer.slice(..), IndexFormat::Uint16);
    pass.draw_indexed(0..mesh.index_count, 0, 0..count);
}
