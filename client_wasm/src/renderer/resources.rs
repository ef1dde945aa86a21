use crate::batch::InstanceData;
use crate::camera::{Camera, CameraUniform};
use wgpu::util::DeviceExt;
use wgpu::*;

/// Per-frame instance capacity for each shape kind
pub const MAX_INSTANCES: usize = 16;

pub struct GameBuffers {
    pub camera: Buffer,
    pub rects: Buffer,
    pub circles: Buffer,
}

pub fn create_buffers(device: &Device, camera: &Camera) -> GameBuffers {
    let camera_uniform = CameraUniform::from_camera(camera);

    let camera_buffer = device.create_buffer_init(&util::BufferInitDescriptor {
        label: Some("Camera Buffer"),
        contents: bytemuck::cast_slice(&[camera_uniform]),
        usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
    });

    let instance_buffer_size = (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64;

    let rects = device.create_buffer(&BufferDescriptor {
        label: Some("Rect Instance Buffer"),
        size: instance_buffer_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    let circles = device.create_buffer(&BufferDescriptor {
        label: Some("Circle Instance Buffer"),
        size: instance_buffer_size,
        usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });

    GameBuffers {
        camera: camera_buffer,
        rects,
        circles,
    }
}
