/// Instanced flat-colour shapes. Unit mesh vertices are scaled by the
/// instance size and moved to the instance centre in pixel space.
pub const PONG_SHADER: &str = r#"
struct Camera {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> camera: Camera;

struct VertexInput {
    @location(0) position: vec3<f32>,
};

struct InstanceInput {
    @location(1) transform: vec4<f32>,
    @location(2) tint: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) tint: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let pixel = vertex.position.xy * instance.transform.zw + instance.transform.xy;

    var out: VertexOutput;
    out.clip_position = camera.view_proj * vec4<f32>(pixel, 0.0, 1.0);
    out.tint = instance.tint;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.tint;
}
"#;
