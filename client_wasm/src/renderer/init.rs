use web_sys::HtmlCanvasElement;
use wgpu::*;

pub struct WgpuContext {
    pub device: Device,
    pub queue: Queue,
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: (u32, u32),
}

/// Resize the canvas to the board and bring up a WebGPU device for it
pub async fn init_wgpu(canvas: HtmlCanvasElement, width: u32, height: u32) -> Result<WgpuContext, String> {
    canvas.set_width(width);
    canvas.set_height(height);

    let instance = Instance::new(&InstanceDescriptor {
        backends: Backends::BROWSER_WEBGPU,
        ..Default::default()
    });

    let surface = instance
        .create_surface(SurfaceTarget::Canvas(canvas))
        .map_err(|e| format!("Failed to create surface: {:?}", e))?;

    let adapter = instance
        .request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::LowPower,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        })
        .await
        .ok_or_else(|| "Failed to find adapter".to_string())?;

    let (device, queue) = adapter
        .request_device(
            &DeviceDescriptor {
                label: Some("Pong Device"),
                required_limits: Limits::downlevel_webgl2_defaults(),
                ..Default::default()
            },
            None,
        )
        .await
        .map_err(|e| format!("Failed to create device: {:?}", e))?;

    let mut config = surface
        .get_default_config(&adapter, width, height)
        .ok_or_else(|| "Surface not supported by adapter".to_string())?;

    // Prefer an sRGB format so linear tints come out as authored
    if let Some(srgb) = surface
        .get_capabilities(&adapter)
        .formats
        .into_iter()
        .find(|f| f.is_srgb())
    {
        config.format = srgb;
    }
    config.present_mode = PresentMode::Fifo;
    surface.configure(&device, &config);

    log::info!("WebGPU surface {}x{} using {:?}", width, height, config.format);

    Ok(WgpuContext {
        device,
        queue,
        surface,
        config,
        size: (width, height),
    })
}
