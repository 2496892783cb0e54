//! Texture upload and full-screen blit.

use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, Buffer, CommandEncoder, Device, Queue, RenderPipeline, TextureFormat, TextureView,
};

use super::context::GpuError;
use super::layouts::create_blit_layout;
use super::pipelines::{create_pipeline_layout, RenderPipelineBuilder};
use super::textures::FrameTexture;
use crate::frame::PixelBuffer;

/// Errors surfaced while presenting a frame.
#[derive(Debug, thiserror::Error)]
pub enum PresentError {
    #[error("Frame is {got:?} but the texture is {expected:?}")]
    FrameSize {
        expected: (u32, u32),
        got: (u32, u32),
    },
    #[error("Surface error: {0}")]
    Surface(#[from] wgpu::SurfaceError),
    #[error("Failed to map readback buffer: {0}")]
    Map(#[from] wgpu::BufferAsyncError),
    #[error("Device poll failed: {0}")]
    Poll(#[from] wgpu::PollError),
    #[error("Readback callback was dropped before completing")]
    ReadbackDropped,
}

/// Anything that can show a finished frame.
pub trait FrameSink {
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), PresentError>;
}

/// Corner of the full-screen quad in unit coordinates.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct QuadVertex {
    pub position: [f32; 2],
}

/// Unit square as a triangle strip (two triangles).
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { position: [0.0, 0.0] },
    QuadVertex { position: [1.0, 0.0] },
    QuadVertex { position: [0.0, 1.0] },
    QuadVertex { position: [1.0, 1.0] },
];

/// Uploads frames to a texture and draws it over the whole target.
pub struct Presenter {
    pipeline: RenderPipeline,
    bind_group: BindGroup,
    vertex_buffer: Buffer,
    texture: FrameTexture,
}

impl Presenter {
    /// Build the blit pipeline for a `width` x `height` frame drawn into
    /// targets of `target_format`.
    pub fn new(
        device: &Device,
        target_format: TextureFormat,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("blit_shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bind_group_layout = create_blit_layout(device);
        let pipeline_layout =
            create_pipeline_layout(device, "blit_pipeline_layout", &[&bind_group_layout]);

        let pipeline = RenderPipelineBuilder::new("blit_pipeline")
            .layout(&pipeline_layout)
            .shader(&shader)
            .vertex_buffers(vec![wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<QuadVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                }],
            }])
            .topology(wgpu::PrimitiveTopology::TriangleStrip)
            .format(target_format)
            .build(device)
            .ok_or(GpuError::Pipeline("blit_pipeline"))?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("blit_quad"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let texture = FrameTexture::new(device, width, height);

        // Nearest on every axis keeps the trace pixel-exact.
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("blit_sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("blit_bind_group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Ok(Self {
            pipeline,
            bind_group,
            vertex_buffer,
            texture,
        })
    }

    /// Replace the texture contents with `frame`.
    pub fn upload(&self, queue: &Queue, frame: &PixelBuffer) -> Result<(), PresentError> {
        if self.texture.write(queue, frame) {
            Ok(())
        } else {
            Err(PresentError::FrameSize {
                expected: self.texture.size(),
                got: (frame.width(), frame.height()),
            })
        }
    }

    /// Clear `target` to black and draw the frame texture over all of it.
    pub fn draw(&self, encoder: &mut CommandEncoder, target: &TextureView) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("blit_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target,
                resolve_target: None,
                depth_slice: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, &self.bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..QUAD_VERTICES.len() as u32, 0..1);
    }
}
