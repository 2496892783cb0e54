//! Bind group layout builders for GPU pipelines.

use wgpu::{BindGroupLayout, BindGroupLayoutEntry, Device, SamplerBindingType, ShaderStages};

/// Builder for bind group layouts.
pub struct BindGroupLayoutBuilder {
    label: Option<&'static str>,
    entries: Vec<BindGroupLayoutEntry>,
}

impl BindGroupLayoutBuilder {
    pub fn new(label: &'static str) -> Self {
        Self {
            label: Some(label),
            entries: Vec::new(),
        }
    }

    /// Add a 2D float texture entry.
    ///
    /// `Rgba32Float` is not filterable without an optional device feature, so
    /// such textures must be declared with `filterable: false`.
    pub fn texture_2d(mut self, binding: u32, visibility: ShaderStages, filterable: bool) -> Self {
        self.entries.push(BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        });
        self
    }

    /// Add a sampler entry.
    pub fn sampler(
        mut self,
        binding: u32,
        visibility: ShaderStages,
        kind: SamplerBindingType,
    ) -> Self {
        self.entries.push(BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Sampler(kind),
            count: None,
        });
        self
    }

    pub fn build(self, device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: self.label,
            entries: &self.entries,
        })
    }
}

/// Layout for the blit pass: unfilterable frame texture plus nearest sampler.
pub fn create_blit_layout(device: &Device) -> BindGroupLayout {
    BindGroupLayoutBuilder::new("blit_bind_group_layout")
        .texture_2d(0, ShaderStages::FRAGMENT, false)
        .sampler(1, ShaderStages::FRAGMENT, SamplerBindingType::NonFiltering)
        .build(device)
}
