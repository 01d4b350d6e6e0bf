//! wgpu device plumbing for uploading uniforms and reading them back.

use anyhow::{anyhow, Result};
use bytemuck::Pod;
use wgpu::{Buffer, BufferUsages};

use crate::ring::UniformRing;
use crate::shaders::UNIFORMS_WGSL;

pub struct GpuContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    pub async fn new() -> Result<Self> {
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow!("Failed to find suitable adapter"))?;

        let info = adapter.get_info();
        log::info!("using adapter {} ({:?})", info.name, info.backend);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Uniforms Device"),
                    required_features: wgpu::Features::default(),
                    required_limits: wgpu::Limits::downlevel_defaults(),
                },
                None, // Trace path
            )
            .await?;

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
        })
    }

    /// Uniform buffer sized for one `T`. `COPY_SRC` allows reading it back.
    pub fn create_uniform_buffer<T: Pod>(&self, label: &str) -> Buffer {
        self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<T>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST | BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        })
    }

    pub fn write_uniform<T: Pod>(&self, buffer: &Buffer, value: &T) {
        self.queue.write_buffer(buffer, 0, bytemuck::bytes_of(value));
    }

    /// Copies `buffer` into a mappable staging buffer and returns its bytes.
    pub async fn read_buffer(&self, buffer: &Buffer) -> Result<Vec<u8>> {
        let size = buffer.size();
        let staging_buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Uniform Readback Buffer"),
            size,
            usage: BufferUsages::MAP_READ | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Uniform Readback Encoder"),
            });
        encoder.copy_buffer_to_buffer(buffer, 0, &staging_buffer, 0, size);
        self.queue.submit(Some(encoder.finish()));

        let buffer_slice = staging_buffer.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();

        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });

        self.device.poll(wgpu::Maintain::Wait);
        rx.await??;

        let data = buffer_slice.get_mapped_range();
        let bytes = data.to_vec();

        drop(data);
        staging_buffer.unmap();

        Ok(bytes)
    }

    /// Compiles the uniforms shader on this device and reports validation errors.
    pub async fn validate_shader(&self) -> Result<()> {
        self.device.push_error_scope(wgpu::ErrorFilter::Validation);
        let _module = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("Uniforms Shader"),
                source: wgpu::ShaderSource::Wgsl(UNIFORMS_WGSL.into()),
            });
        match self.device.pop_error_scope().await {
            Some(error) => Err(anyhow!("uniforms shader rejected: {error}")),
            None => Ok(()),
        }
    }
}

/// A `UniformRing` whose slots each own a GPU uniform buffer.
pub struct GpuUniformRing<T> {
    ring: UniformRing<T>,
    buffers: Vec<Buffer>,
}

impl<T: Pod> GpuUniformRing<T> {
    pub fn new(gpu: &GpuContext, label: &str, capacity: usize) -> Result<Self> {
        let ring = UniformRing::new(capacity)?;
        let buffers = (0..capacity)
            .map(|slot| gpu.create_uniform_buffer::<T>(&format!("{label} Slot {slot}")))
            .collect();

        Ok(Self { ring, buffers })
    }

    /// Stages `value` in the next free slot and uploads it to that slot's buffer.
    pub fn write_next(&mut self, gpu: &GpuContext, value: T) -> Result<usize> {
        let index = self.ring.acquire(value)?;
        gpu.write_uniform(&self.buffers[index], &value);
        log::debug!("uploaded {} bytes into uniform slot {index}", std::mem::size_of::<T>());
        Ok(index)
    }

    pub fn buffer(&self, index: usize) -> Option<&Buffer> {
        self.buffers.get(index)
    }

    pub fn staged(&self, index: usize) -> Option<&T> {
        self.ring.slot(index)
    }

    /// Call once the GPU has finished with the oldest submitted slot.
    pub fn release(&mut self) {
        self.ring.release();
    }

    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    pub fn in_flight(&self) -> usize {
        self.ring.in_flight()
    }
}
