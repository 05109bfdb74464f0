use std::ops::Range;

use crate::math::mesh::{DrawList, StripVertex};

pub struct SurfaceBuffers {
    vertex_buffer: wgpu::Buffer,
    capacity: usize,
    strip_ranges: Vec<Range<u32>>,
}

impl SurfaceBuffers {
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        Self {
            vertex_buffer: create_vertex_buffer(device, capacity),
            capacity,
            strip_ranges: Vec::new(),
        }
    }

    /// Writes the frame's strips, reallocating when a finer mesh no longer fits.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, list: &DrawList) {
        let (vertices, ranges) = list.flatten();

        if vertices.len() > self.capacity {
            log::info!(
                "growing surface vertex buffer {} -> {} vertices",
                self.capacity,
                vertices.len()
            );
            self.capacity = vertices.len();
            self.vertex_buffer = create_vertex_buffer(device, self.capacity);
        }

        if !vertices.is_empty() {
            queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        self.strip_ranges = ranges;
    }

    pub fn vertex_buffer(&self) -> &wgpu::Buffer {
        &self.vertex_buffer
    }

    pub fn strip_ranges(&self) -> &[Range<u32>] {
        &self.strip_ranges
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("Surface Strip Buffer"),
        size: (capacity.max(1) * std::mem::size_of::<StripVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub fn strip_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<StripVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
        ],
    }
}
