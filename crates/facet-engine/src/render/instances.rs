use crate::layout::{InstanceRecord, VertexLayout};

const MIN_CAPACITY: usize = 64;

/// Growable vertex buffer of [`InstanceRecord`]s for slot 1.
///
/// Capacity grows to the next power of two and never shrinks. Rewriting the
/// records every frame is the expected use.
#[derive(Debug)]
pub struct InstanceBuffer {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: u32,
}

impl InstanceBuffer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, records: &[InstanceRecord]) -> Self {
        let mut buffer = Self::with_capacity(device, records.len());
        buffer.write(device, queue, records);
        buffer
    }

    pub fn with_capacity(device: &wgpu::Device, capacity: usize) -> Self {
        let capacity = grown_capacity(capacity);
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("facet instance buffer"),
            size: capacity as u64 * InstanceRecord::STRIDE,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            capacity,
            len: 0,
        }
    }

    /// Replaces the contents with `records`, reallocating if they do not fit.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, records: &[InstanceRecord]) {
        if records.len() > self.capacity {
            log::debug!(
                "growing instance buffer {} -> {}",
                self.capacity,
                grown_capacity(records.len())
            );
            *self = Self::with_capacity(device, records.len());
        }

        if !records.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(records));
        }
        self.len = records.len() as u32;
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The written records only. Must not be called when empty.
    pub(crate) fn slice(&self) -> wgpu::BufferSlice<'_> {
        let end = u64::from(self.len) * InstanceRecord::STRIDE;
        self.buffer.slice(..end)
    }
}

fn grown_capacity(needed: usize) -> usize {
    needed.next_power_of_two().max(MIN_CAPACITY)
}
