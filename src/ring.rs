//! Round-robin staging for uniforms that the GPU may still be reading.
//!
//! The host writes a fresh copy every frame while earlier frames can still be
//! queued. Each slot stays untouched until its frame is released, so a draw
//! never sees its uniforms change under it.

use bytemuck::Pod;

use crate::error::UniformError;

/// Triple buffering.
pub const DEFAULT_IN_FLIGHT: usize = 3;

pub struct UniformRing<T> {
    slots: Vec<T>,
    next: usize,
    in_flight: usize,
}

impl<T: Pod> UniformRing<T> {
    pub fn new(capacity: usize) -> Result<Self, UniformError> {
        if capacity == 0 {
            return Err(UniformError::EmptyRing);
        }
        Ok(Self {
            slots: vec![T::zeroed(); capacity],
            next: 0,
            in_flight: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Writes `value` into the next free slot and returns that slot's index.
    ///
    /// Fails without writing when every slot is still held by the GPU.
    pub fn acquire(&mut self, value: T) -> Result<usize, UniformError> {
        let capacity = self.capacity();
        if self.in_flight == capacity {
            return Err(UniformError::RingExhausted { capacity });
        }

        let index = self.next;
        self.slots[index] = value;
        self.in_flight += 1;
        self.next = (index + 1) % capacity;
        if self.next == 0 {
            log::debug!("uniform ring wrapped after {capacity} slots");
        }
        Ok(index)
    }

    /// Marks the oldest in-flight slot as finished.
    pub fn release(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn slot(&self, index: usize) -> Option<&T> {
        self.slots.get(index)
    }

    pub fn slot_bytes(&self, index: usize) -> Option<&[u8]> {
        self.slots.get(index).map(bytemuck::bytes_of)
    }
}

impl<T: Pod> Default for UniformRing<T> {
    fn default() -> Self {
        Self {
            slots: vec![T::zeroed(); DEFAULT_IN_FLIGHT],
            next: 0,
            in_flight: 0,
        }
    }
}
