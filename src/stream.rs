//! Persistently mapped, triple-buffered streaming buffers.
//!
//! A stream owns `SLOTS` consecutive regions of one buffer. Each update
//! writes into the next region while the GPU may still be reading the
//! others, and a fence per region keeps the CPU from overwriting data a
//! pending draw call still needs.

use crate::queue::{self, Destroyed, Destructor};
use crate::util;
use std::{fmt, marker, mem, ops, slice, sync};

/// Number of regions in a [`BufferStream`].
///
/// [`BufferStream`]: struct.BufferStream.html
pub const SLOTS: usize = 3;

/// A GPU fence marking a point in the command stream.
pub struct Fence {
    /// Address of the `GLsync` object; zero once released.
    sync: usize,

    tx: queue::Sender<Destroyed>,
}

impl Fence {
    /// Constructor.
    pub(crate) fn new(sync: usize, tx: queue::Sender<Destroyed>) -> Self {
        Self { sync, tx }
    }

    /// Returns the `GLsync` address.
    pub(crate) fn sync(&self) -> usize {
        self.sync
    }

    /// Swaps in a new `GLsync`, returning the old one.
    pub(crate) fn replace(&mut self, sync: usize) -> usize {
        mem::replace(&mut self.sync, sync)
    }

    /// Gives up ownership of the `GLsync` without queueing its deletion.
    pub(crate) fn into_sync(mut self) -> usize {
        mem::replace(&mut self.sync, 0)
    }
}

impl ops::Drop for Fence {
    fn drop(&mut self) {
        if self.sync != 0 {
            let _ = self.tx.send(Destroyed::Fence(self.sync));
        }
    }
}

impl fmt::Debug for Fence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Fence(usize);

        Fence(self.sync).fmt(f)
    }
}

/// Start of a persistent buffer mapping.
///
/// The mapping stays valid until the buffer is deleted, which only happens
/// on the context thread after the last handle is gone. Writes go through
/// `&mut BufferStream`, so moving the pointer to another thread cannot race.
#[derive(Clone, Copy)]
struct Mapping(*mut u8);

unsafe impl Send for Mapping {}

/// A persistently mapped GPU buffer rewritten every frame.
///
/// Holds `SLOTS` copies of `len` elements. Updates go through
/// [`Factory::update_stream`], which rotates to the next slot and waits
/// until the GPU has finished with it.
///
/// [`Factory::update_stream`]: ../struct.Factory.html#method.update_stream
pub struct BufferStream<T> {
    /// The OpenGL buffer ID.
    id: u32,

    /// Start of the persistent mapping.
    ptr: Mapping,

    /// Number of `T` per slot.
    len: usize,

    /// Byte distance between consecutive slots.
    stride: usize,

    /// The slot most recently written.
    slot: usize,

    /// Fences guarding each slot against reuse.
    pub(crate) fences: [Option<Fence>; SLOTS],

    /// Returns the buffer back to the factory upon destruction.
    _destructor: sync::Arc<Destructor>,

    _marker: marker::PhantomData<T>,
}

impl<T> BufferStream<T> {
    /// Constructor.
    ///
    /// `ptr` must be a write mapping of at least `SLOTS * stride` bytes that
    /// lives as long as the buffer.
    pub(crate) fn new(
        id: u32,
        ptr: *mut u8,
        len: usize,
        stride: usize,
        tx: queue::Sender<Destroyed>,
    ) -> Self {
        Self {
            id,
            ptr: Mapping(ptr),
            len,
            stride,
            slot: 0,
            fences: [None, None, None],
            _destructor: sync::Arc::new(Destructor::new(Destroyed::Buffer(id), tx)),
            _marker: marker::PhantomData,
        }
    }

    /// Returns the OpenGL buffer ID.
    pub(crate) fn id(&self) -> u32 {
        self.id
    }

    /// Returns `false` if the buffer could not be mapped.
    pub(crate) fn is_mapped(&self) -> bool {
        !self.ptr.0.is_null()
    }

    /// Moves to the next slot, returning the slot being left.
    pub(crate) fn advance(&mut self) -> usize {
        let previous = self.slot;
        self.slot = next_slot(self.slot);
        previous
    }

    /// Returns the mapped memory of the current slot.
    ///
    /// # Safety
    ///
    /// The GPU must be done reading the slot, and the mapping must be alive.
    pub(crate) unsafe fn slot_mut(&mut self) -> &mut [T] {
        let base = self.ptr.0.add(self.offset());
        slice::from_raw_parts_mut(base as *mut T, self.len)
    }

    /// Returns the index of the slot most recently written.
    pub fn current_slot(&self) -> usize {
        self.slot
    }

    /// Returns the number of slots.
    pub fn slots(&self) -> usize {
        SLOTS
    }

    /// Returns the number of elements per slot.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if slots hold no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of bytes of data per slot.
    pub fn size_bytes(&self) -> usize {
        self.len * mem::size_of::<T>()
    }

    /// Returns the byte distance between consecutive slots.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the byte offset of the current slot.
    pub fn offset(&self) -> usize {
        slot_offset(self.slot, self.stride)
    }

    /// Returns the byte length to bind for the current slot.
    ///
    /// Empty slots bind their whole stride; a zero-sized range is invalid.
    pub(crate) fn range_bytes(&self) -> usize {
        if self.is_empty() {
            self.stride
        } else {
            self.size_bytes()
        }
    }
}

impl<T> fmt::Debug for BufferStream<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct BufferStream {
            id: u32,
            len: usize,
            stride: usize,
            slot: usize,
        }

        BufferStream {
            id: self.id,
            len: self.len,
            stride: self.stride,
            slot: self.slot,
        }.fmt(f)
    }
}

/// Returns the slot following `slot`.
pub(crate) fn next_slot(slot: usize) -> usize {
    (slot + 1) % SLOTS
}

/// Returns the byte offset of `slot`.
pub(crate) fn slot_offset(slot: usize, stride: usize) -> usize {
    slot * stride
}

/// Returns the byte distance between slots holding `size` bytes each.
///
/// Slots start on `alignment` boundaries so each can be bound as a range.
pub(crate) fn slot_stride(size: usize, alignment: usize) -> usize {
    util::align_up(size.max(1), alignment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queue::Queue;
    use std::ptr;

    #[test]
    fn slots_rotate() {
        assert_eq!(1, next_slot(0));
        assert_eq!(2, next_slot(1));
        assert_eq!(0, next_slot(2));
    }

    #[test]
    fn strides_respect_alignment() {
        assert_eq!(256, slot_stride(64, 256));
        assert_eq!(512, slot_stride(300, 256));
        assert_eq!(48, slot_stride(48, 16));
        assert_eq!(16, slot_stride(0, 16));
        assert_eq!(512, slot_offset(2, 256));
    }

    #[test]
    fn writes_land_in_the_current_slot() {
        let queue = Queue::new();
        let stride = slot_stride(2 * mem::size_of::<u32>(), 16);
        let mut memory = vec![0u32; SLOTS * stride / mem::size_of::<u32>()];
        let ptr = memory.as_mut_ptr() as *mut u8;
        let mut stream: BufferStream<u32> = BufferStream::new(9, ptr, 2, stride, queue.tx());

        assert_eq!(0, stream.advance());
        assert_eq!(1, stream.current_slot());
        unsafe { stream.slot_mut() }.copy_from_slice(&[7, 8]);
        assert_eq!(1, stream.advance());
        assert_eq!(2, stream.current_slot());
        unsafe { stream.slot_mut() }.copy_from_slice(&[5, 6]);

        assert_eq!(16, stream.stride());
        assert_eq!(8, stream.size_bytes());
        assert_eq!(8, stream.range_bytes());
        assert_eq!(&[0, 0, 0, 0, 7, 8, 0, 0, 5, 6, 0, 0][..], &memory[..]);

        drop(stream);
        assert_eq!(Some(Destroyed::Buffer(9)), queue.next());
    }

    #[test]
    fn empty_stream_binds_its_stride() {
        let queue = Queue::new();
        let stream: BufferStream<[f32; 4]> =
            BufferStream::new(3, ptr::null_mut(), 0, slot_stride(0, 256), queue.tx());
        assert!(stream.is_empty());
        assert!(!stream.is_mapped());
        assert_eq!(0, stream.size_bytes());
        assert_eq!(256, stream.range_bytes());
    }

    #[test]
    fn streams_can_be_sent_to_other_threads() {
        fn assert_send<T: Send>() {}
        assert_send::<BufferStream<[f32; 4]>>();
        assert_send::<Fence>();

        let queue = Queue::new();
        let stream: BufferStream<u32> = BufferStream::new(5, ptr::null_mut(), 4, 16, queue.tx());
        std::thread::spawn(move || drop(stream)).join().unwrap();
        assert_eq!(Some(Destroyed::Buffer(5)), queue.next());
    }

    #[test]
    fn released_fence_is_not_queued() {
        let queue = Queue::new();
        let fence = Fence::new(0x1000, queue.tx());
        assert_eq!(0x1000, fence.into_sync());
        assert_eq!(None, queue.next());

        let mut fence = Fence::new(0x2000, queue.tx());
        assert_eq!(0x2000, fence.replace(0x3000));
        drop(fence);
        assert_eq!(Some(Destroyed::Fence(0x3000)), queue.next());
    }
}
