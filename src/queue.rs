use crossbeam_channel as chan;
use std::ops;

/// Send half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Sender<T> = chan::Sender<T>;

/// Receive half of a [`Queue`].
///
/// [`Queue`]: struct.Queue.html
pub type Receiver<T> = chan::Receiver<T>;

/// A thread-safe queue.
///
/// Unbounded, so a handle dropped on the context thread never blocks
/// waiting for the factory to drain it.
#[derive(Clone)]
pub struct Queue<T> {
    /// Send half of the queue.
    tx: Sender<T>,

    /// Receive half of the queue.
    rx: Receiver<T>,
}

impl<T> Queue<T> {
    /// Constructor.
    pub fn new() -> Self {
        let (tx, rx) = chan::unbounded();
        Self { tx, rx }
    }

    /// Clone the send half of the queue.
    pub fn tx(&self) -> Sender<T> {
        self.tx.clone()
    }

    /// Remove the item from the front of the queue.
    pub fn next(&self) -> Option<T> {
        self.rx.try_recv().ok()
    }

    /// Remove every item currently in the queue.
    pub fn drain(&self) -> chan::TryIter<T> {
        self.rx.try_iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An OpenGL object whose last handle was dropped.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Destroyed {
    /// A shader object.
    Shader(u32),

    /// A linked program.
    Program(u32),

    /// A buffer object.
    Buffer(u32),

    /// A texture of any target.
    Texture(u32),

    /// A vertex array object.
    VertexArray(u32),

    /// A renderbuffer object.
    Renderbuffer(u32),

    /// A framebuffer object.
    Framebuffer(u32),

    /// A fence sync object, stored as its address.
    Fence(usize),
}

/// Pushes a [`Destroyed`] message onto the factory queue when dropped.
///
/// Handles keep one of these behind an `Arc`, so the object is released
/// once the last clone of the handle goes away.
///
/// [`Destroyed`]: enum.Destroyed.html
pub struct Destructor {
    item: Destroyed,
    tx: Sender<Destroyed>,
}

impl Destructor {
    /// Constructor.
    pub fn new(item: Destroyed, tx: Sender<Destroyed>) -> Self {
        Self { item, tx }
    }
}

impl ops::Drop for Destructor {
    fn drop(&mut self) {
        // The factory may already be gone, in which case so is the context.
        let _ = self.tx.send(self.item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_in_order() {
        let queue = Queue::new();
        let tx = queue.tx();
        tx.send(Destroyed::Buffer(1)).unwrap();
        tx.send(Destroyed::Texture(2)).unwrap();
        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(vec![Destroyed::Buffer(1), Destroyed::Texture(2)], drained);
        assert_eq!(None, queue.next());
    }

    #[test]
    fn destructor_reports_on_drop() {
        let queue = Queue::new();
        let destructor = Destructor::new(Destroyed::Program(7), queue.tx());
        assert_eq!(None, queue.next());
        drop(destructor);
        assert_eq!(Some(Destroyed::Program(7)), queue.next());
    }

    #[test]
    fn destructor_outlives_dropped_queue() {
        let queue = Queue::new();
        let destructor = Destructor::new(Destroyed::Shader(1), queue.tx());
        drop(queue);
        drop(destructor);
    }
}
