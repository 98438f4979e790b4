/// The default number of slots reserved for the lookahead queue. Typical peek
/// depths are small, so this keeps the first few peeks allocation free.
pub const DEFAULT_QUEUE_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    pub queue_capacity: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl BufferConfig {
    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }
}
