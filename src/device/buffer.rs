/// Buffer trait and descriptor

/// What a buffer is bound as during a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Interleaved vertex attribute data
    Vertex,
    /// 32-bit index data
    Index,
}

/// Descriptor for creating a buffer
///
/// Buffers in this pipeline are immutable after creation: meshes and the
/// full-screen quad are built once at load time.
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// How the buffer will be bound
    pub kind: BufferKind,
    /// Raw contents, uploaded at creation time
    pub data: Vec<u8>,
}

/// Buffer resource trait
///
/// Implemented by backend-specific buffer types. The GPU memory is released
/// when the last reference is dropped.
pub trait Buffer: Send + Sync {
    /// What the buffer is bound as
    fn kind(&self) -> BufferKind;

    /// Size of the buffer contents in bytes
    fn len(&self) -> u64;

    /// Returns true if the buffer holds no data
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
