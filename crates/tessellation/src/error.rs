use thiserror::Error;

/// An error that can happen when a [`BufferSink`](crate::BufferSink) is asked for memory.
///
/// The builders never propagate it: they log it and report that nothing was drawn by
/// returning an index count of zero.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GeometryBuilderError {
    #[error("buffers exhausted ({vertices} vertices and {indices} indices requested)")]
    Exhausted { vertices: u32, indices: u32 },
    #[error("too many vertices ({0}) for the index type")]
    TooManyVertices(u32),
}
