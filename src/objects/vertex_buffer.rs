use std::rc::Rc;

use crate::context::{Gl15, Gl45};
use crate::error::Result;
use crate::handle::VertexBuffer;

impl<C: Gl15> VertexBuffer<C> {
    /// Generate a buffer name with `glGenBuffers`.
    pub fn gen(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.gen_buffers())
    }
}

impl<C: Gl15 + Gl45> VertexBuffer<C> {
    /// Create a buffer with `glCreateBuffers`.
    pub fn create(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.create_buffers())
    }
}
