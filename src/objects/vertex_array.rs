use std::rc::Rc;

use crate::context::{Gl30, Gl45};
use crate::error::Result;
use crate::handle::VertexArray;

impl<C: Gl30> VertexArray<C> {
    /// Generate a vertex array name with `glGenVertexArrays`.
    pub fn gen(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.gen_vertex_arrays())
    }
}

impl<C: Gl30 + Gl45> VertexArray<C> {
    /// Create a vertex array with `glCreateVertexArrays`.
    pub fn create(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.create_vertex_arrays())
    }
}
