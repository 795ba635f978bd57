use std::rc::Rc;

use crate::context::Gl20;
use crate::error::Result;
use crate::handle::Program;

impl<C: Gl20> Program<C> {
    /// Create a program with `glCreateProgram`.
    pub fn create(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.create_program())
    }
}
