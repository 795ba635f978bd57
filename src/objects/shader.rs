use std::rc::Rc;

use crate::context::{Gl20, ShaderType};
use crate::error::Result;
use crate::handle::Shader;

impl<C: Gl20> Shader<C> {
    /// Create a shader of `shader_type` with `glCreateShader`.
    pub fn create(gl: &Rc<C>, shader_type: ShaderType) -> Result<Self> {
        Self::allocate(gl, |gl| gl.create_shader(shader_type))
    }
}
