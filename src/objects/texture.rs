use std::rc::Rc;

use crate::context::{Gl11, Gl45, TextureTarget};
use crate::error::Result;
use crate::handle::Texture;

impl<C: Gl11> Texture<C> {
    /// Generate a texture name with `glGenTextures`. The texture
    /// object only exists once the name is first bound.
    pub fn gen(gl: &Rc<C>) -> Result<Self> {
        Self::allocate(gl, |gl| gl.gen_textures())
    }
}

impl<C: Gl11 + Gl45> Texture<C> {
    /// Create a texture for `target` with `glCreateTextures`.
    pub fn create(gl: &Rc<C>, target: TextureTarget) -> Result<Self> {
        Self::allocate(gl, |gl| gl.create_textures(target))
    }
}
