//! Capabilities of an OpenGL context, split by the GL version that
//! introduced each entrypoint family.
//!
//! Constructors ask for the smallest set they need. The modern (DSA)
//! constructors need [`Gl45`] together with the legacy capability of
//! the same kind, since the legacy one also provides the delete
//! entrypoint.

use gl::types::{GLenum, GLuint};

use crate::error::Result;

/// Texture names.
pub trait Gl11 {
    fn gen_textures(&self) -> Result<GLuint>;
    fn delete_textures(&self, id: GLuint);
}

/// Buffer names.
pub trait Gl15 {
    fn gen_buffers(&self) -> Result<GLuint>;
    fn delete_buffers(&self, id: GLuint);
}

/// Programs and shaders.
pub trait Gl20 {
    fn create_program(&self) -> Result<GLuint>;
    fn delete_program(&self, id: GLuint);
    fn create_shader(&self, shader_type: ShaderType) -> Result<GLuint>;
    fn delete_shader(&self, id: GLuint);
}

/// Vertex array names.
pub trait Gl30 {
    fn gen_vertex_arrays(&self) -> Result<GLuint>;
    fn delete_vertex_arrays(&self, id: GLuint);
}

/// Direct state access: objects are created and initialized in one
/// call instead of being initialized on first bind.
pub trait Gl45 {
    fn create_textures(&self, target: TextureTarget) -> Result<GLuint>;
    fn create_vertex_arrays(&self) -> Result<GLuint>;
    fn create_buffers(&self) -> Result<GLuint>;
}

/// A context that can delete every kind of object. Only needed where
/// the kind is known at runtime, see
/// [`DeletionQueue::drain()`](crate::deletion_queue::DeletionQueue::drain).
pub trait DeleteAny: Gl11 + Gl15 + Gl20 + Gl30 {}

impl<T: Gl11 + Gl15 + Gl20 + Gl30> DeleteAny for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderType {
    Vertex,
    Fragment,
    Geometry,
    TessControl,
    TessEvaluation,
    Compute,
}

impl ShaderType {
    pub fn to_gl(self) -> GLenum {
        match self {
            ShaderType::Vertex => gl::VERTEX_SHADER,
            ShaderType::Fragment => gl::FRAGMENT_SHADER,
            ShaderType::Geometry => gl::GEOMETRY_SHADER,
            ShaderType::TessControl => gl::TESS_CONTROL_SHADER,
            ShaderType::TessEvaluation => gl::TESS_EVALUATION_SHADER,
            ShaderType::Compute => gl::COMPUTE_SHADER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    Texture1D,
    Texture2D,
    Texture3D,
    Texture1DArray,
    Texture2DArray,
    Rectangle,
    CubeMap,
    CubeMapArray,
    Buffer,
    Texture2DMultisample,
    Texture2DMultisampleArray,
}

impl TextureTarget {
    pub fn to_gl(self) -> GLenum {
        match self {
            TextureTarget::Texture1D => gl::TEXTURE_1D,
            TextureTarget::Texture2D => gl::TEXTURE_2D,
            TextureTarget::Texture3D => gl::TEXTURE_3D,
            TextureTarget::Texture1DArray => gl::TEXTURE_1D_ARRAY,
            TextureTarget::Texture2DArray => gl::TEXTURE_2D_ARRAY,
            TextureTarget::Rectangle => gl::TEXTURE_RECTANGLE,
            TextureTarget::CubeMap => gl::TEXTURE_CUBE_MAP,
            TextureTarget::CubeMapArray => gl::TEXTURE_CUBE_MAP_ARRAY,
            TextureTarget::Buffer => gl::TEXTURE_BUFFER,
            TextureTarget::Texture2DMultisample => gl::TEXTURE_2D_MULTISAMPLE,
            TextureTarget::Texture2DMultisampleArray => gl::TEXTURE_2D_MULTISAMPLE_ARRAY,
        }
    }
}
