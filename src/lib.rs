//! Ownership of OpenGL object names.
//!
//! Every object is wrapped in a [`GlHandle`] that deletes it exactly
//! once: on [`GlHandle::release()`] or when the handle goes out of
//! scope. Objects that end up on another thread go through a
//! [`DeletionQueue`] that the context thread drains.

pub mod context;
pub mod deletion_queue;
pub mod error;
pub mod gl_context;
pub mod handle;
mod objects;

#[cfg(test)]
mod mock;

pub use context::{DeleteAny, Gl11, Gl15, Gl20, Gl30, Gl45, ShaderType, TextureTarget};
pub use deletion_queue::{Deferred, DeletionQueue};
pub use error::{Error, Result};
pub use gl::types::GLuint;
pub use gl_context::GlContext;
pub use handle::{
    GlHandle, GlKind, GlObject, ObjectKind, Program, ProgramKind, Shader, ShaderKind, Texture,
    TextureKind, VertexArray, VertexArrayKind, VertexBuffer, VertexBufferKind,
};
