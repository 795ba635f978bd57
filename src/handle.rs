use std::marker::PhantomData;
use std::rc::Rc;

use gl::types::GLuint;
use paste::paste;

use crate::context::{DeleteAny, Gl11, Gl15, Gl20, Gl30};
use crate::deletion_queue::{Deferred, DeletionQueue};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Program,
    Shader,
    Texture,
    VertexArray,
    VertexBuffer,
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Program => "program",
            ObjectKind::Shader => "shader",
            ObjectKind::Texture => "texture",
            ObjectKind::VertexArray => "vertex array",
            ObjectKind::VertexBuffer => "vertex buffer",
        }
    }

    /// Delete `id` as an object of this kind.
    pub fn delete_with<C: DeleteAny + ?Sized>(&self, gl: &C, id: GLuint) {
        match self {
            ObjectKind::Program => gl.delete_program(id),
            ObjectKind::Shader => gl.delete_shader(id),
            ObjectKind::Texture => gl.delete_textures(id),
            ObjectKind::VertexArray => gl.delete_vertex_arrays(id),
            ObjectKind::VertexBuffer => gl.delete_buffers(id),
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Any OpenGL object this crate hands out.
pub trait GlObject {
    /// Driver assigned name of the object. Still returned after the
    /// object was released, using it then is a caller error.
    fn id(&self) -> GLuint;
    fn kind(&self) -> ObjectKind;
}

/// Marker for a kind of OpenGL object that a context of type `C` is
/// able to delete.
pub trait GlKind<C> {
    const KIND: ObjectKind;

    fn delete(gl: &C, id: GLuint);
}

/// Owns one OpenGL object name.
///
/// The object is deleted exactly once, either by [`Self::release()`]
/// or when the handle goes out of scope. The handle keeps the
/// context alive through the [`Rc`], so a context can never be torn
/// down under a live handle.
///
/// Handles are tied to the thread of their context. Use
/// [`Self::into_deferred()`] to move an object to another thread.
pub struct GlHandle<K: GlKind<C>, C> {
    gl: Rc<C>,
    id: GLuint,
    released: bool,
    _kind: PhantomData<fn() -> K>,
}

impl<K: GlKind<C>, C> GlHandle<K, C> {
    /// Run `allocate` against the context and take ownership of the
    /// returned name. The reserved name 0 is treated as a failure.
    ///
    /// `allocate` must call an entrypoint of kind `K`, otherwise the
    /// name is later handed to the wrong delete entrypoint. Only the
    /// per-kind constructors in `objects` call this.
    pub(crate) fn allocate<F>(gl: &Rc<C>, allocate: F) -> Result<Self>
    where
        F: FnOnce(&C) -> Result<GLuint>,
    {
        let id = allocate(gl.as_ref())?;
        if id == 0 {
            return Err(Error::NullObject { kind: K::KIND });
        }
        log::trace!("allocated {} {}", K::KIND, id);

        Ok(Self::adopt(gl, id))
    }

    pub(crate) fn adopt(gl: &Rc<C>, id: GLuint) -> Self {
        Self {
            gl: gl.clone(),
            id,
            released: false,
            _kind: PhantomData,
        }
    }

    pub(crate) fn mark_released(&mut self) {
        self.released = true;
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn kind(&self) -> ObjectKind {
        K::KIND
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    pub fn context(&self) -> &Rc<C> {
        &self.gl
    }

    /// Delete the object. Only the first call reaches the driver.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        log::debug!("releasing {} {}", K::KIND, self.id);
        K::delete(&self.gl, self.id);
    }

    /// Detach the object from the context so it can be sent to other
    /// threads. The object is not deleted. If the returned
    /// [`Deferred`] is dropped it is queued on `queue` and deleted on
    /// the next [`DeletionQueue::drain()`].
    ///
    /// An already released handle gives a [`Deferred`] that never
    /// reaches the queue.
    pub fn into_deferred(mut self, queue: &DeletionQueue) -> Deferred<K> {
        let deferred = Deferred::new(K::KIND, self.id, !self.released, queue);
        self.mark_released();
        deferred
    }
}

impl<K: GlKind<C>, C> GlObject for GlHandle<K, C> {
    fn id(&self) -> GLuint {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        K::KIND
    }
}

impl<K: GlKind<C>, C> Drop for GlHandle<K, C> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<K: GlKind<C>, C> std::fmt::Debug for GlHandle<K, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlHandle")
            .field("kind", &K::KIND)
            .field("id", &self.id)
            .field("released", &self.released)
            .finish()
    }
}

macro_rules! object_kind {
    ( $(#[$doc:meta])* $name:ident ; $capability:ident ; $delete:ident ) => {
        paste! {
            #[derive(Debug)]
            pub enum [<$name Kind>] {}

            impl<C: $capability> GlKind<C> for [<$name Kind>] {
                const KIND: ObjectKind = ObjectKind::$name;

                fn delete(gl: &C, id: GLuint) {
                    gl.$delete(id);
                }
            }

            $(#[$doc])*
            pub type $name<C> = GlHandle<[<$name Kind>], C>;
        }
    };
}

object_kind!(
    /// An OpenGL program object.
    Program; Gl20; delete_program
);
object_kind!(
    /// An OpenGL shader object.
    Shader; Gl20; delete_shader
);
object_kind!(
    /// An OpenGL texture.
    Texture; Gl11; delete_textures
);
object_kind!(
    /// An OpenGL vertex array object.
    VertexArray; Gl30; delete_vertex_arrays
);
object_kind!(
    /// An OpenGL buffer object.
    VertexBuffer; Gl15; delete_buffers
);
