use std::ffi::CStr;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_void};

use gl::types::{GLenum, GLint, GLuint};

use crate::context::{Gl11, Gl15, Gl20, Gl30, Gl45, ShaderType, TextureTarget};
use crate::error::{Error, Result};
use crate::handle::ObjectKind;

/// glGetError keeps one flag per error kind, a handful of reads clears
/// all of them.
const MAX_PENDING_ERRORS: usize = 16;

/// The OpenGL context current on this thread, driven through the
/// global function pointers of the `gl` crate.
pub struct GlContext {
    major: GLint,
    minor: GLint,
    /// OpenGL 4.5 or `GL_ARB_direct_state_access`.
    direct_state_access: bool,
    // contexts are bound to the thread they are current on
    _not_send: PhantomData<*const ()>,
}

impl GlContext {
    /// Load the OpenGL function pointers with `loadfn` and query the
    /// context version.
    ///
    /// # Safety
    ///
    /// The context `loadfn` belongs to must be current on the calling
    /// thread, and must stay current on it for as long as the returned
    /// [`GlContext`] or any object allocated from it is alive.
    pub unsafe fn load_with<F>(loadfn: F) -> Self
    where
        F: FnMut(&'static str) -> *const c_void,
    {
        gl::load_with(loadfn);

        let mut major = 0;
        let mut minor = 0;
        gl::GetIntegerv(gl::MAJOR_VERSION, &mut major);
        gl::GetIntegerv(gl::MINOR_VERSION, &mut minor);
        let direct_state_access = (major, minor) >= (4, 5)
            || (major >= 3 && has_extension("GL_ARB_direct_state_access"));
        log::info!(
            "loaded OpenGL {}.{} context, direct state access: {}",
            major,
            minor,
            direct_state_access
        );

        Self {
            major,
            minor,
            direct_state_access,
            _not_send: PhantomData,
        }
    }

    pub fn version(&self) -> (GLint, GLint) {
        (self.major, self.minor)
    }

    pub fn supports(&self, major: GLint, minor: GLint) -> bool {
        (self.major, self.minor) >= (major, minor)
    }

    pub fn has_direct_state_access(&self) -> bool {
        self.direct_state_access
    }

    /// Loaders hand out pointers for entrypoints the context does not
    /// implement, so the pointer being loaded is not enough.
    fn require_direct_state_access(
        &self,
        kind: ObjectKind,
        entrypoint: &'static str,
        loaded: bool,
    ) -> Result<()> {
        if self.direct_state_access && loaded {
            Ok(())
        } else {
            Err(Error::Unsupported { kind, entrypoint })
        }
    }

    /// Run `f`, attributing any GL error it raises to `kind`.
    fn checked<F>(&self, kind: ObjectKind, f: F) -> Result<GLuint>
    where
        F: FnOnce() -> GLuint,
    {
        unsafe {
            for _ in 0..MAX_PENDING_ERRORS {
                let stale = gl::GetError();
                if stale == gl::NO_ERROR {
                    break;
                }
                log::warn!("discarding stale GL error {:#06x}", stale);
            }
        }

        let id = f();

        let code: GLenum = unsafe { gl::GetError() };
        if code != gl::NO_ERROR {
            return Err(Error::Driver { kind, code });
        }
        Ok(id)
    }
}

/// # Safety
///
/// A context of version 3.0 or later must be current.
unsafe fn has_extension(name: &str) -> bool {
    if !gl::GetStringi::is_loaded() {
        return false;
    }
    let mut count = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut count);
    (0..count.max(0) as GLuint).any(|index| {
        let extension = gl::GetStringi(gl::EXTENSIONS, index);
        !extension.is_null()
            && CStr::from_ptr(extension as *const c_char).to_bytes() == name.as_bytes()
    })
}

impl std::fmt::Debug for GlContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlContext")
            .field("version", &self.version())
            .field("direct_state_access", &self.direct_state_access)
            .finish()
    }
}

impl Gl11 for GlContext {
    fn gen_textures(&self) -> Result<GLuint> {
        self.checked(ObjectKind::Texture, || {
            let mut id = 0;
            unsafe { gl::GenTextures(1, &mut id) };
            id
        })
    }

    fn delete_textures(&self, id: GLuint) {
        unsafe { gl::DeleteTextures(1, &id) };
    }
}

impl Gl15 for GlContext {
    fn gen_buffers(&self) -> Result<GLuint> {
        self.checked(ObjectKind::VertexBuffer, || {
            let mut id = 0;
            unsafe { gl::GenBuffers(1, &mut id) };
            id
        })
    }

    fn delete_buffers(&self, id: GLuint) {
        unsafe { gl::DeleteBuffers(1, &id) };
    }
}

impl Gl20 for GlContext {
    fn create_program(&self) -> Result<GLuint> {
        self.checked(ObjectKind::Program, || unsafe { gl::CreateProgram() })
    }

    fn delete_program(&self, id: GLuint) {
        unsafe { gl::DeleteProgram(id) };
    }

    fn create_shader(&self, shader_type: ShaderType) -> Result<GLuint> {
        self.checked(ObjectKind::Shader, || unsafe {
            gl::CreateShader(shader_type.to_gl())
        })
    }

    fn delete_shader(&self, id: GLuint) {
        unsafe { gl::DeleteShader(id) };
    }
}

impl Gl30 for GlContext {
    fn gen_vertex_arrays(&self) -> Result<GLuint> {
        self.checked(ObjectKind::VertexArray, || {
            let mut id = 0;
            unsafe { gl::GenVertexArrays(1, &mut id) };
            id
        })
    }

    fn delete_vertex_arrays(&self, id: GLuint) {
        unsafe { gl::DeleteVertexArrays(1, &id) };
    }
}

impl Gl45 for GlContext {
    fn create_textures(&self, target: TextureTarget) -> Result<GLuint> {
        self.require_direct_state_access(
            ObjectKind::Texture,
            "glCreateTextures",
            gl::CreateTextures::is_loaded(),
        )?;
        self.checked(ObjectKind::Texture, || {
            let mut id = 0;
            unsafe { gl::CreateTextures(target.to_gl(), 1, &mut id) };
            id
        })
    }

    fn create_vertex_arrays(&self) -> Result<GLuint> {
        self.require_direct_state_access(
            ObjectKind::VertexArray,
            "glCreateVertexArrays",
            gl::CreateVertexArrays::is_loaded(),
        )?;
        self.checked(ObjectKind::VertexArray, || {
            let mut id = 0;
            unsafe { gl::CreateVertexArrays(1, &mut id) };
            id
        })
    }

    fn create_buffers(&self) -> Result<GLuint> {
        self.require_direct_state_access(
            ObjectKind::VertexBuffer,
            "glCreateBuffers",
            gl::CreateBuffers::is_loaded(),
        )?;
        self.checked(ObjectKind::VertexBuffer, || {
            let mut id = 0;
            unsafe { gl::CreateBuffers(1, &mut id) };
            id
        })
    }
}
