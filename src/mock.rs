//! Scriptable context that records every entrypoint call.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::sync::Once;

use gl::types::{GLenum, GLuint};

use crate::context::{Gl11, Gl15, Gl20, Gl30, Gl45, ShaderType, TextureTarget};
use crate::error::{Error, Result};
use crate::handle::ObjectKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    GenTextures(GLuint),
    CreateTextures(TextureTarget, GLuint),
    DeleteTextures(GLuint),
    GenBuffers(GLuint),
    CreateBuffers(GLuint),
    DeleteBuffers(GLuint),
    CreateProgram(GLuint),
    DeleteProgram(GLuint),
    CreateShader(ShaderType, GLuint),
    DeleteShader(GLuint),
    GenVertexArrays(GLuint),
    CreateVertexArrays(GLuint),
    DeleteVertexArrays(GLuint),
}

impl Call {
    fn is_delete(&self) -> bool {
        matches!(
            self,
            Call::DeleteTextures(_)
                | Call::DeleteBuffers(_)
                | Call::DeleteProgram(_)
                | Call::DeleteShader(_)
                | Call::DeleteVertexArrays(_)
        )
    }
}

/// Hands out the scripted ids first, then counts up from 1000.
#[derive(Debug)]
pub struct MockContext {
    ids: RefCell<VecDeque<GLuint>>,
    next_id: Cell<GLuint>,
    fail: Cell<Option<GLenum>>,
    calls: RefCell<Vec<Call>>,
}

impl MockContext {
    pub fn new() -> Self {
        Self::with_ids(&[])
    }

    pub fn with_ids(ids: &[GLuint]) -> Self {
        Self {
            ids: RefCell::new(ids.iter().copied().collect()),
            next_id: Cell::new(1000),
            fail: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Make the next allocation fail with `code`.
    pub fn fail_next(&self, code: GLenum) {
        self.fail.set(Some(code));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn deletes(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .copied()
            .filter(Call::is_delete)
            .collect()
    }

    fn allocate(&self, kind: ObjectKind, call: impl FnOnce(GLuint) -> Call) -> Result<GLuint> {
        if let Some(code) = self.fail.take() {
            return Err(Error::Driver { kind, code });
        }
        let id = match self.ids.borrow_mut().pop_front() {
            Some(id) => id,
            None => {
                let id = self.next_id.get();
                self.next_id.set(id + 1);
                id
            }
        };
        self.calls.borrow_mut().push(call(id));
        Ok(id)
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Gl11 for MockContext {
    fn gen_textures(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::Texture, Call::GenTextures)
    }

    fn delete_textures(&self, id: GLuint) {
        self.record(Call::DeleteTextures(id));
    }
}

impl Gl15 for MockContext {
    fn gen_buffers(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::VertexBuffer, Call::GenBuffers)
    }

    fn delete_buffers(&self, id: GLuint) {
        self.record(Call::DeleteBuffers(id));
    }
}

impl Gl20 for MockContext {
    fn create_program(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::Program, Call::CreateProgram)
    }

    fn delete_program(&self, id: GLuint) {
        self.record(Call::DeleteProgram(id));
    }

    fn create_shader(&self, shader_type: ShaderType) -> Result<GLuint> {
        self.allocate(ObjectKind::Shader, |id| Call::CreateShader(shader_type, id))
    }

    fn delete_shader(&self, id: GLuint) {
        self.record(Call::DeleteShader(id));
    }
}

impl Gl30 for MockContext {
    fn gen_vertex_arrays(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::VertexArray, Call::GenVertexArrays)
    }

    fn delete_vertex_arrays(&self, id: GLuint) {
        self.record(Call::DeleteVertexArrays(id));
    }
}

impl Gl45 for MockContext {
    fn create_textures(&self, target: TextureTarget) -> Result<GLuint> {
        self.allocate(ObjectKind::Texture, |id| Call::CreateTextures(target, id))
    }

    fn create_vertex_arrays(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::VertexArray, Call::CreateVertexArrays)
    }

    fn create_buffers(&self) -> Result<GLuint> {
        self.allocate(ObjectKind::VertexBuffer, Call::CreateBuffers)
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(log::Level, String)>> = RefCell::new(Vec::new());
}

/// Keeps the records logged on each test thread apart, tests run in
/// parallel.
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        RECORDS.with(|records| {
            records
                .borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL_LOGGER: Once = Once::new();

/// Run `f` and return the warnings and errors it logged on this thread.
pub fn capture_logs<F: FnOnce()>(f: F) -> Vec<(log::Level, String)> {
    INSTALL_LOGGER.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
    RECORDS.with(|records| records.borrow_mut().clear());
    f();
    RECORDS.with(|records| {
        records
            .borrow_mut()
            .drain(..)
            .filter(|(level, _)| *level <= log::Level::Warn)
            .collect()
    })
}
