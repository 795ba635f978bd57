use crate::handle::ObjectKind;

/// Failure to allocate an OpenGL object. Nothing is allocated when
/// one of these is returned, so there is nothing to clean up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{kind} allocation returned the reserved id 0")]
    NullObject { kind: ObjectKind },
    #[error("{kind} allocation failed with GL error {code:#06x}")]
    Driver {
        kind: ObjectKind,
        code: gl::types::GLenum,
    },
    #[error("{kind} allocation needs {entrypoint} which the context did not load")]
    Unsupported {
        kind: ObjectKind,
        entrypoint: &'static str,
    },
}

impl Error {
    /// Kind of object whose allocation failed.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Error::NullObject { kind } => *kind,
            Error::Driver { kind, .. } => *kind,
            Error::Unsupported { kind, .. } => *kind,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_names_kind() {
        let err = Error::Driver {
            kind: ObjectKind::VertexArray,
            code: gl::OUT_OF_MEMORY,
        };
        assert_eq!(
            err.to_string(),
            "vertex array allocation failed with GL error 0x0505"
        );
        assert_eq!(err.kind(), ObjectKind::VertexArray);

        let err = Error::Unsupported {
            kind: ObjectKind::Texture,
            entrypoint: "glCreateTextures",
        };
        assert_eq!(
            err.to_string(),
            "texture allocation needs glCreateTextures which the context did not load"
        );
    }
}
