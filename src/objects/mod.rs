//! Constructors for each kind of object.
//!
//! Kinds that have both a legacy and a direct state access entrypoint
//! get `gen()` (name now, initialized on first bind) and `create()`
//! (name and object created together, needs [`Gl45`](crate::context::Gl45)).

mod program;
mod shader;
mod texture;
mod vertex_array;
mod vertex_buffer;
