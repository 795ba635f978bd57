//! Deletion of objects that were dropped away from their context.
//!
//! OpenGL contexts belong to one thread and calling into them from
//! anywhere else is not allowed. A [`GlHandle`] is therefore `!Send`.
//! When an object has to be owned somewhere else it is turned into a
//! [`Deferred`], which only carries the name. Dropping a [`Deferred`]
//! pushes the name onto a [`DeletionQueue`] and the context thread
//! deletes it on the next [`DeletionQueue::drain()`].
//!
//! This path is a leak safety net, every use of it is logged as a
//! warning. Objects should be reclaimed with [`Deferred::reclaim()`]
//! and released on the context thread.

use std::marker::PhantomData;
use std::rc::Rc;

use crossbeam_channel::{Receiver, Sender};
use gl::types::GLuint;

use crate::context::DeleteAny;
use crate::handle::{GlHandle, GlKind, GlObject, ObjectKind};

pub struct DeletionQueue {
    sender: Sender<(ObjectKind, GLuint)>,
    receiver: Receiver<(ObjectKind, GLuint)>,
}

impl DeletionQueue {
    pub fn new() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded();
        Self { sender, receiver }
    }

    /// Number of objects waiting to be deleted.
    pub fn pending(&self) -> usize {
        self.receiver.len()
    }

    /// Delete every queued object. Must be called on the thread that
    /// owns `gl`. Returns the number of objects deleted.
    pub fn drain<C: DeleteAny + ?Sized>(&self, gl: &C) -> usize {
        let mut deleted = 0;
        for (kind, id) in self.receiver.try_iter() {
            log::debug!("deleting queued {} {}", kind, id);
            kind.delete_with(gl, id);
            deleted += 1;
        }
        deleted
    }
}

impl Default for DeletionQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DeletionQueue {
    fn drop(&mut self) {
        let pending = self.pending();
        if pending != 0 {
            log::warn!(
                "deletion queue dropped with {} objects never drained, they leak",
                pending
            );
        }
    }
}

impl std::fmt::Debug for DeletionQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeletionQueue")
            .field("pending", &self.pending())
            .finish()
    }
}

/// An object name detached from its context, see
/// [`GlHandle::into_deferred()`].
pub struct Deferred<K> {
    kind: ObjectKind,
    id: GLuint,
    /// Whether the object still needs deleting.
    live: bool,
    sender: Sender<(ObjectKind, GLuint)>,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Deferred<K> {
    pub(crate) fn new(kind: ObjectKind, id: GLuint, live: bool, queue: &DeletionQueue) -> Self {
        Self {
            kind,
            id,
            live,
            sender: queue.sender.clone(),
            _kind: PhantomData,
        }
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Turn back into a handle on the context thread. `gl` must be the
    /// context the object was allocated from.
    pub fn reclaim<C>(mut self, gl: &Rc<C>) -> GlHandle<K, C>
    where
        K: GlKind<C>,
    {
        let live = self.live;
        self.live = false;
        let mut handle = GlHandle::adopt(gl, self.id);
        if !live {
            handle.mark_released();
        }
        handle
    }
}

impl<K> GlObject for Deferred<K> {
    fn id(&self) -> GLuint {
        self.id
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }
}

impl<K> Drop for Deferred<K> {
    fn drop(&mut self) {
        if !self.live {
            return;
        }
        self.live = false;
        log::warn!(
            "{} {} dropped away from its context, queued for deletion",
            self.kind,
            self.id
        );
        if self.sender.send((self.kind, self.id)).is_err() {
            log::error!(
                "{} {} leaked, its deletion queue no longer exists",
                self.kind,
                self.id
            );
        }
    }
}

impl<K> std::fmt::Debug for Deferred<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deferred")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .field("live", &self.live)
            .finish()
    }
}
