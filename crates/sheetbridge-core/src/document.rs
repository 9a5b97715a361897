//! Shared in-memory document handle
//!
//! A spreadsheet adapter owns its native document through a [`Document`];
//! every sheet view it hands out holds a [`DocumentRef`], a weak reference to
//! the same document. Closing the adapter drops the only strong reference, so
//! any later access through a sheet view fails with [`Error::Closed`] instead
//! of touching freed state.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::{Error, Result};

/// Owning handle on a native document
#[derive(Debug)]
pub struct Document<D> {
    inner: Option<Rc<RefCell<D>>>,
}

impl<D> Document<D> {
    /// Take ownership of a loaded or freshly created document
    pub fn new(doc: D) -> Self {
        Self {
            inner: Some(Rc::new(RefCell::new(doc))),
        }
    }

    /// Non-owning reference for a sheet view
    pub fn handle(&self) -> DocumentRef<D> {
        DocumentRef {
            inner: self.inner.as_ref().map(Rc::downgrade).unwrap_or_default(),
        }
    }

    /// Whether [`close`](Self::close) has been called
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Run `f` with shared access to the document
    pub fn with<R>(&self, f: impl FnOnce(&D) -> Result<R>) -> Result<R> {
        let rc = self.inner.as_ref().ok_or(Error::Closed)?;
        let doc = rc.borrow();
        f(&doc)
    }

    /// Run `f` with exclusive access to the document
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut D) -> Result<R>) -> Result<R> {
        let rc = self.inner.as_ref().ok_or(Error::Closed)?;
        let mut doc = rc.borrow_mut();
        f(&mut doc)
    }

    /// Release the document. Returns false if it was already released.
    pub fn close(&mut self) -> bool {
        self.inner.take().is_some()
    }
}

/// Weak reference from a sheet view to its document
#[derive(Debug)]
pub struct DocumentRef<D> {
    inner: Weak<RefCell<D>>,
}

impl<D> Clone for DocumentRef<D> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<D> DocumentRef<D> {
    /// Whether the owning spreadsheet is still open
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Run `f` with shared access, or fail with [`Error::Closed`]
    pub fn with<R>(&self, f: impl FnOnce(&D) -> Result<R>) -> Result<R> {
        let rc = self.inner.upgrade().ok_or(Error::Closed)?;
        let doc = rc.borrow();
        f(&doc)
    }

    /// Run `f` with exclusive access, or fail with [`Error::Closed`]
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut D) -> Result<R>) -> Result<R> {
        let rc = self.inner.upgrade().ok_or(Error::Closed)?;
        let mut doc = rc.borrow_mut();
        f(&mut doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_sees_owner_mutations() {
        let doc = Document::new(vec![1, 2]);
        let r = doc.handle();
        doc.with_mut(|v| {
            v.push(3);
            Ok(())
        })
        .unwrap();
        assert_eq!(r.with(|v| Ok(v.len())).unwrap(), 3);
    }

    #[test]
    fn test_close_invalidates_refs() {
        let mut doc = Document::new(String::from("x"));
        let r = doc.handle();
        assert!(r.is_alive());

        assert!(doc.close());
        assert!(!doc.close());
        assert!(doc.is_closed());
        assert!(!r.is_alive());
        assert!(matches!(r.with(|s| Ok(s.len())), Err(Error::Closed)));
        assert!(matches!(doc.with(|s| Ok(s.len())), Err(Error::Closed)));
    }

    #[test]
    fn test_handle_after_close_is_dead() {
        let mut doc = Document::new(0u8);
        doc.close();
        assert!(!doc.handle().is_alive());
    }
}
