//! Per-session entry point for the transport layer
//!
//! A [`JailedSubsystem`] lives exactly as long as its session. The first
//! path operation resolves bucket, home, jail and filesystem; the result
//! is kept for the rest of the session.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::attributes::{filter_attributes, AttributeChange, AttributeChangeListener, Attributes};
use crate::error::JailError;
use crate::path::{DisplayPath, PathTranslator, PhysicalPath};
use crate::resolver::{Resolvers, SessionContext};
use crate::session::SessionHandle;

pub struct JailedSubsystem {
    session: SessionHandle,
    resolvers: Resolvers,
    context: Mutex<Option<Arc<SessionContext>>>,
    listeners: RwLock<Vec<Arc<dyn AttributeChangeListener>>>,
}

impl std::fmt::Debug for JailedSubsystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JailedSubsystem")
            .field("session", &self.session)
            .field("resolved", &self.context.lock().is_some())
            .field("listeners", &self.listeners.read().len())
            .finish()
    }
}

impl JailedSubsystem {
    pub fn new(session: SessionHandle, resolvers: Resolvers) -> Self {
        Self {
            session,
            resolvers,
            context: Mutex::new(None),
            listeners: RwLock::new(Vec::new()),
        }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    /// The session's resolved context, looked up on first use.
    ///
    /// Only successful lookups are cached. A failing lookup fails again
    /// on the next call rather than being remembered.
    pub fn context(&self) -> Result<Arc<SessionContext>, JailError> {
        let mut cached = self.context.lock();
        if let Some(context) = cached.as_ref() {
            return Ok(context.clone());
        }

        let context = Arc::new(self.resolvers.resolve_context(&self.session)?);
        *cached = Some(context.clone());
        Ok(context)
    }

    fn translator(&self) -> Result<PathTranslator, JailError> {
        let context = self.context()?;
        PathTranslator::new(&context)
    }

    /// Resolve a client path to the physical path used for storage.
    #[tracing::instrument(skip(self), fields(session = %self.session))]
    pub fn resolve_file(&self, path: &str) -> Result<PhysicalPath, JailError> {
        let physical = self.translator()?.resolve(path);
        tracing::debug!("resolved to {}", physical);
        Ok(physical)
    }

    /// Resolve a client path to the form shown back to the client.
    #[tracing::instrument(skip(self), fields(session = %self.session))]
    pub fn display_path(&self, path: &str) -> Result<DisplayPath, JailError> {
        let shown = self.translator()?.display(path);
        tracing::debug!("displayed as {}", shown);
        Ok(shown)
    }

    /// Prepare an attribute write.
    ///
    /// Disallowed attributes are filtered out first, then every listener
    /// is told about the write. The returned change is what the storage
    /// layer should apply.
    #[tracing::instrument(skip(self, attributes), fields(session = %self.session))]
    pub fn set_attributes(
        &self,
        path: &str,
        attributes: Attributes,
    ) -> Result<AttributeChange, JailError> {
        let path = self.resolve_file(path)?;
        let attributes = filter_attributes(attributes);

        for listener in self.listeners.read().iter() {
            listener.modifying_attributes(&self.session, &path, &attributes);
        }

        Ok(AttributeChange { path, attributes })
    }

    pub fn add_listener(&self, listener: Arc<dyn AttributeChangeListener>) {
        self.listeners.write().push(listener);
    }

    /// Remove a previously added listener, returning whether it was found
    pub fn remove_listener(&self, listener: &Arc<dyn AttributeChangeListener>) -> bool {
        let target = Arc::as_ptr(listener) as *const ();
        let mut listeners = self.listeners.write();
        let before = listeners.len();
        listeners.retain(|l| Arc::as_ptr(l) as *const () != target);
        listeners.len() != before
    }
}
