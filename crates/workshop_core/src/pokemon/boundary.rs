use super::{InfoError, InfoView};

/// Catches errors raised while rendering its child and shows a fallback
/// until reset, either explicitly or by a change of its reset keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorBoundary<K> {
    reset_keys: Vec<K>,
    caught: Option<InfoError>,
}

impl<K: PartialEq> ErrorBoundary<K> {
    pub fn new(reset_keys: Vec<K>) -> Self {
        Self {
            reset_keys,
            caught: None,
        }
    }

    pub fn caught(&self) -> Option<&InfoError> {
        self.caught.as_ref()
    }

    pub fn reset_keys(&self) -> &[K] {
        &self.reset_keys
    }

    /// Renders the child, substituting the fallback for a held or raised error.
    pub fn view(&self, child: impl FnOnce() -> Result<InfoView, InfoError>) -> InfoView {
        let failed = |err: &InfoError| InfoView::Failed {
            message: err.message.clone(),
        };
        match &self.caught {
            Some(err) => failed(err),
            None => child().unwrap_or_else(|err| failed(&err)),
        }
    }

    pub(crate) fn catch(&mut self, err: InfoError) {
        self.caught = Some(err);
    }

    /// Returns `true` when the change cleared a held error.
    pub(crate) fn set_reset_keys(&mut self, reset_keys: Vec<K>) -> bool {
        if reset_keys == self.reset_keys {
            return false;
        }
        self.reset_keys = reset_keys;
        self.caught.take().is_some()
    }

    pub(crate) fn reset(&mut self) -> bool {
        self.caught.take().is_some()
    }
}
