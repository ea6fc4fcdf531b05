use crate::domain::model::PhotoHandle;

/// Holds at most one picked photo for a single role.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhotoSlot {
    handle: Option<PhotoHandle>,
}

impl PhotoSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces whatever the slot held. Returns the previous handle.
    pub fn set(&mut self, handle: PhotoHandle) -> Option<PhotoHandle> {
        self.handle.replace(handle)
    }

    pub fn clear(&mut self) {
        self.handle = None;
    }

    pub fn is_filled(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<&PhotoHandle> {
        self.handle.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(s: &str) -> PhotoHandle {
        PhotoHandle::new(s).unwrap()
    }

    #[test]
    fn test_new_slot_is_empty() {
        let slot = PhotoSlot::new();
        assert!(!slot.is_filled());
        assert!(slot.handle().is_none());
    }

    #[test]
    fn test_set_replaces_previous_handle() {
        let mut slot = PhotoSlot::new();
        assert_eq!(slot.set(handle("a")), None);
        assert_eq!(slot.set(handle("b")), Some(handle("a")));
        assert_eq!(slot.handle(), Some(&handle("b")));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut slot = PhotoSlot::new();
        slot.clear();
        assert!(!slot.is_filled());

        slot.set(handle("a"));
        slot.clear();
        slot.clear();
        assert!(!slot.is_filled());
    }

    #[test]
    fn test_last_call_wins() {
        let mut slot = PhotoSlot::new();
        let ops: [Option<&str>; 6] = [Some("a"), None, Some("b"), Some("c"), None, Some("d")];
        for op in ops {
            match op {
                Some(h) => {
                    slot.set(handle(h));
                    assert!(slot.is_filled());
                    assert_eq!(slot.handle().map(PhotoHandle::as_str), Some(h));
                }
                None => {
                    slot.clear();
                    assert!(!slot.is_filled());
                }
            }
        }
    }
}
