/// What a scheduled frame does once it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameKind {
    Update,
    Reset,
}

/// Holds at most one outstanding request. Installing a new one hands back the
/// previous handle so the caller can cancel it.
#[derive(Debug)]
pub struct FrameSlot<H> {
    pending: Option<(H, FrameKind)>,
}

impl<H> Default for FrameSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameSlot<H> {
    #[inline]
    pub fn replace(&mut self, handle: H, kind: FrameKind) -> Option<H> {
        self.pending.replace((handle, kind)).map(|(h, _)| h)
    }

    #[inline]
    pub fn take(&mut self) -> Option<(H, FrameKind)> {
        self.pending.take()
    }

    #[inline]
    pub fn kind(&self) -> Option<FrameKind> {
        self.pending.as_ref().map(|(_, k)| *k)
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
