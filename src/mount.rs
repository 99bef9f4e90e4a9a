/// Mount lifecycle across the async WebGPU setup. An unmount that arrives
/// while mounting is remembered and applied when the mount finishes.
#[derive(Debug)]
pub enum MountSlot<T> {
    Idle,
    Mounting {
        cancelled: bool,
    },
    Mounted(T),
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> MountSlot<T> {
    /// Enter `Mounting`. `false` if a mount is already underway or live.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Mounting { cancelled: false };
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn cancel_requested(&self) -> bool {
        matches!(self, Self::Mounting { cancelled: true })
    }

    /// Returns the live mount to tear down. While mounting, flags the
    /// mount as cancelled instead and returns `None`.
    pub fn unmount(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Self::Mounted(value) => Some(value),
            Self::Mounting { .. } => {
                *self = Self::Mounting { cancelled: true };
                None
            }
            Self::Idle => None,
        }
    }

    /// Complete a mount (`None` when it failed or bailed out). Hands the
    /// value back if an unmount was requested meanwhile; the caller tears
    /// it down and the slot is left idle.
    pub fn finish(&mut self, value: Option<T>) -> Option<T> {
        match (std::mem::take(self), value) {
            (Self::Mounting { cancelled: false }, Some(value)) => {
                *self = Self::Mounted(value);
                None
            }
            (Self::Mounted(live), value) => {
                *self = Self::Mounted(live);
                value
            }
            (_, value) => value,
        }
    }
}
