//! Lifecycle state of a [`crate::SampleBuffer`]

/// How the contents of a consumed buffer have been rearranged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrangement {
    /// Partitioned around the middle by [`crate::SampleBuffer::median`]
    Partitioned,
    /// Fully sorted ascending by [`crate::SampleBuffer::sorted_element`]
    Sorted,
}

/// Where a buffer is in its fill/consume cycle
///
/// A buffer starts out [`Self::Filling`], becomes [`Self::Full`] once every active slot has been written,
/// and is [`Self::Consumed`] once a statistic has rearranged its contents.
/// Writing into a consumed (or full) buffer starts a new cycle over the stale data, which is [`Self::Overwriting`]
/// until the cursor wraps again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BufferState {
    /// Accepting samples, and every slot holds data in the order it was written
    ///
    /// Slots past the cursor hold the zero value left by [`crate::SampleBuffer::zero`].
    #[default]
    Filling,
    /// Accepting samples on top of stale contents, so slot order means nothing yet
    Overwriting,
    /// Every active slot holds a sample, in insertion order
    Full,
    /// A statistic has reordered the contents
    Consumed(Arrangement),
}

impl BufferState {
    /// Whether a full cycle of samples is waiting to be consumed
    pub fn is_full(self) -> bool {
        self == BufferState::Full
    }

    /// Whether the contents are sorted ascending
    pub fn is_sorted(self) -> bool {
        self == BufferState::Consumed(Arrangement::Sorted)
    }

    /// Whether slot `i` holds the `i`th sample written
    pub fn is_chronological(self) -> bool {
        matches!(self, BufferState::Filling | BufferState::Full)
    }

    /// State after writing one sample
    ///
    /// `wrapped` is whether that write filled the last active slot.
    pub(crate) fn after_write(self, wrapped: bool) -> Self {
        if wrapped {
            BufferState::Full
        } else if self == BufferState::Filling {
            BufferState::Filling
        } else {
            BufferState::Overwriting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        let all = [
            BufferState::Filling,
            BufferState::Overwriting,
            BufferState::Full,
            BufferState::Consumed(Arrangement::Partitioned),
            BufferState::Consumed(Arrangement::Sorted),
        ];

        // Sorted and chronological never hold at once
        for state in all {
            assert!(!(state.is_sorted() && state.is_chronological()), "{state:?}");
        }

        assert!(BufferState::Full.is_full());
        assert!(!BufferState::Filling.is_full());
        assert!(BufferState::default().is_chronological());
        assert!(!BufferState::Overwriting.is_chronological());
    }

    #[test]
    fn writes() {
        assert_eq!(BufferState::Filling.after_write(false), BufferState::Filling);
        assert_eq!(BufferState::Full.after_write(false), BufferState::Overwriting);
        assert_eq!(
            BufferState::Consumed(Arrangement::Sorted).after_write(false),
            BufferState::Overwriting
        );
        assert_eq!(BufferState::Overwriting.after_write(true), BufferState::Full);
        assert_eq!(
            BufferState::Consumed(Arrangement::Partitioned).after_write(true),
            BufferState::Full
        );
    }
}
