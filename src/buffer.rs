use crate::{
    error::{BufferError, Result},
    sample::Sample,
    state::{Arrangement, BufferState},
};

/// Default number of standard deviations used by [`SampleBuffer::outliers`] and [`SampleBuffer::left_skew`]
pub const DEFAULT_DEVIATIONS: f64 = 2.0;

/// Number of trailing samples averaged by [`SampleBuffer::settling_run`]
const SETTLING_TAIL: usize = 3;

/// Fixed-capacity buffer of samples, with statistics computed on demand
///
/// The [`Self::new`] constructor allocates `capacity` slots once, and the buffer never reallocates after that.
/// The active length can be shrunk (and restored) with [`Self::resize`], but never grown past the capacity.
///
/// The intended cycle is: [`Self::add`] samples until [`Self::is_full`], read off whatever statistics are needed,
/// then keep adding to start the next batch.
/// Some statistics reorder the contents (see [`BufferState`]), after which operations that rely on insertion
/// order return [`BufferError::NotChronological`] until a full batch has been written again.
#[derive(Debug, Clone)]
pub struct SampleBuffer<T> {
    /// Backing storage, always `capacity` long
    ///
    /// Only the first [`Self::len`] slots are active.
    store: Vec<T>,
    /// Active length
    len: usize,
    /// Slot that the next [`Self::add`] writes into
    cursor: usize,
    state: BufferState,
}

/// Leading samples that had not yet settled to the level at the end of the buffer
///
/// Returned by [`SampleBuffer::settling_run`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettlingRun<'a, T> {
    /// Average of the last few samples, taken as the settled level
    ///
    /// For integer samples this is rounded half up to a whole number.
    pub tail_average: f64,
    /// Samples from the start of the buffer that are below [`Self::tail_average`]
    pub run: &'a [T],
}

impl<T: Sample> SampleBuffer<T> {
    /// Constructs a new [`Self`] with all `capacity` slots active and zeroed
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Use [`Self::try_new`] to handle that case.
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(buffer) => buffer,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible version of [`Self::new`]
    pub fn try_new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(BufferError::ZeroCapacity);
        }

        Ok(Self {
            store: vec![T::zero(); capacity],
            len: capacity,
            cursor: 0,
            state: BufferState::Filling,
        })
    }

    /// Maximum active length, fixed at construction
    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    /// Current active length
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false, since the active length is never zero
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current state of the fill/consume cycle
    pub fn state(&self) -> BufferState {
        self.state
    }

    /// Whether every active slot has been written since the last reset or consume
    pub fn is_full(&self) -> bool {
        self.state.is_full()
    }

    /// Iterates over the active slots in storage order
    ///
    /// Storage order is insertion order only while [`BufferState::is_chronological`] holds.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.active().iter().copied()
    }

    fn active(&self) -> &[T] {
        &self.store[..self.len]
    }

    /// Changes the active length and zeroes the buffer
    ///
    /// Requests for zero or for more than [`Self::capacity`] slots are ignored, leaving the buffer untouched.
    ///
    /// Returns whether the resize was applied
    pub fn resize(&mut self, new_len: usize) -> bool {
        if new_len == 0 || new_len > self.capacity() {
            #[cfg(feature = "log")]
            log::warn!(
                "Ignoring resize to {} slots: capacity is {}",
                new_len,
                self.capacity()
            );

            #[cfg(not(feature = "log"))]
            eprintln!(
                "Ignoring resize to {} slots: capacity is {}",
                new_len,
                self.capacity()
            );

            return false;
        }

        self.len = new_len;
        self.zero();
        true
    }

    /// Sets every active slot to zero and starts a fresh fill cycle
    pub fn zero(&mut self) {
        let len = self.len;
        self.store[..len].fill(T::zero());
        self.cursor = 0;
        self.state = BufferState::Filling;

        #[cfg(feature = "log")]
        log::trace!("Zeroed buffer of {} slots", len);
    }

    /// Writes a sample at the cursor and advances it
    ///
    /// Writing the last active slot wraps the cursor back to the start and marks the buffer full.
    /// Nothing stops further writes after that: they silently overwrite from the start, so check
    /// [`Self::is_full`] first if that matters.
    pub fn add(&mut self, value: T) {
        self.store[self.cursor] = value;
        self.cursor += 1;

        let wrapped = self.cursor == self.len;
        if wrapped {
            self.cursor = 0;
        }

        self.state = self.state.after_write(wrapped);
    }

    /// Sets every active slot to `value` and marks the buffer full
    ///
    /// Useful for priming a buffer with a first reading, so that statistics are meaningful straight away.
    /// The primed values count as one batch: the next [`Self::add`] starts overwriting them from the first slot,
    /// so [`Self::element`] reports [`BufferError::NotChronological`] until that cycle wraps.
    /// Statistics that ignore order, like [`Self::average`], can be read at any point.
    pub fn fill(&mut self, value: T) {
        let len = self.len;
        self.store[..len].fill(value);
        self.state = BufferState::Full;
    }

    /// Abandons the current contents without zeroing them
    ///
    /// The cursor returns to the start and the buffer stops being full.
    /// Old samples stay in the slots until overwritten, so insertion order is lost until the next wrap.
    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.state = BufferState::Overwriting;

        #[cfg(feature = "log")]
        log::trace!("Rewound buffer of {} slots", self.len);
    }

    /// Calculates the median of the active slots
    ///
    /// This uses selection rather than a full sort, so runs in expected linear time.
    /// Odd lengths are cheaper: even lengths need a second selection on the lower half to find the other middle value,
    /// and the two are combined with [`Sample::midpoint`].
    ///
    /// The contents are reordered, and the batch counts as consumed, so [`Self::is_full`] becomes false.
    /// If the buffer is already sorted, the existing order is reused.
    pub fn median(&mut self) -> T {
        let mid = self.len / 2;
        let odd = self.len % 2 == 1;
        let data = &mut self.store[..self.len];

        if self.state.is_sorted() {
            if odd {
                data[mid]
            } else {
                T::midpoint(data[mid - 1], data[mid])
            }
        } else {
            self.state = BufferState::Consumed(Arrangement::Partitioned);

            let (lower_half, upper, _) = data.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
            let upper = *upper;

            if odd {
                upper
            } else {
                // Everything left of `mid` is no larger, so the other middle value is the largest of them
                let (_, lower, _) = lower_half.select_nth_unstable_by(mid - 1, |a, b| a.total_cmp(b));
                T::midpoint(*lower, upper)
            }
        }
    }

    /// Arithmetic mean of the active slots
    pub fn average(&self) -> f64 {
        mean(self.active())
    }

    /// Population standard deviation of the active slots
    pub fn std_dev(&self) -> f64 {
        mean_and_std_dev(self.active()).1
    }

    /// Gets the sample at `index` in insertion order
    ///
    /// Fails with [`BufferError::NotChronological`] once the contents have been reordered or partially overwritten.
    pub fn element(&self, index: usize) -> Result<T> {
        if !self.state.is_chronological() {
            return Err(BufferError::NotChronological);
        }

        self.get(index)
    }

    /// Gets the sample at `index` in ascending order
    ///
    /// The first call after any write sorts the whole buffer. Later calls reuse that order.
    /// Like [`Self::median`], this consumes the batch.
    pub fn sorted_element(&mut self, index: usize) -> Result<T> {
        if !self.state.is_sorted() {
            let len = self.len;
            self.store[..len].sort_unstable_by(|a, b| a.total_cmp(b));
            self.state = BufferState::Consumed(Arrangement::Sorted);
        }

        self.get(index)
    }

    fn get(&self, index: usize) -> Result<T> {
        self.active()
            .get(index)
            .copied()
            .ok_or(BufferError::OutOfRange {
                index,
                len: self.len,
            })
    }

    /// Counts samples further than `deviations` population standard deviations from the mean
    ///
    /// See [`DEFAULT_DEVIATIONS`] for a reasonable starting point.
    pub fn outliers(&self, deviations: f64) -> usize {
        let data = self.active();
        let (mean, std_dev) = mean_and_std_dev(data);
        let threshold = deviations * std_dev;

        data.iter()
            .filter(|v| (v.widen() - mean).abs() > threshold)
            .count()
    }

    /// Measures how many of the oldest samples stray from the level of the newer ones
    ///
    /// The right half of the buffer (from `len / 2` onwards, so it gets the middle slot of an odd length) is taken as
    /// the reference. Starting from the first slot, samples further than `deviations` of the reference half's
    /// standard deviations from its mean are counted, stopping at the first one that isn't.
    ///
    /// The count is positive if the counted samples average above the reference mean, and negative if below.
    /// Zero means the buffer starts in line with its second half.
    ///
    /// This is mostly useful for working out how long a reading takes to stabilize (a capacitor charging, say),
    /// and works best with large buffers. It needs the samples in insertion order.
    pub fn left_skew(&self, deviations: f64) -> Result<isize> {
        if !self.state.is_chronological() {
            return Err(BufferError::NotChronological);
        }

        let data = self.active();
        let (reference_mean, reference_std_dev) = mean_and_std_dev(&data[self.len / 2..]);
        let threshold = deviations * reference_std_dev;

        let run = data
            .iter()
            .take_while(|v| (v.widen() - reference_mean).abs() > threshold)
            .count();

        if run == 0 {
            return Ok(0);
        }

        let skew = run as isize;
        if mean(&data[..run]) < reference_mean {
            Ok(-skew)
        } else {
            Ok(skew)
        }
    }

    /// Least squares slope of the samples against their (1-based) position
    ///
    /// Negative for a falling trend, positive for a rising one. A single sample has a slope of zero.
    /// Needs the samples in insertion order.
    pub fn slope(&self) -> Result<f64> {
        if !self.state.is_chronological() {
            return Err(BufferError::NotChronological);
        }

        let data = self.active();
        let x_mean = (self.len as f64 + 1.) / 2.;
        let y_mean = mean(data);

        let (covariance, x_variance) = data
            .iter()
            .enumerate()
            .fold((0., 0.), |(cov, var), (i, y)| {
                let dx = (i + 1) as f64 - x_mean;
                (cov + dx * (y.widen() - y_mean), var + dx * dx)
            });

        if x_variance == 0. {
            return Ok(0.);
        }

        Ok(covariance / x_variance)
    }

    /// Finds the leading samples that are still below the level the buffer settles at
    ///
    /// The settled level is the average of the last three samples, rounded half up for integer samples
    /// so that a reading equal to the level counts as settled.
    /// After a sensor powers up, a long run means it needs more time before readings can be trusted,
    /// whereas a settled sensor will only show the occasional sample or two.
    /// Needs the samples in insertion order.
    pub fn settling_run(&self) -> Result<SettlingRun<'_, T>> {
        if !self.state.is_chronological() {
            return Err(BufferError::NotChronological);
        }

        let data = self.active();
        let tail_average = T::round_wide(mean(&data[self.len.saturating_sub(SETTLING_TAIL)..]));
        let run_len = data
            .iter()
            .take_while(|v| v.widen() < tail_average)
            .count();
        let run = &data[..run_len];

        #[cfg(feature = "log")]
        log::debug!("{:.2} --> {:?}", tail_average, run);

        Ok(SettlingRun { tail_average, run })
    }
}

fn mean<T: Sample>(data: &[T]) -> f64 {
    data.iter().map(|v| v.widen()).sum::<f64>() / data.len() as f64
}

fn mean_and_std_dev<T: Sample>(data: &[T]) -> (f64, f64) {
    let mean = mean(data);
    let variance = data
        .iter()
        .map(|v| {
            let d = v.widen() - mean;
            d * d
        })
        .sum::<f64>()
        / data.len() as f64;

    (mean, variance.sqrt())
}
