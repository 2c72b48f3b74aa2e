use std::time::{Duration, Instant};

use log::trace;
use num_traits::ToPrimitive;

use crate::numeric::percentage::int_percentage;

/// Rate-limits a stream of values flowing into a callback.
///
/// An `UpdateFilter` is created for a specified emit callback; then, when successive calls to
/// [`update`](UpdateFilter::update) are made, the new value is compared with the last emitted
/// value by the filter's policy function. If the policy indicates that the new value is
/// sufficiently different, the callback is invoked with it and it becomes the new last-emitted
/// value; otherwise nothing happens.
///
/// This is useful when other components must be notified of updates from a long-running
/// process whose source data change too rapidly to forward every time. Once that process
/// completes, [`force_emit`](UpdateFilter::force_emit) pushes the final value through
/// unconditionally.
///
/// The policy is any `FnMut(&T, &T) -> bool` taking the last-emitted and candidate values;
/// [`sample_interval`] and [`percentage_step`] cover the common cases.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use arrangements::filter::{percentage_step, UpdateFilter};
///
/// let emitted = Cell::new(0);
/// let mut progress = UpdateFilter::new(percentage_step(), |_: &(u32, u32)| {
///     emitted.set(emitted.get() + 1);
/// });
///
/// for done in 0..=10_u32 {
///     progress.update((done, 10));
/// }
/// assert_eq!(emitted.get(), 11); // every step moved the percentage
/// assert_eq!(progress.last(), &(10, 10));
/// ```
pub struct UpdateFilter<T, P, F>
where
    P: FnMut(&T, &T) -> bool,
    F: FnMut(&T),
{
    policy: P,
    emit: F,
    last: T,
}

impl<T, P, F> UpdateFilter<T, P, F>
where
    P: FnMut(&T, &T) -> bool,
    F: FnMut(&T),
{
    /// Creates a filter whose last-emitted value starts out default-initialized. Policies
    /// should treat that seed so that the first genuine value passes through (both bundled
    /// policies do).
    pub fn new(policy: P, emit: F) -> Self
    where
        T: Default,
    {
        Self::with_initial(T::default(), policy, emit)
    }

    /// Creates a filter seeded with an explicit last-emitted value. `initial` itself is not
    /// emitted.
    pub fn with_initial(initial: T, policy: P, emit: F) -> Self {
        UpdateFilter {
            policy,
            emit,
            last: initial,
        }
    }

    /// Offers `value` to the filter. If the policy deems it sufficiently different from the
    /// last emitted value, the callback is invoked and the value is recorded; the return value
    /// reports whether that happened.
    pub fn update(&mut self, value: T) -> bool {
        let pass = (self.policy)(&self.last, &value);
        if pass {
            (self.emit)(&value);
            self.last = value;
        } else {
            trace!("update suppressed by filter policy");
        }
        pass
    }

    /// Emits `value` unconditionally, bypassing the policy, and records it as the last emitted
    /// value. Intended for finalizing a completed process whose last update may have been
    /// suppressed.
    pub fn force_emit(&mut self, value: T) {
        trace!("forced update, bypassing filter policy");
        (self.emit)(&value);
        self.last = value;
    }

    /// The last emitted value (or the initial seed if nothing has been emitted yet).
    pub fn last(&self) -> &T {
        &self.last
    }
}

/// Policy for an [`UpdateFilter`] that passes a changed value through when at least `interval`
/// has elapsed since the last update this policy allowed. Values equal to the last emitted one
/// are always suppressed; the first changed value always passes.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::time::Duration;
/// use arrangements::filter::{sample_interval, UpdateFilter};
///
/// let emitted = Cell::new(0);
/// let mut filter = UpdateFilter::new(sample_interval(Duration::ZERO), |_: &i32| {
///     emitted.set(emitted.get() + 1);
/// });
///
/// filter.update(0); // equal to the default seed: suppressed
/// filter.update(1);
/// filter.update(1); // unchanged: suppressed
/// filter.update(2);
/// assert_eq!(emitted.get(), 2);
/// ```
pub fn sample_interval<T: PartialEq>(interval: Duration) -> impl FnMut(&T, &T) -> bool {
    let mut last_pass: Option<Instant> = None;
    move |old, new| {
        if old == new {
            return false;
        }
        let now = Instant::now();
        match last_pass {
            Some(at) if now.duration_since(at) < interval => false,
            _ => {
                last_pass = Some(now);
                true
            }
        }
    }
}

/// Policy for an [`UpdateFilter`] tracking `(count, total)` pairs that passes an update through
/// when the rounded integer percentage they specify increases. A stored total of zero (e.g. the
/// default seed) always lets the next update through.
pub fn percentage_step<N>() -> impl FnMut(&(N, N), &(N, N)) -> bool
where
    N: ToPrimitive + Copy,
{
    |&(old_count, old_total), &(new_count, new_total)| {
        match (
            int_percentage(old_count, old_total),
            int_percentage(new_count, new_total),
        ) {
            (Ok(old_pct), Ok(new_pct)) => new_pct > old_pct,
            _ => true,
        }
    }
}
