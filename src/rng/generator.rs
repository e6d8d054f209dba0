//! Random generator interface
//!
//! Every consumer of randomness in the crate (and outside of it) depends on
//! the [`RandomGen`] capability rather than on a concrete generator. A
//! consumer receives the generator explicitly, by `&mut` borrow, at
//! construction or call time; there is no process-wide instance.
//!
//! Generators also carry a small amount of state on behalf of their
//! consumers. The Gaussian slot exists because normal deviates are produced
//! in pairs: the second value is parked in the generator state so that a
//! checkpoint taken with [`RandomGen::state`] and restored with
//! [`RandomGen::set_state`] replays the distribution bit-for-bit as well.

/// Cached deviate slot used by Gaussian samplers.
///
/// The generator never writes this slot itself. It is reset to `None` when
/// a generator is constructed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianState {
    /// Second deviate of the last generated pair, if not consumed yet.
    pub deviate: Option<f64>,
}

/// State shared by every generator.
///
/// A generator's state type must be a plain value: cloning it yields an
/// independent checkpoint that can later be handed back to `set_state`.
pub trait GenState: Clone {
    /// Returns the Gaussian cache slot.
    fn gaussian(&self) -> &GaussianState;

    /// Returns the Gaussian cache slot for writing.
    fn gaussian_mut(&mut self) -> &mut GaussianState;
}

/// Random number generator capability.
///
/// Implementors produce uniformly distributed 64-bit values and expose their
/// entire internal state for save/restore. Consumers must not assume anything
/// about the layout of [`RandomGen::State`] beyond [`GenState`].
pub trait RandomGen {
    /// Complete generator state.
    type State: GenState;

    /// Generates a random number between 0 and 2⁶⁴ − 1 inclusive.
    fn next_u64(&mut self) -> u64;

    /// Returns the current state of the generator.
    fn state(&self) -> &Self::State;

    /// Returns the current state of the generator for in-place updates.
    fn state_mut(&mut self) -> &mut Self::State;

    /// Replaces the generator state with a previously saved one.
    fn set_state(&mut self, state: Self::State);
}

impl<G: RandomGen + ?Sized> RandomGen for &mut G {
    type State = G::State;

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn state(&self) -> &Self::State {
        (**self).state()
    }

    #[inline]
    fn state_mut(&mut self) -> &mut Self::State {
        (**self).state_mut()
    }

    #[inline]
    fn set_state(&mut self, state: Self::State) {
        (**self).set_state(state)
    }
}

impl<G: RandomGen + ?Sized> RandomGen for Box<G> {
    type State = G::State;

    #[inline]
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    #[inline]
    fn state(&self) -> &Self::State {
        (**self).state()
    }

    #[inline]
    fn state_mut(&mut self) -> &mut Self::State {
        (**self).state_mut()
    }

    #[inline]
    fn set_state(&mut self, state: Self::State) {
        (**self).set_state(state)
    }
}
