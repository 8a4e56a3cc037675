//! Testing infrastructure (mock bus, delays).

pub(crate) mod mock;

pub(crate) use mock::{MockDelay, MockError, MockInterface};
