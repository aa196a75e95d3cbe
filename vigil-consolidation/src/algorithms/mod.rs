//! Pure algorithms: no storage, no logging side effects.

pub mod elimination;
