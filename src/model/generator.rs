// src/model/generator.rs

use std::fmt::Debug;

/// A zero-argument producer of values for the engine.
///
/// Links ask one for their lead time on every shipment, and demand streams ask
/// for the next inter-arrival gap and order size.
pub trait Generator<T>: Debug + Send + Sync {
    fn next_value(&self) -> T;
}

/// A generator that always yields the value it was built with.
///
/// Every link and demand owns its own `Constant`, so the value is bound to
/// that entity when it is constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant<T>(T);

impl<T: Copy> Constant<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn value(&self) -> T {
        self.0
    }
}

impl<T> Generator<T> for Constant<T>
where
    T: Copy + Debug + Send + Sync,
{
    fn next_value(&self) -> T {
        self.0
    }
}
