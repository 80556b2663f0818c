// Shared numeric helpers

pub mod math;
