pub mod rendering;

pub(crate) use rendering::*;
