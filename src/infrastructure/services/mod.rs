mod ring;

pub use ring::{init_ring_engine, ring_usecases, snapshot};
