mod usecases;

pub use usecases::RingUsecases;
