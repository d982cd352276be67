pub mod error;
pub mod math;
pub mod activation;
pub mod unit;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::PerceptronError;
pub use activation::step::Step;
pub use unit::perceptron::{Perceptron, evaluate, adjust};
pub use data::dataset::Dataset;
pub use train::{train, train_loop, train_batch, train_until_converged, has_converged};
pub use train::{TrainConfig, BatchStats, TrainReport};
