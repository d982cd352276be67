pub mod trainer;
pub mod batch_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train, train_until_converged};
pub use batch_stats::{BatchStats, TrainReport};
pub use train_config::TrainConfig;
pub use loop_fn::{train_loop, train_batch, has_converged};
