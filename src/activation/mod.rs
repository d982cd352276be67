pub mod step;

pub use step::Step;
