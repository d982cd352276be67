// The library does the work; this binary trains the built-in gates once so
// the behaviour can be seen from a terminal. Set RUST_LOG=debug for a
// per-batch trace. More demos:
//   cargo run --example or_gate
//   cargo run --example xor
use perceptron_lab::{Dataset, Perceptron, TrainConfig, train_loop};

fn main() -> Result<(), perceptron_lab::PerceptronError> {
    env_logger::init();

    let gates = [
        ("OR", Dataset::logical_or()),
        ("AND", Dataset::logical_and()),
        ("NAND", Dataset::logical_nand().with_constant_feature(1.0)),
        ("XOR", Dataset::logical_xor()),
    ];
    let config = TrainConfig::new(20, 0.1);

    for (name, data) in gates {
        let mut unit = Perceptron::random_seeded(data.dimension(), 7, 0.0, 0.5);
        let report = train_loop(&mut unit, &data.inputs, &data.labels, &config)?;
        match report.converged_at {
            Some(batch) => println!("{name:<5} converged at batch {batch}, weights {:?}", report.weights),
            None => println!("{name:<5} did not converge in {} batches", report.batches_run),
        }
    }

    Ok(())
}
