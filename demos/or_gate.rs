use std::sync::mpsc;

use perceptron_lab::{Dataset, Perceptron, TrainConfig, train_loop};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let or = Dataset::logical_or();

    for learning_rate in [1.0, 0.2, 0.05] {
        let (tx, rx) = mpsc::channel();
        let mut unit = Perceptron::new(vec![0.1, 0.1], 0.0, 0.5);
        let config = TrainConfig::new(12, learning_rate).with_progress(tx);

        let report = train_loop(&mut unit, &or.inputs, &or.labels, &config)?;

        println!("learning rate {learning_rate}:");
        for stats in rx.try_iter() {
            println!("  {}", serde_json::to_string(&stats)?);
        }
        match report.converged_at {
            Some(batch) => println!("  converged at batch {batch}"),
            None => println!("  not converged after {} batches", report.batches_run),
        }
    }

    Ok(())
}
