//! Replays the ten-slot, three-queue walkthrough and prints each result.

use kqueues::{PartitionedQueueSet, Result};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
  let env_filter = EnvFilter::try_from_default_env()
    .or_else(|_| EnvFilter::try_new("kqueues=info"))
    .unwrap_or_default();

  tracing_subscriber::registry()
    .with(env_filter)
    .with(fmt::layer())
    .init();

  let mut queues = PartitionedQueueSet::new(10, 3)?;
  info!(layout = ?queues.layout(), "demo starting");

  let mut out = Vec::new();
  for (value, qn) in [(10, 0), (20, 1), (30, 0), (40, 2)] {
    out.push(queues.enqueue(value, qn)?.to_string());
  }
  for qn in [0, 1, 2, 0, 0] {
    out.push(match queues.dequeue(qn)? {
      Some(value) => value.to_string(),
      None => "empty".to_string(),
    });
  }

  println!("{}", out.join(" "));
  Ok(())
}
