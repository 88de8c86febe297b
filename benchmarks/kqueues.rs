use kqueues::{Consumer, PartitionedQueueSet, Producer};

const MESSAGES: usize = 5_000_000;
const QUEUES: usize = 4;
const SLOTS: usize = 4096;

fn seq() {
    let mut q = PartitionedQueueSet::new(SLOTS, QUEUES).unwrap();
    let capacity = q.capacity();

    for round in 0..MESSAGES / capacity {
        let qn = round % QUEUES;
        for i in 0..capacity {
            assert!(q.enqueue(i, qn).unwrap());
        }
        for i in 0..capacity {
            assert_eq!(q.dequeue(qn).unwrap(), Some(i));
        }
    }
}

fn interleaved() {
    let mut q = PartitionedQueueSet::new(SLOTS, QUEUES).unwrap();

    for i in 0..MESSAGES {
        let qn = i % QUEUES;
        if !q.enqueue(i, qn).unwrap() {
            q.dequeue(qn).unwrap();
            assert!(q.enqueue(i, qn).unwrap());
        }
    }
}

fn segmented() {
    let mut q = PartitionedQueueSet::new(SLOTS, QUEUES).unwrap();

    crossbeam::scope(|scope| {
        for mut seg in q.split() {
            scope.spawn(move |_| {
                for i in 0..MESSAGES / QUEUES {
                    if let Err(i) = seg.enqueue(i) {
                        seg.dequeue().unwrap();
                        seg.enqueue(i).unwrap();
                    }
                }
                while seg.dequeue().is_some() {}
            });
        }
    })
    .unwrap();
}

fn main() {
    macro_rules! run {
        ($name:expr, $f:expr) => {
            let now = ::std::time::Instant::now();
            $f;
            let elapsed = now.elapsed();
            println!(
                "{:25} {:15} {:7.3} sec",
                $name,
                "kqueues",
                elapsed.as_secs() as f64 + elapsed.subsec_nanos() as f64 / 1e9
            );
        };
    }

    run!("partitioned_seq", seq());
    run!("partitioned_interleaved", interleaved());
    run!("partitioned_segmented", segmented());
}
