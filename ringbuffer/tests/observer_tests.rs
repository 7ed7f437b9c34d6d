use ringbuffer::{
    RingBuffer, RingBufferError, RingBufferEvent, RingBufferObserver, Snapshot, TracingObserver,
};

#[derive(Debug, Default)]
struct Recorder {
    events: Vec<RingBufferEvent>,
}

impl RingBufferObserver for Recorder {
    fn on_event(&mut self, event: &RingBufferEvent) {
        self.events.push(*event);
    }
}

fn state(fill_count: usize, write_position: usize) -> Snapshot {
    Snapshot {
        capacity: 2,
        fill_count,
        write_position,
    }
}

#[test]
fn test_records_every_transition() {
    let mut buffer = RingBuffer::with_observer(2, Recorder::default()).unwrap();

    buffer.enqueue(1).unwrap();
    buffer.enqueue(2).unwrap();
    assert_eq!(buffer.enqueue(3), Err(RingBufferError::BufferFull));
    assert_eq!(buffer.dequeue(), Ok(1));
    buffer.clear();
    assert_eq!(buffer.dequeue(), Err(RingBufferError::BufferEmpty));

    assert_eq!(
        buffer.observer().events,
        vec![
            RingBufferEvent::Created(state(0, 0)),
            RingBufferEvent::Enqueued(state(1, 1)),
            RingBufferEvent::Enqueued(state(2, 2)),
            RingBufferEvent::EnqueueRejected(state(2, 2)),
            RingBufferEvent::Dequeued {
                read_position: 0,
                state: state(1, 2),
            },
            RingBufferEvent::Cleared(state(0, 0)),
            RingBufferEvent::DequeueRejected(state(0, 0)),
        ]
    );
}

#[test]
fn test_invalid_capacity_emits_nothing() {
    let mut events = Vec::new();
    let result: Result<RingBuffer<u8, _>, _> =
        RingBuffer::with_observer(0, |e: &RingBufferEvent| events.push(*e));

    assert_eq!(result.err(), Some(RingBufferError::InvalidCapacity));
    assert!(events.is_empty());
}

#[test]
fn test_closure_observer_counts_rejections() {
    let mut rejections = 0;
    {
        let mut buffer = RingBuffer::with_observer(1, |e: &RingBufferEvent| {
            if e.is_rejection() {
                rejections += 1;
            }
        })
        .unwrap();

        assert_eq!(buffer.dequeue(), Err(RingBufferError::BufferEmpty));
        buffer.enqueue('x').unwrap();
        assert_eq!(buffer.enqueue('y'), Err(RingBufferError::BufferFull));
        assert_eq!(
            buffer.extend_from_slice(&['z']),
            Err(RingBufferError::BufferFull)
        );
        assert_eq!(buffer.dequeue(), Ok('x'));
    }
    assert_eq!(rejections, 3);
}

#[test]
fn test_observer_does_not_change_results() {
    let mut plain: RingBuffer<u32> = RingBuffer::new(3).unwrap();
    let mut traced: RingBuffer<u32, TracingObserver> =
        RingBuffer::with_observer(3, TracingObserver).unwrap();

    for i in 0..20u32 {
        if i % 3 == 0 {
            assert_eq!(plain.dequeue(), traced.dequeue());
        }
        assert_eq!(plain.enqueue(i), traced.enqueue(i));
        assert_eq!(plain.len(), traced.len());
        assert_eq!(plain.write_position(), traced.write_position());
    }

    plain.clear();
    traced.clear();
    assert_eq!(plain.dequeue(), traced.dequeue());
}
