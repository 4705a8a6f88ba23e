use mdf_event_bus::{EventBus, EventBusError, EventReceiverExt};

#[derive(Clone, Debug, PartialEq, Eq)]
struct Inserted(pub usize);

#[derive(Clone, Debug, PartialEq, Eq)]
struct Completed(pub usize);

#[test]
fn queue_preserves_publish_order() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe_mpsc::<Inserted>(8).unwrap();

    for i in 0..5 {
        bus.publish_mpsc(Inserted(i)).unwrap();
    }

    let seen: Vec<usize> = rx.drain().iter().map(|e| e.0).collect();
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert!(rx.try_next().is_none());
}

#[test]
fn queue_keeps_events_published_before_subscription() {
    let bus = EventBus::new();
    bus.publish_mpsc(Inserted(7)).unwrap();

    let mut rx = bus.subscribe_mpsc::<Inserted>(8).unwrap();
    assert_eq!(rx.try_next().map(|e| e.0), Some(7));
}

#[test]
fn queue_receiver_is_handed_out_once() {
    let bus = EventBus::new();
    let _rx = bus.subscribe_mpsc::<Inserted>(4).unwrap();

    let err = bus.subscribe_mpsc::<Inserted>(4).unwrap_err();
    assert!(matches!(err, EventBusError::ReceiverTaken { .. }));
}

#[test]
fn full_queue_reports_channel_full() {
    let bus = EventBus::new();
    let _rx = bus.subscribe_mpsc::<Inserted>(1).unwrap();

    bus.publish_mpsc(Inserted(1)).unwrap();
    let err = bus.publish_mpsc(Inserted(2)).unwrap_err();
    assert!(matches!(err, EventBusError::ChannelFull { .. }));
}

#[test]
fn zero_capacity_is_rejected() {
    let bus = EventBus::new();
    assert!(matches!(
        bus.subscribe_mpsc::<Inserted>(0),
        Err(EventBusError::InvalidCapacity { .. })
    ));
    assert!(matches!(
        bus.subscribe_with_capacity::<Completed>(0),
        Err(EventBusError::InvalidCapacity { .. })
    ));
}

#[test]
fn kinds_cannot_be_mixed_for_one_type() {
    let bus = EventBus::new();
    let _rx = bus.subscribe::<Completed>().unwrap();

    assert!(matches!(
        bus.publish_mpsc(Completed(1)),
        Err(EventBusError::ChannelKindMismatch { .. })
    ));
}

#[test]
fn broadcast_fans_out_and_counts_subscribers() {
    let bus = EventBus::new();
    let mut first = bus.subscribe::<Completed>().unwrap();
    let mut second = bus.subscribe::<Completed>().unwrap();

    assert_eq!(bus.publish(Completed(3)).unwrap(), 2);
    assert_eq!(first.try_next().map(|e| e.0), Some(3));
    assert_eq!(second.try_next().map(|e| e.0), Some(3));
}

#[test]
fn broadcast_without_subscribers_is_dropped() {
    let bus = EventBus::new();
    assert_eq!(bus.publish(Completed(1)).unwrap(), 0);
}

#[test]
fn lagged_broadcast_receiver_skips_to_retained_tail() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe_with_capacity::<Completed>(2).unwrap();

    for i in 0..10 {
        bus.publish(Completed(i)).unwrap();
    }

    let seen: Vec<usize> = rx.drain().iter().map(|e| e.0).collect();
    assert_eq!(seen, vec![8, 9]);
}

#[test]
fn shutdown_closes_channels() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe_mpsc::<Inserted>(4).unwrap();
    let _broadcast = bus.subscribe::<Completed>().unwrap();

    assert_eq!(bus.shutdown(), 2);
    assert!(rx.try_next().is_none());
    assert!(rx.is_closed());
}

#[tokio::test]
async fn async_recv_delivers_queued_event() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe_mpsc::<Inserted>(4).unwrap();
    bus.publish_mpsc(Inserted(11)).unwrap();

    let event = EventReceiverExt::recv(&mut rx).await.expect("event should arrive");
    assert_eq!(event.0, 11);
}

#[tokio::test]
async fn async_recv_returns_none_after_bus_drop() {
    let bus = EventBus::new();
    let mut rx = bus.subscribe::<Completed>().unwrap();
    drop(bus);

    assert!(EventReceiverExt::recv(&mut rx).await.is_none());
}
