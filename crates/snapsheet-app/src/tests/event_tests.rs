//! Channel plumbing tests in the shape the app actually uses it:
//! bounded kanal channels, sync senders from blocking contexts.

use std::time::Duration;

use snapsheet_types::{AppEvent, CaptureRegion, RowRecord};
use tokio::time::timeout;

fn region() -> CaptureRegion {
    CaptureRegion {
        x: 10,
        y: 20,
        width: 400,
        height: 120,
    }
}

#[tokio::test]
async fn trigger_event_round_trip() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    tx.send(AppEvent::TriggerCapture(region())).await.unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .unwrap();

    match event {
        AppEvent::TriggerCapture(received) => assert_eq!(received, region()),
        other => panic!("wrong event: {other:?}"),
    }
}

#[tokio::test]
async fn blocking_thread_can_queue_events() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    tokio::task::spawn_blocking(move || {
        // the hotkey watcher queues triggers exactly like this
        tx.try_send(AppEvent::TriggerCapture(region())).unwrap();
    })
    .await
    .unwrap();

    let event = timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("timeout")
        .unwrap();
    assert!(matches!(event, AppEvent::TriggerCapture(_)));
}

#[tokio::test]
async fn events_arrive_in_send_order() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(64);

    for row in 1..=3u32 {
        tx.send(AppEvent::RowAppended {
            row,
            record: RowRecord::new("2024-01-01 10:00:00", format!("v{row}")),
        })
        .await
        .unwrap();
    }

    for expected in 1..=3u32 {
        let event = timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("timeout")
            .unwrap();
        match event {
            AppEvent::RowAppended { row, record } => {
                assert_eq!(row, expected);
                assert_eq!(record.text, format!("v{expected}"));
            }
            other => panic!("wrong event: {other:?}"),
        }
    }
}
