use std::time::Duration;

use tokio::time::timeout;
use yougo_types::{AppEvent, UiEvent};

#[tokio::test]
async fn test_tokio_spawn_from_sync_context() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // Frontends hand lines to sync callbacks; events must still reach the
    // async loop from there
    let sync_callback = move || {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::Ui(UiEvent::SubmitQuery("test".to_string())))
                .await
                .expect("send failed");
        });
    };

    sync_callback();

    let result = timeout(Duration::from_secs(2), rx.recv()).await;

    match result {
        Ok(Ok(AppEvent::Ui(UiEvent::SubmitQuery(text)))) => {
            assert_eq!(text, "test");
        }
        Ok(Ok(_)) => panic!("Wrong event type"),
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - tokio::spawn from sync context failed!"),
    }
}

#[tokio::test]
async fn test_multiple_spawned_sends() {
    let (tx, rx) = kanal::unbounded_async::<AppEvent>();

    // One event per keystroke, no debounce: a typing burst must not drop
    // anything
    for i in 0..100 {
        let tx = tx.clone();
        tokio::spawn(async move {
            tx.send(AppEvent::Ui(UiEvent::TypeQuery(format!("query{}", i))))
                .await
                .expect("send failed");
        });
    }

    let mut count = 0;
    let result = timeout(Duration::from_secs(2), async {
        while count < 100 {
            rx.recv().await.expect("recv failed");
            count += 1;
        }
    })
    .await;

    assert!(result.is_ok(), "Timeout waiting for events!");
    assert_eq!(count, 100);
}
