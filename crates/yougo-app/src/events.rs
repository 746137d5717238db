use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;
use yougo_core::view::ViewController;
use yougo_glossary::{GlossarySource, GlossaryStore};
use yougo_types::{AppEvent, UiEvent};

/// App's main loop: one startup load, then strictly sequential event
/// handling. Filtering runs synchronously in here, O(records) per input
/// event, uncached.
pub async fn event_loop(
    source: Arc<dyn GlossarySource>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let store = load_store(source.as_ref(), &app_to_ui_tx).await?;
    let mut controller = ViewController::new();

    tracing::info!("[EVENT_LOOP] ready, waiting for input");
    loop {
        let event = tokio::select! {
            event = ui_to_app_rx.recv() => event?,
            _ = cancel.cancelled() => return Ok(()),
        };
        let AppEvent::Ui(event) = event else { continue };
        tracing::debug!("[EVENT_LOOP] {:?}", event);
        if handle_ui_event(&mut controller, &store, &app_to_ui_tx, event).await? {
            return Ok(());
        }
    }
}

/// Perform the one-time load. A failure is surfaced to the UI as a single
/// message and browsing continues over an empty store; there is no retry
/// and no partial load.
async fn load_store(
    source: &dyn GlossarySource,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<GlossaryStore> {
    match source.load().await {
        Ok(records) => {
            tracing::info!(
                "Loaded {} glossary records from {}",
                records.len(),
                source.describe()
            );
            let store = GlossaryStore::new(records);
            app_to_ui_tx
                .send(AppEvent::GlossaryReady {
                    terms: store.len(),
                    categories: store.categories(),
                })
                .await?;
            Ok(store)
        }
        Err(e) => {
            tracing::error!("Glossary load failed: {e}");
            app_to_ui_tx
                .send(AppEvent::LoadFailed(format!(
                    "failed to load glossary from {}: {e}",
                    source.describe()
                )))
                .await?;
            Ok(GlossaryStore::empty())
        }
    }
}

/// Apply one UI event to the view controller and push the outcome back.
/// Returns true when the app should exit.
async fn handle_ui_event(
    controller: &mut ViewController,
    store: &GlossaryStore,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: UiEvent,
) -> anyhow::Result<bool> {
    match event {
        UiEvent::SubmitQuery(query) => controller.submit_query(query),
        UiEvent::PickCategory(category) => controller.pick_category(category),
        UiEvent::TypeQuery(query) => controller.type_query(query),
        UiEvent::Reset => controller.reset(),
        UiEvent::Back => controller.back(),
        UiEvent::SelectRow(index) => {
            if let Some(detail) = controller.detail(store.records(), index) {
                app_to_ui_tx.send(AppEvent::ShowDetail(detail)).await?;
                return Ok(false);
            }
            // Out-of-range selection falls through to a re-render
            tracing::debug!("select out of range: {index}");
        }
        UiEvent::Quit => return Ok(true),
    }
    app_to_ui_tx
        .send(AppEvent::ShowView(controller.render(store.records())))
        .await?;
    Ok(false)
}
