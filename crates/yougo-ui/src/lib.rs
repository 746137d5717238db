use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::RwLock;
use yougo_config::Config;
use yougo_types::{AppEvent, UiEvent, View};

pub mod input;
pub mod render;

use render::Renderer;

/// Terminal frontend: reads stdin lines, turns them into UI events for the
/// app loop, and renders whatever the app sends back.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
) -> anyhow::Result<()> {
    let color = {
        let config = config.read().await;
        config
            .ui
            .color
            .unwrap_or_else(|| atty::is(atty::Stream::Stdout))
    };
    let renderer = Renderer::new(color);

    // Last view the app told us about; decides how plain text lines are
    // interpreted (home submit vs. live results filtering).
    let mut view = View::Home;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    renderer.welcome();
    renderer.prompt(view);

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let event = event?;
                tracing::debug!("[UI] event: {:?}", std::mem::discriminant(&event));
                match event {
                    AppEvent::ShowView(plan) => {
                        view = plan.view;
                        renderer.plan(&plan);
                    }
                    AppEvent::ShowDetail(detail) => renderer.detail(&detail),
                    AppEvent::GlossaryReady { terms, categories } => {
                        renderer.glossary_ready(terms, &categories);
                    }
                    AppEvent::LoadFailed(message) => renderer.load_failure(&message),
                    AppEvent::Ui(_) => {}
                }
                renderer.prompt(view);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed
                    let _ = ui_to_app_tx.send(AppEvent::Ui(UiEvent::Quit)).await;
                    break;
                };
                match input::parse_line(&line, view) {
                    Some(UiEvent::Quit) => {
                        let _ = ui_to_app_tx.send(AppEvent::Ui(UiEvent::Quit)).await;
                        break;
                    }
                    Some(event) => ui_to_app_tx.send(AppEvent::Ui(event)).await?,
                    None => renderer.prompt(view),
                }
            }
        }
    }

    Ok(())
}
