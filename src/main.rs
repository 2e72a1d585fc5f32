use quest_code::QuestApp;
use quest_code::config::AppConfig;
use quest_code::speech::platform_speech;

fn load_config() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{e}; using built-in defaults");
            AppConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config();
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "QuestCode",
        options,
        Box::new(move |cc| {
            let app = QuestApp::from_embedded(config, platform_speech()).restore(cc);
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");
        let canvas = document
            .get_element_by_id("the_canvas_id")
            .expect("No se encontró el canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("the_canvas_id no es un canvas");

        let config = load_config();
        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| {
                    let app = QuestApp::from_embedded(config, platform_speech()).restore(cc);
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("failed to start eframe: {e:?}");
        }
    });
}
