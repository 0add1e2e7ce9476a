//! Robohand.
//!
//! Baum verbundener 2D-Vektoren, per Tastatur selektieren, drehen und skalieren.

use eframe::egui;
use robohand::{render, ui, AppController, AppIntent, AppState, RobohandOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        let title = format!("Robohand {}", env!("CARGO_PKG_VERSION"));
        log::info!("{} startet...", title);

        let config_path = RobohandOptions::config_path();
        let robohand_options = RobohandOptions::load_from_file(&config_path);

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(robohand_options.frame_size)
                .with_resizable(false)
                .with_title(title.clone()),
            centered: true,
            ..Default::default()
        };

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(RobohandApp::new(robohand_options)?))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct RobohandApp {
    state: AppState,
    controller: AppController,
}

impl RobohandApp {
    fn new(options: RobohandOptions) -> Result<Self, robohand::AppError> {
        Ok(Self {
            state: AppState::robohand(options)?,
            controller: AppController::new(),
        })
    }
}

impl eframe::App for RobohandApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_events(ui::collect_keyboard_intents(ctx));

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, _response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
                let viewport_size = [rect.width(), rect.height()];

                // Verankert den ersten Vektor vor dem Zeichnen am Canvas-Mittelpunkt
                self.process_events(vec![AppIntent::ViewportResized {
                    size: viewport_size,
                }]);

                let scene = self.controller.build_render_scene(&self.state);
                render::paint_scene(ui.painter(), rect, &scene);
            });

        if self.state.view.take_repaint_request() {
            ctx.request_repaint();
        }
    }
}

impl RobohandApp {
    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
