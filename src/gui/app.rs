use eframe::{
    NativeOptions,
    egui::{self, ViewportBuilder},
};
use tracing::{debug, info};

use crate::api::Viewer;
use crate::core::processing::canvas::RenderedFigure;
use crate::error::{Error, Result};

/// Opens a native window showing the figure and blocks until it is closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowViewer;

impl WindowViewer {
    pub fn new() -> Self {
        Self
    }
}

impl Viewer for WindowViewer {
    fn present(&mut self, figure: &RenderedFigure) -> Result<()> {
        let size = [figure.width as f32, figure.height as f32];
        let options = NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(figure.title.clone())
                .with_inner_size(size)
                .with_min_inner_size([200.0, 200.0]),
            ..Default::default()
        };

        let app = FigureApp::new(figure);
        info!("Opening window for `{}`", figure.title);
        eframe::run_native(
            &figure.title,
            options,
            Box::new(|_cc| Ok(Box::new(app))),
        )
        .map_err(|e| Error::Display(e.to_string()))?;
        debug!("Window closed");
        Ok(())
    }
}

struct FigureApp {
    pending: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl FigureApp {
    fn new(figure: &RenderedFigure) -> Self {
        let image =
            egui::ColorImage::from_rgba_unmultiplied([figure.width, figure.height], &figure.rgba);
        Self {
            pending: Some(image),
            texture: None,
        }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload once; the context only exists after the window is up
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture("figure", image, egui::TextureOptions::LINEAR));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape) || i.key_pressed(egui::Key::Q)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                if let Some(texture) = &self.texture {
                    ui.centered_and_justified(|ui| {
                        ui.add(
                            egui::Image::from_texture(egui::load::SizedTexture::from_handle(
                                texture,
                            ))
                            .shrink_to_fit(),
                        );
                    });
                }
            });
    }
}
