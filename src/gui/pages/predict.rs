// src/gui/pages/predict.rs
//
// Where does an accident at a given date and time land? Inputs feed the
// trained network; training happens lazily on the first click and the
// model sticks around until the underlying file changes.

use eframe::egui;

use crate::{config::options::ViewKind, gui::app::App};

use super::Page;

pub struct PredictPage;
pub static PAGE: PredictPage = PredictPage;

impl Page for PredictPage {
    fn title(&self) -> &'static str { "Predict" }
    fn kind(&self) -> ViewKind { ViewKind::Predict }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        if app.active_table().is_none() {
            super::no_data_notice(ui, &app.active_category);
            return;
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Day:");
            ui.add(egui::DragValue::new(&mut app.state.gui.predict_day).range(1..=31));
            ui.label("Month:");
            ui.add(egui::DragValue::new(&mut app.state.gui.predict_month).range(1..=12));
        });
        ui.horizontal(|ui| {
            ui.label("Hour:");
            // hrmn keeps minutes behind the decimal point, so 12:30 is 12.30
            ui.add(egui::Slider::new(&mut app.state.gui.predict_hour, 0.0..=23.99));
        });

        ui.add_space(4.0);

        if ui.button("Predict location").clicked() {
            let (day, month, hour) = (
                app.state.gui.predict_day,
                app.state.gui.predict_month,
                app.state.gui.predict_hour,
            );
            logf!("Predict: day={} month={} hour={:.2}", day, month, hour);
            match app.predict(day, month, hour) {
                Ok((lat, lon)) => {
                    app.state.gui.last_prediction = Some((lat, lon));
                    app.status(format!("Predicted ({:.5}, {:.5})", lat, lon));
                }
                Err(e) => {
                    loge!("Predict: Error: {}", e);
                    app.state.gui.last_prediction = None;
                    app.status(format!("Error: {e}"));
                }
            }
        }

        ui.add_space(8.0);

        if let Some((lat, lon)) = app.state.gui.last_prediction {
            ui.label(
                egui::RichText::new(format!("lat {:.5}   lon {:.5}", lat, lon))
                    .monospace()
                    .size(18.0),
            );
            if let Some(m) = app.model.as_ref() {
                ui.label(format!(
                    "Trained on {} rows, validation MAE {:.3}°",
                    m.rows_used,
                    m.val_mae()
                ));
            }
        } else {
            ui.label("No prediction yet.");
        }
    }
}
