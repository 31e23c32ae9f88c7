//! Main application UI.
//! Renders the start screen, direction choice, the question form and the
//! statistics panel, and forwards every learner action to the drill session.

use crate::config::{DrillConfig, load_vocabulary_file};
use crate::export::json::{export_statistics_to_path, export_vocabulary_to_path};
use crate::models::session_clock::format_duration;
use crate::models::{AnswerFeedback, DrillDirection, DrillSession, SessionState};
use eframe::egui;
use std::time::{Duration, Instant};

/// Feedback shown after an answer until the pause runs out.
struct ShownFeedback {
    feedback: AnswerFeedback,
    until: Instant,
}

pub struct DrillApp {
    show_confirmation_dialog: bool,
    allowed_to_close: bool,
    config: DrillConfig,
    session: DrillSession,
    answer_input: String,
    shown_feedback: Option<ShownFeedback>,
    show_statistics: bool,
    show_result_dialog: bool,
    result_message: String,
}

impl eframe::App for DrillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_toolbar(ctx);
        if self.show_statistics {
            self.render_statistics_panel(ctx);
        }
        self.render_drill_screen(ctx);

        // Handle window close requests with confirmation dialog
        if ctx.input(|i| i.viewport().close_requested()) && !self.allowed_to_close {
            ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
            self.show_confirmation_dialog = true;
        }

        if self.show_confirmation_dialog {
            egui::Window::new("Quitter la révision ?")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("Non").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = false;
                        }

                        if ui.button("Oui").clicked() {
                            self.show_confirmation_dialog = false;
                            self.allowed_to_close = true;
                            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
        }

        if self.show_result_dialog {
            egui::Window::new("Résultat")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&self.result_message);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.show_result_dialog = false;
                    }
                });
        }
    }
}

impl DrillApp {
    pub fn new(config: DrillConfig, session: DrillSession, startup_notice: Option<String>) -> Self {
        Self {
            show_confirmation_dialog: false,
            allowed_to_close: false,
            config,
            session,
            answer_input: String::new(),
            shown_feedback: None,
            show_statistics: false,
            show_result_dialog: startup_notice.is_some(),
            result_message: startup_notice.unwrap_or_default(),
        }
    }

    fn show_message(&mut self, message: String) {
        self.result_message = message;
        self.show_result_dialog = true;
    }

    /// Renders reset, file and statistics buttons
    fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Réinitialiser la révision").clicked() {
                    self.session.reset();
                    self.shown_feedback = None;
                    self.answer_input.clear();
                    self.show_message("Révision réinitialisée !".to_string());
                }
                if ui.button("Charger un vocabulaire").clicked() {
                    self.handle_load_vocabulary();
                }
                if ui.button("Exporter le vocabulaire").clicked() {
                    self.handle_export_vocabulary();
                }
                ui.separator();
                ui.toggle_value(&mut self.show_statistics, "Statistiques");
            });
        });
    }

    /// Renders the screen matching the session state
    fn render_drill_screen(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("🇩🇪 Outil de révision des mots en allemand");
            ui.label(format!(
                "{} ({} mots)",
                self.session.vocabulary().name,
                self.session.vocabulary().len()
            ));
            ui.separator();
            ui.add_space(10.0);

            match self.session.state() {
                SessionState::NotStarted => {
                    if ui.button("Commencer la révision").clicked() {
                        if let Err(e) = self.session.start() {
                            tracing::warn!(error = %e, "cannot start drill session");
                            self.show_message(format!("Impossible de commencer : {e}"));
                        }
                    }
                }
                SessionState::AwaitingDirection => {
                    let mut chosen: Option<DrillDirection> = None;
                    ui.columns(DrillDirection::ALL.len(), |columns| {
                        for (column, direction) in columns.iter_mut().zip(DrillDirection::ALL) {
                            if column.button(direction.label()).clicked() {
                                chosen = Some(direction);
                            }
                        }
                    });
                    if let Some(direction) = chosen {
                        if let Err(e) = self.session.choose_direction(direction).map(|_| ()) {
                            self.show_message(format!("Erreur : {e}"));
                        }
                    }
                }
                SessionState::Drilling => self.render_question(ui),
            }

            ui.add_space(20.0);
            ui.separator();
            let stats = self
                .session
                .statistics(Instant::now(), self.config.most_missed_len);
            ui.label(stats.score_line());
        });
    }

    /// Renders the current question and the answer form, or the feedback of
    /// the previous answer while its pause lasts
    fn render_question(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        if let Some(shown) = &self.shown_feedback {
            if now < shown.until {
                let color = if shown.feedback.outcome.is_correct() {
                    egui::Color32::DARK_GREEN
                } else {
                    egui::Color32::DARK_RED
                };
                ui.label(egui::RichText::new(shown.feedback.message()).color(color).size(18.0));
                ui.ctx().request_repaint_after(shown.until - now);
                return;
            }
            self.shown_feedback = None;
        }

        if self.session.clock().is_paused() {
            ui.label("Révision en pause.");
            return;
        }

        let Some(question) = self.session.current_question() else {
            return;
        };
        ui.label(egui::RichText::new(&question.prompt).size(18.0));
        ui.add_space(10.0);

        let mut submitted = false;
        ui.horizontal(|ui| {
            ui.label("Votre réponse :");
            let response = ui.text_edit_singleline(&mut self.answer_input);
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                submitted = true;
            }
            response.request_focus();
            if ui.button("Valider").clicked() {
                submitted = true;
            }
        });

        if submitted {
            let input = std::mem::take(&mut self.answer_input);
            match self.session.submit_answer(&input) {
                Ok(feedback) => {
                    let pause = feedback
                        .outcome
                        .pause_ms(self.config.correct_pause_ms, self.config.incorrect_pause_ms);
                    self.shown_feedback = Some(ShownFeedback {
                        feedback,
                        until: now + Duration::from_millis(pause),
                    });
                }
                Err(e) => {
                    tracing::error!(error = %e, "answer rejected");
                    self.show_message(format!("Erreur : {e}"));
                }
            }
        }
    }

    /// Renders percentages, timing and the most missed terms
    fn render_statistics_panel(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let stats = self.session.statistics(now, self.config.most_missed_len);
        let mut toggle_pause = false;
        let mut export = false;

        egui::SidePanel::right("statistics")
            .min_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Statistiques");
                ui.label(format!(
                    "Commencée à {}",
                    self.session.clock().started_at().format("%H:%M")
                ));
                ui.label(format!("Temps actif : {}", format_duration(stats.elapsed)));
                ui.label(format!("Temps en pause : {}", format_duration(stats.paused)));

                let pause_label = if self.session.clock().is_paused() {
                    "Reprendre"
                } else {
                    "Pause"
                };
                if ui.button(pause_label).clicked() {
                    toggle_pause = true;
                }

                ui.separator();
                ui.label(format!("Réponses : {}", stats.answered));
                ui.add(
                    egui::ProgressBar::new((stats.accuracy_percent / 100.0) as f32)
                        .text(format!("{:.1} % corrects", stats.accuracy_percent)),
                );
                ui.add(
                    egui::ProgressBar::new((stats.error_percent / 100.0) as f32)
                        .text(format!("{:.1} % incorrects", stats.error_percent)),
                );

                ui.separator();
                ui.label("Mots les plus difficiles :");
                let max_errors = stats.most_missed.first().map_or(1, |m| m.errors);
                egui::ScrollArea::vertical()
                    .id_salt("most_missed")
                    .max_height(300.0)
                    .show(ui, |ui| {
                        for missed in &stats.most_missed {
                            ui.add(
                                egui::ProgressBar::new(missed.errors as f32 / max_errors as f32)
                                    .text(format!("{} ({})", missed.term, missed.errors)),
                            );
                        }
                    });

                ui.separator();
                if ui.button("Exporter les statistiques").clicked() {
                    export = true;
                }
            });

        if toggle_pause {
            if self.session.clock().is_paused() {
                self.session.resume(now);
            } else {
                self.session.pause(now);
            }
        }
        if export {
            self.handle_export_statistics();
        }
        // keep the timers ticking without input
        ctx.request_repaint_after(Duration::from_secs(1));
    }

    /// Replaces the word list with a CSV/TSV table or a JSON deck
    fn handle_load_vocabulary(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Vocabulaire", &["csv", "tsv", "txt", "json"])
            .pick_file()
        else {
            return;
        };

        match load_vocabulary_file(
            &path,
            &self.config.term_column,
            &self.config.translation_column,
        ) {
            Ok(vocabulary) => {
                let message = format!(
                    "Vocabulaire '{}' chargé : {} mots.",
                    vocabulary.name,
                    vocabulary.len()
                );
                self.session.replace_vocabulary(vocabulary);
                self.shown_feedback = None;
                self.answer_input.clear();
                self.show_message(message);
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "vocabulary load failed");
                self.show_message(format!("Échec du chargement : {e}"));
            }
        }
    }

    /// Handles vocabulary export to a JSON deck
    fn handle_export_vocabulary(&mut self) {
        let vocabulary = self.session.vocabulary();
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", vocabulary.name))
            .add_filter("JSON", &["json"])
            .save_file()
        {
            let message = match export_vocabulary_to_path(vocabulary, &path) {
                Ok(()) => format!("Vocabulaire '{}' exporté.", vocabulary.name),
                Err(e) => format!("Échec de l'export : {e}"),
            };
            self.show_message(message);
        }
    }

    fn handle_export_statistics(&mut self) {
        let stats = self
            .session
            .statistics(Instant::now(), self.config.most_missed_len);
        let file_name = format!(
            "statistiques-{}.json",
            chrono::Local::now().format("%Y-%m-%d-%H%M")
        );
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("JSON", &["json"])
            .save_file()
        {
            let message = match export_statistics_to_path(&stats, &path) {
                Ok(()) => "Statistiques exportées.".to_string(),
                Err(e) => format!("Échec de l'export : {e}"),
            };
            self.show_message(message);
        }
    }
}
