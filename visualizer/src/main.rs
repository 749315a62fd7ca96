use dilemmacore::analysis::{evaluate, Evaluation};
use dilemmacore::chart::Readout;
use dilemmacore::params::{ParamField, VehicleParams};
use dilemmacore::telemetry::{LogManager, MetricsRecorder};
use form::{FieldUpdate, ParameterForm};
use iced::{
    widget::{button, canvas::Canvas, column, row, text, text_input, Column, Container},
    Alignment, Color, Element, Length, Task, Theme,
};
use plot::DistancePlot;

mod form;
mod plot;

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .window_size((1000.0, 600.0))
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Smart Car Project".into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct Visualizer {
    form: ParameterForm,
    params: VehicleParams,
    evaluation: Evaluation,
    readout: Readout,
    confirm_exit: bool,
    metrics: MetricsRecorder,
}

#[derive(Debug, Clone)]
pub enum Message {
    FieldChanged(ParamField, String),
    PlotHovered(Readout),
    ExitRequested,
    ExitConfirmed,
    ExitCancelled,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let params = VehicleParams::default();
        (
            Visualizer {
                form: ParameterForm::new(),
                params,
                evaluation: evaluate(&params),
                readout: Readout::default(),
                confirm_exit: false,
                metrics: MetricsRecorder::new(),
            },
            Task::none(),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::FieldChanged(field, value) => {
                match state.form.apply(&mut state.params, field, value) {
                    FieldUpdate::Rejected(err) => {
                        state.metrics.record_rejection();
                        LogManager::with_target("visualizer").reject(&err.to_string());
                    }
                    FieldUpdate::Accepted(_) | FieldUpdate::Cleared => {
                        state.evaluation = evaluate(&state.params);
                        state.metrics.record_evaluation();
                    }
                }
                Task::none()
            }
            Message::PlotHovered(readout) => {
                state.readout = readout;
                Task::none()
            }
            Message::ExitRequested => {
                state.confirm_exit = true;
                Task::none()
            }
            Message::ExitConfirmed => iced::exit(),
            Message::ExitCancelled => {
                state.confirm_exit = false;
                Task::none()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let plot = Canvas::new(DistancePlot::new(&state.evaluation))
            .width(Length::Fill)
            .height(Length::Fill);

        let plot_column = column![plot, text(state.readout.format()).size(15)]
            .spacing(8)
            .width(Length::Fill)
            .height(Length::Fill);

        let inputs = state.form.entries().iter().fold(
            Column::new().spacing(6),
            |col, entry| {
                let field = entry.field;
                let col = col.push(
                    text_input(field.placeholder(), &entry.text)
                        .on_input(move |value| Message::FieldChanged(field, value))
                        .padding(6),
                );
                match &entry.error {
                    Some(error) => col.push(
                        text(error.clone())
                            .size(12)
                            .color(Color::from_rgb(0.95, 0.4, 0.4)),
                    ),
                    None => col,
                }
            },
        );

        let assessment = &state.evaluation.assessment;
        let decision = if state.form.has_errors() {
            text("Fix the highlighted entries to update the plot").size(14)
        } else if state.params.validate().is_ok() {
            text(format!("Decision: {}", assessment.decision.describe())).size(16)
        } else {
            text("Enter all seven values to classify the approach").size(14)
        };

        let (evaluations, rejections) = state.metrics.snapshot();
        let status = text(format!(
            "{} evaluations, {} rejected entries",
            evaluations, rejections
        ))
        .size(12);

        let exit: Element<'_, Message> = if state.confirm_exit {
            row![
                text("Do you really want to exit?").size(14),
                button("OK").on_press(Message::ExitConfirmed).padding(8),
                button("Cancel").on_press(Message::ExitCancelled).padding(8),
            ]
            .spacing(10)
            .align_y(Alignment::Center)
            .into()
        } else {
            button("Exit")
                .on_press(Message::ExitRequested)
                .padding(10)
                .into()
        };

        let form_column = column![
            text("Parameters").size(24),
            inputs,
            decision,
            column![
                text("Please input the variables to plot the graph.").size(12),
                text("Move the mouse over the plot to read coordinates.").size(12),
                text("Blue: distance covered during the yellow light while accelerating.")
                    .size(12),
                text("Yellow: stopping distance while braking.").size(12),
                text("Cyan: stop line (D). Magenta: far edge of the intersection (D + L).")
                    .size(12),
            ]
            .spacing(4),
            status,
            exit,
        ]
        .spacing(12)
        .padding(16)
        .width(Length::Fixed(380.0));

        let layout = row![plot_column, form_column]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
