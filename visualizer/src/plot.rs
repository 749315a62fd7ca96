use dilemmacore::analysis::Evaluation;
use dilemmacore::chart::{ticks, GuideRole, Orientation, PlotBounds, Readout, Viewport};
use dilemmacore::prelude::{Curve, CurveKind};
use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Pixels, Point, Rectangle, Renderer, Theme,
};

use crate::Message;

const GRID_LINES: usize = 8;

/// Acceleration–distance plot of one evaluation.
#[derive(Clone)]
pub struct DistancePlot {
    evaluation: Evaluation,
    bounds: PlotBounds,
}

impl DistancePlot {
    pub fn new(evaluation: &Evaluation) -> Self {
        Self {
            bounds: evaluation.bounds(),
            evaluation: evaluation.clone(),
        }
    }
}

fn curve_color(kind: CurveKind) -> Color {
    match kind {
        CurveKind::Acceleration => Color::from_rgb(0.25, 0.45, 1.0),
        CurveKind::Deceleration => Color::from_rgb(0.95, 0.85, 0.2),
    }
}

fn guide_color(role: GuideRole) -> Color {
    match role {
        GuideRole::Axis => Color::from_rgb(0.85, 0.85, 0.85),
        GuideRole::StopLine => Color::from_rgb(0.0, 0.8, 0.8),
        GuideRole::FarEdge => Color::from_rgb(0.85, 0.2, 0.85),
        GuideRole::MinAcceleration => Color::from_rgb(0.9, 0.25, 0.25),
        GuideRole::MaxAcceleration => Color::from_rgb(0.25, 0.8, 0.3),
    }
}

fn line(width: f32, color: Color) -> Stroke<'static> {
    Stroke::default().with_width(width).with_color(color)
}

fn label(frame: &mut Frame, content: String, position: Point, color: Color) {
    frame.fill_text(canvas::Text {
        content,
        position,
        color,
        size: Pixels(12.0),
        ..canvas::Text::default()
    });
}

impl DistancePlot {
    fn draw_grid(&self, frame: &mut Frame, viewport: &Viewport, width: f32, height: f32) {
        let grid = Color::from_rgb(0.18, 0.18, 0.22);
        let text = Color::from_rgb(0.6, 0.6, 0.65);

        for x in ticks(self.bounds.x_min, self.bounds.x_max, GRID_LINES) {
            let (sx, _) = viewport.to_screen(x, 0.0);
            frame.stroke(
                &Path::line(Point::new(sx, 0.0), Point::new(sx, height)),
                line(1.0, grid),
            );
            label(frame, format!("{x:.1}"), Point::new(sx + 2.0, height - 16.0), text);
        }
        for y in ticks(self.bounds.y_min, self.bounds.y_max, GRID_LINES) {
            let (_, sy) = viewport.to_screen(0.0, y);
            frame.stroke(
                &Path::line(Point::new(0.0, sy), Point::new(width, sy)),
                line(1.0, grid),
            );
            label(frame, format!("{y:.0}"), Point::new(4.0, sy - 14.0), text);
        }
    }

    fn draw_guides(&self, frame: &mut Frame, viewport: &Viewport, width: f32, height: f32) {
        for guide in &self.evaluation.guides {
            let color = guide_color(guide.role);
            let (from, to, anchor) = match guide.orientation {
                Orientation::Vertical => {
                    let (sx, _) = viewport.to_screen(guide.value, 0.0);
                    (
                        Point::new(sx, 0.0),
                        Point::new(sx, height),
                        Point::new(sx + 4.0, 4.0),
                    )
                }
                Orientation::Horizontal => {
                    let (_, sy) = viewport.to_screen(0.0, guide.value);
                    (
                        Point::new(0.0, sy),
                        Point::new(width, sy),
                        Point::new(width - 48.0, sy - 16.0),
                    )
                }
            };
            let stroke_width = if guide.role == GuideRole::Axis { 1.5 } else { 1.0 };
            frame.stroke(&Path::line(from, to), line(stroke_width, color));
            if guide.role != GuideRole::Axis {
                label(frame, guide.role.label().to_string(), anchor, color);
            }
        }
    }

    fn draw_curve(&self, frame: &mut Frame, viewport: &Viewport, curve: &Curve) {
        if curve.len() < 2 {
            return;
        }
        let path = Path::new(|builder| {
            for (i, point) in curve.points.iter().enumerate() {
                let (x, y) = viewport.to_screen(point.acceleration, point.distance);
                if i == 0 {
                    builder.move_to(Point::new(x, y));
                } else {
                    builder.line_to(Point::new(x, y));
                }
            }
        });
        frame.stroke(&path, line(2.5, curve_color(curve.kind)));
    }
}

impl canvas::Program<Message> for DistancePlot {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<Message>> {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let position = cursor.position_in(bounds)?;
                let viewport = Viewport::new(self.bounds, bounds.width, bounds.height);
                let (acceleration, distance) = viewport.to_data(position.x, position.y);
                Some(canvas::Action::publish(Message::PlotHovered(Readout {
                    acceleration,
                    distance,
                })))
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let viewport = Viewport::new(self.bounds, bounds.width, bounds.height);
        self.draw_grid(&mut frame, &viewport, bounds.width, bounds.height);
        self.draw_guides(&mut frame, &viewport, bounds.width, bounds.height);
        for curve in self.evaluation.curves() {
            self.draw_curve(&mut frame, &viewport, curve);
        }

        if let Some(position) = cursor.position_in(bounds) {
            let crosshair = Color::from_rgba(1.0, 1.0, 1.0, 0.35);
            frame.stroke(
                &Path::line(
                    Point::new(position.x, 0.0),
                    Point::new(position.x, bounds.height),
                ),
                line(1.0, crosshair),
            );
            frame.stroke(
                &Path::line(
                    Point::new(0.0, position.y),
                    Point::new(bounds.width, position.y),
                ),
                line(1.0, crosshair),
            );
        }

        let white = Color::from_rgb(0.9, 0.9, 0.9);
        label(
            &mut frame,
            "Acceleration - Distance Relationships".into(),
            Point::new(bounds.width / 2.0 - 120.0, 6.0),
            white,
        );
        label(
            &mut frame,
            "Distance (m)".into(),
            Point::new(36.0, 6.0),
            white,
        );
        label(
            &mut frame,
            "Acceleration (m/s^2)".into(),
            Point::new(bounds.width - 140.0, bounds.height - 34.0),
            white,
        );

        vec![frame.into_geometry()]
    }
}
