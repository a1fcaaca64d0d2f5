// SPDX-License-Identifier: MPL-2.0
//! Dashed loading ring drawn on a Canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

const DASHES: usize = 12;
/// Share of each dash slot that is drawn.
const DASH_FILL: f32 = 0.55;
const SEGMENTS_PER_DASH: usize = 6;
const STROKE_WIDTH: f32 = 4.0;

/// Dashed ring rotated by `rotation` radians.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Start and end angles of every dash at `rotation`.
#[allow(clippy::cast_precision_loss)]
fn dash_angles(rotation: f32) -> impl Iterator<Item = (f32, f32)> {
    let slot = TAU / DASHES as f32;
    (0..DASHES).map(move |i| {
        let start = rotation + slot * i as f32;
        (start, start + slot * DASH_FILL)
    })
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                let mut dashes = canvas::path::Builder::new();
                for (start, end) in dash_angles(self.rotation) {
                    dashes.move_to(Point::new(
                        center.x + radius * start.cos(),
                        center.y + radius * start.sin(),
                    ));
                    #[allow(clippy::cast_precision_loss)]
                    for step in 1..=SEGMENTS_PER_DASH {
                        let t = step as f32 / SEGMENTS_PER_DASH as f32;
                        let angle = start + (end - start) * t;
                        dashes.line_to(Point::new(
                            center.x + radius * angle.cos(),
                            center.y + radius * angle.sin(),
                        ));
                    }
                }

                let path: Path = dashes.build();
                frame.stroke(
                    &path,
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
