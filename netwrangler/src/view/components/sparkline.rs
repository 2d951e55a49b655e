//! Sparkline widget for recent score history.

use iced::widget::canvas::{self, Cache, Frame, Geometry, Path, Stroke};
use iced::widget::{Canvas, container};
use iced::{Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// A mini line chart of recent values, oldest first.
pub struct Sparkline {
    data: Vec<f64>,
    /// Fixed vertical range; `None` scales to the data.
    range: Option<(f64, f64)>,
    width: f32,
    height: f32,
    color: iced::Color,
}

impl Sparkline {
    /// Create a new sparkline with data.
    pub fn new(data: impl IntoIterator<Item = f64>) -> Self {
        Self {
            data: data.into_iter().collect(),
            range: None,
            width: 160.0,
            height: 32.0,
            color: iced::Color::from_rgb(0.3, 0.7, 0.9),
        }
    }

    /// Pin the vertical axis to `min..=max`.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    /// Set the dimensions.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Render the sparkline as an Iced element.
    pub fn view<'a, Message: 'a + Clone>(self) -> Element<'a, Message> {
        let (min, max) = self.range.unwrap_or_else(|| {
            let min = self.data.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = self.data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            (min, max)
        });

        let program = SparklineProgram {
            data: self.data,
            min,
            max,
            color: self.color,
            cache: Cache::new(),
        };

        container(
            Canvas::new(program)
                .width(Length::Fixed(self.width))
                .height(Length::Fixed(self.height)),
        )
        .into()
    }
}

struct SparklineProgram {
    data: Vec<f64>,
    min: f64,
    max: f64,
    color: iced::Color,
    cache: Cache,
}

impl<Message> canvas::Program<Message, Theme, Renderer> for SparklineProgram {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            self.draw_line(frame, bounds.size());
        });

        vec![geometry]
    }
}

impl SparklineProgram {
    fn point(&self, index: usize, value: f64, size: Size) -> Point {
        let padding = 2.0;
        let width = size.width - padding * 2.0;
        let height = size.height - padding * 2.0;
        let range = (self.max - self.min).max(0.001);

        let x = if self.data.len() > 1 {
            padding + (index as f32 / (self.data.len() - 1) as f32) * width
        } else {
            padding + width / 2.0
        };
        let normalized = ((value - self.min) / range).clamp(0.0, 1.0) as f32;
        let y = padding + height - normalized * height;

        Point::new(x, y)
    }

    fn draw_line(&self, frame: &mut Frame, size: Size) {
        if self.data.is_empty() {
            return;
        }

        let mut builder = canvas::path::Builder::new();
        for (i, &value) in self.data.iter().enumerate() {
            let point = self.point(i, value, size);
            if i == 0 {
                builder.move_to(point);
            } else {
                builder.line_to(point);
            }
        }

        frame.stroke(
            &builder.build(),
            Stroke::default().with_color(self.color).with_width(1.5),
        );

        // Mark the latest sample.
        let last = self.data.len() - 1;
        let dot = Path::circle(self.point(last, self.data[last], size), 2.5);
        frame.fill(&dot, self.color);
    }
}
