// SPDX-License-Identifier: MPL-2.0
//! Segmented progress bar: one segment per story of the current user.

use crate::domain::Progress;
use crate::ui::design_tokens::{on_story, opacity, sizing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Size, Theme};

/// Segments before the current story are full, the current one shows its
/// progress and later ones are empty.
#[derive(Debug, Clone, Copy)]
pub struct StoryProgress {
    count: usize,
    current: usize,
    progress: Progress,
}

impl StoryProgress {
    #[must_use]
    pub fn new(count: usize, current: usize, progress: Progress) -> Self {
        Self {
            count,
            current,
            progress,
        }
    }

    /// Fill fraction of segment `index`.
    #[must_use]
    pub fn fill(&self, index: usize) -> f32 {
        match index.cmp(&self.current) {
            std::cmp::Ordering::Less => 1.0,
            std::cmp::Ordering::Equal => self.progress.fraction(),
            std::cmp::Ordering::Greater => 0.0,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PROGRESS_TRACK))
            .into()
    }
}

impl<Message> canvas::Program<Message> for StoryProgress {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        if self.count == 0 {
            return vec![frame.into_geometry()];
        }

        let gaps = sizing::PROGRESS_GAP * (self.count - 1) as f32;
        let segment = ((bounds.width - gaps) / self.count as f32).max(0.0);
        let height = bounds.height;
        let corner = height / 2.0;

        for index in 0..self.count {
            let x = index as f32 * (segment + sizing::PROGRESS_GAP);
            frame.fill(
                &Path::rounded_rectangle(Point::new(x, 0.0), Size::new(segment, height), corner.into()),
                on_story(opacity::TRACK),
            );

            let filled = segment * self.fill(index);
            if filled > 0.0 {
                frame.fill(
                    &Path::rounded_rectangle(
                        Point::new(x, 0.0),
                        Size::new(filled, height),
                        corner.into(),
                    ),
                    on_story(opacity::OPAQUE),
                );
            }
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earlier_segments_are_full_and_later_empty() {
        let bar = StoryProgress::new(3, 1, Progress::new(40.0));
        assert_eq!(bar.fill(0), 1.0);
        assert!((bar.fill(1) - 0.4).abs() < f32::EPSILON);
        assert_eq!(bar.fill(2), 0.0);
    }
}
