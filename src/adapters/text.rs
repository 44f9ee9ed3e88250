use crate::app::scene::{LineStyle, PlotScene};
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// 以純文字列出場景內容
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn present(&mut self, scene: &PlotScene) -> Result<()> {
        writeln!(self.out, "{}", scene.title)?;
        writeln!(self.out, "{}", scene.headline())?;
        writeln!(
            self.out,
            "Axes: {} / {} in [-{limit}, {limit}]",
            scene.axes.x_label,
            scene.axes.y_label,
            limit = scene.axes.limit
        )?;

        for vector in &scene.vectors {
            let style = match vector.style {
                LineStyle::Solid => "solid",
                LineStyle::Dashed => "dashed",
            };
            let clipped = if scene.is_visible(vector.tip) {
                ""
            } else {
                " (outside plot area)"
            };
            writeln!(
                self.out,
                "  vector {} [{}, {}]{}",
                vector.label, vector.color, style, clipped
            )?;
        }

        if let Some(annotation) = &scene.annotation {
            writeln!(
                self.out,
                "  text   {} at ({}, {}) [{}]",
                annotation.text, annotation.anchor.re, annotation.anchor.im, annotation.color
            )?;
        }

        self.out.flush()?;
        Ok(())
    }
}
