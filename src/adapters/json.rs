use crate::app::scene::PlotScene;
use crate::domain::ports::Presenter;
use crate::utils::error::Result;
use std::io::Write;

/// 將場景輸出為格式化 JSON，供外部繪圖前端使用
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonPresenter<W> {
    fn present(&mut self, scene: &PlotScene) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, scene)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
