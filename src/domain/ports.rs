use crate::app::scene::PlotScene;
use crate::core::evaluator::DisplayOptions;
use crate::domain::model::ComplexNumber;
use crate::utils::error::Result;

/// 一次運算請求的來源 (CLI 參數或 TOML 檔)
pub trait RequestProvider {
    fn z1(&self) -> ComplexNumber;
    fn z2(&self) -> ComplexNumber;
    fn operation(&self) -> &str;
    fn display_options(&self) -> DisplayOptions;
    fn axis_limit(&self) -> f64;
}

/// 展示層：把場景交給實際負責繪圖或輸出的一方
pub trait Presenter {
    fn present(&mut self, scene: &PlotScene) -> Result<()>;
}
