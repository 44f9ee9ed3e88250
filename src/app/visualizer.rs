use crate::app::scene::PlotScene;
use crate::core::Evaluator;
use crate::domain::model::EvaluationOutcome;
use crate::domain::ports::{Presenter, RequestProvider};
use crate::utils::error::Result;

/// 一次請求的流程：計算、建立場景、交給 presenter
pub struct Visualizer<P: Presenter> {
    presenter: P,
}

impl<P: Presenter> Visualizer<P> {
    pub fn new(presenter: P) -> Self {
        Self { presenter }
    }

    pub fn run<R: RequestProvider>(&mut self, request: &R) -> Result<EvaluationOutcome> {
        let z1 = request.z1();
        let z2 = request.z2();
        let operation = request.operation();
        let options = request.display_options();

        tracing::info!("🧮 {} with z1={}, z2={}", operation, z1, z2);

        let outcome = Evaluator::new(options).evaluate(z1, z2, operation);
        match &outcome {
            EvaluationOutcome::Success { display_label, .. } => {
                tracing::info!("✅ {}", display_label);
            }
            EvaluationOutcome::Failure { reason } => {
                tracing::warn!("⚠️ {}", reason);
            }
        }

        let scene = PlotScene::build(
            z1,
            z2,
            operation,
            &outcome,
            request.axis_limit(),
            options.vector_precision,
        );
        tracing::debug!(
            "Scene has {} vectors, annotation: {}",
            scene.vectors.len(),
            scene.annotation.is_some()
        );

        self.presenter.present(&scene)?;
        Ok(outcome)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }
}
