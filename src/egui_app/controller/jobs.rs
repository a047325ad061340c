use crate::prediction::{
    PredictionError, PredictionRequest, PredictionResult, PredictionService, ServiceHealth,
};
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, Sender},
    },
    thread,
};

type TryRecvError = std::sync::mpsc::TryRecvError;

pub(crate) enum JobMessage {
    PredictionFinished(PredictionJobResult),
    HealthChecked(HealthCheckResult),
}

#[derive(Debug)]
pub(crate) struct PredictionJobResult {
    pub(crate) request_id: u64,
    pub(crate) result: Result<PredictionResult, PredictionError>,
}

#[derive(Debug)]
pub(crate) struct HealthCheckResult {
    pub(crate) result: Result<ServiceHealth, PredictionError>,
}

/// Background job plumbing: worker threads report back over one channel.
pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    repaint: Option<egui::Context>,
    next_request_id: u64,
    active_prediction: Option<u64>,
    health_check_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            repaint: None,
            next_request_id: 1,
            active_prediction: None,
            health_check_in_progress: false,
        }
    }

    pub(super) fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn prediction_in_progress(&self) -> bool {
        self.active_prediction.is_some()
    }

    pub(super) fn health_check_in_progress(&self) -> bool {
        self.health_check_in_progress
    }

    /// Start a prediction on a worker thread and return its request id.
    ///
    /// Returns `None` when a prediction is already outstanding.
    pub(super) fn begin_prediction(
        &mut self,
        service: Arc<dyn PredictionService>,
        request: PredictionRequest,
    ) -> Option<u64> {
        if self.active_prediction.is_some() {
            return None;
        }
        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.active_prediction = Some(request_id);
        let tx = self.message_tx.clone();
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let result = service.predict(&request);
            let _ = tx.send(JobMessage::PredictionFinished(PredictionJobResult {
                request_id,
                result,
            }));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        Some(request_id)
    }

    /// Mark `request_id` finished. Returns false for responses nobody is waiting on.
    pub(super) fn finish_prediction(&mut self, request_id: u64) -> bool {
        if self.active_prediction != Some(request_id) {
            return false;
        }
        self.active_prediction = None;
        true
    }

    pub(super) fn begin_health_check(&mut self, service: Arc<dyn PredictionService>) -> bool {
        if self.health_check_in_progress {
            return false;
        }
        self.health_check_in_progress = true;
        let tx = self.message_tx.clone();
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let result = service.health();
            let _ = tx.send(JobMessage::HealthChecked(HealthCheckResult { result }));
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
        true
    }

    pub(super) fn clear_health_check(&mut self) {
        self.health_check_in_progress = false;
    }
}
