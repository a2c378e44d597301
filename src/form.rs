//! Depot form controller: unit, arrival time, photo uploads, and the
//! "lanjutkan MSF" submission.

use chrono::TimeZone;
use tracing::{error, info, warn};

use crate::model::{
    DepoLog, DepoLogInput, UploadField, UploadState, ValidationError, parse_arrival_time,
};
use crate::notify::{Notification, Notifier};
use crate::storage::DepoLogSink;

pub const MSG_UPLOADED: &str = "File berhasil diupload!";
pub const MSG_MISSING_SELECTION: &str = "Pilih unit dan waktu tiba terlebih dahulu!";
pub const MSG_INVALID_ARRIVAL: &str = "Format waktu tiba tidak valid!";
pub const MSG_SUBMITTED: &str = "MSF berhasil dilanjutkan! Notifikasi dikirim ke GL PAMA.";
pub const MSG_SUBMIT_FAILED: &str = "Gagal menyimpan data MSF!";

/// Result of a [`DepoForm::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sink stored the record and the form was cleared.
    Submitted(DepoLog),
    /// Local checks failed; the sink was not called.
    Rejected,
    /// The sink reported a failure; the form was left as-is.
    Failed,
}

/// Local state of the depot supervisor form.
///
/// An empty string means "not set" for both the unit and the arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepoForm {
    selected_unit_id: String,
    arrival: String,
    uploads: UploadState,
}

impl DepoForm {
    /// Creates an empty form: no unit, no arrival time, nothing uploaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the selected unit ID, or `""` when none is selected.
    pub fn selected_unit_id(&self) -> &str {
        &self.selected_unit_id
    }

    /// Returns the raw arrival time, or `""` when unset.
    pub fn arrival(&self) -> &str {
        &self.arrival
    }

    /// Returns the upload flags.
    pub fn uploads(&self) -> UploadState {
        self.uploads
    }

    /// Selects the unit with `id`. An empty `id` clears the selection.
    pub fn select_unit(&mut self, id: impl Into<String>) {
        self.selected_unit_id = id.into();
    }

    /// Stores the raw datetime-local value. Parsing happens on submit.
    pub fn set_arrival_time(&mut self, value: impl Into<String>) {
        self.arrival = value.into();
    }

    /// Marks `field` as uploaded without inspecting any file.
    pub fn mark_uploaded(&mut self, field: UploadField, notifier: &mut impl Notifier) {
        self.uploads = self.uploads.with_uploaded(field);
        notifier.notify(Notification::success(MSG_UPLOADED));
    }

    /// Returns `true` once a unit and arrival time are set and all four
    /// photos are uploaded.
    pub fn is_ready_to_submit(&self) -> bool {
        self.uploads.all_uploaded() && !self.selected_unit_id.is_empty() && !self.arrival.is_empty()
    }

    /// Clears every field back to its initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Builds the payload for the current state, reading the arrival time
    /// as a wall-clock time in `tz`.
    pub fn to_input<Tz: TimeZone>(&self, tz: &Tz) -> Result<DepoLogInput, ValidationError> {
        if self.selected_unit_id.is_empty() || self.arrival.is_empty() {
            return Err(ValidationError::MissingSelection);
        }
        let waktu_tiba = parse_arrival_time(&self.arrival, tz)?;
        Ok(DepoLogInput::new(
            self.selected_unit_id.clone(),
            waktu_tiba,
            self.uploads,
        ))
    }

    /// Sends a completed-MSF record for the current state to `sink`.
    ///
    /// Unit and arrival time are re-checked here even though the submit
    /// button is disabled without them. On success the form is reset; on any
    /// failure it is left untouched so the operator can submit again.
    pub async fn submit<S, N, Tz>(&mut self, sink: &S, notifier: &mut N, tz: &Tz) -> SubmitOutcome
    where
        S: DepoLogSink,
        N: Notifier,
        Tz: TimeZone,
    {
        let input = match self.to_input(tz) {
            Ok(input) => input,
            Err(e) => {
                warn!(error = %e, "submit rejected");
                let message = match e {
                    ValidationError::MissingSelection => MSG_MISSING_SELECTION,
                    ValidationError::InvalidArrivalTime(_) => MSG_INVALID_ARRIVAL,
                };
                notifier.notify(Notification::error(message));
                return SubmitOutcome::Rejected;
            }
        };

        match sink.create_depo_log(input).await {
            Ok(log) => {
                info!(id = %log.id, unit_id = %log.input.unit_id, "MSF continued");
                notifier.notify(Notification::success(MSG_SUBMITTED));
                self.reset();
                SubmitOutcome::Submitted(log)
            }
            Err(e) => {
                error!(error = %e, unit_id = %self.selected_unit_id, "failed to store depot log");
                notifier.notify(Notification::error(MSG_SUBMIT_FAILED));
                SubmitOutcome::Failed
            }
        }
    }
}
