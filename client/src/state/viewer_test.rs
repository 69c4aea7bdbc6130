use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::executor::block_on;

use super::*;
use crate::components::image_plot::TraceKind;
use crate::net::api::{FetchError, decode_fractal_body};

// =============================================================
// Test doubles
// =============================================================

struct FakeSource {
    body: Result<String, FetchError>,
    calls: Cell<usize>,
    unmount_during_fetch: Option<Liveness>,
}

impl FakeSource {
    fn body(json: &str) -> Self {
        Self { body: Ok(json.to_owned()), calls: Cell::new(0), unmount_during_fetch: None }
    }

    fn failing(err: FetchError) -> Self {
        Self { body: Err(err), calls: Cell::new(0), unmount_during_fetch: None }
    }

    fn unmounting(mut self, liveness: &Liveness) -> Self {
        self.unmount_during_fetch = Some(liveness.clone());
        self
    }
}

impl FractalSource for FakeSource {
    fn fetch(&self) -> impl Future<Output = Result<FractalImage, FetchError>> {
        self.calls.set(self.calls.get() + 1);
        if let Some(liveness) = &self.unmount_during_fetch {
            liveness.retire();
        }
        let result = self.body.clone().and_then(|body| decode_fractal_body(&body));
        async move { result }
    }
}

#[derive(Default)]
struct RecordingSink {
    reports: RefCell<Vec<FetchError>>,
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, err: &FetchError) {
        self.reports.borrow_mut().push(err.clone());
    }
}

fn run(source: &FakeSource, sink: &RecordingSink, liveness: &Liveness) -> (LoadOutcome, ViewerState) {
    let mut state = ViewerState::default();
    let outcome = block_on(load_fractal(source, sink, liveness, |image| {
        state.receive(image);
    }));
    (outcome, state)
}

fn black_pixel() -> FractalImage {
    FractalImage::from_rows(vec![vec![vec![0.0, 0.0, 0.0]]]).unwrap()
}

// =============================================================
// ViewerState
// =============================================================

#[test]
fn initial_state_is_loading_without_plot() {
    let state = ViewerState::default();
    assert!(state.is_loading());
    assert!(state.image().is_none());
    assert!(state.plot().is_none());
}

#[test]
fn loading_text_is_placeholder() {
    assert_eq!(LOADING_TEXT, "Loading fractal...");
}

#[test]
fn receive_transitions_to_loaded() {
    let mut state = ViewerState::Loading;
    assert!(state.receive(black_pixel()));
    assert_eq!(state, ViewerState::Loaded(black_pixel()));
}

#[test]
fn loaded_state_is_terminal() {
    let mut state = ViewerState::Loaded(black_pixel());
    let other = FractalImage::from_rows(vec![vec![vec![9.0, 9.0, 9.0]]]).unwrap();
    assert!(!state.receive(other));
    assert_eq!(state.image(), Some(&black_pixel()));
}

#[test]
fn loaded_state_plots_its_image() {
    let spec = ViewerState::Loaded(black_pixel()).plot().unwrap();
    assert_eq!(spec.data.len(), 1);
    assert_eq!(spec.data[0].z, black_pixel());
}

// =============================================================
// load_fractal
// =============================================================

#[test]
fn successful_response_renders_one_image_plot() {
    let source = FakeSource::body(r#"{"rgb":[[[0,0,0]]]}"#);
    let sink = RecordingSink::default();
    let (outcome, state) = run(&source, &sink, &Liveness::new());

    assert_eq!(outcome, LoadOutcome::Loaded);
    let spec = state.plot().unwrap();
    assert_eq!(spec.data.len(), 1);
    assert_eq!(spec.data[0].kind, TraceKind::Image);
    assert_eq!(spec.data[0].z.to_nested(), vec![vec![vec![0.0, 0.0, 0.0]]]);
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn fetch_is_issued_exactly_once() {
    let source = FakeSource::body(r#"{"rgb":[[[0,0,0]]]}"#);
    let _ = run(&source, &RecordingSink::default(), &Liveness::new());
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn missing_rgb_stays_loading() {
    let source = FakeSource::body(r#"{"status":"ok"}"#);
    let sink = RecordingSink::default();
    let (outcome, state) = run(&source, &sink, &Liveness::new());

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(state.is_loading());
    assert!(state.plot().is_none());
    assert_eq!(*sink.reports.borrow(), vec![FetchError::MissingRgb]);
}

#[test]
fn network_failure_stays_loading_and_is_reported() {
    let source = FakeSource::failing(FetchError::Network("connection refused".to_owned()));
    let sink = RecordingSink::default();
    let (outcome, state) = run(&source, &sink, &Liveness::new());

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(state.is_loading());
    assert_eq!(sink.reports.borrow().len(), 1);
}

#[test]
fn error_status_stays_loading() {
    let source = FakeSource::failing(FetchError::Status(500));
    let sink = RecordingSink::default();
    let (_, state) = run(&source, &sink, &Liveness::new());

    assert!(state.is_loading());
    assert_eq!(*sink.reports.borrow(), vec![FetchError::Status(500)]);
}

#[test]
fn malformed_shape_stays_loading() {
    let source = FakeSource::body(r#"{"rgb":[[[0,0,0],[0,0]]]}"#);
    let sink = RecordingSink::default();
    let (outcome, state) = run(&source, &sink, &Liveness::new());

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(state.is_loading());
    assert!(matches!(sink.reports.borrow()[0], FetchError::Shape(_)));
}

#[test]
fn unmount_before_resolution_drops_result() {
    let liveness = Liveness::new();
    let source = FakeSource::body(r#"{"rgb":[[[0,0,0]]]}"#).unmounting(&liveness);
    let sink = RecordingSink::default();
    let (outcome, state) = run(&source, &sink, &liveness);

    assert_eq!(outcome, LoadOutcome::Abandoned);
    assert!(state.is_loading());
    assert!(sink.reports.borrow().is_empty());
}

#[test]
fn unmount_before_failure_is_silent() {
    let liveness = Liveness::new();
    let source = FakeSource::failing(FetchError::Network("aborted".to_owned())).unmounting(&liveness);
    let sink = RecordingSink::default();
    let (outcome, _) = run(&source, &sink, &liveness);

    assert_eq!(outcome, LoadOutcome::Abandoned);
    assert!(sink.reports.borrow().is_empty());
}
