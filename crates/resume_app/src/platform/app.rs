use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use client_logging::{client_info, client_warn};
use resume_client::ReqwestResumeService;
use resume_core::{update, AppState, Msg, Route};

use super::cli::Cli;
use super::config::{AppConfig, BASE_URL_ENV};
use super::effects::EffectRunner;
use super::files::load_resume;
use super::input::{parse_line, Command};
use super::ui;

/// Everything the main loop reacts to.
pub enum AppEvent {
    /// A line typed by the user.
    Line(String),
    /// Standard input reached end of file.
    InputClosed,
    /// A message produced off the UI thread (request completions).
    Core(Msg),
}

pub fn run_app() -> Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(std::env::var(BASE_URL_ENV).ok(), cli.base_url.clone());
    client_logging::initialize(&config.log_settings()?);

    let initial_route = Route::from_path(&cli.open)
        .with_context(|| format!("No page at location '{}'", cli.open))?;
    let service = ReqwestResumeService::new(config.service_settings())
        .with_context(|| format!("Invalid service base url '{}'", config.base_url))?;
    client_info!("Starting at {}", initial_route.path());

    let (event_tx, event_rx) = mpsc::channel();
    let runner = EffectRunner::new(Arc::new(service), event_tx.clone())
        .context("Failed to start the request runtime")?;
    spawn_input_reader(event_tx).context("Failed to start the input reader")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_loop(AppState::at(initial_route), &runner, event_rx, &mut out)
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) -> io::Result<()> {
    thread::Builder::new()
        .name("stdin".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if event_tx.send(AppEvent::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(err) => {
                        client_warn!("Failed to read input: {}", err);
                        break;
                    }
                }
            }
            let _ = event_tx.send(AppEvent::InputClosed);
        })?;
    Ok(())
}

fn run_loop<W: Write>(
    mut state: AppState,
    runner: &EffectRunner,
    events: mpsc::Receiver<AppEvent>,
    out: &mut W,
) -> Result<()> {
    print_lines(out, &ui::render::render(&state.view()))?;

    for event in events {
        let msg = match event {
            AppEvent::Core(msg) => msg,
            AppEvent::InputClosed => Msg::QuitRequested,
            AppEvent::Line(line) => match parse_line(&line, &state.view()) {
                Command::Core(msg) => msg,
                Command::SelectFile(path) => match load_resume(&path) {
                    Ok(file) => {
                        client_info!("Selected {} ({} bytes)", file.name, file.bytes.len());
                        Msg::FileSelected(file)
                    }
                    Err(err) => {
                        client_warn!("Failed to read {:?}: {}", path, err);
                        writeln!(out, "Could not read {}: {}", path.display(), err)?;
                        continue;
                    }
                },
                Command::Help => {
                    print_lines(out, &ui::render::help(&state.view()))?;
                    continue;
                }
                Command::UnknownRoute(path) => {
                    writeln!(out, "No page at '{path}'.")?;
                    continue;
                }
                Command::Unknown(word) => {
                    writeln!(out, "Unknown command '{word}'. Type 'help' for commands.")?;
                    continue;
                }
            },
        };

        let (next, effects) = update(state, msg);
        state = next;
        let flow = runner.enqueue(effects);

        if state.consume_dirty() {
            print_lines(out, &ui::render::render(&state.view()))?;
        }
        if flow.is_break() {
            break;
        }
    }

    client_info!("Leaving");
    Ok(())
}

fn print_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    writeln!(out)?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{Duration, Instant};

    use resume_client::{FailureKind, RequestError, ResumeService, ResumeUpload};
    use tempfile::TempDir;

    use super::*;

    #[derive(Clone, Default)]
    struct SharedOutput(Arc<Mutex<Vec<u8>>>);

    impl SharedOutput {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        fn wait_for(&self, needle: &str) {
            let deadline = Instant::now() + Duration::from_secs(5);
            while !self.text().contains(needle) {
                assert!(
                    Instant::now() < deadline,
                    "timed out waiting for {needle:?} in:\n{}",
                    self.text()
                );
                thread::sleep(Duration::from_millis(10));
            }
        }
    }

    impl Write for SharedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Analyze succeeds, rewrite fails; counts calls.
    #[derive(Default)]
    struct FakeService {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ResumeService for FakeService {
        async fn analyze(
            &self,
            resume: &ResumeUpload,
            job_description: &str,
        ) -> Result<Option<String>, RequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(Some(format!(
                "{} vs [{}]: Good fit",
                resume.file_name, job_description
            )))
        }

        async fn rewrite(&self, _resume: &ResumeUpload) -> Result<Option<String>, RequestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(RequestError {
                kind: FailureKind::Network,
                message: "connection refused".to_string(),
            })
        }
    }

    struct Harness {
        tx: mpsc::Sender<AppEvent>,
        out: SharedOutput,
        service: Arc<FakeService>,
        worker: thread::JoinHandle<Result<()>>,
    }

    impl Harness {
        fn start(state: AppState) -> Self {
            let (tx, rx) = mpsc::channel();
            let out = SharedOutput::default();
            let service = Arc::new(FakeService::default());

            let worker = {
                let tx = tx.clone();
                let mut out = out.clone();
                let service: Arc<dyn ResumeService> = service.clone();
                thread::spawn(move || {
                    let runner = EffectRunner::new(service, tx)?;
                    run_loop(state, &runner, rx, &mut out)
                })
            };
            Self {
                tx,
                out,
                service,
                worker,
            }
        }

        fn type_line(&self, line: &str) {
            self.tx.send(AppEvent::Line(line.to_string())).unwrap();
        }

        fn finish(self) -> String {
            self.tx.send(AppEvent::InputClosed).unwrap();
            self.worker.join().unwrap().unwrap();
            self.out.text()
        }
    }

    #[test]
    fn analyze_round_trip_shows_result() {
        client_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("resume.pdf");
        fs::write(&path, b"%PDF").unwrap();

        let harness = Harness::start(AppState::new());
        harness.type_line("upload");
        harness.type_line(&format!("file {}", path.display()));
        harness.type_line("analyze");
        harness.out.wait_for("--- Analysis ---");
        let output = harness.finish();

        assert!(output.contains("[upload] Upload Resume"));
        assert!(output.contains("Resume: resume.pdf"));
        assert!(output.contains("resume.pdf vs []: Good fit"));
    }

    #[test]
    fn rewrite_without_file_alerts_and_sends_nothing() {
        client_logging::initialize_for_tests();
        let harness = Harness::start(AppState::at(Route::Upload));
        harness.type_line("rewrite");
        harness.out.wait_for("!! Upload your resume first!");
        let service = harness.service.clone();
        let output = harness.finish();

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
        assert!(!output.contains("--- Rewritten Resume ---"));
    }

    #[test]
    fn failed_rewrite_alerts_and_leaves_section_empty() {
        client_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("cv.txt");
        fs::write(&path, b"cv").unwrap();

        let harness = Harness::start(AppState::at(Route::Upload));
        harness.type_line(&format!("file {}", path.display()));
        harness.type_line("rewrite");
        harness.out.wait_for("!! Rewrite failed!");
        let output = harness.finish();

        assert!(!output.contains("--- Rewritten Resume ---"));
    }

    #[test]
    fn unreadable_file_is_reported_without_state_change() {
        client_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.pdf");

        let harness = Harness::start(AppState::at(Route::Upload));
        harness.type_line(&format!("file {}", missing.display()));
        harness.out.wait_for("Could not read");
        harness.type_line("nonsense");
        harness.out.wait_for("Unknown command 'nonsense'");
        let output = harness.finish();

        assert!(!output.contains("Resume: missing.pdf"));
    }
}
