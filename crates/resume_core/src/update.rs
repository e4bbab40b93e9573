use client_logging::client_debug;

use crate::{AppState, Effect, Msg, Notice, Operation, RequestOutcome, Route, VisitId};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // An open notice blocks the page until it is dismissed.
    if state.notice_open() && is_user_interaction(&msg) {
        client_debug!("Ignoring user input while a notice is open");
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::Navigate(route) => {
            state.navigate(route);
            Vec::new()
        }
        Msg::UploadResumeClicked => {
            if state.route() == Route::Landing {
                state.navigate(Route::Upload);
            }
            Vec::new()
        }
        Msg::FileSelected(file) => {
            if let Some(form) = state.upload_form_mut() {
                form.resume = Some(file);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::JobDescriptionEdited(text) => {
            if let Some(form) = state.upload_form_mut() {
                form.job_description = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::AnalyzeClicked => submit(&mut state, Operation::Analyze),
        Msg::RewriteClicked => submit(&mut state, Operation::Rewrite),
        Msg::RequestFinished {
            visit,
            operation,
            outcome,
        } => {
            finish(&mut state, visit, operation, outcome);
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::QuitRequested => vec![Effect::Quit],
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn is_user_interaction(msg: &Msg) -> bool {
    matches!(
        msg,
        Msg::Navigate(_)
            | Msg::UploadResumeClicked
            | Msg::FileSelected(_)
            | Msg::JobDescriptionEdited(_)
            | Msg::AnalyzeClicked
            | Msg::RewriteClicked
    )
}

fn submit(state: &mut AppState, operation: Operation) -> Vec<Effect> {
    let Some(form) = state.upload_form_mut() else {
        return Vec::new();
    };
    let Some(resume) = form.resume.clone() else {
        state.push_notice(Notice::MissingResume);
        return Vec::new();
    };

    let in_flight = form.in_flight_mut(operation);
    if *in_flight {
        client_debug!("{:?} already in flight; ignoring re-submission", operation);
        return Vec::new();
    }
    *in_flight = true;

    let visit = form.visit;
    let effect = match operation {
        Operation::Analyze => Effect::SubmitAnalyze {
            visit,
            resume,
            job_description: form.job_description.clone(),
        },
        Operation::Rewrite => Effect::SubmitRewrite { visit, resume },
    };
    state.mark_dirty();
    vec![effect]
}

fn finish(state: &mut AppState, visit: VisitId, operation: Operation, outcome: RequestOutcome) {
    let Some(form) = state.form_for_visit(visit) else {
        // Failures still alert after their visit is left; results do not.
        if outcome == RequestOutcome::Failed {
            client_debug!("{:?} for visit {} failed after it was left", operation, visit);
            state.push_notice(Notice::for_failure(operation));
        } else {
            client_debug!(
                "Dropping {:?} result for visit {} which is no longer open",
                operation,
                visit
            );
        }
        return;
    };

    *form.in_flight_mut(operation) = false;
    match outcome {
        RequestOutcome::Succeeded(text) => {
            *form.result_mut(operation) = text;
        }
        RequestOutcome::Failed => {
            state.push_notice(Notice::for_failure(operation));
        }
    }
    state.mark_dirty();
}
