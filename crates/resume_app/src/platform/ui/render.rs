use resume_core::{
    AppViewModel, LandingView, PageView, Route, UploadView, APP_TITLE,
    JOB_DESCRIPTION_PLACEHOLDER,
};

use super::constants::*;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();
    match &view.page {
        PageView::Landing(landing) => render_landing(&mut lines, landing),
        PageView::Upload(upload) => render_upload(&mut lines, upload),
    }

    if let Some(notice) = view.notice {
        lines.push(String::new());
        lines.push(format!("!! {}", notice.message()));
        lines.push("   Press Enter to dismiss.".to_string());
    }
    lines
}

pub fn help(view: &AppViewModel) -> Vec<String> {
    let mut lines = vec!["Commands:".to_string()];
    match &view.page {
        PageView::Landing(_) => {
            lines.push(format!("  {CMD_UPLOAD:<16} open the upload page"));
        }
        PageView::Upload(_) => {
            lines.push(format!("  {:<16} select the resume file", format!("{CMD_FILE} <path>")));
            lines.push(format!(
                "  {:<16} replace the job description",
                format!("{CMD_JOB_DESCRIPTION} <text>")
            ));
            lines.push(format!(
                "  {:<16} add a line to the job description",
                format!("{CMD_JOB_DESCRIPTION_APPEND} <text>")
            ));
            lines.push(format!("  {CMD_JOB_DESCRIPTION:<16} clear the job description"));
            lines.push(format!("  {CMD_ANALYZE:<16} analyze the resume"));
            lines.push(format!("  {CMD_REWRITE:<16} rewrite the resume"));
        }
    }
    lines.push(format!("  {:<16} open a location", format!("{CMD_GO} <path>")));
    lines.push(format!("  {CMD_HOME:<16} back to the start page"));
    lines.push(format!("  {CMD_QUIT:<16} leave"));
    lines
}

fn render_landing(lines: &mut Vec<String>, landing: &LandingView) {
    lines.push(heading(landing.title, Route::Landing));
    lines.push(landing.tagline.to_string());
    lines.push(String::new());
    lines.push(format!("  [{CMD_UPLOAD}] {}", landing.action_label));
}

fn render_upload(lines: &mut Vec<String>, upload: &UploadView) {
    lines.push(heading(APP_TITLE, Route::Upload));

    let resume = upload
        .resume_name
        .as_deref()
        .unwrap_or("(no file selected)");
    lines.push(format!("Resume: {resume}"));

    lines.push("Job description:".to_string());
    if upload.job_description.is_empty() {
        lines.push(format!("  ({JOB_DESCRIPTION_PLACEHOLDER})"));
    } else {
        lines.extend(upload.job_description.lines().map(|line| format!("  | {line}")));
    }

    lines.push(String::new());
    lines.push(format!(
        "  [{CMD_ANALYZE}] Analyze Resume{}   [{CMD_REWRITE}] Rewrite Resume{}",
        busy_marker(upload.analyze_in_flight),
        busy_marker(upload.rewrite_in_flight)
    ));

    push_section(lines, "Analysis", upload.analysis.as_deref());
    push_section(lines, "Rewritten Resume", upload.rewritten_resume.as_deref());
}

fn heading(title: &str, route: Route) -> String {
    format!("== {title} ==  ({})", route.path())
}

fn busy_marker(in_flight: bool) -> &'static str {
    if in_flight {
        " (working...)"
    } else {
        ""
    }
}

/// Result sections only appear once they hold text.
fn push_section(lines: &mut Vec<String>, title: &str, body: Option<&str>) {
    let Some(body) = body.filter(|body| !body.is_empty()) else {
        return;
    };
    lines.push(String::new());
    lines.push(format!("--- {title} ---"));
    lines.extend(body.lines().map(ToOwned::to_owned));
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_core::{update, AppState, Msg, Operation, RequestOutcome, SelectedFile};

    fn upload_with_file() -> AppState {
        let state = AppState::at(Route::Upload);
        let (state, _) = update(
            state,
            Msg::FileSelected(SelectedFile::new("resume.pdf", b"%PDF".to_vec())),
        );
        state
    }

    #[test]
    fn landing_offers_single_upload_action() {
        let lines = render(&AppState::new().view());
        assert_eq!(
            lines,
            vec![
                "== AI Resume Analyzer ==  (/)".to_string(),
                "Upload your resume and get instant AI feedback".to_string(),
                String::new(),
                "  [upload] Upload Resume".to_string(),
            ]
        );
    }

    #[test]
    fn empty_upload_page_shows_placeholder_and_no_results() {
        let lines = render(&AppState::at(Route::Upload).view());
        assert!(lines.contains(&"Resume: (no file selected)".to_string()));
        assert!(lines.contains(&"  (Paste Job Description)".to_string()));
        assert!(!lines.iter().any(|line| line.contains("--- Analysis ---")));
        assert!(!lines.iter().any(|line| line.contains("--- Rewritten Resume ---")));
    }

    #[test]
    fn analysis_section_shows_result_text() {
        let state = upload_with_file();
        let visit = state.current_visit().unwrap();
        let (state, _) = update(state, Msg::AnalyzeClicked);
        let working = render(&state.view());
        assert!(working.iter().any(|line| line.contains("Analyze Resume (working...)")));

        let (state, _) = update(
            state,
            Msg::RequestFinished {
                visit,
                operation: Operation::Analyze,
                outcome: RequestOutcome::Succeeded(Some("Good fit".to_string())),
            },
        );
        let lines = render(&state.view());
        let section = lines
            .iter()
            .position(|line| line == "--- Analysis ---")
            .expect("analysis section");
        assert_eq!(lines[section + 1], "Good fit");
        assert!(lines.contains(&"Resume: resume.pdf".to_string()));
    }

    #[test]
    fn empty_result_text_is_not_shown() {
        let state = upload_with_file();
        let visit = state.current_visit().unwrap();
        let (state, _) = update(state, Msg::RewriteClicked);
        let (state, _) = update(
            state,
            Msg::RequestFinished {
                visit,
                operation: Operation::Rewrite,
                outcome: RequestOutcome::Succeeded(Some(String::new())),
            },
        );
        let lines = render(&state.view());
        assert!(!lines.iter().any(|line| line.contains("Rewritten Resume ---")));
    }

    #[test]
    fn notice_is_rendered_last() {
        let (state, _) = update(AppState::at(Route::Upload), Msg::RewriteClicked);
        let lines = render(&state.view());
        assert_eq!(
            &lines[lines.len() - 2..],
            &[
                "!! Upload your resume first!".to_string(),
                "   Press Enter to dismiss.".to_string()
            ]
        );
    }

    #[test]
    fn multi_line_job_description_is_indented() {
        let (state, _) = update(
            AppState::at(Route::Upload),
            Msg::JobDescriptionEdited("Rust\nTokio".to_string()),
        );
        let lines = render(&state.view());
        assert!(lines.contains(&"  | Rust".to_string()));
        assert!(lines.contains(&"  | Tokio".to_string()));
    }

    #[test]
    fn help_lists_page_commands() {
        let landing = help(&AppState::new().view());
        assert!(landing.iter().any(|line| line.contains("upload")));
        assert!(!landing.iter().any(|line| line.contains("analyze")));

        let upload = help(&AppState::at(Route::Upload).view());
        assert!(upload.iter().any(|line| line.contains("jd+ <text>")));
        assert!(upload.iter().any(|line| line.contains("analyze")));
    }
}
