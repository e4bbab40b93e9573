use std::path::PathBuf;

use resume_core::{AppViewModel, Msg, PageView, Route};

use super::ui::constants::*;

/// What a line typed by the user asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Core(Msg),
    SelectFile(PathBuf),
    Help,
    UnknownRoute(String),
    Unknown(String),
}

pub(crate) fn parse_line(line: &str, view: &AppViewModel) -> Command {
    let trimmed = line.trim();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    if word == CMD_QUIT || word == CMD_EXIT {
        return Command::Core(Msg::QuitRequested);
    }
    // Any other line acknowledges the notice on screen.
    if view.notice.is_some() {
        return Command::Core(Msg::NoticeDismissed);
    }

    match word {
        "" => Command::Core(Msg::NoOp),
        CMD_HELP | "?" => Command::Help,
        CMD_HOME => Command::Core(Msg::Navigate(Route::Landing)),
        CMD_GO => match Route::from_path(rest) {
            Some(route) => Command::Core(Msg::Navigate(route)),
            None => Command::UnknownRoute(rest.to_string()),
        },
        _ => match &view.page {
            PageView::Landing(_) => parse_landing(word),
            PageView::Upload(upload) => parse_upload(word, rest, &upload.job_description),
        },
    }
}

fn parse_landing(word: &str) -> Command {
    match word {
        CMD_UPLOAD => Command::Core(Msg::UploadResumeClicked),
        _ => Command::Unknown(word.to_string()),
    }
}

fn parse_upload(word: &str, rest: &str, job_description: &str) -> Command {
    match word {
        CMD_FILE if !rest.is_empty() => Command::SelectFile(PathBuf::from(strip_quotes(rest))),
        CMD_JOB_DESCRIPTION => Command::Core(Msg::JobDescriptionEdited(rest.to_string())),
        CMD_JOB_DESCRIPTION_APPEND => {
            let text = if job_description.is_empty() {
                rest.to_string()
            } else {
                format!("{job_description}\n{rest}")
            };
            Command::Core(Msg::JobDescriptionEdited(text))
        }
        CMD_ANALYZE => Command::Core(Msg::AnalyzeClicked),
        CMD_REWRITE => Command::Core(Msg::RewriteClicked),
        _ => Command::Unknown(word.to_string()),
    }
}

/// Drops one pair of matching quotes, as left by drag-and-drop into a terminal.
fn strip_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = raw
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
