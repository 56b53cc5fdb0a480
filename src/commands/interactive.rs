//! Interactive shell.
//!
//! Prompts for the worked time and the weights, recalculates automatically
//! once either field looks complete, and then offers a menu to copy all
//! times, copy a single task's time, change either field, or quit. The last
//! successful result stays on screen until the next calculation; a rejected
//! calculation clears it.

use crate::{
    libs::{
        clipboard::{Clipboard, SystemClipboard},
        config::Config,
        messages::Message,
        parser::parse_duration,
        session::{CopyFailure, CopyTarget, Session},
        view::View,
    },
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CopyAll,
    CopySingle(usize),
    EditDuration,
    EditWeights,
    Recalculate,
    Quit,
}

pub fn cmd() -> Result<()> {
    let config = Config::read().unwrap_or_else(|e| {
        msg_warning!(Message::ConfigReadFailed(e.to_string()));
        Config::default()
    });
    let mut clipboard = SystemClipboard::new();
    let mut session = Session::new(&config.default_weights);

    msg_print!(Message::ShellTitle, true);
    prompt_duration(&mut session)?;
    prompt_weights(&mut session)?;

    loop {
        if session.take_auto_calculate() {
            recalculate(&mut session, &config, &mut clipboard);
        }

        let menu = actions(&session);
        let labels = menu.iter().map(|action| action_label(&session, *action)).collect::<Vec<_>>();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptAction.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match menu[selection] {
            Action::CopyAll => copy(&mut session, CopyTarget::All, &config, &mut clipboard),
            Action::CopySingle(index) => copy(&mut session, CopyTarget::Single(index), &config, &mut clipboard),
            Action::EditDuration => prompt_duration(&mut session)?,
            Action::EditWeights => prompt_weights(&mut session)?,
            Action::Recalculate => recalculate(&mut session, &config, &mut clipboard),
            Action::Quit => break,
        }
    }

    Ok(())
}

fn prompt_duration(session: &mut Session) -> Result<()> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDuration.to_string())
        .with_initial_text(session.duration_input())
        .allow_empty(true)
        .interact_text()?;

    let code = session.edit_duration(&raw).to_string();
    if let Some(minutes) = parse_duration(&code) {
        msg_print!(Message::DurationSummary(code, minutes));
    }
    Ok(())
}

fn prompt_weights(session: &mut Session) -> Result<()> {
    let raw: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptWeights.to_string())
        .with_initial_text(session.weights_input())
        .allow_empty(true)
        .interact_text()?;

    session.edit_weights(&raw);
    Ok(())
}

fn recalculate(session: &mut Session, config: &Config, clipboard: &mut dyn Clipboard) {
    match session.calculate() {
        Ok(_) => {
            if config.auto_copy {
                copy(session, CopyTarget::All, config, clipboard);
            } else {
                render(session, config);
            }
        }
        Err(e) => msg_warning!(Message::InvalidInput(e.to_string())),
    }
}

fn render(session: &Session, config: &Config) {
    if let Some(result) = session.last_result() {
        View::allocation(result, config.show_raw_minutes, session.copy_status());
    }
}

fn copy(session: &mut Session, target: CopyTarget, config: &Config, clipboard: &mut dyn Clipboard) {
    match session.copy(target, clipboard) {
        Ok(Some(text)) => {
            render(session, config);
            match target {
                CopyTarget::All => msg_success!(Message::CopiedAll),
                CopyTarget::Single(index) => msg_success!(Message::CopiedSingle(task_label(session, index), text)),
            }
        }
        Ok(None) => msg_warning!(Message::NothingToCopy),
        Err(CopyFailure { error, text }) => {
            render(session, config);
            msg_warning!(Message::CopyFailed(error.to_string()));
            msg_print!(Message::CopyManually);
            println!("{}", text);
        }
    }
}

fn task_label(session: &Session, index: usize) -> String {
    session
        .last_result()
        .and_then(|result| result.entries.iter().find(|entry| entry.index == index))
        .map(|entry| entry.label.clone())
        .unwrap_or_default()
}

/// Menu entries for the current state; copy actions only exist with a result.
fn actions(session: &Session) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(result) = session.last_result() {
        actions.push(Action::CopyAll);
        actions.extend(result.entries.iter().map(|entry| Action::CopySingle(entry.index)));
    }
    actions.extend([Action::EditDuration, Action::EditWeights, Action::Recalculate, Action::Quit]);
    actions
}

fn action_label(session: &Session, action: Action) -> String {
    let message = match action {
        Action::CopyAll => Message::ActionCopyAll,
        Action::CopySingle(index) => {
            let clock = session
                .last_result()
                .and_then(|result| result.entries.iter().find(|entry| entry.index == index))
                .map(|entry| entry.clock.clone())
                .unwrap_or_default();
            Message::ActionCopySingle(task_label(session, index), clock)
        }
        Action::EditDuration => Message::ActionEditDuration,
        Action::EditWeights => Message::ActionEditWeights,
        Action::Recalculate => Message::ActionRecalculate,
        Action::Quit => Message::ActionQuit,
    };
    message.to_string()
}
