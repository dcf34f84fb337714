//! Plain-text rendering of wizard state

use estate_wizard::{CursorPosition, NavigationCursor, Next, WizardSnapshot};
use std::fmt::Write;

pub(crate) fn steps(snapshot: &WizardSnapshot) -> String {
    let mut out = String::new();
    if snapshot.visible.is_empty() {
        out.push_str("no visible steps");
        return out;
    }
    for (index, step) in snapshot.visible.iter().enumerate() {
        let mark = if snapshot.completion.is_complete(step) { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "{:>2}. [{mark}] {:<16} {} ({})",
            index + 1,
            step.id,
            step.label,
            step.category
        );
    }
    let hidden = snapshot.registry.len() - snapshot.visible.len();
    let _ = write!(out, "{} visible, {hidden} hidden", snapshot.visible.len());
    out
}

pub(crate) fn categories(snapshot: &WizardSnapshot) -> String {
    let mut out = String::new();
    for group in snapshot.categories() {
        let _ = writeln!(out, "{} {}/{}", group.label, group.completed_count, group.total());
        for step in &group.steps {
            let mark = if snapshot.completion.is_complete(step) { 'x' } else { ' ' };
            let _ = writeln!(out, "  [{mark}] {}", step.id);
        }
    }
    out.trim_end().to_string()
}

pub(crate) fn navigation(cursor: &NavigationCursor<'_>) -> String {
    let mut out = String::new();
    match cursor.position() {
        CursorPosition::Found => {}
        CursorPosition::Fallback { requested } => {
            let _ = writeln!(out, "stale: {requested} is not visible, redirecting");
        }
        CursorPosition::Empty => return "no visible steps".to_string(),
    }
    let id = |step: Option<&estate_wizard::StepDescriptor>| step.map_or("-", |s| s.id);
    let _ = writeln!(out, "current: {}", id(cursor.current()));
    let _ = writeln!(out, "prev: {}", id(cursor.prev_step()));
    let next = match cursor.next_step() {
        Next::Step(step) => step.id,
        Next::Complete => "(complete)",
    };
    let _ = write!(out, "next: {next}");
    out
}
