//! Prompt construction for group mediation.
//!
//! Both functions are pure; the orchestrator owns the completion call.

use driftwood_core::run::ConversationLogEntry;
use driftwood_core::scenario::Participant;
use std::fmt::Write;

const NO_TAGS: &str = "none";

const MEDIATOR_INSTRUCTIONS: &[&str] = &[
    "You are the AI mediator facilitating a group conversation.",
    "All participants have shared their opening thoughts.",
    "Respond to the group as a whole, addressing themes and facilitating dialogue.",
    "Do not include any speaker labels or prefixes in your response.",
    "Do not simulate or speak for participants.",
    "Your response should be your direct words to the group.",
];

const USER_PREAMBLE: &str = "Here's what each participant has shared:";
const USER_CLOSING: &str = "As the group mediator, please respond to facilitate dialogue and understanding between all participants.";

/// Builds the system-role context: the scenario prompt, one block per
/// participant, then the fixed mediator instructions.
pub fn build_context(system_prompt: &str, participants: &[Participant]) -> String {
    let mut context = String::with_capacity(system_prompt.len() + 256 * participants.len());
    context.push_str(system_prompt);
    context.push_str("\n\nPARTICIPANTS IN THIS SESSION:\n");

    for participant in participants {
        // Writing to a String cannot fail.
        let _ = writeln!(context, "- {}: {}", participant.name, participant.role);
        let _ = writeln!(context, "  Perspective: {}", participant.perspective);
        let _ = writeln!(context, "  Emotional state: {}\n", render_tags(&participant.meta_tags));
    }

    context.push_str("IMPORTANT INSTRUCTIONS:\n");
    for line in MEDIATOR_INSTRUCTIONS {
        let _ = writeln!(context, "- {line}");
    }
    context.push('\n');
    context
}

/// Builds the user turn from the participants' opening entries.
///
/// Mediator entries are skipped.
pub fn build_user_message(entries: &[ConversationLogEntry]) -> String {
    let conversation = entries
        .iter()
        .filter(|entry| !entry.is_mediator())
        .map(|entry| format!("{}: {}", entry.speaker, entry.content))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("{USER_PREAMBLE}\n\n{conversation}\n\n{USER_CLOSING}")
}

fn render_tags(tags: &[String]) -> String {
    let tags: Vec<&str> = tags
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();
    if tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        tags.join(", ")
    }
}
