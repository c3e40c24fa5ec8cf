//! Deterministic prompt construction for story generation.
//!
//! [`build_prompt`] maps a validated [`StoryBrief`] to the single user
//! message sent to the chat-completion endpoint. The function is pure:
//! the same brief always yields byte-identical prompt text.

use crate::brief::StoryBrief;

/// Title used when the brief provides none (or only whitespace).
pub const FALLBACK_TITLE: &str = "Untitled Adventure";

/// Build the generation prompt for a story brief.
///
/// Layout, in order:
///
/// 1. Fixed preamble establishing the fiction-writer role and the
///    cross-scene character-consistency requirement.
/// 2. Metadata block: title (with [`FALLBACK_TITLE`]), then genre, tone,
///    main characters, and world description. Optional lines are emitted
///    only when the source field is non-blank after trimming.
/// 3. Scene-structure instructions using the resolved scene count, asking
///    for `"Scene N:"` headings and a resolution in the final scene.
///
/// Blocks are separated by blank lines; the result is newline-joined.
pub fn build_prompt(brief: &StoryBrief) -> String {
    let scenes = brief.scene_count();
    let mut lines: Vec<String> = Vec::new();

    lines.push("You are an imaginative fiction writer.".to_string());
    lines.push("Write a coherent, engaging story split into distinct scenes.".to_string());
    lines.push(
        "The same main characters must appear consistently across all scenes, \
         keeping names, personality traits, and relationships stable."
            .to_string(),
    );
    lines.push(String::new());

    let title = non_blank(brief.title.as_deref()).unwrap_or(FALLBACK_TITLE);
    lines.push(format!("Title: {title}"));
    if let Some(genre) = non_blank(brief.genre.as_deref()) {
        lines.push(format!("Genre: {genre}"));
    }
    if let Some(tone) = non_blank(brief.tone.as_deref()) {
        lines.push(format!("Tone: {tone}"));
    }
    // Validated upstream; an empty value here still yields a stable prompt.
    let characters = brief.main_characters.as_deref().unwrap_or("").trim();
    lines.push(format!("Main characters: {characters}"));
    if let Some(world) = non_blank(brief.world_description.as_deref()) {
        lines.push(format!("World and setting: {world}"));
    }
    lines.push(String::new());

    lines.push(format!("Structure the story as {scenes} numbered scenes."));
    lines.push("Use clear headings like \"Scene 1:\", \"Scene 2:\", and so on.".to_string());
    lines.push("Each scene should move the plot forward.".to_string());
    lines.push("End with a satisfying resolution in the final scene.".to_string());

    lines.join("\n")
}

/// Trim an optional field, mapping blank results to `None`.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_brief() -> StoryBrief {
        StoryBrief {
            title: Some("The Glass Orchard".to_string()),
            genre: Some("fantasy".to_string()),
            tone: Some("wistful".to_string()),
            main_characters: Some("Mira and her brother Tam".to_string()),
            world_description: Some("an orchard of glass trees".to_string()),
            scenes_count: Some(json!("7")),
        }
    }

    #[test]
    fn prompt_contains_all_provided_fields() {
        let prompt = build_prompt(&full_brief());

        assert!(prompt.contains("Title: The Glass Orchard"));
        assert!(prompt.contains("Genre: fantasy"));
        assert!(prompt.contains("Tone: wistful"));
        assert!(prompt.contains("Main characters: Mira and her brother Tam"));
        assert!(prompt.contains("World and setting: an orchard of glass trees"));
    }

    #[test]
    fn scene_count_from_string_appears_in_instructions() {
        let prompt = build_prompt(&full_brief());
        assert!(prompt.contains("Structure the story as 7 numbered scenes."));
    }

    #[test]
    fn scene_count_defaults_to_four() {
        let brief = StoryBrief {
            scenes_count: Some(json!("abc")),
            ..full_brief()
        };
        let prompt = build_prompt(&brief);
        assert!(prompt.contains("Structure the story as 4 numbered scenes."));
    }

    #[test]
    fn blank_optional_fields_are_omitted() {
        let brief = StoryBrief {
            genre: Some("   ".to_string()),
            tone: None,
            world_description: Some(String::new()),
            ..full_brief()
        };
        let prompt = build_prompt(&brief);

        assert!(!prompt.contains("Genre:"));
        assert!(!prompt.contains("Tone:"));
        assert!(!prompt.contains("World and setting:"));
        assert!(prompt.contains("Main characters:"));
    }

    #[test]
    fn missing_title_uses_fallback() {
        let brief = StoryBrief {
            title: Some("  ".to_string()),
            ..full_brief()
        };
        let prompt = build_prompt(&brief);
        assert!(prompt.contains("Title: Untitled Adventure"));
    }

    #[test]
    fn provided_fields_are_trimmed() {
        let brief = StoryBrief {
            title: Some("  Night Train  ".to_string()),
            genre: Some(" noir ".to_string()),
            main_characters: Some("  a detective  ".to_string()),
            ..StoryBrief::default()
        };
        let prompt = build_prompt(&brief);

        assert!(prompt.contains("Title: Night Train\n"));
        assert!(prompt.contains("Genre: noir\n"));
        assert!(prompt.contains("Main characters: a detective\n"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(build_prompt(&full_brief()), build_prompt(&full_brief()));
    }

    #[test]
    fn metadata_block_separated_from_instructions_by_blank_line() {
        let prompt = build_prompt(&full_brief());
        assert!(prompt.contains("glass trees\n\nStructure the story"));
    }
}
