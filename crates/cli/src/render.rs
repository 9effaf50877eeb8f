//! Text rendering of a [`Storyboard`] snapshot.
//!
//! Three panes, matching the editor layout: the script timeline, the detail
//! editor for the active scene, and the preview overlay.

use scriptboard_core::field_path::{CinematographyField, FieldPath, FieldValue};
use scriptboard_core::store::Direction;
use scriptboard_core::vocabulary::Theme;
use scriptboard_core::{Segment, Storyboard};

use crate::command::OptionsTarget;

const RULE: &str = "----------------------------------------------------------------";

// ---------------------------------------------------------------------------
// Timeline
// ---------------------------------------------------------------------------

/// 1-based card number, zero-padded to two digits (`01`, `02`, ... `10`).
pub fn position_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Card badges: the shot type, then at most `max_tags` leading tags.
pub fn badges(segment: &Segment, max_tags: usize) -> Vec<&str> {
    std::iter::once(segment.cinematography.shot_type.as_str())
        .chain(segment.tags.iter().take(max_tags).map(String::as_str))
        .collect()
}

pub fn render_header(board: &Storyboard) -> String {
    format!("{}\nDIRECTOR'S OS v1.0", board.project_title())
}

pub fn render_timeline(board: &Storyboard, badge_tags: usize) -> String {
    let mut lines = vec!["SCRIPT TIMELINE".to_string()];
    let active = board.active_id();
    let deletable = board.can_delete();

    for (index, segment) in board.segments().iter().enumerate() {
        let marker = if segment.id == active { '>' } else { ' ' };
        let delete_hint = if deletable {
            format!("  [delete {}]", segment.id)
        } else {
            String::new()
        };
        lines.push(format!(
            "{marker} {} #{} {}{delete_hint}",
            position_label(index),
            segment.id,
            segment.title
        ));
        lines.push(format!("      {}", segment.time));
        let badge_line: Vec<String> = badges(segment, badge_tags)
            .into_iter()
            .map(|b| format!("[{b}]"))
            .collect();
        lines.push(format!("      {}", badge_line.join(" ")));
    }
    lines.push("  + Add Scene (new)".to_string());
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Detail editor
// ---------------------------------------------------------------------------

pub fn render_editor(board: &Storyboard, tag_draft: &str) -> String {
    let seg = board.active_segment();
    let mut lines = Vec::new();

    let up = if board.can_move(Direction::Up) { "up" } else { "--" };
    let down = if board.can_move(Direction::Down) { "down" } else { "----" };
    lines.push(format!("[{up}] [{down}]  #{} {}", seg.id, seg.title));

    let tags: Vec<String> = seg.tags.iter().map(|t| format!("<{t}>")).collect();
    lines.push(format!("Tags: {}  + Tag: {tag_draft}", tags.join(" ")));

    for field in CinematographyField::ALL {
        let value = match seg.field(FieldPath::Cinematography(*field)) {
            FieldValue::Text(text) => text,
            FieldValue::Tags(tags) => tags.join(", "),
        };
        lines.push(format!("{:<10}: {value}", field.label().to_uppercase()));
    }

    lines.push(String::new());
    lines.push("AUDIO SCRIPT".to_string());
    lines.push(format!("  Speaker   : {}", seg.audio.speaker));
    lines.push(format!("  Narration : {}", seg.audio.text));

    lines.push(String::new());
    lines.push("VISUAL DIRECTIVE".to_string());
    lines.push(format!("  Main Action : {}", seg.visual.action));
    lines.push(format!("  Reference   : {}", seg.reference));
    lines.push(format!("  Mood        : {}", seg.visual.mood));
    lines.push(format!("  Description : {}", seg.visual.description));
    lines.push(format!("  Elements    : {}", seg.visual.elements));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

/// Mock preview overlay. The play control only reflects the flag.
pub fn render_preview(board: &Storyboard, playing: bool) -> String {
    let seg = board.active_segment();
    let control = if playing { "||" } else { "|>" };
    [
        format!("[{}]  {}", seg.reference.to_uppercase(), seg.time),
        String::new(),
        format!("    {}", seg.visual.action),
        String::new(),
        format!("{control} =====-----------"),
    ]
    .join("\n")
}

pub fn render_board(board: &Storyboard, badge_tags: usize, tag_draft: &str, playing: bool) -> String {
    [
        render_header(board),
        RULE.to_string(),
        render_timeline(board, badge_tags),
        RULE.to_string(),
        render_editor(board, tag_draft),
        RULE.to_string(),
        render_preview(board, playing),
    ]
    .join("\n")
}

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

fn option_block(title: &str, options: &[&str]) -> String {
    let mut lines = vec![format!("{title}:")];
    lines.extend(options.iter().map(|o| format!("  - {o}")));
    lines.join("\n")
}

pub fn render_options(target: OptionsTarget) -> String {
    match target {
        OptionsTarget::Cinematography(field) => option_block(field.label(), &field.options()),
        OptionsTarget::Theme => option_block("Theme", &Theme::labels()),
        OptionsTarget::All => {
            let mut blocks: Vec<String> = CinematographyField::ALL
                .iter()
                .map(|f| option_block(f.label(), &f.options()))
                .collect();
            blocks.push(option_block("Theme", &Theme::labels()));
            blocks.join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_labels_are_zero_padded() {
        assert_eq!(position_label(0), "01");
        assert_eq!(position_label(8), "09");
        assert_eq!(position_label(9), "10");
        assert_eq!(position_label(99), "100");
    }

    #[test]
    fn badges_show_shot_type_and_first_tags() {
        let board = Storyboard::demo();
        let seg = &board.segments()[0];
        assert_eq!(badges(seg, 2), vec!["Close Up (CU)", "Science", "Mystery"]);
        assert_eq!(badges(seg, 0), vec!["Close Up (CU)"]);
        assert_eq!(badges(seg, 10).len(), 4);
    }

    #[test]
    fn timeline_marks_active_card() {
        let board = Storyboard::demo().select(1);
        let out = render_timeline(&board, 2);
        assert!(out.contains("> 02 #1 The Scientific Thesis"));
        assert!(out.contains("  01 #0 The Hook"));
        assert!(out.contains("[delete 2]"));
    }

    #[test]
    fn timeline_hides_delete_for_single_card() {
        let board = Storyboard::blank("P");
        let out = render_timeline(&board, 2);
        assert!(!out.contains("[delete"));
    }

    #[test]
    fn editor_disables_move_at_edges() {
        let board = Storyboard::demo();
        let out = render_editor(&board, "");
        assert!(out.starts_with("[--] [down]"));
        let out = render_editor(&board.select(2), "");
        assert!(out.starts_with("[up] [----]"));
    }

    #[test]
    fn editor_shows_tag_draft_and_fields() {
        let board = Storyboard::demo();
        let out = render_editor(&board, "   ");
        assert!(out.contains("<Science> <Mystery> <Intro>"));
        assert!(out.contains("+ Tag:    "));
        assert!(out.contains("LIGHTING  : Dark / Moody"));
        assert!(out.contains("Speaker   : Narrator"));
    }

    #[test]
    fn editor_lists_cinematography_in_form_order() {
        let board = Storyboard::demo();
        let out = render_editor(&board, "");
        let shot = out.find("SHOT TYPE : Close Up (CU)").unwrap();
        let framing = out.find("FRAMING   : Single Shot").unwrap();
        let movement = out.find("MOVEMENT  : Static").unwrap();
        assert!(shot < framing && framing < movement);
    }

    #[test]
    fn preview_uses_action_as_headline() {
        let board = Storyboard::demo();
        let out = render_preview(&board, false);
        assert!(out.starts_with("[ASTRO KOBI]  0:00 - 0:10"));
        assert!(out.contains("Black Screen -> Single vibrating pixel"));
        assert!(out.contains("|>"));
        assert!(render_preview(&board, true).contains("||"));
    }

    #[test]
    fn options_list_every_vocabulary() {
        let out = render_options(OptionsTarget::All);
        assert!(out.contains("Shot Type:"));
        assert!(out.contains("  - Over the Shoulder"));
        assert!(out.contains("  - Neon / Practical"));
        assert!(out.contains("  - Tracking"));
        assert!(out.contains("Theme:\n  - science"));
    }

    #[test]
    fn options_single_field() {
        let out = render_options(OptionsTarget::Cinematography(CinematographyField::Movement));
        assert!(out.starts_with("Movement:\n  - Static"));
        assert!(!out.contains("Silhouette"));
    }
}
