//! Starting content for a new editing session.

use crate::segment::{AudioBlock, Cinematography, Segment, VisualBlock};
use crate::vocabulary::{Framing, Lighting, Movement, ShotType};

pub const DEMO_PROJECT_TITLE: &str = "PROJECT: THE EQUILIBRIUM";

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|t| t.to_string()).collect()
}

/// The three-segment example script (ids 0, 1, 2).
pub fn demo_segments() -> Vec<Segment> {
    vec![
        Segment {
            id: 0,
            title: "The Hook".to_string(),
            time: "0:00 - 0:10".to_string(),
            reference: "Astro Kobi".to_string(),
            tags: tags(&["Science", "Mystery", "Intro"]),
            cinematography: Cinematography {
                shot_type: ShotType::CloseUp.label().to_string(),
                framing: Framing::Single.label().to_string(),
                lighting: Lighting::DarkMoody.label().to_string(),
                movement: Movement::Static.label().to_string(),
            },
            audio: AudioBlock {
                speaker: "Narrator".to_string(),
                text: "13.8 billion years ago, everything we know—every star, every atom—\
                       was compressed into a single point smaller than a proton."
                    .to_string(),
            },
            visual: VisualBlock {
                action: "Black Screen -> Single vibrating pixel".to_string(),
                mood: "Mystery / Tension".to_string(),
                elements: "Vibrating Pixel, Kinetic Typography, Bass Rumble".to_string(),
                description: "Total silence initially. A low, thrumming bass rumble slowly \
                              increases in pitch—like a jet engine winding up."
                    .to_string(),
            },
        },
        Segment {
            id: 1,
            title: "The Scientific Thesis".to_string(),
            time: "0:10 - 0:25".to_string(),
            reference: "Johnny Harris".to_string(),
            tags: tags(&["Investigative", "Data", "3D"]),
            cinematography: Cinematography {
                shot_type: ShotType::ExtremeLong.label().to_string(),
                framing: Framing::Insert.label().to_string(),
                lighting: Lighting::HighContrast.label().to_string(),
                movement: Movement::DollyOut.label().to_string(),
            },
            audio: AudioBlock {
                speaker: "Narrator".to_string(),
                text: "Science calls it the Singularity. A state of infinite density. \
                       But look at the data. This wasn't an explosion IN space. \
                       It was an explosion OF space."
                    .to_string(),
            },
            visual: VisualBlock {
                action: "Paper Texture Map Overlay".to_string(),
                mood: "Investigative".to_string(),
                elements: "3D Grid Expansion, Red Marker Circles".to_string(),
                description: "Cut to 'Top-Down' paper aesthetic. The pixel expands into a \
                              3D mesh. A red marker circles 'SINGULARITY' while equations \
                              sync to the beat."
                    .to_string(),
            },
        },
        Segment {
            id: 2,
            title: "The Spiritual Synthesis".to_string(),
            time: "0:25 - 0:45".to_string(),
            reference: "Magnates Media".to_string(),
            tags: tags(&["Spiritual", "Epic", "Gold"]),
            cinematography: Cinematography {
                shot_type: ShotType::Long.label().to_string(),
                framing: Framing::Single.label().to_string(),
                lighting: Lighting::SoftKey.label().to_string(),
                movement: Movement::Pan.label().to_string(),
            },
            audio: AudioBlock {
                speaker: "Narrator (Deep)".to_string(),
                text: "Genesis 1:3 doesn't say God built the universe brick by brick. \
                       It says He SPOKE. 'Let. There. Be. Light.'"
                    .to_string(),
            },
            visual: VisualBlock {
                action: "Cinematic Parallax / Gold Glow".to_string(),
                mood: "Epic / Divine".to_string(),
                elements: "Burning Paper, Hebrew Text, Gold Particles".to_string(),
                description: "The paper map burns away to reveal an ancient scroll in 3D \
                              space. The Hebrew text 'Yehi Or' glows bright gold."
                    .to_string(),
            },
        },
    ]
}

/// A single placeholder segment with id 0.
pub fn blank_segments() -> Vec<Segment> {
    vec![Segment::placeholder(0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn demo_ids_start_at_zero() {
        let ids: Vec<_> = demo_segments().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn demo_ids_are_unique() {
        let segs = demo_segments();
        let ids: HashSet<_> = segs.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), segs.len());
    }

    #[test]
    fn blank_is_single_placeholder() {
        let segs = blank_segments();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0], Segment::placeholder(0));
    }

    #[test]
    fn hook_copy_keeps_dashes() {
        let hook = &demo_segments()[0];
        assert_eq!(
            hook.audio.text,
            "13.8 billion years ago, everything we know—every star, every atom—was compressed \
             into a single point smaller than a proton."
        );
        assert!(hook.visual.description.ends_with("increases in pitch—like a jet engine winding up."));
    }
}
