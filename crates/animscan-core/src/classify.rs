//! Heuristic clip-purpose classification.
//!
//! Pure function over the clip name and inferred duration. Keyword groups are
//! matched case-insensitively as substrings, in order; the first group that
//! matches wins. Duration is only consulted when no keyword matches.

const IDLE: &[&str] = &["idle", "rest", "stand", "default"];
const MOVEMENT: &[&str] = &["walk", "run", "move", "locomotion"];
const ATTACK: &[&str] = &["attack", "bite", "strike", "fight"];
const DEATH: &[&str] = &["death", "die", "dead"];
const JUMP: &[&str] = &["jump", "leap", "hop"];
const FLIGHT: &[&str] = &["fly", "flight", "hover"];
const EAT: &[&str] = &["eat", "feed"];
const TURN: &[&str] = &["turn", "rotate"];
const DAMAGE: &[&str] = &["take_damage", "hit", "hurt"];
const VICTORY: &[&str] = &["celebrate", "victory", "win"];

/// Ordered keyword groups with their purpose labels.
const GROUPS: &[(&[&str], &str)] = &[
    (IDLE, "Idle/Rest animation"),
    (MOVEMENT, "Movement animation"),
    (ATTACK, "Attack animation"),
    (DEATH, "Death animation"),
    (JUMP, "Jump animation"),
    (FLIGHT, "Flying animation"),
    (EAT, "Eating animation"),
    (TURN, "Turning animation"),
    (DAMAGE, "Damage/Hit animation"),
    (VICTORY, "Victory/Celebration animation"),
];

/// Guess what a clip is for from its name, falling back to duration bands.
pub fn classify_purpose(name: &str, duration: Option<f64>) -> &'static str {
    let name = name.to_lowercase();
    for (keywords, label) in GROUPS {
        if keywords.iter().any(|k| name.contains(k)) {
            return label;
        }
    }
    match duration {
        Some(d) if d < 1.0 => "Short action/transition animation",
        Some(d) if d > 5.0 => "Long loop/ambient animation",
        _ => "Unknown purpose",
    }
}
