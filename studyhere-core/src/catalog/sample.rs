//! Built-in catalog used when no catalog file is configured

use super::{Catalog, NoiseLevel, SpaceId, SpaceRecord};

#[allow(clippy::too_many_arguments)]
fn space(
    id: u32,
    name: &str,
    building: &str,
    capacity: u32,
    open_now: bool,
    outlets: bool,
    noise: NoiseLevel,
    emoji: &str,
) -> SpaceRecord {
    SpaceRecord {
        id: SpaceId(id),
        name: name.to_string(),
        building: building.to_string(),
        capacity,
        open_now,
        outlets,
        noise,
        emoji: emoji.to_string(),
    }
}

/// The six campus study spaces shipped with StudyHere
pub fn sample_spaces() -> Vec<SpaceRecord> {
    use NoiseLevel::*;

    vec![
        space(1, "O'Leary Library", "South Campus", 30, true, true, Quiet, "📚"),
        space(2, "McGauvran Center", "South Campus", 10, false, true, Medium, "🏫"),
        space(3, "Bourgeois Hall", "East Campus", 50, false, true, Lively, "💻"),
        space(4, "University Crossings", "East Campus", 40, true, false, Medium, "☕"),
        space(5, "Lydon Library", "North Campus", 20, true, true, Quiet, "📚"),
        space(6, "Olney Science Center", "North Campus", 10, true, true, Medium, "🔬"),
    ]
}

impl Catalog {
    /// Catalog of the built-in sample spaces
    pub fn sample() -> Self {
        let spaces = sample_spaces();
        let positions = spaces
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.id, idx))
            .collect();
        Catalog::from_parts(spaces, positions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        assert!(Catalog::new(sample_spaces()).is_ok());
        assert_eq!(Catalog::sample(), Catalog::new(sample_spaces()).unwrap());
    }
}
