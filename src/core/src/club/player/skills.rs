use serde::Serialize;

pub const SKILL_MAX_VALUE: u8 = 99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    InsideScoring,
    OutsideScoring,
    Playmaking,
    PerimeterDefense,
    InteriorDefense,
    Rebounding,
    Stamina,
}

pub const SKILL_KINDS: [SkillKind; 7] = [
    SkillKind::InsideScoring,
    SkillKind::OutsideScoring,
    SkillKind::Playmaking,
    SkillKind::PerimeterDefense,
    SkillKind::InteriorDefense,
    SkillKind::Rebounding,
    SkillKind::Stamina,
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct BasketballSkills {
    pub inside_scoring: u8,
    pub outside_scoring: u8,
    pub playmaking: u8,
    pub perimeter_defense: u8,
    pub interior_defense: u8,
    pub rebounding: u8,
    pub stamina: u8,
}

impl BasketballSkills {
    pub fn new(
        inside_scoring: u8,
        outside_scoring: u8,
        playmaking: u8,
        perimeter_defense: u8,
        interior_defense: u8,
        rebounding: u8,
        stamina: u8,
    ) -> Self {
        BasketballSkills {
            inside_scoring: inside_scoring.min(SKILL_MAX_VALUE),
            outside_scoring: outside_scoring.min(SKILL_MAX_VALUE),
            playmaking: playmaking.min(SKILL_MAX_VALUE),
            perimeter_defense: perimeter_defense.min(SKILL_MAX_VALUE),
            interior_defense: interior_defense.min(SKILL_MAX_VALUE),
            rebounding: rebounding.min(SKILL_MAX_VALUE),
            stamina: stamina.min(SKILL_MAX_VALUE),
        }
    }

    pub fn with_level(level: u8) -> Self {
        BasketballSkills::new(level, level, level, level, level, level, level)
    }

    /// Overall rating is always derived from skills, never stored
    pub fn overall(&self) -> u8 {
        let weighted = self.inside_scoring as f32 * 0.20
            + self.outside_scoring as f32 * 0.20
            + self.playmaking as f32 * 0.18
            + self.perimeter_defense as f32 * 0.14
            + self.interior_defense as f32 * 0.14
            + self.rebounding as f32 * 0.10
            + self.stamina as f32 * 0.04;

        weighted.round().min(SKILL_MAX_VALUE as f32) as u8
    }

    pub fn offense_sum(&self) -> u16 {
        self.inside_scoring as u16 + self.outside_scoring as u16 + self.playmaking as u16
    }

    pub fn defense_sum(&self) -> u16 {
        self.perimeter_defense as u16 + self.interior_defense as u16 + self.rebounding as u16
    }

    /// Free throw ability blends shooting touch with composure on the ball
    pub fn free_throw(&self) -> f32 {
        self.outside_scoring as f32 * 0.6 + self.playmaking as f32 * 0.4
    }

    pub fn get(&self, kind: SkillKind) -> u8 {
        match kind {
            SkillKind::InsideScoring => self.inside_scoring,
            SkillKind::OutsideScoring => self.outside_scoring,
            SkillKind::Playmaking => self.playmaking,
            SkillKind::PerimeterDefense => self.perimeter_defense,
            SkillKind::InteriorDefense => self.interior_defense,
            SkillKind::Rebounding => self.rebounding,
            SkillKind::Stamina => self.stamina,
        }
    }

    pub fn increase(&mut self, kind: SkillKind, amount: u8) {
        let slot = match kind {
            SkillKind::InsideScoring => &mut self.inside_scoring,
            SkillKind::OutsideScoring => &mut self.outside_scoring,
            SkillKind::Playmaking => &mut self.playmaking,
            SkillKind::PerimeterDefense => &mut self.perimeter_defense,
            SkillKind::InteriorDefense => &mut self.interior_defense,
            SkillKind::Rebounding => &mut self.rebounding,
            SkillKind::Stamina => &mut self.stamina,
        };

        *slot = slot.saturating_add(amount).min(SKILL_MAX_VALUE);
    }

    /// Shift scoring and playmaking by signed deltas, clamped to [0, 99].
    /// Used for temporary form swings, the stored skills stay untouched.
    pub fn with_scoring_shift(&self, scoring_delta: i8, playmaking_delta: i8) -> Self {
        let shift = |value: u8, delta: i8| -> u8 {
            (value as i16 + delta as i16).clamp(0, SKILL_MAX_VALUE as i16) as u8
        };

        BasketballSkills {
            inside_scoring: shift(self.inside_scoring, scoring_delta),
            outside_scoring: shift(self.outside_scoring, scoring_delta),
            playmaking: shift(self.playmaking, playmaking_delta),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_skills_overall_matches_level() {
        let skills = BasketballSkills::with_level(70);

        assert_eq!(skills.overall(), 70);
    }

    #[test]
    fn test_overall_weighs_scoring_over_stamina() {
        let scorer = BasketballSkills::new(90, 90, 70, 60, 60, 60, 40);
        let runner = BasketballSkills::new(40, 60, 60, 60, 70, 90, 90);

        assert!(scorer.overall() > runner.overall());
    }

    #[test]
    fn test_new_clamps_to_max() {
        let skills = BasketballSkills::new(120, 99, 99, 99, 99, 99, 99);

        assert_eq!(skills.inside_scoring, 99);
    }

    #[test]
    fn test_increase_saturates_at_max() {
        let mut skills = BasketballSkills::with_level(98);

        skills.increase(SkillKind::Rebounding, 5);

        assert_eq!(skills.rebounding, 99);
    }

    #[test]
    fn test_scoring_shift_applies_and_clamps() {
        let skills = BasketballSkills::new(97, 50, 50, 50, 50, 50, 50);

        let shifted = skills.with_scoring_shift(5, 3);

        assert_eq!(shifted.inside_scoring, 99);
        assert_eq!(shifted.outside_scoring, 55);
        assert_eq!(shifted.playmaking, 53);
        assert_eq!(shifted.rebounding, 50);

        let dropped = skills.with_scoring_shift(-5, -3);

        assert_eq!(dropped.inside_scoring, 92);
        assert_eq!(dropped.playmaking, 47);
    }

    #[test]
    fn test_free_throw_blend() {
        let skills = BasketballSkills::new(50, 80, 60, 50, 50, 50, 50);

        assert_eq!(skills.free_throw(), 80.0 * 0.6 + 60.0 * 0.4);
    }

    #[test]
    fn test_offense_and_defense_sums() {
        let skills = BasketballSkills::new(70, 65, 60, 55, 50, 45, 80);

        assert_eq!(skills.offense_sum(), 195);
        assert_eq!(skills.defense_sum(), 150);
    }
}
