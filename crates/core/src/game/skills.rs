//! Skill arming, the rewind and freeze effects, and grid-click routing for armed skills.

use super::*;

impl Game {
    /// Arm `skill`, or disarm it if it is already armed. Arming one skill disarms the other.
    /// Returns the skill left armed.
    pub fn select_skill(&mut self, skill: SkillId) -> Result<Option<SkillId>, ActionError> {
        self.ensure_can_act()?;
        if self.state.armed == Some(skill) {
            self.state.armed = None;
            return Ok(None);
        }
        if let Err(error) = self.state.skills.get(skill).check(skill) {
            return Err(self.reject(error));
        }
        self.state.armed = Some(skill);
        Ok(Some(skill))
    }

    /// Send the player back to where this turn started.
    pub fn use_rewind_on_player(&mut self) -> Result<Pos, ActionError> {
        self.ensure_skill_ready(SkillId::Rewind)?;

        self.save_state();
        let from = self.state.player.pos;
        let to = self.state.anchors.player;
        self.state.player.pos = to;
        self.spend(SkillId::Rewind);
        // The latch is not re-toggled; doors are only re-derived.
        self.refresh_doors();
        self.state.log.push(LogEvent::PlayerRewound { from, to });
        Ok(to)
    }

    /// Send enemy `index` back to its position and facing from the start of this turn.
    pub fn use_rewind_on_enemy(&mut self, index: usize) -> Result<Pos, ActionError> {
        self.ensure_skill_ready(SkillId::Rewind)?;
        let Some(anchor) =
            self.state.anchors.enemies.as_ref().map(|anchors| anchors.get(index).cloned())
        else {
            self.state.armed = None;
            return Err(self.reject(ActionError::RewindNotAvailableYet));
        };
        let Some(anchor) = anchor.filter(|_| index < self.state.enemies.len()) else {
            return Err(self.reject(ActionError::NoSuchEnemy(index)));
        };

        self.save_state();
        let enemy = &mut self.state.enemies[index];
        let from = enemy.pos;
        enemy.pos = anchor.pos;
        enemy.facing = anchor.facing;
        self.spend(SkillId::Rewind);
        self.refresh_doors();
        self.state.log.push(LogEvent::EnemyRewound { enemy: index, from, to: anchor.pos });
        Ok(anchor.pos)
    }

    /// Stun every enemy in the 3x3 block around `center`. An empty block spends nothing.
    /// Returns the number of enemies frozen.
    pub fn use_freeze(&mut self, center: Pos) -> Result<usize, ActionError> {
        self.ensure_skill_ready(SkillId::Freeze)?;
        if !center.in_grid() {
            return Err(self.reject(ActionError::OutOfBounds(center)));
        }
        let in_area = |enemy: &Enemy| enemy.pos.chebyshev(center) <= 1;
        let count = self.state.enemies.iter().filter(|enemy| in_area(enemy)).count();
        if count == 0 {
            return Err(self.reject(ActionError::NoEnemiesInArea(center)));
        }

        self.save_state();
        let stun_turns = self.rules.stun_turns;
        for enemy in self.state.enemies.iter_mut().filter(|enemy| in_area(enemy)) {
            enemy.stun_turns = stun_turns;
        }
        self.spend(SkillId::Freeze);
        self.state.log.push(LogEvent::EnemiesFrozen { center, count });
        Ok(count)
    }

    /// Route a grid click to the armed skill.
    pub fn click_cell(&mut self, pos: Pos) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        if !pos.in_grid() {
            return Err(self.reject(ActionError::OutOfBounds(pos)));
        }
        match self.state.armed {
            None => Err(self.reject(ActionError::NoSkillArmed)),
            Some(SkillId::Rewind) if self.state.player.pos == pos => {
                self.use_rewind_on_player().map(drop)
            }
            Some(SkillId::Rewind) => match self.state.enemy_at(pos) {
                Some(index) => self.use_rewind_on_enemy(index).map(drop),
                None => Err(self.reject(ActionError::NoUnitAtCell(pos))),
            },
            Some(SkillId::Freeze) => self.use_freeze(pos).map(drop),
        }
    }

    fn ensure_skill_ready(&mut self, skill: SkillId) -> Result<(), ActionError> {
        self.ensure_can_act()?;
        if let Err(error) = self.state.skills.get(skill).check(skill) {
            return Err(self.reject(error));
        }
        Ok(())
    }

    fn spend(&mut self, skill: SkillId) {
        self.state.skills.get_mut(skill).consume();
        self.state.armed = None;
    }
}
