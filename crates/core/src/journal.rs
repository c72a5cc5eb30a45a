use crate::config::RulesConfig;
use crate::types::Intent;

use serde::{Deserialize, Serialize};

/// Everything needed to reproduce a game: the rules it ran under and every intent in order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentJournal {
    pub format_version: u16,
    pub build_id: String,
    pub rules: RulesConfig,
    pub intents: Vec<IntentRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRecord {
    pub seq: u64,
    pub intent: Intent,
}

impl IntentJournal {
    pub fn new(rules: RulesConfig) -> Self {
        Self { format_version: 1, build_id: "dev".to_string(), rules, intents: Vec::new() }
    }

    pub fn append(&mut self, intent: Intent) {
        let seq = self.intents.len() as u64;
        self.intents.push(IntentRecord { seq, intent });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pos, SkillId};

    #[test]
    fn append_numbers_records_in_order() {
        let mut journal = IntentJournal::new(RulesConfig::default());
        journal.append(Intent::Move { dx: -1, dy: 0 });
        journal.append(Intent::SelectSkill { skill: SkillId::Freeze });
        journal.append(Intent::ClickCell { pos: Pos::new(1, 7) });
        let seqs: Vec<u64> = journal.intents.iter().map(|record| record.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
    }

    #[test]
    fn journal_survives_json() {
        let rules = RulesConfig { max_turns: 9, ..RulesConfig::default() };
        let mut journal = IntentJournal::new(rules);
        journal.append(Intent::Freeze { center: Pos::new(3, 5) });
        journal.append(Intent::EndTurn);
        let text = serde_json::to_string(&journal).unwrap();
        let parsed: IntentJournal = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, journal);
    }
}
