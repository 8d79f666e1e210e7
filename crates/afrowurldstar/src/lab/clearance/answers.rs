use serde::ser::{Serialize, SerializeMap, Serializer};

use super::domain::{ClearanceError, FactorId, OptionChoice};

/// Recorded choice per factor. Every factor has exactly one slot, so a state
/// can never hold unknown keys or miss a catalog factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnswerState {
    slots: [Option<OptionChoice>; FactorId::COUNT],
}

impl AnswerState {
    /// A state with every factor unanswered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `choice` for its factor, replacing any earlier selection.
    pub fn record(&mut self, choice: OptionChoice) {
        self.slots[choice.factor().index()] = Some(choice);
    }

    /// Validates a raw factor key and score, then records it.
    pub fn record_answer(
        &mut self,
        factor_key: &str,
        score: u8,
    ) -> Result<OptionChoice, ClearanceError> {
        let choice = OptionChoice::resolve(factor_key, score)?;
        self.record(choice);
        Ok(choice)
    }

    pub fn choice(&self, factor: FactorId) -> Option<OptionChoice> {
        self.slots[factor.index()]
    }

    pub fn score(&self, factor: FactorId) -> Option<u8> {
        self.choice(factor).map(|choice| choice.score())
    }

    pub fn is_answered(&self, factor: FactorId) -> bool {
        self.slots[factor.index()].is_some()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Factor and recorded score in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (FactorId, Option<u8>)> + '_ {
        FactorId::ALL
            .into_iter()
            .map(move |factor| (factor, self.score(factor)))
    }
}

impl Serialize for AnswerState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.slots.len()))?;
        for (factor, score) in self.iter() {
            map.serialize_entry(factor.key(), &score)?;
        }
        map.end()
    }
}
