use afrowurldstar::lab::clearance::{ClearanceError, FactorId, OptionChoice};

/// `factor=value` pair from the command line. `value` is an option position
/// unless the caller asked for raw weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerArg {
    pub(crate) factor: FactorId,
    pub(crate) value: u8,
}

impl AnswerArg {
    pub(crate) fn to_choice(&self, raw: bool) -> Result<OptionChoice, ClearanceError> {
        if raw {
            OptionChoice::from_score(self.factor, self.value)
        } else {
            OptionChoice::at_position(self.factor, usize::from(self.value))
        }
    }
}

pub(crate) fn parse_answer(raw: &str) -> Result<AnswerArg, String> {
    let (factor, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <factor>=<value>, got '{raw}'"))?;
    let factor = factor.parse::<FactorId>().map_err(|err| err.to_string())?;
    let value = value
        .trim()
        .parse::<u8>()
        .map_err(|err| format!("failed to parse '{value}' as a number ({err})"))?;
    Ok(AnswerArg { factor, value })
}

/// Accepts a factor key or its 1-based catalog number.
pub(crate) fn parse_factor(raw: &str) -> Result<FactorId, ClearanceError> {
    if let Ok(number) = raw.trim().parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| FactorId::ALL.get(index).copied())
            .ok_or_else(|| ClearanceError::InvalidFactor(raw.to_string()));
    }
    raw.parse::<FactorId>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_factor_value_pairs() {
        assert_eq!(
            parse_answer("usage=2"),
            Ok(AnswerArg {
                factor: FactorId::Usage,
                value: 2
            })
        );
        assert!(parse_answer("usage").is_err());
        assert!(parse_answer("tempo=1").is_err());
        assert!(parse_answer("usage=lots").is_err());
    }

    #[test]
    fn positions_and_raw_weights_resolve_differently() {
        let arg = parse_answer("length=15").expect("parses");
        assert!(arg.to_choice(false).is_err());
        assert_eq!(arg.to_choice(true).expect("catalog weight").score(), 15);

        let arg = parse_answer("length=2").expect("parses");
        assert_eq!(arg.to_choice(false).expect("catalog position").score(), 15);
    }

    #[test]
    fn factors_parse_by_number_or_key() {
        assert_eq!(parse_factor("3"), Ok(FactorId::Manipulation));
        assert_eq!(parse_factor("commercial"), Ok(FactorId::Commercial));
        assert!(parse_factor("0").is_err());
        assert!(parse_factor("6").is_err());
    }
}
