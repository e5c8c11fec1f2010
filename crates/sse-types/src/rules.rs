//! Ordered, first-match-wins classification rules.
//!
//! Keyword classification (mode, domain) is expressed as data rather than
//! control flow: a [`RuleTable`] holds `(predicate, result)` pairs that are
//! tried in insertion order, falling back to a default when nothing matches.

/// A single classification rule over a token slice.
#[derive(Clone, Debug)]
pub struct Rule<T> {
    /// Short name used in logs and tests.
    pub name: &'static str,
    /// Fires when any token is one of these keywords.
    pub keywords: &'static [&'static str],
    /// Value produced when the rule fires.
    pub result: T,
}

impl<T> Rule<T> {
    /// Whether any token belongs to this rule's keyword set.
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        tokens
            .iter()
            .any(|t| self.keywords.contains(&t.as_ref()))
    }
}

/// Ordered rule list with a fallback value.
#[derive(Clone, Debug)]
pub struct RuleTable<T> {
    rules: Vec<Rule<T>>,
    fallback: T,
}

impl<T: Copy> RuleTable<T> {
    /// Create an empty table that yields `fallback` until rules are added.
    pub fn new(fallback: T) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule; earlier rules take precedence.
    pub fn rule(mut self, name: &'static str, keywords: &'static [&'static str], result: T) -> Self {
        self.rules.push(Rule {
            name,
            keywords,
            result,
        });
        self
    }

    /// Evaluate the rules in order and return the first match's result.
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> T {
        self.matching_rule(tokens)
            .map(|r| r.result)
            .unwrap_or(self.fallback)
    }

    /// The first rule that fires, if any.
    pub fn matching_rule<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&Rule<T>> {
        self.rules.iter().find(|r| r.matches(tokens))
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Rule<T>] {
        &self.rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RuleTable<u8> {
        RuleTable::new(0)
            .rule("first", &["alpha", "beta"], 1)
            .rule("second", &["beta", "gamma"], 2)
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(table().classify(&["beta"]), 1);
        assert_eq!(table().classify(&["gamma", "alpha"]), 1);
        assert_eq!(table().classify(&["gamma"]), 2);
    }

    #[test]
    fn fallback_when_nothing_matches() {
        assert_eq!(table().classify(&["delta"]), 0);
        assert_eq!(table().classify::<&str>(&[]), 0);
    }

    #[test]
    fn matching_rule_names() {
        let t = table();
        assert_eq!(t.matching_rule(&["gamma"]).map(|r| r.name), Some("second"));
        assert!(t.matching_rule(&["zeta"]).is_none());
        assert_eq!(t.rules().len(), 2);
    }
}
