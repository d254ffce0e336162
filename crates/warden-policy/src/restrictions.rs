//! Per-command channel restriction rules.

use warden_types::{CommandRestriction, RestrictionMode};

/// Evaluates the ordered command-restriction table.
///
/// The table is fail-open by construction: a command with no rule is
/// allowed everywhere, and a blacklist allows every unlisted channel.
/// A carelessly curated table therefore widens access rather than
/// narrowing it; operators who want default-deny must whitelist.
#[derive(Debug, Clone, Default)]
pub struct RestrictionEvaluator {
    restrictions: Vec<CommandRestriction>,
}

impl RestrictionEvaluator {
    /// Wrap a restriction table, preserving document order.
    pub fn new(restrictions: Vec<CommandRestriction>) -> Self {
        Self { restrictions }
    }

    /// The rules, in evaluation order.
    pub fn rules(&self) -> &[CommandRestriction] {
        &self.restrictions
    }

    /// Decide whether `command` may run in `channel_id`.
    ///
    /// The first rule whose command name matches (exact, case-sensitive)
    /// decides; later rules for the same command are never consulted.
    /// Within the winning rule, the first matching channel entry returns
    /// the mode's polarity; an unlisted channel falls back to
    /// default-deny under a whitelist and default-allow under a
    /// blacklist.
    pub fn is_allowed(&self, command: &str, channel_id: &str) -> bool {
        for restriction in &self.restrictions {
            if restriction.command != command {
                continue;
            }

            for channel in &restriction.channels {
                if channel == channel_id {
                    return restriction.mode == RestrictionMode::Whitelist;
                }
            }

            return restriction.mode == RestrictionMode::Blacklist;
        }

        true
    }
}
