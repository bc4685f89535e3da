//! Defines mode flag enumerations and sets

use lantern_macros::mode_flags;

mode_flags!(
    ChannelMode {
        Moderated   = 'm',
        TopicLock   = 't',
    }
);

mode_flags!(
    MembershipFlag {
        Op      = 'o' prefix '@',
        Voice   = 'v' prefix '+',
    }
);

impl MembershipFlagSet {
    /// The single prefix shown for a member in NAMES and WHO replies: the
    /// highest-ranked flag they hold, if any.
    pub fn highest_prefix(&self) -> Option<char> {
        self.iter().next().map(MembershipFlagFlag::to_prefix)
    }
}
