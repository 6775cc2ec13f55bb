//! Kinsoku shori: Japanese line-breaking prohibition rules.
//!
//! Two character classes govern where a line may break:
//!
//! - **no-start** characters (closing punctuation, small kana, the prolonged
//!   sound mark, closing brackets) must not begin a line;
//! - **no-end** characters (opening brackets) must not end a line.
//!
//! A [`KinsokuPolicy`] picks exactly one correction strategy. Each strategy is
//! a pure function of the line about to be committed, the input that follows
//! it, and the [`KinsokuRules`] in force.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Closing punctuation, closing brackets, small kana, prolonged sound and
/// iteration marks.
const DEFAULT_NO_START: &str = concat!(
    "、。，．,.：；:;？！?!‼⁇⁈⁉・･…‥",
    "）)］]｝}〕〉》」』】〙〗〟’”｠»›",
    "ぁぃぅぇぉっゃゅょゎゕゖ",
    "ァィゥェォッャュョヮヵヶ",
    "ㇰㇱㇲㇳㇴㇵㇶㇷㇸㇹㇺㇻㇼㇽㇾㇿ",
    "ｧｨｩｪｫｯｬｭｮ",
    "ーｰ゛゜ゝゞヽヾ々〻",
    "‐゠–〜～",
);

/// Opening brackets and quotation marks.
const DEFAULT_NO_END: &str = "（(［[｛{〔〈《「『【〘〖〝‘“｟«‹";

/// Which kinsoku correction runs at each line boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KinsokuPolicy {
    /// Pull one no-start character back onto the end of the full line
    /// (burasage). Lines may exceed the configured width by one.
    #[default]
    PullForward,
    /// Push trailing no-end characters out to the start of the next line
    /// (oidashi). Lines may fall short of the configured width.
    PushBack,
    /// Break strictly every `chars_per_line` characters.
    Disabled,
}

/// How a full line is corrected before it is committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Commit the line as is.
    Keep,
    /// Append this many upcoming characters to the line.
    Pull(usize),
    /// Move this many trailing characters to the next line.
    Push(usize),
}

/// The two forbidden character sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KinsokuRules {
    no_start: BTreeSet<char>,
    no_end: BTreeSet<char>,
}

impl KinsokuRules {
    /// Rules with empty sets; nothing is forbidden.
    pub fn empty() -> Self {
        Self {
            no_start: BTreeSet::new(),
            no_end: BTreeSet::new(),
        }
    }

    /// Replace the line-start-forbidden set.
    pub fn with_no_start(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.no_start = chars.into_iter().collect();
        self
    }

    /// Replace the line-end-forbidden set.
    pub fn with_no_end(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.no_end = chars.into_iter().collect();
        self
    }

    /// Add characters to the line-start-forbidden set.
    pub fn extend_no_start(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.no_start.extend(chars);
        self
    }

    /// Add characters to the line-end-forbidden set.
    pub fn extend_no_end(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.no_end.extend(chars);
        self
    }

    /// Whether `c` must not begin a line.
    pub fn is_no_start(&self, c: char) -> bool {
        self.no_start.contains(&c)
    }

    /// Whether `c` must not end a line.
    pub fn is_no_end(&self, c: char) -> bool {
        self.no_end.contains(&c)
    }

    /// Iterate the line-start-forbidden set in code point order.
    pub fn no_start(&self) -> impl Iterator<Item = char> + '_ {
        self.no_start.iter().copied()
    }

    /// Iterate the line-end-forbidden set in code point order.
    pub fn no_end(&self) -> impl Iterator<Item = char> + '_ {
        self.no_end.iter().copied()
    }
}

impl Default for KinsokuRules {
    fn default() -> Self {
        Self {
            no_start: DEFAULT_NO_START.chars().collect(),
            no_end: DEFAULT_NO_END.chars().collect(),
        }
    }
}

/// Decide how a full `line` is corrected given the `rest` of the segment.
///
/// `line` is never empty and `rest` holds at least one character; the caller
/// only asks when a boundary actually falls inside the segment.
pub fn adjust(policy: KinsokuPolicy, line: &[char], rest: &[char], rules: &KinsokuRules) -> Adjustment {
    match policy {
        KinsokuPolicy::PullForward => pull_forward(rest, rules),
        KinsokuPolicy::PushBack => push_back(line, rules),
        KinsokuPolicy::Disabled => Adjustment::Keep,
    }
}

/// Hang the no-start character that would open the next line.
///
/// At most one character hangs, so a line holds at most
/// `chars_per_line + 1` characters even inside long runs such as `ーーー`.
fn pull_forward(rest: &[char], rules: &KinsokuRules) -> Adjustment {
    match rest.first() {
        Some(&c) if rules.is_no_start(c) => Adjustment::Pull(1),
        _ => Adjustment::Keep,
    }
}

/// Move the trailing run of no-end characters to the next line, unless the
/// line consists of nothing else.
fn push_back(line: &[char], rules: &KinsokuRules) -> Adjustment {
    let run = line.iter().rev().take_while(|&&c| rules.is_no_end(c)).count();
    if run == 0 || run == line.len() {
        Adjustment::Keep
    } else {
        Adjustment::Push(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_default_sets() {
        let rules = KinsokuRules::default();
        for c in "、。」』）ーっャ！？々".chars() {
            assert!(rules.is_no_start(c), "{c} should not start a line");
        }
        for c in "「『（【〈".chars() {
            assert!(rules.is_no_end(c), "{c} should not end a line");
        }
        assert!(!rules.is_no_start('あ'));
        assert!(!rules.is_no_end('あ'));
        assert!(!rules.is_no_start('A'));
    }

    #[test]
    fn test_sets_are_disjoint() {
        let rules = KinsokuRules::default();
        assert!(rules.no_start().all(|c| !rules.is_no_end(c)));
    }

    #[test]
    fn test_pull_forward_single() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PullForward, &chars("今日は"), &chars("、良い"), &rules);
        assert_eq!(adj, Adjustment::Pull(1));
    }

    #[test]
    fn test_pull_forward_hangs_one_of_run() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PullForward, &chars("です"), &chars("。」と"), &rules);
        assert_eq!(adj, Adjustment::Pull(1));
    }

    #[test]
    fn test_pull_forward_keep() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PullForward, &chars("今日は"), &chars("良い"), &rules);
        assert_eq!(adj, Adjustment::Keep);
    }

    #[test]
    fn test_pull_forward_ignores_line_end() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PullForward, &chars("彼は「"), &chars("はい"), &rules);
        assert_eq!(adj, Adjustment::Keep);
    }

    #[test]
    fn test_push_back() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PushBack, &chars("彼は「"), &chars("はい"), &rules);
        assert_eq!(adj, Adjustment::Push(1));

        let adj = adjust(KinsokuPolicy::PushBack, &chars("彼は「『"), &chars("はい"), &rules);
        assert_eq!(adj, Adjustment::Push(2));
    }

    #[test]
    fn test_push_back_whole_line_kept() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PushBack, &chars("「「"), &chars("あ"), &rules);
        assert_eq!(adj, Adjustment::Keep);
    }

    #[test]
    fn test_push_back_ignores_line_start() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::PushBack, &chars("今日は"), &chars("、"), &rules);
        assert_eq!(adj, Adjustment::Keep);
    }

    #[test]
    fn test_disabled() {
        let rules = KinsokuRules::default();
        let adj = adjust(KinsokuPolicy::Disabled, &chars("彼は「"), &chars("、"), &rules);
        assert_eq!(adj, Adjustment::Keep);
    }

    #[test]
    fn test_custom_rules() {
        let rules = KinsokuRules::empty().with_no_start(['x']).extend_no_end(['(']);
        assert!(rules.is_no_start('x'));
        assert!(!rules.is_no_start('。'));
        assert!(rules.is_no_end('('));
    }
}
