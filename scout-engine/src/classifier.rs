//! Reply text classifier.
//!
//! Pure and deterministic: no I/O, no state. Matching runs on a trimmed,
//! NFC-folded, lowercased copy of the body, so spacing, Unicode form, and
//! letter case never change the verdict.

use scout_core::Verdict;
use unicode_normalization::UnicodeNormalization;

/// Canonical body emitted when accepting a scout.
pub const ACCEPT_TEMPLATE: &str = "スカウトを承諾しました";
/// Canonical body emitted when declining a scout.
pub const DECLINE_TEMPLATE: &str = "スカウトを辞退しました";

/// Phrases that explicitly accept a scout. Checked before decline phrases.
const ACCEPT_PHRASES: [&str; 2] = [ACCEPT_TEMPLATE, "scout accepted"];

/// Phrases that explicitly decline a scout.
const DECLINE_PHRASES: [&str; 2] = [DECLINE_TEMPLATE, "scout declined"];

/// Bare decision roots. Enough to show a reply talks about the decision, not
/// enough to resolve it.
const AMBIGUOUS_ROOTS: [&str; 5] = ["承諾", "辞退", "お断り", "accept", "decline"];

fn normalize(body: &str) -> String {
    body.trim().nfc().collect::<String>().to_lowercase()
}

/// Maps a reply body to a classification verdict.
///
/// A body containing one of the canonical accept phrases is `Accepted`, one
/// containing a canonical decline phrase is `Declined`. A body that only
/// carries a bare decision root is `Ambiguous` and must never resolve a
/// scout; anything else is `None`. The canonical phrases survive an appended
/// note because matching is containment, not equality.
pub fn classify(body: &str) -> Verdict {
    let normalized = normalize(body);

    if ACCEPT_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
    {
        return Verdict::Accepted;
    }
    if DECLINE_PHRASES
        .iter()
        .any(|phrase| normalized.contains(phrase))
    {
        return Verdict::Declined;
    }
    if AMBIGUOUS_ROOTS.iter().any(|root| normalized.contains(root)) {
        return Verdict::Ambiguous;
    }
    Verdict::None
}
