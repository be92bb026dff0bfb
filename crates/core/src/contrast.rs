//! WCAG contrast validation over foreground/background token pairs.
//!
//! Evaluation is batched: the caller hands over every pair it cares about
//! and receives the failing labels against the AA threshold. Because edits
//! arrive at color-picker drag frequency, recomputation goes through
//! [`ContrastScheduler`], which coalesces bursts behind a quiescence window
//! instead of evaluating per keystroke.

use std::time::{Duration, Instant};

use themeloom_tokens::{TokenSet, registry};

use crate::cancel::{CancellationSource, CancellationToken};
use crate::color::{self, Color};

/// WCAG AA threshold for normal text.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Coalescing window for burst edits.
pub const QUIESCENCE: Duration = Duration::from_millis(750);

/// One labeled check: resolved foreground and background color text.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastPair {
    pub label: String,
    pub foreground: String,
    pub background: String,
}

/// A pair that fell below the threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastFailure {
    pub label: String,
    pub ratio: f64,
}

/// Batch evaluation result. An empty failure list is success.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastReport {
    pub threshold: f64,
    pub checked: usize,
    pub failures: Vec<ContrastFailure>,
}

impl ContrastReport {
    pub fn is_passing(&self) -> bool {
        self.failures.is_empty()
    }
}

/// WCAG relative luminance of an sRGB color.
pub fn relative_luminance(color: Color) -> f64 {
    fn linearize(c: f64) -> f64 {
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` with `L1` the lighter.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Evaluate every pair against [`AA_NORMAL_TEXT`].
///
/// Pairs whose colors fail to parse are skipped: an unreadable value is a
/// color-engine soft failure, not a contrast violation.
pub fn evaluate(pairs: &[ContrastPair]) -> ContrastReport {
    let mut checked = 0;
    let mut failures = Vec::new();

    for pair in pairs {
        let (Ok(fg), Ok(bg)) = (color::parse(&pair.foreground), color::parse(&pair.background))
        else {
            tracing::warn!(label = %pair.label, "skipping contrast pair with unparsable color");
            continue;
        };
        checked += 1;
        let ratio = contrast_ratio(fg, bg);
        if ratio < AA_NORMAL_TEXT {
            failures.push(ContrastFailure {
                label: pair.label.clone(),
                ratio,
            });
        }
    }

    ContrastReport {
        threshold: AA_NORMAL_TEXT,
        checked,
        failures,
    }
}

/// The foreground/background pairings checked by the editor, mirroring each
/// surface's text-on-fill relationship.
const DEFAULT_PAIRS: &[(&str, &str)] = &[
    ("foreground", "background"),
    ("card-foreground", "card"),
    ("popover-foreground", "popover"),
    ("primary-foreground", "primary"),
    ("secondary-foreground", "secondary"),
    ("muted-foreground", "muted"),
    ("accent-foreground", "accent"),
    ("destructive-foreground", "destructive"),
    ("sidebar-foreground", "sidebar"),
    ("sidebar-primary-foreground", "sidebar-primary"),
    ("sidebar-accent-foreground", "sidebar-accent"),
];

/// Build the default pair list from a resolved token set. Keys without a
/// value are omitted (the set should be complete after merge, but contrast
/// checking never hard-fails on a gap).
pub fn pairs_for_set(set: &TokenSet) -> Vec<ContrastPair> {
    DEFAULT_PAIRS
        .iter()
        .filter_map(|(fg_key, bg_key)| {
            debug_assert!(registry::is_color_key(fg_key) && registry::is_color_key(bg_key));
            let fg = set.get(fg_key)?;
            let bg = set.get(bg_key)?;
            Some(ContrastPair {
                label: format!("{fg_key} on {bg_key}"),
                foreground: fg.to_string(),
                background: bg.to_string(),
            })
        })
        .collect()
}

struct PendingCheck {
    pairs: Vec<ContrastPair>,
    due: Instant,
    source: CancellationSource,
}

/// Debounced evaluation driver.
///
/// `request` supersedes any pending evaluation (its cancellation handle is
/// cancelled, the work is dropped, never queued); `poll` runs the latest
/// request once the quiescence window has elapsed.
pub struct ContrastScheduler {
    quiescence: Duration,
    pending: Option<PendingCheck>,
}

impl Default for ContrastScheduler {
    fn default() -> Self {
        Self::new(QUIESCENCE)
    }
}

impl ContrastScheduler {
    pub fn new(quiescence: Duration) -> Self {
        Self {
            quiescence,
            pending: None,
        }
    }

    /// Schedule an evaluation of `pairs`, superseding any pending one.
    pub fn request(&mut self, pairs: Vec<ContrastPair>, now: Instant) {
        if let Some(prev) = self.pending.take() {
            prev.source.cancel();
        }
        self.pending = Some(PendingCheck {
            pairs,
            due: now + self.quiescence,
            source: CancellationSource::new(),
        });
    }

    /// Token observing the currently pending evaluation, if any.
    pub fn pending_token(&self) -> Option<CancellationToken> {
        self.pending.as_ref().map(|p| p.source.token())
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the pending evaluation if its quiescence window has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<ContrastReport> {
        let due = self.pending.as_ref().map(|p| p.due)?;
        if now < due {
            return None;
        }
        let check = self.pending.take()?;
        if check.source.is_cancelled() {
            return None;
        }
        Some(evaluate(&check.pairs))
    }
}
