//! Significance brackets drawn above a box plot.
//!
//! Brackets are stacked in comparison order: the first one sits
//! [`BracketLayout::base_offset`] above the largest observation and each
//! following one is [`BracketLayout::step`] higher, so none of them overlap.

use pubfig_data::comparison::PairwiseComparison;

/// A bracket spanning two categories, labeled with a p-value.
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    /// Category position of the left leg.
    pub x1: f64,
    /// Category position of the right leg.
    pub x2: f64,
    /// Height where both legs start.
    pub y: f64,
    pub label: String,
}

impl Bracket {
    /// Height of the legs.
    pub const RISE: f64 = 0.3;
    /// Gap between the leg base and the bottom of the label.
    pub const LABEL_OFFSET: f64 = 0.4;

    /// The bracket outline: up the left leg, across, down the right leg.
    #[must_use]
    pub fn path(&self) -> [(f64, f64); 4] {
        let top = self.y + Self::RISE;
        [(self.x1, self.y), (self.x1, top), (self.x2, top), (self.x2, self.y)]
    }

    /// Bottom-center anchor of the label.
    #[must_use]
    pub fn label_anchor(&self) -> (f64, f64) {
        ((self.x1 + self.x2) / 2.0, self.y + Self::LABEL_OFFSET)
    }
}

/// Vertical placement rule for a stack of brackets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketLayout {
    /// Distance from the largest observation to the first bracket.
    pub base_offset: f64,
    /// Distance between consecutive brackets.
    pub step: f64,
}

impl Default for BracketLayout {
    fn default() -> Self {
        Self {
            base_offset: 0.5,
            step: 1.0,
        }
    }
}

impl BracketLayout {
    /// Places one bracket per comparison, in order, above `max_value`.
    ///
    /// `position` maps each compared group to its category position; a
    /// comparison whose group has no position is reported through the
    /// returned `Err` with that comparison's index.
    pub fn place<F>(
        &self,
        max_value: f64,
        comparisons: &[PairwiseComparison],
        mut position: F,
    ) -> Result<Vec<Bracket>, usize>
    where
        F: FnMut(&PairwiseComparison) -> Option<(f64, f64)>,
    {
        let mut y = max_value + self.base_offset;
        let mut brackets = Vec::with_capacity(comparisons.len());
        for (index, comparison) in comparisons.iter().enumerate() {
            let (x1, x2) = position(comparison).ok_or(index)?;
            brackets.push(Bracket {
                x1,
                x2,
                y,
                label: format_p_value(comparison.p_value()),
            });
            y += self.step;
        }
        Ok(brackets)
    }
}

/// Formats a p-value the way the annotations show it, e.g. `p=0.042`.
#[must_use]
pub fn format_p_value(p_value: f64) -> String {
    format!("p={p_value:.3}")
}
