//! # Cross-Section Layout
//!
//! IRC 5:2015 Cl. 105.2.1 - protection to users. Where a footpath or cycle
//! track is directly adjacent to the carriageway, a crash barrier is provided
//! between them.
//!
//! The processor makes a single left-to-right pass over adjacent pairs. When a
//! pair needs a barrier, one is inserted between the two elements and the scan
//! resumes *after* the inserted barrier, so barriers are never re-examined and
//! the pass always terminates.
//!
//! ## Example
//!
//! ```rust
//! use bridge_core::layout::{Component, CrossSectionLayout};
//! use Component::*;
//!
//! let template = CrossSectionLayout::new(vec![Railing, Footpath, Carriageway, Footpath, Railing]);
//! let protected = template.with_protection();
//! assert_eq!(
//!     protected.components(),
//!     &[Railing, Footpath, CrashBarrier, Carriageway, CrashBarrier, Footpath, Railing]
//! );
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::{ClauseRef, Standard};

/// Clause implemented by this module
pub const PROTECTION_TO_USERS: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "105.2.1");

/// Element of a bridge cross-section, listed edge to edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    Railing,
    Footpath,
    Carriageway,
    CycleTrack,
    CrashBarrier,
    Median,
    Kerb,
}

impl Component {
    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Component::Railing => "Railing",
            Component::Footpath => "Footpath",
            Component::Carriageway => "Carriageway",
            Component::CycleTrack => "Cycle Track",
            Component::CrashBarrier => "Crash Barrier",
            Component::Median => "Median",
            Component::Kerb => "Kerb",
        }
    }

    /// Elements that carry pedestrians or cyclists
    pub fn is_vulnerable_user_way(&self) -> bool {
        matches!(self, Component::Footpath | Component::CycleTrack)
    }
}

/// Whether an unordered pair needs a crash barrier between its members
fn needs_barrier(a: Component, b: Component) -> bool {
    matches!(
        (a, b),
        (Component::Carriageway, Component::Footpath)
            | (Component::Footpath, Component::Carriageway)
            | (Component::Carriageway, Component::CycleTrack)
            | (Component::CycleTrack, Component::Carriageway)
    )
}

/// Insert crash barriers into `layout` in place.
///
/// **Side effect:** the caller's vector is modified; its identity is
/// preserved. Returns the number of barriers inserted.
pub fn apply_in_place(layout: &mut Vec<Component>) -> usize {
    let mut inserted = 0;
    let mut i = 0;
    while i + 1 < layout.len() {
        if needs_barrier(layout[i], layout[i + 1]) {
            debug!(
                position = i + 1,
                left = layout[i].display_name(),
                right = layout[i + 1].display_name(),
                "crash barrier inserted"
            );
            layout.insert(i + 1, Component::CrashBarrier);
            inserted += 1;
            // Skip the barrier; the next pair is (barrier's right neighbour, ...)
            i += 2;
        } else {
            i += 1;
        }
    }
    inserted
}

/// Non-mutating variant of [`apply_in_place`]
pub fn with_crash_barriers(layout: &[Component]) -> Vec<Component> {
    let mut copy = layout.to_vec();
    apply_in_place(&mut copy);
    copy
}

/// Ordered cross-section description
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CrossSectionLayout {
    components: Vec<Component>,
}

impl CrossSectionLayout {
    pub fn new(components: Vec<Component>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }

    /// Insert barriers into this layout (mutates `self`), returning the count
    pub fn apply_protection(&mut self) -> usize {
        apply_in_place(&mut self.components)
    }

    /// Protected copy; `self` is left untouched so it can serve as a template
    pub fn with_protection(&self) -> Self {
        Self::new(with_crash_barriers(&self.components))
    }

    /// True when no carriageway touches a footpath or cycle track directly
    pub fn is_protected(&self) -> bool {
        self.components.windows(2).all(|w| !needs_barrier(w[0], w[1]))
    }

    pub fn count(&self, component: Component) -> usize {
        self.components.iter().filter(|c| **c == component).count()
    }
}

impl From<Vec<Component>> for CrossSectionLayout {
    fn from(components: Vec<Component>) -> Self {
        Self::new(components)
    }
}
