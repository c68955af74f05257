//! Wearing coat (Cl. 109.5).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::reference::{ClauseRef, Standard};
use crate::standards::ClauseResult;

pub const WEARING_COAT: ClauseRef = ClauseRef::new(Standard::Irc5_2015, "109.5");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WearingCoat {
    Bituminous,
    CementConcrete,
    NotProvided,
}

impl WearingCoat {
    pub const ALL: [WearingCoat; 3] = [
        WearingCoat::Bituminous,
        WearingCoat::CementConcrete,
        WearingCoat::NotProvided,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WearingCoat::Bituminous => "Bituminous",
            WearingCoat::CementConcrete => "Cement Concrete",
            WearingCoat::NotProvided => "Not Provided",
        }
    }
}

impl fmt::Display for WearingCoat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A deck must carry a bituminous or cement concrete wearing coat
pub fn wearing_coat(coat: WearingCoat) -> ClauseResult {
    debug!(clause = %WEARING_COAT, ?coat, "evaluating");
    match coat {
        WearingCoat::Bituminous | WearingCoat::CementConcrete => ClauseResult::categorical(
            WEARING_COAT,
            true,
            format!("{} wearing coat provided.", coat),
        ),
        WearingCoat::NotProvided => ClauseResult::categorical(
            WEARING_COAT,
            false,
            "A bituminous or cement concrete wearing coat shall be provided.",
        ),
    }
}
