//! Movement gait and action verbs shared across the decision crates.
//!
//! The string forms (`as_str`) are exactly what the host consumes in the
//! per-agent decision record; serde uses the same names.

/// How the host should move the agent this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MovementKind {
    /// Normal travel speed.
    Walk,
    /// Fast travel speed.
    Run,
    /// Hold position (default — the safe substitute decision).
    #[default]
    Stop,
    /// No movement directive at all.
    None,
}

impl MovementKind {
    /// `true` for any gait that displaces the agent.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, MovementKind::Walk | MovementKind::Run)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MovementKind::Walk => "walk",
            MovementKind::Run  => "run",
            MovementKind::Stop => "stop",
            MovementKind::None => "none",
        }
    }
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the agent asks the host to do with its manipulator this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActionKind {
    /// No manipulator action.
    #[default]
    None,
    /// Grab the targeted item (valid only within pickup range).
    PickUp,
    /// Release the carried item (valid only within drop range).
    DropOff,
}

impl ActionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::None    => "none",
            ActionKind::PickUp  => "pick_up",
            ActionKind::DropOff => "drop_off",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
