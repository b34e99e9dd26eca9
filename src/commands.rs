//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the host should perform after an update.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the strip
    Redraw,
    /// Redraw, and deliver another tick on the next frame (animation in flight)
    RequestFrame,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch, flattening trivial cases
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        let mut cmds: Vec<Cmd> = cmds.into_iter().filter(|c| *c != Cmd::None).collect();
        match cmds.len() {
            0 => Cmd::None,
            1 => cmds.remove(0),
            _ => Cmd::Batch(cmds),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw | Cmd::RequestFrame => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Check if the host should keep ticking
    pub fn needs_frame(&self) -> bool {
        match self {
            Cmd::RequestFrame => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_frame()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_flattens() {
        assert_eq!(Cmd::batch(vec![]), Cmd::None);
        assert_eq!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]), Cmd::Redraw);
        let batch = Cmd::batch(vec![Cmd::Redraw, Cmd::RequestFrame]);
        assert!(batch.needs_redraw());
        assert!(batch.needs_frame());
    }

    #[test]
    fn test_redraw_does_not_need_frame() {
        assert!(Cmd::Redraw.needs_redraw());
        assert!(!Cmd::Redraw.needs_frame());
        assert!(!Cmd::None.needs_redraw());
    }
}
