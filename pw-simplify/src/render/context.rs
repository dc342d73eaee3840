/// Flags that change how a single node is rendered.
///
/// A context applies to one node only. Children are rendered with [`RenderCtx::default`] unless
/// the parent derives a different context for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCtx {
    /// Whether comparisons and logical chains are wrapped in piecewise-bracket notation, so that
    /// they evaluate to `1` or `0`. When off, the bare test is rendered, and a top-level logical
    /// chain gets an explicit `=1`.
    pub encase_logical: bool,

    /// Whether the node is an inner link of a flattened `|` or `&` chain, whose operands are
    /// spliced into the outermost link's brackets.
    pub secondary_binary: bool,
}

impl Default for RenderCtx {
    fn default() -> Self {
        Self {
            encase_logical: true,
            secondary_binary: false,
        }
    }
}

impl RenderCtx {
    /// Context for a test whose truth is made explicit by the parent, such as the condition of
    /// `if_func` or an operand of a logical chain.
    pub fn unencased() -> Self {
        Self {
            encase_logical: false,
            secondary_binary: false,
        }
    }

    /// Context for an inner link of a logical chain.
    pub fn chained() -> Self {
        Self {
            encase_logical: false,
            secondary_binary: true,
        }
    }
}
