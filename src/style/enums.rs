//! Categorical style properties.
//!
//! Each enumeration is exposed to callers as an integer in `[0, COUNT)`. Properties that
//! share an enumeration (for example `align-self` and `justify-items`) share its bounds;
//! properties with similar variant names (`AlignContent::Center` vs `AlignItems::Center`)
//! do not.

bounded_enum! {
    /// Layout algorithm used for the children of a node.
    pub enum Display {
        /// Block layout.
        Block,
        /// Flexbox layout.
        #[default]
        Flex,
        /// CSS Grid layout.
        Grid,
        /// The node and its children are not laid out.
        None,
    }
}

bounded_enum! {
    /// Positioning strategy of a node.
    pub enum Position {
        /// Offsets are applied after the node has been placed in flow.
        #[default]
        Relative,
        /// The node is taken out of flow and placed against its containing block.
        Absolute,
    }
}

bounded_enum! {
    /// How overflowing content affects the automatic minimum size of a node.
    pub enum Overflow {
        /// Minimum size is content based.
        #[default]
        Visible,
        /// Minimum size is zero.
        Hidden,
        /// Minimum size is zero and space is reserved for a scrollbar.
        Scroll,
    }
}

bounded_enum! {
    /// Distribution of space between and around lines or tracks.
    ///
    /// Used by `align-content` and `justify-content`.
    pub enum AlignContent {
        /// Algorithm-specific default; same as leaving the property unset.
        #[default]
        Normal,
        /// Pack toward the start of the axis.
        Start,
        /// Pack toward the end of the axis.
        End,
        /// Pack toward the flex-relative start of the axis.
        FlexStart,
        /// Pack toward the flex-relative end of the axis.
        FlexEnd,
        /// Center in the axis.
        Center,
        /// Stretch to fill the container.
        Stretch,
        /// First and last flush with the edges, remaining space shared evenly.
        SpaceBetween,
        /// Equal space between items and at both edges.
        SpaceEvenly,
        /// Half-size gaps at the edges.
        SpaceAround,
    }
}

bounded_enum! {
    /// Alignment of items within their line or grid area.
    ///
    /// Used by `align-items`, `align-self`, `justify-items` and `justify-self`.
    pub enum AlignItems {
        /// Algorithm-specific default; same as leaving the property unset.
        #[default]
        Normal,
        /// Align to the start of the axis.
        Start,
        /// Align to the end of the axis.
        End,
        /// Align to the flex-relative start of the axis.
        FlexStart,
        /// Align to the flex-relative end of the axis.
        FlexEnd,
        /// Center in the axis.
        Center,
        /// Align baselines.
        Baseline,
        /// Stretch to fill the line or area.
        Stretch,
    }
}

bounded_enum! {
    /// Direction of the flexbox main axis.
    pub enum FlexDirection {
        /// Left to right.
        #[default]
        Row,
        /// Top to bottom.
        Column,
        /// Right to left.
        RowReverse,
        /// Bottom to top.
        ColumnReverse,
    }
}

bounded_enum! {
    /// Whether flex items may wrap onto multiple lines.
    pub enum FlexWrap {
        /// Single line.
        #[default]
        NoWrap,
        /// Wrap in the direction of the cross axis.
        Wrap,
        /// Wrap against the direction of the cross axis.
        WrapReverse,
    }
}

bounded_enum! {
    /// Auto-placement direction and packing for grid items.
    pub enum GridAutoFlow {
        /// Fill rows first.
        #[default]
        Row,
        /// Fill columns first.
        Column,
        /// Fill rows first, back-filling holes.
        RowDense,
        /// Fill columns first, back-filling holes.
        ColumnDense,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/enums.rs"]
mod tests;
