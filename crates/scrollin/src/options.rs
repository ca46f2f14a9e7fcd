//! Call-surface normalization
//!
//! The public operation accepts `true`/`false` shorthands, a partial
//! options record, or nothing at all. Everything funnels through
//! [`ScrollArg`] into one canonical [`ResolvedOptions`] merged over the
//! fixed defaults. Resolution never fails: unrecognized behavior tokens
//! degrade to a 1 ms (effectively instant) animation and unrecognized
//! block tokens degrade to start alignment.

/// How to animate the scroll.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Quick animation (200 ms)
    #[default]
    Auto,
    /// Slow animation (400 ms)
    Smooth,
    /// Explicit duration in milliseconds (floored to 1)
    Ms(u32),
    /// A textual token: `"auto"`, `"smooth"`, a numeric string, or
    /// anything else (which resolves to 1 ms)
    Token(String),
}

impl ScrollBehavior {
    /// Animation duration in milliseconds.
    ///
    /// Zero is never returned; a zero-length animation is indistinguishable
    /// from an instant set but still has to travel the animation path, so
    /// it gets the 1 ms floor.
    pub fn duration_ms(&self) -> u32 {
        match self {
            ScrollBehavior::Auto => 200,
            ScrollBehavior::Smooth => 400,
            ScrollBehavior::Ms(ms) => (*ms).max(1),
            ScrollBehavior::Token(token) => match token.as_str() {
                "auto" => 200,
                "smooth" => 400,
                other => other
                    .trim()
                    .parse::<u32>()
                    .map(|ms| ms.max(1))
                    .unwrap_or(1),
            },
        }
    }
}

impl From<u32> for ScrollBehavior {
    fn from(ms: u32) -> Self {
        ScrollBehavior::Ms(ms)
    }
}

impl From<&str> for ScrollBehavior {
    fn from(token: &str) -> Self {
        ScrollBehavior::Token(token.to_string())
    }
}

impl From<String> for ScrollBehavior {
    fn from(token: String) -> Self {
        ScrollBehavior::Token(token)
    }
}

/// Where the target lands within the container's visible band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockAlign {
    /// Align the target's leading edge with the band's leading edge
    #[default]
    Start,
    /// Align the target's trailing edge with the band's trailing edge
    End,
    /// Center the target in the band
    Middle,
}

impl BlockAlign {
    /// Parse an alignment token. Anything unrecognized means `Start`;
    /// invalid input is never an error here.
    pub fn from_token(token: &str) -> Self {
        match token {
            "end" => BlockAlign::End,
            "middle" => BlockAlign::Middle,
            _ => BlockAlign::Start,
        }
    }
}

impl From<&str> for BlockAlign {
    fn from(token: &str) -> Self {
        BlockAlign::from_token(token)
    }
}

/// Partial scroll options; unset fields fall back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct ScrollOptions {
    pub behavior: Option<ScrollBehavior>,
    pub block: Option<BlockAlign>,
    pub margin: Option<f32>,
    pub lazy: Option<bool>,
}

impl ScrollOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Animation behavior (`ScrollBehavior`, a duration in ms, or a token).
    pub fn behavior(mut self, behavior: impl Into<ScrollBehavior>) -> Self {
        self.behavior = Some(behavior.into());
        self
    }

    /// Block alignment (`BlockAlign` or a token).
    pub fn block(mut self, block: impl Into<BlockAlign>) -> Self {
        self.block = Some(block.into());
        self
    }

    /// Pixels to adjust the computed position by.
    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Skip scrolling when the target is already fully visible.
    pub fn lazy(mut self, lazy: bool) -> Self {
        self.lazy = Some(lazy);
        self
    }
}

/// The public argument: a shorthand boolean, a partial record, or nothing.
#[derive(Debug, Clone, Default)]
pub enum ScrollArg {
    /// `true` → scroll to start, `false` → scroll to end
    Shorthand(bool),
    /// Partial options merged over the defaults
    Partial(ScrollOptions),
    /// No options given
    #[default]
    None,
}

impl From<bool> for ScrollArg {
    fn from(shorthand: bool) -> Self {
        ScrollArg::Shorthand(shorthand)
    }
}

impl From<ScrollOptions> for ScrollArg {
    fn from(options: ScrollOptions) -> Self {
        ScrollArg::Partial(options)
    }
}

impl From<()> for ScrollArg {
    fn from(_: ()) -> Self {
        ScrollArg::None
    }
}

/// Canonical options consumed by planning and execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedOptions {
    pub duration_ms: u32,
    pub block: BlockAlign,
    pub margin: f32,
    pub lazy: bool,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            duration_ms: ScrollBehavior::Auto.duration_ms(),
            block: BlockAlign::Start,
            margin: 0.0,
            lazy: false,
        }
    }
}

impl ResolvedOptions {
    /// Normalize any accepted argument into canonical options.
    pub fn resolve(arg: impl Into<ScrollArg>) -> Self {
        let partial = match arg.into() {
            ScrollArg::Shorthand(true) => ScrollOptions::new().block(BlockAlign::Start),
            ScrollArg::Shorthand(false) => ScrollOptions::new().block(BlockAlign::End),
            ScrollArg::Partial(options) => options,
            ScrollArg::None => ScrollOptions::new(),
        };

        let defaults = Self::default();
        Self {
            duration_ms: partial
                .behavior
                .map(|behavior| behavior.duration_ms())
                .unwrap_or(defaults.duration_ms),
            block: partial.block.unwrap_or(defaults.block),
            margin: partial.margin.unwrap_or(defaults.margin),
            lazy: partial.lazy.unwrap_or(defaults.lazy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let resolved = ResolvedOptions::resolve(());
        assert_eq!(resolved.duration_ms, 200);
        assert_eq!(resolved.block, BlockAlign::Start);
        assert_eq!(resolved.margin, 0.0);
        assert!(!resolved.lazy);
    }

    #[test]
    fn test_boolean_shorthands() {
        assert_eq!(
            ResolvedOptions::resolve(true),
            ResolvedOptions::resolve(ScrollOptions::new().block(BlockAlign::Start))
        );
        assert_eq!(
            ResolvedOptions::resolve(false),
            ResolvedOptions::resolve(ScrollOptions::new().block(BlockAlign::End))
        );
        assert_eq!(ResolvedOptions::resolve(false).block, BlockAlign::End);
    }

    #[test]
    fn test_behavior_mapping() {
        assert_eq!(ScrollBehavior::Auto.duration_ms(), 200);
        assert_eq!(ScrollBehavior::Smooth.duration_ms(), 400);
        assert_eq!(ScrollBehavior::Ms(350).duration_ms(), 350);
        assert_eq!(ScrollBehavior::Ms(0).duration_ms(), 1);
        assert_eq!(ScrollBehavior::from("auto").duration_ms(), 200);
        assert_eq!(ScrollBehavior::from("smooth").duration_ms(), 400);
        assert_eq!(ScrollBehavior::from("350").duration_ms(), 350);
        assert_eq!(ScrollBehavior::from("0").duration_ms(), 1);
        assert_eq!(ScrollBehavior::from("instant").duration_ms(), 1);
        assert_eq!(ScrollBehavior::from("not-a-number").duration_ms(), 1);
    }

    #[test]
    fn test_block_tokens_degrade_to_start() {
        assert_eq!(BlockAlign::from_token("end"), BlockAlign::End);
        assert_eq!(BlockAlign::from_token("middle"), BlockAlign::Middle);
        assert_eq!(BlockAlign::from_token("start"), BlockAlign::Start);
        assert_eq!(BlockAlign::from_token("center"), BlockAlign::Start);
        assert_eq!(BlockAlign::from_token(""), BlockAlign::Start);
    }

    #[test]
    fn test_partial_merge_keeps_unset_defaults() {
        let resolved = ResolvedOptions::resolve(ScrollOptions::new().margin(16.0).lazy(true));
        assert_eq!(resolved.margin, 16.0);
        assert!(resolved.lazy);
        assert_eq!(resolved.duration_ms, 200);
        assert_eq!(resolved.block, BlockAlign::Start);
    }
}
