//! Textual rendering of sets.
//!
//! A set renders as `{ e1, e2, ... }`, each element through its own
//! [`Display`](fmt::Display) implementation, so nested sets render
//! recursively. The layout is controlled by [`RenderOptions`]:
//!
//! | Option               | Default | Effect                                   |
//! |----------------------|---------|------------------------------------------|
//! | `compact`            | `true`  | single line; otherwise one element per line, tab-indented |
//! | `trailing_separator` | `false` | emit the separator after the last element |
//! | `separator`          | `","`   | string placed between elements           |
//!
//! An empty set always renders as `{}`.
//!
//! # Format Specifiers
//!
//! Options can be parsed from a short specifier `<flags>[:<separator>]`:
//!
//! - `c` / `C`: compact on / off
//! - `t` / `T`: trailing separator on / off
//! - anything after the `:` replaces the separator
//!
//! When a flag appears more than once, the last occurrence wins.
//!
//! # Examples
//!
//! ```rust
//! use seqset::render::RenderOptions;
//! use seqset::UnorderedSet;
//!
//! let set = UnorderedSet::<i32>::from([1, 2, 3]);
//!
//! assert_eq!(set.to_string(), "{ 1, 2, 3 }");
//! assert_eq!(format!("{set:#}"), "{\n\t1,\n\t2,\n\t3\n}");
//!
//! let options: RenderOptions = "ct: |".parse().unwrap();
//! assert_eq!(set.render(&options), "{ 1 | 2 | 3 | }");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::SetError;
use crate::set::Set;

const DEFAULT_SEPARATOR: &str = ",";

/// Layout options for rendering a set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Render on a single line.
    pub compact: bool,
    /// Emit the separator after the last element too.
    pub trailing_separator: bool,
    /// Placed between consecutive elements.
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            compact: true,
            trailing_separator: false,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl RenderOptions {
    /// Returns the default options: compact, no trailing separator, `","`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the default options with one element per line.
    #[must_use]
    pub fn expanded() -> Self {
        Self::default().with_compact(false)
    }

    /// Sets the compact flag.
    #[must_use]
    pub const fn with_compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Sets the trailing separator flag.
    #[must_use]
    pub const fn with_trailing_separator(mut self, trailing_separator: bool) -> Self {
        self.trailing_separator = trailing_separator;
        self
    }

    /// Replaces the separator.
    #[must_use]
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Parses a `<flags>[:<separator>]` specifier.
    ///
    /// An empty specifier yields the default options, and an empty separator
    /// section keeps the default separator.
    ///
    /// # Errors
    ///
    /// Returns [`SetError::InvalidRenderSpec`] if the specifier has more than
    /// two `:`-separated sections or contains a flag other than `c`, `C`,
    /// `t` or `T`.
    ///
    /// ```rust
    /// use seqset::render::RenderOptions;
    ///
    /// let options = RenderOptions::parse("Ct:;").unwrap();
    /// assert!(!options.compact);
    /// assert!(options.trailing_separator);
    /// assert_eq!(options.separator, ";");
    ///
    /// assert!(RenderOptions::parse("x").is_err());
    /// assert!(RenderOptions::parse("c:;:").is_err());
    /// ```
    pub fn parse(spec: &str) -> Result<Self, SetError> {
        let invalid = |reason: String| {
            tracing::debug!(spec, %reason, "rejected render specifier");
            SetError::InvalidRenderSpec {
                spec: spec.to_string(),
                reason,
            }
        };

        let mut sections = spec.splitn(3, ':');
        let flags = sections.next().unwrap_or_default();
        let separator = sections.next();
        if sections.next().is_some() {
            return Err(invalid(
                "at most two ':'-separated sections are allowed".to_string(),
            ));
        }

        let mut options = Self::default();
        for flag in flags.chars() {
            match flag {
                'c' => options.compact = true,
                'C' => options.compact = false,
                't' => options.trailing_separator = true,
                'T' => options.trailing_separator = false,
                unknown => {
                    return Err(invalid(format!(
                        "unknown flag {unknown:?}, expected one of 'c', 'C', 't', 'T'"
                    )));
                }
            }
        }

        if let Some(separator) = separator.filter(|separator| !separator.is_empty()) {
            options.separator = separator.to_string();
        }

        Ok(options)
    }
}

impl FromStr for RenderOptions {
    type Err = SetError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

/// Writes `elements` as a set literal under `options`.
fn write_elements<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    elements: I,
    options: &RenderOptions,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut elements = elements.into_iter().peekable();
    if elements.peek().is_none() {
        return formatter.write_str("{}");
    }

    let (spacer, indent) = if options.compact {
        (" ", "")
    } else {
        ("\n", "\t")
    };

    write!(formatter, "{{{spacer}")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, "{}{spacer}", options.separator)?;
        }
        write!(formatter, "{indent}{element}")?;
    }
    if options.trailing_separator {
        formatter.write_str(&options.separator)?;
    }
    write!(formatter, "{spacer}}}")
}

/// A set paired with render options, implementing [`Display`](fmt::Display).
///
/// Created by [`Set::display_with`].
#[derive(Debug)]
pub struct Rendered<'a, T, M> {
    set: &'a Set<T, M>,
    options: RenderOptions,
}

impl<T: fmt::Display, M> fmt::Display for Rendered<'_, T, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elements(formatter, self.set, &self.options)
    }
}

impl<T: fmt::Display, M> Set<T, M> {
    /// Renders the set to a string under `options`.
    ///
    /// ```rust
    /// use seqset::render::RenderOptions;
    /// use seqset::UnorderedSet;
    ///
    /// let empty: UnorderedSet<i32> = UnorderedSet::new();
    /// assert_eq!(empty.render(&RenderOptions::default()), "{}");
    /// ```
    #[must_use]
    pub fn render(&self, options: &RenderOptions) -> String {
        self.display_with(options.clone()).to_string()
    }

    /// Returns a value that displays the set under `options`.
    ///
    /// ```rust
    /// use seqset::render::RenderOptions;
    /// use seqset::OrderedSet;
    ///
    /// let set = OrderedSet::<i32>::from([3, 1]);
    /// let options = RenderOptions::new().with_trailing_separator(true);
    /// assert_eq!(format!("sorted: {}", set.display_with(options)), "sorted: { 1, 3, }");
    /// ```
    #[must_use]
    pub const fn display_with(&self, options: RenderOptions) -> Rendered<'_, T, M> {
        Rendered { set: self, options }
    }
}

/// Renders with the default [`RenderOptions`]; the alternate flag (`{:#}`)
/// switches to one element per line.
impl<T: fmt::Display, M> fmt::Display for Set<T, M> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = if formatter.alternate() {
            RenderOptions::expanded()
        } else {
            RenderOptions::default()
        };
        write_elements(formatter, self, &options)
    }
}
