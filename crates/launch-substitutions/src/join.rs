//! JoinSubstitutions: ordered substitutions joined by a separator.
//!
//! The algebraic operators (`+`, `*`, `+=`, `*=`) always produce a new
//! join and never touch the children of their operands; only
//! [`JoinSubstitutions::extend`] and [`JoinSubstitutions::set_join_symbol`]
//! mutate in place.
//!
//! Beware: this is not a path join. Joining path segments with `"/"` is
//! not platform independent.

use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign};

use launch_types::{Context, RepetitionFault, Result, SubstitutionError};

use crate::launch_configuration::LaunchConfiguration;
use crate::some_substitutions::SomeSubstitutions;
use crate::substitution::{Substitution, TextSubstitution};
use crate::utilities::normalize_to_list_of_substitutions;

// ══════════════════════════════════════════════════════════════════════════════
// JoinSubstitutions
// ══════════════════════════════════════════════════════════════════════════════

/// Substitution that joins other substitutions on evaluation.
#[derive(Debug, Clone, Default)]
pub struct JoinSubstitutions {
    substitutions: Vec<Substitution>,
    join_symbol: String,
}

impl JoinSubstitutions {
    /// Create a join, normalizing `substitutions` immediately.
    ///
    /// A nested list inside `substitutions` becomes its own join with an
    /// empty separator, so nesting groups rather than flattens.
    pub fn new(
        substitutions: impl Into<SomeSubstitutions>,
        join_symbol: impl Into<String>,
    ) -> Result<Self> {
        let mut join = Self::empty(join_symbol);
        join.extend(substitutions)?;
        Ok(join)
    }

    /// A join with no children.
    pub fn empty(join_symbol: impl Into<String>) -> Self {
        Self {
            substitutions: Vec::new(),
            join_symbol: join_symbol.into(),
        }
    }

    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    pub fn join_symbol(&self) -> &str {
        &self.join_symbol
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Change the separator used by future evaluations of this join.
    pub fn set_join_symbol(&mut self, symbol: impl Into<String>) {
        self.join_symbol = symbol.into();
    }

    /// Normalize `substitutions` and append them in place.
    ///
    /// On failure the join is left unchanged and the error carries this
    /// join's description.
    pub fn extend(&mut self, substitutions: impl Into<SomeSubstitutions>) -> Result<&mut Self> {
        let normalized =
            normalize_join_input(substitutions.into()).map_err(|e| e.within(self.describe()))?;
        tracing::trace!(
            added = normalized.len(),
            total = self.substitutions.len() + normalized.len(),
            "extended join"
        );
        self.substitutions.extend(normalized);
        Ok(self)
    }

    /// A new join holding this join's children followed by `other`.
    pub fn concat(&self, other: impl Into<SomeSubstitutions>) -> Result<Self> {
        let mut joined = self.clone();
        joined.extend(other)?;
        Ok(joined)
    }

    /// A new join holding `other` followed by this join's children, with
    /// this join's separator.
    pub fn rconcat(&self, other: impl Into<SomeSubstitutions>) -> Result<Self> {
        let mut joined = Self::new(other, self.join_symbol.clone())?;
        joined.substitutions.extend(self.substitutions.iter().cloned());
        Ok(joined)
    }

    /// A new join with this join as a child `times` times, sharing this
    /// join's separator. Zero gives an empty join.
    pub fn repeat(&self, times: impl Into<Repetition>) -> Result<Self> {
        let times = times.into().count().map_err(|reason| {
            SubstitutionError::InvalidRepetition {
                reason,
                description: self.describe(),
            }
        })?;
        Ok(self.repeated(times))
    }

    fn repeated(&self, times: usize) -> Self {
        let mut repeated = Self::empty(self.join_symbol.clone());
        for _ in 0..times {
            repeated.push(Substitution::Join(self.clone()));
        }
        repeated
    }

    fn push(&mut self, substitution: Substitution) {
        self.substitutions.push(substitution);
    }

    /// Renders as `JoinSubstitutions('<children joined by " + '<sep>' + ">')`.
    pub fn describe(&self) -> String {
        let separator = format!(" + '{}' + ", self.join_symbol);
        let children: Vec<String> = self.substitutions.iter().map(Substitution::describe).collect();
        format!("JoinSubstitutions('{}')", children.join(&separator))
    }

    /// Perform every child left to right and join the results.
    ///
    /// The first failing child aborts the whole evaluation.
    pub fn perform(&self, context: &dyn Context) -> Result<String> {
        let performed = self
            .substitutions
            .iter()
            .map(|sub| sub.perform(context))
            .collect::<Result<Vec<String>>>()?;
        Ok(performed.join(&self.join_symbol))
    }
}

/// Normalization for join input: like the flat normalizer, except that a
/// list nested inside a list becomes one child join with no separator.
fn normalize_join_input(substitutions: SomeSubstitutions) -> Result<Vec<Substitution>> {
    match substitutions {
        SomeSubstitutions::List(items) => {
            let mut normalized = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    SomeSubstitutions::List(group) => {
                        let group = JoinSubstitutions::new(SomeSubstitutions::List(group), "")?;
                        normalized.push(Substitution::Join(group));
                    }
                    other => normalized.extend(normalize_to_list_of_substitutions(other)?),
                }
            }
            Ok(normalized)
        }
        other => normalize_to_list_of_substitutions(other),
    }
}

/// Equal when it is the same join, or when both describe identically.
/// Equality is syntactic: `'ab'` and `'a' + '' + 'b'` differ.
impl PartialEq for JoinSubstitutions {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.describe() == other.describe()
    }
}

impl Eq for JoinSubstitutions {}

impl Hash for JoinSubstitutions {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.describe().hash(state);
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Repetition count
// ══════════════════════════════════════════════════════════════════════════════

/// Multiplier accepted by [`JoinSubstitutions::repeat`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Repetition {
    Integer(i64),
    Float(f64),
}

impl Repetition {
    /// Validate and convert to a count. Integral floats are accepted.
    pub fn count(self) -> std::result::Result<usize, RepetitionFault> {
        match self {
            Self::Integer(n) => usize::try_from(n).map_err(|_| RepetitionFault::Negative),
            Self::Float(n) => {
                if n < 0.0 {
                    Err(RepetitionFault::Negative)
                } else if !n.is_finite() || n.fract() != 0.0 {
                    Err(RepetitionFault::NonInteger)
                } else {
                    Ok(n as usize)
                }
            }
        }
    }
}

impl From<i64> for Repetition {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Repetition {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<u32> for Repetition {
    fn from(n: u32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<usize> for Repetition {
    fn from(n: usize) -> Self {
        Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Repetition {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Operands that always normalize to exactly one substitution, so the
/// operator forms can be infallible.
pub trait IntoSubstitution {
    fn into_substitution(self) -> Substitution;
}

impl IntoSubstitution for Substitution {
    fn into_substitution(self) -> Substitution {
        self
    }
}

impl IntoSubstitution for &str {
    fn into_substitution(self) -> Substitution {
        Substitution::Text(TextSubstitution::new(self))
    }
}

impl IntoSubstitution for String {
    fn into_substitution(self) -> Substitution {
        Substitution::Text(TextSubstitution::new(self))
    }
}

impl IntoSubstitution for TextSubstitution {
    fn into_substitution(self) -> Substitution {
        Substitution::Text(self)
    }
}

impl IntoSubstitution for LaunchConfiguration {
    fn into_substitution(self) -> Substitution {
        Substitution::LaunchConfiguration(self)
    }
}

impl IntoSubstitution for JoinSubstitutions {
    fn into_substitution(self) -> Substitution {
        Substitution::Join(self)
    }
}

impl IntoSubstitution for &JoinSubstitutions {
    fn into_substitution(self) -> Substitution {
        Substitution::Join(self.clone())
    }
}

impl<R: IntoSubstitution> Add<R> for &JoinSubstitutions {
    type Output = JoinSubstitutions;

    fn add(self, rhs: R) -> JoinSubstitutions {
        let mut joined = self.clone();
        joined.push(rhs.into_substitution());
        joined
    }
}

impl<R: IntoSubstitution> Add<R> for JoinSubstitutions {
    type Output = JoinSubstitutions;

    fn add(self, rhs: R) -> JoinSubstitutions {
        &self + rhs
    }
}

/// Rebinds to the result of `+`; the previous value is dropped, not
/// extended.
impl<R: IntoSubstitution> AddAssign<R> for JoinSubstitutions {
    fn add_assign(&mut self, rhs: R) {
        *self = &*self + rhs;
    }
}

impl Add<&JoinSubstitutions> for &str {
    type Output = JoinSubstitutions;

    fn add(self, rhs: &JoinSubstitutions) -> JoinSubstitutions {
        let mut joined = JoinSubstitutions::empty(rhs.join_symbol.clone());
        joined.push(self.into_substitution());
        joined.substitutions.extend(rhs.substitutions.iter().cloned());
        joined
    }
}

impl Add<JoinSubstitutions> for &str {
    type Output = JoinSubstitutions;

    fn add(self, rhs: JoinSubstitutions) -> JoinSubstitutions {
        self + &rhs
    }
}

impl Mul<usize> for &JoinSubstitutions {
    type Output = JoinSubstitutions;

    fn mul(self, times: usize) -> JoinSubstitutions {
        self.repeated(times)
    }
}

impl Mul<usize> for JoinSubstitutions {
    type Output = JoinSubstitutions;

    fn mul(self, times: usize) -> JoinSubstitutions {
        &self * times
    }
}

impl Mul<&JoinSubstitutions> for usize {
    type Output = JoinSubstitutions;

    fn mul(self, join: &JoinSubstitutions) -> JoinSubstitutions {
        join * self
    }
}

impl Mul<JoinSubstitutions> for usize {
    type Output = JoinSubstitutions;

    fn mul(self, join: JoinSubstitutions) -> JoinSubstitutions {
        &join * self
    }
}

impl MulAssign<usize> for JoinSubstitutions {
    fn mul_assign(&mut self, times: usize) {
        *self = &*self * times;
    }
}
