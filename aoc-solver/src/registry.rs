//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Number of puzzle days in the event
pub const DAYS: usize = 25;

/// Slot index for `day`, or `None` outside 1..=25
#[inline]
fn calc_index(day: u8) -> Option<usize> {
    if day == 0 || day as usize > DAYS {
        return None;
    }
    Some((day - 1) as usize)
}

/// Thread-safe factory that parses input into a ready-to-solve instance
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub day: u8,
    pub parts: u8,
    pub tags: &'static [&'static str],
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    tags: &'static [&'static str],
}

/// Builder for a [`SolverRegistry`], rejecting duplicate and out-of-range days.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.trim())
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Echo>(3, &[])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(3, " hi \n").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "hi");
/// assert!(registry.create_solver(4, "").is_err());
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS).map(|_| None).collect(),
        }
    }

    /// Register a factory with an explicit part count
    pub fn register_factory<F>(
        mut self,
        day: u8,
        parts: u8,
        tags: &'static [&'static str],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(day).ok_or(RegistrationError::InvalidDay(day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(
        self,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(day, S::PARTS, tags, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(day, input)?))
        })
    }

    /// Register every plugin submitted via `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let grid_days = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                tracing::trace!(day = plugin.day, "registering solver plugin");
                self = plugin.solver.register_with(self, plugin.day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable day-indexed registry of solver factories
pub struct SolverRegistry {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `day`
    pub fn create_solver<'a>(
        &self,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(day).ok_or(SolverError::InvalidDay(day))?;

        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn contains(&self, day: u8) -> bool {
        self.get_info(day).is_some()
    }

    pub fn get_info(&self, day: u8) -> Option<FactoryInfo> {
        calc_index(day)
            .and_then(|i| self.entries[i].as_ref())
            .map(|e| FactoryInfo {
                day,
                parts: e.parts,
                tags: e.tags,
            })
    }

    /// Registered solvers in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| FactoryInfo {
                day: i as u8 + 1,
                parts: e.parts,
                tags: e.tags,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }
}

/// Object-safe registration hook, implemented for every [`Solver`].
///
/// Lets [`SolverPlugin`] hold solvers of different types behind one `&'static dyn`.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        day: u8,
        tags: &'static [&'static str],
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(day, tags)
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// Plugin information for automatic solver registration
///
/// Submitted by `#[derive(AutoRegisterSolver)]`; can also be written by hand:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin { day: 1, solver: &Solver, tags: &["easy"] }
/// }
/// ```
pub struct SolverPlugin {
    /// The day number (1-25)
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used for filtering, e.g. `"grid"` or `"graph"`
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AocParser, SolveError};

    struct Count;

    impl AocParser for Count {
        type SharedData<'a> = usize;

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().count())
        }
    }

    impl Solver for Count {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn test_invalid_day_rejected() {
        let err = SolverRegistryBuilder::new()
            .register_solver::<Count>(26, &[])
            .err();
        assert_eq!(err, Some(RegistrationError::InvalidDay(26)));
        let err = SolverRegistryBuilder::new()
            .register_solver::<Count>(0, &[])
            .err();
        assert_eq!(err, Some(RegistrationError::InvalidDay(0)));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = SolverRegistryBuilder::new()
            .register_solver::<Count>(5, &[])
            .and_then(|b| b.register_solver::<Count>(5, &[]))
            .err();
        assert_eq!(err, Some(RegistrationError::DuplicateSolver(5)));
    }

    #[test]
    fn test_lookup_errors() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Count>(2, &["demo"])
            .unwrap()
            .build();

        assert!(matches!(
            registry.create_solver(1, "x"),
            Err(SolverError::NotFound(1))
        ));
        assert!(matches!(
            registry.create_solver(30, "x"),
            Err(SolverError::InvalidDay(30))
        ));
        assert!(matches!(
            registry.create_solver(2, ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_info_and_solve() {
        let registry = SolverRegistryBuilder::new()
            .register_solver::<Count>(9, &["demo"])
            .unwrap()
            .build();

        let info: Vec<_> = registry.iter_info().collect();
        assert_eq!(info.len(), 1);
        assert_eq!(info[0].day, 9);
        assert_eq!(info[0].parts, 2);
        assert_eq!(info[0].tags, &["demo"]);

        let mut solver = registry.create_solver(9, "a\nb\nc").unwrap();
        assert_eq!(solver.day(), 9);
        assert_eq!(solver.solve(1).unwrap().answer, "3");
        assert!(matches!(
            solver.solve(2),
            Err(SolveError::PartNotImplemented(2))
        ));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }
}
