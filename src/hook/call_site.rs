use core::fmt::Debug;
use smallvec::SmallVec;
use std::panic::Location;

/// Where an absence or failure was created.
///
/// Built implicitly from `#[track_caller]` on every loud constructor and
/// combinator, which yields file, line and column. The [`call_site!`](crate::call_site)
/// macro additionally records the module path and the enclosing function, and
/// [`with_local`](CallSite::with_local) attaches values that are reported when
/// `capture_locals` is on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    file: &'static str,
    line: u32,
    column: u32,
    module: Option<&'static str>,
    function: Option<&'static str>,
    locals: Vec<(&'static str, String)>,
}

impl CallSite {
    /// The location of the outermost `#[track_caller]` frame.
    #[track_caller]
    #[inline]
    pub fn caller() -> Self {
        Self::from_location(Location::caller())
    }

    #[inline]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    #[inline]
    pub fn new(file: &'static str, line: u32, column: u32) -> Self {
        Self { file, line, column, module: None, function: None, locals: Vec::new() }
    }

    #[inline]
    #[must_use]
    pub fn with_module(mut self, module: &'static str) -> Self {
        self.module = Some(module);
        self
    }

    /// Records the enclosing function. A path such as `app::db::connect`
    /// is reduced to its last segment.
    #[inline]
    #[must_use]
    pub fn with_function(mut self, function: &'static str) -> Self {
        self.function = Some(function.rsplit("::").next().unwrap_or(function));
        self
    }

    #[must_use]
    pub fn with_local(mut self, name: &'static str, value: &dyn Debug) -> Self {
        self.locals.push((name, format!("{value:?}")));
        self
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    #[inline]
    pub fn module(&self) -> Option<&'static str> {
        self.module
    }

    #[inline]
    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    #[inline]
    pub fn locals(&self) -> &[(&'static str, String)] {
        &self.locals
    }

    /// Candidate keys into `libraries`, most specific first: the module path
    /// and each of its `::` prefixes, then the file's parent directory name.
    pub(crate) fn library_candidates(&self) -> SmallVec<[&'static str; 4]> {
        let mut candidates = SmallVec::new();
        if let Some(mut path) = self.module {
            loop {
                candidates.push(path);
                match path.rfind("::") {
                    Some(idx) => path = &path[..idx],
                    None => break,
                }
            }
        }
        candidates.extend(self.directory());
        candidates
    }

    /// The default library label when no override matches.
    pub(crate) fn default_library(&self) -> &'static str {
        self.module
            .map(|module| module.split("::").next().unwrap_or(module))
            .or_else(|| self.directory())
            .unwrap_or("unknown")
    }

    fn directory(&self) -> Option<&'static str> {
        let file = self.file;
        let parent = &file[..file.rfind(['/', '\\'])?];
        let name = match parent.rfind(['/', '\\']) {
            Some(idx) => &parent[idx + 1..],
            None => parent,
        };
        (!name.is_empty()).then_some(name)
    }
}

/// Reduces the type name of a function item declared inside another function
/// to the enclosing function's path. Used by [`call_site!`](crate::call_site).
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::f").unwrap_or(type_name);
    while let Some(outer) = name.strip_suffix("::{{closure}}") {
        name = outer;
    }
    name
}
