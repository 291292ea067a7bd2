/// Read access to an inbound dashboard request.
///
/// Hosts implement this over whatever request type their web framework
/// hands them. Parameter lookup is case-insensitive and covers query and
/// form parameters merged, first match wins.
pub trait RequestView {
    fn param(&self, name: &str) -> Option<&str>;

    fn header(&self, name: &str) -> Option<&str>;
}

impl<T: RequestView + ?Sized> RequestView for &T {
    fn param(&self, name: &str) -> Option<&str> {
        (**self).param(name)
    }

    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

/// Finds the first value whose name matches, ignoring ASCII case.
pub fn find_ignore_case<'a>(
    pairs: &'a [(String, String)],
    name: &str,
) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// A request held entirely in memory.
///
/// Useful for hosts that already collected their parameters, and for
/// tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRequest {
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl MemoryRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_param(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.params.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn with_header(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl RequestView for MemoryRequest {
    fn param(&self, name: &str) -> Option<&str> {
        find_ignore_case(&self.params, name)
    }

    fn header(&self, name: &str) -> Option<&str> {
        find_ignore_case(&self.headers, name)
    }
}
