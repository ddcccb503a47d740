use crate::{Query, Uri};

impl Uri {
    /// Returns the scheme, e.g: `http`.
    #[inline]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the authority user.
    #[inline]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Returns the authority password.
    #[inline]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the authority host.
    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the authority port.
    #[inline]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the path, possibly empty, e.g: `/over/there`.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query mapping.
    #[inline]
    pub const fn query(&self) -> &Query {
        &self.query
    }

    /// Returns the fragment.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}
