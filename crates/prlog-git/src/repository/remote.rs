use crate::{Repository, Result};

impl Repository {
    /// # Errors
    ///
    /// Returns an error if the remote lookup fails.
    pub fn remote_url(&self) -> Result<Option<String>> {
        let Ok(remote) = self.inner.find_remote("origin") else {
            return Ok(None);
        };

        Ok(remote.url().map(String::from))
    }
}
