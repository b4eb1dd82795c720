//! BoxOracle -- object-safe dynamic dispatch wrapper for Oracle.
//!
//! 1. Define an object-safe `OracleDyn` trait with boxed futures
//! 2. Blanket-impl `OracleDyn` for all `T: Oracle`
//! 3. `BoxOracle` wraps `Box<dyn OracleDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use nova_types::error::OracleError;

use super::provider::Oracle;

/// Object-safe version of [`Oracle`] with a boxed future.
pub trait OracleDyn: Send + Sync {
    fn name(&self) -> &str;

    fn invoke_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, OracleError>> + Send + 'a>>;
}

impl<T: Oracle> OracleDyn for T {
    fn name(&self) -> &str {
        Oracle::name(self)
    }

    fn invoke_boxed<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, OracleError>> + Send + 'a>> {
        Box::pin(self.invoke(prompt))
    }
}

/// Type-erased oracle.
///
/// Lets the application pick the real subprocess oracle at startup while
/// tests hand in a scripted stub, without making every service generic
/// over the oracle type.
pub struct BoxOracle {
    inner: Box<dyn OracleDyn + Send + Sync>,
}

impl BoxOracle {
    pub fn new<T: Oracle + 'static>(oracle: T) -> Self {
        Self {
            inner: Box::new(oracle),
        }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub async fn invoke(&self, prompt: &str) -> Result<String, OracleError> {
        self.inner.invoke_boxed(prompt).await
    }
}
